use crate::platform::{cargo_bin_dir, PlatformOps};
use nix::unistd::{access, AccessFlags};
use std::path::{Path, PathBuf};

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn default_search_path(&self) -> &'static str {
        "/bin:/usr/bin"
    }
    fn scripts_dir(&self) -> Option<PathBuf> {
        cargo_bin_dir(dirs::home_dir())
    }
    fn is_executable(&self, path: &Path) -> bool {
        // access(2) checks against the real uid, same as a shell would
        access(path, AccessFlags::X_OK).is_ok()
    }
    fn command_stem<'a>(&self, file_name: &'a str) -> &'a str {
        file_name
    }
    fn candidate_file_names(&self, base: &str) -> Vec<String> {
        vec![base.to_string()]
    }
}
