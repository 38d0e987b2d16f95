pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub trait PlatformOps: Sync + Send {
    /// Search path used when `PATH` is unset or empty.
    fn default_search_path(&self) -> &'static str;
    /// Directory where the toolchain installs binaries (the "scripts" dir).
    fn scripts_dir(&self) -> Option<PathBuf>;
    fn is_executable(&self, path: &Path) -> bool;
    /// File name as it should be matched against `<name>-...`.
    fn command_stem<'a>(&self, file_name: &'a str) -> &'a str;
    fn candidate_file_names(&self, base: &str) -> Vec<String>;
}

/// Cargo's bin directory, honouring the same overrides `cargo install` does.
pub(crate) fn cargo_bin_dir(home: Option<PathBuf>) -> Option<PathBuf> {
    let from_env = |key: &str| {
        std::env::var_os(key)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    };
    from_env("CARGO_INSTALL_ROOT")
        .or_else(|| from_env("CARGO_HOME"))
        .or_else(|| home.map(|h| h.join(".cargo")))
        .map(|root| root.join("bin"))
}

pub(crate) fn is_file(path: &Path) -> bool {
    fs_err::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

pub(crate) fn has_separator(s: &OsStr) -> bool {
    s.to_string_lossy()
        .contains(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR)
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
