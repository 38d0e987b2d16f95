use crate::platform::{cargo_bin_dir, PlatformOps};
use std::path::{Path, PathBuf};

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

fn pathext() -> Vec<String> {
    std::env::var("PATHEXT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PATHEXT.to_string())
        .split(';')
        .filter(|e| !e.is_empty())
        .map(|e| e.to_ascii_lowercase())
        .collect()
}

/// Length of the `PATHEXT` extension `file_name` ends with, if any.
fn launchable_ext_len(file_name: &str) -> Option<usize> {
    let lower = file_name.to_ascii_lowercase();
    pathext()
        .into_iter()
        .find(|e| lower.len() > e.len() && lower.ends_with(e.as_str()))
        .map(|e| e.len())
}

impl PlatformOps for Windows {
    fn default_search_path(&self) -> &'static str { ".;C:\\bin" }
    fn scripts_dir(&self) -> Option<PathBuf> { cargo_bin_dir(dirs::home_dir()) }
    fn is_executable(&self, path: &Path) -> bool {
        // No execute bit: the extension decides what the OS will run
        let launchable = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(launchable_ext_len)
            .is_some();
        launchable && crate::platform::is_file(path)
    }
    fn command_stem<'a>(&self, file_name: &'a str) -> &'a str {
        match launchable_ext_len(file_name) {
            Some(len) => &file_name[..file_name.len() - len],
            None => file_name,
        }
    }
    fn candidate_file_names(&self, base: &str) -> Vec<String> {
        if launchable_ext_len(base).is_some() {
            return vec![base.to_string()];
        }
        let mut names: Vec<String> = pathext().iter().map(|e| format!("{base}{e}")).collect();
        names.push(base.to_string());
        names
    }
}
