#![allow(dead_code)]

use argpoints::ExecutionContext;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A shell script that prints its name and arguments.
pub fn write_exec(dir: &Path, file_name: &str) -> PathBuf {
    write_with_mode(dir, file_name, "#!/bin/sh\necho \"$(basename \"$0\") $*\"\n", 0o755)
}

pub fn write_script(dir: &Path, file_name: &str, body: &str) -> PathBuf {
    write_with_mode(dir, file_name, &format!("#!/bin/sh\n{body}\n"), 0o755)
}

pub fn write_plain(dir: &Path, file_name: &str) -> PathBuf {
    write_with_mode(dir, file_name, "not a program\n", 0o644)
}

fn write_with_mode(dir: &Path, file_name: &str, contents: &str, mode: u32) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    fs::write(&path, contents).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

/// Temp root with named sub directories, created on demand.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            root: TempDir::new().unwrap(),
        }
    }

    pub fn dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Context whose `PATH` is exactly `dirs`, with no self path or scripts dir.
    pub fn context(&self, dirs: &[&PathBuf]) -> ExecutionContext {
        let path = std::env::join_paths(dirs).unwrap();
        ExecutionContext::default()
            .with_search_path(path)
            .without_scripts_dir()
    }
}
