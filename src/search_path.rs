//! Effective search path: inherited `PATH`, the dispatcher's own directory
//! in front and the toolchain's bin directory at the back.

use crate::context::ExecutionContext;
use crate::platform::platform;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered directories, earlier entries win. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPath(Vec<PathBuf>);

impl SearchPath {
    pub fn dirs(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub fn resolve_search_path(ctx: &ExecutionContext) -> SearchPath {
    let p = platform();
    let inherited = ctx
        .search_path_env
        .clone()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| OsString::from(p.default_search_path()));
    let mut dirs: Vec<PathBuf> = std::env::split_paths(&inherited).collect();

    if let Some(scripts) = &ctx.scripts_dir {
        dirs.push(scripts.clone());
    }

    for script in self_locations(ctx.self_path.as_deref()) {
        let Some(bindir) = script.parent() else { continue };
        if bindir.as_os_str().is_empty() {
            continue;
        }
        if bindir.is_dir() && p.is_executable(&script) {
            dirs.insert(0, bindir.to_path_buf());
        }
    }

    debug!(path = ?dirs, "resolved search path");
    SearchPath(dirs)
}

// The path as invoked, then its target when it is a symlink.
fn self_locations(self_path: Option<&Path>) -> Vec<PathBuf> {
    let Some(path) = self_path else { return Vec::new() };
    let mut scripts = vec![path.to_path_buf()];
    let is_link = fs_err::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        if let Ok(real) = fs_err::canonicalize(path) {
            scripts.push(real);
        }
    }
    scripts
}
