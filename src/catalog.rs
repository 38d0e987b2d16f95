//! Discovery of the subcommands available to `<name>`.

use crate::context::ExecutionContext;
use crate::platform::platform;
use crate::search_path::resolve_search_path;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, trace};

/// Hyphen-separated segments of a `<name>-a-b` filename: `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct CommandNameTuple(Vec<String>);

impl CommandNameTuple {
    pub(crate) fn segments(&self) -> &[String] {
        &self.0
    }

    fn strict_prefixes(&self) -> impl Iterator<Item = &[String]> {
        (1..self.0.len()).map(move |i| &self.0[..i])
    }

    fn joined(&self) -> String {
        self.segments().join("-")
    }
}

/// Split the part of `file_name` after `<name>-` into segments.
///
/// Returns `None` when the prefix does not match or nothing follows it
/// (a file called exactly `<name>-`). Empty interior segments are kept, so
/// `name-a--b` yields `["a", "", "b"]`.
pub(crate) fn parse_command_name(name: &str, file_name: &str) -> Option<CommandNameTuple> {
    let suffix = file_name.strip_prefix(name)?.strip_prefix('-')?;
    if suffix.is_empty() {
        return None;
    }
    Some(CommandNameTuple(
        suffix.split('-').map(str::to_string).collect(),
    ))
}

/// Drop every tuple that has one of its own strict prefixes in the set.
pub(crate) fn visible_names(found: &BTreeSet<CommandNameTuple>) -> Vec<String> {
    let mut names: Vec<String> = found
        .iter()
        .filter(|tuple| {
            !tuple
                .strict_prefixes()
                .any(|prefix| found.contains(&CommandNameTuple(prefix.to_vec())))
        })
        .map(CommandNameTuple::joined)
        .collect();
    names.sort();
    names
}

/// Sorted subcommand names for `name`, nested children of existing
/// subcommands excluded. Directories that cannot be read are skipped.
///
/// A name is decided by the first directory holding a regular file for it,
/// the same one [`crate::resolve`] would find. It is listed only when that
/// file is executable.
pub fn list_subcommands(name: &str, ctx: &ExecutionContext) -> Vec<String> {
    let mut decided = HashSet::new();
    let mut found = BTreeSet::new();
    for dir in &resolve_search_path(ctx) {
        for (stem, executable) in scan_dir(name, dir) {
            if !decided.insert(stem.clone()) {
                continue;
            }
            if !executable {
                trace!("{stem} in {} is not executable", dir.display());
                continue;
            }
            if let Some(tuple) = parse_command_name(name, &stem) {
                found.insert(tuple);
            }
        }
    }
    visible_names(&found)
}

// Regular files in `dir` starting with `name`, keyed by command stem. A stem
// counts as executable when any of its files is.
fn scan_dir(name: &str, dir: &Path) -> BTreeMap<String, bool> {
    let p = platform();
    let mut stems = BTreeMap::new();
    let entries = match fs_err::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("skipping {}: {e}", dir.display());
            return stems;
        }
    };
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else { continue };
        if !file_name.starts_with(name) {
            continue;
        }
        let path = entry.path();
        if !crate::platform::is_file(&path) {
            continue;
        }
        let executable = p.is_executable(&path);
        trace!(candidate = %path.display(), executable, "found subcommand file");
        *stems
            .entry(p.command_stem(file_name).to_string())
            .or_insert(false) |= executable;
    }
    stems
}
