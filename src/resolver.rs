//! Resolution of one subcommand name to the executable implementing it.

use crate::context::ExecutionContext;
use crate::error::{DispatchError, DispatchResult};
use crate::platform::{has_separator, platform};
use crate::search_path::{resolve_search_path, SearchPath};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A verified executable for `<name>-<subcommand>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    subcommand: String,
    path: PathBuf,
}

impl ResolvedCommand {
    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }

    /// Absolute path of the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn resolve(
    name: &str,
    subcommand: &str,
    ctx: &ExecutionContext,
) -> DispatchResult<ResolvedCommand> {
    let search_path = resolve_search_path(ctx);
    resolve_in(name, subcommand, &search_path)
}

/// Same as [`resolve`] against an already built search path.
pub fn resolve_in(
    name: &str,
    subcommand: &str,
    search_path: &SearchPath,
) -> DispatchResult<ResolvedCommand> {
    let not_found = || DispatchError::CommandNotFound {
        name: name.to_string(),
        subcommand: subcommand.to_string(),
    };
    // "../x" would otherwise be looked up relative to each directory
    if subcommand.is_empty() || has_separator(OsStr::new(subcommand)) {
        return Err(not_found());
    }

    let p = platform();
    let base = format!("{name}-{subcommand}");
    let candidates = p.candidate_file_names(&base);
    let found = search_path
        .iter()
        .flat_map(|dir| candidates.iter().map(move |file| dir.join(file)))
        .inspect(|candidate| trace!(candidate = %candidate.display(), "probing"))
        .find(|candidate| crate::platform::is_file(candidate));

    let Some(found) = found else {
        debug!(path = ?search_path.dirs(), "{base} not found");
        return Err(not_found());
    };

    if !p.is_executable(&found) {
        return Err(DispatchError::CommandNotExecutable {
            name: name.to_string(),
            subcommand: subcommand.to_string(),
            path: found,
        });
    }

    let path = std::path::absolute(&found).unwrap_or(found);
    debug!(path = %path.display(), "resolved {base}");
    Ok(ResolvedCommand {
        subcommand: subcommand.to_string(),
        path,
    })
}
