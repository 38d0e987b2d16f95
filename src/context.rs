//! Snapshot of the process state that dispatch depends on.
//!
//! The core never reads the environment directly: everything it needs lives
//! in an [`ExecutionContext`], which is captured once in `main` and can be
//! assembled by hand in tests.

use crate::platform::{has_separator, platform};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    /// Raw value of `PATH`, if set.
    pub search_path_env: Option<OsString>,
    /// Full argument vector, program name included.
    pub args: Vec<OsString>,
    /// Location of the running dispatcher, as invoked (may be a symlink).
    pub self_path: Option<PathBuf>,
    /// Toolchain bin directory appended at lowest priority.
    pub scripts_dir: Option<PathBuf>,
}

impl ExecutionContext {
    pub fn capture() -> Self {
        let args: Vec<OsString> = std::env::args_os().collect();
        let search_path_env = std::env::var_os("PATH");
        let self_path = args
            .first()
            .and_then(|argv0| locate_self(argv0, search_path_env.as_ref()))
            .or_else(|| std::env::current_exe().ok());
        let ctx = ExecutionContext {
            search_path_env,
            args,
            self_path,
            scripts_dir: platform().scripts_dir(),
        };
        trace!(?ctx, "captured execution context");
        ctx
    }

    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path_env = Some(path.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_self_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.self_path = Some(path.into());
        self
    }

    pub fn with_scripts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scripts_dir = Some(dir.into());
        self
    }

    pub fn without_scripts_dir(mut self) -> Self {
        self.scripts_dir = None;
        self
    }

    /// Name the dispatcher was invoked as, without directory or executable extension.
    pub fn invoked_name(&self) -> Option<String> {
        let argv0 = PathBuf::from(self.args.first()?);
        let file_name = argv0.file_name()?.to_str()?;
        Some(platform().command_stem(file_name).to_string())
    }
}

// A bare argv[0] means the shell found us on PATH; repeat that lookup so a
// symlinked dispatcher reports the link, not its target.
fn locate_self(argv0: &OsString, path: Option<&OsString>) -> Option<PathBuf> {
    if argv0.is_empty() {
        return None;
    }
    if has_separator(argv0) {
        return Some(PathBuf::from(argv0));
    }
    let cwd = std::env::current_dir().ok()?;
    which::which_in(argv0, path, cwd).ok()
}
