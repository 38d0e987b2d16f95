//! Handing control to a resolved subcommand.
//!
//! On unix the dispatcher replaces itself with the target (`execv`), so the
//! subcommand's exit status is the dispatcher's. Elsewhere the target is
//! spawned as a child and its exit code relayed once it finishes.

use crate::error::{DispatchError, DispatchResult};
use crate::resolver::ResolvedCommand;
use std::ffi::OsString;
use std::process::{Command, ExitStatus};
use tracing::info;

pub trait Launcher {
    /// Run `target` with `args` (arguments after the subcommand name).
    ///
    /// Returns the exit code to terminate with. Replacing launchers only
    /// return on failure.
    fn launch(&self, name: &str, target: &ResolvedCommand, args: &[OsString]) -> DispatchResult<i32>;
}

pub fn default_launcher() -> &'static dyn Launcher {
    #[cfg(unix)]
    {
        &ExecLauncher
    }
    #[cfg(not(unix))]
    {
        &SpawnLauncher
    }
}

fn launch_failure(name: &str, target: &ResolvedCommand, source: std::io::Error) -> DispatchError {
    DispatchError::LaunchFailure {
        name: name.to_string(),
        subcommand: target.subcommand().to_string(),
        source,
    }
}

/// Process image replacement.
#[cfg(unix)]
pub struct ExecLauncher;

#[cfg(unix)]
impl Launcher for ExecLauncher {
    fn launch(&self, name: &str, target: &ResolvedCommand, args: &[OsString]) -> DispatchResult<i32> {
        use std::os::unix::process::CommandExt;
        info!(path = %target.path().display(), "exec {name}-{}", target.subcommand());
        // argv[0] of the target is the subcommand as the user typed it
        let err = Command::new(target.path())
            .arg0(target.subcommand())
            .args(args)
            .exec();
        Err(launch_failure(name, target, err))
    }
}

/// Spawn, wait and relay the exit code.
pub struct SpawnLauncher;

impl Launcher for SpawnLauncher {
    fn launch(&self, name: &str, target: &ResolvedCommand, args: &[OsString]) -> DispatchResult<i32> {
        info!(path = %target.path().display(), "spawn {name}-{}", target.subcommand());
        let mut child = Command::new(target.path())
            .args(args)
            .spawn()
            .map_err(|e| launch_failure(name, target, e))?;
        // After spawning, so the child does not inherit the ignore disposition.
        ignore_interrupts();
        let status = child.wait().map_err(|e| launch_failure(name, target, e))?;
        Ok(exit_code(status))
    }
}

#[cfg(unix)]
fn ignore_interrupts() {
    use nix::sys::signal::{signal, SigHandler, Signal};
    // SAFETY: SIG_IGN installs no Rust handler, nothing can run concurrently.
    if let Err(e) = unsafe { signal(Signal::SIGINT, SigHandler::SigIgn) } {
        tracing::warn!("could not ignore SIGINT: {e}");
    }
}

#[cfg(windows)]
fn ignore_interrupts() {
    use windows_sys::Win32::System::Console::SetConsoleCtrlHandler;
    // SAFETY: a null handler with TRUE only flips the process-wide ignore flag.
    if unsafe { SetConsoleCtrlHandler(None, 1) } == 0 {
        tracing::warn!("could not ignore Ctrl-C: {}", std::io::Error::last_os_error());
    }
}

#[cfg(not(any(unix, windows)))]
fn ignore_interrupts() {}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
