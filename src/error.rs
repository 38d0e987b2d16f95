//! Errors surfaced by subcommand dispatch.

use std::path::PathBuf;
use thiserror::Error;

/// Every failure is terminal for the invocation; nothing here is retried.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("{} command `{name}-{subcommand}` not found.", capitalize(.name))]
    CommandNotFound { name: String, subcommand: String },

    #[error("{} command `{name}-{subcommand}` is not executable.", capitalize(.name))]
    CommandNotExecutable {
        name: String,
        subcommand: String,
        path: PathBuf,
    },

    #[error(
        "Error executing {} command {subcommand}: {source}. errno={}",
        capitalize(.name),
        errno(.source)
    )]
    LaunchFailure {
        name: String,
        subcommand: String,
        #[source]
        source: std::io::Error,
    },

    #[error("subcommand is required")]
    SubcommandRequired,

    #[error("This executable is meant to be symlinked and not directly executed")]
    DirectInvocation,

    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl DispatchError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// Print the diagnostic to stderr the way the user should see it.
    pub fn report(&self) {
        match self {
            DispatchError::Usage(e) => {
                let _ = e.print();
            }
            other => eprintln!("{other}"),
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// `jup` -> `Jup`, used in user-facing messages.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn errno(err: &std::io::Error) -> String {
    err.raw_os_error()
        .map(|code| code.to_string())
        .unwrap_or_else(|| "None".to_string())
}
