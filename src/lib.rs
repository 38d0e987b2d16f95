//! Git-style subcommand dispatch.
//!
//! A dispatcher named `<name>` implements nothing itself: `<name> foo args..`
//! finds an executable called `<name>-foo` on the search path and hands the
//! process over to it. New subcommands are added by dropping executables
//! next to the dispatcher or anywhere on `PATH`.
//!
//! ```no_run
//! argpoints::Dispatcher::new("jup")
//!     .description("Jupyter-style tool family")
//!     .version(env!("CARGO_PKG_VERSION"))
//!     .main();
//! ```

pub mod catalog;
pub mod cli;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod launch;
pub mod logging;
mod platform;
pub mod resolver;
pub mod search_path;

pub use catalog::list_subcommands;
pub use context::ExecutionContext;
pub use dispatch::{Dispatcher, Invocation, GENERIC_NAME};
pub use error::{DispatchError, DispatchResult};
pub use launch::{default_launcher, Launcher, SpawnLauncher};
#[cfg(unix)]
pub use launch::ExecLauncher;
pub use resolver::{resolve, resolve_in, ResolvedCommand};
pub use search_path::{resolve_search_path, SearchPath};
