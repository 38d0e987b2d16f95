use crate::catalog::list_subcommands;
use crate::cli::{command, subcommands_epilog, DispatchArgs};
use crate::context::ExecutionContext;
use crate::error::{DispatchError, DispatchResult};
use crate::launch::{default_launcher, Launcher};
use crate::resolver::{resolve, ResolvedCommand};
use clap::{error::ErrorKind, FromArgMatches};
use std::ffi::OsString;
use tracing::debug;

/// Name of the stock dispatcher binary; it only works through a symlink.
pub const GENERIC_NAME: &str = "generic_subcommand";

/// What a single invocation of `<name>` amounts to.
#[derive(Debug)]
pub enum Invocation {
    /// `--version`: the line to print.
    Version(String),
    /// `-h/--help`: rendered help, subcommand listing included.
    Help(String),
    Launch {
        target: ResolvedCommand,
        args: Vec<OsString>,
    },
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    name: String,
    description: Option<String>,
    version: Option<String>,
}

impl Dispatcher {
    pub fn new(name: impl Into<String>) -> Self {
        Dispatcher {
            name: name.into(),
            description: None,
            version: None,
        }
    }

    /// Dispatcher named after how the process was invoked (`argv[0]`).
    pub fn from_invocation(ctx: &ExecutionContext) -> DispatchResult<Self> {
        let name = ctx.invoked_name().unwrap_or_else(|| GENERIC_NAME.to_string());
        if name == GENERIC_NAME {
            return Err(DispatchError::DirectInvocation);
        }
        Ok(Dispatcher::new(name))
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn about(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Subcommand parser for '{}' command", self.name))
    }

    fn command(&self) -> clap::Command {
        command(&self.name, &self.about())
    }

    /// Work out what `ctx.args` asks for without side effects beyond
    /// filesystem reads. The subcommand listing is only built for help.
    pub fn plan(&self, ctx: &ExecutionContext) -> DispatchResult<Invocation> {
        let args = &ctx.args;
        let (subcommand, rest) = match args.get(1).and_then(|a| a.to_str()) {
            // A leading subcommand is taken as-is so flags after it reach the subcommand.
            Some(first) if !first.starts_with('-') => (first.to_string(), args[2..].to_vec()),
            _ => {
                let parsed = match self.parse_flags(ctx)? {
                    Ok(parsed) => parsed,
                    Err(help) => return Ok(Invocation::Help(help)),
                };
                if parsed.version {
                    return Ok(Invocation::Version(self.version_line()));
                }
                (parsed.subcommand.unwrap_or_default(), parsed.args)
            }
        };
        if subcommand.is_empty() {
            return Err(DispatchError::SubcommandRequired);
        }
        debug!(name = %self.name, %subcommand, "resolving");
        let target = resolve(&self.name, &subcommand, ctx)?;
        Ok(Invocation::Launch { target, args: rest })
    }

    // Ok(Err(help)) when help was requested.
    fn parse_flags(&self, ctx: &ExecutionContext) -> DispatchResult<Result<DispatchArgs, String>> {
        match self.command().try_get_matches_from(&ctx.args) {
            Ok(matches) => Ok(Ok(DispatchArgs::from_arg_matches(&matches)?)),
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                Ok(Err(self.help(list_subcommands(&self.name, ctx))))
            }
            Err(e) => Err(DispatchError::Usage(e)),
        }
    }

    fn help(&self, subcommands: Vec<String>) -> String {
        self.command()
            .after_help(subcommands_epilog(&subcommands))
            .render_help()
            .to_string()
    }

    pub fn version_line(&self) -> String {
        let version = self.version.as_deref().unwrap_or("unknown");
        format!("{:<17}: {version}", self.name)
    }

    pub fn usage(&self) -> String {
        self.command().render_usage().to_string()
    }

    /// Plan and carry out the invocation. Returns the exit code.
    pub fn run(&self, ctx: &ExecutionContext, launcher: &dyn Launcher) -> DispatchResult<i32> {
        match self.plan(ctx) {
            Ok(Invocation::Version(line)) => {
                println!("{line}");
                Ok(0)
            }
            Ok(Invocation::Help(help)) => {
                print!("{help}");
                Ok(0)
            }
            Ok(Invocation::Launch { target, args }) => launcher.launch(&self.name, &target, &args),
            Err(DispatchError::SubcommandRequired) => {
                eprintln!("{}", self.usage());
                Err(DispatchError::SubcommandRequired)
            }
            Err(e) => Err(e),
        }
    }

    /// Entry point for dispatcher binaries: capture the process state,
    /// dispatch and exit with the resulting code.
    pub fn main(self) -> ! {
        crate::logging::init();
        let ctx = ExecutionContext::capture();
        let code = match self.run(&ctx, default_launcher()) {
            Ok(code) => code,
            Err(e) => {
                e.report();
                e.exit_code()
            }
        };
        std::process::exit(code)
    }
}
