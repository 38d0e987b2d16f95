use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Flags understood by the dispatcher itself. Name, description and the
/// subcommand listing are filled in at runtime by [`command`].
#[derive(Parser, Debug)]
#[command(disable_version_flag = true)]
pub struct DispatchArgs {
    /// Show the command's version and exit
    #[arg(long, conflicts_with = "subcommand")]
    pub version: bool,

    /// The subcommand to launch
    #[arg(value_name = "SUBCOMMAND")]
    pub subcommand: Option<String>,

    /// Arguments forwarded verbatim to the subcommand
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        requires = "subcommand"
    )]
    pub args: Vec<OsString>,
}

pub fn command(name: &str, description: &str) -> clap::Command {
    DispatchArgs::command()
        .name(name.to_string())
        .bin_name(name.to_string())
        .about(description.to_string())
        .mut_arg("version", |a| a.help(format!("Show the {name} command's version and exit")))
}

pub fn subcommands_epilog(names: &[String]) -> String {
    format!("Available subcommands: {}", names.join(" "))
}
