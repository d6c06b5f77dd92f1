//! Command line argument parsing.
//!
//! The tool takes no arguments: `-h/--help` prints usage, anything else is
//! reported and ignored.

use clap::{CommandFactory, Parser};

/// Help flags recognised anywhere on the command line
const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// Interactive version bump for every package in a workspace
#[derive(Parser, Debug)]
#[command(
    name = "workspace-bump",
    about = "Set one version on the workspace root and every workspace member",
    long_about = "Set one version on the workspace root and every workspace member.

Reads the current version from the package manager, prompts for a new one,
discovers members from the workspace manifest and updates each of them.
Press Enter at the prompt to cancel.

Environment:
  WORKSPACE_BUMP_TOOL      package manager program (default: uv)
  WORKSPACE_BUMP_MANIFEST  workspace manifest (default: pyproject.toml)
  WORKSPACE_BUMP_SECTION   table holding `members` (default: tool.uv.workspace)
  RUST_LOG                 log filter, e.g. debug"
)]
pub struct Args {
    /// Unexpected arguments; accepted and ignored
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub ignored: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether a help flag was swallowed by the ignored arguments
    pub fn wants_help(&self) -> bool {
        self.ignored.iter().any(|arg| HELP_FLAGS.contains(&arg.as_str()))
    }

    /// Print long help to stdout
    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_long_help()
    }
}
