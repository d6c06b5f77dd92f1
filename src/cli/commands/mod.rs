//! Command execution.
//!
//! There is a single command; this module wires arguments, configuration and
//! the real package-manager tool into it and maps the result to an exit code.

mod bump;

pub use bump::{BumpOutcome, CANCELLED, PROMPT, execute_bump};

use crate::cli::{Args, OutputManager};
use crate::config::EnvConfig;
use crate::error::Result;
use crate::version::CommandVersionTool;
use tokio::io::BufReader;

/// Execute the bump based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    let output = OutputManager::new();

    if args.wants_help() {
        Args::print_help()?;
        return Ok(0);
    }

    if !args.ignored.is_empty() {
        output.warn(&format!(
            "Ignoring unexpected arguments: {}",
            args.ignored.join(" ")
        ))?;
    }

    let config = EnvConfig::from_env();
    let tool = CommandVersionTool::new(config.tool.clone());
    let stdin = BufReader::new(tokio::io::stdin());

    match execute_bump(&tool, &config, &output, stdin).await {
        Ok(outcome) => Ok(outcome.exit_code()),
        Err(e) => {
            output.error(&e.to_string());

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:")?;
                for suggestion in suggestions {
                    output.indent(&format!("• {}", suggestion))?;
                }
            }

            Ok(e.exit_code())
        }
    }
}
