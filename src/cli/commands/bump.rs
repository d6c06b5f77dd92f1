//! Bump command implementation.
//!
//! Read current version, prompt, validate, discover, update, report. Every
//! fatal check happens before the first `set version` call.

use crate::cli::OutputManager;
use crate::config::EnvConfig;
use crate::error::{BumpError, Result};
use crate::report::{render_banner, render_count, render_table};
use crate::version::{UpdateReport, VersionTool, WorkspaceUpdater, validate_version};
use crate::workspace::WorkspaceManifest;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Prompt shown before reading the new version
pub const PROMPT: &str = "Enter new version (leave empty to cancel): ";
/// Message printed when the operator cancels
pub const CANCELLED: &str = "Operation cancelled.";

/// How a bump run ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOutcome {
    /// Operator entered nothing; no package was touched
    Cancelled,
    /// Every package was attempted
    Completed(UpdateReport),
}

impl BumpOutcome {
    /// Process exit code: 0 for cancellation and for completed runs, even partial ones
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Run one interactive bump against `tool`, reading the answer from `input`
pub async fn execute_bump<T, R>(
    tool: &T,
    config: &EnvConfig,
    output: &OutputManager,
    mut input: R,
) -> Result<BumpOutcome>
where
    T: VersionTool,
    R: AsyncBufRead + Unpin,
{
    // Fatal checks first: nothing below may fail once `set version` starts
    let current = tool
        .get_version(None)
        .await
        .map_err(|e| BumpError::Configuration {
            reason: e.to_string(),
        })?;

    output.info(&format!("Current version: {}", current))?;
    output.prompt(PROMPT)?;

    // EOF leaves `raw` empty, which cancels
    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw).await?;
    let answer = String::from_utf8(raw).map_err(|e| BumpError::Validation {
        version: String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
    })?;
    let answer = answer.trim();

    if answer.is_empty() {
        output.println("")?;
        output.println(CANCELLED)?;
        return Ok(BumpOutcome::Cancelled);
    }

    let new_version = validate_version(answer)?;
    let manifest = WorkspaceManifest::load(&config.manifest, &config.section)?;

    output.section(&format!("Bumping {} -> {}", current, new_version))?;
    output.info(&format!(
        "Updating {} (root) and {} member(s) from {}: {}",
        manifest.root_name,
        manifest.members.len(),
        manifest.path.display(),
        manifest.members.join(", ")
    ))?;

    // Mutation starts here
    let report = WorkspaceUpdater::new(tool)
        .update_all(&manifest.root_name, &current, &manifest.members, new_version)
        .await;

    let printed = print_report(output, &report);
    Ok(finish(report, printed))
}

/// Packages are already updated; a broken stdout must not turn this into a failure
fn finish(report: UpdateReport, printed: std::io::Result<()>) -> BumpOutcome {
    if let Err(e) = printed {
        log::warn!("Failed to print update report: {}", e);
    }
    BumpOutcome::Completed(report)
}

fn print_report(output: &OutputManager, report: &UpdateReport) -> std::io::Result<()> {
    output.println("")?;
    output.println(render_table(report).trim_end())?;
    output.println(&render_count(report))?;
    if report.all_succeeded() {
        output.success(&render_banner(report))
    } else {
        output.warn(&render_banner(report))
    }
}
