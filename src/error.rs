//! Error types for workspace version bumps.
//!
//! Fatal errors (`BumpError`) stop the run before any package is touched.
//! Per-package failures (`ToolError`) are recorded in the report instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for workspace_bump operations
pub type Result<T> = std::result::Result<T, BumpError>;

/// Fatal errors raised before mutation begins
#[derive(Error, Debug)]
pub enum BumpError {
    /// Current version could not be read from the external tool
    #[error("Could not determine current version: {reason}")]
    Configuration {
        /// Reason for the error
        reason: String,
    },

    /// Operator-supplied version has the wrong shape
    #[error(
        "Invalid version format '{version}'. Expected MAJOR.MINOR.PATCH with an optional '.' or '-' suffix of alpha, beta, rc or dev plus an optional number"
    )]
    Validation {
        /// Rejected version string
        version: String,
    },

    /// No workspace members found in the manifest
    #[error("No workspace packages discovered in {}: {reason}", .manifest.display())]
    Discovery {
        /// Manifest that was scanned
        manifest: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// IO errors (prompt, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single external tool invocation
#[derive(Error, Debug)]
pub enum ToolError {
    /// Program could not be started
    #[error("failed to run '{command}': {source}")]
    Spawn {
        /// Rendered command line
        command: String,
        /// Spawn error
        #[source]
        source: std::io::Error,
    },

    /// Program ran and reported failure
    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        /// Rendered command line
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// Program succeeded but printed no version
    #[error("'{command}' printed no version")]
    EmptyOutput {
        /// Rendered command line
        command: String,
    },
}

impl BumpError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BumpError::Configuration { .. } => vec![
                "Run from the workspace root (the directory holding the manifest)".to_string(),
                "Check that the package manager is installed and on PATH".to_string(),
                "Override the program with WORKSPACE_BUMP_TOOL if it is not 'uv'".to_string(),
            ],
            BumpError::Validation { .. } => vec![
                "Use a version such as 1.2.3, 1.2.3-rc1 or 1.2.3.dev2".to_string(),
            ],
            BumpError::Discovery { .. } => vec![
                "Declare members under the workspace table, e.g. members = [\"libs/logger\"]"
                    .to_string(),
                "Point WORKSPACE_BUMP_MANIFEST or WORKSPACE_BUMP_SECTION at the right file/table"
                    .to_string(),
            ],
            BumpError::Io(_) => Vec::new(),
        }
    }
}
