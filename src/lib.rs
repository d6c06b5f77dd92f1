//! # workspace_bump
//!
//! Interactive version bump for monorepo workspaces driven by an external
//! package manager (`uv` by default).
//!
//! One run reads the root version, asks the operator for a new one, discovers
//! the workspace members from the manifest, sets the version on the root and
//! on every member, and prints a summary table. A failure on one package never
//! stops the others, and nothing is rolled back.
//!
//! ## Usage
//!
//! ```bash
//! workspace-bump            # prompt for the new version
//! workspace-bump --help     # usage
//! RUST_LOG=debug workspace-bump
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod version;
pub mod workspace;

pub use cli::Args;
pub use config::EnvConfig;
pub use error::{BumpError, Result, ToolError};
pub use version::{CommandVersionTool, PackageRecord, UpdateReport, VersionTool, WorkspaceUpdater};
pub use workspace::WorkspaceManifest;
