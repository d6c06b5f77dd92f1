//! Version handling: shape validation, the external version tool, and the
//! workspace-wide update loop.

mod tool;
mod updater;
mod validate;

pub use tool::{CommandVersionTool, VersionTool};
pub use updater::{PackageRecord, UNKNOWN_VERSION, UpdateReport, WorkspaceUpdater};
pub use validate::{PRERELEASE_TAGS, is_valid_version, validate_version};

#[cfg(test)]
pub(crate) use updater::tests::FakeTool;
