//! Workspace manifest scanning.

mod discovery;

pub use discovery::{
    DEFAULT_ROOT_NAME, WorkspaceManifest, discover_members, discover_root_name, package_identifier,
};
