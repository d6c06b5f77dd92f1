//! Workspace-wide version update loop.
//!
//! Root first, then every member in discovery order. Failures are recorded
//! per package and never stop the loop; nothing is rolled back.

use crate::version::VersionTool;

/// Previous version shown when a member's version cannot be read
pub const UNKNOWN_VERSION: &str = "unknown";

/// Outcome of updating one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Package identifier (root label for the root record)
    pub name: String,
    /// Version before the update
    pub previous_version: String,
    /// Version after the update; equals `previous_version` on failure
    pub new_version: String,
    /// Whether `set version` succeeded
    pub succeeded: bool,
    /// Whether this is the workspace root
    pub is_root: bool,
}

/// Ordered records for one run, root first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    records: Vec<PackageRecord>,
}

impl UpdateReport {
    /// All records in update order
    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }

    /// Number of packages attempted
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of packages updated successfully
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.succeeded).count()
    }

    /// Number of packages that failed
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// True when every package was updated
    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    fn push(&mut self, record: PackageRecord) {
        self.records.push(record);
    }
}

/// Drives a `VersionTool` across the root and every member
pub struct WorkspaceUpdater<'a, T: VersionTool> {
    tool: &'a T,
}

impl<'a, T: VersionTool> WorkspaceUpdater<'a, T> {
    /// Create an updater over `tool`
    pub fn new(tool: &'a T) -> Self {
        Self { tool }
    }

    /// Set `new_version` on the root and on each of `members`.
    ///
    /// `root_name` labels the root record; `root_version` is the version read
    /// before the operator was prompted.
    pub async fn update_all(
        &self,
        root_name: &str,
        root_version: &str,
        members: &[String],
        new_version: &str,
    ) -> UpdateReport {
        let mut report = UpdateReport::default();

        // Root has no package qualifier; its version was read before the prompt
        let root = self
            .apply(None, root_name, root_version.to_string(), new_version, true)
            .await;
        report.push(root);

        for member in members {
            // An unreadable version is not fatal, the set is still attempted
            let previous = match self.tool.get_version(Some(member)).await {
                Ok(version) => version,
                Err(e) => {
                    log::warn!("Could not read version of '{}': {}", member, e);
                    UNKNOWN_VERSION.to_string()
                }
            };
            let record = self
                .apply(Some(member), member, previous, new_version, false)
                .await;
            report.push(record);
        }

        report
    }

    async fn apply(
        &self,
        package: Option<&str>,
        name: &str,
        previous_version: String,
        new_version: &str,
        is_root: bool,
    ) -> PackageRecord {
        let succeeded = match self.tool.set_version(package, new_version).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to set version of '{}': {}", name, e);
                false
            }
        };

        // No rollback: a failed package simply keeps its old version
        PackageRecord {
            name: name.to_string(),
            new_version: if succeeded {
                new_version.to_string()
            } else {
                previous_version.clone()
            },
            previous_version,
            succeeded,
            is_root,
        }
    }
}
