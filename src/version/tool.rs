//! External version-management tool.
//!
//! `VersionTool` is the seam between the update loop and the package
//! manager; `CommandVersionTool` drives a real `uv`-style binary.

use crate::error::ToolError;
use tokio::process::Command;

/// Get/set package versions through an external package manager.
///
/// `package = None` addresses the workspace root.
#[allow(async_fn_in_trait)]
pub trait VersionTool {
    /// Read the version of `package` (or the root)
    async fn get_version(&self, package: Option<&str>) -> Result<String, ToolError>;

    /// Set the version of `package` (or the root) to `value`
    async fn set_version(&self, package: Option<&str>, value: &str) -> Result<(), ToolError>;
}

/// `VersionTool` backed by subprocess invocations of `<program> version ...`
#[derive(Debug, Clone)]
pub struct CommandVersionTool {
    program: String,
}

impl CommandVersionTool {
    /// Create a tool that invokes `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for `get version`
    pub fn get_args(package: Option<&str>) -> Vec<String> {
        let mut args = vec!["version".to_string(), "--short".to_string()];
        if let Some(package) = package {
            args.push("--package".to_string());
            args.push(package.to_string());
        }
        args
    }

    /// Arguments for `set version`
    pub fn set_args(package: Option<&str>, value: &str) -> Vec<String> {
        let mut args = vec!["version".to_string()];
        if let Some(package) = package {
            args.push("--package".to_string());
            args.push(package.to_string());
        }
        args.push(value.to_string());
        args
    }

    fn render(&self, args: &[String]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }

    async fn invoke(&self, args: &[String]) -> Result<String, ToolError> {
        let command = self.render(args);
        log::debug!("Running {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|source| ToolError::Spawn {
                command: command.clone(),
                source,
            })?;

        log::debug!("{} exited with {}", command, output.status);

        if !output.status.success() {
            return Err(ToolError::Failed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionTool for CommandVersionTool {
    async fn get_version(&self, package: Option<&str>) -> Result<String, ToolError> {
        let args = Self::get_args(package);
        let stdout = self.invoke(&args).await?;

        // Some tools print "<name> <version>" even with --short
        match stdout.lines().last().and_then(|line| line.split_whitespace().last()) {
            Some(version) => Ok(version.to_string()),
            None => Err(ToolError::EmptyOutput {
                command: self.render(&args),
            }),
        }
    }

    async fn set_version(&self, package: Option<&str>, value: &str) -> Result<(), ToolError> {
        self.invoke(&Self::set_args(package, value)).await.map(|_| ())
    }
}
