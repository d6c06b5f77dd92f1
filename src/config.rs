//! Environment-driven configuration.
//!
//! The CLI ignores unknown arguments, so every tunable lives in the
//! environment instead of on the command line.

use std::path::PathBuf;

/// Environment variable naming the package-manager program
pub const TOOL_ENV: &str = "WORKSPACE_BUMP_TOOL";
/// Environment variable naming the workspace manifest
pub const MANIFEST_ENV: &str = "WORKSPACE_BUMP_MANIFEST";
/// Environment variable naming the workspace table inside the manifest
pub const SECTION_ENV: &str = "WORKSPACE_BUMP_SECTION";

/// Default package-manager program
pub const DEFAULT_TOOL: &str = "uv";
/// Default workspace manifest, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "pyproject.toml";
/// Default workspace table
pub const DEFAULT_SECTION: &str = "tool.uv.workspace";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// External program exposing `version` get/set
    pub tool: String,
    /// Manifest scanned for workspace members
    pub manifest: PathBuf,
    /// Table header (without brackets) holding `members`
    pub section: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl EnvConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary lookup; empty values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        let config = Self {
            tool: get(TOOL_ENV).unwrap_or(defaults.tool),
            manifest: get(MANIFEST_ENV).map(PathBuf::from).unwrap_or(defaults.manifest),
            section: get(SECTION_ENV)
                .map(|s| s.trim_start_matches('[').trim_end_matches(']').to_string())
                .unwrap_or(defaults.section),
        };
        log::debug!("Resolved configuration: {:?}", config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = EnvConfig::from_lookup(|_| None);
        assert_eq!(config, EnvConfig::default());
        assert_eq!(config.tool, "uv");
        assert_eq!(config.manifest, PathBuf::from("pyproject.toml"));
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let env: HashMap<&str, &str> = [
            (TOOL_ENV, "/opt/bin/uv"),
            (MANIFEST_ENV, "   "),
            (SECTION_ENV, "[workspace]"),
        ]
        .into_iter()
        .collect();

        let config = EnvConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.tool, "/opt/bin/uv");
        assert_eq!(config.manifest, PathBuf::from(DEFAULT_MANIFEST));
        assert_eq!(config.section, "workspace");
    }
}
