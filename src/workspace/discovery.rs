//! Workspace member discovery.
//!
//! A line scanner over the manifest: find the workspace table, read the
//! quoted entries of its `members` array, stop at the closing bracket or at
//! the next table header.

use crate::error::{BumpError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Label used for the root row when the manifest has no `[project]` name
pub const DEFAULT_ROOT_NAME: &str = "workspace";

static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z](?:[A-Za-z0-9_-]*[A-Za-z0-9])?$").expect("package name regex is valid")
});

/// Members and root label read from a workspace manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceManifest {
    /// Path the manifest was read from
    pub path: PathBuf,
    /// Root project name, or `DEFAULT_ROOT_NAME`
    pub root_name: String,
    /// Member identifiers in manifest order
    pub members: Vec<String>,
}

impl WorkspaceManifest {
    /// Read `path` and discover the members declared under `[section]`.
    ///
    /// Fails with a discovery error if the file cannot be read or declares no
    /// usable members.
    pub fn load(path: &Path, section: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BumpError::Discovery {
            manifest: path.to_path_buf(),
            reason: format!("failed to read manifest: {}", e),
        })?;

        let manifest = Self::parse(path, &content, section);
        if manifest.members.is_empty() {
            return Err(BumpError::Discovery {
                manifest: path.to_path_buf(),
                reason: format!("no members found under [{}]", section),
            });
        }

        log::debug!(
            "Discovered {} member(s) in {}: {:?}",
            manifest.members.len(),
            path.display(),
            manifest.members
        );
        Ok(manifest)
    }

    /// Parse manifest text without touching the filesystem
    pub fn parse(path: &Path, content: &str, section: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            root_name: discover_root_name(content.lines())
                .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string()),
            members: discover_members(content.lines(), section),
        }
    }
}

/// Extract member identifiers from the `members` array under `[section]`
pub fn discover_members<'a, I>(lines: I, section: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut paths = Vec::new();
    let mut in_section = false;
    let mut in_members = false;

    for raw in lines {
        let line = raw.trim();

        if let Some(header) = table_header(line) {
            if in_section {
                break;
            }
            in_section = header == section;
            continue;
        }

        if !in_section {
            continue;
        }

        let rest = if in_members {
            line
        } else {
            match members_array_start(line) {
                Some(rest) => {
                    in_members = true;
                    rest
                }
                None => continue,
            }
        };

        let (entries, closed) = scan_entries(rest);
        paths.extend(entries);
        if closed {
            break;
        }
    }

    let mut members: Vec<String> = Vec::new();
    for path in &paths {
        if let Some(name) = package_identifier(path)
            && !members.iter().any(|m| m == name)
        {
            members.push(name.to_string());
        }
    }
    members
}

/// Read `name = "..."` from the `[project]` table
pub fn discover_root_name<'a, I>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut in_project = false;
    for raw in lines {
        let line = raw.trim();
        if let Some(header) = table_header(line) {
            if in_project {
                return None;
            }
            in_project = header == "project";
            continue;
        }
        if !in_project {
            continue;
        }
        if let Some(value) = key_value(line, "name") {
            let (entries, _) = scan_entries(value);
            return entries.into_iter().next().filter(|n| !n.is_empty());
        }
    }
    None
}

/// Last path segment of `path`, if it looks like a package name
pub fn package_identifier(path: &str) -> Option<&str> {
    let name = path.trim().trim_end_matches('/').rsplit('/').next()?;
    if name.is_empty() || name.starts_with('.') || !PACKAGE_NAME_RE.is_match(name) {
        return None;
    }
    Some(name)
}

/// Inner name of a `[table]` or `[[array.table]]` header line
fn table_header(line: &str) -> Option<&str> {
    let line = strip_comment(line).trim_end();
    if !line.starts_with('[') || !line.ends_with(']') || line.contains(['"', '\'']) {
        return None;
    }
    Some(line.trim_matches(['[', ']']).trim())
}

/// Text after `members = [`, if `line` opens the members array
fn members_array_start(line: &str) -> Option<&str> {
    key_value(line, "members")?.trim_start().strip_prefix('[')
}

/// Text after `key =`, if `line` assigns `key`
fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.trim_start();
    rest.strip_prefix('=')
}

fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '#') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Quoted strings in `text`, and whether an unquoted `]` closed the array
fn scan_entries(text: &str) -> (Vec<String>, bool) {
    let mut entries = Vec::new();
    let mut quote: Option<char> = None;
    let mut current = String::new();

    for c in text.chars() {
        match quote {
            Some(q) if c == q => {
                entries.push(std::mem::take(&mut current));
                quote = None;
            }
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => quote = Some(c),
                '#' => break,
                ']' => return (entries, true),
                _ => {}
            },
        }
    }
    (entries, false)
}
