//! Version string shape validation.

use crate::error::{BumpError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Pre-release tags accepted after `MAJOR.MINOR.PATCH`
pub const PRERELEASE_TAGS: [&str; 4] = ["alpha", "beta", "rc", "dev"];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^[0-9]+\.[0-9]+\.[0-9]+(?:[.-](?:{})[0-9]*)?$",
        PRERELEASE_TAGS.join("|")
    ))
    .expect("version regex is valid")
});

/// Check whether `candidate` is an acceptable version string
pub fn is_valid_version(candidate: &str) -> bool {
    VERSION_RE.is_match(candidate)
}

/// Validate `candidate`, returning it unchanged on success
pub fn validate_version(candidate: &str) -> Result<&str> {
    if is_valid_version(candidate) {
        Ok(candidate)
    } else {
        Err(BumpError::Validation {
            version: candidate.to_string(),
        })
    }
}
