//! # Placeholder Scanner
//!
//! Scans normalized secret values for embedded `{{ ... }}` placeholder
//! references and extracts their dotted variable names.
//!
//! Within one occurrence the inner text is split on whitespace and the first
//! word beginning with `.` is the reference; an occurrence with no dotted word
//! contributes nothing. References are collected across all values in
//! encounter order (key order of the normalized mapping, left to right within
//! a value) and duplicates are kept.

use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Extract placeholder references from every value of a normalized mapping
///
/// Every returned reference begins with `.`, e.g. `.database.password`.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn extract_references(data: &BTreeMap<String, String>) -> Result<Vec<String>> {
    // Double curly braces enclosing text with no inner brace
    let placeholder = Regex::new(r"\{\{([^}]+)\}\}")
        .map_err(|e| anyhow::anyhow!("Failed to compile placeholder regex: {e}"))?;

    let mut references = Vec::new();
    for (key, value) in data {
        for captures in placeholder.captures_iter(value) {
            let Some(inner) = captures.get(1) else {
                continue;
            };
            match inner.as_str().split_whitespace().find(|w| w.starts_with('.')) {
                Some(word) => references.push(word.to_string()),
                None => debug!("Placeholder in '{}' carries no dotted reference", key),
            }
        }
    }

    Ok(references)
}
