//! # Secret Data Normalization
//!
//! Merges the two secret-encoding conventions of a `Secret` resource into one
//! canonical key-to-plaintext mapping.
//!
//! `stringData` carries plain values and is read verbatim; `data` carries
//! base64-encoded values and is decoded per entry. `data` is merged after
//! `stringData`, so a key present in both resolves to the decoded `data`
//! value, matching the apiserver's own precedence.

use base64::{engine::general_purpose, Engine as _};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Merge `stringData` and `data` into one plaintext mapping
///
/// An entry whose base64 payload fails to decode, or decodes to non-UTF-8
/// bytes, is dropped on its own; the rest of the document still normalizes.
/// The result is key-ordered so downstream scanning and serialization are
/// deterministic.
#[must_use]
pub fn merge_secret_data(document: &Mapping) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    if let Some(Value::Mapping(string_data)) = document.get("stringData") {
        for (key, value) in string_data {
            let Some(key) = key.as_str() else {
                warn!("Skipping stringData entry with non-string key");
                continue;
            };
            match scalar_to_string(value) {
                Some(plain) => {
                    merged.insert(key.to_string(), plain);
                }
                None => warn!("Skipping non-scalar stringData value for {}", key),
            }
        }
    }

    if let Some(Value::Mapping(data)) = document.get("data") {
        for (key, value) in data {
            let Some(key) = key.as_str() else {
                warn!("Skipping data entry with non-string key");
                continue;
            };
            let Some(encoded) = value.as_str() else {
                warn!("Skipping non-string data value for {}", key);
                continue;
            };
            match general_purpose::STANDARD.decode(encoded) {
                Ok(decoded) => match String::from_utf8(decoded) {
                    Ok(plain) => {
                        merged.insert(key.to_string(), plain);
                    }
                    Err(e) => {
                        warn!("Failed to decode secret value for {} as UTF-8: {}", key, e);
                    }
                },
                Err(e) => {
                    warn!("Failed to decode base64 secret value for {}: {}", key, e);
                }
            }
        }
    }

    merged
}

/// Render a scalar YAML value as a string
///
/// Numbers and booleans are stringified the way YAML wrote them; mappings,
/// sequences and tagged values have no plaintext form and yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
