//! # Manifest Field Access
//!
//! Typed accessors over generic manifest documents.
//!
//! Kubernetes manifests arrive as untyped mappings; these helpers surface a
//! missing or mistyped field as `None` so the pipeline can decide to pass a
//! malformed document through instead of aborting on it.

use serde_yaml::{Mapping, Value};

/// Read a top-level string field, treating a missing or non-string value as absent
pub fn str_field<'a>(document: &'a Mapping, key: &str) -> Option<&'a str> {
    document.get(key).and_then(Value::as_str)
}

/// Check whether a document is a core `Secret` resource
///
/// Requires strict equality on both fields: `kind: Secret` and
/// `apiVersion: v1`. Case variants and extended API groups do not match.
#[must_use]
pub fn is_core_secret(document: &Mapping) -> bool {
    str_field(document, "kind") == Some("Secret") && str_field(document, "apiVersion") == Some("v1")
}
