//! # ExternalSecret Synthesis
//!
//! Builds the `ExternalSecret` resource shape from extracted placeholder
//! references and rewrites a `Secret` document in place.
//!
//! The synthesized spec serializes with a fixed field layout:
//! `refreshInterval`, `secretStoreRef`, `target`, `data`.

use crate::config::Config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::collections::BTreeMap;

/// Resource kind written to rewritten documents
pub const EXTERNAL_SECRET_KIND: &str = "ExternalSecret";

/// API version written to rewritten documents
pub const EXTERNAL_SECRET_API_VERSION: &str = "external-secrets.io/v1beta1";

/// Reference to the secret store backing an ExternalSecret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretStoreRef {
    pub name: String,
    pub kind: String,
}

/// Target template carrying the literal values of the original Secret
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub template: Template,
}

/// Backend-side lookup key for one data binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRef {
    pub key: String,
}

/// One binding from a backend key to a target secret key
///
/// Both sides always carry the same name: the placeholder reference with its
/// leading dot stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBinding {
    pub secret_key: String,
    pub remote_ref: RemoteRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSecretSpec {
    pub refresh_interval: String,
    pub secret_store_ref: SecretStoreRef,
    pub target: Target,
    pub data: Vec<DataBinding>,
}

/// Rewrite a `Secret` document into an `ExternalSecret` in place
///
/// Every key of the merged data mapping is copied verbatim into
/// `target.template.data`, placeholder syntax included. Each reference
/// appends one data binding, duplicates preserved in extraction order.
/// `data`, `stringData` and `type` are removed from the document and
/// `kind`/`apiVersion` are overwritten.
///
/// A reference without its leading `.` violates the scanner contract and
/// fails the run; the scanner never emits such a reference.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn rewrite_to_external_secret(
    document: &mut Mapping,
    data: BTreeMap<String, String>,
    references: &[String],
    config: &Config,
) -> Result<()> {
    let mut spec = ExternalSecretSpec {
        refresh_interval: config.refresh_interval.clone(),
        secret_store_ref: SecretStoreRef {
            name: config.store_name.clone(),
            kind: config.store_kind.clone(),
        },
        target: Target {
            template: Template { data },
        },
        data: Vec::with_capacity(references.len()),
    };

    for reference in references {
        let key = reference.strip_prefix('.').ok_or_else(|| {
            anyhow::anyhow!("Placeholder reference '{reference}' is missing its '.' prefix")
        })?;
        spec.data.push(DataBinding {
            secret_key: key.to_string(),
            remote_ref: RemoteRef {
                key: key.to_string(),
            },
        });
    }

    document.insert("kind".into(), EXTERNAL_SECRET_KIND.into());
    document.insert("apiVersion".into(), EXTERNAL_SECRET_API_VERSION.into());
    document.remove("data");
    document.remove("stringData");
    document.remove("type");
    document.insert(
        "spec".into(),
        serde_yaml::to_value(&spec).context("Failed to serialize ExternalSecret spec")?,
    );

    Ok(())
}
