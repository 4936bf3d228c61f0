//! # YAML Stream Codec
//!
//! Decodes a `---`-separated YAML manifest stream into generic documents and
//! re-serializes each result.
//!
//! Decoding goes through `serde_yaml`'s multi-document deserializer rather than
//! splitting on `---` by hand, so a separator inside a quoted scalar cannot
//! break a document apart. The stream ends at input end or at the first
//! document that fails to decode; prior documents remain valid.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::io::Write;
use tracing::debug;

/// Decode a manifest stream into a lazy sequence of documents
///
/// Documents that decode to null (empty documents, bare separators) are
/// skipped. A document that fails to decode ends the sequence silently.
pub fn documents(input: &str) -> impl Iterator<Item = Value> + '_ {
    serde_yaml::Deserializer::from_str(input)
        .map(|document| {
            Value::deserialize(document).map_err(|e| {
                debug!("Stopping at undecodable document: {}", e);
                e
            })
        })
        .map_while(Result::ok)
        .filter(|document| !document.is_null())
}

/// Serialize one document followed by a `---` separator line
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn write_document<W: Write>(out: &mut W, document: &Value) -> Result<()> {
    let rendered =
        serde_yaml::to_string(document).context("Failed to serialize document as YAML")?;
    out.write_all(rendered.as_bytes())
        .context("Failed to write document to output stream")?;
    writeln!(out, "---").context("Failed to write document separator")?;
    Ok(())
}
