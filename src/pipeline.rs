//! # Rewrite Pipeline
//!
//! Sequences decode, detect, normalize, scan, synthesize and encode for each
//! document of a manifest stream, passing non-matching documents through
//! unchanged.
//!
//! Processing is strictly sequential: each document is fully transformed and
//! written before the next is decoded. A `Secret` whose values carry no
//! placeholder reference is passed through as-is; normalization is never
//! written back to it.

use crate::config::Config;
use crate::{codec, manifest, normalize, scan, synthesize};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

/// Transform one manifest stream, writing one output document per input document
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn run<W: Write>(input: &str, config: &Config, out: &mut W) -> Result<()> {
    let mut seen = 0_usize;
    let mut rewritten = 0_usize;

    for mut document in codec::documents(input) {
        seen += 1;
        if let Some(mapping) = document.as_mapping_mut() {
            if manifest::is_core_secret(mapping) {
                let data = normalize::merge_secret_data(mapping);
                let references = scan::extract_references(&data)?;
                if references.is_empty() {
                    debug!("Secret carries no placeholder references, passing through");
                } else {
                    synthesize::rewrite_to_external_secret(mapping, data, &references, config)?;
                    rewritten += 1;
                }
            } else {
                debug!("Passing through non-Secret resource");
            }
        }
        codec::write_document(out, &document)?;
    }

    info!(
        "Processed {} documents, rewrote {} into ExternalSecrets",
        seen, rewritten
    );
    Ok(())
}
