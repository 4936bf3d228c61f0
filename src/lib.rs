//! External Secret Rewriter Library
//!
//! This library provides the core functionality for the External Secret Rewriter:
//! decoding a multi-document YAML manifest stream, detecting `Secret/v1` resources,
//! and rewriting those whose values carry `{{ .path }}` placeholder references into
//! `ExternalSecret` resources backed by an external secret store.
//! Tests are included in the module files (e.g., scan.rs) and in `tests/`.

pub mod codec;
pub mod config;
pub mod manifest;
pub mod normalize;
pub mod pipeline;
pub mod scan;
pub mod synthesize;
