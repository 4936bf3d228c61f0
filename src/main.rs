//! # External Secret Rewriter
//!
//! Rewrites Kubernetes `Secret` manifests into `ExternalSecret` resources.
//!
//! ## Overview
//!
//! The rewriter reads a `---`-separated YAML manifest stream on standard input
//! and writes the transformed stream to standard output:
//!
//! 1. **Secret detection** - Matches `kind: Secret` / `apiVersion: v1` resources; everything else passes through unchanged
//! 2. **Data normalization** - Merges `data` (base64) and `stringData` (plain) into one plaintext mapping
//! 3. **Placeholder scanning** - Finds `{{ .path }}` references embedded in secret values
//! 4. **ExternalSecret synthesis** - Replaces inline secret material with store-backed data bindings
//!
//! Secrets without placeholder references are left untouched, so the rewriter
//! can run over a whole rendered manifest set.
//!
//! ## Usage
//!
//! ```bash
//! kustomize build overlays/prod \
//!   | STORE_NAME=azure-keyvault STORE_KIND=ClusterSecretStore external-secret-rewriter \
//!   | kubectl apply -f -
//! ```
//!
//! Diagnostics go to standard error; the document stream stays clean on
//! standard output.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use tracing::debug;

use external_secret_rewriter::config::Config;
use external_secret_rewriter::pipeline;

/// External Secret Rewriter CLI
#[derive(Parser)]
#[command(name = "external-secret-rewriter")]
#[command(
    about = "Rewrites Kubernetes Secret manifests into ExternalSecret resources",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")"),
    after_help = "\
Environment variables:
  STORE_NAME        Secret store name for synthesized resources (required)
  STORE_KIND        Secret store kind, e.g. SecretStore or ClusterSecretStore (required)
  REFRESH_INTERVAL  Refresh interval for synthesized resources (default: 1h)

Example:
  kustomize build . | STORE_NAME=vault STORE_KIND=SecretStore external-secret-rewriter
"
)]
struct Cli;

fn main() -> Result<()> {
    Cli::parse();

    // A .env file in the working directory is honored, missing is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "external_secret_rewriter=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    // Resolve configuration before touching the input stream so a missing
    // variable fails without emitting any output
    let config = Config::from_env().context("Failed to load secret store configuration")?;
    debug!(
        "Using store '{}' of kind '{}', refresh interval {}",
        config.store_name, config.store_kind, config.refresh_interval
    );

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read manifest stream from stdin")?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    pipeline::run(&input, &config, &mut out)?;
    out.flush().context("Failed to flush output stream")?;

    Ok(())
}
