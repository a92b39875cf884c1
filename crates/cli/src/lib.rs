pub mod commands;

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use sha2::{Digest, Sha256};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter (e.g. `CARVE_LOG=debug`).
pub const LOG_ENV: &str = "CARVE_LOG";

/// Install the stderr tracing subscriber.
///
/// `CARVE_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// with `--verbose`. Calling this twice is harmless.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read the monolithic source file, failing fast when it does not exist.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(anyhow!("Source file not found: {}", path.display()));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "read source file");
    Ok(text)
}

/// Compute the SHA-256 of a byte slice and return it as a hex string.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
