use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use carve_core::config::CarveConfig;
use carve_core::extract::{BoundaryMode, Extractor};
use carve_core::table::{default_table, CategoryTable};

/// Parse a `--mode` value.
pub fn validate_boundary(mode: &str) -> Result<BoundaryMode> {
    mode.parse::<BoundaryMode>().map_err(|e| anyhow!("{e}"))
}

/// Load `--config` (if any) and layer command-line overrides on top.
pub fn resolve_config(
    config: Option<&str>,
    mode: Option<&str>,
    keywords: &[String],
    table: Option<&str>,
) -> Result<CarveConfig> {
    let base = match config {
        Some(path) => CarveConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config at {path}"))?,
        None => CarveConfig::default(),
    };
    let boundary = mode.map(validate_boundary).transpose()?;
    let keywords = if keywords.is_empty() { None } else { Some(keywords.to_vec()) };
    Ok(base.merge(boundary, keywords, table.map(PathBuf::from)))
}

/// Build an extractor from the resolved config.
pub fn build_extractor(config: &CarveConfig) -> Result<Extractor> {
    Extractor::new(&config.extract_options()).context("Invalid extraction options")
}

/// Load the configured category table, or the built-in default.
pub fn load_table(config: &CarveConfig) -> Result<CategoryTable> {
    match &config.table {
        Some(path) => CategoryTable::from_path(path)
            .with_context(|| format!("Failed to load category table at {}", path.display())),
        None => Ok(default_table()),
    }
}

/// Human label for where the table came from.
pub fn table_label(config: &CarveConfig) -> String {
    config
        .table
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in default".to_string())
}
