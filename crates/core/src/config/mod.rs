use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extract::{default_keywords, BoundaryMode, ExtractOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable run configuration (typically `carve.json`).
///
/// Every field is optional; frontends layer command-line overrides on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarveConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<BoundaryMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Category table file. Relative paths are resolved against the config
    /// file's directory by [`CarveConfig::load`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<PathBuf>,
}

impl CarveConfig {
    pub fn from_json_str(body: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Load a config file and resolve its `table` path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let mut config = Self::from_json_str(&body)?;
        if let Some(table) = config.table.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.table = Some(if table.is_absolute() { table } else { base.join(table) });
        }
        Ok(config)
    }

    /// Apply overrides; `Some` values win over what the file said.
    pub fn merge(
        mut self,
        boundary: Option<BoundaryMode>,
        keywords: Option<Vec<String>>,
        table: Option<PathBuf>,
    ) -> Self {
        if boundary.is_some() {
            self.boundary = boundary;
        }
        if keywords.is_some() {
            self.keywords = keywords;
        }
        if table.is_some() {
            self.table = table;
        }
        self
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            boundary: self.boundary.unwrap_or_default(),
            keywords: self.keywords.clone().unwrap_or_else(default_keywords),
        }
    }
}
