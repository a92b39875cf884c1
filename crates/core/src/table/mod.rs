//! Category table: the planned module layout.
//!
//! A table is an ordered list of categories, each naming a target module and
//! the functions expected to move there. Tables are data: they are loaded
//! from `.json`, `.yaml` or `.yml` files, or taken from [`default_table`].
//!
//! On-disk shape:
//!
//! ```yaml
//! categories:
//!   - module: core/config.js
//!     functions: [readConfig, writeConfig]
//!   - module: skills/executor.js
//!     functions: []
//! ```

mod builtin;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::builtin::default_table;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read category table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse category table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse category table YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported category table format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
    #[error("Category #{index} has an empty module identifier")]
    EmptyModule { index: usize },
    #[error("Module '{0}' appears more than once in the category table")]
    DuplicateModule(String),
}

/// One target module and the functions expected to belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub module: String,
    #[serde(default)]
    pub functions: Vec<String>,
}

impl Category {
    pub fn new<I, S>(module: impl Into<String>, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { module: module.into(), functions: functions.into_iter().map(Into::into).collect() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    #[serde(default)]
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Builder-style helper to append a category.
    pub fn with_category<I, S>(mut self, module: impl Into<String>, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.push(Category::new(module, functions));
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Union of expected names across every category.
    pub fn expected_names(&self) -> HashSet<&str> {
        self.categories.iter().flat_map(|c| c.functions.iter().map(String::as_str)).collect()
    }

    /// Reject empty or repeated module identifiers.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for (index, category) in self.categories.iter().enumerate() {
            if category.module.trim().is_empty() {
                return Err(TableError::EmptyModule { index });
            }
            if !seen.insert(category.module.as_str()) {
                return Err(TableError::DuplicateModule(category.module.clone()));
            }
        }
        Ok(())
    }

    pub fn from_json_str(body: &str) -> Result<Self, TableError> {
        let table: Self = serde_json::from_str(body)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_yaml_str(body: &str) -> Result<Self, TableError> {
        let table: Self = serde_yaml::from_str(body)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table, choosing the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if !matches!(ext, "json" | "yaml" | "yml") {
            return Err(TableError::UnsupportedFormat(path.to_path_buf()));
        }
        let body = fs::read_to_string(path)
            .map_err(|source| TableError::Io { path: path.to_path_buf(), source })?;
        if ext == "json" {
            Self::from_json_str(&body)
        } else {
            Self::from_yaml_str(&body)
        }
    }

    pub fn to_json_string(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
