//! Function-boundary extraction.
//!
//! The extractor locates declaration starts with a small lexical grammar (see
//! `grammar`) and decides where each unit ends with a [`BoundaryMode`]:
//!
//! - `NextStart` (default): a unit runs from its declaration to the start of
//!   the next declaration, or to the end of the text. Block delimiters are not
//!   balanced, so nested blocks, lookalike text inside string literals, and
//!   commented-out declarations can all produce mis-split boundaries.
//! - `Balanced`: a unit runs from its declaration to the brace matching its
//!   opening `{`, skipping literals and comments. Declarations that start
//!   inside an earlier unit are skipped. Unbalanced units fall back to the
//!   `NextStart` end.
//!
//! Extraction itself never fails; only building an `Extractor` from a custom
//! keyword set can.

mod balance;
mod grammar;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{ExtractionResult, FunctionUnit, Span};

use self::grammar::Grammar;

/// Keywords recognized when no custom set is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &["const", "function"];

static DEFAULT_GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
    Grammar::new(&default_keywords()).expect("default declaration grammar compiles")
});

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("At least one declaration keyword is required")]
    NoKeywords,
    #[error("Invalid declaration keyword '{0}': expected letters, digits, '_' or '$'")]
    InvalidKeyword(String),
    #[error("Failed to compile declaration grammar: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid boundary mode '{0}'. Allowed: next-start, balanced")]
    UnknownBoundary(String),
}

/// Rule deciding where a unit's body ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryMode {
    #[default]
    NextStart,
    Balanced,
}

impl BoundaryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryMode::NextStart => "next-start",
            BoundaryMode::Balanced => "balanced",
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryMode {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next-start" => Ok(BoundaryMode::NextStart),
            "balanced" => Ok(BoundaryMode::Balanced),
            other => Err(ExtractError::UnknownBoundary(other.to_string())),
        }
    }
}

/// Options controlling extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    #[serde(default)]
    pub boundary: BoundaryMode,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { boundary: BoundaryMode::default(), keywords: default_keywords() }
    }
}

impl ExtractOptions {
    /// Builder-style helper to pick a boundary strategy.
    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

pub fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Splits source text into named function units.
#[derive(Debug, Clone)]
pub struct Extractor {
    grammar: Grammar,
    boundary: BoundaryMode,
}

impl Default for Extractor {
    fn default() -> Self {
        Self { grammar: DEFAULT_GRAMMAR.clone(), boundary: BoundaryMode::default() }
    }
}

impl Extractor {
    pub fn new(options: &ExtractOptions) -> Result<Self, ExtractError> {
        let grammar = Grammar::new(&options.keywords)?;
        Ok(Self { grammar, boundary: options.boundary })
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Extract every recognized function from `source`.
    ///
    /// Duplicate names resolve last-write-wins.
    pub fn extract(&self, source: &str) -> ExtractionResult {
        let declarations = self.grammar.scan(source);
        let mut result = ExtractionResult::new();
        let mut lines = LineCounter::default();
        let mut covered_until = 0usize;

        for (i, decl) in declarations.iter().enumerate() {
            let next_start = declarations.get(i + 1).map_or(source.len(), |d| d.start);
            let end = match self.boundary {
                BoundaryMode::NextStart => next_start,
                BoundaryMode::Balanced => {
                    if decl.start < covered_until {
                        debug!(name = %decl.name, offset = decl.start, "skipping nested declaration");
                        continue;
                    }
                    match balance::matching_brace(source, decl.open_brace) {
                        Some(close) => close + 1,
                        None => {
                            debug!(name = %decl.name, "unbalanced braces");
                            next_start
                        }
                    }
                }
            };
            covered_until = end;

            let unit = FunctionUnit {
                name: decl.name.clone(),
                body: source[decl.start..end].trim().to_string(),
                shape: decl.shape,
                span: Span::new(decl.start, end),
                line: lines.line_at(source, decl.start),
            };
            debug!(name = %unit.name, shape = unit.shape.as_str(), line = unit.line, "extracted");
            if result.insert(unit).is_some() {
                warn!(name = %decl.name, "duplicate function name, keeping the later definition");
            }
        }

        result
    }
}

/// Extract with the default keywords and boundary strategy.
pub fn extract_functions(source: &str) -> ExtractionResult {
    Extractor::default().extract(source)
}

/// Incremental 1-based line lookup for monotonically increasing offsets.
#[derive(Debug)]
struct LineCounter {
    offset: usize,
    line: usize,
}

impl Default for LineCounter {
    fn default() -> Self {
        Self { offset: 0, line: 1 }
    }
}

impl LineCounter {
    fn line_at(&mut self, source: &str, offset: usize) -> usize {
        self.line += source.as_bytes()[self.offset..offset].iter().filter(|&&b| b == b'\n').count();
        self.offset = offset;
        self.line
    }
}
