//! Declaration grammar.
//!
//! A declaration start is
//!
//! ```text
//! keyword WS+ name WS* [=] WS* [( params )] WS* [=>] WS* {
//! ```
//!
//! where `params` is any run of characters other than `)`. The optional parts
//! are captured separately so each match can be classified into a
//! [`DeclarationShape`].

use regex::{Captures, Regex};

use crate::model::DeclarationShape;

use super::ExtractError;

/// A declaration start located in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Declaration {
    pub name: String,
    /// Byte offset of the keyword.
    pub start: usize,
    /// Byte offset of the opening `{`.
    pub open_brace: usize,
    pub shape: DeclarationShape,
}

/// Compiled declaration grammar for a keyword set.
#[derive(Debug, Clone)]
pub(crate) struct Grammar {
    pattern: Regex,
}

impl Grammar {
    pub fn new(keywords: &[String]) -> Result<Self, ExtractError> {
        if keywords.is_empty() {
            return Err(ExtractError::NoKeywords);
        }
        for keyword in keywords {
            if !is_keyword(keyword) {
                return Err(ExtractError::InvalidKeyword(keyword.clone()));
            }
        }
        let pattern = Regex::new(&declaration_pattern(keywords))?;
        Ok(Self { pattern })
    }

    /// All declaration starts in source order (non-overlapping).
    pub fn scan(&self, source: &str) -> Vec<Declaration> {
        self.pattern.captures_iter(source).filter_map(|caps| declaration(&caps)).collect()
    }
}

fn declaration(caps: &Captures<'_>) -> Option<Declaration> {
    let whole = caps.get(0)?;
    let name = caps.name("name")?.as_str().to_string();
    let shape = DeclarationShape::classify(
        caps.name("assign").is_some(),
        caps.name("params").is_some(),
        caps.name("arrow").is_some(),
    );
    // The pattern always ends on the opening brace.
    Some(Declaration { name, start: whole.start(), open_brace: whole.end() - 1, shape })
}

fn declaration_pattern(keywords: &[String]) -> String {
    let alternatives = keywords.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
    format!(
        r"(?:{alternatives})\s+(?P<name>\w+)\s*(?P<assign>=)?\s*(?P<params>\([^)]*\))?\s*(?P<arrow>=>)?\s*\{{"
    )
}

fn is_keyword(keyword: &str) -> bool {
    !keyword.is_empty() && keyword.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
