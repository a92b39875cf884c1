//! Core data model for extracted function units.
//!
//! - `DeclarationShape`: which declaration form a match took.
//! - `Span`: byte range of a unit inside the source text.
//! - `FunctionUnit`: one extracted function (name, trimmed body, shape, span, line).
//! - `ExtractionResult`: name -> unit mapping with last-write-wins semantics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Surface form of a recognized declaration.
///
/// The recognized grammar is
/// `keyword name [=] [(params)] [=>] {`, and each optional part is either
/// present or absent. The shape is derived from that combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationShape {
    /// Arrow marker present, e.g. `const f = (x) => {` or `const f = () => {`.
    Arrow,
    /// Parameter list without assignment or arrow, e.g. `function f(x) {`.
    Function,
    /// Assignment without arrow, e.g. `const f = {` or `const f = (x) {`.
    Assigned,
    /// Nothing between the name and the opening brace, e.g. `function f {`.
    Bare,
}

impl DeclarationShape {
    /// Classify a declaration from the optional parts that matched.
    pub fn classify(assignment: bool, params: bool, arrow: bool) -> Self {
        match (assignment, params, arrow) {
            (_, _, true) => DeclarationShape::Arrow,
            (true, _, false) => DeclarationShape::Assigned,
            (false, true, false) => DeclarationShape::Function,
            (false, false, false) => DeclarationShape::Bare,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationShape::Arrow => "arrow",
            DeclarationShape::Function => "function",
            DeclarationShape::Assigned => "assigned",
            DeclarationShape::Bare => "bare",
        }
    }
}

/// Byte range `start..end` of a unit inside the source text (untrimmed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single function recovered from the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionUnit {
    pub name: String,
    /// Source text of the unit, trimmed of leading/trailing whitespace.
    pub body: String,
    pub shape: DeclarationShape,
    pub span: Span,
    /// 1-based line of the declaration start.
    pub line: usize,
}

/// Mapping from function name to its extracted unit.
///
/// Names are unique. Inserting a name that is already present replaces the
/// earlier unit and records the name in `overwritten`. Iteration is in
/// lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    functions: BTreeMap<String, FunctionUnit>,
    overwritten: Vec<String>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a unit, replacing any earlier unit with the same name.
    ///
    /// Returns the replaced unit, if any.
    pub fn insert(&mut self, unit: FunctionUnit) -> Option<FunctionUnit> {
        let name = unit.name.clone();
        let previous = self.functions.insert(name.clone(), unit);
        if previous.is_some() {
            self.overwritten.push(name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&FunctionUnit> {
        self.functions.get(name)
    }

    /// Trimmed body text for `name`.
    pub fn body(&self, name: &str) -> Option<&str> {
        self.functions.get(name).map(|unit| unit.body.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Extracted names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn units(&self) -> impl Iterator<Item = &FunctionUnit> {
        self.functions.values()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Names that were matched more than once, one entry per overwrite.
    pub fn overwritten(&self) -> &[String] {
        &self.overwritten
    }

    /// Plain name -> body mapping.
    pub fn into_bodies(self) -> BTreeMap<String, String> {
        self.functions.into_iter().map(|(name, unit)| (name, unit.body)).collect()
    }
}
