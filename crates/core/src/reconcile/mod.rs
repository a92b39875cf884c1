//! Reconciliation of extracted functions against a category table.
//!
//! For every category the expected names are partitioned into `found` and
//! `missing`, both in table order. Extracted names that no category expects
//! are reported as `uncategorized`, sorted and de-duplicated.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::ExtractionResult;
use crate::table::CategoryTable;

/// Found/missing split for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub module: String,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl CategoryReport {
    pub fn expected_len(&self) -> usize {
        self.found.len() + self.missing.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Totals across the whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub extracted: usize,
    pub expected: usize,
    pub found: usize,
    pub missing: usize,
    pub uncategorized: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub categories: Vec<CategoryReport>,
    pub uncategorized: Vec<String>,
    pub summary: ReportSummary,
}

impl ClassificationReport {
    pub fn category(&self, module: &str) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.module == module)
    }

    /// True when nothing is missing and nothing is left unassigned.
    pub fn is_complete(&self) -> bool {
        self.uncategorized.is_empty() && self.categories.iter().all(CategoryReport::is_complete)
    }
}

/// Reconcile an extraction result against `table`.
pub fn reconcile(extraction: &ExtractionResult, table: &CategoryTable) -> ClassificationReport {
    reconcile_names(extraction.names(), table)
}

/// Reconcile any collection of extracted names against `table`.
///
/// Duplicate names in `names` count once.
pub fn reconcile_names<'a, I>(names: I, table: &CategoryTable) -> ClassificationReport
where
    I: IntoIterator<Item = &'a str>,
{
    let extracted: BTreeSet<&str> = names.into_iter().collect();

    let mut summary = ReportSummary { extracted: extracted.len(), ..ReportSummary::default() };
    let mut categorized: HashSet<&str> = HashSet::new();
    let mut categories = Vec::with_capacity(table.len());

    for category in table.categories() {
        let (found, missing): (Vec<&String>, Vec<&String>) =
            category.functions.iter().partition(|name| extracted.contains(name.as_str()));
        categorized.extend(category.functions.iter().map(String::as_str));

        summary.expected += category.functions.len();
        summary.found += found.len();
        summary.missing += missing.len();
        categories.push(CategoryReport {
            module: category.module.clone(),
            found: found.into_iter().cloned().collect(),
            missing: missing.into_iter().cloned().collect(),
        });
    }

    let uncategorized: Vec<String> = extracted
        .iter()
        .filter(|name| !categorized.contains(*name))
        .map(|name| name.to_string())
        .collect();
    summary.uncategorized = uncategorized.len();

    info!(
        extracted = summary.extracted,
        found = summary.found,
        missing = summary.missing,
        uncategorized = summary.uncategorized,
        "reconciled extraction against category table"
    );

    ClassificationReport { categories, uncategorized, summary }
}
