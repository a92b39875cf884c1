use std::path::Path;

use anyhow::{Context, Result};
use carve_core::config::CarveConfig;
use carve_core::extract::BoundaryMode;
use carve_core::reconcile::{reconcile, ClassificationReport};
use serde::Serialize;

use crate::commands::{build_extractor, load_table, table_label};
use crate::{read_source, sha256_bytes};

/// Report plus the provenance needed to reproduce it.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileOutput {
    pub source: String,
    pub source_sha256: String,
    pub table: String,
    pub boundary: BoundaryMode,
    pub report: ClassificationReport,
}

/// Render the categorization report as text.
pub fn render_reconcile_text(output: &ReconcileOutput) -> String {
    let report = &output.report;
    let mut out = String::new();
    out.push_str(&format!("Source: {}\n", output.source));
    out.push_str(&format!("Source SHA-256: {}\n", output.source_sha256));
    out.push_str(&format!("Category table: {}\n", output.table));
    out.push_str(&format!(
        "Found {} functions (mode: {})\n",
        report.summary.extracted, output.boundary
    ));

    out.push_str("\nCategorization:\n");
    for category in &report.categories {
        out.push_str(&format!("\n{}:\n", category.module));
        if category.expected_len() == 0 {
            out.push_str("  (no functions planned)\n");
        }
        for name in &category.found {
            out.push_str(&format!("  ✓ {name}\n"));
        }
        for name in &category.missing {
            out.push_str(&format!("  ✗ {name} (not found)\n"));
        }
    }

    if !report.uncategorized.is_empty() {
        out.push_str("\nUncategorized functions:\n");
        for name in &report.uncategorized {
            out.push_str(&format!("  - {name}\n"));
        }
    }

    out.push_str(&format!(
        "\nSummary: {}/{} expected found, {} missing, {} uncategorized\n",
        report.summary.found,
        report.summary.expected,
        report.summary.missing,
        report.summary.uncategorized
    ));
    out
}

/// Extract functions from `source` and reconcile them against the category table.
pub fn reconcile_command(source: &str, config: &CarveConfig, json: bool) -> Result<()> {
    let output = build_reconcile_output(source, config)?;

    if json {
        let serialized = serde_json::to_string_pretty(&output)
            .context("Failed to serialize report to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_reconcile_text(&output));
    }

    Ok(())
}

pub fn build_reconcile_output(source: &str, config: &CarveConfig) -> Result<ReconcileOutput> {
    let source_path = Path::new(source);
    let text = read_source(source_path)?;
    let table = load_table(config)?;
    let extractor = build_extractor(config)?;

    let extraction = extractor.extract(&text);
    let report = reconcile(&extraction, &table);

    Ok(ReconcileOutput {
        source: source_path.display().to_string(),
        source_sha256: sha256_bytes(text.as_bytes()),
        table: table_label(config),
        boundary: extractor.boundary(),
        report,
    })
}
