use std::path::Path;

use anyhow::{Context, Result};
use carve_core::config::CarveConfig;
use carve_core::extract::BoundaryMode;
use carve_core::model::{ExtractionResult, FunctionUnit};
use serde::Serialize;

use crate::commands::build_extractor;
use crate::read_source;

/// Serializable listing entry (body omitted).
#[derive(Debug, Clone, Serialize)]
pub struct FunctionListing {
    pub name: String,
    pub line: usize,
    pub shape: String,
    pub bytes: usize,
}

impl From<&FunctionUnit> for FunctionListing {
    fn from(unit: &FunctionUnit) -> Self {
        Self {
            name: unit.name.clone(),
            line: unit.line,
            shape: unit.shape.as_str().to_string(),
            bytes: unit.body.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractOutput {
    pub source: String,
    pub boundary: BoundaryMode,
    pub count: usize,
    pub functions: Vec<FunctionListing>,
    pub overwritten: Vec<String>,
}

impl ExtractOutput {
    pub fn new(source: &Path, boundary: BoundaryMode, extraction: &ExtractionResult) -> Self {
        Self {
            source: source.display().to_string(),
            boundary,
            count: extraction.len(),
            functions: extraction.units().map(FunctionListing::from).collect(),
            overwritten: extraction.overwritten().to_vec(),
        }
    }
}

/// Render the extraction listing as text.
pub fn render_extract_text(output: &ExtractOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("Found {} functions (mode: {})\n", output.count, output.boundary));
    if output.functions.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }

    out.push_str("\nFunction names:\n");
    for f in &output.functions {
        out.push_str(&format!(
            "  - {} [line {}, {}, {} bytes]\n",
            f.name, f.line, f.shape, f.bytes
        ));
    }
    for name in &output.overwritten {
        out.push_str(&format!(
            "Warning: '{name}' is defined more than once; keeping the last definition\n"
        ));
    }
    out
}

/// List the functions found in a source file.
pub fn extract_command(source: &str, config: &CarveConfig, json: bool) -> Result<()> {
    let source_path = Path::new(source);
    let text = read_source(source_path)?;
    let extractor = build_extractor(config)?;
    let extraction = extractor.extract(&text);
    let output = ExtractOutput::new(source_path, extractor.boundary(), &extraction);

    if json {
        let serialized = serde_json::to_string_pretty(&output)
            .context("Failed to serialize extraction to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_extract_text(&output));
    }

    Ok(())
}
