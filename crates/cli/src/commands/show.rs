use std::path::Path;

use anyhow::{anyhow, Result};
use carve_core::config::CarveConfig;

use crate::commands::build_extractor;
use crate::read_source;

/// Body of a single extracted function.
pub fn function_body(source: &str, config: &CarveConfig, name: &str) -> Result<String> {
    let source_path = Path::new(source);
    let text = read_source(source_path)?;
    let extraction = build_extractor(config)?.extract(&text);

    extraction
        .body(name)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Function '{}' not found in {}", name, source_path.display()))
}

/// Print one extracted function body.
pub fn show_command(source: &str, config: &CarveConfig, name: &str) -> Result<()> {
    println!("{}", function_body(source, config, name)?);
    Ok(())
}
