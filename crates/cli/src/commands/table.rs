use anyhow::{Context, Result};
use carve_core::config::CarveConfig;
use carve_core::table::CategoryTable;

use crate::commands::{load_table, table_label};

pub fn render_table_text(label: &str, table: &CategoryTable) -> String {
    let total: usize = table.categories().iter().map(|c| c.functions.len()).sum();
    let mut out = format!(
        "Category table: {label} ({} modules, {} functions)\n",
        table.len(),
        total
    );
    for category in table.categories() {
        out.push_str(&format!("\n{} ({}):\n", category.module, category.functions.len()));
        if category.functions.is_empty() {
            out.push_str("  (none)\n");
        }
        for name in &category.functions {
            out.push_str(&format!("  - {name}\n"));
        }
    }
    out
}

/// Print the effective category table. With `--json` the output is a loadable table file.
pub fn table_command(config: &CarveConfig, json: bool) -> Result<()> {
    let table = load_table(config)?;

    if json {
        let serialized =
            table.to_json_string().context("Failed to serialize category table to JSON")?;
        println!("{}", serialized);
    } else {
        print!("{}", render_table_text(&table_label(config), &table));
    }

    Ok(())
}
