//! Grid command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qstate_core::{collect_grid_locations, document};

use super::common::Session;
use crate::GridFormat;

/// Execute the grid command.
pub fn execute(session: &Session, output: Option<&Path>, format: GridFormat) -> Result<()> {
    let (_, state) = session.load_state()?;
    let locations = collect_grid_locations(&state).context("Failed to collect grid locations")?;

    let listing = match format {
        GridFormat::Python => locations.to_python_literal(),
        GridFormat::Json => {
            let mut json = document::to_json_string(&locations.to_json(), 2)?;
            json.push('\n');
            json
        }
    };

    print!("{}", listing);

    if let Some(path) = output {
        fs::write(path, &listing)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "\n{} {} grid locations to {}",
            style("Wrote").green(),
            locations.len(),
            path.display()
        );
    }

    Ok(())
}
