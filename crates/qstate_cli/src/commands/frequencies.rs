//! Frequencies command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qstate_frequency::{render_frequency_table, resolve_frequencies, FrequencyTable, ReportConfig};

use super::common::Session;

/// Execute the frequencies command.
pub fn execute(session: &Session, output: Option<&Path>, threshold: f64) -> Result<()> {
    let (paths, state, wiring) = session.load_documents()?;

    let frequencies = resolve_frequencies(&state, &wiring).with_context(|| {
        format!(
            "Failed to resolve frequencies from {}",
            paths.state_dir.display()
        )
    })?;

    let config = ReportConfig {
        threshold_mhz: threshold,
        color: session.color,
    };
    print!("{}", render_frequency_table(&frequencies, &config));

    if let Some(path) = output {
        FrequencyTable::from(&frequencies)
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "\n{} {}",
            style("Frequency table written to").green(),
            path.display()
        );
    }

    Ok(())
}
