//! Verify command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qstate_core::{document, files, verify_consistent, DocumentPaths};

use super::common::Session;

/// Execute the verify command.
pub fn execute(session: &Session, against: &Path) -> Result<()> {
    let local = session.paths()?;
    let stored = DocumentPaths::in_dir(against, None);

    let documents = [
        (files::STATE_FILE, &local.state_file, &stored.state_file),
        (files::WIRING_FILE, &local.wiring_file, &stored.wiring_file),
    ];

    for (name, local_file, stored_file) in documents {
        let local_doc = document::load_json(local_file)
            .with_context(|| format!("Failed to load {}", local_file.display()))?;
        let stored_doc = document::load_json(stored_file)
            .with_context(|| format!("Failed to load {}", stored_file.display()))?;

        verify_consistent(name, &local_doc, &stored_doc)?;
        println!("  {} {}", style("✓").green(), name);
    }

    println!(
        "\n{} local documents match {}",
        style("OK").green().bold(),
        against.display()
    );
    Ok(())
}
