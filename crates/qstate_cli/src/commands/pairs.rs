//! Pairs command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qstate_pairs::{derive_qubit_pairs, render_pair_listing};

use super::common::{self, Session};

/// Execute the pairs command.
pub fn execute(session: &Session, write_to_state: bool, output: Option<&Path>) -> Result<()> {
    let (paths, state, wiring) = session.load_documents()?;

    let derivation = derive_qubit_pairs(&state, &wiring).context("Failed to derive qubit pairs")?;

    println!(
        "{} {} qubit pairs\n",
        style("Derived").cyan().bold(),
        derivation.pairs.len()
    );
    print!(
        "{}",
        render_pair_listing(&derivation.pairs, &derivation.frequencies, session.color)
    );

    if let Some(path) = output {
        common::write_json(path, &derivation.pairs.to_json_map(), 4)?;
        println!("\n{} {}", style("Pairs written to").green(), path.display());
    }

    if write_to_state {
        let updated = derivation.apply_to(&state)?;
        updated
            .save(&paths.state_file)
            .with_context(|| format!("Failed to write {}", paths.state_file.display()))?;
        println!(
            "\n{} {}",
            style("Updated qubit_pairs in").green(),
            paths.state_file.display()
        );
    }

    Ok(())
}
