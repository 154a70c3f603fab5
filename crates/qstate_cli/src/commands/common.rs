//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use qstate_core::{document, DocumentPaths, StateDocument, WiringDocument};
use serde_json::Value;

/// Global options shared by every command.
#[derive(Debug, Clone)]
pub struct Session {
    /// State directory (`--state-path` or `QUAM_STATE_PATH`)
    pub state_path: Option<PathBuf>,
    /// Wiring file override
    pub wiring_path: Option<PathBuf>,
    /// Emit ANSI colours
    pub color: bool,
}

impl Session {
    /// Resolve the document locations.
    pub fn paths(&self) -> Result<DocumentPaths> {
        let paths = DocumentPaths::resolve(self.state_path.clone(), self.wiring_path.clone())
            .context("Cannot locate the QuAM state; pass --state-path or set QUAM_STATE_PATH")?;

        log::debug!(
            "state file {}, wiring file {}",
            paths.state_file.display(),
            paths.wiring_file.display()
        );
        Ok(paths)
    }

    /// Load the state document only.
    pub fn load_state(&self) -> Result<(DocumentPaths, StateDocument)> {
        let paths = self.paths()?;
        let state = paths
            .load_state()
            .with_context(|| format!("Failed to load {}", paths.state_file.display()))?;
        Ok((paths, state))
    }

    /// Load both documents.
    pub fn load_documents(&self) -> Result<(DocumentPaths, StateDocument, WiringDocument)> {
        let paths = self.paths()?;
        let (state, wiring) = paths.load_documents().with_context(|| {
            format!(
                "Failed to load documents from {}",
                paths.state_dir.display()
            )
        })?;
        Ok((paths, state, wiring))
    }
}

/// Write a JSON file with the given indent width.
pub fn write_json(path: &Path, value: &Value, indent: usize) -> Result<()> {
    document::write_json(path, value, indent)
        .with_context(|| format!("Failed to write {}", path.display()))
}
