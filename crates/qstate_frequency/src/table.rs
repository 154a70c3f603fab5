//! Column-shaped frequency table
//!
//! Gantree: L2_Frequency → FrequencyTable
//!
//! The JSON layout written by the frequency command: one list per column,
//! rows in resolution order.

use crate::resolver::{DerivedFrequency, DerivedFrequencySet};
use qstate_core::{document, Hertz, QstateResult, QubitName};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Derived frequencies as parallel columns
/// Gantree: FrequencyTable // 열 형식 테이블
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Qubit names
    pub qubit: Vec<QubitName>,
    /// Drive intermediate frequencies (Hz)
    pub xy_intermediate_frequency: Vec<Hertz>,
    /// Drive LO frequencies (Hz)
    pub xy_lo_frequency: Vec<Hertz>,
    /// Drive absolute frequencies (Hz)
    pub xy_total_frequency: Vec<Hertz>,
    /// Readout intermediate frequencies (Hz)
    pub rr_intermediate_frequency: Vec<Hertz>,
    /// Readout LO frequencies (Hz)
    pub rr_lo_frequency: Vec<Hertz>,
    /// Readout absolute frequencies (Hz)
    pub rr_total_frequency: Vec<Hertz>,
}

impl FrequencyTable {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.qubit.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.qubit.is_empty()
    }

    /// Append one row
    pub fn push(&mut self, record: &DerivedFrequency) {
        self.qubit.push(record.qubit.clone());
        self.xy_intermediate_frequency.push(record.xy_intermediate);
        self.xy_lo_frequency.push(record.xy_lo);
        self.xy_total_frequency.push(record.xy_total);
        self.rr_intermediate_frequency.push(record.rr_intermediate);
        self.rr_lo_frequency.push(record.rr_lo);
        self.rr_total_frequency.push(record.rr_total);
    }

    /// Write as JSON with a 2-space indent
    /// Gantree: save(path) -> Result // 파일 저장
    pub fn save(&self, path: &Path) -> QstateResult<()> {
        document::write_json(path, self, 2)
    }
}

impl From<&DerivedFrequencySet> for FrequencyTable {
    fn from(set: &DerivedFrequencySet) -> Self {
        let mut table = FrequencyTable::default();
        for record in set {
            table.push(record);
        }
        table
    }
}
