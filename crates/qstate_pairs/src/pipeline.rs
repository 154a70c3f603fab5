//! End-to-end pair derivation
//!
//! Gantree: L3_Pairs → Pipeline
//!
//! resolve frequencies → find adjacency → direct pairs

use crate::director::{direct_pairs, QubitPairSet};
use qstate_core::{find_adjacent_pairs, AdjacencySet, QstateResult, StateDocument, WiringDocument};
use qstate_frequency::{resolve_frequencies, DerivedFrequencySet};

/// Intermediate and final results of one derivation
/// Gantree: PairDerivation // 파이프라인 결과
#[derive(Debug, Clone, PartialEq)]
pub struct PairDerivation {
    /// Resolved qubit frequencies
    pub frequencies: DerivedFrequencySet,
    /// Adjacent pairs from the grid
    pub adjacency: AdjacencySet,
    /// Directed pairs
    pub pairs: QubitPairSet,
}

impl PairDerivation {
    /// State document with `qubit_pairs` replaced by the derived pairs
    pub fn apply_to(&self, state: &StateDocument) -> QstateResult<StateDocument> {
        self.pairs.merge_into_state(state)
    }
}

/// Run the full derivation over one snapshot
/// Gantree: derive_qubit_pairs(state,wiring) -> Result<PairDerivation> // 전체 실행
pub fn derive_qubit_pairs(
    state: &StateDocument,
    wiring: &WiringDocument,
) -> QstateResult<PairDerivation> {
    let frequencies = resolve_frequencies(state, wiring)?;
    let adjacency = find_adjacent_pairs(state)?;
    let pairs = direct_pairs(&adjacency, &frequencies)?;

    log::info!(
        "derived {} qubit pairs from {} resolved qubits",
        pairs.len(),
        frequencies.len()
    );

    Ok(PairDerivation {
        frequencies,
        adjacency,
        pairs,
    })
}
