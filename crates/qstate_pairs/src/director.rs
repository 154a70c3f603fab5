//! Pair director
//!
//! Gantree: L3_Pairs → PairDirector
//!
//! Assigns control and target roles to each adjacent pair by comparing
//! absolute drive frequencies. The higher-frequency qubit controls; on an
//! exact tie the second qubit of the pair controls.

use qstate_core::{
    keys, qubit_ref, AdjacencySet, AdjacentPair, Hertz, JsonObject, QstateError, QstateResult,
    QubitName, StateDocument,
};
use qstate_frequency::DerivedFrequencySet;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// DriveFrequencies
// ============================================================================

/// Source of absolute drive frequencies per qubit
/// Gantree: DriveFrequencies // trait
pub trait DriveFrequencies {
    /// Absolute drive frequency, `None` if the qubit was not resolved
    fn drive_frequency(&self, qubit: &str) -> Option<Hertz>;
}

impl DriveFrequencies for DerivedFrequencySet {
    fn drive_frequency(&self, qubit: &str) -> Option<Hertz> {
        self.xy_total(qubit)
    }
}

impl DriveFrequencies for HashMap<QubitName, Hertz> {
    fn drive_frequency(&self, qubit: &str) -> Option<Hertz> {
        self.get(qubit).copied()
    }
}

// ============================================================================
// QubitPair
// ============================================================================

/// Directed pair record
/// Gantree: QubitPair // 방향 쌍
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QubitPair {
    /// `"{q1}-{q2}"` in discovery order, independent of roles
    pub id: String,
    /// Control qubit
    pub control: QubitName,
    /// Target qubit
    pub target: QubitName,
}

impl QubitPair {
    /// Record as stored under `qubit_pairs`
    /// Gantree: to_json() -> Value // 상태 문서 형식
    pub fn to_json(&self) -> Value {
        json!({
            (keys::PAIR_ID): self.id,
            (keys::QUBIT_CONTROL): qubit_ref(&self.control),
            (keys::QUBIT_TARGET): qubit_ref(&self.target),
        })
    }
}

impl fmt::Display for QubitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.id, self.control, self.target)
    }
}

// ============================================================================
// QubitPairSet
// ============================================================================

/// Directed pairs in discovery order
/// Gantree: QubitPairSet // 쌍 집합
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QubitPairSet {
    pairs: Vec<QubitPair>,
}

impl QubitPairSet {
    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair by identifier
    pub fn get(&self, id: &str) -> Option<&QubitPair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    /// Iterate in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &QubitPair> {
        self.pairs.iter()
    }

    /// Pairs controlled by a qubit
    pub fn controlled_by(&self, qubit: &str) -> Vec<&QubitPair> {
        self.pairs.iter().filter(|p| p.control == qubit).collect()
    }

    /// Mapping `id -> record` in the state document layout
    /// Gantree: to_json_map() -> Value // qubit_pairs 섹션
    pub fn to_json_map(&self) -> Value {
        let map: JsonObject = self
            .pairs
            .iter()
            .map(|p| (p.id.clone(), p.to_json()))
            .collect();
        Value::Object(map)
    }

    /// New state document whose `qubit_pairs` is replaced by this set
    /// Gantree: merge_into_state(state) -> Result<StateDocument> // 전체 교체
    ///
    /// Pre-existing pair records are dropped, not merged.
    pub fn merge_into_state(&self, state: &StateDocument) -> QstateResult<StateDocument> {
        if let Some(previous) = state.qubit_pairs() {
            log::info!(
                "replacing {} existing qubit pairs with {}",
                previous.len(),
                self.pairs.len()
            );
        }
        state.with_section(keys::QUBIT_PAIRS, self.to_json_map())
    }
}

impl FromIterator<QubitPair> for QubitPairSet {
    fn from_iter<I: IntoIterator<Item = QubitPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QubitPairSet {
    type Item = &'a QubitPair;
    type IntoIter = std::slice::Iter<'a, QubitPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Direct one adjacent pair
/// Gantree: direct_pair(pair,freqs) -> Result<QubitPair> // 역할 지정
pub fn direct_pair<F>(pair: &AdjacentPair, frequencies: &F) -> QstateResult<QubitPair>
where
    F: DriveFrequencies + ?Sized,
{
    let f1 = drive_frequency(frequencies, &pair.first, pair)?;
    let f2 = drive_frequency(frequencies, &pair.second, pair)?;

    let (control, target) = if f1 > f2 {
        (&pair.first, &pair.second)
    } else {
        (&pair.second, &pair.first)
    };

    Ok(QubitPair {
        id: pair.id(),
        control: control.clone(),
        target: target.clone(),
    })
}

fn drive_frequency<F>(frequencies: &F, qubit: &str, pair: &AdjacentPair) -> QstateResult<Hertz>
where
    F: DriveFrequencies + ?Sized,
{
    frequencies
        .drive_frequency(qubit)
        .ok_or_else(|| QstateError::QubitNotFound {
            qubit: qubit.to_string(),
            context: format!("no resolved drive frequency for pair {}", pair.id()),
        })
}

/// Direct every adjacent pair
/// Gantree: direct_pairs(adjacent,freqs) -> Result<QubitPairSet> // 진입점
///
/// Fails on the first pair with an unresolved qubit; no partial set is
/// returned.
pub fn direct_pairs<F>(adjacent: &AdjacencySet, frequencies: &F) -> QstateResult<QubitPairSet>
where
    F: DriveFrequencies + ?Sized,
{
    let pairs = adjacent
        .iter()
        .map(|pair| direct_pair(pair, frequencies))
        .collect::<QstateResult<Vec<_>>>()?;

    log::debug!("directed {} qubit pairs", pairs.len());
    Ok(QubitPairSet { pairs })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs(entries: &[(&str, f64)]) -> HashMap<QubitName, Hertz> {
        entries.iter().map(|(q, f)| (q.to_string(), *f)).collect()
    }

    #[test]
    fn test_higher_frequency_controls_regardless_of_order() {
        let f = freqs(&[("qA", 4.95e9), ("qB", 4.80e9)]);

        let forward = direct_pair(&AdjacentPair::new("qA", "qB"), &f).unwrap();
        assert_eq!((forward.control.as_str(), forward.target.as_str()), ("qA", "qB"));
        assert_eq!(forward.id, "qA-qB");

        let reverse = direct_pair(&AdjacentPair::new("qB", "qA"), &f).unwrap();
        assert_eq!((reverse.control.as_str(), reverse.target.as_str()), ("qA", "qB"));
        assert_eq!(reverse.id, "qB-qA");
    }

    #[test]
    fn test_tie_gives_control_to_second() {
        let f = freqs(&[("q1", 5e9), ("q2", 5e9)]);
        let pair = direct_pair(&AdjacentPair::new("q1", "q2"), &f).unwrap();

        assert_eq!(pair.control, "q2");
        assert_eq!(pair.target, "q1");
    }

    #[test]
    fn test_missing_frequency_is_not_found() {
        let f = freqs(&[("q1", 5e9)]);
        let adjacency = AdjacencySet::from_pairs(vec![AdjacentPair::new("q1", "q2")]);
        let err = direct_pairs(&adjacency, &f).unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, QstateError::QubitNotFound { ref qubit, .. } if qubit == "q2"));
    }

    #[test]
    fn test_directing_is_idempotent() {
        let f = freqs(&[("q1", 5.1e9), ("q2", 4.9e9), ("q3", 5.3e9)]);
        let adjacency = AdjacencySet::from_pairs(vec![
            AdjacentPair::new("q1", "q2"),
            AdjacentPair::new("q2", "q3"),
        ]);

        let first = direct_pairs(&adjacency, &f).unwrap();
        let second = direct_pairs(&adjacency, &f).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_json_map(), second.to_json_map());
        assert_eq!(first.controlled_by("q3").len(), 1);
    }

    #[test]
    fn test_record_layout() {
        let pair = QubitPair {
            id: "Q1-Q2".to_string(),
            control: "Q1".to_string(),
            target: "Q2".to_string(),
        };

        assert_eq!(
            pair.to_json(),
            json!({
                "id": "Q1-Q2",
                "qubit_control": "#/qubits/Q1",
                "qubit_target": "#/qubits/Q2"
            })
        );
    }

    #[test]
    fn test_merge_replaces_wholesale() {
        let state = StateDocument::new(json!({
            "qubits": {"q1": {}, "q2": {}},
            "qubit_pairs": {
                "old-pair": {"id": "old-pair"},
                "q1-q2": {"id": "q1-q2", "qubit_control": "#/qubits/q2"}
            }
        }));
        let set: QubitPairSet = vec![QubitPair {
            id: "q1-q2".to_string(),
            control: "q1".to_string(),
            target: "q2".to_string(),
        }]
        .into_iter()
        .collect();

        let merged = set.merge_into_state(&state).unwrap();
        let pairs = merged.qubit_pairs().unwrap();

        assert_eq!(pairs.len(), 1);
        assert!(!pairs.contains_key("old-pair"));
        assert_eq!(pairs["q1-q2"]["qubit_control"], "#/qubits/q1");

        // input untouched
        assert!(state.qubit_pairs().unwrap().contains_key("old-pair"));
    }

    #[test]
    fn test_merge_into_non_object_state() {
        let state = StateDocument::new(json!([1, 2, 3]));
        let err = QubitPairSet::default().merge_into_state(&state).unwrap_err();
        assert!(err.is_format_error());
    }
}
