//! Grid adjacency for qstate
//!
//! Gantree: L1_Topology → AdjacencyFinder
//!
//! Parses each qubit's `grid_location` and derives the orthogonally adjacent
//! qubit pairs. Only qubits declaring a grid location participate.

use crate::constants::keys;
use crate::document::StateDocument;
use crate::error::{QstateError, QstateResult};
use crate::types::{AdjacentPair, GridLocation, QubitName};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============================================================================
// GridLocations
// ============================================================================

/// Raw grid locations in declaration order
/// Gantree: GridLocations // 좌표 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLocations {
    entries: Vec<(QubitName, String)>,
}

impl GridLocations {
    /// Collect every qubit's `grid_location` string
    /// Gantree: collect(state) -> Result<Self> // 좌표 수집
    pub fn collect(state: &StateDocument) -> QstateResult<Self> {
        let mut entries = Vec::new();

        for (name, qubit) in state.qubits()? {
            let Some(raw) = qubit.get(keys::GRID_LOCATION) else {
                continue;
            };
            let raw = raw.as_str().ok_or_else(|| {
                QstateError::format(
                    format!("qubits/{}/{}", name, keys::GRID_LOCATION),
                    "expected a string",
                )
            })?;
            entries.push((name.clone(), raw.to_string()));
        }

        Ok(Self { entries })
    }

    /// Number of qubits with a location
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw location of a qubit
    pub fn get(&self, qubit: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == qubit)
            .map(|(_, raw)| raw.as_str())
    }

    /// Iterate in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }

    /// Parse every location
    /// Gantree: parsed() -> Result<Vec<(name,GridLocation)>> // 좌표 파싱
    pub fn parsed(&self) -> QstateResult<Vec<(QubitName, GridLocation)>> {
        self.entries
            .iter()
            .map(|(name, raw)| {
                GridLocation::parse(raw)
                    .map(|loc| (name.clone(), loc))
                    .map_err(|err| match err {
                        QstateError::Format { reason, .. } => QstateError::format(
                            format!("qubits/{}/{}", name, keys::GRID_LOCATION),
                            format!("{} (got '{}')", reason, raw),
                        ),
                        other => other,
                    })
            })
            .collect()
    }

    /// JSON object qubit → location, declaration order
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(n, r)| (n.clone(), Value::String(r.clone())))
            .collect();
        Value::Object(map)
    }

    /// `grid_locations = {...}` literal, sorted by qubit name
    pub fn to_python_literal(&self) -> String {
        let sorted: BTreeMap<&str, &str> = self.iter().collect();
        let mut out = String::from("grid_locations = {\n");
        for (name, raw) in sorted {
            out.push_str(&format!("    \"{}\": \"{}\",\n", name, raw));
        }
        out.push_str("}\n");
        out
    }
}

/// Collect raw grid locations from a state document
pub fn collect_grid_locations(state: &StateDocument) -> QstateResult<GridLocations> {
    GridLocations::collect(state)
}

// ============================================================================
// AdjacencySet
// ============================================================================

/// Adjacent qubit pairs in discovery order
/// Gantree: AdjacencySet // 인접 집합
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencySet {
    pairs: Vec<AdjacentPair>,
}

impl AdjacencySet {
    /// Build from pairs, dropping self-pairs and swapped duplicates
    pub fn from_pairs(pairs: impl IntoIterator<Item = AdjacentPair>) -> Self {
        let mut set = Self::default();
        for pair in pairs {
            if pair.first == pair.second || set.contains(&pair.first, &pair.second) {
                continue;
            }
            set.pairs.push(pair);
        }
        set
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in discovery order
    pub fn pairs(&self) -> &[AdjacentPair] {
        &self.pairs
    }

    /// Iterate over pairs
    pub fn iter(&self) -> impl Iterator<Item = &AdjacentPair> {
        self.pairs.iter()
    }

    /// Check adjacency regardless of orientation
    /// Gantree: contains(q1,q2) -> bool // 인접 여부
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.iter().any(|p| p.matches(a, b))
    }

    /// Neighbours of a qubit, in discovery order
    pub fn neighbors(&self, qubit: &str) -> Vec<&str> {
        self.pairs.iter().filter_map(|p| p.partner(qubit)).collect()
    }

    /// Number of neighbours
    pub fn degree(&self, qubit: &str) -> usize {
        self.neighbors(qubit).len()
    }
}

impl fmt::Display for AdjacencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adjacency({} pairs)", self.pairs.len())
    }
}

// ============================================================================
// Adjacency Finders
// ============================================================================

/// Find adjacent pairs by exhaustive pairwise comparison
/// Gantree: find_adjacent_pairs(state) -> Result<AdjacencySet> // O(n²)
///
/// For qubits `i < j` in declaration order the pair is reported as `(i, j)`.
pub fn find_adjacent_pairs(state: &StateDocument) -> QstateResult<AdjacencySet> {
    let located = GridLocations::collect(state)?.parsed()?;
    let mut pairs = Vec::new();

    for i in 0..located.len() {
        for j in i + 1..located.len() {
            let (q1, loc1) = &located[i];
            let (q2, loc2) = &located[j];
            if loc1.is_adjacent(loc2) {
                pairs.push(AdjacentPair::new(q1.clone(), q2.clone()));
            }
        }
    }

    log::debug!(
        "found {} adjacent pairs among {} located qubits",
        pairs.len(),
        located.len()
    );
    Ok(AdjacencySet { pairs })
}

/// Find adjacent pairs by bucketing qubits by coordinate
/// Gantree: find_adjacent_pairs_bucketed(state) -> Result<AdjacencySet> // 해시 그리드
///
/// Probes the four axis neighbours of each qubit. Yields the same pairs in
/// the same order as [`find_adjacent_pairs`].
pub fn find_adjacent_pairs_bucketed(state: &StateDocument) -> QstateResult<AdjacencySet> {
    let located = GridLocations::collect(state)?.parsed()?;

    let mut buckets: HashMap<GridLocation, Vec<usize>> = HashMap::new();
    for (index, (_, loc)) in located.iter().enumerate() {
        buckets.entry(*loc).or_default().push(index);
    }

    let mut indices = Vec::new();
    for (i, (_, loc)) in located.iter().enumerate() {
        for neighbor in loc.neighbors() {
            if let Some(bucket) = buckets.get(&neighbor) {
                indices.extend(bucket.iter().filter(|&&j| j > i).map(|&j| (i, j)));
            }
        }
    }
    indices.sort_unstable();

    let pairs = indices
        .into_iter()
        .map(|(i, j)| AdjacentPair::new(located[i].0.clone(), located[j].0.clone()))
        .collect();

    Ok(AdjacencySet { pairs })
}

// ============================================================================
// Tests
// ============================================================================
