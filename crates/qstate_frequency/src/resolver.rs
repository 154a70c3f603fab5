//! Frequency resolver
//!
//! Gantree: L2_Frequency → FrequencyResolver
//!
//! Combines each qubit's intermediate frequencies (state document) with the
//! LO of the port its line is wired to (wiring document). The drive and
//! readout lines are resolved independently; a qubit is kept only when both
//! resolve. Missing data excludes the qubit; malformed data fails.

use crate::port_map::PortFrequencyMap;
use qstate_core::{
    keys, Hertz, JsonObject, PortRef, QstateError, QstateResult, QubitName, StateDocument,
    WiringDocument,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ============================================================================
// Line
// ============================================================================

/// Qubit signal line
/// Gantree: Line // xy/resonator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Drive line
    Xy,
    /// Readout line
    Resonator,
}

impl Line {
    /// Key of the line's block in a state qubit record
    pub fn state_key(&self) -> &'static str {
        match self {
            Line::Xy => keys::XY,
            Line::Resonator => keys::RESONATOR,
        }
    }

    /// Key of the line in a wiring qubit entry
    pub fn wiring_key(&self) -> &'static str {
        match self {
            Line::Xy => keys::XY,
            Line::Resonator => keys::RR,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state_key())
    }
}

// ============================================================================
// LineFrequency
// ============================================================================

/// Intermediate and LO frequency of one resolved line
/// Gantree: LineFrequency // IF+LO
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFrequency {
    /// Intermediate frequency (Hz)
    pub intermediate: Hertz,
    /// LO frequency of the wired port (Hz)
    pub lo: Hertz,
}

impl LineFrequency {
    /// Absolute frequency, `lo + intermediate`
    #[inline]
    pub fn total(&self) -> Hertz {
        self.lo + self.intermediate
    }
}

// ============================================================================
// DerivedFrequency
// ============================================================================

/// Absolute drive and readout frequencies of one qubit
/// Gantree: DerivedFrequency // 큐비트 주파수
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedFrequency {
    /// Qubit name
    pub qubit: QubitName,
    /// Drive intermediate frequency (Hz)
    pub xy_intermediate: Hertz,
    /// Drive LO frequency (Hz)
    pub xy_lo: Hertz,
    /// Drive absolute frequency (Hz)
    pub xy_total: Hertz,
    /// Readout intermediate frequency (Hz)
    pub rr_intermediate: Hertz,
    /// Readout LO frequency (Hz)
    pub rr_lo: Hertz,
    /// Readout absolute frequency (Hz)
    pub rr_total: Hertz,
}

impl DerivedFrequency {
    /// Build from the two resolved lines
    pub fn from_lines(qubit: impl Into<QubitName>, xy: LineFrequency, rr: LineFrequency) -> Self {
        Self {
            qubit: qubit.into(),
            xy_intermediate: xy.intermediate,
            xy_lo: xy.lo,
            xy_total: xy.total(),
            rr_intermediate: rr.intermediate,
            rr_lo: rr.lo,
            rr_total: rr.total(),
        }
    }
}

impl fmt::Display for DerivedFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(xy={:.6}GHz, rr={:.6}GHz)",
            self.qubit,
            self.xy_total / 1e9,
            self.rr_total / 1e9
        )
    }
}

// ============================================================================
// DerivedFrequencySet
// ============================================================================

/// Resolved qubits in declaration order
/// Gantree: DerivedFrequencySet // 결과 집합
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedFrequencySet {
    records: Vec<DerivedFrequency>,
}

impl DerivedFrequencySet {
    /// Number of resolved qubits
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record of a qubit
    pub fn get(&self, qubit: &str) -> Option<&DerivedFrequency> {
        self.records.iter().find(|r| r.qubit == qubit)
    }

    /// Absolute drive frequency of a qubit
    /// Gantree: xy_total(q) -> Option<f64> // 구동 주파수
    pub fn xy_total(&self, qubit: &str) -> Option<Hertz> {
        self.get(qubit).map(|r| r.xy_total)
    }

    /// Check membership
    pub fn contains(&self, qubit: &str) -> bool {
        self.get(qubit).is_some()
    }

    /// Records in declaration order
    pub fn records(&self) -> &[DerivedFrequency] {
        &self.records
    }

    /// Iterate in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &DerivedFrequency> {
        self.records.iter()
    }

    /// Records ordered by ascending drive frequency (stable)
    pub fn sorted_by_xy_total(&self) -> Vec<&DerivedFrequency> {
        let mut sorted: Vec<_> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.xy_total.total_cmp(&b.xy_total));
        sorted
    }
}

impl FromIterator<DerivedFrequency> for DerivedFrequencySet {
    fn from_iter<I: IntoIterator<Item = DerivedFrequency>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DerivedFrequencySet {
    type Item = &'a DerivedFrequency;
    type IntoIter = std::slice::Iter<'a, DerivedFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ============================================================================
// FrequencyResolver
// ============================================================================

/// Resolver over one state/wiring snapshot
/// Gantree: FrequencyResolver // 주파수 해석기
pub struct FrequencyResolver<'a> {
    state: &'a StateDocument,
    wired_qubits: &'a JsonObject,
    ports: PortFrequencyMap,
}

impl<'a> FrequencyResolver<'a> {
    /// Index the wiring ports and check the required sections
    /// Gantree: new(state,wiring) -> Result<Self> // 생성+검증
    pub fn new(state: &'a StateDocument, wiring: &'a WiringDocument) -> QstateResult<Self> {
        state.qubits()?;
        let ports = PortFrequencyMap::from_wiring(wiring)?;
        let wired_qubits = wiring.wired_qubits()?;

        Ok(Self {
            state,
            wired_qubits,
            ports,
        })
    }

    /// The port frequency map in use
    pub fn ports(&self) -> &PortFrequencyMap {
        &self.ports
    }

    /// Resolve every qubit, keeping those with both lines resolved
    /// Gantree: resolve() -> Result<DerivedFrequencySet> // 전체 해석
    pub fn resolve(&self) -> QstateResult<DerivedFrequencySet> {
        let mut records = Vec::new();

        for (name, record) in self.state.qubits()? {
            if let Some(derived) = self.resolve_qubit(name, record)? {
                records.push(derived);
            }
        }

        log::debug!("resolved frequencies for {} qubits", records.len());
        Ok(DerivedFrequencySet { records })
    }

    /// Resolve one qubit record
    pub fn resolve_qubit(&self, name: &str, record: &Value) -> QstateResult<Option<DerivedFrequency>> {
        let xy = self.resolve_line(name, record, Line::Xy)?;
        let rr = self.resolve_line(name, record, Line::Resonator)?;

        Ok(match (xy, rr) {
            (Some(xy), Some(rr)) => Some(DerivedFrequency::from_lines(name, xy, rr)),
            _ => {
                log::debug!("excluding qubit {}: unresolved line", name);
                None
            }
        })
    }

    /// Resolve one line of a qubit
    /// Gantree: resolve_line(q,record,line) -> Result<Option<LineFrequency>> // 라인 해석
    ///
    /// `Ok(None)` when data is missing: no state block, not wired, a
    /// reference outside the MW output scheme, or a port without LO.
    pub fn resolve_line(
        &self,
        name: &str,
        record: &Value,
        line: Line,
    ) -> QstateResult<Option<LineFrequency>> {
        let Some(block) = record.get(line.state_key()) else {
            return Ok(unresolved(name, line, "no block in state"));
        };
        let intermediate = intermediate_frequency(name, line, block)?;

        let Some(reference) = self
            .wired_qubits
            .get(name)
            .and_then(|entry| entry.get(line.wiring_key()))
            .and_then(|wired| wired.get(keys::OPX_OUTPUT))
        else {
            return Ok(unresolved(name, line, "not wired"));
        };

        let reference = reference.as_str().ok_or_else(|| {
            QstateError::format(
                format!(
                    "{}/{}/{}/{}/{}",
                    keys::WIRING,
                    keys::QUBITS,
                    name,
                    line.wiring_key(),
                    keys::OPX_OUTPUT
                ),
                "expected a reference string",
            )
        })?;

        if !PortRef::has_mw_output_scheme(reference) {
            return Ok(unresolved(name, line, reference));
        }
        let port = PortRef::parse(reference)?;

        match self.ports.lo_frequency(&port) {
            Some(lo) => Ok(Some(LineFrequency { intermediate, lo })),
            None => Ok(unresolved(name, line, "port has no upconverter frequency")),
        }
    }
}

fn unresolved(name: &str, line: Line, reason: &str) -> Option<LineFrequency> {
    log::debug!("{} {} line unresolved: {}", name, line, reason);
    None
}

fn intermediate_frequency(name: &str, line: Line, block: &Value) -> QstateResult<Hertz> {
    let path = || format!("{}/{}/{}", keys::QUBITS, name, line.state_key());

    let block = block
        .as_object()
        .ok_or_else(|| QstateError::format(path(), "expected an object"))?;

    match block.get(keys::INTERMEDIATE_FREQUENCY) {
        None => Ok(0.0),
        Some(value) => value.as_f64().ok_or_else(|| {
            QstateError::format(
                format!("{}/{}", path(), keys::INTERMEDIATE_FREQUENCY),
                "expected a number",
            )
        }),
    }
}

/// Resolve absolute frequencies for every fully wired qubit
/// Gantree: resolve_frequencies(state,wiring) -> Result<DerivedFrequencySet> // 진입점
pub fn resolve_frequencies(
    state: &StateDocument,
    wiring: &WiringDocument,
) -> QstateResult<DerivedFrequencySet> {
    FrequencyResolver::new(state, wiring)?.resolve()
}

// ============================================================================
// Tests
// ============================================================================
