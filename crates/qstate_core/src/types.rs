//! Core types for qstate
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Typed values parsed out of the raw documents: port references, grid
//! coordinates, adjacent qubit pairs and MW-FEM bands.

use crate::constants::{bands, scheme};
use crate::error::{QstateError, QstateResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit name as it appears in the `qubits` table
/// Gantree: QubitName // pub type QubitName = String
pub type QubitName = String;

/// Frequency in Hz
pub type Hertz = f64;

/// Reference string to a qubit (`#/qubits/<name>`)
pub fn qubit_ref(name: &str) -> String {
    format!("{}{}", scheme::QUBIT_PREFIX, name)
}

// ============================================================================
// PortRef
// ============================================================================

/// Address of an upconverted MW output port
/// Gantree: PortRef // 포트 참조
///
/// Textual form: `#/ports/mw_outputs/<controller>/<module>/<port>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PortRef {
    /// Controller identifier (e.g. `con1`)
    pub controller: String,
    /// Front-end module slot
    pub module: u32,
    /// Output port on the module
    pub port: u32,
}

impl PortRef {
    /// Create a port reference
    pub fn new(controller: impl Into<String>, module: u32, port: u32) -> Self {
        Self {
            controller: controller.into(),
            module,
            port,
        }
    }

    /// Check whether a reference string uses the MW output scheme
    /// Gantree: has_mw_output_scheme(s) -> bool // 스킴 확인
    pub fn has_mw_output_scheme(reference: &str) -> bool {
        reference.starts_with(scheme::MW_OUTPUT_PREFIX)
    }

    /// Parse a reference string
    /// Gantree: parse(s) -> Result<Self> // 파싱
    ///
    /// Fails with a format error on scheme mismatch or when the body is not
    /// `<controller>/<int>/<int>`.
    pub fn parse(reference: &str) -> QstateResult<Self> {
        let body = reference
            .strip_prefix(scheme::MW_OUTPUT_PREFIX)
            .ok_or_else(|| {
                QstateError::format(
                    reference,
                    format!("expected a '{}' reference", scheme::MW_OUTPUT_PREFIX),
                )
            })?;

        let parts: Vec<&str> = body.split('/').collect();
        let [controller, module, port] = parts.as_slice() else {
            return Err(QstateError::format(
                reference,
                "expected <controller>/<module>/<port>",
            ));
        };

        if controller.is_empty() {
            return Err(QstateError::format(reference, "empty controller id"));
        }

        let module = parse_index(reference, "module", *module)?;
        let port = parse_index(reference, "port", *port)?;

        Ok(Self::new(*controller, module, port))
    }
}

fn parse_index(reference: &str, what: &str, raw: &str) -> QstateResult<u32> {
    raw.parse::<u32>().map_err(|_| {
        QstateError::format(reference, format!("{} index '{}' is not an integer", what, raw))
    })
}

impl FromStr for PortRef {
    type Err = QstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}/{}",
            scheme::MW_OUTPUT_PREFIX,
            self.controller,
            self.module,
            self.port
        )
    }
}

// ============================================================================
// GridLocation
// ============================================================================

/// Position of a qubit on the 2-D layout grid
/// Gantree: GridLocation // 그리드 좌표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridLocation {
    /// Column
    pub x: i64,
    /// Row
    pub y: i64,
}

impl GridLocation {
    /// Create a grid location
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Parse `"x,y"`
    /// Gantree: parse(s) -> Result<Self> // 파싱
    pub fn parse(s: &str) -> QstateResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        let [x, y] = parts.as_slice() else {
            return Err(QstateError::format(
                s,
                "grid location must be two integers separated by a comma",
            ));
        };

        let coord = |raw: &str| {
            raw.trim().parse::<i64>().map_err(|_| {
                QstateError::format(s, format!("grid coordinate '{}' is not an integer", raw))
            })
        };

        Ok(Self::new(coord(*x)?, coord(*y)?))
    }

    /// Check orthogonal adjacency (unit distance along exactly one axis)
    /// Gantree: is_adjacent(other) -> bool // 인접 여부
    pub fn is_adjacent(&self, other: &GridLocation) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }

    /// The axis neighbours that fit in the coordinate range (up to four)
    pub fn neighbors(&self) -> Vec<GridLocation> {
        [
            self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            self.x.checked_add(1).map(|x| Self::new(x, self.y)),
            self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            self.y.checked_add(1).map(|y| Self::new(self.x, y)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl FromStr for GridLocation {
    type Err = QstateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

// ============================================================================
// AdjacentPair
// ============================================================================

/// Unordered pair of adjacent qubits, kept in discovery order
/// Gantree: AdjacentPair // 인접 쌍
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjacentPair {
    /// Earlier-declared qubit
    pub first: QubitName,
    /// Later-declared qubit
    pub second: QubitName,
}

impl AdjacentPair {
    /// Create a pair
    pub fn new(first: impl Into<QubitName>, second: impl Into<QubitName>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Pair identifier `"{first}-{second}"`
    pub fn id(&self) -> String {
        format!("{}-{}", self.first, self.second)
    }

    /// Check membership
    pub fn contains(&self, qubit: &str) -> bool {
        self.first == qubit || self.second == qubit
    }

    /// Same pair regardless of orientation
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    /// The other member, if `qubit` belongs to the pair
    pub fn partner(&self, qubit: &str) -> Option<&str> {
        if self.first == qubit {
            Some(&self.second)
        } else if self.second == qubit {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for AdjacentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// MwBand
// ============================================================================

/// MW front-end upconverter band
/// Gantree: MwBand // 1/2/3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MwBand {
    /// 50 MHz to 4.5 GHz
    Band1,
    /// 4.5 GHz to 6.5 GHz
    Band2,
    /// 6.5 GHz to 10.5 GHz
    Band3,
}

impl MwBand {
    /// Classify an LO frequency
    /// Gantree: from_frequency(hz) -> Result<Self> // 대역 판정
    pub fn from_frequency(hz: Hertz) -> QstateResult<Self> {
        if (bands::BAND_1_MIN_HZ..bands::BAND_2_MIN_HZ).contains(&hz) {
            Ok(MwBand::Band1)
        } else if (bands::BAND_2_MIN_HZ..bands::BAND_3_MIN_HZ).contains(&hz) {
            Ok(MwBand::Band2)
        } else if (bands::BAND_3_MIN_HZ..=bands::BAND_3_MAX_HZ).contains(&hz) {
            Ok(MwBand::Band3)
        } else {
            Err(QstateError::FrequencyOutOfBand(hz))
        }
    }

    /// Band number as configured on the hardware
    pub fn number(&self) -> u8 {
        match self {
            MwBand::Band1 => 1,
            MwBand::Band2 => 2,
            MwBand::Band3 => 3,
        }
    }
}

impl fmt::Display for MwBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ============================================================================
// Tests
// ============================================================================
