//! # qstate Core
//!
//! Errors, typed references, documents, and grid adjacency for QuAM state
//! utilities.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qstate_core // L0+L1: Foundation + Topology (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // PortRef, GridLocation, AdjacentPair, MwBand (완료)
//!         Constants // 키/스킴/대역 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!         Documents // state/wiring 문서 (완료)
//!         Verify // 저장본 일치 검증 (완료)
//!     L1_Topology // 그리드 인접성 (완료)
//!         AdjacencyFinder // 인접 쌍 탐색 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qstate_core::prelude::*;
//! use serde_json::json;
//!
//! let state = StateDocument::new(json!({
//!     "qubits": {
//!         "q1": {"grid_location": "0,0"},
//!         "q2": {"grid_location": "1,0"},
//!         "q3": {"grid_location": "1,1"}
//!     }
//! }));
//!
//! let adjacency = find_adjacent_pairs(&state).unwrap();
//! assert_eq!(adjacency.len(), 2);
//! assert!(adjacency.contains("q2", "q3"));
//! assert!(!adjacency.contains("q1", "q3")); // diagonal
//! ```
//!
//! ## Port References
//!
//! ```rust
//! use qstate_core::PortRef;
//!
//! let port = PortRef::parse("#/ports/mw_outputs/con1/2/5").unwrap();
//! assert_eq!(port.controller, "con1");
//! assert_eq!((port.module, port.port), (2, 5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// State and wiring documents (Gantree: L0_Foundation → Documents)
pub mod document;

/// Stored-copy verification (Gantree: L0_Foundation → Verify)
pub mod verify;

/// Grid adjacency (Gantree: L1_Topology → AdjacencyFinder)
pub mod grid;

// ============================================================================
// Re-exports
// ============================================================================

pub use constants::{bands, display, files, keys, scheme};
pub use document::{DocumentPaths, JsonObject, StateDocument, WiringDocument};
pub use error::{QstateError, QstateResult};
pub use grid::{
    collect_grid_locations, find_adjacent_pairs, find_adjacent_pairs_bucketed, AdjacencySet,
    GridLocations,
};
pub use types::{qubit_ref, AdjacentPair, GridLocation, Hertz, MwBand, PortRef, QubitName};
pub use verify::{first_difference, verify_consistent};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qstate_core::prelude::*;
    //! ```

    pub use crate::document::{DocumentPaths, StateDocument, WiringDocument};
    pub use crate::error::{QstateError, QstateResult};
    pub use crate::grid::{
        collect_grid_locations, find_adjacent_pairs, find_adjacent_pairs_bucketed, AdjacencySet,
        GridLocations,
    };
    pub use crate::types::{AdjacentPair, GridLocation, Hertz, MwBand, PortRef, QubitName};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use serde_json::json;

    #[test]
    fn test_state_roundtrip_through_file_keeps_adjacency() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let state = StateDocument::new(json!({
            "qubits": {
                "qC2": {"grid_location": "1,0"},
                "qC1": {"grid_location": "2,0"},
                "qC4": {"grid_location": "1,1"}
            }
        }));
        state.save(&path).unwrap();

        let loaded = StateDocument::load(&path).unwrap();
        let adjacency = find_adjacent_pairs(&loaded).unwrap();

        assert_eq!(
            adjacency.pairs(),
            &[AdjacentPair::new("qC2", "qC1"), AdjacentPair::new("qC2", "qC4")]
        );
    }

    #[test]
    fn test_grid_and_port_parsing_share_error_class() {
        assert!(GridLocation::parse("1").unwrap_err().is_format_error());
        assert!(PortRef::parse("#/ports/mw_outputs/con1")
            .unwrap_err()
            .is_format_error());
    }

    #[test]
    fn test_version_info() {
        assert_eq!(super::NAME, "qstate_core");
        assert!(!super::VERSION.is_empty());
    }
}
