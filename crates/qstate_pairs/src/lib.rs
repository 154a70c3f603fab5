//! # qstate Pairs
//!
//! Directed qubit pairs from grid adjacency and drive frequencies.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qstate_pairs // L3: Pairs (완료)
//!     PairDirector // 제어/타깃 지정 (완료)
//!         direct_pairs() - 높은 주파수 → control, 동률 → 두 번째
//!         QubitPairSet::merge_into_state() - qubit_pairs 전체 교체
//!     Pipeline // resolve → adjacency → direct (완료)
//!     PairReport // 대역 색상 목록 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qstate_pairs::prelude::*;
//! use std::collections::HashMap;
//!
//! let adjacency = AdjacencySet::from_pairs(vec![AdjacentPair::new("q1", "q2")]);
//! let frequencies: HashMap<QubitName, Hertz> =
//!     [("q1".to_string(), 4.80e9), ("q2".to_string(), 4.95e9)].into();
//!
//! let pairs = direct_pairs(&adjacency, &frequencies).unwrap();
//! let pair = pairs.get("q1-q2").unwrap();
//! assert_eq!(pair.control, "q2");
//! assert_eq!(pair.target, "q1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Pair direction (Gantree: L3_Pairs → PairDirector)
pub mod director;

/// End-to-end derivation (Gantree: L3_Pairs → Pipeline)
pub mod pipeline;

/// Pair listing (Gantree: L3_Pairs → PairReport)
pub mod report;

// ============================================================================
// Re-exports
// ============================================================================

pub use director::{direct_pair, direct_pairs, DriveFrequencies, QubitPair, QubitPairSet};
pub use pipeline::{derive_qubit_pairs, PairDerivation};
pub use report::{band_color, render_pair, render_pair_listing};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qstate_pairs::prelude::*;
    //! ```

    pub use crate::director::{direct_pairs, DriveFrequencies, QubitPair, QubitPairSet};
    pub use crate::pipeline::{derive_qubit_pairs, PairDerivation};
    pub use crate::report::render_pair_listing;
    pub use qstate_frequency::prelude::*;
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
