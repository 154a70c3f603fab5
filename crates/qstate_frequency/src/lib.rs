//! # qstate Frequency
//!
//! Absolute drive and readout frequencies from the QuAM state and wiring
//! documents.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qstate_frequency // L2: Frequency (완료)
//!     PortFrequencyMap // 포트→LO 맵 (완료)
//!         from_wiring(), lo_frequency()
//!     FrequencyResolver // 주파수 해석 (완료)
//!         resolve_frequencies() - IF + LO
//!         resolve_line() - xy/resonator 독립 해석
//!     FrequencyTable // JSON 열 형식 (완료)
//!     FrequencyReport // 텍스트 테이블 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qstate_frequency::prelude::*;
//! use serde_json::json;
//!
//! let state = StateDocument::new(json!({
//!     "qubits": {
//!         "q1": {
//!             "xy": {"intermediate_frequency": 100e6},
//!             "resonator": {"intermediate_frequency": -20e6}
//!         }
//!     }
//! }));
//! let wiring = WiringDocument::new(json!({
//!     "ports": {"mw_outputs": {"con1": {"1": {
//!         "1": {"upconverter_frequency": 5e9},
//!         "2": {"upconverter_frequency": 7e9}
//!     }}}},
//!     "wiring": {"qubits": {"q1": {
//!         "xy": {"opx_output": "#/ports/mw_outputs/con1/1/1"},
//!         "rr": {"opx_output": "#/ports/mw_outputs/con1/1/2"}
//!     }}}
//! }));
//!
//! let frequencies = resolve_frequencies(&state, &wiring).unwrap();
//! assert_eq!(frequencies.xy_total("q1"), Some(5.1e9));
//! assert_eq!(frequencies.get("q1").unwrap().rr_total, 6.98e9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Port LO map (Gantree: L2_Frequency → PortFrequencyMap)
pub mod port_map;

/// Frequency resolution (Gantree: L2_Frequency → FrequencyResolver)
pub mod resolver;

/// Column table (Gantree: L2_Frequency → FrequencyTable)
pub mod table;

/// Text report (Gantree: L2_Frequency → FrequencyReport)
pub mod report;

// ============================================================================
// Re-exports
// ============================================================================

pub use port_map::PortFrequencyMap;
pub use report::{render_frequency_table, ReportConfig};
pub use resolver::{
    resolve_frequencies, DerivedFrequency, DerivedFrequencySet, FrequencyResolver, Line,
    LineFrequency,
};
pub use table::FrequencyTable;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qstate_frequency::prelude::*;
    //! ```

    pub use crate::report::{render_frequency_table, ReportConfig};
    pub use crate::resolver::{resolve_frequencies, DerivedFrequency, DerivedFrequencySet};
    pub use crate::table::FrequencyTable;
    pub use qstate_core::prelude::*;
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
