//! Constants for qstate
//!
//! Gantree: L0_Foundation → Constants
//!
//! Document keys, reference schemes, MW-FEM band edges and display thresholds.

// ============================================================================
// Reference Schemes
// Gantree: scheme // 참조 스킴
// ============================================================================

pub mod scheme {
    //! JSON-pointer-like reference prefixes used inside the documents

    /// Prefix of an upconverted MW output port reference
    /// Gantree: MW_OUTPUT_PREFIX = "#/ports/mw_outputs/"
    pub const MW_OUTPUT_PREFIX: &str = "#/ports/mw_outputs/";

    /// Prefix of a qubit reference in the state document
    pub const QUBIT_PREFIX: &str = "#/qubits/";
}

// ============================================================================
// Document Keys
// Gantree: keys // 문서 키
// ============================================================================

pub mod keys {
    //! Section and field names of the state and wiring documents

    /// State: qubit table
    pub const QUBITS: &str = "qubits";
    /// State: directed qubit pairs
    pub const QUBIT_PAIRS: &str = "qubit_pairs";
    /// Wiring: port tables
    pub const PORTS: &str = "ports";
    /// Wiring: upconverted MW outputs under `ports`
    pub const MW_OUTPUTS: &str = "mw_outputs";
    /// Wiring: routing section
    pub const WIRING: &str = "wiring";

    /// Qubit drive line (state and wiring)
    pub const XY: &str = "xy";
    /// Qubit readout line (state)
    pub const RESONATOR: &str = "resonator";
    /// Qubit readout line (wiring)
    pub const RR: &str = "rr";

    /// Output port reference of a wired line
    pub const OPX_OUTPUT: &str = "opx_output";
    /// Intermediate frequency of a line
    pub const INTERMEDIATE_FREQUENCY: &str = "intermediate_frequency";
    /// LO frequency of a port
    pub const UPCONVERTER_FREQUENCY: &str = "upconverter_frequency";
    /// Qubit grid coordinate
    pub const GRID_LOCATION: &str = "grid_location";

    /// Pair record: identifier
    pub const PAIR_ID: &str = "id";
    /// Pair record: control qubit reference
    pub const QUBIT_CONTROL: &str = "qubit_control";
    /// Pair record: target qubit reference
    pub const QUBIT_TARGET: &str = "qubit_target";
}

// ============================================================================
// Files
// ============================================================================

pub mod files {
    //! Conventional file names inside a state directory

    /// State document file name
    pub const STATE_FILE: &str = "state.json";
    /// Wiring document file name
    pub const WIRING_FILE: &str = "wiring.json";
    /// Environment variable naming the state directory
    pub const STATE_PATH_ENV: &str = "QUAM_STATE_PATH";
}

// ============================================================================
// MW-FEM Bands
// Gantree: bands // 대역
// ============================================================================

pub mod bands {
    //! Upconverter band edges of the MW front-end module (Hz)

    /// Lower edge of band 1
    pub const BAND_1_MIN_HZ: f64 = 50e6;
    /// Lower edge of band 2 (upper edge of band 1, exclusive)
    pub const BAND_2_MIN_HZ: f64 = 4.5e9;
    /// Lower edge of band 3 (upper edge of band 2, exclusive)
    pub const BAND_3_MIN_HZ: f64 = 6.5e9;
    /// Upper edge of band 3 (inclusive)
    pub const BAND_3_MAX_HZ: f64 = 10.5e9;
}

// ============================================================================
// Display
// ============================================================================

pub mod display {
    //! Report thresholds and unit conversions

    /// IF magnitude above which the frequency table highlights a value (MHz)
    pub const DEFAULT_IF_THRESHOLD_MHZ: f64 = 400.0;

    /// Drive frequency at or above which a qubit is in the high band (GHz)
    pub const HIGH_BAND_GHZ: f64 = 6.375;

    /// Drive frequency at or above which a qubit is in the middle band (GHz)
    pub const MID_BAND_GHZ: f64 = 5.6;

    /// Hz to MHz
    #[inline]
    pub fn hz_to_mhz(hz: f64) -> f64 {
        hz / 1e6
    }

    /// Hz to GHz
    #[inline]
    pub fn hz_to_ghz(hz: f64) -> f64 {
        hz / 1e9
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions() {
        assert_relative_eq!(display::hz_to_mhz(100e6), 100.0);
        assert_relative_eq!(display::hz_to_ghz(4.95e9), 4.95);
        assert_relative_eq!(display::hz_to_mhz(-50e6), -50.0);
    }

    #[test]
    fn test_band_edges_ordered() {
        assert!(bands::BAND_1_MIN_HZ < bands::BAND_2_MIN_HZ);
        assert!(bands::BAND_2_MIN_HZ < bands::BAND_3_MIN_HZ);
        assert!(bands::BAND_3_MIN_HZ < bands::BAND_3_MAX_HZ);
    }
}
