//! Error types for qstate
//!
//! Gantree: L0_Foundation → Errors
//!
//! One error taxonomy shared by every stage: missing data, malformed data,
//! and disagreement with a stored copy.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for qstate
/// Gantree: QstateError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QstateError {
    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Required document section or file is absent
    /// Gantree: NotFound{{path}} // 섹션/파일 없음
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Cross-referenced qubit is absent
    /// Gantree: QubitNotFound{{qubit,context}} // 큐비트 참조 없음
    #[error("Qubit '{qubit}' not found: {context}")]
    QubitNotFound { qubit: String, context: String },

    // ========================================================================
    // Format Errors
    // ========================================================================
    /// Value does not match its expected shape
    /// Gantree: Format{{path,reason}} // 형식 오류
    #[error("Invalid format at '{path}': {reason}")]
    Format { path: String, reason: String },

    /// LO frequency outside every MW-FEM band
    #[error("Frequency {0} Hz is outside of the MW-FEM bandwidth [50 MHz, 10.5 GHz]")]
    FrequencyOutOfBand(f64),

    // ========================================================================
    // Verification Errors
    // ========================================================================
    /// Local document disagrees with the stored copy
    /// Gantree: InconsistentData{{document}} // 불일치
    #[error("Inconsistent data: local {document} does not match the stored copy ({detail})")]
    InconsistentData { document: String, detail: String },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for qstate operations
/// Gantree: QstateResult<T> // type alias
pub type QstateResult<T> = Result<T, QstateError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QstateError {
    fn from(err: serde_json::Error) -> Self {
        QstateError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QstateError {
    fn from(err: std::io::Error) -> Self {
        QstateError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QstateError {
    /// Missing section or file at `path`
    pub fn not_found(path: impl Into<String>) -> Self {
        QstateError::NotFound { path: path.into() }
    }

    /// Malformed value at `path`
    pub fn format(path: impl Into<String>, reason: impl Into<String>) -> Self {
        QstateError::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QstateError::NotFound { .. } | QstateError::QubitNotFound { .. }
        )
    }

    /// Check if error is a format error
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            QstateError::Format { .. } | QstateError::FrequencyOutOfBand(_)
        )
    }

    /// Check if error is a verification mismatch
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, QstateError::InconsistentData { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QstateError::not_found("wiring/qubits");
        assert!(err.to_string().contains("wiring/qubits"));
    }

    #[test]
    fn test_qubit_not_found_names_qubit() {
        let err = QstateError::QubitNotFound {
            qubit: "qA1".into(),
            context: "no resolved xy frequency".into(),
        };
        assert!(err.to_string().contains("qA1"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_is_format_error() {
        assert!(QstateError::format("qubits/q1/grid_location", "bad").is_format_error());
        assert!(QstateError::FrequencyOutOfBand(11e9).is_format_error());
        assert!(!QstateError::not_found("qubits").is_format_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: QstateError = io.into();
        assert!(matches!(err, QstateError::FileError(_)));
    }
}
