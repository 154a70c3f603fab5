//! Consistency check against a stored document copy
//!
//! Gantree: L0_Foundation → Verify
//!
//! The stored copy comes from an opaque store (downloaded by the caller);
//! this module only compares values.

use crate::error::{QstateError, QstateResult};
use serde_json::Value;

/// Path of the first difference between two documents, if any
/// Gantree: first_difference(a,b) -> Option<String> // 차이 탐색
///
/// Object comparison ignores key order. Numbers compare by value, so
/// `1` and `1.0` are equal.
pub fn first_difference(local: &Value, stored: &Value) -> Option<String> {
    diff_at(local, stored, "#")
}

fn diff_at(local: &Value, stored: &Value, path: &str) -> Option<String> {
    match (local, stored) {
        (Value::Object(a), Value::Object(b)) => {
            if let Some(key) = a.keys().find(|k| !b.contains_key(*k)) {
                return Some(format!("{}/{}", path, key));
            }
            if let Some(key) = b.keys().find(|k| !a.contains_key(*k)) {
                return Some(format!("{}/{}", path, key));
            }
            a.iter()
                .find_map(|(key, value)| diff_at(value, &b[key], &format!("{}/{}", path, key)))
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return Some(path.to_string());
            }
            a.iter()
                .zip(b)
                .enumerate()
                .find_map(|(i, (x, y))| diff_at(x, y, &format!("{}/{}", path, i)))
        }
        (Value::Number(a), Value::Number(b)) => {
            if a.as_f64() == b.as_f64() {
                None
            } else {
                Some(path.to_string())
            }
        }
        _ if local == stored => None,
        _ => Some(path.to_string()),
    }
}

/// Fail with `InconsistentData` when the local document differs
/// Gantree: verify_consistent(name,local,stored) -> Result // 일치 검증
pub fn verify_consistent(document: &str, local: &Value, stored: &Value) -> QstateResult<()> {
    match first_difference(local, stored) {
        None => {
            log::debug!("{} matches the stored copy", document);
            Ok(())
        }
        Some(path) => Err(QstateError::InconsistentData {
            document: document.to_string(),
            detail: format!("first difference at {}", path),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_documents() {
        let doc = json!({"qubits": {"q1": {"grid_location": "0,0"}}});
        assert!(verify_consistent("state.json", &doc, &doc.clone()).is_ok());
    }

    #[test]
    fn test_key_order_ignored() {
        let a: Value = serde_json::from_str(r#"{"a": 1, "b": 2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
        assert_eq!(first_difference(&a, &b), None);
    }

    #[test]
    fn test_integer_and_float_equal() {
        assert_eq!(first_difference(&json!({"f": 5}), &json!({"f": 5.0})), None);
    }

    #[test]
    fn test_nested_difference_path() {
        let local = json!({"qubits": {"q1": {"xy": {"intermediate_frequency": 1e8}}}});
        let stored = json!({"qubits": {"q1": {"xy": {"intermediate_frequency": 2e8}}}});
        assert_eq!(
            first_difference(&local, &stored),
            Some("#/qubits/q1/xy/intermediate_frequency".to_string())
        );
    }

    #[test]
    fn test_missing_key_reported() {
        let local = json!({"qubits": {}, "qubit_pairs": {}});
        let stored = json!({"qubits": {}});
        assert_eq!(
            first_difference(&local, &stored),
            Some("#/qubit_pairs".to_string())
        );
    }

    #[test]
    fn test_inconsistent_error() {
        let err = verify_consistent("wiring.json", &json!([1, 2]), &json!([1])).unwrap_err();
        assert!(err.is_inconsistent());
        assert!(err.to_string().contains("wiring.json"));
    }
}
