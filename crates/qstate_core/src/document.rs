//! State and wiring documents
//!
//! Gantree: L0_Foundation → Documents
//!
//! Thin typed views over the two JSON documents. Section accessors fail
//! with `NotFound` naming the document path; the documents themselves are
//! never mutated in place, merges produce a new document.

use crate::constants::{files, keys};
use crate::error::{QstateError, QstateResult};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON object as stored in the documents (key order preserved)
pub type JsonObject = Map<String, Value>;

// ============================================================================
// JSON Helpers
// ============================================================================

/// Read and parse a JSON file
/// Gantree: load_json(path) -> Result<Value> // 파일 로드
pub fn load_json(path: &Path) -> QstateResult<Value> {
    if !path.exists() {
        return Err(QstateError::not_found(path.display().to_string()));
    }

    let source = fs::read_to_string(path)
        .map_err(|e| QstateError::FileError(format!("{}: {}", path.display(), e)))?;
    let value = serde_json::from_str(&source)?;

    log::debug!("loaded {}", path.display());
    Ok(value)
}

/// Serialize with the given indent width
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, indent: usize) -> QstateResult<String> {
    let indent = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| QstateError::JsonError(e.to_string()))
}

/// Serialize and write a JSON file in one write
/// Gantree: write_json(path, value, indent) // 파일 저장
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, indent: usize) -> QstateResult<()> {
    let json = to_json_string(value, indent)?;
    fs::write(path, json)
        .map_err(|e| QstateError::FileError(format!("{}: {}", path.display(), e)))?;

    log::info!("wrote {}", path.display());
    Ok(())
}

/// Walk `path` from `root`, requiring an object at every step
fn section<'a>(root: &'a Value, path: &[&str]) -> QstateResult<&'a JsonObject> {
    let mut current = root;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .get(*key)
            .ok_or_else(|| QstateError::not_found(path[..=depth].join("/")))?;
    }

    current
        .as_object()
        .ok_or_else(|| QstateError::format(path.join("/"), "expected an object"))
}

// ============================================================================
// StateDocument
// ============================================================================

/// Per-qubit parameters document (`state.json`)
/// Gantree: StateDocument // 상태 문서
#[derive(Debug, Clone, PartialEq)]
pub struct StateDocument {
    root: Value,
}

impl StateDocument {
    /// Wrap a parsed document
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse from a JSON string
    pub fn from_json_str(source: &str) -> QstateResult<Self> {
        Ok(Self::new(serde_json::from_str(source)?))
    }

    /// Load from a file
    pub fn load(path: &Path) -> QstateResult<Self> {
        load_json(path).map(Self::new)
    }

    /// Save with 4-space indent
    pub fn save(&self, path: &Path) -> QstateResult<()> {
        write_json(path, &self.root, 4)
    }

    /// Raw document
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consume into the raw document
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Qubit table
    /// Gantree: qubits() -> Result<&Map> // 큐비트 테이블
    pub fn qubits(&self) -> QstateResult<&JsonObject> {
        section(&self.root, &[keys::QUBITS])
    }

    /// Existing `qubit_pairs` section, if any
    pub fn qubit_pairs(&self) -> Option<&JsonObject> {
        self.root.get(keys::QUBIT_PAIRS).and_then(Value::as_object)
    }

    /// New document with top-level `key` replaced wholesale
    /// Gantree: with_section(key,value) -> Result<Self> // 섹션 교체
    pub fn with_section(&self, key: &str, value: Value) -> QstateResult<Self> {
        let mut root = self.root.clone();
        let object = root
            .as_object_mut()
            .ok_or_else(|| QstateError::format("#", "state document root is not an object"))?;
        object.insert(key.to_string(), value);
        Ok(Self::new(root))
    }
}

// ============================================================================
// WiringDocument
// ============================================================================

/// Port and routing document (`wiring.json`)
/// Gantree: WiringDocument // 배선 문서
#[derive(Debug, Clone, PartialEq)]
pub struct WiringDocument {
    root: Value,
}

impl WiringDocument {
    /// Wrap a parsed document
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse from a JSON string
    pub fn from_json_str(source: &str) -> QstateResult<Self> {
        Ok(Self::new(serde_json::from_str(source)?))
    }

    /// Load from a file
    pub fn load(path: &Path) -> QstateResult<Self> {
        load_json(path).map(Self::new)
    }

    /// Raw document
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Upconverted outputs: controller → module → port → port data
    /// Gantree: mw_outputs() -> Result<&Map> // 포트 테이블
    pub fn mw_outputs(&self) -> QstateResult<&JsonObject> {
        section(&self.root, &[keys::PORTS, keys::MW_OUTPUTS])
    }

    /// Routing table: qubit → line → `opx_output`
    /// Gantree: wired_qubits() -> Result<&Map> // 라우팅 테이블
    pub fn wired_qubits(&self) -> QstateResult<&JsonObject> {
        section(&self.root, &[keys::WIRING, keys::QUBITS])
    }
}

// ============================================================================
// DocumentPaths
// ============================================================================

/// Locations of the two documents
/// Gantree: DocumentPaths // 경로 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPaths {
    /// State directory
    pub state_dir: PathBuf,
    /// `state.json`
    pub state_file: PathBuf,
    /// `wiring.json`, defaulting to the state directory
    pub wiring_file: PathBuf,
}

impl DocumentPaths {
    /// Resolve from an optional state directory and optional wiring override
    pub fn resolve(state_dir: Option<PathBuf>, wiring_file: Option<PathBuf>) -> QstateResult<Self> {
        let state_dir = state_dir.ok_or_else(|| {
            QstateError::not_found(format!(
                "state path (not provided and {} is not set)",
                files::STATE_PATH_ENV
            ))
        })?;

        Ok(Self::in_dir(state_dir, wiring_file))
    }

    /// Conventional file names under `state_dir`
    pub fn in_dir(state_dir: impl Into<PathBuf>, wiring_file: Option<PathBuf>) -> Self {
        let state_dir = state_dir.into();
        let state_file = state_dir.join(files::STATE_FILE);
        let wiring_file = wiring_file.unwrap_or_else(|| state_dir.join(files::WIRING_FILE));

        Self {
            state_dir,
            state_file,
            wiring_file,
        }
    }

    /// Load the state document
    pub fn load_state(&self) -> QstateResult<StateDocument> {
        StateDocument::load(&self.state_file)
    }

    /// Load both documents; fails before reading either if a file is missing
    pub fn load_documents(&self) -> QstateResult<(StateDocument, WiringDocument)> {
        for path in [&self.state_file, &self.wiring_file] {
            if !path.exists() {
                return Err(QstateError::not_found(path.display().to_string()));
            }
        }

        Ok((
            StateDocument::load(&self.state_file)?,
            WiringDocument::load(&self.wiring_file)?,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_missing_qubits() {
        let state = StateDocument::new(json!({"wiring": {}}));
        let err = state.qubits().unwrap_err();
        assert_eq!(err, QstateError::not_found("qubits"));
    }

    #[test]
    fn test_wiring_missing_sections() {
        let wiring = WiringDocument::new(json!({"ports": {}}));
        assert_eq!(
            wiring.mw_outputs().unwrap_err(),
            QstateError::not_found("ports/mw_outputs")
        );
        assert_eq!(
            wiring.wired_qubits().unwrap_err(),
            QstateError::not_found("wiring")
        );
    }

    #[test]
    fn test_section_not_an_object() {
        let state = StateDocument::new(json!({"qubits": [1, 2]}));
        assert!(state.qubits().unwrap_err().is_format_error());
    }

    #[test]
    fn test_qubit_order_preserved() {
        let state =
            StateDocument::from_json_str(r#"{"qubits": {"qB1": {}, "qA1": {}, "qC1": {}}}"#)
                .unwrap();
        let names: Vec<&str> = state.qubits().unwrap().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["qB1", "qA1", "qC1"]);
    }

    #[test]
    fn test_wiring_from_json_str() {
        let wiring = WiringDocument::from_json_str(
            r##"{
                "ports": {"mw_outputs": {"con1": {"1": {"2": {"upconverter_frequency": 5e9}}}}},
                "wiring": {"qubits": {"q1": {"xy": {"opx_output": "#/ports/mw_outputs/con1/1/2"}}}}
            }"##,
        )
        .unwrap();

        assert!(wiring.mw_outputs().unwrap().contains_key("con1"));
        assert!(wiring.wired_qubits().unwrap().contains_key("q1"));
        assert!(WiringDocument::from_json_str("{ports").is_err());
    }

    #[test]
    fn test_merged_state_into_value() {
        let state = StateDocument::new(json!({"qubits": {"q1": {}}}));
        let value = state
            .with_section("qubit_pairs", json!({}))
            .unwrap()
            .into_value();

        assert_eq!(value, json!({"qubits": {"q1": {}}, "qubit_pairs": {}}));
    }

    #[test]
    fn test_with_section_leaves_original() {
        let state = StateDocument::new(json!({"qubits": {}, "qubit_pairs": {"old": {}}}));
        let merged = state.with_section("qubit_pairs", json!({"new": {}})).unwrap();

        assert!(state.qubit_pairs().unwrap().contains_key("old"));
        let pairs = merged.qubit_pairs().unwrap();
        assert!(pairs.contains_key("new"));
        assert!(!pairs.contains_key("old"));
    }

    #[test]
    fn test_with_section_requires_object_root() {
        let state = StateDocument::new(json!([]));
        assert!(state.with_section("qubit_pairs", json!({})).is_err());
    }

    #[test]
    fn test_to_json_string_indent() {
        let value = json!({"a": {"b": 1}});
        let four = to_json_string(&value, 4).unwrap();
        assert!(four.contains("\n    \"a\""));
        assert!(four.contains("\n        \"b\": 1"));

        let two = to_json_string(&value, 2).unwrap();
        assert!(two.contains("\n  \"a\""));
    }

    #[test]
    fn test_document_paths_defaults() {
        let paths = DocumentPaths::in_dir("/tmp/quam", None);
        assert_eq!(paths.state_file, PathBuf::from("/tmp/quam/state.json"));
        assert_eq!(paths.wiring_file, PathBuf::from("/tmp/quam/wiring.json"));

        let paths = DocumentPaths::in_dir("/tmp/quam", Some(PathBuf::from("/etc/w.json")));
        assert_eq!(paths.wiring_file, PathBuf::from("/etc/w.json"));
    }

    #[test]
    fn test_document_paths_require_state_dir() {
        let err = DocumentPaths::resolve(None, None).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("QUAM_STATE_PATH"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let state = StateDocument::new(json!({"qubits": {"q2": {}, "q1": {}}}));

        state.save(&path).unwrap();
        let loaded = StateDocument::load(&path).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_documents_missing_wiring() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("state.json"), "{}").unwrap();

        let paths = DocumentPaths::in_dir(dir.path(), None);
        let err = paths.load_documents().unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("wiring.json"));
    }
}
