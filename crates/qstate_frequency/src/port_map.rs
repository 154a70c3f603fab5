//! Port frequency map
//!
//! Gantree: L2_Frequency → PortFrequencyMap
//!
//! Indexes the wiring document's upconverted outputs by port reference.
//! Ports without an `upconverter_frequency` are left out entirely, so a
//! missing entry always means "no LO available".

use qstate_core::{keys, Hertz, JsonObject, PortRef, QstateError, QstateResult, WiringDocument};
use serde_json::Value;
use std::collections::HashMap;

/// LO frequency per upconverted port
/// Gantree: PortFrequencyMap // 포트→LO 맵
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortFrequencyMap {
    /// Gantree: frequencies: HashMap<PortRef,f64> // LO 테이블
    frequencies: HashMap<PortRef, Hertz>,
}

impl PortFrequencyMap {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build by scanning controller → module → port under `ports.mw_outputs`
    /// Gantree: from_wiring(wiring) -> Result<Self> // 맵 구축
    pub fn from_wiring(wiring: &WiringDocument) -> QstateResult<Self> {
        let mut frequencies = HashMap::new();

        for (controller, modules) in wiring.mw_outputs()? {
            let controller = controller.as_str();
            let modules = as_object(modules, &[controller])?;

            for (module, ports) in modules {
                let module = module.as_str();
                let module_index = parse_key(module, &[controller, module])?;
                let ports = as_object(ports, &[controller, module])?;

                for (port, data) in ports {
                    let port = port.as_str();
                    let port_index = parse_key(port, &[controller, module, port])?;

                    let Some(lo) = data.get(keys::UPCONVERTER_FREQUENCY) else {
                        continue;
                    };
                    let lo = lo.as_f64().ok_or_else(|| {
                        QstateError::format(
                            port_path(&[controller, module, port, keys::UPCONVERTER_FREQUENCY]),
                            "expected a number",
                        )
                    })?;

                    frequencies.insert(PortRef::new(controller, module_index, port_index), lo);
                }
            }
        }

        log::debug!("indexed {} upconverted ports", frequencies.len());
        Ok(Self { frequencies })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// LO frequency of a port, if it is upconverted
    /// Gantree: lo_frequency(port) -> Option<f64> // LO 조회
    pub fn lo_frequency(&self, port: &PortRef) -> Option<Hertz> {
        self.frequencies.get(port).copied()
    }

    /// Number of upconverted ports
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Ports sorted by reference
    pub fn ports(&self) -> Vec<&PortRef> {
        let mut ports: Vec<_> = self.frequencies.keys().collect();
        ports.sort();
        ports
    }
}

impl FromIterator<(PortRef, Hertz)> for PortFrequencyMap {
    fn from_iter<I: IntoIterator<Item = (PortRef, Hertz)>>(iter: I) -> Self {
        Self {
            frequencies: iter.into_iter().collect(),
        }
    }
}

fn port_path(parts: &[&str]) -> String {
    format!("{}/{}/{}", keys::PORTS, keys::MW_OUTPUTS, parts.join("/"))
}

fn as_object<'a>(value: &'a Value, parts: &[&str]) -> QstateResult<&'a JsonObject> {
    value
        .as_object()
        .ok_or_else(|| QstateError::format(port_path(parts), "expected an object"))
}

fn parse_key(key: &str, parts: &[&str]) -> QstateResult<u32> {
    key.parse::<u32>().map_err(|_| {
        QstateError::format(
            port_path(parts),
            format!("'{}' is not an integer index", key),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wiring(ports: Value) -> WiringDocument {
        WiringDocument::new(json!({
            "ports": {"mw_outputs": ports},
            "wiring": {"qubits": {}}
        }))
    }

    #[test]
    fn test_only_upconverted_ports_indexed() {
        let map = PortFrequencyMap::from_wiring(&wiring(json!({
            "con1": {
                "1": {
                    "1": {"upconverter_frequency": 7.2e9, "band": 3},
                    "2": {"band": 2}
                },
                "4": {"2": {"upconverter_frequency": 5e9}}
            }
        })))
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.lo_frequency(&PortRef::new("con1", 1, 1)), Some(7.2e9));
        assert_eq!(map.lo_frequency(&PortRef::new("con1", 1, 2)), None);
        assert_eq!(map.lo_frequency(&PortRef::new("con1", 4, 2)), Some(5e9));
    }

    #[test]
    fn test_integer_lo_accepted() {
        let map = PortFrequencyMap::from_wiring(&wiring(json!({
            "con1": {"1": {"3": {"upconverter_frequency": 6000000000u64}}}
        })))
        .unwrap();

        assert_eq!(map.lo_frequency(&PortRef::new("con1", 1, 3)), Some(6e9));
    }

    #[test]
    fn test_non_integer_module_key() {
        let err = PortFrequencyMap::from_wiring(&wiring(json!({
            "con1": {"slot1": {"1": {"upconverter_frequency": 5e9}}}
        })))
        .unwrap_err();

        assert!(err.is_format_error());
        assert!(err.to_string().contains("slot1"));
    }

    #[test]
    fn test_non_numeric_lo() {
        let err = PortFrequencyMap::from_wiring(&wiring(json!({
            "con1": {"1": {"1": {"upconverter_frequency": "5 GHz"}}}
        })))
        .unwrap_err();

        assert!(err.is_format_error());
    }

    #[test]
    fn test_missing_ports_section() {
        let wiring = WiringDocument::new(json!({"wiring": {"qubits": {}}}));
        let err = PortFrequencyMap::from_wiring(&wiring).unwrap_err();

        assert_eq!(err, QstateError::not_found("ports"));
    }

    #[test]
    fn test_ports_sorted() {
        let map: PortFrequencyMap = vec![
            (PortRef::new("con2", 1, 1), 5e9),
            (PortRef::new("con1", 3, 1), 6e9),
            (PortRef::new("con1", 1, 2), 7e9),
        ]
        .into_iter()
        .collect();

        let ports: Vec<String> = map.ports().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            ports,
            vec![
                "#/ports/mw_outputs/con1/1/2",
                "#/ports/mw_outputs/con1/3/1",
                "#/ports/mw_outputs/con2/1/1",
            ]
        );
    }
}
