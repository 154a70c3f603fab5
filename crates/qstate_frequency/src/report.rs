//! Frequency table rendering
//!
//! Gantree: L2_Frequency → FrequencyReport
//!
//! Rows are ordered by ascending drive frequency. Intermediate frequencies
//! are shown in MHz, LO and absolute frequencies in GHz.

use crate::resolver::{DerivedFrequency, DerivedFrequencySet};
use console::style;
use qstate_core::display::{hz_to_ghz, hz_to_mhz, DEFAULT_IF_THRESHOLD_MHZ};
use qstate_core::{Hertz, MwBand};
use serde::{Deserialize, Serialize};

/// Report options
/// Gantree: ReportConfig // 출력 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// IF magnitude above which a value is highlighted (MHz)
    pub threshold_mhz: f64,
    /// Emit ANSI colours
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold_mhz: DEFAULT_IF_THRESHOLD_MHZ,
            color: true,
        }
    }
}

impl ReportConfig {
    /// Plain-text configuration
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// With IF highlight threshold
    pub fn with_threshold(mut self, threshold_mhz: f64) -> Self {
        self.threshold_mhz = threshold_mhz;
        self
    }
}

const HEADERS: [&str; 9] = [
    "Qubit",
    "XY IF [MHz]",
    "XY LO [GHz]",
    "XY Total [GHz]",
    "RR IF [MHz]",
    "RR LO [GHz]",
    "RR Total [GHz]",
    "XY Band",
    "RR Band",
];

/// Render the derived set as an aligned text table
/// Gantree: render_frequency_table(set,config) -> String // 테이블 출력
pub fn render_frequency_table(set: &DerivedFrequencySet, config: &ReportConfig) -> String {
    let qubit_width = set
        .iter()
        .map(|r| r.qubit.len())
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(set.len() + 2);

    let header: Vec<String> = HEADERS[1..]
        .iter()
        .map(|h| format!("{:>14}", h))
        .collect();
    let header = format!("{:<w$} {}", HEADERS[0], header.join(" "), w = qubit_width);
    let rule = "-".repeat(header.len());
    lines.push(header);
    lines.push(rule);

    for record in set.sorted_by_xy_total() {
        lines.push(render_row(record, qubit_width, config));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn render_row(record: &DerivedFrequency, qubit_width: usize, config: &ReportConfig) -> String {
    let cells = [
        intermediate_cell(record.xy_intermediate, config),
        ghz_cell(record.xy_lo),
        ghz_cell(record.xy_total),
        intermediate_cell(record.rr_intermediate, config),
        ghz_cell(record.rr_lo),
        ghz_cell(record.rr_total),
        band_cell(record.xy_lo),
        band_cell(record.rr_lo),
    ];

    format!("{:<w$} {}", record.qubit, cells.join(" "), w = qubit_width)
}

fn intermediate_cell(hz: Hertz, config: &ReportConfig) -> String {
    let mhz = hz_to_mhz(hz);
    let cell = format!("{:>14}", format!("{:8.3}", mhz));

    if mhz.abs() > config.threshold_mhz {
        style(cell).red().force_styling(config.color).to_string()
    } else {
        cell
    }
}

fn ghz_cell(hz: Hertz) -> String {
    format!("{:>14}", format!("{:8.3}", hz_to_ghz(hz)))
}

fn band_cell(lo: Hertz) -> String {
    let band = MwBand::from_frequency(lo)
        .map(|b| b.to_string())
        .unwrap_or_else(|_| "-".to_string());
    format!("{:>14}", band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::LineFrequency;

    fn record(name: &str, xy_if: f64, xy_lo: f64) -> DerivedFrequency {
        DerivedFrequency::from_lines(
            name,
            LineFrequency { intermediate: xy_if, lo: xy_lo },
            LineFrequency { intermediate: 25e6, lo: 7.2e9 },
        )
    }

    #[test]
    fn test_rows_sorted_by_drive_frequency() {
        let set: DerivedFrequencySet = vec![
            record("qB", 100e6, 5e9),
            record("qA", -50e6, 5e9),
        ]
        .into_iter()
        .collect();

        let table = render_frequency_table(&set, &ReportConfig::plain());
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("qA"));
        assert!(rows[1].starts_with("qB"));
        assert!(rows[0].contains("-50.000"));
        assert!(rows[0].contains("4.950"));
    }

    #[test]
    fn test_band_columns() {
        let set: DerivedFrequencySet = vec![record("q1", 0.0, 5e9), record("q2", 0.0, 12e9)]
            .into_iter()
            .collect();

        let table = render_frequency_table(&set, &ReportConfig::plain());
        let q1 = table.lines().find(|l| l.starts_with("q1")).unwrap();
        let q2 = table.lines().find(|l| l.starts_with("q2")).unwrap();

        assert!(q1.trim_end().ends_with('3'));
        assert!(q1.split_whitespace().rev().nth(1) == Some("2"));
        assert!(q2.split_whitespace().rev().nth(1) == Some("-"));
    }

    #[test]
    fn test_threshold_highlight() {
        let set: DerivedFrequencySet = vec![record("q1", 450e6, 5e9)].into_iter().collect();

        let plain = render_frequency_table(&set, &ReportConfig::plain());
        assert!(!plain.contains("\u{1b}["));

        let colored = render_frequency_table(&set, &ReportConfig::default());
        assert!(colored.contains("\u{1b}["));

        let raised = ReportConfig::default().with_threshold(500.0);
        assert!(!render_frequency_table(&set, &raised).contains("\u{1b}["));
    }
}
