//! Pair listing
//!
//! Gantree: L3_Pairs → PairReport
//!
//! One line per pair, `id: control (f GHz) -> target (f GHz)`, with each
//! frequency coloured by band.

use crate::director::{DriveFrequencies, QubitPair, QubitPairSet};
use console::{style, Color};
use qstate_core::display::{hz_to_ghz, HIGH_BAND_GHZ, MID_BAND_GHZ};
use qstate_core::Hertz;

/// Display colour for a drive frequency
/// Gantree: band_color(hz) -> Color // 대역 색상
pub fn band_color(hz: Hertz) -> Color {
    let ghz = hz_to_ghz(hz);
    if ghz >= HIGH_BAND_GHZ {
        Color::Red
    } else if ghz >= MID_BAND_GHZ {
        Color::Blue
    } else {
        Color::Green
    }
}

fn frequency_label<F>(frequencies: &F, qubit: &str, color: bool) -> String
where
    F: DriveFrequencies + ?Sized,
{
    match frequencies.drive_frequency(qubit) {
        Some(hz) => {
            let label = format!("{:.3} GHz", hz_to_ghz(hz));
            let styled = style(label).fg(band_color(hz)).force_styling(color);
            format!("{} ({})", qubit, styled)
        }
        None => format!("{} (?)", qubit),
    }
}

/// One pair line
pub fn render_pair<F>(pair: &QubitPair, frequencies: &F, color: bool) -> String
where
    F: DriveFrequencies + ?Sized,
{
    format!(
        "{}: {} -> {}",
        pair.id,
        frequency_label(frequencies, &pair.control, color),
        frequency_label(frequencies, &pair.target, color)
    )
}

/// Every pair in discovery order
/// Gantree: render_pair_listing(pairs,freqs,color) -> String // 목록 출력
pub fn render_pair_listing<F>(pairs: &QubitPairSet, frequencies: &F, color: bool) -> String
where
    F: DriveFrequencies + ?Sized,
{
    pairs
        .iter()
        .map(|pair| render_pair(pair, frequencies, color) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstate_core::QubitName;
    use std::collections::HashMap;

    fn pair() -> QubitPair {
        QubitPair {
            id: "qA1-qA2".to_string(),
            control: "qA1".to_string(),
            target: "qA2".to_string(),
        }
    }

    #[test]
    fn test_band_color_edges() {
        assert_eq!(band_color(6.375e9), Color::Red);
        assert_eq!(band_color(6.374e9), Color::Blue);
        assert_eq!(band_color(5.6e9), Color::Blue);
        assert_eq!(band_color(5.59e9), Color::Green);
    }

    #[test]
    fn test_plain_line() {
        let freqs: HashMap<QubitName, Hertz> =
            [("qA1".to_string(), 5.1e9), ("qA2".to_string(), 4.95e9)].into();

        assert_eq!(
            render_pair(&pair(), &freqs, false),
            "qA1-qA2: qA1 (5.100 GHz) -> qA2 (4.950 GHz)"
        );
    }

    #[test]
    fn test_colored_listing() {
        let freqs: HashMap<QubitName, Hertz> =
            [("qA1".to_string(), 6.5e9), ("qA2".to_string(), 5.0e9)].into();
        let pairs: QubitPairSet = vec![pair()].into_iter().collect();

        let listing = render_pair_listing(&pairs, &freqs, true);
        assert!(listing.contains("\u{1b}[31m"));
        assert!(listing.contains("\u{1b}[32m"));
        assert_eq!(listing.lines().count(), 1);
    }
}
