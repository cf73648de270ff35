//! Golden reference tests.
//!
//! `tests/golden/reference.json` holds a 6x6x6 grid of 8-bit inputs (steps
//! of 51) plus a set of hand-picked colors, each with its expected output under
//! all eight conditions. Outputs must match exactly: the simulation is
//! specified down to operation order, so any drift in a single channel is a
//! regression.
//!
//! ```bash
//! cargo test --package cvd-tests golden
//! ```

use std::collections::BTreeMap;

use cvd_core::Rgb8;
use serde::Deserialize;

const REFERENCE_JSON: &str = include_str!("../../../tests/golden/reference.json");

/// Parsed reference file.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    /// Format version.
    pub version: String,
    /// Display gamma the outputs were produced with.
    pub gamma: f64,
    /// Anomaly blend weight the outputs were produced with.
    pub anomaly_strength: f64,
    /// Input/expected-output pairs.
    pub cases: Vec<GoldenCase>,
}

/// One input color and its expected outputs keyed by condition name.
#[derive(Debug, Deserialize)]
pub struct GoldenCase {
    /// Input color.
    pub input: Rgb8,
    /// Expected output per condition name.
    pub outputs: BTreeMap<String, Rgb8>,
}

/// Parses the embedded reference file.
pub fn load_golden() -> serde_json::Result<GoldenData> {
    serde_json::from_str(REFERENCE_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_core::Condition;
    use cvd_sim::Simulator;

    fn golden() -> GoldenData {
        load_golden().expect("reference.json should parse")
    }

    #[test]
    fn test_golden_parameters_match_crate() {
        let data = golden();
        assert_eq!(data.version, "1");
        assert_eq!(data.gamma, cvd_transfer::DISPLAY_GAMMA);
        assert_eq!(data.anomaly_strength, cvd_sim::anomaly::ANOMALY_STRENGTH);
    }

    #[test]
    fn test_golden_covers_grid() {
        let data = golden();
        let levels = [0u8, 51, 102, 153, 204, 255];
        for r in levels {
            for g in levels {
                for b in levels {
                    let c = Rgb8::new(r, g, b);
                    assert!(
                        data.cases.iter().any(|case| case.input == c),
                        "grid point {c} missing"
                    );
                }
            }
        }
        for case in &data.cases {
            assert_eq!(case.outputs.len(), Condition::COUNT, "{}", case.input);
        }
    }

    #[test]
    fn test_golden_exact() {
        let data = golden();
        let sim = Simulator::new();
        let mut mismatches = Vec::new();

        for case in &data.cases {
            for condition in Condition::ALL {
                let expected = case.outputs[condition.name()];
                let got = sim.convert(case.input, condition);
                if got != expected {
                    mismatches.push(format!(
                        "{} {}: expected {}, got {}",
                        case.input, condition, expected, got
                    ));
                }
            }
        }

        assert!(
            mismatches.is_empty(),
            "{} mismatches:\n{}",
            mismatches.len(),
            mismatches.join("\n")
        );
    }

    #[test]
    fn test_golden_convert_all_agrees() {
        let data = golden();
        let sim = Simulator::new();
        for case in data.cases.iter().step_by(7) {
            for (condition, out) in sim.convert_all(case.input) {
                assert_eq!(out, case.outputs[condition.name()], "{} {}", case.input, condition);
            }
        }
    }
}
