//! Convert command.
//!
//! Simulates one input color under the selected conditions and prints one
//! row per condition, as a table or as JSON.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use cvd_core::{Condition, Rgb8};
use cvd_sim::Simulator;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const HEADER: [&str; 5] = ["NO", "TYPE", "RGB", "HEX", "NAME"];

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Condition index.
    pub no: usize,
    /// Condition name.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Simulated color.
    pub rgb: Rgb8,
    /// Simulated color as `#rrggbb`.
    pub hex: String,
    /// Nearest CSS3 name of the simulated color.
    pub name: String,
}

impl Row {
    fn cells(&self) -> Vec<String> {
        vec![
            self.no.to_string(),
            self.kind.to_string(),
            self.rgb.to_string(),
            self.hex.clone(),
            self.name.clone(),
        ]
    }
}

/// Runs the convert command.
pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    let conditions = super::select_conditions(&args.condition)?;
    info!(%color, selector = %args.condition, count = conditions.len(), "converting");

    let sim = Simulator::new();
    let rows = build_rows(&sim, color, &conditions);

    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
        println!("{}", json);
    } else {
        if verbose {
            println!(
                "Input: {} {} {}",
                color,
                color.to_hex(),
                cvd_names::nearest_name(color)
            );
            println!();
        }
        print!("{}", render_rows(&rows));
    }

    if args.pause {
        pause()?;
    }
    Ok(())
}

/// Simulates `color` under each of `conditions`, in the given order.
pub fn build_rows(sim: &Simulator, color: Rgb8, conditions: &[Condition]) -> Vec<Row> {
    conditions
        .iter()
        .map(|&condition| {
            let out = sim.convert(color, condition);
            debug!(%condition, input = %color, output = %out, "converted");
            Row {
                no: condition.index(),
                kind: condition.name(),
                rgb: out,
                hex: out.to_hex(),
                name: cvd_names::nearest_name(out),
            }
        })
        .collect()
}

/// Table text for `rows`.
pub fn render_rows(rows: &[Row]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(Row::cells).collect();
    crate::table::render(&HEADER, &cells)
}

fn pause() -> Result<()> {
    eprint!("Press Enter to continue...");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_for_red() {
        let sim = Simulator::new();
        let rows = build_rows(&sim, Rgb8::new(255, 0, 0), &Condition::ALL);
        assert_eq!(rows.len(), 8);

        assert_eq!(rows[0].no, 0);
        assert_eq!(rows[0].kind, "Normal");
        assert_eq!(rows[0].hex, "#ff0000");
        assert_eq!(rows[0].name, "Red");

        assert_eq!(rows[1].kind, "Protanopia");
        assert_eq!(rows[1].rgb, Rgb8::new(144, 128, 33));
        assert_eq!(rows[1].hex, "#908021");
        assert_eq!(rows[1].name, "Olive");

        assert_eq!(rows[7].rgb, Rgb8::gray(76));
    }

    #[test]
    fn test_rows_follow_selection_order() {
        let sim = Simulator::new();
        let rows = build_rows(
            &sim,
            Rgb8::new(0, 255, 0),
            &[Condition::Deuteranopia, Condition::Deuteranomaly],
        );
        let nos: Vec<usize> = rows.iter().map(|r| r.no).collect();
        assert_eq!(nos, vec![2, 5]);
        assert_eq!(rows[0].rgb, Rgb8::new(255, 206, 55));
        assert_eq!(rows[1].rgb, Rgb8::new(162, 223, 35));
    }

    #[test]
    fn test_json_shape() {
        let sim = Simulator::new();
        let rows = build_rows(&sim, Rgb8::BLACK, &[Condition::Tritanomaly]);
        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "no": 6,
                "type": "Tritanomaly",
                "rgb": [0, 0, 0],
                "hex": "#000000",
                "name": "Black"
            }])
        );
    }

    #[test]
    fn test_table_text() {
        let sim = Simulator::new();
        let rows = build_rows(&sim, Rgb8::new(255, 0, 0), &[Condition::Normal]);
        let text = render_rows(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NO |"));
        assert!(lines[1].starts_with("===+"));
        assert_eq!(lines[2], "0  | Normal | (255, 0, 0) | #ff0000 | Red");
    }
}
