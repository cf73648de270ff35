//! List command: the simulated conditions and their indices.

use anyhow::Result;
use cvd_core::{Condition, ConditionKind};

/// Runs the list command.
pub fn run(verbose: bool) -> Result<()> {
    for line in lines(verbose) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(verbose: bool) -> Vec<String> {
    Condition::ALL
        .iter()
        .map(|c| {
            let mut line = format!("{}  {:<14}{}", c.index(), c.name(), c.description());
            if verbose {
                line.push_str(&format!("  [{}]", kind_label(c.kind())));
            }
            line
        })
        .collect()
}

fn kind_label(kind: ConditionKind) -> String {
    match kind {
        ConditionKind::Identity => "identity".to_string(),
        ConditionKind::Dichromat(d) => format!("dichromat, {:?}", d).to_lowercase(),
        ConditionKind::Anomalous(d) => format!("anomalous, {:?}", d).to_lowercase(),
        ConditionKind::Monochrome => "luminance".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let plain = lines(false);
        assert_eq!(plain.len(), 8);
        assert_eq!(plain[0], "0  Normal        (normal vision)");
        assert_eq!(plain[7], "7  Monochromacy  (totally colorblind)");

        let verbose = lines(true);
        assert_eq!(verbose[4], "4  Protanomaly   (red-weak)  [anomalous, protan]");
    }
}
