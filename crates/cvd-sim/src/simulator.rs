//! Condition dispatch.

use cvd_core::{Condition, ConditionKind, Deficiency, Result, Rgb8};
use cvd_primaries::{CONFUSION_LINES, ConfusionLine};
use cvd_transfer::GammaTable;
use tracing::debug;

use crate::{anomaly, dichromat, mono};

/// Converts colors to their appearance under a vision condition.
///
/// Construction builds the gamma lookup table and copies the three
/// confusion-line coefficient sets. After that every method is a pure
/// function of its arguments.
///
/// # Example
///
/// ```rust
/// use cvd_sim::{Condition, Rgb8, Simulator};
///
/// let sim = Simulator::new();
/// let c = Rgb8::new(12, 200, 90);
/// assert_eq!(sim.convert(c, Condition::Normal), c);
/// assert!(sim.convert(c, Condition::Monochromacy).is_gray());
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    gamma: GammaTable,
    lines: [ConfusionLine; 3],
}

impl Simulator {
    /// Builds the lookup tables.
    pub fn new() -> Self {
        let gamma = GammaTable::display();
        debug!(
            gamma = gamma.gamma(),
            entries = gamma.entries().len(),
            "simulator tables built"
        );
        Self {
            gamma,
            lines: CONFUSION_LINES,
        }
    }

    /// Coefficient set used for `deficiency`.
    #[inline]
    pub fn confusion_line(&self, deficiency: Deficiency) -> &ConfusionLine {
        &self.lines[deficiency.index()]
    }

    /// Simulates `color` as seen under `condition`.
    pub fn convert(&self, color: Rgb8, condition: Condition) -> Rgb8 {
        match condition.kind() {
            ConditionKind::Identity => color,
            ConditionKind::Dichromat(d) => self.simulate_dichromat(color, d),
            ConditionKind::Anomalous(d) => {
                anomaly::blend(color, self.simulate_dichromat(color, d))
            }
            ConditionKind::Monochrome => mono::reduce(color),
        }
    }

    /// [`convert`](Self::convert) with a numeric condition selector.
    ///
    /// Fails with [`Error::InvalidCondition`](cvd_core::Error::InvalidCondition)
    /// for indices outside `0..8`.
    pub fn convert_index(&self, color: Rgb8, index: usize) -> Result<Rgb8> {
        let condition = Condition::from_index(index)?;
        Ok(self.convert(color, condition))
    }

    /// Every condition, in index order.
    pub fn convert_all(&self, color: Rgb8) -> [(Condition, Rgb8); Condition::COUNT] {
        Condition::ALL.map(|c| (c, self.convert(color, c)))
    }

    /// Full loss of one cone class.
    #[inline]
    pub fn simulate_dichromat(&self, color: Rgb8, deficiency: Deficiency) -> Rgb8 {
        dichromat::project(&self.gamma, self.confusion_line(deficiency), color)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvd_core::Error;

    fn all_levels() -> impl Iterator<Item = Rgb8> {
        let levels = [0u8, 1, 17, 64, 127, 128, 200, 254, 255];
        levels.into_iter().flat_map(move |r| {
            levels.into_iter().flat_map(move |g| {
                levels.into_iter().map(move |b| Rgb8::new(r, g, b))
            })
        })
    }

    #[test]
    fn test_normal_is_identity() {
        let sim = Simulator::new();
        for c in all_levels() {
            assert_eq!(sim.convert(c, Condition::Normal), c);
        }
    }

    #[test]
    fn test_black_is_invariant() {
        let sim = Simulator::new();
        for cond in Condition::ALL {
            assert_eq!(sim.convert(Rgb8::BLACK, cond), Rgb8::BLACK, "{cond}");
        }
    }

    #[test]
    fn test_monochrome_is_gray() {
        let sim = Simulator::new();
        assert_eq!(sim.convert(Rgb8::WHITE, Condition::Monochromacy), Rgb8::WHITE);
        for c in all_levels() {
            assert!(sim.convert(c, Condition::Monochromacy).is_gray(), "{c}");
        }
    }

    #[test]
    fn test_anomaly_between_original_and_dichromat() {
        let sim = Simulator::new();
        for d in Deficiency::ALL {
            for c in all_levels() {
                let full = sim.simulate_dichromat(c, d);
                let weak = sim.convert(c, d.anomaly());
                for ch in 0..3 {
                    let (o, f, w) = (c.to_array()[ch], full.to_array()[ch], weak.to_array()[ch]);
                    let (lo, hi) = (o.min(f), o.max(f));
                    // Truncation may land one below the lower bound
                    assert!(
                        u16::from(w) + 1 >= u16::from(lo) && w <= hi,
                        "{d:?} {c}: channel {ch} {w} not in [{lo}, {hi}]"
                    );
                }
            }
        }
    }

    #[test]
    fn test_dichromat_matches_condition() {
        let sim = Simulator::new();
        let c = Rgb8::new(200, 40, 90);
        for d in Deficiency::ALL {
            assert_eq!(sim.convert(c, d.dichromat()), sim.simulate_dichromat(c, d));
        }
    }

    #[test]
    fn test_known_primaries() {
        let sim = Simulator::new();
        let red = Rgb8::new(255, 0, 0);
        let green = Rgb8::new(0, 255, 0);
        let blue = Rgb8::new(0, 0, 255);

        assert_eq!(sim.convert(red, Condition::Protanopia), Rgb8::new(144, 128, 33));
        assert_eq!(sim.convert(red, Condition::Deuteranopia), Rgb8::new(162, 122, 0));
        assert_eq!(sim.convert(red, Condition::Tritanopia), Rgb8::new(253, 23, 0));
        assert_eq!(sim.convert(red, Condition::Protanomaly), Rgb8::new(184, 81, 21));
        assert_eq!(sim.convert(green, Condition::Deuteranopia), Rgb8::new(255, 206, 55));
        assert_eq!(sim.convert(green, Condition::Deuteranomaly), Rgb8::new(162, 223, 35));
        assert_eq!(sim.convert(blue, Condition::Tritanopia), Rgb8::new(0, 85, 89));
        assert_eq!(sim.convert(blue, Condition::Tritanomaly), Rgb8::new(0, 54, 149));
    }

    #[test]
    fn test_deuteranopia_pulls_red_and_green_together() {
        let sim = Simulator::new();
        let out = sim.convert(Rgb8::new(0, 255, 0), Condition::Deuteranopia);
        assert!(out.r.abs_diff(out.g) < 100);
    }

    #[test]
    fn test_convert_index() {
        let sim = Simulator::new();
        let c = Rgb8::new(255, 128, 0);
        assert_eq!(sim.convert_index(c, 1), Ok(Rgb8::new(184, 164, 22)));
        assert_eq!(sim.convert_index(c, 8), Err(Error::InvalidCondition(8)));
    }

    #[test]
    fn test_convert_all_order() {
        let sim = Simulator::new();
        let c = Rgb8::new(128, 128, 128);
        let all = sim.convert_all(c);
        for (i, (cond, out)) in all.into_iter().enumerate() {
            assert_eq!(cond.index(), i);
            assert_eq!(out, sim.convert(c, cond));
        }
        assert_eq!(all[7].1, Rgb8::gray(127));
    }

    #[test]
    fn test_shared_across_threads() {
        let sim = Simulator::new();
        let c = Rgb8::new(18, 52, 86);
        let expected = sim.convert_all(c);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| sim.convert_all(c)))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
