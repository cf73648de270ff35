//! Integration tests for cvd-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the cvd-rs crates: the simulator against its building blocks,
//! hex and name lookup against simulated output, and the golden reference
//! table in [`golden`].

pub mod golden;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use cvd_core::{Condition, Deficiency, Rgb8};
    use cvd_math::Vec3;
    use cvd_primaries::{ConfusionLine, NEUTRAL_WHITE, RGB_TO_XYZ, XYZ_TO_RGB};
    use cvd_sim::Simulator;
    use cvd_transfer::GammaTable;

    /// The eight fixed reference colors with all eight outputs.
    const REFERENCE: [([u8; 3], [[u8; 3]; 8]); 8] = [
        ([255, 0, 0], [[255, 0, 0], [144, 128, 33], [162, 122, 0], [253, 23, 0], [184, 81, 21], [195, 77, 0], [253, 14, 0], [76, 76, 76]]),
        ([0, 255, 0], [[0, 255, 0], [245, 218, 0], [255, 206, 55], [107, 237, 255], [155, 231, 0], [162, 223, 35], [68, 243, 162], [149, 149, 149]]),
        ([0, 0, 255], [[0, 0, 255], [0, 74, 156], [0, 79, 132], [0, 85, 89], [0, 47, 192], [0, 50, 176], [0, 54, 149], [29, 29, 29]]),
        ([255, 255, 255], [[255, 255, 255], [255, 253, 254], [255, 246, 255], [255, 252, 255], [255, 253, 254], [255, 249, 255], [255, 253, 255], [255, 255, 255]]),
        ([0, 0, 0], [[0, 0, 0]; 8]),
        ([128, 128, 128], [[128, 128, 128], [130, 127, 127], [139, 123, 128], [129, 126, 136], [129, 127, 127], [135, 124, 128], [128, 126, 133], [127, 127, 127]]),
        ([255, 128, 0], [[255, 128, 0], [184, 164, 22], [206, 155, 0], [255, 119, 127], [209, 150, 14], [223, 145, 0], [255, 122, 80], [151, 151, 151]]),
        ([18, 52, 86], [[18, 52, 86], [36, 49, 83], [24, 51, 86], [0, 56, 60], [29, 50, 84], [21, 51, 86], [6, 54, 69], [45, 45, 45]]),
    ];

    /// Reference colors through every condition index.
    #[test]
    fn test_reference_colors() {
        let sim = Simulator::new();
        for (input, outputs) in REFERENCE {
            for (index, expected) in outputs.into_iter().enumerate() {
                let got = sim.convert_index(input.into(), index).unwrap();
                assert_eq!(got, Rgb8::from(expected), "{:?} under {}", input, index);
            }
        }
    }

    /// Gamma table and encoder round-trip for representative values.
    #[test]
    fn test_gamma_roundtrip_values() {
        let table = GammaTable::display();
        let cases = [(0, 0), (1, 0), (2, 1), (10, 9), (100, 99), (128, 128), (200, 200), (254, 254), (255, 255)];
        for (v, expected) in cases {
            assert_eq!(table.encode(table.linearize(v)), expected, "v = {v}");
        }
    }

    /// Dichromat output reproduced step by step from the building blocks.
    #[test]
    fn test_dichromat_from_parts() {
        let table = GammaTable::display();
        let line = ConfusionLine::for_deficiency(Deficiency::Protan);
        let color = Rgb8::new(255, 0, 0);

        let xyz = RGB_TO_XYZ * Vec3::from_array(table.linearize_rgb(color.to_array()));
        let sum = xyz.sum();
        let (cu, cv) = (xyz.x / sum, xyz.y / sum);
        let clm = line.slope_through(cu, cv);
        let (du, dv) = line.intersect(clm, cv - cu * clm);
        let sim = XYZ_TO_RGB * Vec3::new(du * xyz.y / dv, xyz.y, (1.0 - (du + dv)) * xyz.y / dv);

        let (nx, nz) = NEUTRAL_WHITE.neutral_xz(xyz.y);
        let toward = XYZ_TO_RGB * Vec3::new(nx - du * xyz.y / dv, 0.0, nz - (1.0 - (du + dv)) * xyz.y / dv);
        // Only blue moves toward white, and by more than a full step.
        assert!(toward.z > 0.0 && (1.0 - sim.z) / toward.z > 1.0);
        assert_eq!(cvd_sim::dichromat::gamut_adjustment(sim, toward), 0.0);

        let direct = cvd_sim::dichromat::project(&table, &line, color);
        assert_eq!(
            direct,
            Rgb8::new(table.encode(sim.x), table.encode(sim.y), table.encode(sim.z))
        );
    }

    #[test]
    fn test_matrix_pair_near_inverse() {
        let rt = XYZ_TO_RGB * (RGB_TO_XYZ * Vec3::new(0.2, 0.5, 0.8));
        assert_relative_eq!(rt.x, 0.2, epsilon = 1e-4);
        assert_relative_eq!(rt.y, 0.5, epsilon = 1e-4);
        assert_relative_eq!(rt.z, 0.8, epsilon = 1e-4);
    }

    #[test]
    fn test_invariants_over_grid() {
        let sim = Simulator::new();
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let c = Rgb8::new(r, g, b);
                    assert_eq!(sim.convert(c, Condition::Normal), c);
                    assert!(sim.convert(c, Condition::Monochromacy).is_gray());
                }
            }
        }
        for condition in Condition::ALL {
            assert_eq!(sim.convert(Rgb8::BLACK, condition), Rgb8::BLACK, "{condition}");
        }
        assert_eq!(sim.convert(Rgb8::WHITE, Condition::Monochromacy), Rgb8::WHITE);
    }

    #[test]
    fn test_anomaly_lies_between() {
        let sim = Simulator::new();
        let colors = [
            Rgb8::new(255, 0, 0),
            Rgb8::new(0, 255, 0),
            Rgb8::new(0, 0, 255),
            Rgb8::new(255, 128, 0),
            Rgb8::new(18, 52, 86),
        ];
        for c in colors {
            for d in Deficiency::ALL {
                let full = sim.convert(c, d.dichromat());
                let weak = sim.convert(c, d.anomaly());
                for ((o, f), w) in c.to_array().into_iter().zip(full.to_array()).zip(weak.to_array()) {
                    let (lo, hi) = (o.min(f), o.max(f));
                    assert!(
                        u16::from(w) + 1 >= u16::from(lo) && w <= hi,
                        "{c} {d:?}: {w} not in [{lo}, {hi}]"
                    );
                }
            }
        }
    }

    /// Output rows as the CLI prints them: hex and nearest name.
    #[test]
    fn test_simulated_names() {
        let sim = Simulator::new();
        let red = Rgb8::new(255, 0, 0);

        let out = sim.convert(red, Condition::Protanopia);
        assert_eq!(out.to_hex(), "#908021");
        assert_eq!(cvd_names::nearest_name(out), "Olive");

        let gray = sim.convert(red, Condition::Monochromacy);
        assert_eq!(gray.to_hex(), "#4c4c4c");
        assert_eq!(Rgb8::from_hex(&gray.to_hex()), Ok(gray));
    }

    #[test]
    fn test_shared_across_threads() {
        let sim = Simulator::new();
        let colors: Vec<Rgb8> = (0..=255u8).step_by(5).map(|v| Rgb8::new(v, 255 - v, v / 2)).collect();
        let serial: Vec<_> = colors.iter().map(|&c| sim.convert_all(c)).collect();

        let parallel: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = colors
                .chunks(13)
                .map(|chunk| {
                    let sim = &sim;
                    s.spawn(move || chunk.iter().map(|&c| sim.convert_all(c)).collect::<Vec<_>>())
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(serial, parallel);
    }
}
