//! # cvd-names
//!
//! Human-readable names for simulated colors.
//!
//! Every color is matched against the fixed CSS3 keyword [`PALETTE`] by
//! squared RGB distance. The lookup is exhaustive over 138 entries, which is
//! cheap enough to run per output row.
//!
//! # Usage
//!
//! ```rust
//! use cvd_core::Rgb8;
//! use cvd_names::{lookup_name, nearest_name};
//!
//! assert_eq!(nearest_name(Rgb8::new(250, 5, 3)), "Red");
//! assert_eq!(nearest_name(Rgb8::new(47, 79, 79)), "Darkslategrey");
//! assert_eq!(lookup_name("Olive"), Some(Rgb8::new(128, 128, 0)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod palette;

pub use palette::{PALETTE, PALETTE_LEN};

use cvd_core::Rgb8;

/// Palette entry closest to `color`.
///
/// Ties resolve to the entry that comes first in [`PALETTE`].
pub fn nearest_entry(color: Rgb8) -> (&'static str, Rgb8) {
    let mut best = PALETTE[0];
    let mut best_dist = color.distance_sq(best.1);
    for entry in &PALETTE[1..] {
        let dist = color.distance_sq(entry.1);
        if dist < best_dist {
            best = *entry;
            best_dist = dist;
        }
    }
    best
}

/// Display name of the palette entry closest to `color`.
///
/// The keyword is returned capitalized: `"darkslategrey"` becomes
/// `"Darkslategrey"`.
pub fn nearest_name(color: Rgb8) -> String {
    display_name(nearest_entry(color).0)
}

/// Display form of a palette keyword: first letter upper-case, rest
/// lower-case.
pub fn display_name(keyword: &str) -> String {
    let mut chars = keyword.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Color of the palette entry named `name`, ignoring case.
pub fn lookup_name(name: &str) -> Option<Rgb8> {
    let name = name.trim();
    PALETTE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}
