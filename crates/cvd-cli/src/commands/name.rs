//! Name command: nearest CSS3 color name.

use crate::NameArgs;
use anyhow::Result;
use cvd_core::Rgb8;
use tracing::debug;

/// Runs the name command.
pub fn run(args: NameArgs, verbose: bool) -> Result<()> {
    let color = super::parse_color(&args.color)?;
    println!("{}", describe(color, verbose));
    Ok(())
}

fn describe(color: Rgb8, verbose: bool) -> String {
    let (keyword, entry) = cvd_names::nearest_entry(color);
    let dist = color.distance_sq(entry);
    debug!(%color, keyword, dist, "nearest palette entry");

    let name = cvd_names::display_name(keyword);
    if verbose {
        format!("{} {} {} (distance^2 {})", color, name, entry.to_hex(), dist)
    } else {
        format!("{} {}", name, entry.to_hex())
    }
}
