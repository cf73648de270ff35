//! CLI command implementations

pub mod convert;
pub mod list;
pub mod name;

use anyhow::{Context, Result, bail};
use cvd_core::{Condition, Rgb8};
use tracing::debug;

/// Parses the positional color argument.
///
/// One token is a hex value or a CSS3 name; three tokens are decimal
/// channels in `[0, 255]`. A lone token of at most three digits is
/// rejected: it reads as the first of three channels, not as `#rgb`.
pub fn parse_color(tokens: &[String]) -> Result<Rgb8> {
    match tokens {
        [single] => {
            if looks_like_channel(single) {
                bail!(
                    "'{}' looks like a single channel value; pass three integers R G B or a hex color",
                    single
                );
            }
            if let Ok(color) = Rgb8::from_hex(single) {
                return Ok(color);
            }
            if let Some(color) = cvd_names::lookup_name(single) {
                debug!(keyword = %single, %color, "resolved color name");
                return Ok(color);
            }
            bail!("'{}' is neither a hex color nor a CSS3 color name", single)
        }
        [r, g, b] => {
            let channel = |s: &String| {
                s.parse::<i64>()
                    .with_context(|| format!("Invalid channel value: '{}'", s))
            };
            Ok(Rgb8::try_from_ints(channel(r)?, channel(g)?, channel(b)?)?)
        }
        _ => bail!(
            "Expected one hex color or three integers, got {} values",
            tokens.len()
        ),
    }
}

/// Short all-decimal token without a `#` prefix.
fn looks_like_channel(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && token.len() <= 3 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Resolves a condition selector.
///
/// * a decimal number selects one condition by index
/// * `All` (any case) selects every condition
/// * anything else is capitalized and matched as a name prefix, so `prot`
///   selects Protanopia and Protanomaly
pub fn select_conditions(selector: &str) -> Result<Vec<Condition>> {
    let selector = selector.trim();

    if !selector.is_empty() && selector.bytes().all(|b| b.is_ascii_digit()) {
        let index: usize = selector
            .parse()
            .with_context(|| format!("Invalid condition index: '{}'", selector))?;
        return Ok(vec![Condition::from_index(index)?]);
    }

    let prefix = capitalize(selector);
    if prefix == "All" {
        return Ok(Condition::ALL.to_vec());
    }

    let selected: Vec<Condition> = Condition::ALL
        .into_iter()
        .filter(|c| c.name().starts_with(&prefix))
        .collect();

    if selected.is_empty() {
        let names: Vec<&str> = Condition::ALL.iter().map(|c| c.name()).collect();
        bail!(
            "No condition matches '{}' (expected an index 0-{}, All, or a prefix of: {})",
            selector,
            Condition::COUNT - 1,
            names.join(", ")
        );
    }
    Ok(selected)
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
