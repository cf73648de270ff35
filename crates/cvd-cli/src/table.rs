//! Plain-text table rendering.
//!
//! Layout: centered header, `=` rule under it with `+` at the column
//! joints, left-aligned cells, ` | ` between columns, no outer border.
//!
//! ```text
//! NO |     TYPE     |     RGB      |   HEX   | NAME
//! ===+==============+==============+=========+======
//! 1  | Protanopia   | (144, 128, 33) | ...
//! ```

/// Renders `header` and `rows` as a table; every line ends with `\n`.
///
/// Rows shorter than the header are padded with empty cells.
pub fn render(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();

    let head: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:^w$}", h))
        .collect();
    push_line(&mut out, &head.join(" | "));

    let rule: Vec<String> = widths.iter().map(|&w| "=".repeat(w)).collect();
    push_line(&mut out, &rule.join("=+="));

    for row in rows {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| format!("{:<w$}", row.get(i).map(String::as_str).unwrap_or("")))
            .collect();
        push_line(&mut out, &cells.join(" | "));
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
