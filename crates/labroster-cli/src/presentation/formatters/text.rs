pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Whole-number percentage of a 0..=1 ratio, e.g. `75%`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{}%", (ratio.clamp(0.0, 1.0) * 100.0).round() as u32)
}

/// Whole numbers without a fraction, everything else to two places.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Left-aligned text table with a dashed rule under the header. Cells are
/// truncated to `max_cell` characters.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_cell: usize) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| truncate(cell, max_cell)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_row(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in cells {
        push_row(&mut out, row.into_iter(), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Routing Basics", 20), "Routing Basics");
        assert_eq!(truncate("Routing Basics", 10), "Routing...");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.75), "75%");
        assert_eq!(format_ratio(1.4), "100%");
        assert_eq!(format_ratio(0.0), "0%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(7.5), "7.50");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            vec!["ada".to_string(), "ada@example.com".to_string()],
            vec!["grace".to_string(), "g@example.com".to_string()],
        ];
        let table = render_table(&["Username", "Email"], &rows, 40);
        assert_eq!(
            table,
            "Username  Email\n\
             --------  ---------------\n\
             ada       ada@example.com\n\
             grace     g@example.com\n"
        );
    }
}
