//! Text formatting for terminal output.

/// Groups the integer digits of an already formatted number with commas.
fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = match formatted.find('.') {
        Some(idx) => formatted.split_at(idx),
        None => (formatted, ""),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + frac_part.len());
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}

/// Formats a number with thousands separators and fixed decimals.
///
/// `format_number(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", value.abs(), decimals);
    // Rounding can turn a tiny negative into "-0.00"
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    format!("{}{}", sign, group_thousands(&formatted))
}

/// Money amount with symbol, two decimals and thousands separators.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let amount = format_number(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{}{}", symbol, abs),
        None => format!("{}{}", symbol, amount),
    }
}

/// Money amount in thousands with one decimal, e.g. `£1,234.5k`.
pub fn format_thousands(value: f64, symbol: &str) -> String {
    let amount = format_number(value / 1_000.0, 1);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-{}{}k", symbol, abs),
        None => format!("{}{}k", symbol, amount),
    }
}

/// Whole-percent label for a fractional rate, e.g. `0.05` -> `"5%"`.
pub fn format_percent(rate: f64) -> String {
    format!("{}%", (rate * 100.0).round() as i64)
}

/// Plain-text table with a header rule.
///
/// The first column is left-aligned, the rest right-aligned.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row; missing cells render empty and extra cells are dropped.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table, one line per row.
    pub fn render(&self) -> String {
        let columns = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render_line = |cells: &[String]| -> String {
            (0..columns)
                .map(|i| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    if i == 0 {
                        format!("{:<width$}", cell, width = widths[i])
                    } else {
                        format!("{:>width$}", cell, width = widths[i])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&render_line(&self.headers));
        out.push('\n');
        let rule_width = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&render_line(row));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(999.6, 0), "1,000");
        assert_eq!(format_number(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-9_960.0, 2), "-9,960.00");
        assert_eq!(format_number(-0.001, 2), "0.00");
        assert_eq!(format_number(123.0, 0), "123");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(9_960.0, "£"), "£9,960.00");
        assert_eq!(format_currency(7.2, "£"), "£7.20");
        assert_eq!(format_currency(-1_500.5, "$"), "-$1,500.50");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1_234_567.0, "£"), "£1,234.6k");
        assert_eq!(format_thousands(940.0, "£"), "£0.9k");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.05), "5%");
        assert_eq!(format_percent(0.29), "29%");
    }

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(["Year", "Value"]);
        table.push_row(vec!["2025".to_string(), "£7.20".to_string()]);
        table.push_row(vec!["2026".to_string(), "£9,960.00".to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Year      Value");
        assert_eq!(lines[1], "-".repeat(15));
        assert_eq!(lines[2], "2025      £7.20");
        assert_eq!(lines[3], "2026  £9,960.00");
    }

    #[test]
    fn test_table_short_row() {
        let mut table = Table::new(["A", "B", "C"]);
        table.push_row(vec!["x".to_string()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.render().lines().nth(2), Some("x"));
    }
}
