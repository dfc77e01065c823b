use console::{measure_text_width, style};
use serotoninai_batch::PreviewTable;

pub fn render_table(table: &PreviewTable) -> String {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| measure_text_width(h)).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(measure_text_width(cell));
            }
        }
    }

    let last = widths.len().saturating_sub(1);
    let pad = |i: usize, text: &str| {
        if i == last {
            return text.to_string();
        }
        let fill = widths[i].saturating_sub(measure_text_width(text));
        format!("{text}{}", " ".repeat(fill))
    };

    let header: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| style(pad(i, h)).bold().to_string())
        .collect();
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();

    let mut out = format!("{}\n{}\n", header.join("  "), rule.join("  "));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().enumerate().map(|(i, c)| pad(i, c)).collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        let table = PreviewTable {
            headers: vec!["Compound".into(), "Status".into()],
            rows: vec![vec!["Fluoxetine".into(), "OK".into()], vec!["LSD".into(), "Error: timeout".into()]],
        };
        let text = console::strip_ansi_codes(&render_table(&table)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Compound    Status");
        assert_eq!(lines[2], "Fluoxetine  OK");
        assert_eq!(lines[3], "LSD         Error: timeout");
    }
}
