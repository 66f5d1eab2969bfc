//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, align: Align) -> Self {
        Self {
            header: header.to_string(),
            align,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width of each column: the widest of header and cells.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        push_line(&mut out, &headers, &self.columns, &widths);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        push_line(&mut out, &rule, &self.columns, &widths);

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            push_line(&mut out, &cells, &self.columns, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[&str], columns: &[Column], widths: &[usize]) {
    let mut parts = Vec::with_capacity(cells.len());
    for ((cell, col), width) in cells.iter().zip(columns).zip(widths) {
        // pad by display width, not byte length
        let pad = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(*cell)));
        match col.align {
            Align::Left => parts.push(format!("{cell}{pad}")),
            Align::Right => parts.push(format!("{pad}{cell}")),
        }
    }
    out.push_str(parts.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let mut table = Table::new(vec![
            Column::new("name", Align::Left),
            Column::new("miles", Align::Right),
        ]);
        table.add_row(vec!["Alice".into(), "150".into()]);
        table.add_row(vec!["Bo".into(), "2000".into()]);

        let out = table.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "name   miles");
        assert_eq!(lines[1], "-----  -----");
        assert_eq!(lines[2], "Alice    150");
        assert_eq!(lines[3], "Bo      2000");
    }

    #[test]
    fn wide_characters_use_display_width() {
        let mut table = Table::new(vec![
            Column::new("name", Align::Left),
            Column::new("n", Align::Right),
        ]);
        table.add_row(vec!["李雷".into(), "1".into()]);
        let out = table.render();
        assert!(out.lines().any(|l| l == "李雷  1"));
    }
}
