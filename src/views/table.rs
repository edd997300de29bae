//! Render-neutral table model
//!
//! Views produce a [`Table`]; the web dashboard turns it into `<table>`
//! markup and the CLI into padded text. An empty table always carries a
//! single placeholder row spanning every column.

use chrono::NaiveDate;

/// Shown where an optional value or a join target is missing
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Stable key for keyed rendering (the entity id)
    pub key: i64,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<Row>),
    /// No rows; the message fills one row across all columns
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub body: TableBody,
}

impl Table {
    pub fn new(columns: &[&'static str], rows: Vec<Row>, empty_message: &'static str) -> Self {
        let body = if rows.is_empty() {
            TableBody::Empty(empty_message)
        } else {
            TableBody::Rows(rows)
        };
        Self {
            columns: columns.to_vec(),
            body,
        }
    }

    /// Column count, which is also the span of the placeholder row
    pub fn colspan(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> &[Row] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty(_))
    }

    /// Plain-text rendering with left-aligned, padded columns
    pub fn render_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in self.rows() {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&render_line(self.columns.iter().copied(), &widths));
        out.push('\n');
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        match &self.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    out.push_str(&render_line(row.cells.iter().map(String::as_str), &widths));
                    out.push('\n');
                }
            }
            TableBody::Empty(message) => {
                out.push_str(message);
                out.push('\n');
            }
        }

        out
    }
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

/// Optional text or the placeholder when absent or empty
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
