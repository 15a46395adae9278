//! Plain-text tables, detail views and the pager line.

use chrono::{DateTime, Utc};
use client_core::{
    pagination::{page_links, PageWindow},
    Record, RecordPage,
};
use shared::domain::{Customer, CustomerId, Order, OrderId};

/// How a record kind is laid out on the terminal.
pub trait TableRow: Record {
    /// Plural label used in headings, e.g. `customers`.
    const LABEL: &'static str;
    const HEADERS: &'static [&'static str];

    fn id_from(raw: i64) -> Self::Id;

    fn cells(&self) -> Vec<String>;

    /// Label/value pairs of the detail dialog.
    fn details(&self) -> Vec<(&'static str, String)>;

    /// One-line description used in the delete confirmation.
    fn summary(&self) -> String;
}

impl TableRow for Customer {
    const LABEL: &'static str = "customers";
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Phone"];

    fn id_from(raw: i64) -> CustomerId {
        CustomerId(raw)
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone(), self.phone.clone()]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Phone", self.phone.clone()),
            ("Created", format_timestamp(self.created_at.as_ref())),
        ]
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, self.phone)
    }
}

impl TableRow for Order {
    const LABEL: &'static str = "orders";
    const HEADERS: &'static [&'static str] = &["ID", "Customer", "Phone", "Service", "Amount"];

    fn id_from(raw: i64) -> OrderId {
        OrderId(raw)
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.service.clone(),
            format!("{} {}", self.amount, self.unit),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Customer", format!("{} (#{})", self.name, self.customer_id)),
            ("Phone", self.phone.clone()),
            ("Service", self.service.clone()),
            ("Amount", format!("{} {}", self.amount, self.unit)),
            ("Price", format_rupiah(self.price)),
            ("Created", format_timestamp(self.created_at.as_ref())),
        ]
    }

    fn summary(&self) -> String {
        format!("{} for {}", self.service, self.name)
    }
}

pub fn render_table<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return format!("No {} found.\n", R::LABEL);
    }

    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();
    let mut widths: Vec<usize> = R::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, R::HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render_details<R: TableRow>(record: &R) -> String {
    let details = record.details();
    let width = details.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    details
        .iter()
        .map(|(label, value)| format!("{label:>width$}: {value}\n"))
        .collect()
}

/// `< 1 [2] 3 … 9 >  (87 records)`, with the arrows left out when the
/// matching button would be disabled.
pub fn render_pager(window: &PageWindow, total: usize) -> String {
    let mut parts = Vec::new();
    if window.has_previous {
        parts.push("<".to_string());
    }
    for link in page_links(window.page_count, window.page) {
        parts.push(match link {
            Some(page) if page == window.page => format!("[{page}]"),
            Some(page) => page.to_string(),
            None => "…".to_string(),
        });
    }
    if window.has_next {
        parts.push(">".to_string());
    }

    let noun = if total == 1 { "record" } else { "records" };
    if parts.is_empty() {
        format!("({total} {noun})")
    } else {
        format!("{}  ({total} {noun})", parts.join(" "))
    }
}

/// `None` unless the backend split the results over several pages.
pub fn render_server_summary<R>(page: &RecordPage<R>) -> Option<String> {
    if page.total_pages <= 1 {
        return None;
    }
    Some(format!(
        "Backend page {} of {}: {} matches in total, {} per page.",
        page.page, page.total_pages, page.count, page.limit
    ))
}

/// Formats whole rupiah with dot thousands separators: `Rp 1.500.000`.
pub fn format_rupiah(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

pub fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
