//! Summary table rendering.
//!
//! Rendering is pure: everything is built into a `String` so the layout can be
//! asserted in tests and printed by the caller.

use crate::version::{PackageRecord, UpdateReport};
use std::fmt::Write;

/// Column headers, left to right
pub const HEADERS: [&str; 4] = ["Package", "Old Version", "New Version", "Status"];
/// Minimum width of each column, in characters
pub const MIN_WIDTHS: [usize; 4] = [25, 12, 12, 8];
/// Badge for a successful update
pub const STATUS_OK: &str = "OK";
/// Badge for a failed update
pub const STATUS_FAIL: &str = "FAIL";
/// Suffix marking the workspace root row
pub const ROOT_TAG: &str = " (root)";
/// Banner when every package was updated
pub const BANNER_ALL: &str = "ALL PACKAGES UPDATED";
/// Banner prefix when at least one package failed
pub const BANNER_PARTIAL: &str = "PARTIAL SUCCESS";

/// Display cells of one record
fn cells(record: &PackageRecord) -> [String; 4] {
    let name = if record.is_root {
        format!("{}{}", record.name, ROOT_TAG)
    } else {
        record.name.clone()
    };
    let status = if record.succeeded { STATUS_OK } else { STATUS_FAIL };
    [
        name,
        record.previous_version.clone(),
        record.new_version.clone(),
        status.to_string(),
    ]
}

/// Column widths: longest rendered value, never below `MIN_WIDTHS`
pub fn column_widths(report: &UpdateReport) -> [usize; 4] {
    let mut widths = MIN_WIDTHS;
    for (width, header) in widths.iter_mut().zip(HEADERS) {
        *width = (*width).max(header.chars().count());
    }
    for record in report.records() {
        for (width, cell) in widths.iter_mut().zip(cells(record)) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn border(out: &mut String, widths: &[usize; 4], left: char, mid: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&"─".repeat(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn row<S: AsRef<str>>(out: &mut String, widths: &[usize; 4], values: &[S; 4]) {
    out.push('│');
    for (value, width) in values.iter().zip(widths) {
        let _ = write!(out, " {:<width$} │", value.as_ref(), width = *width);
    }
    out.push('\n');
}

/// Render the bordered table, one row per record
pub fn render_table(report: &UpdateReport) -> String {
    let widths = column_widths(report);
    let mut out = String::new();

    border(&mut out, &widths, '┌', '┬', '┐');
    row(&mut out, &widths, &HEADERS);
    border(&mut out, &widths, '├', '┼', '┤');
    for record in report.records() {
        row(&mut out, &widths, &cells(record));
    }
    border(&mut out, &widths, '└', '┴', '┘');

    out
}

/// `Succeeded: <ok>/<total>`
pub fn render_count(report: &UpdateReport) -> String {
    format!("Succeeded: {}/{}", report.succeeded(), report.total())
}

/// Full-success or partial-success banner
pub fn render_banner(report: &UpdateReport) -> String {
    if report.all_succeeded() {
        BANNER_ALL.to_string()
    } else {
        format!("{}: {} package(s) failed", BANNER_PARTIAL, report.failed())
    }
}
