//! Padded-table rendering for CLI output

use console::Style;
use tablerclib::{BackendReport, StartupReport};

const NAME_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 12;
const VERSION_WIDTH: usize = 12;
const FILTERS_WIDTH: usize = 8;

/// Style applied to header rows
fn header_style() -> Style {
    Style::new().bold()
}

fn header_line(cells: &[(&str, usize)], last: &str) -> String {
    let mut line = String::new();
    for (name, width) in cells.iter().copied() {
        line.push_str(&format!("{:<width$}", name, width = width));
    }
    line.push_str(last);
    format!("{}\n", header_style().apply_to(line))
}

fn separator(width: usize) -> String {
    format!("{}\n", "-".repeat(width))
}

/// Format a backend's applied settings as `key=value` pairs.
fn settings_cell(report: &BackendReport) -> String {
    if report.applied.is_empty() {
        return "-".to_string();
    }
    report
        .applied
        .iter()
        .map(|a| format!("{}={}", a.option, a.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a startup report as a table.
pub fn render_report(report: &StartupReport) -> String {
    let mut out = header_line(
        &[
            ("Backend", NAME_WIDTH),
            ("Status", STATUS_WIDTH),
            ("Version", VERSION_WIDTH),
            ("Filters", FILTERS_WIDTH),
        ],
        "Settings",
    );
    let sep_width = NAME_WIDTH + STATUS_WIDTH + VERSION_WIDTH + FILTERS_WIDTH + 8;
    out.push_str(&separator(sep_width));

    for backend in &report.backends {
        let status = if backend.is_configured() {
            "configured"
        } else {
            "skipped"
        };
        let version = backend.version.as_deref().unwrap_or("-");
        let filters = if backend.is_configured() {
            backend.suppressed.to_string()
        } else {
            "-".to_string()
        };
        out.push_str(&format!(
            "{:<name$}{:<status$}{:<version$}{:<filters$}{}\n",
            backend.name,
            status,
            version,
            filters,
            settings_cell(backend),
            name = NAME_WIDTH,
            status = STATUS_WIDTH,
            version = VERSION_WIDTH,
            filters = FILTERS_WIDTH,
        ));
    }

    out.push_str(&separator(sep_width));
    out.push_str(&format!(
        "Configured {} of {} backends\n",
        report.configured_count(),
        report.backends.len()
    ));
    out
}

/// Render a presence-only check as a table.
pub fn render_presence(rows: &[(String, Option<String>)]) -> String {
    let mut out = header_line(
        &[("Backend", NAME_WIDTH), ("Present", STATUS_WIDTH)],
        "Version",
    );
    out.push_str(&separator(NAME_WIDTH + STATUS_WIDTH + 7));

    for (name, version) in rows {
        let present = if version.is_some() { "yes" } else { "no" };
        out.push_str(&format!(
            "{:<name$}{:<status$}{}\n",
            name,
            present,
            version.as_deref().unwrap_or("-"),
            name = NAME_WIDTH,
            status = STATUS_WIDTH,
        ));
    }
    out
}
