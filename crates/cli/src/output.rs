//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use foldmatch_search::{CaseOutcome, HarnessReport};
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Colored yes/no marker for a match result
pub fn match_mark(matched: bool) -> String {
    if matched {
        "match".green().to_string()
    } else {
        "no match".dimmed().to_string()
    }
}

/// Render a harness report as one line per case.
///
/// Each cell shows the observed result; cells that disagree with the
/// expected result are flagged with `✗`.
pub fn render_matrix(report: &HarnessReport) -> String {
    let mut out = String::new();

    let header: Vec<String> = report
        .strategies
        .iter()
        .map(|kind| format!("{:<12}", kind.name()))
        .collect();
    out.push_str(&format!("{:<16} {:<16} {}\n", "stored", "query", header.join(" ")));

    for row in report.rows() {
        let Some(first) = row.first() else { continue };
        let cells: Vec<String> = row.iter().map(render_cell).collect();
        out.push_str(&format!(
            "{:<16} {:<16} {}\n",
            quoted(first.result.stored.as_str()),
            quoted(first.result.query.as_str()),
            cells.join(" ")
        ));
    }

    out
}

fn render_cell(outcome: &CaseOutcome) -> String {
    let mark = if outcome.result.matched { "yes" } else { "no" };
    if outcome.passed() {
        format!("{:<12}", mark)
    } else {
        format!("{:<12}", format!("{} ✗", mark)).red().to_string()
    }
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text)
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
