//! Output formatting and display logic for velorisk

use serde::Serialize;

use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::metrics::MetricsReport;
use crate::analysis::risk::{RiskAssessment, RiskLevel};
use crate::core::constants::display;
use crate::ui::color::{Colors, colorize};

/// Print a page heading
pub fn display_heading(title: &str) {
    println!(
        "\n{}",
        colorize(
            &format!("{}# {title}{}", Colors::BOLD, Colors::RESET),
            Colors::BRIGHT_CYAN
        )
    );
}

/// Print a section heading inside a page
pub fn display_section(title: &str) {
    println!("\n{}", colorize(title, Colors::CYAN));
}

/// Print one labelled value
pub fn display_key_value(label: &str, value: &str) {
    println!(
        "{}: {}",
        colorize(
            &format!("{}{label}{}", Colors::BOLD, Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(value, Colors::BRIGHT_WHITE)
    );
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error: could not serialize output: {e}"),
    }
}

/// Current terminal width, with a fallback for redirected output
pub fn terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(display::FALLBACK_TERM_WIDTH)
}

/// Render a plain text table with padded columns.
///
/// Columns that would overflow the terminal are dropped and counted in
/// a trailing note, keeping rows on one line each.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let max_width = terminal_width();
    let mut shown = 0usize;
    let mut used = 0usize;
    for width in &widths {
        let needed = width + if shown == 0 { 0 } else { 2 };
        if used + needed > max_width && shown > 0 {
            break;
        }
        used += needed;
        shown += 1;
    }

    let mut out = String::new();
    render_row(&mut out, headers, &widths, shown);
    let rule: Vec<String> = widths[..shown].iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, &rule, &widths, shown);
    for row in rows {
        render_row(&mut out, row, &widths, shown);
    }

    let hidden = headers.len() - shown;
    if hidden > 0 {
        out.push_str(&format!("(+{hidden} more column(s) not shown)\n"));
    }
    out
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize], shown: usize) {
    let mut line = String::new();
    for i in 0..shown {
        if i > 0 {
            line.push_str("  ");
        }
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(cell);
        let padding = widths[i].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(padding));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render a correlation matrix as a table; undefined cells stay blank
pub fn render_correlation_table(matrix: &CorrelationMatrix) -> String {
    let mut headers = vec![String::new()];
    headers.extend(matrix.labels.iter().cloned());

    let rows: Vec<Vec<String>> = matrix
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut row = vec![label.clone()];
            row.extend((0..matrix.size()).map(|j| {
                matrix
                    .get(i, j)
                    .map(|r| format!("{r:.prec$}", prec = display::CORRELATION_DECIMALS))
                    .unwrap_or_default()
            }));
            row
        })
        .collect();

    render_table(&headers, &rows)
}

/// Display an offline metrics report in text format
pub fn display_metrics_report(report: &MetricsReport) {
    display_key_value("Rows evaluated", &report.total.to_string());
    display_key_value("Accuracy", &format_metric(report.accuracy));
    display_key_value("Precision (weighted)", &format_metric(report.precision_weighted));
    display_key_value("Recall (weighted)", &format_metric(report.recall_weighted));
    display_key_value("F1 (weighted)", &format_metric(report.f1_weighted));

    display_section("Per-class metrics");
    let headers: Vec<String> = ["Class", "Support", "Precision", "Recall", "F1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows: Vec<Vec<String>> = report
        .per_class
        .iter()
        .map(|c| {
            vec![
                c.label.clone(),
                c.support.to_string(),
                format_metric(c.precision),
                format_metric(c.recall),
                format_metric(c.f1),
            ]
        })
        .collect();
    print!("{}", render_table(&headers, &rows));

    display_section("Confusion matrix (rows = actual, columns = predicted)");
    let mut headers = vec!["actual \\ predicted".to_string()];
    headers.extend(report.confusion.labels.iter().cloned());
    let rows: Vec<Vec<String>> = report
        .confusion
        .labels
        .iter()
        .zip(&report.confusion.counts)
        .map(|(label, counts)| {
            let mut row = vec![label.clone()];
            row.extend(counts.iter().map(|c| c.to_string()));
            row
        })
        .collect();
    print!("{}", render_table(&headers, &rows));
}

/// Display a risk assessment in text format
pub fn display_risk_assessment(assessment: &RiskAssessment) {
    let label = assessment.level.to_string();
    let colored = match assessment.level {
        RiskLevel::High => colorize(&label, Colors::BRIGHT_RED),
        RiskLevel::Low => colorize(&label, Colors::BRIGHT_GREEN),
    };
    println!("\nPredicted risk of theft: {colored}");

    match assessment.mode_hour {
        Some(mode) => {
            display_key_value("Most frequent theft hour", &format!("{mode}:00"));
            display_key_value("Historical records in slice", &assessment.sample_size.to_string());
            display_key_value("High-risk window", &format!("±{} hour(s)", assessment.window));
        }
        None => {
            println!(
                "{}",
                colorize(
                    "No historical thefts recorded for this district and bicycle type.",
                    Colors::DIM
                )
            );
        }
    }
}

fn format_metric(value: f64) -> String {
    format!("{value:.prec$}", prec = display::METRIC_DECIMALS)
}
