//! Terminal output utilities.
//!
//! Labelled, coloured rendering of a calculation for interactive use.

use crate::error::{CalcError, ErrorKind};
use crate::models::{Outcome, Report};
use colored::Colorize;

pub const LABEL_NETWORK: &str = "Network Address";
pub const LABEL_BROADCAST: &str = "Broadcast Address";
pub const LABEL_HOSTS: &str = "Available Hosts";

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn format_report(report: &Report) -> String {
    let width = LABEL_BROADCAST.len() + 1;
    [
        (LABEL_NETWORK, &report.network_address),
        (LABEL_BROADCAST, &report.broadcast_address),
        (LABEL_HOSTS, &report.available_hosts),
    ]
    .iter()
    .map(|(label, value)| {
        let label = format!("{:>width$}", format!("{label}:"));
        format!("{} {value}", label.bold())
    })
    .collect::<Vec<String>>()
    .join("\n")
}

/// Text shown for a failed calculation.
pub fn error_text(err: &CalcError) -> String {
    match err.kind {
        ErrorKind::ComputationFailed => format!("An error occurred: {}", err.message),
        ErrorKind::InvalidAddress | ErrorKind::InvalidMask => err.message.clone(),
    }
}

/// Render an outcome as labelled lines, or a red error line.
pub fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Ok(report) => format_report(report),
        Err(err) => format!("{}: {}", "Error".red().bold(), error_text(err)),
    }
}
