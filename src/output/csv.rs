//! CSV output formatting for calculation results.

use crate::models::Outcome;

use super::terminal::{error_text, format_field};

/// Header row matching [`render_csv_row`].
pub fn csv_header() -> String {
    format!(
        "{address},{mask},{network},{broadcast},{hosts},{error}",
        address = format_field("address", 17),
        mask = format_field("mask", 17),
        network = format_field("network_address", 17),
        broadcast = format_field("broadcast_address", 19),
        hosts = format_field("available_hosts", 17),
        error = format_field("error", 7),
    )
}

/// One CSV row for a calculation. Failed calculations leave the result
/// columns empty and fill the error column.
pub fn render_csv_row(ip: &str, mask: &str, outcome: &Outcome) -> String {
    let (network, broadcast, hosts, error) = match outcome {
        Ok(report) => (
            report.network_address.as_str(),
            report.broadcast_address.as_str(),
            report.available_hosts.as_str(),
            String::new(),
        ),
        Err(err) => ("", "", "", error_text(err)),
    };
    format!(
        "{address},{mask},{network},{broadcast},{hosts},{error}",
        address = format_field(escape_csv_field(ip), 17),
        mask = format_field(escape_csv_field(mask), 17),
        network = format_field(network, 17),
        broadcast = format_field(broadcast, 19),
        hosts = format_field(hosts, 17),
        error = format_field(escape_csv_field(&error), 7),
    )
}

/// Double any embedded quotes so the value survives [`format_field`] quoting.
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}
