//! Output formatting for calculation results.
//!
//! This module handles rendering an [`Outcome`] for the command line:
//! - [`terminal`] - Labelled text with colours
//! - [`csv`] - CSV rows
//! - [`json`] - One JSON object per calculation

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, render_csv_row};
pub use json::render_json;
pub use terminal::{error_text, format_field, render_text};

use crate::models::Outcome;
use std::error::Error;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format {other:?} (text, csv, json)").into()),
        }
    }
}

/// Render one calculation in the given format.
///
/// CSV rows do not include the header; see [`csv_header`].
pub fn render(
    format: OutputFormat,
    ip: &str,
    mask: &str,
    outcome: &Outcome,
) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => render_text(outcome),
        OutputFormat::Csv => render_csv_row(ip, mask, outcome),
        OutputFormat::Json => render_json(outcome)?,
    };
    Ok(out)
}
