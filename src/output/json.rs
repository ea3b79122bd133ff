//! JSON output for scripted use.

use crate::models::Outcome;
use serde_json::json;

/// Render an outcome as a single JSON object.
///
/// Success: the three report fields. Failure:
/// `{"error": {"kind", "message", "input"}}`.
pub fn render_json(outcome: &Outcome) -> Result<String, serde_json::Error> {
    match outcome {
        Ok(report) => serde_json::to_string(report),
        Err(err) => serde_json::to_string(&json!({ "error": err })),
    }
}
