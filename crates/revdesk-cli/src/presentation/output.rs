//! Payload output on stdout.

use std::io::Write;

use serde_json::Value;

use crate::error::CliError;

/// Pretty-print a payload. Empty payloads print nothing.
pub fn format_json(value: &Value) -> Result<Option<String>, CliError> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::to_string_pretty(value)
        .map(Some)
        .map_err(|e| CliError::Internal(format!("Failed to format payload: {e}")))
}

pub fn print_json(value: &Value) -> Result<(), CliError> {
    if let Some(text) = format_json(value)? {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
    }
    Ok(())
}
