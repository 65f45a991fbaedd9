//! JSON formatting, minification, and validation functions

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Outcome of validating a JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct JsonValidation {
    pub valid: bool,
    /// Parser message including line/column, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Top-level value kind (`object`, `array`, `string`, ...), when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_kind: Option<String>,
}

/// Pretty-print a JSON document with the given indent width.
pub fn format_json(input: &str, indent: usize) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| format!("Invalid JSON: {e}"))?;

    let indent_bytes = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent_bytes.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| format!("JSON serialization failed: {e}"))?;

    String::from_utf8(out).map_err(|e| format!("JSON serialization failed: {e}"))
}

/// Strip all insignificant whitespace from a JSON document.
pub fn minify_json(input: &str) -> Result<String, String> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| format!("Invalid JSON: {e}"))?;

    serde_json::to_string(&value).map_err(|e| format!("JSON serialization failed: {e}"))
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Check whether the input is valid JSON. Never fails; the verdict is the value.
pub fn validate_json(input: &str) -> JsonValidation {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(value) => JsonValidation {
            valid: true,
            error: None,
            value_kind: Some(value_kind(&value).to_string()),
        },
        Err(e) => JsonValidation {
            valid: false,
            error: Some(e.to_string()),
            value_kind: None,
        },
    }
}
