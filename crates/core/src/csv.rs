//! Delimited-text (CSV/TSV) parsing functions
//!
//! Parsing here is deliberately best-effort: malformed input degrades to a
//! partial result plus advisory messages in [`ParsedCsv::errors`], and nothing
//! in this module ever returns an error to the caller or panics. Ragged rows
//! are reported, not corrected or rejected.

use serde::Serialize;

/// Result of parsing a delimited text blob into a table.
///
/// A fresh value is built on every call; there is no incremental state.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedCsv {
    /// Header row, empty unless the caller asked for first-row headers.
    pub headers: Vec<String>,
    /// Data rows. Every row should have `total_columns` fields; rows that
    /// don't are recorded in `errors` but kept as-is.
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    pub total_columns: usize,
    /// Advisory diagnostics. Never fatal.
    pub errors: Vec<String>,
}

impl ParsedCsv {
    fn empty_with_error(message: &str) -> Self {
        ParsedCsv {
            headers: Vec::new(),
            rows: Vec::new(),
            total_rows: 0,
            total_columns: 0,
            errors: vec![message.to_string()],
        }
    }
}

/// Parse a single line of delimited text into trimmed fields.
///
/// Honors double-quote-delimited fields and doubled-quote escaping (`""`
/// inside a quoted field decodes to one literal `"`). An unterminated quote at
/// the end of the line is accepted silently: the remaining text is treated as
/// still-quoted content. That permissiveness is policy, so the function never
/// actually fails; the `Result` exists because [`parse_csv`] keeps a per-line
/// failure channel.
pub fn parse_line(line: &str, delimiter: char) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            if in_quotes && chars.get(i + 1) == Some(&'"') {
                // Escaped quote
                current.push('"');
                i += 2;
            } else {
                in_quotes = !in_quotes;
                i += 1;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
            i += 1;
        } else {
            current.push(c);
            i += 1;
        }
    }

    fields.push(current.trim().to_string());

    Ok(fields)
}

/// Parse a multi-line text blob into a [`ParsedCsv`].
///
/// Blank lines are skipped entirely (no placeholder row). Every row's field
/// count is compared to the first parsed row's; mismatches are reported in
/// `errors`. When `has_header` is set, the first parsed row becomes `headers`
/// and is excluded from `rows`.
pub fn parse_csv(input: &str, delimiter: char, has_header: bool) -> ParsedCsv {
    if input.trim().is_empty() {
        return ParsedCsv::empty_with_error("CSV is empty");
    }

    let mut errors = Vec::new();
    let mut parsed: Vec<Vec<String>> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line, delimiter) {
            Ok(fields) => parsed.push(fields),
            Err(message) => {
                errors.push(format!("Error parsing line {}: {}", idx + 1, message));
            }
        }
    }

    if parsed.is_empty() {
        return ParsedCsv::empty_with_error("No valid rows found");
    }

    // Expected width comes from the first physical row, header included.
    let expected = parsed[0].len();
    for (idx, row) in parsed.iter().enumerate() {
        if row.len() != expected {
            errors.push(format!(
                "Row {} has {} columns, expected {}",
                idx + 1,
                row.len(),
                expected
            ));
        }
    }

    let headers = if has_header {
        parsed.remove(0)
    } else {
        Vec::new()
    };

    ParsedCsv {
        total_rows: parsed.len(),
        total_columns: expected,
        rows: parsed,
        headers,
        errors,
    }
}

/// Project the parsed table into a JSON array of records.
///
/// With headers, each row becomes an object keyed by header name; without,
/// keys are `column_1..column_n`. Ragged rows are zipped positionally: missing
/// fields are omitted, extra fields are dropped.
pub fn records_to_json(table: &ParsedCsv) -> serde_json::Value {
    let keys: Vec<String> = if table.headers.is_empty() {
        (1..=table.total_columns)
            .map(|n| format!("column_{n}"))
            .collect()
    } else {
        table.headers.clone()
    };

    let records: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = keys
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();

    serde_json::Value::Array(records)
}
