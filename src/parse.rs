//! Weight and bias text parsing
//!
//! Turns the training export's text dumps into flat float sequences.
//! Formatting artifacts from naive text splitting (stray delimiters,
//! trailing newlines, empty rows) are discarded before any counting, so
//! they can never corrupt the neuron count downstream.

use crate::{Error, Result};

/// Parse a weights text dump into flat per-neuron rows.
///
/// Row delimiter contract: one whitespace-separated row per line. As a
/// compatibility form, a numpy-style array dump is also accepted, where a
/// closing bracket `]` delimits rows and `[` plus newlines are noise.
/// Both forms partition identically.
pub fn parse_weight_rows(text: &str) -> Result<Vec<Vec<f32>>> {
    let mut rows = Vec::new();

    if text.contains(']') {
        let cleaned: String = text
            .chars()
            .filter(|&c| c != '\n' && c != '\r' && c != '[')
            .collect();
        for chunk in cleaned.split(']') {
            if let Some(row) = parse_row(chunk)? {
                rows.push(row);
            }
        }
    } else {
        for line in text.lines() {
            if let Some(row) = parse_row(line)? {
                rows.push(row);
            }
        }
    }

    Ok(rows)
}

/// Parse a biases text dump: one float per line, blank lines discarded.
pub fn parse_biases(text: &str) -> Result<Vec<f32>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_token)
        .collect()
}

/// Parse one whitespace-separated row; `None` if the row holds no tokens.
fn parse_row(chunk: &str) -> Result<Option<Vec<f32>>> {
    let row: Vec<f32> = chunk
        .split_whitespace()
        .map(parse_token)
        .collect::<Result<_>>()?;
    Ok(if row.is_empty() { None } else { Some(row) })
}

fn parse_token(token: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|_| Error::MalformedInput(format!("not a float: {:?}", token)))
}
