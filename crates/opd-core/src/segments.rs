//! Delimited text form of a suggestion.
//!
//! Model replies and printed suggestions share one plain-text shape so the
//! diagnosis can always be pulled out programmatically:
//!
//! ```text
//! |DIAGNOSIS| Acute Febrile Illness
//! |RX|
//! 1. TAB. PARACETAMOL 650mg | 1--1--1 | 3 days | After food
//! ```
//!
//! Drug lines use a bare `|` between columns; only the bracketed markers
//! delimit segments.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::suggestion::SuggestionResult;

pub const DIAGNOSIS_MARKER: &str = "|DIAGNOSIS|";
pub const RX_MARKER: &str = "|RX|";

/// The two segments recovered from delimited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    pub diagnosis: String,
    pub rx: String,
}

/// Render a structured result in the delimited form.
pub fn to_segments(result: &SuggestionResult) -> String {
    format!(
        "{DIAGNOSIS_MARKER} {}\n{RX_MARKER}\n{}",
        result.diagnosis,
        result.rx_text()
    )
}

/// Recover the diagnosis and prescription from delimited text.
///
/// Text before the diagnosis marker is ignored, so a chatty model preamble
/// does no harm. The diagnosis is the rest of the marker's line, or the
/// first non-blank line after it when the marker stands alone. The
/// prescription is everything after the rx marker, or, without one,
/// everything after the diagnosis line.
pub fn parse_segments(text: &str) -> Result<Segments, CoreError> {
    let (_, after_marker) = text
        .split_once(DIAGNOSIS_MARKER)
        .ok_or(CoreError::MissingMarker(DIAGNOSIS_MARKER))?;

    let (diagnosis_part, rest) = match after_marker.split_once(RX_MARKER) {
        Some((before_rx, after_rx)) => (first_filled_line(before_rx).0, after_rx),
        None => first_filled_line(after_marker),
    };

    let diagnosis = diagnosis_part.trim().to_string();
    if diagnosis.is_empty() {
        return Err(CoreError::MissingField("diagnosis".to_string()));
    }

    Ok(Segments {
        diagnosis,
        rx: rest.trim().to_string(),
    })
}

/// Split off the first line with any non-whitespace on it. Returns that line
/// and the text after it; a blank `text` yields its last line and `""`.
fn first_filled_line(text: &str) -> (&str, &str) {
    let mut rest = text;
    loop {
        let (line, tail) = rest.split_once('\n').unwrap_or((rest, ""));
        if !line.trim().is_empty() || tail.is_empty() {
            return (line, tail);
        }
        rest = tail;
    }
}

/// Pull just the diagnosis out of delimited text, if it carries one.
pub fn extract_diagnosis(text: &str) -> Option<String> {
    parse_segments(text).ok().map(|s| s.diagnosis)
}
