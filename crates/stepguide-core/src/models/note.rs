//! Note model and its single-line storage format.
//!
//! A note is stored as `[dd.MM.yyyy hh:mm] text`, one note per line.

use jiff::civil::DateTime;
use serde::Serialize;

use crate::error::{GuideError, Result};

/// strftime pattern of the note timestamp (`dd.MM.yyyy hh:mm`, 24-hour).
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// A timestamped free-text annotation attached to one step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Note {
    /// Time of creation or last edit, minute precision.
    ///
    /// `None` for lines read from disk without a recognizable timestamp
    /// prefix; such lines are written back unchanged.
    pub timestamp: Option<DateTime>,

    /// Single-line note content
    pub text: String,
}

impl Note {
    /// Creates a note stamped with `timestamp`, truncated to the minute.
    pub fn new(text: impl Into<String>, timestamp: DateTime) -> Self {
        Self {
            timestamp: Some(truncate_to_minute(timestamp)),
            text: text.into(),
        }
    }

    /// Parses one stored line.
    ///
    /// Lines that do not start with a bracketed timestamp in
    /// [`TIMESTAMP_FORMAT`] become notes without a timestamp whose text is
    /// the whole line.
    pub fn parse_line(line: &str) -> Self {
        let parsed = line.strip_prefix('[').and_then(|rest| {
            let (stamp, text) = rest.split_once(']')?;
            let timestamp = DateTime::strptime(TIMESTAMP_FORMAT, stamp).ok()?;
            let text = text.strip_prefix(' ').unwrap_or(text);
            Some(Self {
                timestamp: Some(timestamp),
                text: text.to_string(),
            })
        });

        parsed.unwrap_or_else(|| Self {
            timestamp: None,
            text: line.to_string(),
        })
    }

    /// Formats the note as its stored line, without the trailing newline.
    pub fn to_line(&self) -> String {
        match self.formatted_timestamp() {
            Some(stamp) => format!("[{stamp}] {}", self.text),
            None => self.text.clone(),
        }
    }

    /// The timestamp in [`TIMESTAMP_FORMAT`], if the note has one.
    pub fn formatted_timestamp(&self) -> Option<String> {
        self.timestamp
            .map(|timestamp| timestamp.strftime(TIMESTAMP_FORMAT).to_string())
    }
}

/// Trims user input and flattens it to a single line.
///
/// Each line is trimmed, blank lines are dropped and the remainder is joined
/// with single spaces, since a newline would split the note on reload.
///
/// # Errors
///
/// Returns [`GuideError::EmptyInput`] when nothing is left.
pub fn normalize_text(input: &str) -> Result<String> {
    let flattened = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if flattened.is_empty() {
        Err(GuideError::EmptyInput)
    } else {
        Ok(flattened)
    }
}

fn truncate_to_minute(timestamp: DateTime) -> DateTime {
    timestamp
        .with()
        .second(0)
        .subsec_nanosecond(0)
        .build()
        .unwrap_or(timestamp)
}
