//! Console Line Model
//!
//! Represents a single line of server console output as received over the
//! panel's console stream, together with its parsed style segments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ansi::{strip, StyleParser, StyledSegment};

/// A single line of server console output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleLine {
    /// The raw text as received, escape sequences included
    pub raw: String,

    /// Styled segments parsed from the raw text
    pub segments: Vec<StyledSegment>,

    /// Position in the console stream (line number)
    pub line_number: usize,

    /// When this line was received
    pub received_at: DateTime<Utc>,
}

impl ConsoleLine {
    /// Create a new console line with no parsed segments yet
    pub fn new(raw: String, line_number: usize) -> Self {
        Self {
            raw,
            segments: Vec::new(),
            line_number,
            received_at: Utc::now(),
        }
    }

    /// Create a console line with pre-parsed segments
    pub fn with_segments(raw: String, segments: Vec<StyledSegment>, line_number: usize) -> Self {
        Self {
            raw,
            segments,
            line_number,
            received_at: Utc::now(),
        }
    }

    /// Parse the raw text into styled segments
    pub fn parse_styles(&mut self, parser: &StyleParser) {
        self.segments = parser.parse(&self.raw);
    }

    /// Get the visible text with all escape sequences removed
    pub fn plain_text(&self) -> String {
        if self.segments.is_empty() {
            strip(&self.raw)
        } else {
            self.segments
                .iter()
                .map(|segment| segment.text.as_str())
                .collect()
        }
    }

    /// Check whether any segment carries a non-default style
    pub fn has_styling(&self) -> bool {
        self.segments.iter().any(|segment| !segment.style.is_plain())
    }

    /// Check whether any segment carries a foreground or background color
    pub fn has_colors(&self) -> bool {
        self.segments.iter().any(|segment| {
            segment.style.foreground.is_some() || segment.style.background.is_some()
        })
    }
}

impl Default for ConsoleLine {
    fn default() -> Self {
        Self::new(String::new(), 0)
    }
}

impl From<String> for ConsoleLine {
    fn from(raw: String) -> Self {
        Self::new(raw, 0)
    }
}

impl From<&str> for ConsoleLine {
    fn from(raw: &str) -> Self {
        Self::new(raw.to_string(), 0)
    }
}
