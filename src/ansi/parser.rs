//! SGR escape sequence parsing
//!
//! This module turns a string of console output into styled segments. Only
//! SGR sequences (`ESC [ ... m`) are interpreted; any other control bytes
//! pass through as literal text, so nothing a server prints is ever lost.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ansi::style::TextStyle;

/// Pattern for SGR escape sequences, shared by [`StyleParser::parse`] and
/// [`strip`] so the two always agree on what constitutes a sequence.
static SGR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// A run of text sharing one style snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSegment {
    pub text: String,
    pub style: TextStyle,
}

/// How a parameterless SGR sequence (`ESC[m`) is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptySequenceMode {
    /// Treat `ESC[m` as `ESC[0m`, the standard SGR convention
    #[default]
    Reset,
    /// Leave the current style untouched (legacy panel behavior)
    Ignore,
}

/// ANSI style parser
///
/// Scans input left to right, maintains a running style state, and emits
/// one [`StyledSegment`] per run of text sharing a style. The running state
/// is local to each [`parse`](Self::parse) call; the parser itself is
/// immutable and can be shared freely.
#[derive(Debug, Clone)]
pub struct StyleParser {
    /// Interpretation of `ESC[m`
    empty_mode: EmptySequenceMode,
}

impl StyleParser {
    /// Create a parser with the standard `ESC[m` = reset behavior
    pub fn new() -> Self {
        Self {
            empty_mode: EmptySequenceMode::Reset,
        }
    }

    /// Create a parser with an explicit `ESC[m` interpretation
    pub fn with_empty_sequence_mode(mode: EmptySequenceMode) -> Self {
        Self { empty_mode: mode }
    }

    /// Get the configured `ESC[m` interpretation
    pub fn empty_sequence_mode(&self) -> EmptySequenceMode {
        self.empty_mode
    }

    /// Parse console output into styled segments
    ///
    /// Concatenating the `text` of the returned segments yields the input
    /// with all SGR sequences removed. Always returns at least one segment;
    /// for empty or escape-only input the single segment has empty text.
    pub fn parse(&self, input: &str) -> Vec<StyledSegment> {
        let mut segments = Vec::new();
        let mut style = TextStyle::default();
        let mut last_end = 0;

        for mat in SGR_PATTERN.find_iter(input) {
            // Emit the literal text before this sequence with the style
            // in effect up to here
            if mat.start() > last_end {
                segments.push(StyledSegment {
                    text: input[last_end..mat.start()].to_string(),
                    style: style.clone(),
                });
            }

            // Apply the parameter list, without the leading `ESC[` and
            // trailing `m`
            let params = &input[mat.start() + 2..mat.end() - 1];
            self.apply_sequence(&mut style, params);

            last_end = mat.end();
        }

        // Emit remaining text after the last sequence
        if last_end < input.len() {
            segments.push(StyledSegment {
                text: input[last_end..].to_string(),
                style: style.clone(),
            });
        }

        // The console view expects at least one segment per line, even for
        // empty or escape-only input
        if segments.is_empty() {
            segments.push(StyledSegment {
                text: String::new(),
                style,
            });
        }

        segments
    }

    /// Apply one sequence's parameter list to the running style
    fn apply_sequence(&self, style: &mut TextStyle, params: &str) {
        if params.is_empty() {
            match self.empty_mode {
                EmptySequenceMode::Reset => *style = TextStyle::default(),
                EmptySequenceMode::Ignore => {}
            }
            return;
        }

        // Empty items inside a non-empty list ("1;;31") fail to parse and
        // are skipped, matching the panel's lenience
        let codes: Vec<u16> = params
            .split(';')
            .filter_map(|part| part.parse().ok())
            .collect();

        style.apply_codes(&codes);
    }
}

impl Default for StyleParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove every SGR escape sequence from the input
///
/// Pure and stateless; the style information is discarded.
pub fn strip(input: &str) -> String {
    SGR_PATTERN.replace_all(input, "").into_owned()
}
