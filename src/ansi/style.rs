//! Style state for console text
//!
//! [`TextStyle`] is the value type behind every styled segment: a snapshot
//! of the visual attributes in effect for a run of text. SGR codes mutate a
//! running style; the parser clones the current value into each segment it
//! emits, so snapshots are independently owned.

use serde::{Deserialize, Serialize};

use crate::ansi::color::{indexed_color, Rgb, CONSOLE_PALETTE};

/// Visual attributes for a run of console text
///
/// Attributes are independent: clearing one leaves the others untouched.
/// The default value is "plain" - no decoration, no colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
}

impl TextStyle {
    /// Check whether every attribute is at its default
    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }

    /// Apply a sequence of SGR codes to this style, in order
    ///
    /// Codes `38` and `48` consume the following codes as sub-parameters
    /// (`5;N` for indexed, `2;R;G;B` for literal RGB). Unrecognized codes
    /// are ignored.
    pub fn apply_codes(&mut self, codes: &[u16]) {
        let mut i = 0;
        while i < codes.len() {
            match codes[i] {
                0 => *self = TextStyle::default(),
                1 => self.bold = true,
                2 => self.faint = true,
                3 => self.italic = true,
                4 => self.underline = true,
                9 => self.strikethrough = true,
                22 => {
                    self.bold = false;
                    self.faint = false;
                }
                23 => self.italic = false,
                24 => self.underline = false,
                29 => self.strikethrough = false,
                30..=37 => self.foreground = Some(CONSOLE_PALETTE[(codes[i] - 30) as usize]),
                38 => {
                    let (color, consumed) = extended_color(&codes[i + 1..]);
                    if color.is_some() {
                        self.foreground = color;
                    }
                    i += consumed;
                }
                39 => self.foreground = None,
                40..=47 => self.background = Some(CONSOLE_PALETTE[(codes[i] - 40) as usize]),
                48 => {
                    let (color, consumed) = extended_color(&codes[i + 1..]);
                    if color.is_some() {
                        self.background = color;
                    }
                    i += consumed;
                }
                49 => self.background = None,
                90..=97 => self.foreground = Some(CONSOLE_PALETTE[(codes[i] - 90) as usize]),
                100..=107 => self.background = Some(CONSOLE_PALETTE[(codes[i] - 100) as usize]),
                code => {
                    trace!("Ignoring unrecognized SGR code {}", code);
                }
            }
            i += 1;
        }
    }
}

/// Resolve the sub-parameters of an extended color code (`38`/`48`)
///
/// Returns the resolved color (if the sub-parameters were complete and in
/// range) and how many codes were consumed, so the caller's cursor skips
/// past them either way.
fn extended_color(rest: &[u16]) -> (Option<Rgb>, usize) {
    match rest.first() {
        Some(5) => {
            let color = rest
                .get(1)
                .and_then(|&index| u8::try_from(index).ok())
                .map(indexed_color);
            (color, rest.len().min(2))
        }
        Some(2) => {
            let color = match (rest.get(1), rest.get(2), rest.get(3)) {
                (Some(&r), Some(&g), Some(&b)) => {
                    match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
                        (Ok(r), Ok(g), Ok(b)) => Some(Rgb::new(r, g, b)),
                        _ => None,
                    }
                }
                _ => None,
            };
            (color, rest.len().min(4))
        }
        _ => (None, 0),
    }
}
