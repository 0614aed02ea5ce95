//! ANSI escape code processing
//!
//! This module handles parsing of ANSI SGR escape sequences so the panel's
//! console view can render colored and formatted server output. It is split
//! into the color tables ([`color`]), the style state machine ([`style`]),
//! and the segment parser itself ([`parser`]).

pub mod color;
pub mod parser;
pub mod style;

// Re-exports for convenience
pub use color::{indexed_color, ColorParseError, Rgb, CONSOLE_PALETTE, INDEXED_PALETTE};
pub use parser::{strip, EmptySequenceMode, StyleParser, StyledSegment};
pub use style::TextStyle;
