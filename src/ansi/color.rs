//! Color values and palettes for console output
//!
//! All palettes are compile-time constants. The 8-entry console palette
//! carries the colors the panel uses for the basic SGR codes; the 16-entry
//! indexed palette plus the color cube and grayscale ramp cover the
//! 256-color space.

use serde::{Deserialize, Serialize};

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hex string (e.g. "#ff5555" or "ff5555")
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::InvalidHexColor(hex.to_string()));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;

        Ok(Self { r, g, b })
    }

    /// Convert to a hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Color parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    #[error("Parse int error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

/// Console colors for the 8 basic SGR codes (30-37, 40-47).
///
/// The panel renders the "bright" codes (90-97, 100-107) with these same
/// values; the console theme never distinguished the two ranges.
pub const CONSOLE_PALETTE: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00), // Black
    Rgb::new(0xff, 0x55, 0x55), // Red
    Rgb::new(0x55, 0xff, 0x55), // Green
    Rgb::new(0xff, 0xff, 0x55), // Yellow
    Rgb::new(0x55, 0x55, 0xff), // Blue
    Rgb::new(0xff, 0x55, 0xff), // Magenta
    Rgb::new(0x55, 0xff, 0xff), // Cyan
    Rgb::new(0xff, 0xff, 0xff), // White
];

/// First 16 entries of the 256-color palette (VGA-style)
pub const INDEXED_PALETTE: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // Black
    Rgb::new(0xaa, 0x00, 0x00), // Red
    Rgb::new(0x00, 0xaa, 0x00), // Green
    Rgb::new(0xaa, 0x55, 0x00), // Brown
    Rgb::new(0x00, 0x00, 0xaa), // Blue
    Rgb::new(0xaa, 0x00, 0xaa), // Magenta
    Rgb::new(0x00, 0xaa, 0xaa), // Cyan
    Rgb::new(0xaa, 0xaa, 0xaa), // Light gray
    Rgb::new(0x55, 0x55, 0x55), // Dark gray
    Rgb::new(0xff, 0x55, 0x55), // Bright red
    Rgb::new(0x55, 0xff, 0x55), // Bright green
    Rgb::new(0xff, 0xff, 0x55), // Bright yellow
    Rgb::new(0x55, 0x55, 0xff), // Bright blue
    Rgb::new(0xff, 0x55, 0xff), // Bright magenta
    Rgb::new(0x55, 0xff, 0xff), // Bright cyan
    Rgb::new(0xff, 0xff, 0xff), // Bright white
];

/// Resolve an index in the 256-color palette to an RGB value
///
/// Indices 0-15 use the fixed table, 16-231 the 6x6x6 color cube, and
/// 232-255 a 24-step grayscale ramp.
pub fn indexed_color(index: u8) -> Rgb {
    match index {
        0..=15 => INDEXED_PALETTE[index as usize],
        16..=231 => {
            let i = index - 16;
            let r = i / 36;
            let g = (i % 36) / 6;
            let b = i % 6;
            Rgb::new(cube_channel(r), cube_channel(g), cube_channel(b))
        }
        232..=255 => {
            let gray = (index - 232) * 10 + 8;
            Rgb::new(gray, gray, gray)
        }
    }
}

/// Map a 0-5 cube coordinate to its 8-bit channel value
fn cube_channel(value: u8) -> u8 {
    if value == 0 {
        0
    } else {
        55 + value * 40
    }
}
