//! VoxelDash Console - ANSI output styling for the VoxelDash server panel
//!
//! This library turns raw Minecraft-server console output into styled text
//! segments for the VoxelDash panel's console view. Server processes emit
//! ANSI SGR escape sequences (`ESC[...m`) for colors and text decoration;
//! the panel needs those sequences resolved into per-run style snapshots it
//! can map onto its own presentation layer.
//!
//! ## Features
//!
//! - **Segment Output:** One styled segment per run of text sharing a style
//! - **Full Color Support:** 8-color palette, 256-color indexed, 24-bit RGB
//! - **Lenient Parsing:** Unknown or malformed codes are ignored, never fatal
//! - **Stripping:** Remove escape sequences entirely for plain-text views
//! - **Line Model:** Timestamped console lines with serde round-trips
//!
//! ## Module Organization
//!
//! - [`ansi`] - SGR parsing, style state, color tables
//! - [`models`] - Console line data structures
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```
//! use voxeldash_console::{strip, StyleParser};
//!
//! let parser = StyleParser::new();
//! let segments = parser.parse("\x1b[32mServer started\x1b[0m in 3.2s");
//!
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].text, "Server started");
//! assert!(segments[0].style.foreground.is_some());
//! assert_eq!(strip("\x1b[32mServer started\x1b[0m in 3.2s"), "Server started in 3.2s");
//! ```
//!
//! ## Concurrency
//!
//! Parsing is pure and synchronous. [`StyleParser::parse`] takes `&self` and
//! keeps all state local to the call, so one parser can serve concurrent
//! render or message-handler threads without locking.

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod error;
pub mod models;

// Re-exports for core functionality
pub use ansi::{
    indexed_color, strip, EmptySequenceMode, Rgb, StyleParser, StyledSegment, TextStyle,
};
pub use error::{Error, Result};
pub use models::ConsoleLine;

// Version information
/// The current version of the crate from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
