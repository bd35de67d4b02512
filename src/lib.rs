//! Color-format conversion helpers and hover tint derivation.
//!
//! This crate parses a color string in one of three formats and derives a
//! hover-state `rgba()` string from it at an adjustable opacity:
//!
//! - Hex: `#RGB` or `#RRGGBB`, case-insensitive
//! - HSL: `hsl(H, S%, L%)` or `hsla(H, S%, L%, A)`
//! - RGB: `rgb(R, G, B)` or `rgba(R, G, B, A)` (carried through verbatim)
//!
//! Every function is a pure, reentrant computation: no state, no I/O.
//!
//! # Usage
//!
//! ```
//! use tinge::{hover_rgb_color, random_color, ColorFormat, Rgba};
//!
//! // Derive a hover color at a given opacity
//! let hover = hover_rgb_color(Some("#ff0033"), Some(0.5)).unwrap();
//! assert_eq!(hover, "rgba(255, 0, 51, 0.5)");
//!
//! // A missing color falls back to a fixed literal
//! assert_eq!(hover_rgb_color(None, None).unwrap(), random_color(0));
//!
//! // Work with individual pieces
//! assert_eq!(ColorFormat::detect("rgb(10,20,30)"), ColorFormat::Rgb);
//! let parsed = Rgba::from_hex("#f03").unwrap();
//! assert_eq!(parsed.to_string(), "rgba(255, 0, 51, 1)");
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod hover;

// Re-export main types at crate root
pub use color::{Channel, Rgba};
pub use error::ColorParseError;
pub use format::ColorFormat;
pub use hover::{DEFAULT_HOVER_OPACITY, hover_rgb_color, random_color};
