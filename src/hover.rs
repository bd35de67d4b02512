//! Hover color derivation.
//!
//! [`hover_rgb_color`] is the public entry point: it detects the input
//! format, dispatches to the matching parser, and formats the result as an
//! `rgba()` string at the requested opacity.

use crate::color::Rgba;
use crate::error::ColorParseError;
use crate::format::ColorFormat;

/// Opacity applied when the caller passes none (or a falsy zero/NaN value).
pub const DEFAULT_HOVER_OPACITY: f64 = 0.65;

const FALLBACK_ODD: &str = "rgb(224,74,116)";
const FALLBACK_EVEN: &str = "rgb(211,0,57)";

/// One of two fixed fallback colors, selected by index parity.
///
/// # Examples
///
/// ```
/// use tinge::random_color;
///
/// assert_eq!(random_color(1), "rgb(224,74,116)");
/// assert_eq!(random_color(2), "rgb(211,0,57)");
/// ```
pub fn random_color(i: i64) -> &'static str {
    if i % 2 != 0 { FALLBACK_ODD } else { FALLBACK_EVEN }
}

/// Derive a hover-state color string from a hex, HSL, or rgb(a) input.
///
/// The result is always an `rgba(R, G, B, A)` string where `A` is the given
/// opacity, falling back to [`DEFAULT_HOVER_OPACITY`] when absent. Channel
/// formatting follows the parser that produced them: integers for hex,
/// rounded values for HSL, verbatim substrings for rgb(a) input.
///
/// A missing color yields the fallback's bare `rgb(...)` literal, bypassing
/// the opacity formatting. An input matching no supported format is an
/// error.
///
/// # Examples
///
/// ```
/// use tinge::hover_rgb_color;
///
/// let hover = hover_rgb_color(Some("#ff0033"), Some(0.5)).unwrap();
/// assert_eq!(hover, "rgba(255, 0, 51, 0.5)");
///
/// let default = hover_rgb_color(Some("#ff0033"), None).unwrap();
/// assert_eq!(default, "rgba(255, 0, 51, 0.65)");
///
/// assert!(hover_rgb_color(Some("cornflowerblue"), None).is_err());
/// ```
pub fn hover_rgb_color(
    color: Option<&str>,
    opacity: Option<f64>,
) -> Result<String, ColorParseError> {
    let color = match color {
        Some(c) if !c.is_empty() => c,
        _ => return Ok(random_color(0).to_string()),
    };

    let rgba = match ColorFormat::detect(color) {
        ColorFormat::Hex => match Rgba::from_hex(color) {
            Some(rgba) => rgba,
            None => return Err(ColorParseError::UnrecognizedFormat(color.to_string())),
        },
        ColorFormat::Hsl => Rgba::from_hsl(color),
        ColorFormat::Rgb => Rgba::from_rgb(color),
        ColorFormat::Unrecognized => {
            return Err(ColorParseError::UnrecognizedFormat(color.to_string()));
        }
    };

    // The parsed alpha is discarded; the output carries the requested
    // opacity, with zero and NaN treated as absent.
    let alpha = match opacity {
        Some(o) if o != 0.0 && !o.is_nan() => o,
        _ => DEFAULT_HOVER_OPACITY,
    };

    Ok(format!("rgba({}, {}, {}, {})", rgba.r, rgba.g, rgba.b, alpha))
}
