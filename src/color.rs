//! The `Rgba` value type and the per-format parsers.
//!
//! Each parser builds a fresh [`Rgba`] from one input format. The hex and
//! HSL parsers produce numeric channels; the `rgb()`/`rgba()` parser carries
//! the component substrings through verbatim.

use std::fmt;

/// A single channel value.
///
/// Channels keep the representation of the path that produced them: hex
/// parsing yields integral numbers, HSL yields rounded numbers, and
/// `rgb()`/`rgba()` input is carried through as the original substring.
#[derive(Clone, Debug, PartialEq)]
pub enum Channel {
    /// A numeric channel. Malformed hex digits and unparseable HSL fields
    /// surface here as NaN, propagated rather than rejected.
    Number(f64),
    /// A verbatim, un-trimmed substring from an `rgb()`/`rgba()` literal.
    Raw(String),
}

impl Channel {
    /// Numeric view of the channel.
    ///
    /// Raw substrings are trimmed and parsed; anything non-numeric is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Channel::Number(n) => *n,
            Channel::Raw(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Number(n) => write!(f, "{}", n),
            Channel::Raw(s) => f.write_str(s),
        }
    }
}

/// An RGBA color as produced by the format parsers.
///
/// `r`/`g`/`b` are expected in `[0, 255]` and `a` in `[0, 1]`; neither range
/// is enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: Channel,
    /// Green channel.
    pub g: Channel,
    /// Blue channel.
    pub b: Channel,
    /// Opacity fraction.
    pub a: Channel,
}

impl Rgba {
    /// Parse a `#RGB` or `#RRGGBB` hex color.
    ///
    /// A 3-digit body is expanded by duplicating each digit (`#f03` becomes
    /// `#ff0033`) before the three 2-digit groups are decoded. Returns
    /// `None` for empty input.
    ///
    /// Digits are not validated here; a malformed group decodes to a NaN
    /// channel. Callers that need strict validation should check the format
    /// first (see [`crate::ColorFormat::detect`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use tinge::{Channel, Rgba};
    ///
    /// let c = Rgba::from_hex("#ff0033").unwrap();
    /// assert_eq!(c.r, Channel::Number(255.0));
    /// assert_eq!(c.g, Channel::Number(0.0));
    /// assert_eq!(c.b, Channel::Number(51.0));
    /// assert_eq!(c.a, Channel::Number(1.0));
    /// ```
    pub fn from_hex(input: &str) -> Option<Rgba> {
        if input.is_empty() {
            return None;
        }

        let mut hex = input.to_lowercase();
        if hex.chars().count() == 4 {
            let mut expanded = String::with_capacity(7);
            expanded.push('#');
            for c in hex.chars().skip(1) {
                expanded.push(c);
                expanded.push(c);
            }
            hex = expanded;
        }

        let group = |range: std::ops::Range<usize>| -> Channel {
            let parsed = hex
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok());
            match parsed {
                Some(v) => Channel::Number(v as f64),
                None => Channel::Number(f64::NAN),
            }
        };

        Some(Rgba {
            r: group(1..3),
            g: group(3..5),
            b: group(5..7),
            a: Channel::Number(1.0),
        })
    }

    /// Parse an `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)` color.
    ///
    /// Fields are taken as written: hue is not divided by 360, and the
    /// saturation/lightness percentages only have their trailing `%`
    /// stripped, without division by 100. Ordinary CSS input therefore
    /// drives the conversion with out-of-range magnitudes; only a literal
    /// `0`/`0%` saturation reaches the achromatic branch.
    pub fn from_hsl(input: &str) -> Rgba {
        let start = if input.starts_with("hsla") { 5 } else { 4 };
        let interior = input
            .get(start..input.len().saturating_sub(1))
            .unwrap_or("");
        let fields: Vec<&str> = interior.split(',').collect();

        let h = number_field(fields.first());
        let s = percent_field(fields.get(1));
        let l = percent_field(fields.get(2));
        let a = match fields.get(3) {
            Some(raw) if !raw.is_empty() => Channel::Raw((*raw).to_string()),
            _ => Channel::Number(1.0),
        };

        let (r, g, b) = if s == 0.0 {
            // achromatic
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba {
            r: Channel::Number((r * 255.0).round()),
            g: Channel::Number((g * 255.0).round()),
            b: Channel::Number((b * 255.0).round()),
            a,
        }
    }

    /// Parse an `rgb(r, g, b)` or `rgba(r, g, b, a)` color.
    ///
    /// This is a passthrough, not a conversion: the component substrings are
    /// kept verbatim, un-trimmed and un-parsed. A missing alpha field
    /// defaults to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinge::Rgba;
    ///
    /// let c = Rgba::from_rgb("rgb(10,20,30)");
    /// assert_eq!(c.to_string(), "rgba(10, 20, 30, 1)");
    /// ```
    pub fn from_rgb(input: &str) -> Rgba {
        let start = if input.starts_with("rgba") { 5 } else { 4 };
        let interior = input
            .get(start..input.len().saturating_sub(1))
            .unwrap_or("");
        let fields: Vec<&str> = interior.split(',').collect();

        let raw = |i: usize| -> Channel {
            Channel::Raw(fields.get(i).copied().unwrap_or_default().to_string())
        };

        Rgba {
            r: raw(0),
            g: raw(1),
            b: raw(2),
            a: match fields.get(3) {
                Some(field) if !field.is_empty() => Channel::Raw((*field).to_string()),
                _ => Channel::Number(1.0),
            },
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A numeric HSL field, NaN when unparseable.
fn number_field(field: Option<&&str>) -> f64 {
    field
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(f64::NAN)
}

/// A saturation/lightness field with its trailing `%` stripped.
fn percent_field(field: Option<&&str>) -> f64 {
    let Some(field) = field else {
        return f64::NAN;
    };
    let trimmed = field.trim();
    let body = trimmed.strip_suffix('%').unwrap_or(trimmed);
    body.parse().unwrap_or(f64::NAN)
}

/// One channel of the standard HSL to RGB conversion.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
