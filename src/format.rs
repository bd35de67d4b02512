//! Color string format detection.

/// The format of a color string, determined once before parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `hsl(...)` or `hsla(...)`.
    Hsl,
    /// `rgb(...)` or `rgba(...)`.
    Rgb,
    /// None of the supported formats.
    Unrecognized,
}

impl ColorFormat {
    /// Detect the format of a color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinge::ColorFormat;
    ///
    /// assert_eq!(ColorFormat::detect("#ff0033"), ColorFormat::Hex);
    /// assert_eq!(ColorFormat::detect("hsl(0, 100%, 50%)"), ColorFormat::Hsl);
    /// assert_eq!(ColorFormat::detect("rgba(10, 20, 30, 0.5)"), ColorFormat::Rgb);
    /// assert_eq!(ColorFormat::detect("blue"), ColorFormat::Unrecognized);
    /// ```
    pub fn detect(input: &str) -> Self {
        if is_hex_color(input) {
            ColorFormat::Hex
        } else if input.starts_with("hsl") {
            ColorFormat::Hsl
        } else if input.starts_with("rgb") {
            ColorFormat::Rgb
        } else {
            ColorFormat::Unrecognized
        }
    }
}

/// Check for a `#RGB` or `#RRGGBB` string, case-insensitive.
fn is_hex_color(input: &str) -> bool {
    let Some(body) = input.strip_prefix('#') else {
        return false;
    };
    matches!(body.len(), 3 | 6) && body.bytes().all(|b| b.is_ascii_hexdigit())
}
