//! Tests for the hover color entry point.

use tinge::{hover_rgb_color, random_color, ColorParseError, Rgba};

// ============================================================================
// Hex Input
// ============================================================================

#[test]
fn hover_hex_with_opacity() {
    let out = hover_rgb_color(Some("#ff0033"), Some(0.5)).unwrap();
    assert_eq!(out, "rgba(255, 0, 51, 0.5)");
}

#[test]
fn hover_hex_default_opacity() {
    let out = hover_rgb_color(Some("#ff0033"), None).unwrap();
    assert_eq!(out, "rgba(255, 0, 51, 0.65)");
}

#[test]
fn hover_hex_short_form() {
    let out = hover_rgb_color(Some("#f03"), Some(0.5)).unwrap();
    assert_eq!(out, "rgba(255, 0, 51, 0.5)");
}

// ============================================================================
// HSL Input
// ============================================================================

#[test]
fn hover_hsl() {
    let out = hover_rgb_color(Some("hsl(240, 0%, 0.5)"), None).unwrap();
    assert_eq!(out, "rgba(128, 128, 128, 0.65)");
}

#[test]
fn hover_hsla_alpha_is_replaced_by_opacity() {
    let out = hover_rgb_color(Some("hsla(240, 0%, 0.5, 0.9)"), Some(0.2)).unwrap();
    assert_eq!(out, "rgba(128, 128, 128, 0.2)");
}

// ============================================================================
// RGB Input
// ============================================================================

#[test]
fn hover_rgb_passthrough() {
    let out = hover_rgb_color(Some("rgb(10,20,30)"), Some(0.3)).unwrap();
    assert_eq!(out, "rgba(10, 20, 30, 0.3)");
}

#[test]
fn hover_rgba_input_alpha_is_replaced() {
    let out = hover_rgb_color(Some("rgba(10,20,30,0.9)"), Some(0.3)).unwrap();
    assert_eq!(out, "rgba(10, 20, 30, 0.3)");
}

#[test]
fn hover_rgb_round_trip() {
    // Feeding an output string back through the passthrough parser must
    // reproduce the same components.
    let out = hover_rgb_color(Some("rgb(10,20,30)"), Some(0.3)).unwrap();
    let back = Rgba::from_rgb(&out);
    assert_eq!(back.r.to_number(), 10.0);
    assert_eq!(back.g.to_number(), 20.0);
    assert_eq!(back.b.to_number(), 30.0);
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn hover_fallback_is_unformatted() {
    // A missing color returns the bare fallback literal, not an rgba()
    // string at the requested opacity.
    assert_eq!(hover_rgb_color(None, None).unwrap(), "rgb(211,0,57)");
    assert_eq!(hover_rgb_color(None, Some(0.5)).unwrap(), "rgb(211,0,57)");
    assert_eq!(hover_rgb_color(Some(""), None).unwrap(), "rgb(211,0,57)");
}

#[test]
fn random_color_parity() {
    assert_eq!(random_color(1), "rgb(224,74,116)");
    assert_eq!(random_color(2), "rgb(211,0,57)");
    assert_eq!(random_color(0), "rgb(211,0,57)");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn hover_unrecognized_format() {
    for input in ["blue", "#ff00", "#gg0033", "hwb(0 0% 0%)", "10,20,30"] {
        let result = hover_rgb_color(Some(input), None);
        assert!(
            matches!(result, Err(ColorParseError::UnrecognizedFormat(_))),
            "expected error for: {}",
            input
        );
    }
}

#[test]
fn hover_error_names_the_input() {
    let err = hover_rgb_color(Some("blue"), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid color format: blue");
}
