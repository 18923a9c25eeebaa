// SPDX-License-Identifier: MIT
//
//! Label legibility on top of a swatch.
//!
//! Swatch labels (`#3`, `#00FF00`) are drawn inside the colored block, so
//! the label color has to be chosen per swatch. Pure blue needs light text,
//! pure yellow needs dark text. The choice uses WCAG 2.1 relative luminance
//! in linear sRGB, not the raw channel sum.

use crate::rgb::Rgb;

/// Text color for a label drawn over a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ink {
    Dark,
    Light,
}

impl Ink {
    /// The concrete label color.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Dark => Rgb::BLACK,
            Self::Light => Rgb::WHITE,
        }
    }
}

/// sRGB transfer function inverse, for one 8-bit channel.
#[must_use]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in [0.0, 1.0].
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(color.r);
    let g = srgb_to_linear(color.g);
    let b = srgb_to_linear(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG 2.1 contrast ratio, in [1.0, 21.0]. Argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick whichever ink contrasts more with `background`.
///
/// Ties go to [`Ink::Dark`].
#[must_use]
pub fn label_ink(background: Rgb) -> Ink {
    let dark = contrast_ratio(background, Ink::Dark.rgb());
    let light = contrast_ratio(background, Ink::Light.rgb());
    if dark >= light { Ink::Dark } else { Ink::Light }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-12));
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_primaries_use_wcag_weights() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn linearization_is_nonlinear() {
        // Mid gray (128) is far darker than 50% in linear light.
        let l = srgb_to_linear(128);
        assert!(l > 0.2 && l < 0.23, "{l}");
    }

    // ── Contrast ratio ──────────────────────────────────────────

    #[test]
    fn black_on_white_is_21() {
        assert!(approx_eq(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0, 1e-6));
    }

    #[test]
    fn contrast_is_symmetric_and_at_least_one() {
        let a = Rgb::new(255, 191, 0);
        let b = Rgb::new(0, 64, 255);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
        assert!(approx_eq(contrast_ratio(a, a), 1.0, 1e-12));
    }

    // ── Ink selection ───────────────────────────────────────────

    #[test]
    fn bright_hues_get_dark_ink() {
        for hex in ["#FF0000", "#FFFF00", "#00FF00", "#00FFFF", "#FF00FF"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(label_ink(rgb), Ink::Dark, "{hex}");
        }
    }

    #[test]
    fn deep_hues_get_light_ink() {
        for hex in ["#0000FF", "#8000FF", "#0040FF"] {
            let rgb = Rgb::from_hex(hex).unwrap();
            assert_eq!(label_ink(rgb), Ink::Light, "{hex}");
        }
    }

    #[test]
    fn grays() {
        assert_eq!(label_ink(Rgb::BLACK), Ink::Light);
        assert_eq!(label_ink(Rgb::WHITE), Ink::Dark);
    }

    #[test]
    fn ink_colors() {
        assert_eq!(Ink::Dark.rgb(), Rgb::BLACK);
        assert_eq!(Ink::Light.rgb(), Rgb::WHITE);
    }
}
