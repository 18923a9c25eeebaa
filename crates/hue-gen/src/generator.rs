// SPDX-License-Identifier: MIT
//
//! Evenly spaced hue generation — the palette engine.
//!
//! `n` colors get hues `0, 360/n, 2·360/n, …` degrees. Uniform spacing is
//! what maximizes the smallest angular distance between any two colors, so
//! this is the most distinct set of `n` hues the wheel can offer. Saturation
//! and value stay pinned at 100%.

use crate::hsv::hsv_to_rgb8;
use crate::rgb::Rgb;

/// Saturation used for every generated color.
pub const SATURATION: f64 = 1.0;

/// Value (brightness) used for every generated color.
pub const VALUE: f64 = 1.0;

/// An index on the wheel and the hue angle it was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueAssignment {
    /// 0-based position in the generated sequence.
    pub index: usize,
    /// Hue angle in degrees, in [0, 360).
    pub degrees: f64,
}

impl HueAssignment {
    /// The hue as a fraction of a full turn (the HSV `h` component).
    #[inline]
    #[must_use]
    pub fn turn_fraction(self) -> f64 {
        self.degrees / 360.0
    }

    /// Resolve this hue to a fully saturated, full-value color.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb8(self.turn_fraction(), SATURATION, VALUE)
    }
}

/// One generated color together with the hue that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub hue: HueAssignment,
    pub rgb: Rgb,
}

impl Swatch {
    /// 0-based position in the palette.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.hue.index
    }

    /// 1-based label number, as shown to users.
    #[inline]
    #[must_use]
    pub const fn number(&self) -> usize {
        self.hue.index + 1
    }

    /// Hue angle in degrees.
    #[inline]
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.hue.degrees
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

/// Angular distance between consecutive hues: `360 / n`.
///
/// Zero for `n <= 1`, where there is no second color to step to.
#[must_use]
pub fn hue_step(n: usize) -> f64 {
    if n <= 1 { 0.0 } else { 360.0 / n as f64 }
}

/// The hue assignments for `n` colors, in order.
///
/// Empty for `n == 0`; a single 0° hue for `n == 1`.
#[must_use]
pub fn hues(n: usize) -> Vec<HueAssignment> {
    let step = hue_step(n);
    (0..n)
        .map(|index| HueAssignment {
            index,
            degrees: index as f64 * step,
        })
        .collect()
}

/// Generate `n` swatches (hue + color) with equidistant hues.
#[must_use]
pub fn palette(n: usize) -> Vec<Swatch> {
    tracing::debug!(n, step = hue_step(n), "generating palette");
    hues(n)
        .into_iter()
        .map(|hue| Swatch {
            hue,
            rgb: hue.to_rgb(),
        })
        .collect()
}

/// Generate `n` visually distinct colors.
///
/// Deterministic and total: every `n` (including 0) yields exactly `n`
/// colors, the first always pure red.
///
/// ```
/// use hue_gen::{generate, Rgb};
///
/// assert!(generate(0).is_empty());
/// assert_eq!(generate(1), vec![Rgb::new(255, 0, 0)]);
/// assert_eq!(
///     generate(3),
///     vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)],
/// );
/// ```
#[must_use]
pub fn generate(n: usize) -> Vec<Rgb> {
    palette(n).into_iter().map(|s| s.rgb).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
