// SPDX-License-Identifier: MIT
//
//! HSV → RGB conversion.
//!
//! The classic hexcone formula: the hue circle is cut into six sectors, and
//! within a sector one channel ramps while the other two sit at `v` and
//! `v·(1 - s)`. All math is `f64` so results are reproducible bit-for-bit.

use crate::rgb::Rgb;

/// Convert HSV to RGB, all components in [0, 1].
///
/// `h` is a fraction of a full turn (degrees / 360). Values outside [0, 1)
/// wrap through the `i mod 6` sector selection.
// Unfused arithmetic: sector boundaries must round exactly like the textbook formula.
#[allow(clippy::suboptimal_flops)]
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    // rem_euclid keeps negative sectors in 0..6.
    #[allow(clippy::cast_possible_truncation)]
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scale a [0, 1] channel to [0, 255], rounding half up.
///
/// Out-of-range inputs clamp, so the result always fits a `u8`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
#[must_use]
pub fn channel_to_u8(c: f64) -> u8 {
    (c * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Convert an HSV color to an 8-bit [`Rgb`].
#[must_use]
pub fn hsv_to_rgb8(h: f64, s: f64, v: f64) -> Rgb {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    Rgb::new(channel_to_u8(r), channel_to_u8(g), channel_to_u8(b))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
