// SPDX-License-Identifier: MIT
//
//! Human-readable text for a generated palette.
//!
//! Three pieces, shared by the interactive viewer and print mode:
//!
//! - [`process_lines`]: a step-by-step walkthrough of how the palette was
//!   derived (parameters, hue angles, RGB results)
//! - [`heading`]: the caption above the swatch grid
//! - [`detail_rows`]: one table row per color
//!
//! Everything is plain `String`s; callers decide on styling.

use crate::generator::{Swatch, hue_step};

/// Column headers for [`detail_rows`], in order.
pub const DETAIL_HEADERS: [&str; 4] = ["#", "RGB", "Hex", "Hue (°)"];

/// One row of the color details table, pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// 1-based color number.
    pub number: usize,
    /// `(r, g, b)`.
    pub rgb: String,
    /// `#RRGGBB`.
    pub hex: String,
    /// Hue in degrees, two decimals.
    pub hue: String,
}

impl DetailRow {
    /// The cells in [`DETAIL_HEADERS`] order.
    #[must_use]
    pub fn cells(&self) -> [String; 4] {
        [
            self.number.to_string(),
            self.rgb.clone(),
            self.hex.clone(),
            self.hue.clone(),
        ]
    }
}

/// Caption for the swatch grid.
#[must_use]
pub fn heading(n: usize) -> String {
    format!("Generated {n} Colors:")
}

/// The derivation walkthrough, one entry per line (blank entries separate
/// sections).
///
/// A single color has no step, so its parameter block names the one hue
/// and the per-hue listing is left out.
#[must_use]
pub fn process_lines(palette: &[Swatch]) -> Vec<String> {
    let n = palette.len();
    let mut lines = vec![
        format!("Input: n = {n}"),
        String::new(),
        "HSV Parameters:".to_owned(),
    ];

    if n == 1 {
        lines.push("  - Hue: 0° (single color)".to_owned());
        push_fixed_components(&mut lines);
    } else {
        lines.push("  - Hue range: 0° to 360°".to_owned());
        push_fixed_components(&mut lines);
        lines.push(format!("  - Hue step: 360° / {n} = {:.2}°", hue_step(n)));
        lines.push(String::new());
        lines.push("Equidistant Hue Values:".to_owned());
        lines.extend(
            palette
                .iter()
                .map(|s| format!("  Color {}: Hue = {:.2}°", s.number(), s.degrees())),
        );
    }

    lines.push(String::new());
    lines.push("RGB Conversion:".to_owned());
    lines.extend(palette.iter().map(|s| {
        let (r, g, b) = s.rgb.to_tuple();
        format!("  Color {}: RGB({r}, {g}, {b}) = {}", s.number(), s.rgb)
    }));

    lines
}

fn push_fixed_components(lines: &mut Vec<String>) {
    lines.push("  - Saturation: 100% (fixed)".to_owned());
    lines.push("  - Value: 100% (fixed)".to_owned());
}

/// One [`DetailRow`] per swatch, in palette order.
#[must_use]
pub fn detail_rows(palette: &[Swatch]) -> Vec<DetailRow> {
    palette
        .iter()
        .map(|s| {
            let (r, g, b) = s.rgb.to_tuple();
            DetailRow {
                number: s.number(),
                rgb: format!("({r}, {g}, {b})"),
                hex: s.hex(),
                hue: format!("{:.2}", s.degrees()),
            }
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
