// SPDX-License-Identifier: MIT
//
// Cell colors and color-depth downgrading.
//
// A cell holds one of three color forms: 24-bit RGB, an xterm-256 palette
// index, or the terminal's own default. The viewer paints generated swatches
// as RGB; when the terminal can't show truecolor, the output stage maps each
// RGB to its nearest palette entry, or drops color entirely for `Mono`.
//
// Nearest-match searches only the 6×6×6 cube and the gray ramp (16–255).
// Indices 0–15 are left out because terminal themes routinely redefine them.

use std::fmt;

// ─── CellColor ───────────────────────────────────────────────────────────────

/// Color stored in a [`Cell`](crate::cell::Cell).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),

    /// xterm-256 palette index.
    Ansi256(u8),

    /// Whatever the terminal theme uses.
    #[default]
    Default,
}

impl CellColor {
    /// The color as RGB, resolving palette indices through the xterm table.
    /// `None` for [`CellColor::Default`].
    #[must_use]
    pub const fn to_rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Rgb(r, g, b) => Some((r, g, b)),
            Self::Ansi256(idx) => Some(palette::ansi256_to_rgb(idx)),
            Self::Default => None,
        }
    }

    /// Nearest xterm-256 entry. Palette and default colors pass through.
    #[must_use]
    pub fn to_ansi256(self) -> Self {
        match self {
            Self::Rgb(r, g, b) => Self::Ansi256(palette::nearest_ansi256(r, g, b)),
            other => other,
        }
    }

    /// This color as the given depth can display it.
    #[must_use]
    pub fn for_depth(self, depth: ColorDepth) -> Self {
        match depth {
            ColorDepth::TrueColor => self,
            ColorDepth::Ansi256 => self.to_ansi256(),
            ColorDepth::Mono => Self::Default,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Ansi256(idx) => write!(f, "ansi({idx})"),
            Self::Default => f.write_str("default"),
        }
    }
}

impl From<(u8, u8, u8)> for CellColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(r, g, b)
    }
}

// ─── ColorDepth ──────────────────────────────────────────────────────────────

/// How many colors the output terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ColorDepth {
    /// 24-bit RGB, emitted as-is.
    #[default]
    TrueColor,
    /// RGB is mapped to the nearest xterm-256 index.
    Ansi256,
    /// No color escapes at all; every color becomes the terminal default.
    Mono,
}

impl ColorDepth {
    /// Whether any color escapes are emitted.
    #[inline]
    #[must_use]
    pub const fn has_color(self) -> bool {
        !matches!(self, Self::Mono)
    }
}

// ─── xterm-256 Palette ───────────────────────────────────────────────────────

pub mod palette {
    //! The xterm-256 palette and RGB nearest-match.
    //!
    //! - 0–15: the sixteen system colors (xterm defaults)
    //! - 16–231: a 6×6×6 cube with levels 0, 95, 135, 175, 215, 255
    //! - 232–255: a 24-step gray ramp from 8 to 238

    /// xterm's default system colors.
    pub const SYSTEM_RGB: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (128, 0, 0),
        (0, 128, 0),
        (128, 128, 0),
        (0, 0, 128),
        (128, 0, 128),
        (0, 128, 128),
        (192, 192, 192),
        (128, 128, 128),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];

    /// Channel value of cube level `0..6`.
    #[inline]
    #[must_use]
    pub const fn cube_level(i: u8) -> u8 {
        if i == 0 { 0 } else { 55 + 40 * i }
    }

    /// RGB of a palette index.
    #[must_use]
    pub const fn ansi256_to_rgb(idx: u8) -> (u8, u8, u8) {
        match idx {
            0..=15 => SYSTEM_RGB[idx as usize],
            16..=231 => {
                let i = idx - 16;
                (cube_level(i / 36), cube_level((i % 36) / 6), cube_level(i % 6))
            }
            232..=255 => {
                let v = 8 + 10 * (idx - 232);
                (v, v, v)
            }
        }
    }

    /// Index 16–255 closest to `(r, g, b)`.
    ///
    /// Distance is the squared channel difference weighted 2:4:3 (R:G:B).
    /// Ties keep the lower index.
    #[must_use]
    pub fn nearest_ansi256(r: u8, g: u8, b: u8) -> u8 {
        let mut best_idx = 16;
        let mut best_dist = u32::MAX;

        for idx in 16u8..=255 {
            let (pr, pg, pb) = ansi256_to_rgb(idx);
            let dist = weighted_distance((r, g, b), (pr, pg, pb));
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
                if dist == 0 {
                    break;
                }
            }
        }

        best_idx
    }

    fn weighted_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
        let d = |x: u8, y: u8| u32::from(x.abs_diff(y)).pow(2);
        2 * d(a.0, b.0) + 4 * d(a.1, b.1) + 3 * d(a.2, b.2)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
