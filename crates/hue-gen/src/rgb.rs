// SPDX-License-Identifier: MIT
//
//! 8-bit RGB triples and their `#RRGGBB` spelling.

use std::fmt;

/// An immutable sRGB color with 8 bits per channel.
///
/// Channels are `u8`, so the [0, 255] range is guaranteed by the type.
/// Values are produced by [`crate::hsv::hsv_to_rgb8`] and never mutated.
///
/// ```
/// use hue_gen::Rgb;
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(red.to_hex(), "#FF0000");
/// assert_eq!(red.to_string(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as a tuple.
    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Uppercase `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` or `RRGGBB` (any letter case).
    ///
    /// Returns `None` for anything else: wrong length, non-hex digits,
    /// shorthand `#RGB` forms.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Format a color as uppercase `#RRGGBB`, each channel zero-padded.
///
/// Total: every `Rgb` has a hex spelling.
#[must_use]
pub fn to_hex(color: Rgb) -> String {
    color.to_hex()
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        color.to_tuple()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
