// SPDX-License-Identifier: MIT
//
// Cell — one character position on screen.
//
// A cell is a character plus a `Style` (foreground, background, attributes).
// The frame buffer is a grid of these; the diff renderer compares grids
// cell by cell and emits escapes for the ones that changed.
//
// Wide characters take two columns. The first cell holds the character and
// the second is a continuation cell (`'\0'`) carrying the same style, so the
// background still fills both columns.

use crate::color::CellColor;

// ─── Attributes ──────────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// SGR text attributes.
    ///
    /// ```
    /// use hue_term::cell::Attr;
    ///
    /// let heading = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(heading.contains(Attr::BOLD));
    /// assert!(!heading.contains(Attr::INVERSE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1.
        const BOLD      = 1 << 0;
        /// SGR 2.
        const DIM       = 1 << 1;
        /// SGR 3.
        const ITALIC    = 1 << 2;
        /// SGR 4.
        const UNDERLINE = 1 << 3;
        /// SGR 7 — swap foreground and background.
        const INVERSE   = 1 << 4;
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Colors and attributes, everything about a cell except its character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: CellColor,
    pub bg: CellColor,
    pub attrs: Attr,
}

impl Style {
    /// Terminal defaults, no attributes.
    pub const PLAIN: Self = Self {
        fg: CellColor::Default,
        bg: CellColor::Default,
        attrs: Attr::empty(),
    };

    #[inline]
    #[must_use]
    pub const fn new(fg: CellColor, bg: CellColor, attrs: Attr) -> Self {
        Self { fg, bg, attrs }
    }

    /// Default colors with the given attributes.
    #[inline]
    #[must_use]
    pub const fn attrs(attrs: Attr) -> Self {
        Self {
            attrs,
            ..Self::PLAIN
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_fg(self, fg: CellColor) -> Self {
        Self { fg, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_bg(self, bg: CellColor) -> Self {
        Self { bg, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self { attrs, ..self }
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// Marker character for the second column of a wide character.
const CONTINUATION: char = '\0';

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character to display; `'\0'` for a wide-character continuation.
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// A blank cell in terminal defaults.
    pub const EMPTY: Self = Self {
        ch: ' ',
        style: Style::PLAIN,
    };

    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::PLAIN,
        }
    }

    #[inline]
    #[must_use]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A blank cell painted with `bg`.
    #[inline]
    #[must_use]
    pub const fn blank(bg: CellColor) -> Self {
        Self {
            ch: ' ',
            style: Style::PLAIN.with_bg(bg),
        }
    }

    /// Second column of a wide character.
    #[inline]
    #[must_use]
    pub const fn continuation(style: Style) -> Self {
        Self {
            ch: CONTINUATION,
            style,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_continuation(self) -> bool {
        self.ch == CONTINUATION
    }

    /// Blank with default style.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    #[inline]
    #[must_use]
    pub const fn fg(self) -> CellColor {
        self.style.fg
    }

    #[inline]
    #[must_use]
    pub const fn bg(self) -> CellColor {
        self.style.bg
    }

    #[inline]
    #[must_use]
    pub const fn attrs(self) -> Attr {
        self.style.attrs
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
