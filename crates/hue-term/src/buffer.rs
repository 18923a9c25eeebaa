// SPDX-License-Identifier: MIT
//
// FrameBuffer — the cell grid the viewer paints each frame.
//
// Flat `Vec<Cell>`, row-major, so one row is a contiguous slice. The diff
// renderer leans on that: an unchanged row is a single slice comparison.
//
// Paint operations take an optional clip `Rect`. The viewer uses it to keep
// the scrolled body from spilling over the input row and status line.
// Wide characters write a continuation cell in the next column; painting
// over either half of a wide character blanks the other half.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::cell::{Cell, Style};
use crate::color::CellColor;

// ─── Rect ────────────────────────────────────────────────────────────────────

/// A screen rectangle, used for clipping and filling.
///
/// ```
/// use hue_term::buffer::Rect;
///
/// let r = Rect::new(2, 1, 10, 3);
/// assert!(r.contains(2, 1));
/// assert!(r.contains(11, 3));
/// assert!(!r.contains(12, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column.
    #[inline]
    #[must_use]
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the bottom row.
    #[inline]
    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, px: u16, py: u16) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Overlap of two rectangles, `None` when they don't touch.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return None;
        }
        Some(Self::new(x, y, right - x, bottom - y))
    }
}

// ─── FrameBuffer ─────────────────────────────────────────────────────────────

/// A `width × height` grid of [`Cell`]s.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// A buffer of empty cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle at the origin.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    #[must_use]
    pub const fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells.get(self.index(x, y))
    }

    /// Row `y` as a slice.
    #[must_use]
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        self.cells.get(start..start + usize::from(self.width))
    }

    /// Row `y` as text, continuation cells skipped. Handy in tests.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .unwrap_or_default()
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Change dimensions. Content is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::EMPTY);
    }

    /// Overwrite this buffer with `other`'s cells, reusing the allocation.
    ///
    /// Sizes may differ; the buffer takes on `other`'s dimensions.
    pub fn copy_from(&mut self, other: &Self) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }

    /// Write one cell. Returns `false` when `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.break_wide_char_at(x, y);
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Blank out the other half of any wide character covering `(x, y)`.
    fn break_wide_char_at(&mut self, x: u16, y: u16) {
        let idx = self.index(x, y);
        if self.cells[idx].is_continuation() && x > 0 {
            let owner = self.index(x - 1, y);
            self.cells[owner].ch = ' ';
        }
        if x + 1 < self.width {
            let next = self.index(x + 1, y);
            if self.cells[next].is_continuation() {
                self.cells[next].ch = ' ';
            }
        }
    }

    /// Fill `rect` with blank cells of background `bg`, within `clip`.
    pub fn fill_rect(&mut self, rect: Rect, bg: CellColor, clip: Option<Rect>) {
        let Some(mut area) = rect.intersect(self.bounds()) else {
            return;
        };
        if let Some(clip) = clip {
            let Some(clipped) = area.intersect(clip) else {
                return;
            };
            area = clipped;
        }

        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, Cell::blank(bg));
            }
        }
    }

    /// Paint `text` starting at `(x, y)` and return the columns consumed.
    ///
    /// Stops at the right edge of the buffer (or of `clip`). Zero-width
    /// characters are dropped; a wide character that would straddle the
    /// edge is replaced by a space.
    pub fn paint_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: Style,
        clip: Option<Rect>,
    ) -> u16 {
        let limit = clip.map_or(self.width, |c| c.right().min(self.width));
        if y >= self.height || clip.is_some_and(|c| y < c.y || y >= c.bottom()) {
            return 0;
        }
        let left = clip.map_or(0, |c| c.x);

        let mut col = x;
        for ch in text.chars() {
            if col >= limit {
                break;
            }
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if w == 2 && col + 1 >= limit {
                if col >= left {
                    self.set(col, y, Cell::styled(' ', style));
                }
                col += 1;
                break;
            }

            if col >= left {
                self.set(col, y, Cell::styled(ch, style));
                if w == 2 {
                    self.set(col + 1, y, Cell::continuation(style));
                }
            }
            // w is 1 or 2.
            #[allow(clippy::cast_possible_truncation)]
            let w = w as u16;
            col = col.saturating_add(w);
        }

        col.saturating_sub(x)
    }

    /// Paint `text` centered within `width` columns starting at `x`.
    ///
    /// Text wider than the span is truncated to fit.
    pub fn paint_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        style: Style,
        clip: Option<Rect>,
    ) -> u16 {
        let fitted = truncate_to_width(text, usize::from(width));
        // fitted is no wider than `width`, a u16.
        #[allow(clippy::cast_possible_truncation)]
        let text_w = string_width(fitted) as u16;
        let pad = (width - text_w) / 2;
        self.paint_text(x + pad, y, fitted, style, clip)
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrameBuffer({}x{})", self.width, self.height)
    }
}

// ─── Text Width ──────────────────────────────────────────────────────────────

/// Columns a character occupies: 0 for control characters, 2 for wide ones.
///
/// ```
/// use hue_term::buffer::char_width;
///
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('°'), 1);
/// assert_eq!(char_width('中'), 2);
/// ```
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Columns a string occupies.
#[inline]
#[must_use]
pub fn string_width(s: &str) -> usize {
    s.width()
}

/// The longest prefix of `s` that fits in `max` columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> &str {
    let mut used = 0;
    for (i, ch) in s.char_indices() {
        let w = char_width(ch);
        if used + w > max {
            return &s[..i];
        }
        used += w;
    }
    s
}

// ─── Tests ───────────────────────────────────────────────────────────────────
