// SPDX-License-Identifier: MIT
//
//! Row-major grid geometry for swatches.

/// Swatches per row when the caller has no preference.
pub const DEFAULT_MAX_COLUMNS: usize = 8;

/// Rows × columns for `count` swatches, filled left to right, top to bottom.
///
/// ```
/// use hue_gen::layout::Grid;
///
/// let g = Grid::new(10, 8);
/// assert_eq!((g.rows(), g.cols()), (2, 8));
/// assert_eq!(g.position(9), (1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    count: usize,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Lay out `count` cells with at most `max_cols` per row.
    ///
    /// A `max_cols` of 0 is treated as 1. An empty grid has no rows and no
    /// columns.
    #[must_use]
    pub fn new(count: usize, max_cols: usize) -> Self {
        let cols = count.min(max_cols.max(1));
        let rows = if cols == 0 { 0 } else { count.div_ceil(cols) };
        Self { count, cols, rows }
    }

    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// `(row, col)` of cell `index`. Indices past `count` keep counting in
    /// the same pattern.
    #[must_use]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        if self.cols == 0 {
            return (0, 0);
        }
        (index / self.cols, index % self.cols)
    }

    /// Cell indices on `row`, clipped to `count`.
    #[must_use]
    pub fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        let start = (row * self.cols).min(self.count);
        let end = (start + self.cols).min(self.count);
        start..end
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_COLUMNS)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Shape ───────────────────────────────────────────────────

    #[test]
    fn fewer_than_max_is_one_row() {
        let g = Grid::new(5, 8);
        assert_eq!((g.rows(), g.cols()), (1, 5));
    }

    #[test]
    fn exact_multiple() {
        let g = Grid::new(16, 8);
        assert_eq!((g.rows(), g.cols()), (2, 8));
    }

    #[test]
    fn partial_last_row() {
        let g = Grid::new(100, 8);
        assert_eq!((g.rows(), g.cols()), (13, 8));
        assert_eq!(g.row_range(12), 96..100);
    }

    #[test]
    fn single_swatch() {
        let g = Grid::new(1, 8);
        assert_eq!((g.rows(), g.cols()), (1, 1));
    }

    #[test]
    fn empty_grid() {
        let g = Grid::new(0, 8);
        assert_eq!((g.rows(), g.cols()), (0, 0));
        assert_eq!(g, Grid::default());
    }

    #[test]
    fn zero_max_columns_means_one() {
        let g = Grid::new(3, 0);
        assert_eq!((g.rows(), g.cols()), (3, 1));
    }

    // ── Positions ───────────────────────────────────────────────

    #[test]
    fn row_major_positions() {
        let g = Grid::new(10, 4);
        assert_eq!(g.position(0), (0, 0));
        assert_eq!(g.position(3), (0, 3));
        assert_eq!(g.position(4), (1, 0));
        assert_eq!(g.position(9), (2, 1));
    }

    #[test]
    fn row_ranges_cover_every_cell_once() {
        let g = Grid::new(23, 6);
        let all: Vec<usize> = (0..g.rows()).flat_map(|r| g.row_range(r)).collect();
        assert_eq!(all, (0..23).collect::<Vec<_>>());
        assert!(g.row_range(g.rows()).is_empty());
    }
}
