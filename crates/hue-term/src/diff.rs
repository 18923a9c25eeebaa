// SPDX-License-Identifier: MIT
//
// Differential renderer.
//
// Each frame is compared against the previous one and only changed cells
// reach the terminal. Scrolling the viewer's body changes most rows, but
// typing in the input field touches one row, and an idle redraw touches none.
//
// Per frame:
//
//   1. The app paints a FrameBuffer.
//   2. render() walks it against the stored previous frame. Identical rows
//      are skipped with one slice comparison; other rows go cell by cell.
//   3. Changed cells go through CellWriter into the OutputBuffer.
//   4. flush() writes the whole frame at once, wrapped in synchronized
//      output so the terminal never shows half a frame.
//
// A size change, or force_redraw(), clears the screen and repaints all.

use std::io::{self, Write};

use crate::ansi;
use crate::buffer::FrameBuffer;
use crate::color::ColorDepth;
use crate::output::{CellWriter, OutputBuffer};

// ─── RenderStats ─────────────────────────────────────────────────────────────

/// What one render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Cells sent to the terminal.
    pub cells_rendered: usize,
    /// Cells unchanged since the last frame.
    pub cells_skipped: usize,
    /// Output size in bytes.
    pub bytes_written: usize,
    /// Whether this pass repainted the whole screen.
    pub full_redraw: bool,
}

impl RenderStats {
    #[inline]
    #[must_use]
    pub const fn total_cells(&self) -> usize {
        self.cells_rendered + self.cells_skipped
    }
}

// ─── DiffRenderer ────────────────────────────────────────────────────────────

/// Emits ANSI output for the cells that changed since the last frame.
///
/// ```
/// use hue_term::buffer::FrameBuffer;
/// use hue_term::cell::Style;
/// use hue_term::color::ColorDepth;
/// use hue_term::diff::DiffRenderer;
///
/// let mut renderer = DiffRenderer::new(ColorDepth::TrueColor);
/// let mut frame = FrameBuffer::new(20, 2);
/// frame.paint_text(0, 0, "Generated 8 Colors:", Style::PLAIN, None);
///
/// let first = renderer.render(&frame);
/// assert_eq!(first.cells_rendered, 40);
///
/// let again = renderer.render(&frame);
/// assert_eq!(again.cells_rendered, 0);
/// ```
pub struct DiffRenderer {
    output: OutputBuffer,
    writer: CellWriter,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    /// A renderer whose first frame is drawn in full.
    #[must_use]
    pub fn new(depth: ColorDepth) -> Self {
        Self {
            output: OutputBuffer::new(),
            writer: CellWriter::new(depth),
            previous: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn depth(&self) -> ColorDepth {
        self.writer.depth()
    }

    /// Diff `current` against the previous frame into the output buffer.
    ///
    /// Nothing reaches the terminal until [`flush`](Self::flush).
    pub fn render(&mut self, current: &FrameBuffer) -> RenderStats {
        self.output.clear();
        self.writer.reset_state();

        let (width, height) = (current.width(), current.height());
        let mut stats = RenderStats::default();

        if width == 0 || height == 0 {
            self.store_frame(current);
            return stats;
        }

        let previous = self
            .previous
            .take()
            .filter(|p| p.width() == width && p.height() == height);
        stats.full_redraw = previous.is_none();

        ansi::begin_sync(&mut self.output).ok();
        if stats.full_redraw {
            ansi::reset(&mut self.output).ok();
            ansi::clear_screen(&mut self.output).ok();
        }

        for y in 0..height {
            let prev_row = previous.as_ref().and_then(|p| p.row(y));
            let Some(row) = current.row(y) else {
                continue;
            };
            if prev_row == Some(row) {
                stats.cells_skipped += row.len();
                continue;
            }

            for (x, cell) in (0..width).zip(row) {
                if prev_row.and_then(|p| p.get(usize::from(x))) == Some(cell) {
                    stats.cells_skipped += 1;
                } else {
                    self.writer.render_cell(&mut self.output, x, y, cell);
                    stats.cells_rendered += 1;
                }
            }
        }

        // Don't leak the last cell's style into the cursor or the shell.
        ansi::reset(&mut self.output).ok();
        ansi::end_sync(&mut self.output).ok();
        stats.bytes_written = self.output.len();

        self.previous = previous;
        self.store_frame(current);

        tracing::trace!(
            rendered = stats.cells_rendered,
            skipped = stats.cells_skipped,
            total = stats.total_cells(),
            bytes = stats.bytes_written,
            full = stats.full_redraw,
            "frame rendered"
        );
        stats
    }

    /// Output from the last [`render`](Self::render), not yet flushed.
    #[must_use]
    pub fn output_bytes(&self) -> &[u8] {
        self.output.as_bytes()
    }

    /// Write the pending frame to stdout.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to stdout.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush_stdout()
    }

    /// Write the pending frame to `w`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `w`.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.output.flush_to(w)
    }

    /// Make the next render repaint everything.
    pub fn force_redraw(&mut self) {
        self.previous = None;
    }

    /// Keep `current` for the next comparison, reusing the old allocation.
    fn store_frame(&mut self, current: &FrameBuffer) {
        match &mut self.previous {
            Some(prev) => prev.copy_from(current),
            None => self.previous = Some(current.clone()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, Style};
    use crate::color::CellColor;

    fn render(renderer: &mut DiffRenderer, frame: &FrameBuffer) -> (RenderStats, String) {
        let stats = renderer.render(frame);
        let out = String::from_utf8(renderer.output_bytes().to_vec()).unwrap();
        (stats, out)
    }

    fn renderer() -> DiffRenderer {
        DiffRenderer::new(ColorDepth::TrueColor)
    }

    // ── First frame ─────────────────────────────────────────────

    #[test]
    fn first_render_draws_everything() {
        let mut r = renderer();
        let frame = FrameBuffer::new(10, 3);
        let (stats, out) = render(&mut r, &frame);
        assert_eq!(stats.cells_rendered, 30);
        assert_eq!(stats.cells_skipped, 0);
        assert!(stats.full_redraw);
        assert!(out.contains("\x1b[2J"));
        assert!(out.starts_with("\x1b[?2026h"));
        assert!(out.ends_with("\x1b[0m\x1b[?2026l"));
    }

    #[test]
    fn zero_size_renders_nothing() {
        let mut r = renderer();
        let (stats, out) = render(&mut r, &FrameBuffer::new(0, 5));
        assert_eq!(stats, RenderStats::default());
        assert!(out.is_empty());
    }

    // ── Diffing ─────────────────────────────────────────────────

    #[test]
    fn identical_frame_skips_all() {
        let mut r = renderer();
        let frame = FrameBuffer::new(10, 3);
        r.render(&frame);
        let (stats, out) = render(&mut r, &frame);
        assert_eq!(stats.cells_rendered, 0);
        assert_eq!(stats.cells_skipped, 30);
        assert_eq!(stats.total_cells(), 30);
        assert!(!stats.full_redraw);
        assert!(!out.contains("\x1b[2J"));
    }

    #[test]
    fn single_change_renders_one_cell() {
        let mut r = renderer();
        let mut frame = FrameBuffer::new(10, 3);
        r.render(&frame);

        frame.set(4, 1, Cell::new('9'));
        let (stats, out) = render(&mut r, &frame);
        assert_eq!(stats.cells_rendered, 1);
        assert_eq!(stats.cells_skipped, 29);
        assert!(out.contains("\x1b[2;5H"));
        assert!(out.contains('9'));
    }

    #[test]
    fn color_change_is_a_change() {
        let mut r = renderer();
        let mut frame = FrameBuffer::new(4, 1);
        r.render(&frame);

        frame.set(0, 0, Cell::blank(CellColor::Rgb(0, 255, 255)));
        let (stats, out) = render(&mut r, &frame);
        assert_eq!(stats.cells_rendered, 1);
        assert!(out.contains("\x1b[48;2;0;255;255m"));
    }

    // ── Redraw triggers ─────────────────────────────────────────

    #[test]
    fn resize_forces_full_redraw() {
        let mut r = renderer();
        r.render(&FrameBuffer::new(10, 3));
        let (stats, _) = render(&mut r, &FrameBuffer::new(12, 3));
        assert!(stats.full_redraw);
        assert_eq!(stats.cells_rendered, 36);
    }

    #[test]
    fn force_redraw_repaints() {
        let mut r = renderer();
        let frame = FrameBuffer::new(5, 2);
        r.render(&frame);
        r.force_redraw();
        let (stats, _) = render(&mut r, &frame);
        assert!(stats.full_redraw);
        assert_eq!(stats.cells_rendered, 10);
    }

    // ── Depth ───────────────────────────────────────────────────

    #[test]
    fn depth_reaches_output() {
        let mut r = DiffRenderer::new(ColorDepth::Ansi256);
        let mut frame = FrameBuffer::new(2, 1);
        frame.paint_text(0, 0, "ab", Style::PLAIN.with_bg(CellColor::Rgb(0, 0, 255)), None);
        let (_, out) = render(&mut r, &frame);
        assert_eq!(r.depth(), ColorDepth::Ansi256);
        assert!(out.contains("\x1b[48;5;21m"));
    }

    // ── Flush ───────────────────────────────────────────────────

    #[test]
    fn flush_to_writes_frame() {
        let mut r = renderer();
        let mut frame = FrameBuffer::new(3, 1);
        frame.paint_text(0, 0, "hue", Style::PLAIN, None);
        r.render(&frame);
        let mut sink = Vec::new();
        r.flush_to(&mut sink).unwrap();
        assert!(String::from_utf8(sink).unwrap().contains("hue"));
        assert!(r.output_bytes().is_empty());
    }
}
