// SPDX-License-Identifier: MIT
//
// Frame output: byte accumulation and redundant-escape elimination.
//
//   OutputBuffer — collects a whole frame's bytes so it goes out in one
//   write() call.
//
//   CellWriter — remembers what the terminal was last told (cursor spot,
//   colors, attributes) and only emits the escapes that change something.
//   It also owns the color depth: colors are downgraded here, on the way
//   out, so the frame buffer always holds the full-fidelity colors.

use std::io::{self, Write};

use crate::ansi;
use crate::cell::{Attr, Cell};
use crate::color::{CellColor, ColorDepth};

// ─── OutputBuffer ────────────────────────────────────────────────────────────

const DEFAULT_CAPACITY: usize = 16_384;

/// In-memory byte sink for one frame.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

impl OutputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append a character as UTF-8.
    #[inline]
    pub fn push_char(&mut self, ch: char) {
        let mut enc = [0u8; 4];
        self.buf
            .extend_from_slice(ch.encode_utf8(&mut enc).as_bytes());
    }

    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write everything to `w`, flush it, and empty the buffer.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to or flushing `w`.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }

    /// [`flush_to`](Self::flush_to) on a locked stdout.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to stdout.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        self.flush_to(&mut io::stdout().lock())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    // Real flushing goes through flush_to / flush_stdout.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── CellWriter ──────────────────────────────────────────────────────────────

/// Stateful cell emitter.
///
/// - The cursor move is skipped when the cell directly follows the last one
///   written on the same row.
/// - An attribute change resets (SGR 0) before re-emitting, which also
///   forgets the tracked colors.
/// - Colors are emitted only when they differ from the last ones sent.
/// - A continuation cell right after its wide character writes nothing.
#[allow(clippy::struct_field_names)]
pub struct CellWriter {
    depth: ColorDepth,
    last_pos: Option<(u16, u16)>,
    last_fg: Option<CellColor>,
    last_bg: Option<CellColor>,
    last_attrs: Attr,
}

impl CellWriter {
    #[must_use]
    pub const fn new(depth: ColorDepth) -> Self {
        Self {
            depth,
            last_pos: None,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::empty(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Forget everything known about the terminal's state.
    pub const fn reset_state(&mut self) {
        self.last_pos = None;
        self.last_fg = None;
        self.last_bg = None;
        self.last_attrs = Attr::empty();
    }

    /// Emit `cell` at `(x, y)`.
    pub fn render_cell(&mut self, out: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        let follows = self
            .last_pos
            .is_some_and(|(lx, ly)| ly == y && lx.checked_add(1) == Some(x));

        if cell.is_continuation() {
            if follows {
                // The wide character already covered this column.
                self.last_pos = Some((x, y));
                return;
            }
            ansi::cursor_to(out, x, y).ok();
            self.apply_style(out, cell);
            out.push_char(' ');
            self.last_pos = Some((x, y));
            return;
        }

        if !follows {
            ansi::cursor_to(out, x, y).ok();
        }
        self.apply_style(out, cell);
        out.push_char(cell.ch);
        self.last_pos = Some((x, y));
    }

    fn apply_style(&mut self, out: &mut OutputBuffer, cell: &Cell) {
        let attrs = cell.attrs();
        if attrs != self.last_attrs {
            if !self.last_attrs.is_empty() {
                ansi::reset(out).ok();
                self.last_fg = None;
                self.last_bg = None;
            }
            ansi::attrs(out, attrs).ok();
            self.last_attrs = attrs;
        }

        if !self.depth.has_color() {
            return;
        }

        let fg = cell.fg().for_depth(self.depth);
        if self.last_fg != Some(fg) {
            ansi::fg(out, fg).ok();
            self.last_fg = Some(fg);
        }

        let bg = cell.bg().for_depth(self.depth);
        if self.last_bg != Some(bg) {
            ansi::bg(out, bg).ok();
            self.last_bg = Some(bg);
        }
    }
}

impl Default for CellWriter {
    fn default() -> Self {
        Self::new(ColorDepth::default())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
