// SPDX-License-Identifier: MIT
//
// Painting the viewer.
//
//   ┌──────────────────────────────────────────────────────┐
//   │ Number of colors (n): [8     ]   Enter: generate ... │  ← input row
//   │                                                      │
//   │ Process                                              │  ┐
//   │   Input: n = 8                                       │  │
//   │   ...                                                │  │ scrollable
//   │ Generated Colors                                     │  │ body
//   │   ████ ████ ████ ...                                 │  │
//   │ Color Details                                        │  │
//   │   #  RGB              Hex       Hue (°)              │  ┘
//   ├──────────────────────────────────────────────────────┤
//   │ Generated 8 colors                          (INVERSE)│  ← status
//   └──────────────────────────────────────────────────────┘
//
// The body is a flat list of lines so scrolling is an offset into it. A
// grid row of swatches spans SWATCH_HEIGHT lines.

use hue_gen::report::DETAIL_HEADERS;
use hue_gen::{Grid, Rgb, Swatch, detail_rows, heading, label_ink, process_lines};
use hue_term::buffer::{FrameBuffer, Rect, string_width};
use hue_term::cell::{Attr, Cell, Style};
use hue_term::color::CellColor;

use crate::field::InputField;

pub const INPUT_LABEL: &str = "Number of colors (n): ";
const HINTS: &str = "Enter: generate   ↑↓ PgUp PgDn: scroll   Esc: quit";

/// The field is drawn at least this wide, text or not.
const FIELD_MIN_WIDTH: u16 = 6;

/// Rows above the body: the input row and a spacer.
pub const HEADER_ROWS: u16 = 2;

/// Widest a swatch gets. Fits ` #FF0000 ` with a column to spare.
pub const SWATCH_WIDTH: u16 = 11;
pub const SWATCH_HEIGHT: u16 = 4;
const SWATCH_GAP: u16 = 1;

/// Body text indent.
pub const MARGIN: u16 = 2;

/// Swatch fill when the terminal shows no color.
const MONO_FILL: char = '░';

#[inline]
#[must_use]
pub const fn cell_color(rgb: Rgb) -> CellColor {
    CellColor::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

// ─── Input Row ───────────────────────────────────────────────────────────────

/// Paint the label, the bracketed field, and the key hints on row `y`.
/// Returns the screen position of the field's cursor if it is visible.
pub fn paint_input(frame: &mut FrameBuffer, field: &InputField, y: u16) -> Option<(u16, u16)> {
    let mut x = 1;
    x += frame.paint_text(x, y, INPUT_LABEL, Style::attrs(Attr::BOLD), None);
    x += frame.paint_text(x, y, "[", Style::PLAIN, None);

    let field_x = x;
    let text_width = to_u16(string_width(field.text()));
    // One spare column so the cursor can sit after the last character.
    let field_width = text_width.saturating_add(1).max(FIELD_MIN_WIDTH);
    let underline = Style::attrs(Attr::UNDERLINE);
    for col in 0..field_width {
        frame.set(field_x.saturating_add(col), y, Cell::styled(' ', underline));
    }
    frame.paint_text(field_x, y, field.text(), underline, None);

    x = field_x.saturating_add(field_width);
    x = x.saturating_add(frame.paint_text(x, y, "]", Style::PLAIN, None));
    frame.paint_text(x.saturating_add(3), y, HINTS, Style::attrs(Attr::DIM), None);

    let cursor_x = field_x.saturating_add(to_u16(string_width(field.before_cursor())));
    frame.in_bounds(cursor_x, y).then_some((cursor_x, y))
}

// ─── Status Line ─────────────────────────────────────────────────────────────

/// Fill row `y` in reverse video with `text`. Errors are bold red.
pub fn paint_status(frame: &mut FrameBuffer, y: u16, text: &str, is_error: bool) {
    let plain = Style::attrs(Attr::INVERSE);
    let style = if is_error {
        plain
            .with_fg(CellColor::Ansi256(1))
            .with_attrs(plain.attrs | Attr::BOLD)
    } else {
        plain
    };
    for x in 0..frame.width() {
        frame.set(x, y, Cell::styled(' ', style));
    }
    frame.paint_text(1, y, text, style, None);
}

// ─── Body ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Blank,
    Section(&'static str),
    Text(String),
    TableHeader(String),
    /// Line `line` (from the top) of swatch grid row `row`.
    Swatches { row: usize, line: u16 },
}

/// The scrollable part of the screen for one palette.
pub struct Body<'a> {
    palette: &'a [Swatch],
    grid: Grid,
    swatch_width: u16,
    mono: bool,
    lines: Vec<BodyLine>,
}

impl<'a> Body<'a> {
    /// Lay out `palette` with at most `max_columns` swatches per row in a
    /// body `width` columns wide.
    #[must_use]
    pub fn new(palette: &'a [Swatch], max_columns: usize, width: u16, mono: bool) -> Self {
        let grid = Grid::new(palette.len(), max_columns);
        Self {
            palette,
            grid,
            swatch_width: swatch_width(width.saturating_sub(MARGIN * 2), grid.cols()),
            mono,
            lines: body_lines(palette, grid),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Paint the lines from `scroll` on into `area`.
    pub fn paint(&self, frame: &mut FrameBuffer, scroll: usize, area: Rect) {
        let text_x = area.x.saturating_add(MARGIN);
        for (dy, line) in (0..area.height).zip(self.lines.iter().skip(scroll)) {
            let y = area.y + dy;
            match line {
                BodyLine::Blank => {}
                BodyLine::Section(title) => {
                    let style = Style::attrs(Attr::BOLD | Attr::UNDERLINE);
                    frame.paint_text(area.x.saturating_add(1), y, title, style, Some(area));
                }
                BodyLine::Text(text) => {
                    frame.paint_text(text_x, y, text, Style::PLAIN, Some(area));
                }
                BodyLine::TableHeader(text) => {
                    frame.paint_text(text_x, y, text, Style::attrs(Attr::BOLD), Some(area));
                }
                BodyLine::Swatches { row, line } => {
                    self.paint_swatch_line(frame, *row, *line, text_x, y, area);
                }
            }
        }
    }

    fn paint_swatch_line(
        &self,
        frame: &mut FrameBuffer,
        row: usize,
        line: u16,
        left: u16,
        y: u16,
        area: Rect,
    ) {
        let w = self.swatch_width;
        for index in self.grid.row_range(row) {
            let Some(swatch) = self.palette.get(index) else {
                continue;
            };
            let (_, col) = self.grid.position(index);
            let x = left.saturating_add(to_u16(col).saturating_mul(w + SWATCH_GAP));

            let bg = cell_color(swatch.rgb);
            if self.mono {
                for dx in 0..w {
                    frame.set(x.saturating_add(dx), y, Cell::new(MONO_FILL));
                }
            } else {
                frame.fill_rect(Rect::new(x, y, w, 1), bg, Some(area));
            }

            let label = match line {
                1 => format!(" #{} ", swatch.number()),
                2 => format!(" {} ", swatch.hex()),
                _ => continue,
            };
            let ink = cell_color(label_ink(swatch.rgb).rgb());
            frame.paint_centered(x, y, w, &label, Style::new(ink, bg, Attr::empty()), Some(area));
        }
    }
}

/// Swatch width that fits `cols` swatches (and their gaps) in `avail`
/// columns, never wider than [`SWATCH_WIDTH`] nor narrower than 1.
#[must_use]
pub fn swatch_width(avail: u16, cols: usize) -> u16 {
    let cols = to_u16(cols.max(1));
    let per_swatch = avail.saturating_add(SWATCH_GAP) / cols;
    per_swatch.saturating_sub(SWATCH_GAP).clamp(1, SWATCH_WIDTH)
}

/// Every body line for `palette`, top to bottom.
#[must_use]
pub fn body_lines(palette: &[Swatch], grid: Grid) -> Vec<BodyLine> {
    let mut lines = vec![BodyLine::Section("Process")];
    lines.extend(process_lines(palette).into_iter().map(|l| {
        if l.is_empty() {
            BodyLine::Blank
        } else {
            BodyLine::Text(l)
        }
    }));

    lines.push(BodyLine::Blank);
    lines.push(BodyLine::Section("Generated Colors"));
    lines.push(BodyLine::Text(heading(palette.len())));
    for row in 0..grid.rows() {
        lines.push(BodyLine::Blank);
        lines.extend((0..SWATCH_HEIGHT).map(|line| BodyLine::Swatches { row, line }));
    }

    lines.push(BodyLine::Blank);
    lines.push(BodyLine::Section("Color Details"));
    lines.push(BodyLine::TableHeader(table_line(&DETAIL_HEADERS.map(String::from))));
    lines.extend(
        detail_rows(palette)
            .iter()
            .map(|row| BodyLine::Text(table_line(&row.cells()))),
    );
    lines
}

/// One details-table line: number, RGB, hex, hue.
fn table_line(cells: &[String; 4]) -> String {
    let [number, rgb, hex, hue] = cells;
    format!("{number:>3}  {rgb:<15}  {hex:<7}  {hue:>7}")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
