// SPDX-License-Identifier: MIT
//
// The interactive viewer.
//
// `Viewer` implements hue-term's `App`. It owns the count field, the current
// palette, the status message, and the body scroll offset. Enter validates
// the field: a good count replaces the palette, a bad one leaves it alone
// and puts the reason on the status line.

use hue_gen::{CountError, Swatch, palette, parse_count};
use hue_term::ansi::CursorShape;
use hue_term::buffer::{FrameBuffer, Rect};
use hue_term::event_loop::{Action, App};
use hue_term::input::{Event, KeyCode, KeyEvent, Modifiers};
use hue_term::terminal::Size;

use crate::field::InputField;
use crate::view::{self, Body, HEADER_ROWS};

// ─── Status ──────────────────────────────────────────────────────────────────

/// What the status line says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Generated(usize),
    Rejected(CountError),
}

impl Status {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Generated(n) => format!("Generated {n} colors"),
            Self::Rejected(err) => err.to_string(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

// ─── Viewer ──────────────────────────────────────────────────────────────────

pub struct Viewer {
    field: InputField,
    palette: Vec<Swatch>,
    status: Status,
    max_columns: usize,
    mono: bool,

    /// First body line on screen.
    scroll: usize,
    /// Body length and visible body rows, as of the last paint.
    body_len: usize,
    body_rows: usize,

    cursor_screen: Option<(u16, u16)>,
}

impl Viewer {
    /// Start with `count` in the field and its palette already generated.
    #[must_use]
    pub fn new(count: usize, max_columns: usize, mono: bool) -> Self {
        Self {
            field: InputField::with_text(count.to_string()),
            palette: palette(count),
            status: Status::Generated(count),
            max_columns,
            mono,
            scroll: 0,
            body_len: 0,
            body_rows: 0,
            cursor_screen: None,
        }
    }

    /// Validate the field and regenerate. On failure the palette stays.
    pub fn submit(&mut self) {
        match parse_count(self.field.text()) {
            Ok(n) => {
                self.palette = palette(n);
                self.status = Status::Generated(n);
                self.scroll = 0;
            }
            Err(err) => {
                tracing::info!(input = self.field.text(), %err, "count rejected");
                self.status = Status::Rejected(err);
            }
        }
    }

    // ── Scrolling ───────────────────────────────────────────────

    const fn max_scroll(&self) -> usize {
        self.body_len.saturating_sub(self.body_rows)
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    const fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    const fn page(&self) -> usize {
        if self.body_rows > 1 {
            self.body_rows - 1
        } else {
            1
        }
    }

    // ── Keys ────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.is_ctrl('c') || key.is_ctrl('q') {
            return Action::Quit;
        }
        if key.is_ctrl('u') {
            self.field.clear();
            return Action::Continue;
        }

        match key.code {
            KeyCode::Escape => return Action::Quit,
            KeyCode::Enter => self.submit(),

            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(self.page()),
            KeyCode::PageDown => self.scroll_down(self.page()),

            KeyCode::Backspace => {
                self.field.backspace();
            }
            KeyCode::Delete => {
                self.field.delete();
            }
            KeyCode::Left => self.field.move_left(),
            KeyCode::Right => self.field.move_right(),
            KeyCode::Home => self.field.move_home(),
            KeyCode::End => self.field.move_end(),

            KeyCode::Char(ch) if !key.modifiers.intersects(Modifiers::CTRL | Modifiers::ALT) => {
                self.field.insert_char(ch);
            }
            _ => {}
        }
        Action::Continue
    }
}

impl App for Viewer {
    fn on_event(&mut self, event: &Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(text) => {
                let first_line = text.lines().next().unwrap_or_default();
                self.field.insert_str(first_line);
                Action::Continue
            }
        }
    }

    fn on_resize(&mut self, _size: Size) {
        // Scroll is re-clamped against the new body height on paint.
    }

    fn paint(&mut self, frame: &mut FrameBuffer) {
        let (w, h) = (frame.width(), frame.height());
        self.cursor_screen = None;
        if w == 0 || h == 0 {
            return;
        }

        self.cursor_screen = view::paint_input(frame, &self.field, 0);
        if h < 2 {
            return;
        }

        let status_y = h - 1;
        view::paint_status(frame, status_y, &self.status.text(), self.status.is_error());

        let body_top = HEADER_ROWS.min(status_y);
        let area = Rect::new(0, body_top, w, status_y - body_top);
        let body = Body::new(&self.palette, self.max_columns, w, self.mono);

        self.body_len = body.len();
        self.body_rows = usize::from(area.height);
        self.scroll = self.scroll.min(self.max_scroll());
        body.paint(frame, self.scroll, area);
    }

    fn cursor(&self) -> Option<(u16, u16, CursorShape)> {
        self.cursor_screen
            .map(|(x, y)| (x, y, CursorShape::SteadyBar))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use hue_gen::Rgb;

    // ── Helpers ─────────────────────────────────────────────────

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, Modifiers::empty()))
    }

    fn ctrl(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), Modifiers::CTRL))
    }

    fn enter() -> Event {
        key(KeyCode::Enter)
    }

    fn viewer() -> Viewer {
        Viewer::new(8, 8, false)
    }

    /// Clear the field and type `s`.
    fn type_text(v: &mut Viewer, s: &str) {
        v.on_event(&ctrl('u'));
        for ch in s.chars() {
            v.on_event(&key(KeyCode::Char(ch)));
        }
    }

    fn painted(v: &mut Viewer, w: u16, h: u16) -> FrameBuffer {
        let mut frame = FrameBuffer::new(w, h);
        v.paint(&mut frame);
        frame
    }

    // ── Start-up ────────────────────────────────────────────────

    #[test]
    fn starts_with_initial_palette() {
        let v = viewer();
        assert_eq!(v.field.text(), "8");
        assert_eq!(v.palette.len(), 8);
        assert_eq!(&v.status, &Status::Generated(8));
        assert_eq!(v.status.text(), "Generated 8 colors");
    }

    // ── Generating ──────────────────────────────────────────────

    #[test]
    fn enter_generates_typed_count() {
        let mut v = viewer();
        type_text(&mut v, "3");
        assert_eq!(v.on_event(&enter()), Action::Continue);
        let colors: Vec<Rgb> = v.palette.iter().map(|s| s.rgb).collect();
        assert_eq!(
            colors,
            [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );
        assert_eq!(&v.status, &Status::Generated(3));
    }

    #[test]
    fn invalid_text_keeps_palette() {
        let mut v = viewer();
        type_text(&mut v, "abc");
        v.on_event(&enter());
        assert_eq!(v.palette.len(), 8);
        assert!(v.status.is_error());
        assert_eq!(v.status.text(), "Please enter a valid integer");
    }

    #[test]
    fn out_of_range_messages() {
        let mut v = viewer();
        type_text(&mut v, "0");
        v.on_event(&enter());
        assert_eq!(v.status.text(), "Number of colors must be at least 1");

        type_text(&mut v, "101");
        v.on_event(&enter());
        assert_eq!(v.status.text(), "Number of colors cannot exceed 100");
        assert_eq!(v.palette.len(), 8);
    }

    #[test]
    fn valid_after_error_clears_error() {
        let mut v = viewer();
        type_text(&mut v, "-3");
        v.on_event(&enter());
        assert!(v.status.is_error());
        type_text(&mut v, " 12 ");
        v.on_event(&enter());
        assert_eq!(&v.status, &Status::Generated(12));
        assert_eq!(v.palette.len(), 12);
    }

    // ── Field editing ───────────────────────────────────────────

    #[test]
    fn editing_keys_reach_the_field() {
        let mut v = viewer();
        type_text(&mut v, "120");
        v.on_event(&key(KeyCode::Left));
        v.on_event(&key(KeyCode::Backspace));
        assert_eq!(v.field.text(), "10");
        v.on_event(&key(KeyCode::Home));
        v.on_event(&key(KeyCode::Delete));
        assert_eq!(v.field.text(), "0");
        v.on_event(&key(KeyCode::End));
        v.on_event(&key(KeyCode::Char('5')));
        assert_eq!(v.field.text(), "05");
    }

    #[test]
    fn alt_chars_are_not_typed() {
        let mut v = viewer();
        v.on_event(&Event::Key(KeyEvent::new(KeyCode::Char('x'), Modifiers::ALT)));
        assert_eq!(v.field.text(), "8");
    }

    #[test]
    fn paste_inserts_first_line() {
        let mut v = viewer();
        v.on_event(&ctrl('u'));
        v.on_event(&Event::Paste("24\n99".into()));
        assert_eq!(v.field.text(), "24");
    }

    // ── Quitting ────────────────────────────────────────────────

    #[test]
    fn quit_keys() {
        let mut v = viewer();
        assert_eq!(v.on_event(&key(KeyCode::Escape)), Action::Quit);
        assert_eq!(v.on_event(&ctrl('c')), Action::Quit);
        assert_eq!(v.on_event(&ctrl('q')), Action::Quit);
        assert_eq!(v.on_event(&key(KeyCode::Char('q'))), Action::Continue);
    }

    // ── Scrolling ───────────────────────────────────────────────

    #[test]
    fn scroll_is_clamped_to_body() {
        let mut v = viewer();
        painted(&mut v, 80, 10);
        v.on_event(&key(KeyCode::Up));
        assert_eq!(v.scroll, 0);
        for _ in 0..500 {
            v.on_event(&key(KeyCode::Down));
        }
        assert_eq!(v.scroll, v.max_scroll());
        assert!(v.scroll > 0);
    }

    #[test]
    fn page_keys_move_by_a_page() {
        let mut v = viewer();
        painted(&mut v, 80, 12);
        v.on_event(&key(KeyCode::PageDown));
        // 12 rows - 2 header - 1 status = 9 body rows; a page keeps one.
        assert_eq!(v.scroll, 8);
        v.on_event(&key(KeyCode::PageUp));
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn generating_resets_scroll() {
        let mut v = viewer();
        painted(&mut v, 80, 10);
        v.on_event(&key(KeyCode::PageDown));
        assert!(v.scroll > 0);
        type_text(&mut v, "4");
        v.on_event(&enter());
        assert_eq!(v.scroll, 0);
    }

    // ── Painting ────────────────────────────────────────────────

    #[test]
    fn paint_shows_input_body_and_status() {
        let mut v = viewer();
        let frame = painted(&mut v, 80, 30);
        assert!(frame.row_text(0).contains("Number of colors (n): [8"));
        assert!(frame.row_text(2).contains("Process"));
        assert!(frame.row_text(29).contains("Generated 8 colors"));
    }

    #[test]
    fn paint_reports_field_cursor() {
        let mut v = viewer();
        painted(&mut v, 80, 30);
        let (x, y, shape) = v.cursor().unwrap();
        assert_eq!(y, 0);
        assert_eq!(usize::from(x), 1 + view::INPUT_LABEL.len() + 1 + 1);
        assert_eq!(shape, CursorShape::SteadyBar);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut v = viewer();
        painted(&mut v, 0, 0);
        assert!(v.cursor().is_none());
        painted(&mut v, 5, 1);
        painted(&mut v, 80, 2);
        painted(&mut v, 1, 3);
    }
}
