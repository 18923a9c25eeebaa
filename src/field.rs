// SPDX-License-Identifier: MIT
//
// Single-line text field for the color count.
//
// Holds the text being typed and a cursor measured in chars, so multi-byte
// input (a pasted "８" or a stray "°") never splits a character. The brackets
// around the field are drawn by the view.

/// Editable one-line input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    text: String,
    /// Char offset, `0..=text.chars().count()`.
    cursor: usize,
}

impl InputField {
    /// A field holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text left of the cursor.
    #[must_use]
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.char_to_byte(self.cursor)]
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.char_to_byte(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert `s` at the cursor, dropping control characters.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    /// Delete before the cursor. Returns `true` if something was deleted.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.char_to_byte(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete under the cursor. Returns `true` if something was deleted.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.char_to_byte(self.cursor);
        self.text.remove(at);
        true
    }

    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str, cursor: usize) -> InputField {
        let mut f = InputField::with_text(text);
        f.move_home();
        for _ in 0..cursor {
            f.move_right();
        }
        f
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn with_text_puts_cursor_at_end() {
        let f = InputField::with_text("12");
        assert_eq!(f.text(), "12");
        assert_eq!(f.cursor, 2);
    }

    #[test]
    fn default_is_empty() {
        let f = InputField::default();
        assert!(f.text.is_empty());
        assert_eq!(f.cursor, 0);
    }

    // ── Editing ─────────────────────────────────────────────────

    #[test]
    fn insert_at_cursor() {
        let mut f = field("18", 1);
        f.insert_char('2');
        assert_eq!(f.text(), "128");
        assert_eq!(f.cursor, 2);
    }

    #[test]
    fn insert_str_skips_control_chars() {
        let mut f = InputField::default();
        f.insert_str("2\t4\r");
        assert_eq!(f.text(), "24");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut f = field("8", 0);
        assert!(!f.backspace());
        assert_eq!(f.text(), "8");
    }

    #[test]
    fn backspace_removes_left() {
        let mut f = InputField::with_text("100");
        assert!(f.backspace());
        assert_eq!(f.text(), "10");
        assert_eq!(f.cursor, 2);
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut f = field("120", 1);
        assert!(f.delete());
        assert_eq!(f.text(), "10");
        assert_eq!(f.cursor, 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut f = InputField::with_text("7");
        assert!(!f.delete());
    }

    #[test]
    fn multibyte_chars_stay_whole() {
        let mut f = InputField::with_text("1°2");
        f.move_left();
        assert!(f.backspace());
        assert_eq!(f.text(), "12");
        assert_eq!(f.before_cursor(), "1");
    }

    #[test]
    fn clear_resets() {
        let mut f = InputField::with_text("42");
        f.clear();
        assert!(f.text.is_empty());
        assert_eq!(f.cursor, 0);
    }

    // ── Movement ────────────────────────────────────────────────

    #[test]
    fn movement_is_clamped() {
        let mut f = InputField::with_text("ab");
        f.move_right();
        assert_eq!(f.cursor, 2);
        f.move_home();
        f.move_left();
        assert_eq!(f.cursor, 0);
        f.move_end();
        assert_eq!(f.cursor, 2);
    }

    #[test]
    fn before_cursor_tracks_position() {
        let f = field("123", 2);
        assert_eq!(f.before_cursor(), "12");
    }
}
