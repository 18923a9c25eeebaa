// SPDX-License-Identifier: MIT
//
// Terminal input parser.
//
// Turns raw stdin bytes into key and paste events. The viewer only needs
// what a number field and a scrolling body use:
//
// - Printable ASCII and UTF-8 characters
// - Control keys (Ctrl+letter, Enter, Tab, Backspace)
// - Legacy CSI and SS3 sequences for arrows and editing keys, with
//   xterm modifier parameters
// - Alt+key (ESC followed by a printable character)
// - Bracketed paste
//
// Escape sequences can span several reads, so unparsed bytes stay in an
// internal buffer until the rest arrives. A lone ESC stays there too:
// call [`Parser::flush`] after a quiet timeout to turn it into Escape.

use bitflags::bitflags;

// ─── Event Types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Text between the bracketed-paste delimiters, delivered whole.
    Paste(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Whether this is Ctrl+`ch` with no other modifier.
    #[must_use]
    pub fn is_ctrl(&self, ch: char) -> bool {
        self.modifiers == Modifiers::CTRL && self.code == KeyCode::Char(ch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    // ── Named keys ──────────────────────────────────────────────
    Enter,
    Tab,
    Backspace,
    Escape,
    Delete,
    Insert,
    // ── Navigation ──────────────────────────────────────────────
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

bitflags! {
    /// Modifier keys, in xterm's CSI encoding (`param = 1 + bitmask`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

// ─── Parser ──────────────────────────────────────────────────────────────────

const PASTE_START: &[u8] = b"\x1b[200~";
const PASTE_END: &[u8] = b"\x1b[201~";

/// Incremental byte-to-event parser.
pub struct Parser {
    buf: Vec<u8>,
    /// Inside a bracketed paste, waiting for [`PASTE_END`].
    in_paste: bool,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(64),
            in_paste: false,
        }
    }

    /// Feed bytes and return every event they complete.
    pub fn advance(&mut self, data: &[u8]) -> Vec<Event> {
        self.buf.extend_from_slice(data);
        let mut events = Vec::new();
        let mut pos = 0;

        while pos < self.buf.len() {
            let remaining = &self.buf[pos..];

            if self.in_paste {
                let Some(end) = find_subsequence(remaining, PASTE_END) else {
                    break;
                };
                let text = String::from_utf8_lossy(&remaining[..end]).into_owned();
                events.push(Event::Paste(text));
                pos += end + PASTE_END.len();
                self.in_paste = false;
                continue;
            }

            if remaining.starts_with(PASTE_START) {
                self.in_paste = true;
                pos += PASTE_START.len();
                continue;
            }
            // A partial paste opener: wait rather than misparse it as CSI 2.
            if remaining.len() < PASTE_START.len()
                && remaining.len() > 2
                && PASTE_START.starts_with(remaining)
            {
                break;
            }

            match try_parse(remaining) {
                Parsed::Event(event, consumed) => {
                    events.push(event);
                    pos += consumed;
                }
                Parsed::Incomplete => break,
                Parsed::Skip(n) => pos += n,
            }
        }

        if pos > 0 {
            self.buf.drain(..pos);
        }
        events
    }

    /// Whether bytes are waiting for the rest of a sequence.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.buf.is_empty()
    }

    /// Give up waiting: emit leftover bytes as plain keys. A lone ESC
    /// becomes [`KeyCode::Escape`]. An unfinished paste is delivered as is.
    pub fn flush(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if self.in_paste {
            self.in_paste = false;
            events.push(Event::Paste(String::from_utf8_lossy(&self.buf).into_owned()));
            self.buf.clear();
            return events;
        }

        for &byte in &self.buf {
            let event = match byte {
                0x1B => press(KeyCode::Escape),
                0x7F => press(KeyCode::Backspace),
                b @ 0x01..=0x1A => ctrl_key(char::from(b + b'a' - 1)),
                b @ 0x20..=0x7E => press(KeyCode::Char(char::from(b))),
                _ => continue,
            };
            events.push(event);
        }
        self.buf.clear();
        events
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Stateless Parsing Functions ─────────────────────────────────────────────

enum Parsed {
    /// An event and the number of bytes it used.
    Event(Event, usize),
    /// Need more bytes.
    Incomplete,
    /// Unrecognized, drop this many bytes.
    Skip(usize),
}

fn try_parse(buf: &[u8]) -> Parsed {
    let Some(&lead) = buf.first() else {
        return Parsed::Incomplete;
    };

    match lead {
        0x1B => parse_escape(buf),
        0x08 | 0x7F => Parsed::Event(press(KeyCode::Backspace), 1),
        0x09 => Parsed::Event(press(KeyCode::Tab), 1),
        0x0A | 0x0D => Parsed::Event(press(KeyCode::Enter), 1),
        b @ 0x01..=0x1A => Parsed::Event(ctrl_key(char::from(b + b'a' - 1)), 1),
        b @ 0x20..=0x7E => Parsed::Event(press(KeyCode::Char(char::from(b))), 1),
        0xC0..=0xFF => parse_utf8(buf),
        _ => Parsed::Skip(1),
    }
}

// ── Escape sequences ────────────────────────────────────────────────────────

fn parse_escape(buf: &[u8]) -> Parsed {
    let Some(&next) = buf.get(1) else {
        return Parsed::Incomplete;
    };

    match next {
        b'[' => parse_csi(buf),
        b'O' => parse_ss3(buf),
        0x1B => Parsed::Event(key_with(KeyCode::Escape, Modifiers::ALT), 2),
        b @ 0x20..=0x7E => Parsed::Event(key_with(KeyCode::Char(char::from(b)), Modifiers::ALT), 2),
        // Anything else ends the escape on its own.
        _ => Parsed::Event(press(KeyCode::Escape), 1),
    }
}

// ── CSI ─────────────────────────────────────────────────────────────────────

fn parse_csi(buf: &[u8]) -> Parsed {
    // Parameter and intermediate bytes are 0x20..=0x3F; the final byte is
    // 0x40..=0x7E.
    let mut end = 2;
    loop {
        let Some(&b) = buf.get(end) else {
            return Parsed::Incomplete;
        };
        if (0x40..=0x7E).contains(&b) {
            break;
        }
        if !(0x20..=0x3F).contains(&b) {
            return Parsed::Skip(end + 1);
        }
        end += 1;
    }

    let consumed = end + 1;
    let params = parse_params(&buf[2..end]);
    let modifiers = params.get(1).map_or(Modifiers::empty(), |&p| decode_modifiers(p));

    let code = match buf[end] {
        b'~' => match params.first().copied().unwrap_or(0) {
            1 | 7 => KeyCode::Home,
            2 => KeyCode::Insert,
            3 => KeyCode::Delete,
            4 | 8 => KeyCode::End,
            5 => KeyCode::PageUp,
            6 => KeyCode::PageDown,
            _ => return Parsed::Skip(consumed),
        },
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'Z' => return Parsed::Event(key_with(KeyCode::Tab, Modifiers::SHIFT), consumed),
        _ => return Parsed::Skip(consumed),
    };

    Parsed::Event(key_with(code, modifiers), consumed)
}

// ── SS3 ─────────────────────────────────────────────────────────────────────

fn parse_ss3(buf: &[u8]) -> Parsed {
    let Some(&b) = buf.get(2) else {
        return Parsed::Incomplete;
    };
    let code = match b {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        _ => return Parsed::Skip(3),
    };
    Parsed::Event(press(code), 3)
}

// ── UTF-8 ───────────────────────────────────────────────────────────────────

fn parse_utf8(buf: &[u8]) -> Parsed {
    let len = utf8_char_len(buf[0]);
    if len == 0 {
        return Parsed::Skip(1);
    }
    if buf.len() < len {
        return Parsed::Incomplete;
    }

    std::str::from_utf8(&buf[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .map_or(Parsed::Skip(1), |ch| Parsed::Event(press(KeyCode::Char(ch)), len))
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

const fn press(code: KeyCode) -> Event {
    key_with(code, Modifiers::empty())
}

const fn ctrl_key(ch: char) -> Event {
    key_with(KeyCode::Char(ch), Modifiers::CTRL)
}

const fn key_with(code: KeyCode, modifiers: Modifiers) -> Event {
    Event::Key(KeyEvent { code, modifiers })
}

/// `1;5` → `[1, 5]`. Empty fields read as 0. Colon sub-parameters are
/// ignored.
fn parse_params(raw: &[u8]) -> Vec<u16> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(|&b| b == b';')
        .map(|field| {
            field
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .fold(0u16, |acc, &d| {
                    acc.saturating_mul(10).saturating_add(u16::from(d - b'0'))
                })
        })
        .collect()
}

/// Decode an xterm modifier parameter (`1 + bitmask`). 0 and 1 mean none.
#[allow(clippy::cast_possible_truncation)]
const fn decode_modifiers(param: u16) -> Modifiers {
    let bits = if param > 0 { param - 1 } else { 0 };
    Modifiers::from_bits_truncate(bits as u8)
}

/// UTF-8 sequence length from its lead byte, 0 if it can't lead.
const fn utf8_char_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 0,
    }
}

fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
