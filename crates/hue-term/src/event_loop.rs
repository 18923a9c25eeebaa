// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Event loop.
//
// Stdin bytes arrive from the background reader, the parser turns them
// into events, the app handles them and paints a frame buffer, and the
// diff renderer sends only what changed.
//
// The loop blocks on the reader channel with a short timeout. Input wakes
// it immediately. The timeout does two jobs: it bounds how long a resize
// waits for a redraw, and it is the escape-sequence timeout. A lone ESC
// that sees no follow-up bytes within one interval is the Escape key.
// Frames are painted only when something changed, so an idle viewer
// costs nothing.
//
// Resize arrives as SIGWINCH. The handler sets an atomic flag and the loop
// picks it up on the next pass.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::ansi::{self, CursorShape};
use crate::buffer::FrameBuffer;
use crate::color::ColorDepth;
use crate::diff::DiffRenderer;
use crate::input::{Event, Parser};
use crate::reader::StdinReader;
use crate::terminal::{Size, Terminal};

// ─── SIGWINCH ────────────────────────────────────────────────────────────────

static SIGWINCH_RECEIVED: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
fn install_sigwinch_handler() {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = sigwinch_handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGWINCH, &raw const sa, std::ptr::null_mut());
    }
}

// Only an atomic store: nothing else is async-signal-safe here.
#[cfg(unix)]
extern "C" fn sigwinch_handler(_sig: libc::c_int) {
    SIGWINCH_RECEIVED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
const fn install_sigwinch_handler() {}

// ─── App Trait ───────────────────────────────────────────────────────────────

/// What the loop does after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// An interactive screen driven by [`EventLoop`].
///
/// Per pass the loop calls [`on_event`](App::on_event) for each input
/// event, [`on_resize`](App::on_resize) if the terminal changed size, then
/// [`paint`](App::paint) and [`cursor`](App::cursor) if anything happened.
pub trait App {
    /// Handle one input event. [`Action::Quit`] ends the loop.
    fn on_event(&mut self, _event: &Event) -> Action {
        Action::Continue
    }

    /// The frame buffer has already been resized when this runs.
    fn on_resize(&mut self, _size: Size) {}

    /// Draw the whole screen. The buffer arrives cleared.
    fn paint(&mut self, buf: &mut FrameBuffer);

    /// Where to show the hardware cursor after painting, or `None` to
    /// hide it.
    fn cursor(&self) -> Option<(u16, u16, CursorShape)> {
        None
    }
}

/// Hand `events` to the app in order. Returns `Quit` as soon as the app
/// asks for it, along with whether any event was delivered.
fn dispatch(app: &mut impl App, events: &[Event]) -> (Action, bool) {
    for event in events {
        if app.on_event(event) == Action::Quit {
            return (Action::Quit, true);
        }
    }
    (Action::Continue, !events.is_empty())
}

// ─── LoopConfig ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Channel wait per pass, in microseconds. Also the ESC timeout.
    pub tick_interval_us: u64,
    /// How colors are written to the terminal.
    pub depth: ColorDepth,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_interval_us: 8333,
            depth: ColorDepth::default(),
        }
    }
}

impl LoopConfig {
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_micros(self.tick_interval_us)
    }
}

// ─── EventLoop ───────────────────────────────────────────────────────────────

/// Owns the terminal, the parser, and the renderer for one interactive run.
///
/// ```no_run
/// use hue_term::buffer::FrameBuffer;
/// use hue_term::cell::Style;
/// use hue_term::event_loop::{Action, App, EventLoop, LoopConfig};
/// use hue_term::input::{Event, KeyCode, KeyEvent};
///
/// struct Hello;
///
/// impl App for Hello {
///     fn on_event(&mut self, event: &Event) -> Action {
///         match event {
///             Event::Key(KeyEvent { code: KeyCode::Escape, .. }) => Action::Quit,
///             _ => Action::Continue,
///         }
///     }
///
///     fn paint(&mut self, buf: &mut FrameBuffer) {
///         buf.paint_text(0, 0, "Generated 8 Colors:", Style::PLAIN, None);
///     }
/// }
///
/// EventLoop::new(LoopConfig::default()).run(&mut Hello)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct EventLoop {
    terminal: Terminal,
    parser: Parser,
    renderer: DiffRenderer,
    config: LoopConfig,
}

impl EventLoop {
    /// Query the terminal size. Terminal modes are untouched until
    /// [`run`](Self::run).
    #[must_use]
    pub fn new(config: LoopConfig) -> Self {
        Self {
            terminal: Terminal::new(),
            parser: Parser::new(),
            renderer: DiffRenderer::new(config.depth),
            config,
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.terminal.size()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> LoopConfig {
        self.config
    }

    /// Take over the terminal and run `app` until it quits or stdin closes.
    /// The terminal is restored on every exit path.
    ///
    /// # Errors
    ///
    /// Returns an error if entering or leaving the terminal, spawning the
    /// reader, or writing a frame fails.
    pub fn run(&mut self, app: &mut impl App) -> io::Result<()> {
        self.terminal.enter()?;
        install_sigwinch_handler();

        let result = match StdinReader::spawn() {
            Ok((mut reader, rx)) => {
                let result = self.run_inner(app, &rx);
                reader.stop();
                result
            }
            Err(err) => Err(err),
        };

        self.terminal.leave()?;
        result
    }

    fn run_inner(&mut self, app: &mut impl App, rx: &Receiver<Vec<u8>>) -> io::Result<()> {
        let size = self.terminal.size();
        let mut frame = FrameBuffer::new(size.cols, size.rows);
        let mut dirty = true;
        let timeout = self.config.tick_interval();

        loop {
            let events = match rx.recv_timeout(timeout) {
                Ok(bytes) => self.parser.advance(&bytes),
                Err(RecvTimeoutError::Timeout) if self.parser.has_pending() => self.parser.flush(),
                Err(RecvTimeoutError::Timeout) => Vec::new(),
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!("stdin closed");
                    return Ok(());
                }
            };

            let (action, handled) = dispatch(app, &events);
            if action == Action::Quit {
                return Ok(());
            }
            dirty |= handled;

            if SIGWINCH_RECEIVED.swap(false, Ordering::Relaxed) {
                let new_size = self.terminal.refresh_size();
                tracing::debug!(cols = new_size.cols, rows = new_size.rows, "resized");
                frame.resize(new_size.cols, new_size.rows);
                self.renderer.force_redraw();
                app.on_resize(new_size);
                dirty = true;
            }

            if dirty {
                frame.clear();
                app.paint(&mut frame);
                self.renderer.render(&frame);
                self.renderer.flush()?;
                place_cursor(app.cursor())?;
                dirty = false;
            }
        }
    }
}

fn place_cursor(cursor: Option<(u16, u16, CursorShape)>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if let Some((x, y, shape)) = cursor {
        ansi::cursor_to(&mut out, x, y)?;
        ansi::set_cursor_shape(&mut out, shape)?;
        ansi::cursor_show(&mut out)?;
    } else {
        ansi::cursor_hide(&mut out)?;
    }
    out.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
