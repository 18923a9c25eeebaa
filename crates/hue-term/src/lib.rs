// SPDX-License-Identifier: MIT
//
// hue-term — terminal backend for the huewheel viewer.
//
// Differential rendering over raw ANSI: the app paints a cell grid, the
// renderer compares it with the last frame, and only changed cells are
// written, with redundant escapes dropped. Colors are held at full 24-bit
// fidelity and downgraded to 256 colors or none on the way out, so a swatch
// is always painted from its exact RGB value when the terminal allows it.
//
// Terminal control is direct termios and escape sequences, no TUI framework.
//
// Layering, bottom up:
//
//   color, cell    →  what one screen cell holds
//   buffer         →  the cell grid and painting helpers
//   ansi, output   →  escape sequences and a state-tracking cell writer
//   diff           →  frame-to-frame diffing
//   terminal       →  raw mode, alternate screen, restore on panic
//   reader, input  →  stdin bytes to key and paste events
//   event_loop     →  the App trait and the loop that drives it

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod diff;
pub mod event_loop;
pub mod input;
pub mod output;
pub mod reader;
pub mod terminal;
