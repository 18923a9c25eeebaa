// SPDX-License-Identifier: MIT
//
//! # hue-gen — evenly spaced HSV palettes
//!
//! Generates `n` visually distinct colors by walking the HSV color wheel in
//! equal steps at full saturation and value. One integer in, an ordered list
//! of RGB triples out.
//!
//! # Architecture
//!
//! ```text
//! user input ("8")
//!     │
//!     ▼
//! count.rs:     validate the requested count (1..=100)
//!     │
//!     ▼
//! generator.rs: hue angles i · 360/n (pure math)
//!     │
//!     ▼
//! hsv.rs:       HSV → RGB, channels rounded to 0..=255
//!     │
//!     ▼
//! report.rs / layout.rs / contrast.rs: text and geometry for any display
//! ```
//!
//! Nothing here touches a terminal. Display layers (the huewheel viewer, the
//! print mode, tests) consume [`Swatch`] values and decide how to draw them.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Loop indices become hue angles.
#![allow(clippy::cast_precision_loss)]

pub mod contrast;
pub mod count;
pub mod generator;
pub mod hsv;
pub mod layout;
pub mod report;
pub mod rgb;

pub use contrast::{Ink, label_ink};
pub use count::{COUNT_RANGE, CountError, MAX_COUNT, MIN_COUNT, parse_count};
pub use generator::{HueAssignment, Swatch, generate, hue_step, hues, palette};
pub use layout::Grid;
pub use report::{DetailRow, detail_rows, heading, process_lines};
pub use rgb::{Rgb, to_hex};
