// SPDX-License-Identifier: MIT
//
// Print mode: the palette as plain text on stdout, no terminal takeover.
//
// The full form is the process walkthrough followed by one line per color.
// With `--hex` it is just the hex strings, one per line, for piping into
// other tools.

use std::io::{self, Write};

use hue_gen::{Swatch, detail_rows, heading, process_lines};
use hue_term::ansi;
use hue_term::color::{CellColor, ColorDepth};

use crate::view::cell_color;

/// A two-column color sample.
const BLOCK: &str = "██";

/// Write the walkthrough and the color list. Each color gets a [`BLOCK`] in
/// its own color unless `depth` has no color.
///
/// # Errors
///
/// Returns any error from writing to `w`.
pub fn write_report(w: &mut impl Write, palette: &[Swatch], depth: ColorDepth) -> io::Result<()> {
    for line in process_lines(palette) {
        writeln!(w, "{line}")?;
    }
    writeln!(w)?;
    writeln!(w, "{}", heading(palette.len()))?;

    for (swatch, row) in palette.iter().zip(detail_rows(palette)) {
        write!(w, "{:>3}  ", row.number)?;
        if depth.has_color() {
            ansi::fg(w, cell_color(swatch.rgb).for_depth(depth))?;
            w.write_all(BLOCK.as_bytes())?;
            ansi::fg(w, CellColor::Default)?;
            w.write_all(b"  ")?;
        }
        writeln!(w, "{:<15}  {}  {:>6}°", row.rgb, row.hex, row.hue)?;
    }
    w.flush()
}

/// Write one `#RRGGBB` per line.
///
/// # Errors
///
/// Returns any error from writing to `w`.
pub fn write_hex(w: &mut impl Write, palette: &[Swatch]) -> io::Result<()> {
    for swatch in palette {
        writeln!(w, "{}", swatch.hex())?;
    }
    w.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
