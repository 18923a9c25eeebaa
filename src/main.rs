// SPDX-License-Identifier: MIT
//
// huewheel — evenly spaced HSV palettes in the terminal.
//
// This is the binary that wires the two crates together:
//
//   hue-gen  → count validation, palette generation, report text, layout
//   hue-term → terminal control, rendering, input parsing, event loop
//
// Two ways to run:
//
//   interactive  Viewer implements hue-term's App. Each keypress flows
//                stdin → parser → on_event → field / palette update, then
//                paint → framebuffer → diff renderer → terminal.
//
//   print        One report on stdout and exit. Chosen by --print or
//                --hex, or automatically when stdout isn't a terminal.

mod app;
mod error;
mod field;
mod print;
mod view;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use hue_gen::{palette, parse_count};
use hue_term::color::ColorDepth;
use hue_term::event_loop::{EventLoop, LoopConfig};
use hue_term::terminal;
use tracing::Level;

use crate::app::Viewer;
use crate::error::Error;

// ─── Command Line ────────────────────────────────────────────────────────────

/// Generate visually distinct colors by spacing hues evenly around the HSV
/// color wheel.
#[derive(Debug, Parser)]
#[command(name = "huewheel", version, about)]
struct Cli {
    /// Number of colors to generate (1-100)
    #[arg(short = 'n', long, default_value = "8", allow_hyphen_values = true)]
    count: String,

    /// Most swatches per grid row
    #[arg(
        long,
        default_value_t = 8,
        value_parser = clap::value_parser!(u8).range(1..=16)
    )]
    columns: u8,

    /// How colors are written to the terminal
    #[arg(long, value_enum, default_value_t = ColorMode::TrueColor)]
    color: ColorMode,

    /// Print the report to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Print only the hex codes, one per line
    #[arg(long)]
    hex: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Most verbose log level written to --log-file
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    /// 24-bit color
    #[value(name = "truecolor")]
    TrueColor,
    /// Nearest xterm-256 palette entry
    #[value(name = "ansi256")]
    Ansi256,
    /// No color escapes at all
    #[value(name = "none")]
    Mono,
}

impl ColorMode {
    const fn depth(self) -> ColorDepth {
        match self {
            Self::TrueColor => ColorDepth::TrueColor,
            Self::Ansi256 => ColorDepth::Ansi256,
            Self::Mono => ColorDepth::Mono,
        }
    }
}

impl Cli {
    /// Print mode unless the viewer was asked for and can actually run.
    const fn print_mode(&self, stdout_is_tty: bool) -> bool {
        self.print || self.hex || !stdout_is_tty
    }
}

// ─── Logging ─────────────────────────────────────────────────────────────────

/// Log to `path` if given. Without a log file nothing is installed: the
/// viewer owns the screen, so there is nowhere else to write.
fn init_logging(path: Option<&Path>, level: Level) -> Result<(), Error> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.to_owned(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<(), Error> {
    init_logging(cli.log_file.as_deref(), cli.log_level)?;

    let count = parse_count(&cli.count)?;
    let stdout_is_tty = terminal::stdout_is_tty();
    let columns = usize::from(cli.columns);

    if cli.print_mode(stdout_is_tty) {
        // Piped output gets no escapes unless a color mode was asked for.
        let depth = if stdout_is_tty || cli.color != ColorMode::TrueColor {
            cli.color.depth()
        } else {
            ColorDepth::Mono
        };
        tracing::debug!(count, hex = cli.hex, ?depth, "print mode");

        let colors = palette(count);
        let mut out = io::stdout().lock();
        if cli.hex {
            print::write_hex(&mut out, &colors)?;
        } else {
            print::write_report(&mut out, &colors, depth)?;
        }
        return Ok(());
    }

    let depth = cli.color.depth();
    tracing::debug!(count, columns, ?depth, "starting viewer");
    let mut viewer = Viewer::new(count, columns, !depth.has_color());
    let config = LoopConfig {
        depth,
        ..LoopConfig::default()
    };
    EventLoop::new(config).run(&mut viewer)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("huewheel: {e}");
            ExitCode::FAILURE
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hue_gen::layout::DEFAULT_MAX_COLUMNS;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("huewheel").chain(args.iter().copied())).unwrap()
    }

    // ── Arguments ───────────────────────────────────────────────

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.count, "8");
        assert_eq!(usize::from(cli.columns), DEFAULT_MAX_COLUMNS);
        assert_eq!(cli.color, ColorMode::TrueColor);
        assert!(!cli.print && !cli.hex);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, Level::INFO);
    }

    #[test]
    fn all_flags() {
        let cli = parse(&[
            "-n", "12", "--columns", "4", "--color", "ansi256", "--print", "--log-file",
            "/tmp/hw.log", "--log-level", "debug",
        ]);
        assert_eq!(cli.count, "12");
        assert_eq!(cli.columns, 4);
        assert_eq!(cli.color, ColorMode::Ansi256);
        assert!(cli.print);
        assert_eq!(cli.log_file.as_deref(), Some(Path::new("/tmp/hw.log")));
        assert_eq!(cli.log_level, Level::DEBUG);
    }

    #[test]
    fn color_mode_names() {
        assert_eq!(parse(&["--color", "truecolor"]).color, ColorMode::TrueColor);
        assert_eq!(parse(&["--color", "none"]).color, ColorMode::Mono);
    }

    #[test]
    fn columns_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["huewheel", "--columns", "0"]).is_err());
        assert!(Cli::try_parse_from(["huewheel", "--columns", "17"]).is_err());
    }

    #[test]
    fn negative_count_reaches_validation() {
        let cli = parse(&["-n", "-3"]);
        assert_eq!(cli.count, "-3");
        assert!(matches!(run(&cli), Err(Error::Count(_))));
    }

    #[test]
    fn bad_count_is_an_error() {
        let cli = parse(&["--count", "lots", "--print"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "invalid --count: Please enter a valid integer");
    }

    // ── Mode selection ──────────────────────────────────────────

    #[test]
    fn print_mode_selection() {
        assert!(!parse(&[]).print_mode(true));
        assert!(parse(&[]).print_mode(false));
        assert!(parse(&["--print"]).print_mode(true));
        assert!(parse(&["--hex"]).print_mode(true));
    }

    #[test]
    fn color_mode_depths() {
        assert_eq!(ColorMode::TrueColor.depth(), ColorDepth::TrueColor);
        assert_eq!(ColorMode::Ansi256.depth(), ColorDepth::Ansi256);
        assert_eq!(ColorMode::Mono.depth(), ColorDepth::Mono);
    }
}
