//! Error reporting on stderr.
//!
//! ```text
//! ✖ Input: unexpected data value 'a,b,c'
//!   at: line 4
//!   help: Each line must be ...
//! ```

use std::io::{self, IsTerminal, Write};

use super::ColorMode;
use crate::error::SvgChartError;

/// ANSI sequences, or empty strings when color is off.
#[derive(Debug, Clone, Copy)]
struct Palette {
    headline: &'static str,
    label: &'static str,
    reset: &'static str,
}

impl Palette {
    const PLAIN: Self = Self {
        headline: "",
        label: "",
        reset: "",
    };

    const ANSI: Self = Self {
        headline: "\x1b[1m\x1b[31m",
        label: "\x1b[36m",
        reset: "\x1b[0m",
    };
}

/// Writes [`SvgChartError`]s for humans.
#[derive(Debug)]
pub struct ErrorOutput {
    palette: Palette,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let colored = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal(),
        };
        Self::with_colors(colored)
    }

    #[must_use]
    pub const fn with_colors(colored: bool) -> Self {
        Self {
            palette: if colored { Palette::ANSI } else { Palette::PLAIN },
        }
    }

    #[must_use]
    pub const fn is_colored(&self) -> bool {
        !self.palette.reset.is_empty()
    }

    /// Print `error` to stderr.
    pub fn report(&self, error: &SvgChartError) {
        let mut stderr = io::stderr().lock();
        // Nothing sensible is left to do if stderr itself is gone.
        let _ = self.write_report(&mut stderr, error);
    }

    /// Write the headline, then any line number, I/O cause and help text.
    ///
    /// # Errors
    /// Returns the writer's I/O error.
    pub fn write_report<W: Write>(&self, w: &mut W, error: &SvgChartError) -> io::Result<()> {
        let Palette {
            headline,
            label,
            reset,
        } = self.palette;

        writeln!(w, "{headline}✖ {}:{reset} {error}", error.error_type())?;
        if let Some(line) = error.line_number() {
            writeln!(w, "  {label}at:{reset} line {line}")?;
        }
        if let Some(cause) = error.io_cause() {
            writeln!(w, "  {label}cause:{reset} {cause}")?;
        }
        if let Some(help) = error.suggestion() {
            writeln!(w, "  {label}help:{reset} {help}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
