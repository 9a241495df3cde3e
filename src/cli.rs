use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "svgchart")]
#[command(author, version, about = "Create charts from delimited text as SVG")]
#[command(long_about = "Reads one item per line (counted) or `name<delim>value` pairs \
    (summed), where <delim> is one of `,` `:` `;` or whitespace, and writes an SVG chart.\n\n\
    Chart types: (l)ine, (h)ist(ogram), (p)ie, (b)ar\n\n\
    Exit codes:\n  \
    0 - Chart written\n  \
    1 - Input or layout error\n  \
    2 - Configuration or usage error")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Chart type: line, histogram, pie or bar (abbreviations l, h, hist, p, b)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub chart_type: Option<String>,

    /// Chart width [default: 600]
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Chart height [default: 800]
    #[arg(short = 'h', long)]
    pub height: Option<f64>,

    /// Top margin
    #[arg(long, value_name = "N")]
    pub margin_top: Option<f64>,

    /// Bottom margin (bar labels are drawn here)
    #[arg(long, value_name = "N")]
    pub margin_bottom: Option<f64>,

    /// Left margin
    #[arg(long, value_name = "N")]
    pub margin_left: Option<f64>,

    /// Right margin
    #[arg(long, value_name = "N")]
    pub margin_right: Option<f64>,

    /// CSS stylesheet referenced by the chart [default: svgchart.css]
    #[arg(short = 'c', long)]
    pub stylesheet: Option<String>,

    /// Input file, `-` for stdin
    #[arg(short, long = "input-file", default_value = "-", value_name = "PATH")]
    pub input_file: PathBuf,

    /// Output file, `-` for stdout
    #[arg(short, long = "output-file", default_value = "-", value_name = "PATH")]
    pub output_file: PathBuf,

    /// Output format [possible values: svg, json]
    #[arg(short, long, default_value = "svg")]
    pub format: OutputFormat,

    /// Write output without indentation
    #[arg(long)]
    pub compact: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Print help
    #[arg(short = '?', long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

/// Whether a path argument means the standard stream.
#[must_use]
pub fn is_std_stream(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
