mod error_output;
mod json;
pub mod svg;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;

use crate::error::Result;
use svg::Document;

/// Trait for serializing a laid-out chart into an output format.
pub trait DocumentFormatter {
    /// Format the document into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, document: &Document) -> Result<String>;
}

/// SVG serializer.
#[derive(Debug, Clone, Copy)]
pub struct SvgFormatter {
    pub indent: bool,
}

impl Default for SvgFormatter {
    fn default() -> Self {
        Self { indent: true }
    }
}

impl DocumentFormatter for SvgFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        Ok(svg::render_document(document, self.indent))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    /// Build the formatter for this format.
    #[must_use]
    pub fn formatter(self, indent: bool) -> Box<dyn DocumentFormatter> {
        match self {
            Self::Svg => Box::new(SvgFormatter { indent }),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color mode for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
