use std::fmt;
use std::str::FromStr;

use crate::error::SvgChartError;

/// Chart variants. Only `Histogram` and `Bar` have a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Histogram,
    Pie,
    Bar,
}

impl ChartKind {
    /// Whether a layout algorithm exists for this variant.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::Histogram | Self::Bar)
    }
}

impl FromStr for ChartKind {
    type Err = SvgChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" | "line" => Ok(Self::Line),
            "h" | "hist" | "histogram" => Ok(Self::Histogram),
            "p" | "pie" => Ok(Self::Pie),
            "b" | "bar" => Ok(Self::Bar),
            _ => Err(SvgChartError::UnknownChartType(s.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "line"),
            Self::Histogram => write!(f, "histogram"),
            Self::Pie => write!(f, "pie"),
            Self::Bar => write!(f, "bar"),
        }
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
