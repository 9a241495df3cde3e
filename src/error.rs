use std::path::PathBuf;

use thiserror::Error;

use crate::chart::{ChartKind, ChartState};

#[derive(Error, Debug)]
pub enum SvgChartError {
    /// A line whose field count or value does not fit the classified record shape.
    #[error("{reason} '{line}'")]
    MalformedRecord {
        reason: &'static str,
        line: String,
        line_number: usize,
    },

    #[error("3-column histogram input is UNIMPLEMENTED")]
    UnsupportedShape,

    #[error("chart has no datasets to lay out")]
    EmptyDataset,

    #[error("chart has no data")]
    UnconfiguredChart,

    #[error("chart is {actual}, expected {expected}")]
    InvalidState {
        expected: ChartState,
        actual: ChartState,
    },

    #[error("{0} charts are UNIMPLEMENTED")]
    Unimplemented(ChartKind),

    #[error("unknown chart type: '{0}'")]
    UnknownChartType(String),

    #[error("Invalid chart geometry: {0}")]
    InvalidGeometry(String),

    #[error("point has {actual} dimensions, dataset expects {expected}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("dataset '{0}' holds a non-finite value")]
    NonFiniteValue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SvgChartError {
    /// Short category shown by the error reporter.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } | Self::UnsupportedShape => "Input",
            Self::EmptyDataset | Self::UnconfiguredChart | Self::InvalidState { .. } => "Layout",
            Self::Unimplemented(_) | Self::UnknownChartType(_) => "Chart type",
            Self::InvalidGeometry(_) => "Geometry",
            Self::ArityMismatch { .. } | Self::NonFiniteValue(_) => "Data",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Optional help line for the error reporter.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MalformedRecord { .. } => Some(
                "Each line must be `name` or `name<delim>value`, with delimiters from `,:;` or whitespace",
            ),
            Self::UnsupportedShape => Some("Use one- or two-column input"),
            Self::Unimplemented(_) | Self::UnknownChartType(_) => {
                Some("Supported chart types are `bar` and `histogram`")
            }
            Self::InvalidGeometry(_) => {
                Some("Margins must fit within the chart width and height")
            }
            _ => None,
        }
    }

    /// 1-based input line of a malformed record.
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// Underlying I/O failure of a file read or write, which the message
    /// itself does not include.
    #[must_use]
    pub const fn io_cause(&self) -> Option<&std::io::Error> {
        match self {
            Self::FileRead { source, .. } | Self::FileWrite { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether the error stems from configuration or usage rather than from the data.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::TomlParse(_)
                | Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::InvalidGeometry(_)
                | Self::UnknownChartType(_)
                | Self::Unimplemented(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SvgChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
