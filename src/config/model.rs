use serde::{Deserialize, Serialize};

use crate::chart::{ChartGeometry, ChartKind, DEFAULT_HEIGHT, DEFAULT_WIDTH, Margins};
use crate::error::Result;

/// Stylesheet referenced when none is configured.
pub const DEFAULT_STYLESHEET: &str = "svgchart.css";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Chart settings [chart].
    #[serde(default)]
    pub chart: ChartSettings,
}

/// Chart type, dimensions, margins and stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSettings {
    /// Chart type selector (e.g. "bar", "h"). Resolved with [`ChartKind`] parsing.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,

    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// External CSS stylesheet referenced by the document.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,

    /// Margins [chart.margins].
    #[serde(default)]
    pub margins: Margins,
}

const fn default_width() -> f64 {
    DEFAULT_WIDTH
}

const fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_stylesheet() -> String {
    DEFAULT_STYLESHEET.to_string()
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            chart_type: None,
            width: default_width(),
            height: default_height(),
            stylesheet: default_stylesheet(),
            margins: Margins::default(),
        }
    }
}

impl ChartSettings {
    #[must_use]
    pub const fn geometry(&self) -> ChartGeometry {
        ChartGeometry::new(self.width, self.height).with_margins(self.margins)
    }

    /// Resolve the configured chart type, if any.
    ///
    /// # Errors
    /// Returns `UnknownChartType` if the selector matches no chart type.
    pub fn chart_kind(&self) -> Result<Option<ChartKind>> {
        self.chart_type
            .as_deref()
            .map(str::parse::<ChartKind>)
            .transpose()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
