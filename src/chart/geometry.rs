use serde::{Deserialize, Serialize};

use crate::error::{Result, SvgChartError};

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;

/// Space reserved around the plot area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margins {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Chart dimensions and margins, plus the plot area derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl ChartGeometry {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    #[must_use]
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Check that the plot area is well defined.
    ///
    /// # Errors
    /// Returns `InvalidGeometry` if a dimension is not positive, a margin is
    /// negative, any value is not finite, or the margins exceed the width or height.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SvgChartError::InvalidGeometry(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let m = &self.margins;
        for (name, value) in [
            ("top margin", m.top),
            ("bottom margin", m.bottom),
            ("left margin", m.left),
            ("right margin", m.right),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SvgChartError::InvalidGeometry(format!(
                    "{name} must be zero or positive, got {value}"
                )));
            }
        }

        if m.left + m.right > self.width {
            return Err(SvgChartError::InvalidGeometry(format!(
                "left and right margins ({} + {}) exceed the width {}",
                m.left, m.right, self.width
            )));
        }
        if m.top + m.bottom > self.height {
            return Err(SvgChartError::InvalidGeometry(format!(
                "top and bottom margins ({} + {}) exceed the height {}",
                m.top, m.bottom, self.height
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - (self.margins.left + self.margins.right)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height - (self.margins.top + self.margins.bottom)
    }

    #[must_use]
    pub const fn plot_origin_x(&self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub const fn plot_origin_y(&self) -> f64 {
        self.margins.top
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
