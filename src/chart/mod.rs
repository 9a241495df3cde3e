//! Charts: configuration, parsed data and layout, driven through a
//! one-way `Configured → Parsed → LaidOut` lifecycle.

mod geometry;
mod kind;
mod layout;

use std::fmt;
use std::io::BufRead;

use tracing::{info, warn};

pub use geometry::{ChartGeometry, DEFAULT_HEIGHT, DEFAULT_WIDTH, Margins};
pub use kind::ChartKind;
pub use layout::{Extent, LABEL_CLASS, bar_class, layout, layout_bar, layout_histogram};

use crate::data::DataSet;
use crate::error::{Result, SvgChartError};
use crate::output::svg::Document;
use crate::parse::Aggregator;

/// Lifecycle stage of a [`Chart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    /// Geometry set, no data.
    Configured,
    /// Data loaded; immutable from here on.
    Parsed,
    /// Primitive tree produced.
    LaidOut,
}

impl fmt::Display for ChartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured => write!(f, "configured"),
            Self::Parsed => write!(f, "parsed"),
            Self::LaidOut => write!(f, "laid out"),
        }
    }
}

#[derive(Debug)]
pub struct Chart {
    kind: ChartKind,
    geometry: ChartGeometry,
    stylesheet: String,
    state: ChartState,
    y_data: Vec<DataSet>,
    x_data: Option<Vec<[f64; 1]>>,
    document: Option<Document>,
}

impl Chart {
    /// Create a chart in the `Configured` state.
    ///
    /// # Errors
    /// Returns `InvalidGeometry` if the geometry leaves no well-defined plot area.
    pub fn new(
        kind: ChartKind,
        geometry: ChartGeometry,
        stylesheet: impl Into<String>,
    ) -> Result<Self> {
        geometry.validate()?;
        Ok(Self {
            kind,
            geometry,
            stylesheet: stylesheet.into(),
            state: ChartState::Configured,
            y_data: Vec::new(),
            x_data: None,
            document: None,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub const fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    #[must_use]
    pub const fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn y_data(&self) -> &[DataSet] {
        &self.y_data
    }

    #[must_use]
    pub fn x_data(&self) -> Option<&[[f64; 1]]> {
        self.x_data.as_deref()
    }

    /// The primitive tree, once laid out.
    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Read and aggregate the chart's input, moving to `Parsed`.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the chart is `Configured`, `Unimplemented`
    /// for line and pie charts, or any error of [`Aggregator::aggregate`].
    /// The chart stays `Configured` on error.
    pub fn parse_input<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.expect_state(ChartState::Configured)?;
        match self.kind {
            ChartKind::Histogram | ChartKind::Bar => {
                let aggregation = Aggregator::new().aggregate(reader)?;
                info!(
                    kind = %self.kind,
                    datasets = aggregation.y_data.len(),
                    lines = aggregation.lines_read,
                    "parsed input"
                );
                self.y_data = aggregation.y_data;
                self.x_data = aggregation.x_data;
            }
            ChartKind::Line | ChartKind::Pie => {
                return Err(SvgChartError::Unimplemented(self.kind));
            }
        }
        self.state = ChartState::Parsed;
        Ok(())
    }

    /// Load already aggregated datasets, moving to `Parsed`.
    ///
    /// # Errors
    /// Returns `InvalidState` unless the chart is `Configured`.
    pub fn load_data(&mut self, y_data: Vec<DataSet>) -> Result<()> {
        self.expect_state(ChartState::Configured)?;
        self.y_data = y_data;
        self.state = ChartState::Parsed;
        Ok(())
    }

    /// Lay out the parsed data, moving to `LaidOut`.
    ///
    /// Parsed input with no records yields a document with an empty canvas.
    ///
    /// # Errors
    /// Returns `UnconfiguredChart` before any data was loaded, `InvalidState`
    /// when already laid out, or any error of [`layout`].
    pub fn create_chart(&mut self) -> Result<&Document> {
        match self.state {
            ChartState::Configured => return Err(SvgChartError::UnconfiguredChart),
            ChartState::LaidOut => {
                return Err(SvgChartError::InvalidState {
                    expected: ChartState::Parsed,
                    actual: ChartState::LaidOut,
                });
            }
            ChartState::Parsed => {}
        }
        if !self.kind.is_implemented() {
            return Err(SvgChartError::Unimplemented(self.kind));
        }

        let document = if self.y_data.is_empty() {
            warn!(kind = %self.kind, "no data to chart, emitting an empty canvas");
            Document::new(self.geometry.width, self.geometry.height, self.stylesheet.as_str())
        } else {
            layout(self.kind, &self.geometry, &self.y_data, &self.stylesheet)?
        };

        info!(primitives = document.primitive_count(), "laid out chart");
        self.state = ChartState::LaidOut;
        Ok(self.document.insert(document))
    }

    fn expect_state(&self, expected: ChartState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SvgChartError::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
