//! Bar and histogram layout: maps aggregated datasets onto plot geometry.
//!
//! Both layouts share the extent pass, a zero-anchored vertical scale and
//! equal-width slots in dataset order. They differ in where the rectangle
//! bottom is anchored, and only the bar chart draws labels.

use tracing::debug;

use super::geometry::ChartGeometry;
use super::kind::ChartKind;
use crate::data::DataSet;
use crate::error::{Result, SvgChartError};
use crate::output::svg::{Document, Primitive, Rect, Text};

/// Class applied to bar labels.
pub const LABEL_CLASS: &str = "xlabel";

/// Global extent of the first dimension across datasets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Fold the per-dataset extrema of dimension 0. Empty datasets are skipped.
    #[must_use]
    pub fn of(data: &[DataSet]) -> Self {
        data.iter().fold(
            Self {
                min: f64::MAX,
                max: f64::MIN,
            },
            |extent, set| match (set.minima().first(), set.maxima().first()) {
                (Some(&min), Some(&max)) => Self {
                    min: extent.min.min(min),
                    max: extent.max.max(max),
                },
                _ => extent,
            },
        )
    }

    /// Pixels per unit so that `max` fills `plot_height`.
    ///
    /// Bars are anchored at zero, not at `min`. A non-positive maximum yields
    /// a zero scale.
    #[must_use]
    pub fn vertical_scale(&self, plot_height: f64) -> f64 {
        if self.max > 0.0 {
            plot_height / self.max
        } else {
            0.0
        }
    }
}

/// Horizontal share of the plot given to one dataset.
#[derive(Debug, Clone, PartialEq)]
struct Slot<'a> {
    x: f64,
    width: f64,
    bar_height: f64,
    data: &'a DataSet,
}

fn slots<'a>(geometry: &ChartGeometry, data: &'a [DataSet]) -> Result<Vec<Slot<'a>>> {
    if data.is_empty() {
        return Err(SvgChartError::EmptyDataset);
    }
    if let Some(set) = data
        .iter()
        .find(|set| set.maxima().iter().chain(set.minima()).any(|v| !v.is_finite()))
    {
        return Err(SvgChartError::NonFiniteValue(
            set.name().unwrap_or_default().to_string(),
        ));
    }

    let extent = Extent::of(data);
    let plot_height = geometry.plot_height();
    let scale = extent.vertical_scale(plot_height);
    #[allow(clippy::cast_precision_loss)] // dataset counts stay far below 2^52
    let slot_width = geometry.plot_width() / data.len() as f64;
    debug!(
        datasets = data.len(),
        min = extent.min,
        max = extent.max,
        scale,
        slot_width,
        "computed layout scale"
    );

    Ok(data
        .iter()
        .enumerate()
        .map(|(i, set)| {
            #[allow(clippy::cast_precision_loss)]
            let x = slot_width.mul_add(i as f64, geometry.plot_origin_x());
            Slot {
                x,
                width: slot_width,
                bar_height: leading_value(set) * scale,
                data: set,
            }
        })
        .collect())
}

fn leading_value(set: &DataSet) -> f64 {
    set.points()
        .first()
        .and_then(|p| p.first())
        .copied()
        .unwrap_or(0.0)
}

/// Style class for a dataset's rectangle. The underscore prefix keeps names
/// that start with a digit usable as CSS class selectors.
#[must_use]
pub fn bar_class(set: &DataSet) -> String {
    format!("_{}", set.name().unwrap_or_default())
}

fn rect(slot: &Slot<'_>, y: f64) -> Primitive {
    Primitive::Rect(Rect {
        x: slot.x,
        y,
        width: slot.width,
        height: slot.bar_height,
        class: bar_class(slot.data),
    })
}

/// Histogram: rectangle bottoms sit at `plot_height - plot_origin_y`.
///
/// # Errors
/// Returns `EmptyDataset` when `data` is empty.
pub fn layout_histogram(
    geometry: &ChartGeometry,
    data: &[DataSet],
    document: &mut Document,
) -> Result<()> {
    let baseline = geometry.plot_height() - geometry.plot_origin_y();
    for slot in slots(geometry, data)? {
        document
            .canvas
            .push(rect(&slot, baseline - slot.bar_height));
    }
    Ok(())
}

/// Bar chart: rectangle bottoms sit at `plot_height + plot_origin_y`, with a
/// label centered in the bottom margin band when that band exists.
///
/// # Errors
/// Returns `EmptyDataset` when `data` is empty.
pub fn layout_bar(geometry: &ChartGeometry, data: &[DataSet], document: &mut Document) -> Result<()> {
    let baseline = geometry.plot_height() + geometry.plot_origin_y();
    let bottom = geometry.margins.bottom;
    for slot in slots(geometry, data)? {
        document
            .canvas
            .push(rect(&slot, baseline - slot.bar_height));

        if bottom > 0.0 {
            document.canvas.push(Primitive::Text(Text {
                x: slot.x + slot.width / 2.0,
                y: geometry.height - bottom / 2.0,
                class: LABEL_CLASS.to_string(),
                content: slot.data.name().unwrap_or_default().to_string(),
            }));
        }
    }
    Ok(())
}

/// Lay out `data` for `kind` into a new document.
///
/// # Errors
/// Returns `Unimplemented` for line and pie charts, `EmptyDataset` when
/// `data` is empty and `NonFiniteValue` when a dataset holds NaN or an
/// infinity. Nothing is produced on error.
pub fn layout(
    kind: ChartKind,
    geometry: &ChartGeometry,
    data: &[DataSet],
    stylesheet: &str,
) -> Result<Document> {
    let mut document = Document::new(geometry.width, geometry.height, stylesheet);
    match kind {
        ChartKind::Histogram => layout_histogram(geometry, data, &mut document)?,
        ChartKind::Bar => layout_bar(geometry, data, &mut document)?,
        ChartKind::Line | ChartKind::Pie => return Err(SvgChartError::Unimplemented(kind)),
    }
    Ok(document)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
