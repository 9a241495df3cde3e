use std::io::BufRead;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::tokenizer::{Shape, Tokenizer};
use crate::data::DataSet;
use crate::error::{Result, SvgChartError};

/// Output of a successful aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    /// Shape chosen from the first non-empty line; `None` for empty input.
    pub shape: Option<Shape>,
    /// One single-point dataset per distinct key, in first-seen order.
    pub y_data: Vec<DataSet>,
    /// X values for shapes that carry them. Always `None` for one- and two-column input.
    pub x_data: Option<Vec<[f64; 1]>>,
    /// Number of lines consumed, blank lines included.
    pub lines_read: usize,
}

/// Counts single-column items and sums two-column values per key.
///
/// Single- and two-column lines may be mixed: both are treated as partial
/// sums for the same key.
#[derive(Default)]
pub struct Aggregator {
    tokenizer: Tokenizer,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `reader` to the end and aggregate every record.
    ///
    /// # Errors
    /// Returns `UnsupportedShape` for three-column input, `MalformedRecord`
    /// for any line that does not fit the record shape, or `Io` if reading
    /// fails. No partial aggregation is returned.
    pub fn aggregate<R: BufRead>(&self, reader: R) -> Result<Aggregation> {
        let mut shape = None;
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        let mut lines_read = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            lines_read = line_number;
            let fields = self.tokenizer.split(&line);

            if shape.is_none() {
                if fields.is_empty() {
                    continue;
                }
                let first = Self::classify_first(&line, fields.len(), line_number)?;
                debug!(shape = %first, line_number, "classified input");
                shape = Some(first);
            }

            let (key, increment) = self.record(&line, &fields, line_number)?;
            trace!(key, increment, line_number, "record");
            let total = totals.entry(key.to_string()).or_insert(0.0);
            *total += increment;
            if !total.is_finite() {
                return Err(SvgChartError::MalformedRecord {
                    reason: "value overflows the running total in line",
                    line,
                    line_number,
                });
            }
        }

        debug!(lines_read, keys = totals.len(), "aggregated input");

        let y_data = totals
            .into_iter()
            .map(|(key, total)| DataSet::with_points(key, vec![vec![total]]))
            .collect::<Result<Vec<_>>>()?;

        Ok(Aggregation {
            shape,
            y_data,
            x_data: None,
            lines_read,
        })
    }

    fn classify_first(line: &str, field_count: usize, line_number: usize) -> Result<Shape> {
        match Shape::from_field_count(field_count) {
            shape @ (Shape::SingleColumn | Shape::TwoColumn) => Ok(shape),
            Shape::ThreeColumn => Err(SvgChartError::UnsupportedShape),
            Shape::Malformed => Err(SvgChartError::MalformedRecord {
                reason: "parse error at line",
                line: line.to_string(),
                line_number,
            }),
        }
    }

    fn record<'a>(
        &self,
        line: &str,
        fields: &[&'a str],
        line_number: usize,
    ) -> Result<(&'a str, f64)> {
        match *fields {
            [key] => Ok((key, 1.0)),
            [key, value] => self
                .tokenizer
                .parse_number(value)
                .map(|v| (key, v))
                .ok_or_else(|| SvgChartError::MalformedRecord {
                    reason: "invalid numeric value in line",
                    line: line.to_string(),
                    line_number,
                }),
            _ => Err(SvgChartError::MalformedRecord {
                reason: "unexpected data value",
                line: line.to_string(),
                line_number,
            }),
        }
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
