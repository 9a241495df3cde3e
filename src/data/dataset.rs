use serde::Serialize;

use crate::error::{Result, SvgChartError};

/// A named, ordered collection of same-arity numeric points.
///
/// Per-dimension extrema are tracked as points are added. They stay empty
/// until the first point fixes the arity of the set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataSet {
    name: Option<String>,
    points: Vec<Vec<f64>>,
    minima: Vec<f64>,
    maxima: Vec<f64>,
}

impl DataSet {
    /// Create an empty, unlabeled dataset.
    #[must_use]
    pub const fn unnamed() -> Self {
        Self {
            name: None,
            points: Vec::new(),
            minima: Vec::new(),
            maxima: Vec::new(),
        }
    }

    /// Create an empty dataset with a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::unnamed()
        }
    }

    /// Create a named dataset initialized with `points`.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if the points do not all share one arity.
    pub fn with_points(name: impl Into<String>, points: Vec<Vec<f64>>) -> Result<Self> {
        let mut data = Self::new(name);
        data.set_points(points)?;
        Ok(data)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Number of dimensions per point, `None` while the set is empty.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        self.points.first().map(Vec::len)
    }

    #[must_use]
    pub fn minima(&self) -> &[f64] {
        &self.minima
    }

    #[must_use]
    pub fn maxima(&self) -> &[f64] {
        &self.maxima
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<f64>> {
        self.points.iter()
    }

    /// Append a point, updating the running extrema.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if the point's dimension differs from the
    /// points already in the set.
    pub fn push_point(&mut self, point: impl Into<Vec<f64>>) -> Result<()> {
        let point = point.into();
        self.check_arity(&point)?;
        self.track_extrema(&point);
        self.points.push(point);
        Ok(())
    }

    /// Replace every point and recompute the extrema from scratch.
    ///
    /// The set is left unchanged when the new points are rejected.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if the points do not all share one arity.
    pub fn set_points(&mut self, points: Vec<Vec<f64>>) -> Result<()> {
        if let Some(expected) = points.first().map(Vec::len)
            && let Some(bad) = points.iter().find(|p| p.len() != expected)
        {
            return Err(SvgChartError::ArityMismatch {
                expected,
                actual: bad.len(),
            });
        }

        self.minima.clear();
        self.maxima.clear();
        for point in &points {
            self.track_extrema(point);
        }
        self.points = points;
        Ok(())
    }

    fn check_arity(&self, point: &[f64]) -> Result<()> {
        match self.arity() {
            Some(expected) if expected != point.len() => Err(SvgChartError::ArityMismatch {
                expected,
                actual: point.len(),
            }),
            _ => Ok(()),
        }
    }

    fn track_extrema(&mut self, point: &[f64]) {
        if self.minima.is_empty() {
            self.minima = point.to_vec();
            self.maxima = point.to_vec();
            return;
        }
        for (i, &v) in point.iter().enumerate() {
            self.minima[i] = self.minima[i].min(v);
            self.maxima[i] = self.maxima[i].max(v);
        }
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a Vec<f64>;
    type IntoIter = std::slice::Iter<'a, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
