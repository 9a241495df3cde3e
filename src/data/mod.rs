//! Numeric data model shared by the aggregators and the chart layouts.

mod dataset;

pub use dataset::DataSet;
