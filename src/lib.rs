pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod parse;
pub mod telemetry;

pub use error::{Result, SvgChartError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
