//! Input tokenizing, record classification and per-key aggregation.

mod aggregate;
mod tokenizer;

pub use aggregate::{Aggregation, Aggregator};
pub use tokenizer::{DELIMITERS, NUMBER, Shape, Tokenizer};
