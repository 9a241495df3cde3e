use crate::error::Result;

use super::DocumentFormatter;
use super::svg::Document;

/// Dumps the primitive tree as pretty-printed JSON.
pub struct JsonFormatter;

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        let mut output = serde_json::to_string_pretty(document)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
