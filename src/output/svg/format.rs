//! Text formatting helpers for SVG serialization.

/// Escape XML special characters in attribute values and text content.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate for an SVG attribute.
///
/// Layouts reject non-finite data, so only hand-built documents can carry
/// `NaN` or infinities here; they are written as `0` to keep the markup valid.
#[must_use]
pub fn format_coord(value: f64) -> String {
    if value.is_finite() {
        // Adding positive zero turns -0.0 into 0.0.
        format!("{}", value + 0.0)
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
