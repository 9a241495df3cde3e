//! SVG document serialization.

use std::fmt::Write;

use super::element::{Document, SvgElement};
use super::format::{format_coord, xml_escape};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Builder for a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    stylesheet: String,
    indent: bool,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stylesheet: String::new(),
            indent: true,
            elements: Vec::new(),
        }
    }

    /// Reference an external CSS stylesheet. Empty means no reference.
    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    #[must_use]
    pub const fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{XML_DECLARATION}");
        if !self.stylesheet.is_empty() {
            let _ = writeln!(
                output,
                r#"<?xml-stylesheet href="{}" type="text/css"?>"#,
                xml_escape(&self.stylesheet)
            );
        }
        let _ = writeln!(output, "{SVG_DOCTYPE}");
        let _ = writeln!(
            output,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{}" height="{}">"#,
            format_coord(self.width),
            format_coord(self.height)
        );

        for element in self.elements {
            for line in element.lines() {
                if self.indent {
                    let _ = writeln!(output, "    {line}");
                } else {
                    let _ = writeln!(output, "{}", line.trim_start());
                }
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

/// Serialize a laid-out document.
#[must_use]
pub fn render_document(document: &Document, indent: bool) -> String {
    SvgBuilder::new(document.width, document.height)
        .with_stylesheet(document.stylesheet.as_str())
        .with_indent(indent)
        .push_element(&document.canvas)
        .build()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
