//! Primitive tree produced by chart layout: rectangles and text labels
//! grouped under a canvas, wrapped in a sized document.

use std::fmt::Write;

use serde::Serialize;

use super::format::{format_coord, xml_escape};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: String,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" class="{}"/>"#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.width),
            format_coord(self.height),
            xml_escape(&self.class)
        )
    }
}

/// Text label anchored at a point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub class: String,
    pub content: String,
}

impl SvgElement for Text {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" class="{}">{}</text>"#,
            format_coord(self.x),
            format_coord(self.y),
            xml_escape(&self.class),
            xml_escape(&self.content)
        )
    }
}

/// A drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Rect(Rect),
    Text(Text),
}

impl SvgElement for Primitive {
    fn render(&self) -> String {
        match self {
            Self::Rect(rect) => rect.render(),
            Self::Text(text) => text.render(),
        }
    }
}

/// Named group of primitives (`<g id="...">`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: String,
    pub children: Vec<Primitive>,
}

impl Group {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.children.push(primitive);
    }

    #[must_use]
    pub fn rects(&self) -> Vec<&Rect> {
        self.children
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect(rect) => Some(rect),
                Primitive::Text(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&Text> {
        self.children
            .iter()
            .filter_map(|p| match p {
                Primitive::Text(text) => Some(text),
                Primitive::Rect(_) => None,
            })
            .collect()
    }
}

impl SvgElement for Group {
    fn render(&self) -> String {
        let id = xml_escape(&self.id);
        if self.children.is_empty() {
            return format!(r#"<g id="{id}"/>"#);
        }

        let mut output = String::new();
        let _ = writeln!(output, r#"<g id="{id}">"#);
        for child in &self.children {
            let _ = writeln!(output, "    {}", child.render());
        }
        output.push_str("</g>");
        output
    }
}

/// Root of the primitive tree: document size, stylesheet and the canvas group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub stylesheet: String,
    pub canvas: Group,
}

/// Id of the group every chart draws into.
pub const CANVAS_ID: &str = "canvas";

impl Document {
    #[must_use]
    pub fn new(width: f64, height: f64, stylesheet: impl Into<String>) -> Self {
        Self {
            width,
            height,
            stylesheet: stylesheet.into(),
            canvas: Group::new(CANVAS_ID),
        }
    }

    /// Number of primitives drawn on the canvas.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.canvas.children.len()
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
