//! SVG primitive tree and document serialization.
//!
//! Chart layouts produce a [`Document`]: a sized root holding one `canvas`
//! group of rectangles and text labels. [`render_document`] turns it into a
//! standalone SVG 1.1 file that references an external stylesheet.

mod builder;
mod element;
mod format;

pub use builder::{SvgBuilder, render_document};
pub use element::{CANVAS_ID, Document, Group, Primitive, Rect, SvgElement, Text};
pub use format::{format_coord, xml_escape};
