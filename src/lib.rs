//! # PYCLASSGRAM
//!
//! Static class-diagram extraction from Python source.
//!
//! Source text is parsed with tree-sitter, every class declaration (nested
//! ones included) is turned into a [`ClassRecord`], and the resulting
//! [`DiagramModel`] is rendered as PlantUML.
//!
//! ```no_run
//! use pyclassgram::{extract, render, Extraction, Rendered};
//!
//! let source = "class Animal:\n    species = '?'\n    def speak(self): pass\n";
//! if let Extraction::Classes(model) = extract(source).unwrap() {
//!     if let Rendered::Diagram(text) = render(&model) {
//!         println!("{text}");
//!     }
//! }
//! ```
//!
//! ## Output Formats
//!
//! - **PlantUML**: class blocks, members with visibility symbols, inheritance arrows
//! - **JSON**: the structural model for programmatic consumption

pub mod core;
pub mod export;
pub mod formatters;
pub mod logging;
pub mod parsers;

pub use crate::core::{ClassRecord, DiagramModel, Extraction, InheritanceEdge, Member, Visibility};
pub use formatters::Rendered;
pub use parsers::ParseError;

/// Extracts the class model from one Python source text.
pub fn extract(source: &str) -> Result<Extraction, ParseError> {
    parsers::python::PythonExtractor::new().extract(source)
}

/// Renders a model as PlantUML, or [`Rendered::Empty`] when it has no classes.
pub fn render(model: &DiagramModel) -> Rendered {
    formatters::PlantUmlFormatter::new().render(model)
}
