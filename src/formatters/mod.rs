pub mod json;
pub mod plantuml;

pub use json::JsonFormatter;
pub use plantuml::PlantUmlFormatter;

/// Formatter output. `Empty` means the model had no classes; it is a normal
/// outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Diagram(String),
    Empty,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        matches!(self, Rendered::Empty)
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Rendered::Diagram(text) => Some(text),
            Rendered::Empty => None,
        }
    }
}
