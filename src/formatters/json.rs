use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::Path;

use super::Rendered;
use crate::core::DiagramModel;

/// JSON view of the structural model for programmatic consumers.
///
/// Member labels match the PlantUML member lines: `+name` for attributes,
/// `+name()` for methods.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_file(&self, model: &DiagramModel, output_path: &Path) -> Result<bool> {
        match self.render(model)? {
            Rendered::Diagram(text) => {
                fs::write(output_path, text)?;
                Ok(true)
            }
            Rendered::Empty => Ok(false),
        }
    }

    pub fn render(&self, model: &DiagramModel) -> Result<Rendered> {
        if model.is_empty() {
            return Ok(Rendered::Empty);
        }

        let classes: Vec<_> = model
            .classes()
            .iter()
            .map(|class| {
                let methods: Vec<String> = class
                    .sorted_method_labels()
                    .into_iter()
                    .map(|label| format!("{label}()"))
                    .collect();
                json!({
                    "name": class.name(),
                    "attributes": class.sorted_attribute_labels(),
                    "methods": methods,
                    "bases": class.bases(),
                })
            })
            .collect();

        let output = json!({
            "meta": {
                "classes": model.len(),
                "edges": model.edges().len(),
            },
            "classes": classes,
            "edges": model.edges(),
        });

        let text = if self.pretty {
            serde_json::to_string_pretty(&output)?
        } else {
            serde_json::to_string(&output)?
        };
        Ok(Rendered::Diagram(text))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
