//! PlantUML class-diagram output.
//!
//! ```text
//! @startuml
//! skinparam classAttributeIconSize 0
//! skinparam linetype ortho
//!
//! class Animal {
//!   +species
//!   --
//!   +speak()
//! }
//!
//! Animal <|-- Dog
//! @enduml
//! ```
//!
//! Members are sorted lexicographically on their rendered label, so with
//! ASCII ordering protected (`#`) members come before public (`+`) ones and
//! private (`-`) ones last.

use anyhow::Result;
use std::fs;
use std::path::Path;

use super::Rendered;
use crate::core::{ClassRecord, DiagramModel};

const HEADER: &[&str] = &[
    "@startuml",
    "skinparam classAttributeIconSize 0",
    "skinparam linetype ortho",
];
const FOOTER: &str = "@enduml";
const INDENT: &str = "  ";
const SEPARATOR: &str = "--";

pub struct PlantUmlFormatter {
    /// Emit the fixed `skinparam` directives after `@startuml`
    include_skinparams: bool,
}

impl PlantUmlFormatter {
    pub fn new() -> Self {
        Self {
            include_skinparams: true,
        }
    }

    pub fn with_skinparams(mut self, include: bool) -> Self {
        self.include_skinparams = include;
        self
    }

    /// Writes the diagram to `output_path`. Returns `false` without touching
    /// the filesystem when there is nothing to render.
    pub fn format_to_file(&self, model: &DiagramModel, output_path: &Path) -> Result<bool> {
        match self.render(model) {
            Rendered::Diagram(text) => {
                fs::write(output_path, text)?;
                Ok(true)
            }
            Rendered::Empty => Ok(false),
        }
    }

    pub fn render(&self, model: &DiagramModel) -> Rendered {
        if model.is_empty() {
            return Rendered::Empty;
        }

        let mut out = String::new();
        out.push_str(HEADER[0]);
        out.push('\n');
        if self.include_skinparams {
            for directive in &HEADER[1..] {
                out.push_str(directive);
                out.push('\n');
            }
        }
        out.push('\n');

        let blocks: Vec<String> = model.classes().iter().map(class_block).collect();
        out.push_str(&blocks.join("\n\n"));
        out.push('\n');

        let edges = model.edges();
        if !edges.is_empty() {
            out.push('\n');
            for edge in &edges {
                out.push_str(&format!("{} <|-- {}\n", edge.base, edge.derived));
            }
        }

        out.push_str(FOOTER);
        out.push('\n');
        Rendered::Diagram(out)
    }
}

impl Default for PlantUmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn class_block(class: &ClassRecord) -> String {
    let attributes = class.sorted_attribute_labels();
    let methods = class.sorted_method_labels();

    let mut lines = vec![format!("class {} {{", class.name())];
    lines.extend(attributes.iter().map(|label| format!("{INDENT}{label}")));
    if !attributes.is_empty() && !methods.is_empty() {
        lines.push(format!("{INDENT}{SEPARATOR}"));
    }
    lines.extend(methods.iter().map(|label| format!("{INDENT}{label}()")));
    lines.push("}".to_string());
    lines.join("\n")
}
