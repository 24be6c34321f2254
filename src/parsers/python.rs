use tracing::debug;
use tree_sitter::Node as TSNode;

use super::common::{node_text, SourceParser};
use super::ParseError;
use crate::core::{ClassRecord, DiagramModel, Extraction};

/// Python 2 statements the grammar still parses but Python 3 rejects.
const PYTHON2_STATEMENTS: &[&str] = &["print_statement", "exec_statement"];

/// Static extractor turning Python source into a class-diagram model.
///
/// Holds no state between calls, so a single value can be shared across
/// threads; each call builds its own parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, source: &str) -> Result<Extraction, ParseError> {
        let mut parser = SourceParser::new(tree_sitter_python::language())?
            .with_rejected_kinds(PYTHON2_STATEMENTS);
        let tree = parser.parse(source)?;
        let source_bytes = source.as_bytes();

        let model: DiagramModel = collect_class_nodes(&tree.root_node())
            .iter()
            .filter_map(|class_node| process_class(class_node, source_bytes))
            .collect();

        debug!(classes = model.len(), "extraction finished");
        Ok(Extraction::from_model(model))
    }
}

/// Every `class_definition` in the tree, pre-order: an enclosing class comes
/// before the classes nested in it, siblings in source order.
fn collect_class_nodes<'tree>(root: &TSNode<'tree>) -> Vec<TSNode<'tree>> {
    let mut classes = Vec::new();
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        if node.kind() == "class_definition" {
            classes.push(node);
        }
        let mut cursor = node.walk();
        let children: Vec<TSNode<'tree>> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    classes
}

fn process_class(class_node: &TSNode, source: &[u8]) -> Option<ClassRecord> {
    let name = class_node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source))
        .filter(|name| !name.is_empty())?;
    let mut record = ClassRecord::new(name);

    if let Some(superclasses) = class_node.child_by_field_name("superclasses") {
        let mut cursor = superclasses.walk();
        for arg in superclasses.named_children(&mut cursor) {
            match arg.kind() {
                "keyword_argument" | "comment" => {}
                _ => match base_reference(&arg, source) {
                    Some(base) => record.add_base(base),
                    None => debug!(
                        class = name,
                        base = node_text(&arg, source),
                        "skipping unsupported base reference"
                    ),
                },
            }
        }
    }

    if let Some(body) = class_node.child_by_field_name("body") {
        extract_members(&body, source, &mut record);
    }

    debug!(
        class = name,
        attributes = record.attributes().len(),
        methods = record.methods().len(),
        bases = record.bases().len(),
        "processed class"
    );
    Some(record)
}

/// A bare name, or `owner.attr` where `owner` is itself a bare name.
/// Redundant parentheses are ignored, as Python's own AST drops them.
fn base_reference(node: &TSNode, source: &[u8]) -> Option<String> {
    let node = unparenthesize(*node);
    match node.kind() {
        "identifier" => Some(node_text(&node, source).to_string()),
        "attribute" => {
            let owner = unparenthesize(node.child_by_field_name("object")?);
            let attr = node.child_by_field_name("attribute")?;
            (owner.kind() == "identifier").then(|| {
                format!("{}.{}", node_text(&owner, source), node_text(&attr, source))
            })
        }
        _ => None,
    }
}

fn unparenthesize(mut node: TSNode) -> TSNode {
    while node.kind() == "parenthesized_expression" {
        let mut cursor = node.walk();
        let inner = node
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        match inner {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Walks only the immediate statements of the class body.
fn extract_members(body: &TSNode, source: &[u8], record: &mut ClassRecord) {
    let mut cursor = body.walk();
    for statement in body.named_children(&mut cursor) {
        match statement.kind() {
            "function_definition" => add_method(&statement, source, record),
            "decorated_definition" => {
                if let Some(definition) = statement.child_by_field_name("definition") {
                    if definition.kind() == "function_definition" {
                        add_method(&definition, source, record);
                    }
                }
            }
            "expression_statement" => {
                let mut inner = statement.walk();
                for expr in statement.named_children(&mut inner) {
                    if expr.kind() == "assignment" {
                        add_assignment_targets(&expr, source, record);
                    }
                }
            }
            _ => {}
        }
    }
}

fn add_method(func_node: &TSNode, source: &[u8], record: &mut ClassRecord) {
    if let Some(name_node) = func_node.child_by_field_name("name") {
        let name = node_text(&name_node, source);
        if !name.is_empty() {
            record.add_method(name);
        }
    }
}

/// Handles `x = ...`, `x: T = ...`, `x: T` and chained `a = b = ...`.
fn add_assignment_targets(assignment: &TSNode, source: &[u8], record: &mut ClassRecord) {
    let mut current = Some(*assignment);
    while let Some(node) = current {
        if let Some(left) = node.child_by_field_name("left") {
            if left.kind() == "identifier" {
                record.add_attribute(node_text(&left, source));
            }
        }
        current = node
            .child_by_field_name("right")
            .filter(|right| right.kind() == "assignment");
    }
}
