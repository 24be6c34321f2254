use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use super::ParseError;

pub struct SourceParser {
    parser: Parser,
    /// Node kinds the grammar accepts but the target language version does not
    rejected_kinds: &'static [&'static str],
}

impl SourceParser {
    pub fn new(language: Language) -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self {
            parser,
            rejected_kinds: &[],
        })
    }

    pub fn with_rejected_kinds(mut self, kinds: &'static [&'static str]) -> Self {
        self.rejected_kinds = kinds;
        self
    }

    /// Parses `source` into a syntax tree. Tree-sitter recovers from errors,
    /// so a tree containing any ERROR, MISSING or rejected node fails as a whole.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(ParseError::Aborted)?;

        if let Some(node) = first_error(&tree.root_node(), self.rejected_kinds) {
            let position = node.start_position();
            return Err(ParseError::Syntax {
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(tree)
    }
}

/// Reads a source file with a buffered reader sized to the file.
pub fn read_source(file_path: &Path) -> Result<String> {
    let file = File::open(file_path)
        .with_context(|| format!("failed to open {}", file_path.display()))?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = String::with_capacity(file_size);
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read {} as UTF-8", file_path.display()))?;
    Ok(content)
}

pub fn node_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// First ERROR, MISSING or rejected node in pre-order.
fn first_error<'tree>(
    root: &TSNode<'tree>,
    rejected_kinds: &[&str],
) -> Option<TSNode<'tree>> {
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() || rejected_kinds.contains(&node.kind()) {
            return Some(node);
        }
        if rejected_kinds.is_empty() && !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<TSNode<'tree>> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    None
}
