pub mod common;
pub mod python;

use thiserror::Error;

/// Fatal extraction failure. Nothing partial is produced when this is returned.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid syntax at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("parser gave up before producing a syntax tree")]
    Aborted,
}
