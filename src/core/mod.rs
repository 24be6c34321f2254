pub mod analyzer;
pub mod model;
pub mod scanner;

pub use analyzer::ProjectAnalyzer;
pub use model::{ClassRecord, DiagramModel, Extraction, InheritanceEdge, Member, Visibility};
pub use scanner::{FileScanner, SourceFile};
