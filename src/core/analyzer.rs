use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{DiagramModel, Extraction, FileScanner};
use crate::parsers::{common::read_source, python::PythonExtractor, ParseError};

pub struct ProjectAnalyzer {
    file_scanner: FileScanner,
    extractor: PythonExtractor,
}

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self::with_scanner(FileScanner::new())
    }

    pub fn with_scanner(file_scanner: FileScanner) -> Self {
        Self {
            file_scanner,
            extractor: PythonExtractor::new(),
        }
    }

    /// Analyzes a single Python file or every Python file under a directory.
    ///
    /// For a single file a syntax error is fatal. For a directory each file is
    /// extracted independently; unreadable or invalid files are skipped with a
    /// warning and the remaining models are merged in path order.
    pub fn analyze(&self, path: &Path) -> Result<Extraction> {
        if path.is_file() {
            return self.analyze_file(path);
        }

        let files = self.file_scanner.scan(path)?;
        info!(files = files.len(), root = %path.display(), "scanning project");

        let results: Vec<(PathBuf, Result<Extraction>)> = files
            .par_iter()
            .map(|file| (file.path.clone(), self.analyze_file(&file.path)))
            .collect();

        let mut model = DiagramModel::new();
        let mut skipped = 0usize;
        for (file, result) in results {
            match result {
                Ok(Extraction::Classes(file_model)) => model.merge(file_model),
                Ok(Extraction::Empty) => {}
                Err(err) => {
                    skipped += 1;
                    warn!(file = %file.display(), "skipping file: {err:#}");
                }
            }
        }

        info!(classes = model.len(), skipped, "project analysis finished");
        Ok(Extraction::from_model(model))
    }

    fn analyze_file(&self, path: &Path) -> Result<Extraction> {
        let source = read_source(path)?;
        self.extractor
            .extract(&source)
            .with_context(|| format!("failed to analyze {}", path.display()))
    }

    /// Extracts from in-memory source, bypassing the filesystem.
    pub fn analyze_source(&self, source: &str) -> Result<Extraction, ParseError> {
        self.extractor.extract(source)
    }
}

impl Default for ProjectAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
