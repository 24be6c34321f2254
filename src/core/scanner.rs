use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions recognised as Python source.
pub const PYTHON_EXTENSIONS: &[&str] = &["py", "pyi", "pyw"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub extension: String,
}

pub struct FileScanner {
    follow_links: bool,
}

impl FileScanner {
    pub fn new() -> Self {
        Self {
            follow_links: false,
        }
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Lists Python files under `root`, sorted by path. A file given directly
    /// is returned as-is regardless of its extension.
    pub fn scan(&self, root: &Path) -> Result<Vec<SourceFile>> {
        let metadata = std::fs::metadata(root)
            .with_context(|| format!("cannot access {}", root.display()))?;

        if metadata.is_file() {
            return Ok(vec![SourceFile {
                path: root.to_path_buf(),
                extension: extension_of(root).unwrap_or_default(),
            }]);
        }

        let mut files: Vec<SourceFile> = WalkDir::new(root)
            .follow_links(self.follow_links)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let extension = extension_of(entry.path())?;
                PYTHON_EXTENSIONS
                    .contains(&extension.as_str())
                    .then(|| SourceFile {
                        path: entry.into_path(),
                        extension,
                    })
            })
            .collect();

        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}
