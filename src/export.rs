//! Writing diagram text to disk and handing it to an external PlantUML binary.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

pub const DEFAULT_PLANTUML_BIN: &str = "plantuml";

pub fn write_diagram(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

/// Wrapper around the external `plantuml` command.
pub struct PlantUmlTool {
    program: PathBuf,
}

impl PlantUmlTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Image PlantUML writes next to `diagram_path` by default.
    pub fn expected_image(diagram_path: &Path) -> PathBuf {
        diagram_path.with_extension("png")
    }

    /// Runs the renderer on `diagram_path`. Returns the image path when it
    /// exists afterwards, `None` when the tool succeeded but produced nothing.
    pub fn render(&self, diagram_path: &Path) -> Result<Option<PathBuf>> {
        debug!(program = %self.program.display(), input = %diagram_path.display(), "invoking renderer");

        let status = Command::new(&self.program)
            .arg(diagram_path)
            .status()
            .with_context(|| format!("failed to launch {}", self.program.display()))?;

        if !status.success() {
            bail!(
                "{} exited with {} for {}",
                self.program.display(),
                status,
                diagram_path.display()
            );
        }

        let image = Self::expected_image(diagram_path);
        if image.exists() {
            Ok(Some(image))
        } else {
            warn!(
                image = %image.display(),
                "renderer finished but no image was produced; check the PlantUML and Graphviz installation"
            );
            Ok(None)
        }
    }
}

impl Default for PlantUmlTool {
    fn default() -> Self {
        Self::new(DEFAULT_PLANTUML_BIN)
    }
}
