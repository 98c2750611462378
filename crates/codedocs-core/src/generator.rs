//! Walk → classify → render pipeline.

use crate::config::DocsConfig;
use crate::error::{DocsError, Result};
use crate::render::{render, RenderOutcome};
use crate::scanner::{Classifier, Walker};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Counts collected during one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Sections written to the output
    pub files_documented: usize,
    /// Sections holding the unreadable-file placeholder
    pub read_failures: usize,
    /// Sections holding the notebook placeholder
    pub notebook_failures: usize,
    /// Directories or entries the walker could not read
    pub walk_errors: usize,
}

/// Produces the markdown document for a directory tree.
pub struct DocGenerator {
    config: DocsConfig,
    excluded_files: Vec<PathBuf>,
}

impl DocGenerator {
    /// Create a generator that skips the running executable.
    pub fn new(config: DocsConfig) -> Self {
        let excluded_files = std::env::current_exe().into_iter().collect();
        Self {
            config,
            excluded_files,
        }
    }

    /// Also skip `path` when it is discovered.
    pub fn exclude_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded_files.push(path.into());
        self
    }

    /// Get the configuration in use.
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Render every accepted file under `root` into `out`, in walk order.
    pub fn generate<W: Write>(&self, root: &Path, out: &mut W) -> Result<GenerateSummary> {
        self.generate_excluding(root, out, &[])
    }

    /// Write the document to `output_path`, replacing any existing content.
    ///
    /// The output file itself is never documented.
    pub fn write_to_file(&self, root: &Path, output_path: &Path) -> Result<GenerateSummary> {
        let file = File::create(output_path).map_err(|source| DocsError::OutputOpen {
            path: output_path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        let summary = self.generate_excluding(root, &mut out, &[output_path.to_path_buf()])?;
        out.flush()?;

        Ok(summary)
    }

    fn generate_excluding<W: Write>(
        &self,
        root: &Path,
        out: &mut W,
        extra_excluded: &[PathBuf],
    ) -> Result<GenerateSummary> {
        let start = Instant::now();
        info!(path = ?root, "Starting walk");

        let mut excluded = self.excluded_files.clone();
        excluded.extend_from_slice(extra_excluded);
        let classifier = Classifier::from_config(&self.config, excluded);

        let walker = Walker::new(root, &self.config);
        let mut files = walker.files();
        let mut summary = GenerateSummary::default();

        for entry in files.by_ref() {
            if !classifier.is_code_file(&entry.path) {
                continue;
            }
            match render(&entry.path, out)? {
                RenderOutcome::Source => {}
                RenderOutcome::ReadFailed => summary.read_failures += 1,
                RenderOutcome::NotebookFailed => summary.notebook_failures += 1,
            }
            summary.files_documented += 1;
        }
        summary.walk_errors = files.errors();

        info!(
            files = summary.files_documented,
            read_failures = summary.read_failures,
            notebook_failures = summary.notebook_failures,
            walk_errors = summary.walk_errors,
            duration_ms = start.elapsed().as_millis(),
            "Documentation complete"
        );

        Ok(summary)
    }
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new(DocsConfig::default())
    }
}
