//! Markdown rendering of discovered source files.
//!
//! Each file becomes a `##` heading followed by a fenced code block tagged
//! with the file's extension. Unreadable files and malformed notebooks are
//! rendered with a placeholder comment instead of failing the run.

pub mod notebook;

use crate::error::SourceError;
use crate::scanner::{file_extension, language_tag, NOTEBOOK_EXTENSION};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Substituted for notebooks that cannot be read or parsed.
pub const NOTEBOOK_PLACEHOLDER: &str = "<!-- Failed to parse notebook -->";

/// Placeholder for a file that could not be read.
pub fn unreadable_placeholder(path: &Path) -> String {
    format!("<!-- Could not read {} -->", path.display())
}

/// What ended up inside a rendered code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The file's text, or the extracted notebook code
    Source,
    /// Placeholder for an unreadable file
    ReadFailed,
    /// Placeholder for a malformed notebook
    NotebookFailed,
}

/// Load the displayable text of a file.
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    let is_notebook = file_extension(path) == Some(NOTEBOOK_EXTENSION);

    if is_notebook {
        let json = std::fs::read_to_string(path).map_err(|e| SourceError::Notebook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        return notebook::extract_code(&json).map_err(|e| SourceError::Notebook {
            path: path.to_path_buf(),
            message: e.to_string(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one markdown section for `path`.
///
/// Only failures writing to `out` are returned; source failures are
/// replaced by a placeholder.
pub fn render<W: Write>(path: &Path, out: &mut W) -> io::Result<RenderOutcome> {
    write!(out, "## {}\n\n", path.display())?;

    let lang = language_tag(path);
    let (code, outcome) = match load_source(path) {
        Ok(code) => (code, RenderOutcome::Source),
        Err(e @ SourceError::Read { .. }) => {
            warn!("{}", e);
            (unreadable_placeholder(path), RenderOutcome::ReadFailed)
        }
        Err(e @ SourceError::Notebook { .. }) => {
            warn!("{}", e);
            (NOTEBOOK_PLACEHOLDER.to_string(), RenderOutcome::NotebookFailed)
        }
    };

    write!(out, "```{}\n{}\n```\n\n", lang, code)?;

    debug!(path = ?path, outcome = ?outcome, "Rendered file");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn render_to_string(path: &Path) -> (String, RenderOutcome) {
        let mut out = Vec::new();
        let outcome = render(path, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[test]
    fn test_render_plain_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("query.SQL");
        fs::write(&path, "SELECT 1;\n").unwrap();

        let (output, outcome) = render_to_string(&path);

        assert_eq!(outcome, RenderOutcome::Source);
        assert_eq!(
            output,
            format!("## {}\n\n```sql\nSELECT 1;\n\n```\n\n", path.display())
        );
    }

    #[test]
    fn test_render_keeps_content_verbatim() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("weird.js");
        let content = "// ```not a fence end```\r\nconst a = `<b>*x*</b>`;";
        fs::write(&path, content).unwrap();

        let (output, _) = render_to_string(&path);
        assert!(output.contains(&format!("```js\n{}\n```\n\n", content)));
    }

    #[test]
    fn test_render_notebook() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nb.ipynb");
        fs::write(
            &path,
            r#"{"cells": [
                {"cell_type": "code", "source": ["print(1)"]},
                {"cell_type": "markdown", "source": ["notes"]},
                {"cell_type": "code", "source": ["x = 2\n", "y = 3"]}
            ]}"#,
        )
        .unwrap();

        let (output, outcome) = render_to_string(&path);

        assert_eq!(outcome, RenderOutcome::Source);
        assert!(output.contains("```ipynb\nprint(1)\nx = 2\ny = 3\n```\n\n"));
        assert!(!output.contains("notes"));
    }

    #[test]
    fn test_render_malformed_notebook() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.ipynb");
        fs::write(&path, "not json").unwrap();

        let (output, outcome) = render_to_string(&path);

        assert_eq!(outcome, RenderOutcome::NotebookFailed);
        assert!(output.contains("```ipynb\n<!-- Failed to parse notebook -->\n```\n\n"));
    }

    #[test]
    fn test_render_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("gone.py");

        let (output, outcome) = render_to_string(&path);

        assert_eq!(outcome, RenderOutcome::ReadFailed);
        assert!(output.starts_with(&format!("## {}\n\n```py\n", path.display())));
        assert!(output.contains(&unreadable_placeholder(&path)));
    }

    #[test]
    fn test_render_non_utf8_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("latin1.c");
        fs::write(&path, [0x63u8, 0xff, 0xfe, 0x00]).unwrap();

        let (_, outcome) = render_to_string(&path);
        assert_eq!(outcome, RenderOutcome::ReadFailed);
    }

    #[test]
    fn test_load_source_error_kinds() {
        let temp_dir = tempdir().unwrap();

        let err = load_source(&temp_dir.path().join("missing.py")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));

        let err = load_source(&temp_dir.path().join("missing.ipynb")).unwrap_err();
        assert!(matches!(err, SourceError::Notebook { .. }));
    }
}
