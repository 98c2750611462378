//! Decides which discovered files are documented.

use crate::config::DocsConfig;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// Extension of notebook documents.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Filters discovered paths by extension and file identity.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Allowed extensions, stored without the leading dot
    extensions: BTreeSet<String>,
    /// Files never documented (the running tool, the output document)
    excluded_files: Vec<PathBuf>,
}

impl Classifier {
    /// Create a classifier from an allow-list and files to skip.
    ///
    /// Extensions may be written as `.py` or `py`; matching is case-sensitive.
    pub fn new<I, S>(extensions: I, excluded_files: Vec<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref();
                ext.strip_prefix('.').unwrap_or(ext).to_string()
            })
            .collect();

        Self {
            extensions,
            excluded_files,
        }
    }

    /// Create a classifier from configuration.
    pub fn from_config(config: &DocsConfig, excluded_files: Vec<PathBuf>) -> Self {
        Self::new(&config.extensions, excluded_files)
    }

    /// Check whether `path` should get a section in the output.
    pub fn is_code_file(&self, path: &Path) -> bool {
        let allowed = file_extension(path).map_or(false, |ext| self.extensions.contains(ext));

        allowed && !self.excluded_files.iter().any(|f| same_file(path, f))
    }
}

/// Classify with the default allow-list, skipping `self_path`.
pub fn is_code_file(path: &Path, self_path: &Path) -> bool {
    let classifier = Classifier::from_config(&DocsConfig::default(), vec![self_path.to_path_buf()]);
    classifier.is_code_file(path)
}

/// Markdown fence tag: the extension without its dot, lowercased.
pub fn language_tag(path: &Path) -> String {
    file_extension(path)
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Text after the last dot of the file name, without the dot.
///
/// Leading dots never start an extension, so `.bashrc` and `..py` have none.
pub fn file_extension(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let (_, ext) = name.trim_start_matches('.').rsplit_once('.')?;
    Some(ext)
}

/// Check whether two paths name the same file.
///
/// Existing files are compared by canonical path; otherwise by absolute path
/// with `.` and `..` resolved lexically.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => lexical_absolute(a) == lexical_absolute(b),
    }
}

fn lexical_absolute(path: &Path) -> PathBuf {
    let full = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    };

    let mut out = PathBuf::new();
    for component in full.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn default_classifier() -> Classifier {
        Classifier::from_config(&DocsConfig::default(), vec![])
    }

    #[test]
    fn test_allowed_extensions() {
        let classifier = default_classifier();
        for name in ["main.cpp", "a/b.h", "nb.ipynb", "q.sql", "x.R", "x.r", "App.tsx"] {
            assert!(classifier.is_code_file(Path::new(name)), "{}", name);
        }
    }

    #[test]
    fn test_rejected_extensions() {
        let classifier = default_classifier();
        for name in ["README.md", "main.rs", "Makefile", ".bashrc", "a.PY", "x.Cpp", "..py", ".c"] {
            assert!(!classifier.is_code_file(Path::new(name)), "{}", name);
        }
    }

    #[test]
    fn test_extensions_accept_either_form() {
        let classifier = Classifier::new(["rs", ".toml"], vec![]);
        assert!(classifier.is_code_file(Path::new("lib.rs")));
        assert!(classifier.is_code_file(Path::new("Cargo.toml")));
        assert!(!classifier.is_code_file(Path::new("main.py")));
    }

    #[test]
    fn test_file_extension_skips_leading_dots() {
        assert_eq!(file_extension(Path::new("..py")), None);
        assert_eq!(file_extension(Path::new(".hidden.py")), Some("py"));
        assert_eq!(file_extension(Path::new("..a.b.sql")), Some("sql"));
        assert_eq!(file_extension(Path::new("dir.d/Makefile")), None);
    }

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag(Path::new("./src/main.cpp")), "cpp");
        assert_eq!(language_tag(Path::new("stats.R")), "r");
        assert_eq!(language_tag(Path::new("Makefile")), "");
    }

    #[test]
    fn test_self_exclusion_with_different_spellings() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let script = temp_dir.path().join("script.py");
        fs::write(&script, "print('hi')").unwrap();

        let indirect = temp_dir.path().join("sub/../.").join("script.py");
        assert!(!is_code_file(&indirect, &script));
        assert!(!is_code_file(&script, &indirect));

        let other = temp_dir.path().join("other.py");
        fs::write(&other, "pass").unwrap();
        assert!(is_code_file(&other, &script));
    }

    #[test]
    fn test_self_exclusion_relative_and_absolute() {
        // Tests run from the package root.
        let absolute = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/lib.rs");
        let classifier = Classifier::new(["rs"], vec![absolute.clone()]);

        assert!(!classifier.is_code_file(Path::new("src/lib.rs")));
        assert!(!classifier.is_code_file(Path::new("./src/../src/lib.rs")));
        assert!(!classifier.is_code_file(&absolute));
        assert!(classifier.is_code_file(Path::new("src/error.rs")));
    }

    #[test]
    fn test_same_file_for_missing_paths() {
        assert!(same_file(
            Path::new("/nonexistent/a/../b.py"),
            Path::new("/nonexistent/b.py")
        ));
        assert!(!same_file(
            Path::new("/nonexistent/a/b.py"),
            Path::new("/nonexistent/b.py")
        ));
    }
}
