//! File system walker with directory pruning.

use crate::config::DocsConfig;
use ignore::{DirEntry, Walk, WalkBuilder};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A discovered file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as discovered, joined onto the walk root
    pub path: PathBuf,
}

/// Depth-first walker that never enters excluded directories.
pub struct Walker {
    root: PathBuf,
    exclude_dirs: BTreeSet<String>,
    follow_symlinks: bool,
    respect_gitignore: bool,
    sort_entries: bool,
}

impl Walker {
    /// Create a new walker for the given root directory.
    pub fn new(root: &Path, config: &DocsConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            exclude_dirs: config.exclude_dirs.clone(),
            follow_symlinks: config.follow_symlinks,
            respect_gitignore: config.respect_gitignore,
            sort_entries: config.sort_entries,
        }
    }

    /// Start a lazy walk from the root.
    ///
    /// Each call begins a fresh traversal.
    pub fn files(&self) -> Files {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .follow_links(self.follow_symlinks)
            .hidden(false)
            .parents(false)
            .ignore(self.respect_gitignore)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore);

        if self.sort_entries {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        // Runs before descent, so excluded trees are never opened.
        let exclude_dirs = self.exclude_dirs.clone();
        builder.filter_entry(move |entry| {
            if is_excluded_dir(entry, &exclude_dirs) {
                debug!(path = ?entry.path(), "Pruning excluded directory");
                return false;
            }
            true
        });

        Files {
            inner: builder.build(),
            follow_symlinks: self.follow_symlinks,
            errors: 0,
        }
    }
}

/// Lazy sequence of discovered files.
pub struct Files {
    inner: Walk,
    follow_symlinks: bool,
    errors: usize,
}

impl Files {
    /// Number of walk errors skipped so far.
    pub fn errors(&self) -> usize {
        self.errors
    }
}

impl Iterator for Files {
    type Item = FileEntry;

    fn next(&mut self) -> Option<FileEntry> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if is_file_like(&entry, self.follow_symlinks) {
                        return Some(FileEntry {
                            path: entry.into_path(),
                        });
                    }
                }
                Err(e) => {
                    // Unreadable directories are skipped, never fatal
                    warn!(error = %e, "Walk error");
                    self.errors += 1;
                }
            }
        }
    }
}

fn is_excluded_dir(entry: &DirEntry, exclude_dirs: &BTreeSet<String>) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
    is_dir
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| exclude_dirs.contains(name))
}

fn is_file_like(entry: &DirEntry, follow_symlinks: bool) -> bool {
    let Some(ft) = entry.file_type() else {
        return false;
    };
    if ft.is_dir() {
        return false;
    }
    // Unfollowed links to directories are listed but never treated as files.
    // Dangling links stay in, and fail later as unreadable.
    if ft.is_symlink() && !follow_symlinks {
        return !entry.path().is_dir();
    }
    true
}
