//! File discovery: directory walking and code-file classification.

mod classifier;
mod walker;

pub use classifier::{
    file_extension, is_code_file, language_tag, same_file, Classifier, NOTEBOOK_EXTENSION,
};
pub use walker::{FileEntry, Files, Walker};
