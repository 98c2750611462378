//! codedocs core
//!
//! This crate collects a project's source files into one markdown document:
//! - Depth-first directory walking with excluded-directory pruning
//! - Extension and file-identity classification
//! - Markdown rendering with notebook code-cell extraction
//! - YAML configuration with project and user config files

pub mod config;
mod error;
pub mod generator;
pub mod render;
pub mod scanner;

pub use config::{DocsConfig, DEFAULT_OUTPUT};
pub use error::{DocsError, Result, SourceError};
pub use generator::{DocGenerator, GenerateSummary};
pub use render::{render, RenderOutcome};
pub use scanner::{is_code_file, Classifier, FileEntry, Walker};
