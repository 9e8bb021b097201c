//! Feature file discovery.
//!
//! This module walks a directory tree for feature files and caches what it
//! finds, so the glossary can be rebuilt without touching the tree again.

mod folder_files;

pub use folder_files::{DEFAULT_EXTENSION, FileContent, FolderFiles};
