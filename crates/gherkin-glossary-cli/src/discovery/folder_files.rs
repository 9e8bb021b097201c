//! Directory snapshots of feature file contents.
//!
//! A [`FolderFiles`] tree mirrors a directory: the matching files it holds,
//! each as a list of trimmed lines, and one child tree per subdirectory. The
//! tree can be written to JSON and read back later, so a corpus only has to
//! be walked once.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::CliError;
use crate::output::write_json;

/// Extension used when none is given.
pub const DEFAULT_EXTENSION: &str = ".feature";

/// Trimmed lines of a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// Absolute path of the file.
    pub file: PathBuf,
    /// Every line of the file with surrounding whitespace removed.
    pub content: Vec<String>,
}

impl FileContent {
    /// Read `path` and trim each of its lines.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file cannot be read as UTF-8 text.
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
        Ok(Self {
            file: path.to_path_buf(),
            content: text.lines().map(|line| line.trim().to_string()).collect(),
        })
    }
}

/// Snapshot of a directory tree's matching files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderFiles {
    /// Absolute path of the directory.
    pub directory: PathBuf,
    /// Matching files directly inside the directory, in file-name order.
    pub files: Vec<FileContent>,
    /// One snapshot per subdirectory, in file-name order.
    #[serde(default)]
    pub children: Vec<Self>,
}

impl FolderFiles {
    /// Walk `directory` recursively, reading every file whose extension is in
    /// `extensions`.
    ///
    /// Extensions may be given with or without their leading dot. Entries are
    /// visited in file-name order; symbolic links are not followed.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the directory or a matching file cannot be
    /// read, and `CliError::Walk` if listing a directory fails.
    pub fn populate<S: AsRef<str>>(directory: &Path, extensions: &[S]) -> Result<Self, CliError> {
        let extensions: Vec<&str> = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.'))
            .collect();
        let root = fs::canonicalize(directory).map_err(|source| CliError::io(directory, source))?;
        let tree = Self::populate_dir(root, &extensions)?;
        info!(
            directory = %tree.directory.display(),
            files = tree.file_count(),
            "discovered feature files"
        );
        Ok(tree)
    }

    fn populate_dir(directory: PathBuf, extensions: &[&str]) -> Result<Self, CliError> {
        let mut files = Vec::new();
        let mut children = Vec::new();

        let entries = WalkDir::new(&directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry.map_err(|source| CliError::Walk {
                path: directory.clone(),
                source,
            })?;
            let file_type = entry.file_type();
            if file_type.is_dir() {
                children.push(Self::populate_dir(entry.into_path(), extensions)?);
            } else if file_type.is_file() && has_extension(entry.path(), extensions) {
                debug!(file = %entry.path().display(), "reading feature file");
                files.push(FileContent::read(entry.path())?);
            }
        }

        Ok(Self {
            directory,
            files,
            children,
        })
    }

    /// Read a snapshot previously written by [`dump`](Self::dump).
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file cannot be read and `CliError::Json`
    /// if it does not hold a snapshot.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
        let tree: Self =
            serde_json::from_str(&text).map_err(|source| CliError::json(path, source))?;
        info!(
            path = %path.display(),
            files = tree.file_count(),
            "loaded folder files"
        );
        Ok(tree)
    }

    /// Write the snapshot to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file cannot be written.
    pub fn dump(&self, path: &Path, indent: usize) -> Result<(), CliError> {
        write_json(self, path, indent)?;
        info!(path = %path.display(), "wrote folder files");
        Ok(())
    }

    /// Every line of every file, the directory's own files first and then
    /// each child's lines in order.
    #[must_use]
    pub fn content(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_content(&mut lines);
        lines
    }

    fn collect_content(&self, lines: &mut Vec<String>) {
        for file in &self.files {
            lines.extend(file.content.iter().cloned());
        }
        for child in &self.children {
            child.collect_content(lines);
        }
    }

    /// Number of files in the whole tree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .iter()
                .map(Self::file_count)
                .sum::<usize>()
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(path, content).expect("failed to write file");
    }

    #[fixture]
    fn corpus() -> TempDir {
        let dir = TempDir::new().expect("failed to create temp dir");
        write(dir.path(), "b.feature", "Feature: B\n  Given b\n");
        write(dir.path(), "a.feature", "Feature: A\n\tGiven a   \n");
        write(dir.path(), "notes.txt", "Given ignored\n");
        write(dir.path(), "nested/c.feature", "Feature: C\n  Then c\n");
        write(dir.path(), "nested/deeper/d.story", "Feature: D\n");
        dir
    }

    #[rstest]
    fn populates_matching_files_in_name_order(corpus: TempDir) {
        let tree = FolderFiles::populate(corpus.path(), &[DEFAULT_EXTENSION])
            .expect("corpus should populate");
        let names: Vec<_> = tree
            .files
            .iter()
            .filter_map(|f| f.file.file_name())
            .collect();
        assert_eq!(names, ["a.feature", "b.feature"]);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.file_count(), 3);
        assert!(tree.files.iter().all(|f| f.file.is_absolute()));
    }

    #[rstest]
    fn trims_every_line(corpus: TempDir) {
        let tree =
            FolderFiles::populate(corpus.path(), &["feature"]).expect("corpus should populate");
        let first = tree.files.first().expect("a.feature should be present");
        assert_eq!(first.content, ["Feature: A", "Given a"]);
    }

    #[rstest]
    fn flattens_own_files_before_children(corpus: TempDir) {
        let tree = FolderFiles::populate(corpus.path(), &[".feature", ".story"])
            .expect("corpus should populate");
        assert_eq!(
            tree.content(),
            [
                "Feature: A",
                "Given a",
                "Feature: B",
                "Given b",
                "Feature: C",
                "Then c",
                "Feature: D",
            ]
        );
    }

    #[rstest]
    fn dump_and_load_preserve_the_tree(corpus: TempDir) {
        let tree = FolderFiles::populate(corpus.path(), &[DEFAULT_EXTENSION])
            .expect("corpus should populate");
        let out = TempDir::new().expect("failed to create temp dir");
        let path = out.path().join("folder_files.json");
        tree.dump(&path, 2).expect("tree should be written");
        let loaded = FolderFiles::load(&path).expect("tree should load");
        assert_eq!(loaded, tree);
    }

    #[test]
    fn loads_snapshot_without_children_key() {
        let out = TempDir::new().expect("failed to create temp dir");
        let path = out.path().join("folder_files.json");
        fs::write(
            &path,
            r#"{"directory": "/x", "files": [{"file": "/x/a.feature", "content": ["Given a"]}]}"#,
        )
        .expect("failed to write snapshot");
        let loaded = FolderFiles::load(&path).expect("snapshot should load");
        assert_eq!(loaded.content(), ["Given a"]);
    }

    #[test]
    fn rejects_malformed_snapshot() {
        let out = TempDir::new().expect("failed to create temp dir");
        let path = out.path().join("folder_files.json");
        fs::write(&path, "[]").expect("failed to write snapshot");
        let err = FolderFiles::load(&path).expect_err("snapshot should be rejected");
        assert!(matches!(err, CliError::Json { .. }));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let out = TempDir::new().expect("failed to create temp dir");
        let err = FolderFiles::populate(&out.path().join("absent"), &[DEFAULT_EXTENSION])
            .expect_err("missing directory should fail");
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[rstest]
    #[case("a.feature", true)]
    #[case("a.FEATURE", false)]
    #[case("a.myfeature", false)]
    #[case("feature", false)]
    fn matches_extension_exactly(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(has_extension(Path::new(name), &["feature"]), expected);
    }
}
