//! File enumeration

use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::runtime::ContentSource;

/// Every regular file under `dir`, sorted by path. Hidden and ignored
/// files are included; directories are skipped.
pub fn walk_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => io,
            None => io::Error::other(format!("cannot walk {}", dir.display())),
        })?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Files under a root directory.
///
/// As a [`ContentSource`], `list("posts")` yields the files under
/// `<root>/posts`, spelled the same way the build names them when it
/// exports their variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every file under the root.
    pub fn files(&self) -> io::Result<Vec<PathBuf>> {
        walk_files(&self.root)
    }
}

impl ContentSource for FileSource {
    fn list(&self, path: &str) -> io::Result<Vec<PathBuf>> {
        walk_files(&self.root.join(path))
    }
}
