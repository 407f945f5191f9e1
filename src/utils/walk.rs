//! Candidate-file enumeration under a root directory.

use crate::index::types::Category;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collect the indexable files under `root`, sorted by path for
/// deterministic builds.
///
/// Version-control metadata directories are skipped and only files that
/// map to a category are kept. A missing root or a root with no
/// candidate files yields an empty list, which is not an error: it just
/// produces an empty index downstream.
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !matches!(name.as_ref(), ".git" | "CVS")
        })
        .build();

    let mut paths: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| Category::from_path(path).is_some())
        .collect();
    paths.sort();
    paths
}
