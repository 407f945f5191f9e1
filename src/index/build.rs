//! Full index builds over an ordered file list.

use crate::index::scan::scan_file;
use crate::index::types::{Category, InvertedIndex};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Coarse build progress handed to the caller's callback.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    /// Files handled so far.
    pub scanned: usize,
    /// Total files in this build.
    pub total: usize,
    /// Wall-clock time since the build started.
    pub elapsed: Duration,
}

/// Build a fresh inverted index from the given paths, in the given order.
///
/// Each file's category is resolved once from its path; files that map to
/// no category are skipped. The progress callback fires roughly once per
/// 1% of the file count (every file when there are fewer than 100) and at
/// completion; it is cosmetic and never affects the result. If any file
/// fails to scan the whole build fails and no partial index is returned.
pub fn build_index(
    paths: &[PathBuf],
    progress: &mut dyn FnMut(ProgressReport),
) -> Result<InvertedIndex> {
    let start = Instant::now();
    let total = paths.len();
    let step = (total / 100).max(1);

    let mut index = InvertedIndex::default();
    for (i, path) in paths.iter().enumerate() {
        if let Some(category) = Category::from_path(path) {
            let token_lines = scan_file(path, category.rule_set())
                .with_context(|| format!("Index build aborted at {}", path.display()))?;
            index.insert_file(path.clone(), category, token_lines);
        }

        let scanned = i + 1;
        if scanned % step == 0 || scanned == total {
            progress(ProgressReport {
                scanned,
                total,
                elapsed: start.elapsed(),
            });
        }
    }
    Ok(index)
}

/// Build without progress reporting.
pub fn build_index_silent(paths: &[PathBuf]) -> Result<InvertedIndex> {
    build_index(paths, &mut |_| {})
}
