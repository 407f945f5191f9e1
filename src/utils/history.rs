//! Persisted history of submitted filter strings.
//!
//! One filter per line, UTF-8. Blank lines are skipped on load,
//! insertion order is preserved, duplicates are never re-added, and the
//! file is fully rewritten on each append.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "lexi";
const HISTORY_FILE: &str = "history.txt";

/// Insertion-ordered, duplicate-free list of previously submitted
/// filters, backed by a text file.
#[derive(Debug)]
pub struct FilterHistory {
    path: PathBuf,
    entries: Vec<String>,
}

impl FilterHistory {
    /// Load history from `path`. A missing file is an empty history.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read history {}", path.display()))?;
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect()
        } else {
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    /// Record a submitted filter. Blank and already-present entries are
    /// not re-added; a new entry rewrites the whole file. Returns whether
    /// the entry was added.
    pub fn record(&mut self, raw: &str) -> Result<bool> {
        let entry = raw.trim();
        if entry.is_empty() || self.entries.iter().any(|e| e == entry) {
            return Ok(false);
        }
        self.entries.push(entry.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, self.entries.join("\n"))
            .with_context(|| format!("Failed to write history {}", self.path.display()))?;
        Ok(true)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Default history location under the platform data directory.
pub fn default_history_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join(APP_NAME).join(HISTORY_FILE))
}
