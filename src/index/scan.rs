//! Per-file scanning and on-demand line lookup.

use crate::index::tokenize::{RuleSet, tokenize};
use crate::index::types::LineNumber;
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Scan one file into token → ascending unique line numbers.
///
/// Physical lines are visited in order starting at 1, and a line number
/// is appended only when it differs from the last one recorded for that
/// token, so every list is ascending and duplicate-free by construction.
/// Unreadable or non-UTF-8 files fail the scan; there are no retries.
pub fn scan_file(path: &Path, rule_set: RuleSet) -> Result<BTreeMap<String, Vec<LineNumber>>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut token_lines: BTreeMap<String, Vec<LineNumber>> = BTreeMap::new();
    for (idx, line) in content.lines().enumerate() {
        let line_number = idx as LineNumber + 1;
        for token in tokenize(line, rule_set) {
            let lines = token_lines.entry(token).or_default();
            if lines.last() != Some(&line_number) {
                lines.push(line_number);
            }
        }
    }
    Ok(token_lines)
}

/// Literal text of the given 1-based line, trailing whitespace removed.
///
/// The file is re-read on demand. Callers must only request line numbers
/// the index reported for this file; line 0 or a line past the end of
/// the file is a contract violation and fails rather than returning a
/// placeholder.
pub fn line_text(path: &Path, line_number: LineNumber) -> Result<String> {
    if line_number == 0 {
        bail!("Line numbers are 1-based: requested line 0 of {}", path.display());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match content.lines().nth(line_number as usize - 1) {
        Some(line) => Ok(line.trim_end().to_owned()),
        None => bail!("{} has no line {}", path.display(), line_number),
    }
}
