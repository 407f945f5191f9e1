//! Filter queries against a built index.
//!
//! A raw filter string derives its match mode purely from its prefix
//! characters: empty matches everything, a leading `*` makes the
//! comparison case-insensitive, and a following `"` switches from
//! substring to exact matching. The filter never mutates the index; it
//! derives a fresh view on every call.

use crate::index::scan::line_text;
use crate::index::types::{CategorySet, InvertedIndex, LineNumber};
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

/// How the filter text is compared against candidate tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Empty filter: every token matches.
    All,
    /// `"` prefix: the token must equal the filter text.
    Exact,
    /// No prefix: the filter text must be a contiguous substring.
    Substring,
}

/// A raw filter string parsed into match mode, comparison text, and
/// case-folding flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    text: String,
    mode: MatchMode,
    fold_case: bool,
}

impl FilterQuery {
    /// Derive the match mode from the raw string, checking prefixes in
    /// order: empty → match-all; leading `*` → strip it and case-fold
    /// both sides of the comparison; then a leading `"` on the (possibly
    /// folded) remainder → exact match; otherwise substring match.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self {
                text: String::new(),
                mode: MatchMode::All,
                fold_case: false,
            };
        }
        let (fold_case, rest) = match raw.strip_prefix('*') {
            Some(rest) => (true, rest.to_lowercase()),
            None => (false, raw.to_owned()),
        };
        match rest.strip_prefix('"') {
            Some(exact) => Self {
                text: exact.to_owned(),
                mode: MatchMode::Exact,
                fold_case,
            },
            None => Self {
                text: rest,
                mode: MatchMode::Substring,
                fold_case,
            },
        }
    }

    /// Whether a candidate token fits this filter.
    pub fn matches(&self, token: &str) -> bool {
        if self.mode == MatchMode::All {
            return true;
        }
        let folded;
        let candidate = if self.fold_case {
            folded = token.to_lowercase();
            folded.as_str()
        } else {
            token
        };
        match self.mode {
            MatchMode::Exact => candidate == self.text,
            _ => candidate.contains(&self.text),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }
}

/// One visible file containing a matched token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHit {
    pub path: PathBuf,
    /// Number of distinct lines the token occurs on in this file.
    pub count: usize,
}

/// A matched token with the files it occurs in, category-restricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenMatch {
    pub token: String,
    pub files: Vec<FileHit>,
}

/// Occurrence detail for one file: line numbers with their literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDetail {
    pub path: PathBuf,
    pub lines: Vec<(LineNumber, String)>,
}

/// Case-insensitive token ordering with original case as the tiebreak.
fn compare_tokens(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Select the view of the index matching the filter, restricted to files
/// whose category is enabled.
///
/// A token whose visible file set is empty is dropped entirely, so a
/// token can vanish from view purely through category toggling. Tokens
/// come back ordered case-insensitively; files per token are ordered by
/// path.
pub fn filter_index(
    index: &InvertedIndex,
    query: &FilterQuery,
    enabled: &CategorySet,
) -> Vec<TokenMatch> {
    let mut matches: Vec<TokenMatch> = Vec::new();
    for (token, occurrences) in index.tokens() {
        if !query.matches(token) {
            continue;
        }
        let files: Vec<FileHit> = occurrences
            .iter()
            .filter(|(path, _)| {
                index
                    .category_of(path)
                    .is_some_and(|c| enabled.contains(c))
            })
            .map(|(path, lines)| FileHit {
                path: path.clone(),
                count: lines.len(),
            })
            .collect();
        if files.is_empty() {
            continue;
        }
        matches.push(TokenMatch {
            token: token.clone(),
            files,
        });
    }
    matches.sort_by(|a, b| compare_tokens(&a.token, &b.token));
    matches
}

/// Per-file occurrence listing for one selected token, restricted to
/// enabled categories. Re-reads each file to fetch the literal line text;
/// a read failure aborts this lookup only.
pub fn token_detail(
    index: &InvertedIndex,
    token: &str,
    enabled: &CategorySet,
) -> Result<Vec<FileDetail>> {
    let Some(occurrences) = index.occurrences(token) else {
        return Ok(Vec::new());
    };

    let mut details = Vec::new();
    for (path, line_numbers) in occurrences {
        if !index
            .category_of(path)
            .is_some_and(|c| enabled.contains(c))
        {
            continue;
        }
        let mut lines = Vec::with_capacity(line_numbers.len());
        for &line_number in line_numbers {
            lines.push((line_number, line_text(path, line_number)?));
        }
        details.push(FileDetail {
            path: path.clone(),
            lines,
        });
    }
    Ok(details)
}
