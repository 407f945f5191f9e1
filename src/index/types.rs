use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 1-based physical line number within a file.
pub type LineNumber = u32;

/// File classification derived from extension or exact basename.
///
/// Files that map to no category are never indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Squirrel scripts (`.nut`)
    Script,
    /// Data blocks (`.blk`)
    Block,
    /// C/C++ headers (`.h`, `.hpp`)
    Header,
    /// C/C++ sources (`.c`, `.cpp`)
    Source,
    /// Jam build files (`.jam`, basename `jamfile`)
    Buildfile,
}

impl Category {
    /// Classify a file by its extension, or by exact basename for build
    /// files. Computed once per file when the index is built.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("nut") => return Some(Category::Script),
            Some("blk") => return Some(Category::Block),
            Some("h") | Some("hpp") => return Some(Category::Header),
            Some("c") | Some("cpp") => return Some(Category::Source),
            Some("jam") => return Some(Category::Buildfile),
            _ => {}
        }
        let name = path.file_name()?.to_str()?;
        if name.eq_ignore_ascii_case("jamfile") {
            return Some(Category::Buildfile);
        }
        None
    }

    /// The lexical rule set this category is scanned with.
    pub fn rule_set(self) -> crate::index::tokenize::RuleSet {
        match self {
            Category::Script | Category::Block => crate::index::tokenize::RuleSet::Block,
            Category::Header | Category::Source | Category::Buildfile => {
                crate::index::tokenize::RuleSet::Generic
            }
        }
    }
}

/// Per-query toggles for which file categories are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySet {
    pub script: bool,
    pub block: bool,
    pub header: bool,
    pub source: bool,
    pub buildfile: bool,
}

impl CategorySet {
    /// Every category enabled.
    pub fn all() -> Self {
        Self {
            script: true,
            block: true,
            header: true,
            source: true,
            buildfile: true,
        }
    }

    /// Every category disabled.
    pub fn none() -> Self {
        Self {
            script: false,
            block: false,
            header: false,
            source: false,
            buildfile: false,
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Script => self.script,
            Category::Block => self.block,
            Category::Header => self.header,
            Category::Source => self.source,
            Category::Buildfile => self.buildfile,
        }
    }

    pub fn insert(&mut self, category: Category) {
        match category {
            Category::Script => self.script = true,
            Category::Block => self.block = true,
            Category::Header => self.header = true,
            Category::Source => self.source = true,
            Category::Buildfile => self.buildfile = true,
        }
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::none();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// The complete token → file → occurrence structure of one indexing run.
///
/// Immutable after construction: a rebuild produces a fresh value and
/// never touches an existing one, so holders of an old index keep a
/// consistent snapshot. Occurrence lists are strictly ascending and
/// duplicate-free, and every indexed token has at least one file with at
/// least one line number.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    tokens: BTreeMap<String, BTreeMap<PathBuf, Vec<LineNumber>>>,
    categories: BTreeMap<PathBuf, Category>,
}

impl InvertedIndex {
    /// Merge one scanned file into the index. The category is recorded
    /// here and never re-derived for the lifetime of this index.
    pub(crate) fn insert_file(
        &mut self,
        path: PathBuf,
        category: Category,
        token_lines: BTreeMap<String, Vec<LineNumber>>,
    ) {
        self.categories.insert(path.clone(), category);
        for (token, lines) in token_lines {
            if lines.is_empty() {
                continue;
            }
            self.tokens
                .entry(token)
                .or_default()
                .insert(path.clone(), lines);
        }
    }

    /// Iterate all tokens with their per-file occurrence lists, in
    /// deterministic (byte) order.
    pub fn tokens(&self) -> impl Iterator<Item = (&String, &BTreeMap<PathBuf, Vec<LineNumber>>)> {
        self.tokens.iter()
    }

    /// Occurrence map for one token, if indexed.
    pub fn occurrences(&self, token: &str) -> Option<&BTreeMap<PathBuf, Vec<LineNumber>>> {
        self.tokens.get(token)
    }

    /// Category recorded for a file when the index was built.
    pub fn category_of(&self, path: &Path) -> Option<Category> {
        self.categories.get(path).copied()
    }

    /// Number of distinct tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of indexed files.
    pub fn file_count(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
