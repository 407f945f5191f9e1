//! Index construction: lexical rule sets, per-file scanning, full builds.

pub mod build;
pub mod scan;
pub mod tokenize;
pub mod types;

pub use build::{ProgressReport, build_index, build_index_silent};
pub use scan::{line_text, scan_file};
pub use tokenize::{RuleSet, tokenize};
pub use types::{Category, CategorySet, InvertedIndex, LineNumber};
