//! # Lexi - Interactive Lexical Token Index
//!
//! Lexi indexes a directory tree of source files by lexical token
//! (identifier, literal, or keyword-like word) and answers interactive
//! filtered queries: which tokens match, the files and line numbers each
//! occurs at, and the literal text of any reported line.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Lexical rule sets, per-file scanning, full index builds
//! - [`query`] - Filter-string interpretation and index queries
//! - [`utils`] - Candidate-file enumeration and persisted filter history
//! - [`output`] - Result rendering for the terminal
//!
//! ## Quick Start
//!
//! ```no_run
//! use lexi::index::{CategorySet, build_index_silent};
//! use lexi::query::{FilterQuery, filter_index};
//! use lexi::utils::collect_files;
//! use std::path::Path;
//!
//! let paths = collect_files(Path::new("/path/to/tree"));
//! let index = build_index_silent(&paths).unwrap();
//!
//! let query = FilterQuery::parse("*\"reload");
//! for m in filter_index(&index, &query, &CategorySet::all()) {
//!     println!("{} in {} files", m.token, m.files.len());
//! }
//! ```
//!
//! Every build is a full rebuild from a given file list: the index is
//! immutable once built, never persisted, and shared freely by readers.

pub mod index;
pub mod output;
pub mod query;
pub mod utils;
