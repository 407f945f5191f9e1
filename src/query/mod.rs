//! Filter-string interpretation and read-only queries over the index.

pub mod filter;

pub use filter::{FileDetail, FileHit, FilterQuery, MatchMode, TokenMatch, filter_index, token_detail};
