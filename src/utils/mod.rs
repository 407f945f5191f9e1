//! Shared utilities: candidate-file enumeration and filter history.

pub mod history;
pub mod walk;

pub use history::*;
pub use walk::*;
