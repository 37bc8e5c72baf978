//! Markdown ledger of benchmark runs, one table row per suite execution.

pub mod document;
pub mod errors;
pub mod row;
pub mod writer;
