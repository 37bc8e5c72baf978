//! Publishing the ledger to, and fetching it from, a GitHub gist.

pub mod errors;
pub mod gist;
pub mod transport;
