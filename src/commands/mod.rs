//! Command implementations
//!
//! Commands attach to [`Repository`](crate::areas::repository::Repository) as
//! methods, following Git's plumbing/porcelain split:
//!
//! - `plumbing`: Low-level commands for direct object manipulation

pub mod plumbing;
