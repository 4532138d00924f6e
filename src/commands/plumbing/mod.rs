//! Plumbing commands (low-level Git operations)
//!
//! ## Commands
//!
//! - `diff-blob`: Compare pairs of blobs by object id, ref, or `<rev>:<path>`

pub mod diff_blob;
