//! Git data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `diff`: Blob diffing (Myers' diff, pair normalization, patch rendering)
//! - `objects`: Git object types (blob, tree, commit)
//! - `resolve`: Blob reference resolution (oids, refs, `<rev>:<path>`)

pub mod core;
pub mod diff;
pub mod objects;
pub mod resolve;
