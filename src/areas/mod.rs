//! Repository access areas
//!
//! - `database`: loose object store under `.git/objects`
//! - `refs`: read-only resolution of HEAD, branches and tags
//! - `repository`: wires the areas together with the output sink

pub mod database;
pub mod refs;
pub mod repository;
