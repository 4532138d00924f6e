//! A plumbing-level blob differ for git repositories.
//!
//! Resolves pairs of blob references (oids, refs, `<rev>:<path>`) against the
//! loose object database and renders their differences in git's patch format.

pub mod areas;
pub mod artifacts;
pub mod commands;
