//! Blob pair diffing
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison, grouped into
//!   patch hunks
//! - `filespec`: one fully-specified side of a diff pair
//! - `pair`: pair normalization (mode/path canonicalization, equality
//!   short-circuit, reversal, prefix filtering)
//! - `engine`: queues normalized pairs and renders git patch output

pub mod diff_algorithm;
pub mod engine;
pub mod filespec;
pub mod pair;

use derive_new::new;

/// Comparison options, supplied once per invocation and immutable while
/// pairs are processed.
#[derive(Debug, Clone, Default, new)]
pub struct DiffOptions {
    /// Swap the two sides of every comparison
    pub reversed: bool,
    /// Only diff pairs where both paths start with this literal prefix
    pub prefix: Option<String>,
}
