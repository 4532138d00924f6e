//! Pair normalization
//!
//! Decides whether a resolved blob pair is diff-worthy at all and, when it
//! is, constructs the normalized old/new filespecs the engine consumes.
//! Pure decision logic: all fallible resolution happens upstream.

use crate::artifacts::diff::DiffOptions;
use crate::artifacts::diff::engine::DiffEngine;
use crate::artifacts::diff::filespec::Filespec;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::resolve::blob_ref::BlobRef;
use derive_new::new;
use std::mem;
use std::path::PathBuf;

/// The (oid, mode, path) triple of one side.
///
/// Reversal must swap the whole triple at once, so the three fields live in
/// one record and swap via a single `mem::swap`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
struct DiffSide {
    oid: Option<ObjectId>,
    mode: EntryMode,
    path: PathBuf,
}

impl From<BlobRef> for DiffSide {
    fn from(blob_ref: BlobRef) -> Self {
        let path = blob_ref.diff_path().to_path_buf();
        // an unspecified mode canonicalizes to a regular file
        let mode = blob_ref.mode.unwrap_or_default();
        DiffSide::new(blob_ref.oid, mode, path)
    }
}

impl From<DiffSide> for Filespec {
    fn from(side: DiffSide) -> Self {
        Filespec::new(side.path, side.mode, side.oid)
    }
}

/// Normalize a resolved pair into old/new filespecs, or `None` when the pair
/// is not diff-worthy (content-equal, or filtered out by the path prefix).
///
/// The equality check runs on the original orientation; reversal is applied
/// afterwards.
pub fn normalize(
    old: BlobRef,
    new: BlobRef,
    options: &DiffOptions,
) -> Option<(Filespec, Filespec)> {
    let mut old_side = DiffSide::from(old);
    let mut new_side = DiffSide::from(new);

    if old_side.oid.is_some()
        && old_side.oid == new_side.oid
        && old_side.mode == new_side.mode
    {
        return None;
    }

    if options.reversed {
        mem::swap(&mut old_side, &mut new_side);
    }

    if let Some(prefix) = options.prefix.as_deref() {
        if !old_side.path.to_string_lossy().starts_with(prefix)
            || !new_side.path.to_string_lossy().starts_with(prefix)
        {
            return None;
        }
    }

    Some((old_side.into(), new_side.into()))
}

/// Normalize a pair and, when diff-worthy, queue it and flush the rendered
/// comparison before returning. Flushing per pair keeps batch output in
/// strict input order.
pub fn submit(
    engine: &mut DiffEngine<'_>,
    old: BlobRef,
    new: BlobRef,
    options: &DiffOptions,
) -> anyhow::Result<()> {
    if let Some((old_spec, new_spec)) = normalize(old, new, options) {
        engine.queue(old_spec, new_spec);
        engine.compute_and_flush()?;
    }

    Ok(())
}
