use crate::areas::repository::Repository;
use crate::artifacts::diff::engine::DiffEngine;
use crate::artifacts::diff::{DiffOptions, pair};
use crate::artifacts::resolve::blob_ref::BlobRef;
use std::io::BufRead;

impl Repository {
    /// Compare a single pair of blob references.
    ///
    /// Returns whether any differences were shown, which the caller turns
    /// into the process exit code.
    pub fn diff_blob(&self, old: &str, new: &str, options: &DiffOptions) -> anyhow::Result<bool> {
        let mut engine = DiffEngine::new(self);

        let old = BlobRef::resolve(old, self)?;
        let new = BlobRef::resolve(new, self)?;

        pair::submit(&mut engine, old, new, options)?;

        Ok(engine.changes_found())
    }

    /// Compare one pair of blob references per input line.
    ///
    /// Each line holds exactly two space-separated tokens. Pairs are
    /// resolved and flushed in input order; the first malformed line or
    /// resolution failure aborts the batch, keeping the output already
    /// flushed for earlier lines.
    pub fn diff_blob_stdin(
        &self,
        input: impl BufRead,
        options: &DiffOptions,
    ) -> anyhow::Result<bool> {
        let mut engine = DiffEngine::new(self);

        for line in input.lines() {
            let line = line?;
            // tolerate CRLF line endings
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let tokens: Vec<&str> = line.split(' ').collect();

            let [old, new] = tokens[..] else {
                anyhow::bail!("two blobs not provided");
            };

            let old = BlobRef::resolve(old, self)?;
            let new = BlobRef::resolve(new, self)?;

            pair::submit(&mut engine, old, new, options)?;
        }

        Ok(engine.changes_found())
    }
}
