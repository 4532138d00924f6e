//! Patch rendering
//!
//! Holds at most one queued pair at a time and renders it in git's patch
//! format through the repository writer. Flushing per pair keeps batch
//! output in input order without buffering whole patches.

use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_algorithm::{Hunk, MyersDiff};
use crate::artifacts::diff::filespec::Filespec;

use colored::Colorize;

pub struct DiffEngine<'r> {
    repository: &'r Repository,
    queued: Option<(Filespec, Filespec)>,
    changes_found: bool,
}

impl<'r> DiffEngine<'r> {
    pub fn new(repository: &'r Repository) -> Self {
        DiffEngine {
            repository,
            queued: None,
            changes_found: false,
        }
    }

    /// Whether any queued pair reached rendering. Drives the process exit
    /// code: equal and filtered-out pairs never reach the queue.
    pub fn changes_found(&self) -> bool {
        self.changes_found
    }

    pub fn queue(&mut self, old: Filespec, new: Filespec) {
        self.queued = Some((old, new));
    }

    /// Render the queued pair, if any. Reaching this point counts as a
    /// change even when the rendered patch body turns out empty.
    pub fn compute_and_flush(&mut self) -> anyhow::Result<()> {
        let Some((old, new)) = self.queued.take() else {
            return Ok(());
        };

        self.changes_found = true;

        let a_path = old.prefixed_path("a");
        let b_path = new.prefixed_path("b");

        writeln!(
            self.repository.writer(),
            "{}",
            format!("diff --git {} {}", a_path.display(), b_path.display()).bold()
        )?;
        self.print_mode_lines(&old, &new)?;
        self.print_content(&old, &new)?;

        Ok(())
    }

    fn print_mode_lines(&self, old: &Filespec, new: &Filespec) -> anyhow::Result<()> {
        if old.is_absent() {
            writeln!(
                self.repository.writer(),
                "{}",
                format!("new file mode {}", new.mode).bold()
            )?;
        } else if new.is_absent() {
            writeln!(
                self.repository.writer(),
                "{}",
                format!("deleted file mode {}", old.mode).bold()
            )?;
        } else if old.mode != new.mode {
            writeln!(
                self.repository.writer(),
                "{}",
                format!("old mode {}", old.mode).bold()
            )?;
            writeln!(
                self.repository.writer(),
                "{}",
                format!("new mode {}", new.mode).bold()
            )?;
        }

        Ok(())
    }

    fn print_content(&self, old: &Filespec, new: &Filespec) -> anyhow::Result<()> {
        // mode-only change: no content section
        if old.oid == new.oid {
            return Ok(());
        }

        let mut oid_range = format!("index {}..{}", old.short_oid(), new.short_oid());
        if old.mode == new.mode {
            oid_range.push_str(format!(" {}", old.mode).as_str());
        }

        writeln!(self.repository.writer(), "{}", oid_range.bold())?;
        writeln!(
            self.repository.writer(),
            "{}",
            format!("--- {}", old.source_path("a").display()).bold()
        )?;
        writeln!(
            self.repository.writer(),
            "{}",
            format!("+++ {}", new.source_path("b").display()).bold()
        )?;

        let a = self.read_lines(old)?;
        let b = self.read_lines(new)?;

        for hunk in MyersDiff::new(&a, &b).hunks() {
            self.print_hunk(&hunk)?;
        }

        Ok(())
    }

    fn print_hunk(&self, hunk: &Hunk<String>) -> anyhow::Result<()> {
        let a_offset = format!("{},{}", hunk.a_start(), hunk.a_size());
        let b_offset = format!("{},{}", hunk.b_start(), hunk.b_size());

        writeln!(
            self.repository.writer(),
            "{}",
            format!("@@ -{a_offset} +{b_offset} @@").cyan()
        )?;

        for edit in hunk.edits() {
            writeln!(self.repository.writer(), "{}", edit)?;
        }

        Ok(())
    }

    fn read_lines(&self, filespec: &Filespec) -> anyhow::Result<Vec<String>> {
        let Some(oid) = &filespec.oid else {
            return Ok(Vec::new());
        };

        let blob = self
            .repository
            .database()
            .parse_object_as_blob(oid)?
            .ok_or_else(|| anyhow::anyhow!("object {oid} is not a blob"))?;

        Ok(blob.lines())
    }
}
