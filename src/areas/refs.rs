//! Git references (read-only)
//!
//! References are text files containing either a 40-character SHA-1 (direct
//! reference) or `ref: <path>` (symbolic reference). This tool only ever
//! reads them while resolving blob identifiers; it never updates a ref.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the `.git` directory
    path: Box<Path>,
}

#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { name: String },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                name: symref_match[1].to_string(),
            }))
        } else {
            Ok(Some(SymRefOrOid::Oid(ObjectId::try_parse(
                content.to_string(),
            )?)))
        }
    }
}

impl Refs {
    /// Resolve a ref name to the object id it points to, following symbolic
    /// references recursively. Searched in git's lookup order: the name
    /// itself, then `refs/<name>`, `refs/heads/<name>`, `refs/tags/<name>`.
    pub fn read_ref(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        match self.find_ref_path(name) {
            Some(path) => self.follow(&path),
            None => Ok(None),
        }
    }

    fn find_ref_path(&self, name: &str) -> Option<PathBuf> {
        [
            self.path.join(name),
            self.path.join("refs").join(name),
            self.path.join("refs").join("heads").join(name),
            self.path.join("refs").join("tags").join(name),
        ]
        .into_iter()
        .find(|candidate| candidate.is_file())
    }

    fn follow(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        match SymRefOrOid::read(path)? {
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            Some(SymRefOrOid::SymRef { name }) => match self.find_ref_path(&name) {
                Some(next) => self.follow(&next),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }
}
