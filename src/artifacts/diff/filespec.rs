use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Path rendered for a side that has no object (added/deleted entries)
pub const NULL_PATH: &str = "/dev/null";

/// Abbreviated form of the all-zero oid, shown in index lines for absent sides
const NULL_SHORT_OID: &str = "0000000";

/// One fully-specified side of a diff pair.
///
/// By the time a filespec is built the mode is always resolved; only the oid
/// may be missing, which marks a one-sided (added or deleted) entry.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Filespec {
    pub path: PathBuf,
    pub mode: EntryMode,
    pub oid: Option<ObjectId>,
}

impl Filespec {
    pub fn is_absent(&self) -> bool {
        self.oid.is_none()
    }

    /// Path under the conventional `a/`/`b/` diff prefix.
    pub fn prefixed_path(&self, prefix: &str) -> PathBuf {
        Path::new(prefix).join(&self.path)
    }

    /// Path shown in `---`/`+++` headers: `/dev/null` for absent sides.
    pub fn source_path(&self, prefix: &str) -> PathBuf {
        if self.is_absent() {
            PathBuf::from(NULL_PATH)
        } else {
            self.prefixed_path(prefix)
        }
    }

    pub fn short_oid(&self) -> String {
        match &self.oid {
            Some(oid) => oid.to_short_oid(),
            None => NULL_SHORT_OID.to_string(),
        }
    }
}
