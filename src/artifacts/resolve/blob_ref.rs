use crate::areas::repository::Repository;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::resolve::{MIN_OID_PREFIX, REF_ALIASES};
use std::path::{Path, PathBuf};

/// A fully-resolved blob reference.
///
/// Supported token forms:
/// - full 40-character OIDs
/// - abbreviated OIDs (unique prefix, at least 4 hex characters)
/// - ref names: `HEAD`, `@` (alias for `HEAD`), branches, tags
/// - `<rev>:<path>` — peels `rev` to a tree and walks `path`; this is the
///   only form that records a path and mode as resolution side-context
///
/// `oid` is `None` only for the synthetic "no object on this side" case used
/// by one-sided diff entries; resolution itself always produces a real blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    /// The token as given by the user, used for display
    pub name: String,
    pub oid: Option<ObjectId>,
    /// Mode recorded by `<rev>:<path>` resolution, unset otherwise
    pub mode: Option<EntryMode>,
    /// Path recorded by `<rev>:<path>` resolution, unset otherwise
    pub path: Option<PathBuf>,
}

impl BlobRef {
    /// Resolve a token to a blob, failing if it names no object, more than
    /// one object, or an object that is not a blob.
    pub fn resolve(token: &str, repository: &Repository) -> anyhow::Result<Self> {
        if let Some((rev, path)) = token.split_once(':') {
            return Self::resolve_entry(token, rev, path, repository);
        }

        let oid = Self::resolve_rev(token, repository)?;

        if repository.database().get_object_type(&oid)? != ObjectType::Blob {
            anyhow::bail!("object {token} is not a blob");
        }

        Ok(BlobRef {
            name: token.to_string(),
            oid: Some(oid),
            mode: None,
            path: None,
        })
    }

    /// Resolve the revision part of a token to an object id. Refs win over
    /// OID-like strings, matching git's preference when a name is ambiguous.
    fn resolve_rev(rev: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        let name = *REF_ALIASES.get(rev).unwrap_or(&rev);

        if let Some(oid) = repository.refs().read_ref(name)? {
            return Ok(oid);
        }

        if !Self::looks_like_oid(rev) {
            anyhow::bail!("invalid object {rev} given");
        }

        if rev.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(rev.to_string())?;
            // confirm the object exists
            repository
                .database()
                .get_object_type(&oid)
                .map_err(|_| anyhow::anyhow!("invalid object {rev} given"))?;
            return Ok(oid);
        }

        let mut matches = repository.database().find_objects_by_prefix(rev)?;
        match matches.len() {
            0 => anyhow::bail!("invalid object {rev} given"),
            1 => Ok(matches.remove(0)),
            _ => anyhow::bail!("short object id {rev} is ambiguous"),
        }
    }

    /// Resolve `<rev>:<path>`: peel the revision to a tree and walk the path
    /// one component at a time, recording the entry's mode and path.
    fn resolve_entry(
        token: &str,
        rev: &str,
        path: &str,
        repository: &Repository,
    ) -> anyhow::Result<Self> {
        let rev_oid = Self::resolve_rev(rev, repository)?;
        let mut tree = Self::peel_to_tree(rev, &rev_oid, repository)?;

        let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
        let Some((leaf, dirs)) = components.split_last() else {
            anyhow::bail!("invalid object {token} given");
        };

        for dir in dirs {
            let record = tree
                .get(dir)
                .ok_or_else(|| anyhow::anyhow!("path '{path}' does not exist in '{rev}'"))?;
            if !record.mode.is_tree() {
                anyhow::bail!("path '{path}' does not exist in '{rev}'");
            }
            tree = repository
                .database()
                .parse_object_as_tree(&record.oid)?
                .ok_or_else(|| anyhow::anyhow!("path '{path}' does not exist in '{rev}'"))?;
        }

        let record = tree
            .get(leaf)
            .ok_or_else(|| anyhow::anyhow!("path '{path}' does not exist in '{rev}'"))?;

        if record.mode.is_tree() {
            anyhow::bail!("object {token} is not a blob");
        }

        Ok(BlobRef {
            name: token.to_string(),
            oid: Some(record.oid.clone()),
            mode: Some(record.mode),
            path: Some(PathBuf::from(path)),
        })
    }

    fn peel_to_tree(
        rev: &str,
        oid: &ObjectId,
        repository: &Repository,
    ) -> anyhow::Result<Tree> {
        let database = repository.database();

        let tree_oid = match database.get_object_type(oid)? {
            ObjectType::Tree => oid.clone(),
            ObjectType::Commit => {
                let commit = database
                    .parse_object_as_commit(oid)?
                    .ok_or_else(|| anyhow::anyhow!("invalid object {rev} given"))?;
                commit.tree_oid().clone()
            }
            ObjectType::Blob => anyhow::bail!("object {rev} is not a tree"),
        };

        database
            .parse_object_as_tree(&tree_oid)?
            .ok_or_else(|| anyhow::anyhow!("invalid object {rev} given"))
    }

    fn looks_like_oid(s: &str) -> bool {
        s.len() >= MIN_OID_PREFIX
            && s.len() <= OBJECT_ID_LENGTH
            && s.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Path this reference should be diffed under: the recorded path when the
    /// token carried one, the display name otherwise.
    pub fn diff_path(&self) -> &Path {
        match &self.path {
            Some(path) => path,
            None => Path::new(&self.name),
        }
    }
}
