//! Git tree object
//!
//! Trees map entry names to (mode, oid) records, one level of a directory
//! snapshot at a time. Nested directories are entries whose oid points at
//! another tree.
//!
//! On disk: `tree <size>\0` followed by `<mode> <name>\0<20-byte-sha1>` per
//! entry, sorted by name.

use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// A single (mode, oid) record stored under a name in a tree.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeRecord {
    pub oid: ObjectId,
    pub mode: EntryMode,
}

#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: BTreeMap<String, TreeRecord>,
}

impl Tree {
    pub fn add_entry(&mut self, name: impl Into<String>, record: TreeRecord) {
        self.entries.insert(name.into(), record);
    }

    pub fn get(&self, name: &str) -> Option<&TreeRecord> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &TreeRecord)> {
        self.entries.iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();

        for (name, record) in &self.entries {
            let header = format!("{:o} {}", record.mode.as_u32(), name);
            content_bytes.write_all(header.as_bytes())?;
            content_bytes.push(0);
            record.oid.write_h40_to(&mut content_bytes)?;
        }

        let mut tree_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        tree_bytes.write_all(header.as_bytes())?;
        tree_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            if mode_bytes.last() != Some(&b' ') {
                return Err(anyhow::anyhow!("unexpected EOF in mode"));
            }
            mode_bytes.pop(); // drop the space

            let mode_str = std::str::from_utf8(&mode_bytes)?;
            let mode = EntryMode::from_octal_str(mode_str)?;

            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || name_bytes.last() != Some(&b'\0') {
                return Err(anyhow::anyhow!("unexpected EOF in name"));
            }
            name_bytes.pop(); // drop NUL
            let name = std::str::from_utf8(&name_bytes)?.to_owned();

            let oid =
                ObjectId::read_h40_from(&mut reader).context("unexpected EOF in object id")?;

            entries.insert(name, TreeRecord::new(oid, mode));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}
