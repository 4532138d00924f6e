//! Helpers that seed loose objects directly through the library, so tests
//! don't depend on a system git binary.

use bdiff::areas::database::Database;
use bdiff::artifacts::objects::blob::Blob;
use bdiff::artifacts::objects::commit::{Author, Commit};
use bdiff::artifacts::objects::entry_mode::EntryMode;
use bdiff::artifacts::objects::object::Object;
use bdiff::artifacts::objects::object_id::ObjectId;
use bdiff::artifacts::objects::tree::{Tree, TreeRecord};
use std::path::Path;

pub fn database(dir: &Path) -> Database {
    Database::new(dir.join(".git").join("objects").into_boxed_path())
}

pub fn store_blob(dir: &Path, content: &str) -> String {
    let blob = Blob::new(content.to_string());
    let oid = blob
        .object_id()
        .expect("Failed to hash blob")
        .as_ref()
        .to_string();
    database(dir).store(blob).expect("Failed to store blob");
    oid
}

pub fn store_tree(dir: &Path, entries: &[(&str, &str, EntryMode)]) -> String {
    let mut tree = Tree::default();
    for (name, oid, mode) in entries {
        let oid = ObjectId::try_parse(oid.to_string()).expect("Invalid entry oid");
        tree.add_entry(name.to_string(), TreeRecord::new(oid, *mode));
    }

    let oid = tree
        .object_id()
        .expect("Failed to hash tree")
        .as_ref()
        .to_string();
    database(dir).store(tree).expect("Failed to store tree");
    oid
}

pub fn store_commit(dir: &Path, tree_oid: &str) -> String {
    let tree_oid = ObjectId::try_parse(tree_oid.to_string()).expect("Invalid tree oid");
    let author = Author::try_from("fake_user <fake_email@email.com> 1672574400 +0000")
        .expect("Invalid author");
    let commit = Commit::new(Vec::new(), tree_oid, author, "Initial commit".to_string());

    let oid = commit
        .object_id()
        .expect("Failed to hash commit")
        .as_ref()
        .to_string();
    database(dir).store(commit).expect("Failed to store commit");
    oid
}

/// Point a branch at a commit; HEAD already symrefs `refs/heads/main`.
pub fn write_branch(dir: &Path, name: &str, oid: &str) {
    let ref_path = dir.join(".git").join("refs").join("heads").join(name);
    std::fs::write(ref_path, format!("{oid}\n")).expect("Failed to write branch ref");
}
