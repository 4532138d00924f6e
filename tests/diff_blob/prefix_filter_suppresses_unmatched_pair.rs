use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::{store_blob, store_tree};
use assert_fs::TempDir;
use bdiff::artifacts::objects::entry_mode::EntryMode;
use predicates::prelude::predicate;
use rstest::rstest;

fn tree_with_main(dir: &std::path::Path, content: &str) -> String {
    let blob = store_blob(dir, content);
    let subtree = store_tree(dir, &[("main.rs", &blob, EntryMode::Regular)]);
    store_tree(dir, &[("src", &subtree, EntryMode::Directory)])
}

#[rstest]
fn prefix_filter_suppresses_unmatched_pair(repository_dir: TempDir) {
    let dir = repository_dir;
    let old_tree = tree_with_main(dir.path(), "fn main() {}\n");
    let new_tree = tree_with_main(dir.path(), "fn main() { todo!() }\n");

    let old_ref = format!("{old_tree}:src/main.rs");
    let new_ref = format!("{new_tree}:src/main.rs");

    run_bdiff_command(
        dir.path(),
        &["--prefix", "src/", &old_ref, &new_ref],
    )
    .assert()
    .code(1)
    .stdout(predicate::str::contains("diff --git a/src/main.rs b/src/main.rs"));

    run_bdiff_command(
        dir.path(),
        &["--prefix", "lib/", &old_ref, &new_ref],
    )
    .assert()
    .code(0)
    .stdout(predicate::str::is_empty());
}
