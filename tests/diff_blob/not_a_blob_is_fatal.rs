use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::{store_blob, store_tree};
use assert_fs::TempDir;
use bdiff::artifacts::objects::entry_mode::EntryMode;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn not_a_blob_is_fatal(repository_dir: TempDir) {
    let dir = repository_dir;
    let blob = store_blob(dir.path(), "content\n");
    let tree = store_tree(dir.path(), &[("file.txt", &blob, EntryMode::Regular)]);

    run_bdiff_command(dir.path(), &[&tree, &blob])
        .assert()
        .code(128)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a blob"));
}
