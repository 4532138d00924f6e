use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::{store_blob, store_commit, store_tree, write_branch};
use assert_fs::TempDir;
use bdiff::artifacts::objects::entry_mode::EntryMode;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::full_oid_with_no_object("dddddddddddddddddddddddddddddddddddddddd")]
#[case::unknown_ref_name("no-such-branch")]
fn unknown_object_is_fatal(repository_dir: TempDir, #[case] token: &str) {
    let dir = repository_dir;
    let blob = store_blob(dir.path(), "content\n");

    run_bdiff_command(dir.path(), &[token, &blob])
        .assert()
        .code(128)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("fatal:"));
}

#[rstest]
fn path_missing_from_tree_is_fatal(repository_dir: TempDir) {
    let dir = repository_dir;
    let blob = store_blob(dir.path(), "content\n");
    let tree = store_tree(dir.path(), &[("present.txt", &blob, EntryMode::Regular)]);
    let commit = store_commit(dir.path(), &tree);
    write_branch(dir.path(), "main", &commit);

    run_bdiff_command(dir.path(), &["HEAD:missing.txt", &blob])
        .assert()
        .code(128)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "path 'missing.txt' does not exist in 'HEAD'",
        ));
}
