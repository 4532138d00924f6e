use crate::common::command::{repository_dir, run_bdiff_command_with_stdin};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn identical_pairs_exit_clean(repository_dir: TempDir) {
    let dir = repository_dir;
    let first = store_blob(dir.path(), "1\n");
    let second = store_blob(dir.path(), "2\n");

    let input = format!("{first} {first}\n{second} {second}\n");

    run_bdiff_command_with_stdin(dir.path(), &["--stdin"], &input)
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn empty_input_exits_clean(repository_dir: TempDir) {
    let dir = repository_dir;

    run_bdiff_command_with_stdin(dir.path(), &["--stdin"], "")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}
