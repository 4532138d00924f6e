use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn same_blob_produces_no_output(repository_dir: TempDir) {
    let dir = repository_dir;
    let oid = store_blob(dir.path(), "one\ntwo\nthree\n");

    run_bdiff_command(dir.path(), &[&oid, &oid])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}
