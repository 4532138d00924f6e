use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn reverse_flag_swaps_sides(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let old = store_blob(dir.path(), "alpha\nbeta\n");
    let new = store_blob(dir.path(), "alpha\ngamma\n");

    let reversed = run_bdiff_command(dir.path(), &["-R", &old, &new])
        .assert()
        .code(1);
    let swapped = run_bdiff_command(dir.path(), &[&new, &old]).assert().code(1);

    pretty_assertions::assert_eq!(
        String::from_utf8(reversed.get_output().stdout.clone())?,
        String::from_utf8(swapped.get_output().stdout.clone())?,
    );

    Ok(())
}
