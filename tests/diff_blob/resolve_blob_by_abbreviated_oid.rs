use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn resolve_blob_by_abbreviated_oid(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let old = store_blob(dir.path(), "abbreviated old\n");
    let new = store_blob(dir.path(), "abbreviated new\n");

    let old_abbrev = &old[..10];
    let new_abbrev = &new[..10];

    // abbreviated tokens keep their short form as the display name
    let expected_header = format!("diff --git a/{old_abbrev} b/{new_abbrev}");

    let full = run_bdiff_command(dir.path(), &[&old, &new]).assert().code(1);
    let abbreviated = run_bdiff_command(dir.path(), &[old_abbrev, new_abbrev])
        .assert()
        .code(1);

    let stdout = String::from_utf8(abbreviated.get_output().stdout.clone())?;
    assert!(stdout.starts_with(&expected_header), "got {stdout:?}");

    // hunks are identical regardless of how the blobs were named
    let full_stdout = String::from_utf8(full.get_output().stdout.clone())?;
    pretty_assertions::assert_eq!(
        stdout.lines().skip(4).collect::<Vec<_>>(),
        full_stdout.lines().skip(4).collect::<Vec<_>>(),
    );

    Ok(())
}
