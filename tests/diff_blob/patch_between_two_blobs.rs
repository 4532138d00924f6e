use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn patch_between_two_blobs(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let old = store_blob(dir.path(), "one\ntwo\nthree\n");
    let new = store_blob(dir.path(), "one\nTWO\nthree\n");

    let expected = format!(
        "diff --git a/{old} b/{new}\n\
         index {}..{} 100644\n\
         --- a/{old}\n\
         +++ b/{new}\n\
         @@ -1,3 +1,3 @@\n one\n-two\n+TWO\n three\n",
        &old[..7],
        &new[..7],
    );

    let assert = run_bdiff_command(dir.path(), &[&old, &new]).assert().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
