use crate::common::command::{repository_dir, run_bdiff_command_with_stdin};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn batch_pairs_emit_in_input_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let first = store_blob(dir.path(), "1\n");
    let second = store_blob(dir.path(), "2\n");
    let third = store_blob(dir.path(), "3\n");

    let input = format!("{first} {second}\n{second} {third}\n");
    let expected = format!(
        "diff --git a/{first} b/{second}\n\
         index {}..{} 100644\n\
         --- a/{first}\n\
         +++ b/{second}\n\
         @@ -1,1 +1,1 @@\n-1\n+2\n\
         diff --git a/{second} b/{third}\n\
         index {}..{} 100644\n\
         --- a/{second}\n\
         +++ b/{third}\n\
         @@ -1,1 +1,1 @@\n-2\n+3\n",
        &first[..7],
        &second[..7],
        &second[..7],
        &third[..7],
    );

    let assert = run_bdiff_command_with_stdin(dir.path(), &["--stdin"], &input)
        .assert()
        .code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
