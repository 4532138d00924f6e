use crate::common::command::{repository_dir, run_bdiff_command_with_stdin};
use crate::common::fixtures::store_blob;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn crlf_input_parses_cleanly(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let first = store_blob(dir.path(), "1\n");
    let second = store_blob(dir.path(), "2\n");

    let crlf_input = format!("{first} {second}\r\n{first} {first}\r\n");
    let lf_input = format!("{first} {second}\n{first} {first}\n");

    let crlf = run_bdiff_command_with_stdin(dir.path(), &["--stdin"], &crlf_input)
        .assert()
        .code(1);
    let lf = run_bdiff_command_with_stdin(dir.path(), &["--stdin"], &lf_input)
        .assert()
        .code(1);

    pretty_assertions::assert_eq!(
        String::from_utf8(crlf.get_output().stdout.clone())?,
        String::from_utf8(lf.get_output().stdout.clone())?,
    );

    Ok(())
}
