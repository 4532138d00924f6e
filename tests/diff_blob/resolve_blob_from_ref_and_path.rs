use crate::common::command::{repository_dir, run_bdiff_command};
use crate::common::fixtures::{store_blob, store_commit, store_tree, write_branch};
use assert_fs::TempDir;
use bdiff::artifacts::objects::entry_mode::EntryMode;
use rstest::rstest;

#[rstest]
fn resolve_blob_from_ref_and_path(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    let old_blob = store_blob(dir.path(), "# project\n");
    let new_blob = store_blob(dir.path(), "# project\n\nNow with docs.\n");

    let tree = store_tree(dir.path(), &[("README.md", &old_blob, EntryMode::Regular)]);
    let commit = store_commit(dir.path(), &tree);
    write_branch(dir.path(), "main", &commit);

    // HEAD, @ and the branch name all peel to the same tree entry
    let via_head = run_bdiff_command(dir.path(), &["HEAD:README.md", &new_blob])
        .assert()
        .code(1);
    let via_alias = run_bdiff_command(dir.path(), &["@:README.md", &new_blob])
        .assert()
        .code(1);
    let via_branch = run_bdiff_command(dir.path(), &["main:README.md", &new_blob])
        .assert()
        .code(1);

    let head_stdout = String::from_utf8(via_head.get_output().stdout.clone())?;
    let alias_stdout = String::from_utf8(via_alias.get_output().stdout.clone())?;
    let branch_stdout = String::from_utf8(via_branch.get_output().stdout.clone())?;

    // the recorded tree path shows up in the patch headers
    assert!(
        head_stdout.contains("--- a/README.md"),
        "got {head_stdout:?}"
    );

    pretty_assertions::assert_eq!(head_stdout, alias_stdout);
    pretty_assertions::assert_eq!(head_stdout, branch_stdout);

    Ok(())
}
