use bdiff::areas::repository::Repository;
use bdiff::artifacts::core::PagerWriter;
use bdiff::artifacts::diff::DiffOptions;
use clap::Parser;
use is_terminal::IsTerminal;
use std::io::Write;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "bdiff",
    version = "0.1.0",
    about = "Compare the content and mode of pairs of blobs",
    long_about = "Compares pairs of blob references outside of any tree context. \
    Blobs are named by object id, abbreviated object id, ref, or <rev>:<path>, \
    either as two positional arguments or as one pair per line on stdin.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(help = "The two blobs to compare, unless --stdin is given")]
    blobs: Vec<String>,
    #[arg(long, help = "Read one blob pair per line from standard input")]
    stdin: bool,
    #[arg(short = 'R', long = "reverse", help = "Swap the two sides of every comparison")]
    reverse: bool,
    #[arg(long, help = "Only diff pairs where both paths start with this prefix")]
    prefix: Option<String>,
}

enum Mode {
    Pair(String, String),
    Stdin,
}

#[derive(Debug)]
struct UsageError;

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "usage: bdiff [-R] [--prefix <prefix>] (<old-blob> <new-blob> | --stdin)"
        )
    }
}

impl std::error::Error for UsageError {}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let mode = match (cli.blobs.as_slice(), cli.stdin) {
        ([old, new], false) => Mode::Pair(old.clone(), new.clone()),
        ([], true) => Mode::Stdin,
        _ => return Err(UsageError.into()),
    };

    let options = DiffOptions::new(cli.reverse, cli.prefix);

    let use_pager =
        std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none();
    let pager = if use_pager {
        Some(minus::Pager::new())
    } else {
        None
    };
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let repository = Repository::new(&pwd.to_string_lossy(), writer)?;

    let changes_found = match mode {
        Mode::Pair(old, new) => repository.diff_blob(&old, &new, &options)?,
        Mode::Stdin => repository.diff_blob_stdin(std::io::stdin().lock(), &options)?,
    };

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(changes_found)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::from(129),
            };
        }
    };

    match run(cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) if err.is::<UsageError>() => {
            eprintln!("{err}");
            ExitCode::from(129)
        }
        Err(err) => {
            eprintln!("fatal: {err:#}");
            ExitCode::from(128)
        }
    }
}
