use anyhow::Result;
use book_import::{run, ImportOptions};
use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "book-import")]
#[command(version)]
#[command(about = "Convert book_import.csv into one Markdown page per book")]
#[command(
    long_about = "Reads book_import.csv from the working directory and writes \
                  <title>.md next to it for every row, with TOML front matter \
                  holding the book's taxonomies. Existing pages are overwritten."
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    match import() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn import() -> Result<()> {
    // One date for the whole run.
    let options = ImportOptions::new(Local::now().date_naive());
    let mut stdout = std::io::stdout().lock();
    run(&options, &mut stdout)?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
