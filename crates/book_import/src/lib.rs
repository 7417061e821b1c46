//! Book Import
//!
//! Converts a CSV book catalog into one Markdown page per row, each page
//! carrying TOML front matter for a static site generator's taxonomies.
//!
//! The pipeline is strictly sequential: the whole table is loaded, the header
//! is indexed, then each row is mapped to a [`Book`], rendered and written
//! before the next row is touched. Row-level failures are reported and
//! skipped; only an unreadable or near-empty input stops the run.
//!
//! # Example
//!
//! ```no_run
//! use book_import::{run, ImportOptions};
//! use chrono::Local;
//!
//! let options = ImportOptions::new(Local::now().date_naive());
//! let summary = run(&options, &mut std::io::stdout()).unwrap();
//! println!("{} pages", summary.generated.len());
//! ```

pub mod book;
pub mod columns;
pub mod emit;
pub mod error;
pub mod render;
pub mod table;

pub use book::Book;
pub use columns::ColumnIndex;
pub use error::{FieldProblem, ImportError, QuoteProblem, RowError};
pub use table::{Row, Table};

use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Input file read when no other path is given.
pub const DEFAULT_INPUT: &str = "book_import.csv";

#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Stamped on every page written by this run.
    pub date: NaiveDate,
}

impl ImportOptions {
    /// Read `book_import.csv` and write into the working directory.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from("."),
            date,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    /// Paths written, in row order. A path repeats when titles collide.
    pub generated: Vec<PathBuf>,
    pub failed: usize,
}

/// Run the whole import, writing one status line per data row to `status`.
pub fn run<W: Write>(options: &ImportOptions, status: &mut W) -> Result<RunSummary, ImportError> {
    let table = table::load_table(&options.input)?;
    debug!(
        input = %options.input.display(),
        rows = table.records().len(),
        "loaded catalog"
    );

    let columns = ColumnIndex::from_header(table.header());
    let missing = columns.missing();
    if !missing.is_empty() {
        warn!(columns = ?missing, "header lacks required columns; every row will fail");
    }

    let mut summary = RunSummary::default();
    let mut written_by: HashMap<String, u64> = HashMap::new();

    for row in table.records() {
        match import_row(row, &columns, options) {
            Ok((file_name, path)) => {
                if let Some(previous) = written_by.insert(file_name.clone(), row.line) {
                    warn!(
                        file = %file_name,
                        previous_line = previous,
                        line = row.line,
                        "file name collision, later row overwrites earlier output"
                    );
                }
                report(status, format_args!("Generated {}", file_name));
                summary.generated.push(path);
            }
            Err(e) => {
                warn!(line = row.line, error = %e, "row skipped");
                report(status, format_args!("{}", e));
                summary.failed += 1;
            }
        }
    }

    info!(
        generated = summary.generated.len(),
        failed = summary.failed,
        "import finished"
    );
    Ok(summary)
}

fn import_row(
    row: &Row,
    columns: &ColumnIndex,
    options: &ImportOptions,
) -> Result<(String, PathBuf), RowError> {
    let book = Book::from_row(row, columns, options.date)?;
    let content = render::render_document(&book);
    let file_name = emit::output_file_name(&book.title);
    let path = emit::write_document(&options.output_dir, &file_name, &content)?;
    Ok((file_name, path))
}

// Status lines are best effort.
fn report<W: Write>(status: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(status, "{}", line) {
        debug!(error = %e, "could not write status line");
    }
}
