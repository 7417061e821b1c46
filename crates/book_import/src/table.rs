//! Reads the whole catalog CSV into memory.

use crate::error::{ImportError, QuoteProblem, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One parsed CSV row and the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: u64,
    pub cells: Vec<String>,
}

/// Header row followed by at least one data row.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    pub fn records(&self) -> &[Row] {
        &self.rows[1..]
    }
}

/// Load `path` as a table. The file is closed before this returns.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .map_err(|e| ImportError::Parse(csv::Error::from(e)))?;
    parse_table(&content)
}

/// Parse CSV content. Rows may differ in length; short rows are reported
/// later, when a field is looked up. Quoting is strict: a stray quote in an
/// unquoted field or a quoted field that never closes rejects the input.
pub fn parse_table(content: &[u8]) -> Result<Table> {
    check_quotes(content)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(Row {
            line,
            cells: record.iter().map(String::from).collect(),
        });
    }

    if rows.len() < 2 {
        return Err(ImportError::InsufficientData { rows: rows.len() });
    }

    Ok(Table { rows })
}

#[derive(Clone, Copy)]
enum Field {
    Start,
    Unquoted,
    Quoted { opened_on: u64 },
    ClosingQuote { opened_on: u64 },
}

/// Rejects stray or unbalanced quotes, which the csv reader accepts.
fn check_quotes(content: &[u8]) -> Result<()> {
    let mut line = 1;
    let mut state = Field::Start;
    let mut bytes = content.iter().copied().peekable();

    while let Some(b) = bytes.next() {
        state = match (state, b) {
            (Field::Quoted { opened_on }, b'"') => Field::ClosingQuote { opened_on },
            (Field::Quoted { opened_on }, _) => Field::Quoted { opened_on },
            (Field::ClosingQuote { opened_on }, b'"') => Field::Quoted { opened_on },
            (Field::Start, b'"') => Field::Quoted { opened_on: line },
            (Field::Unquoted, b'"') => {
                return Err(ImportError::Malformed {
                    line,
                    problem: QuoteProblem::BareQuote,
                });
            }
            (_, b',' | b'\n') => Field::Start,
            (Field::ClosingQuote { .. }, b'\r') if matches!(bytes.peek(), None | Some(&b'\n')) => {
                Field::Start
            }
            (Field::ClosingQuote { opened_on }, _) => {
                return Err(ImportError::Malformed {
                    line: opened_on,
                    problem: QuoteProblem::UnbalancedQuote,
                });
            }
            (Field::Start | Field::Unquoted, _) => Field::Unquoted,
        };
        if b == b'\n' {
            line += 1;
        }
    }

    match state {
        Field::Quoted { opened_on } => Err(ImportError::Malformed {
            line: opened_on,
            problem: QuoteProblem::UnbalancedQuote,
        }),
        _ => Ok(()),
    }
}
