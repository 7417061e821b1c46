use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that stop the whole run before any file is written.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error opening CSV file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading CSV file: {0}")]
    Parse(#[from] csv::Error),

    #[error("Error reading CSV file: parse error on line {line}: {problem}")]
    Malformed { line: u64, problem: QuoteProblem },

    #[error("CSV file doesn't have enough data.")]
    InsufficientData { rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteProblem {
    #[error("bare \" in non-quoted field")]
    BareQuote,
    #[error("extraneous or missing \" in quoted field")]
    UnbalancedQuote,
}

/// Failures scoped to a single data row. The batch carries on after these.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("Error reading row at line {line}: {}", join_problems(.problems))]
    MissingFields {
        line: u64,
        problems: Vec<FieldProblem>,
    },

    #[error("Error writing to file: {source}")]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a required field could not be read from a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// No header cell carries this name.
    NotInHeader(&'static str),
    /// The header names the column but the row stops before it.
    CellMissing {
        field: &'static str,
        index: usize,
        cells: usize,
    },
}

impl FieldProblem {
    pub fn field(&self) -> &'static str {
        match self {
            FieldProblem::NotInHeader(field) => field,
            FieldProblem::CellMissing { field, .. } => field,
        }
    }
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldProblem::NotInHeader(field) => write!(f, "column '{}' not in header", field),
            FieldProblem::CellMissing {
                field,
                index,
                cells,
            } => write!(
                f,
                "column '{}' is at position {} but the row has {} cells",
                field,
                index + 1,
                cells
            ),
        }
    }
}

fn join_problems(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ImportError>;
