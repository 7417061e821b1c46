use crate::columns::ColumnIndex;
use crate::error::{FieldProblem, RowError};
use crate::table::Row;
use chrono::NaiveDate;

/// Rating value meaning "not rated"; suppresses the rating taxonomy.
pub const NOT_RATED: &str = "NR";

/// One catalog entry, stamped with the date of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub read_state: String,
    pub author_name: String,
    pub pub_year: String,
    pub recommender: String,
    pub rating: String,
    pub date: NaiveDate,
}

impl Book {
    /// Pull the six catalog fields out of `row`.
    ///
    /// Every field is attempted before failing, so the error names all the
    /// columns the row could not supply.
    pub fn from_row(row: &Row, columns: &ColumnIndex, date: NaiveDate) -> Result<Self, RowError> {
        let mut problems = Vec::new();
        let mut field = |name: &'static str| -> String {
            match columns.position(name) {
                None => {
                    problems.push(FieldProblem::NotInHeader(name));
                    String::new()
                }
                Some(index) => match row.cells.get(index) {
                    Some(cell) => cell.clone(),
                    None => {
                        problems.push(FieldProblem::CellMissing {
                            field: name,
                            index,
                            cells: row.cells.len(),
                        });
                        String::new()
                    }
                },
            }
        };

        let book = Book {
            title: field("title"),
            read_state: field("readstate"),
            author_name: field("authorname"),
            pub_year: field("pubyear"),
            recommender: field("recommender"),
            rating: field("rating"),
            date,
        };

        if problems.is_empty() {
            Ok(book)
        } else {
            Err(RowError::MissingFields {
                line: row.line,
                problems,
            })
        }
    }

    pub fn has_rating(&self) -> bool {
        !self.rating.is_empty() && self.rating != NOT_RATED
    }

    pub fn has_recommender(&self) -> bool {
        !self.recommender.is_empty()
    }
}
