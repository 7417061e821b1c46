use crate::table::Row;
use std::collections::HashMap;

/// Column names every catalog row is read through, in record order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "title",
    "readstate",
    "authorname",
    "pubyear",
    "recommender",
    "rating",
];

/// Lower-cased header name to zero-based cell position.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build from the header row. A repeated name keeps its last position.
    pub fn from_header(header: &Row) -> Self {
        let positions = header
            .cells
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_lowercase(), i))
            .collect();
        Self { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&name.to_lowercase()).copied()
    }

    /// Required columns the header does not name.
    pub fn missing(&self) -> Vec<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| self.position(name).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Row {
        Row {
            line: 1,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = ColumnIndex::from_header(&header(&["Title", "AuthorName", "PUBYEAR"]));

        assert_eq!(index.position("title"), Some(0));
        assert_eq!(index.position("authorname"), Some(1));
        assert_eq!(index.position("PubYear"), Some(2));
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let index = ColumnIndex::from_header(&header(&["title", "rating", "Title"]));
        assert_eq!(index.position("title"), Some(2));
    }

    #[test]
    fn test_absent_column_is_none() {
        let index = ColumnIndex::from_header(&header(&["title"]));
        assert_eq!(index.position("rating"), None);
    }

    #[test]
    fn test_missing_reports_required_names() {
        let index = ColumnIndex::from_header(&header(&[
            "title",
            "readstate",
            "authorname",
            "pubyear",
            "notes",
        ]));
        assert_eq!(index.missing(), vec!["recommender", "rating"]);
    }
}
