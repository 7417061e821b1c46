//! Markdown page with TOML front matter.
//!
//! Layout, in order:
//!
//! ```text
//! +++
//! title = "..."
//! date = YYYY-MM-DD
//! # comment lines
//! [taxonomies]
//!   readstate = ["..."]
//!   authorname = ["..."]
//!   pubyear = ["..."]
//!   rating = ["..."]        (only when rated)
//!   recommender = ["..."]   (only when present)
//! +++
//! ```
//!
//! followed by an empty body.

use crate::book::Book;
use std::fmt;

pub const FRONT_MATTER_DELIMITER: &str = "+++";

const GUIDANCE: [&str; 2] = [
    "# if you don't use a taxonomy, delete it",
    "# empty fields not allowed",
];

/// Render the complete page for `book`.
pub fn render_document(book: &Book) -> String {
    Document(book).to_string()
}

/// Page for one book; `Display` writes the exact file content.
pub struct Document<'a>(pub &'a Book);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;

        writeln!(f, "{}", FRONT_MATTER_DELIMITER)?;
        writeln!(f, "title = {}", toml_string(&book.title))?;
        writeln!(f, "date = {}", book.date.format("%Y-%m-%d"))?;
        for line in GUIDANCE {
            writeln!(f, "{}", line)?;
        }

        writeln!(f, "[taxonomies]")?;
        write_taxonomy(f, "readstate", &book.read_state)?;
        write_taxonomy(f, "authorname", &book.author_name)?;
        write_taxonomy(f, "pubyear", &book.pub_year)?;
        if book.has_rating() {
            write_taxonomy(f, "rating", &book.rating)?;
        }
        if book.has_recommender() {
            write_taxonomy(f, "recommender", &book.recommender)?;
        }

        writeln!(f, "{}", FRONT_MATTER_DELIMITER)?;
        writeln!(f)
    }
}

fn write_taxonomy(f: &mut fmt::Formatter<'_>, key: &str, value: &str) -> fmt::Result {
    writeln!(f, "  {} = [{}]", key, toml_string(value))
}

/// Quote `s` as a TOML string value.
pub fn toml_string(s: &str) -> String {
    toml::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dune() -> Book {
        Book {
            title: "Dune".to_string(),
            read_state: "read".to_string(),
            author_name: "Frank Herbert".to_string(),
            pub_year: "1965".to_string(),
            recommender: String::new(),
            rating: "NR".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_unrated_without_recommender() {
        let expected = "+++
title = \"Dune\"
date = 2024-01-15
# if you don't use a taxonomy, delete it
# empty fields not allowed
[taxonomies]
  readstate = [\"read\"]
  authorname = [\"Frank Herbert\"]
  pubyear = [\"1965\"]
+++

";
        assert_eq!(render_document(&dune()), expected);
    }

    #[test]
    fn test_rating_and_recommender_order() {
        let mut book = dune();
        book.rating = "5".to_string();
        book.recommender = "Ann".to_string();

        let doc = render_document(&book);
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(
            lines[6..],
            [
                "  readstate = [\"read\"]",
                "  authorname = [\"Frank Herbert\"]",
                "  pubyear = [\"1965\"]",
                "  rating = [\"5\"]",
                "  recommender = [\"Ann\"]",
                "+++",
                "",
            ]
        );
    }

    #[test]
    fn test_empty_rating_is_omitted() {
        let mut book = dune();
        book.rating = String::new();
        assert!(!render_document(&book).contains("rating"));
    }

    #[test]
    fn test_recommender_only() {
        let mut book = dune();
        book.recommender = "Ann".to_string();

        let doc = render_document(&book);
        assert_eq!(doc.matches("recommender = ").count(), 1);
        assert!(!doc.contains("rating"));
    }

    fn parse_value(quoted: &str) -> String {
        let table: toml::Table = toml::from_str(&format!("v = {}", quoted)).unwrap();
        table["v"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_toml_string_plain_text_is_basic_string() {
        assert_eq!(toml_string("plain text"), "\"plain text\"");
        assert_eq!(toml_string("Bob's"), "\"Bob's\"");
    }

    #[test]
    fn test_toml_string_round_trips_special_characters() {
        for value in [
            r#"say "hi""#,
            r"C:\dir",
            "a\nb\tc",
            "\u{1}",
            r#"both \ and ""#,
            "it's ''' quoted",
        ] {
            assert_eq!(parse_value(&toml_string(value)), value);
        }
    }

    #[test]
    fn test_quoted_title_yields_valid_front_matter() {
        let mut book = dune();
        book.title = r#"The "Real" C:\ Story"#.to_string();
        book.recommender = "Ann\nLee".to_string();

        let doc = render_document(&book);
        let front = doc
            .strip_prefix("+++\n")
            .and_then(|rest| rest.rsplit_once("+++\n"))
            .map(|(front, _)| front)
            .unwrap();
        let table: toml::Table = toml::from_str(front).unwrap();

        assert_eq!(table["title"].as_str(), Some(book.title.as_str()));
        assert_eq!(
            table["taxonomies"]["recommender"][0].as_str(),
            Some("Ann\nLee")
        );
    }
}
