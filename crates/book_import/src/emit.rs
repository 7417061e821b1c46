use crate::error::RowError;
use std::fs;
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "md";

/// Turn a title into a file stem: spaces become `_`, `/` becomes `-`,
/// `:` and `'` are dropped. Everything else passes through.
pub fn sanitize_file_name(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '/' => Some('-'),
            ':' | '\'' => None,
            c => Some(c),
        })
        .collect()
}

pub fn output_file_name(title: &str) -> String {
    format!("{}.{}", sanitize_file_name(title), OUTPUT_EXTENSION)
}

/// Write `content` to `dir/<file_name>`, replacing whatever was there.
pub fn write_document(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, RowError> {
    let path = dir.join(file_name);
    fs::write(&path, content).map_err(|source| RowError::Write {
        file: path.clone(),
        source,
    })?;
    Ok(path)
}
