// src/io/vector_file.rs

use crate::error::{Error, Result};
use crate::model::MomentArray;
use std::fs;
use std::path::Path;

/// Reads a plain-text `natoms x 3` table: one vector per line, `#` starts a comment.
pub fn load(path: impl AsRef<Path>) -> Result<MomentArray> {
    let text = fs::read_to_string(path.as_ref())?;
    parse(&text)
}

pub fn parse(text: &str) -> Result<MomentArray> {
    let mut rows = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if data.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = data.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(Error::VectorFile {
                line: i + 1,
                details: format!("expected 3 columns, found {}", parts.len()),
            });
        }

        let mut row = [0.0; 3];
        for (slot, part) in row.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| Error::VectorFile {
                line: i + 1,
                details: format!("'{}' is not a number", part),
            })?;
        }
        rows.push(row);
    }

    log::debug!("vector file: {} rows", rows.len());
    Ok(MomentArray::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_rows_in_order() {
        let m = parse("0 0 1\n  0.5 -0.5 0\n\n# trailing comment\n1e-1 2 3 # inline\n").unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m[0], [0.0, 0.0, 1.0]);
        assert_eq!(m[1], [0.5, -0.5, 0.0]);
        assert_eq!(m[2], [0.1, 2.0, 3.0]);
    }

    #[test]
    fn test_wrong_column_count_reports_line() {
        let err = parse("0 0 1\n\n1 2\n").unwrap_err();
        match err {
            Error::VectorFile { line, details } => {
                assert_eq!(line, 3);
                assert!(details.contains("found 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse("0 0 nan?\n").unwrap_err();
        assert!(matches!(err, Error::VectorFile { line: 1, .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 3").unwrap();
        writeln!(file, "4 5 6").unwrap();

        let m = load(file.path()).unwrap();
        assert_eq!(m.rows(), &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
