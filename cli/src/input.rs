//! Matrix text parsing and argument validation helpers.
//!
//! Parse-then-validate: tokens are parsed here with positional error
//! context, structural rules (squareness, binary cells, vertex cap) are
//! enforced once by `AdjMatrix::from_rows`. Nothing downstream
//! re-validates.

use std::io::BufRead;

use graph_walk_core::{AdjMatrix, GraphError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read matrix input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: '{token}' is not a 0/1 cell")]
    BadToken { line: usize, token: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Read an adjacency matrix as whitespace-separated 0/1 rows, one row
/// per line. Blank lines are skipped.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<AdjMatrix, InputError> {
    let mut rows: Vec<Vec<u8>> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let cell: u8 = token.parse().map_err(|_| InputError::BadToken {
                line: idx + 1,
                token: token.to_string(),
            })?;
            row.push(cell);
        }
        rows.push(row);
    }

    Ok(AdjMatrix::from_rows(&rows)?)
}

/// Clap value parser for `--density`. Accepts a comma as the decimal
/// separator, matching locale-formatted input.
pub fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s
        .replace(',', ".")
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !(0.0..=1.0).contains(&density) {
        return Err(format!("density must be within [0.0, 1.0], got {density}"));
    }
    Ok(density)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_matrix_valid() {
        let text = "0 1 0\n1 0 1\n0 1 0\n";
        let m = parse_matrix(Cursor::new(text)).unwrap();
        assert_eq!(m.vertex_count(), 3);
        assert!(m.has_edge(0, 1));
        assert!(!m.has_edge(0, 2));
    }

    #[test]
    fn test_parse_matrix_skips_blank_lines() {
        let text = "0 1\n\n1 0\n\n";
        let m = parse_matrix(Cursor::new(text)).unwrap();
        assert_eq!(m.vertex_count(), 2);
    }

    #[test]
    fn test_parse_matrix_junk_token() {
        let err = parse_matrix(Cursor::new("0 x\n1 0\n")).unwrap_err();
        match err {
            InputError::BadToken { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("expected BadToken, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_matrix_ragged() {
        let err = parse_matrix(Cursor::new("0 1\n1\n")).unwrap_err();
        assert!(matches!(
            err,
            InputError::Graph(GraphError::NotSquare { .. })
        ));
    }

    #[test]
    fn test_parse_matrix_non_binary_cell() {
        let err = parse_matrix(Cursor::new("0 3\n1 0\n")).unwrap_err();
        assert!(matches!(
            err,
            InputError::Graph(GraphError::CellNotBinary { .. })
        ));
    }

    #[test]
    fn test_parse_matrix_empty_input() {
        let err = parse_matrix(Cursor::new("")).unwrap_err();
        assert!(matches!(
            err,
            InputError::Graph(GraphError::VertexCountOutOfRange { got: 0 })
        ));
    }

    #[test]
    fn test_parse_density() {
        assert_eq!(parse_density("0.3").unwrap(), 0.3);
        assert_eq!(parse_density("0,5").unwrap(), 0.5);
        assert_eq!(parse_density("1.0").unwrap(), 1.0);
        assert!(parse_density("1.1").is_err());
        assert!(parse_density("-0.2").is_err());
        assert!(parse_density("abc").is_err());
    }
}
