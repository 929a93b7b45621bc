//! File input for initial live-cell sets

use super::{Grid, Point};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;
use thiserror::Error;

/// Parse failure in a cell coordinate file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellParseError {
    /// A token could not be read as a signed integer.
    #[error("invalid coordinate {token:?} in pair {pair}")]
    InvalidToken { pair: usize, token: String },
    /// The input ended with an x coordinate missing its y.
    #[error("dangling coordinate {token:?} at end of input")]
    DanglingCoordinate { token: String },
}

/// Load initial live cells from a file of whitespace-separated integer
/// pairs, one `x y` pair per cell.
pub fn load_cells_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not open input file \"{}\"", path.display()))?;

    let grid = parse_cells(&content)
        .with_context(|| format!("failed to parse cells from file: {}", path.display()))?;
    Ok(grid)
}

/// Parse whitespace-separated integer pairs into a grid of live cells.
///
/// Line structure is irrelevant: any whitespace separates tokens. Blank
/// input yields an empty grid and duplicate pairs collapse into one live
/// cell. A token that is not a signed integer, or an x coordinate without a
/// matching y, is an error.
pub fn parse_cells(content: &str) -> Result<Grid, CellParseError> {
    let mut grid = Grid::new();
    let mut pairs = content.split_whitespace().tuples::<(_, _)>();

    for (pair, (sx, sy)) in pairs.by_ref().enumerate() {
        let x = parse_component(sx, pair)?;
        let y = parse_component(sy, pair)?;
        grid.insert(Point::new(x, y));
    }

    if let Some(token) = pairs.into_buffer().next() {
        return Err(CellParseError::DanglingCoordinate {
            token: token.to_string(),
        });
    }

    Ok(grid)
}

fn parse_component(token: &str, pair: usize) -> Result<i64, CellParseError> {
    token.parse().map_err(|_| CellParseError::InvalidToken {
        pair,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_three_cells() {
        let grid = parse_cells("0 0\n1 0\n0 1\n").unwrap();

        assert_eq!(grid.len(), 3);
        assert!(grid.contains(Point::new(0, 0)));
        assert!(grid.contains(Point::new(1, 0)));
        assert!(grid.contains(Point::new(0, 1)));
    }

    #[test]
    fn test_parse_ignores_whitespace_shape() {
        // Pairs split across lines, tabs, and runs of spaces all parse the same
        let grid = parse_cells("0 0 1\t0\n\n   0\n1").unwrap();

        assert_eq!(grid, parse_cells("0 0\n1 0\n0 1\n").unwrap());
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let grid = parse_cells("-3 7 12 -45").unwrap();

        assert_eq!(grid.len(), 2);
        assert!(grid.contains(Point::new(-3, 7)));
        assert!(grid.contains(Point::new(12, -45)));
    }

    #[test]
    fn test_parse_duplicates_collapse() {
        let grid = parse_cells("2 2\n2 2\n").unwrap();

        assert_eq!(grid.len(), 1);
        assert!(grid.contains(Point::new(2, 2)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_cells("").unwrap().is_empty());
        assert!(parse_cells(" \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_token() {
        let err = parse_cells("0 0\nx 1\n").unwrap_err();

        assert_eq!(
            err,
            CellParseError::InvalidToken {
                pair: 1,
                token: "x".into(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_dangling_coordinate() {
        let err = parse_cells("0 0 5").unwrap_err();

        assert_eq!(err, CellParseError::DanglingCoordinate { token: "5".into() });
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cells.txt");
        std::fs::write(&path, "0 0\n1 0\n0 1\n").unwrap();

        let grid = load_cells_from_file(&path).unwrap();
        assert_eq!(grid.len(), 3);
        assert!(grid.contains(Point::new(0, 1)));
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_cells_from_file("no/such/cells.txt").unwrap_err();

        assert!(err.to_string().contains("no/such/cells.txt"));
    }
}
