//! Plaintext map dump.
//!
//! One grid row per line, top to bottom. Each line holds the terrain codes
//! of that row, left to right, separated by whitespace:
//!
//! ```text
//! 0 0 1 0
//! 2 0 1 3
//! ```
//!
//! Codes are those of [`Terrain::code`]. Trailing blank lines are ignored.

use gridroute_core::{Grid, GridError, Point, Terrain};

use crate::error::MapError;

/// Render `grid` in the dump format, with a trailing newline.
pub fn write_map(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.bounds().len() * 2);
    for y in 0..grid.height() {
        let Some(row) = grid.row(y) else {
            continue;
        };
        for (x, t) in row.iter().enumerate() {
            if x > 0 {
                out.push(' ');
            }
            out.push(char::from(b'0' + t.code()));
        }
        out.push('\n');
    }
    out
}

/// Parse a dump into a new grid sized to fit it.
///
/// Every row must have the same number of cells.
pub fn parse_map(s: &str) -> Result<Grid, MapError> {
    let rows = parse_rows(s)?;
    let expected = rows.first().map_or(0, Vec::len);
    if expected == 0 {
        return Err(MapError::Empty);
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(MapError::InconsistentWidth {
                line: i + 1,
                expected,
                found: row.len(),
            });
        }
    }

    let width = i32::try_from(expected).unwrap_or(i32::MAX);
    let height = i32::try_from(rows.len()).unwrap_or(i32::MAX);
    let mut grid = Grid::new(width, height)?;
    write_rows(&mut grid, &rows)?;
    Ok(grid)
}

/// Copy a dump onto an existing grid, cell by cell.
///
/// Rows may be shorter than the grid, and the dump may cover only part of
/// it; cells it does not mention keep their terrain. A cell outside the grid
/// fails the whole load before anything is written.
pub fn load_into(grid: &mut Grid, s: &str) -> Result<(), MapError> {
    let rows = parse_rows(s)?;
    for (y, row) in rows.iter().enumerate() {
        if row.is_empty() {
            continue;
        }
        let last = cell_point(row.len() - 1, y);
        if !grid.contains(last) {
            return Err(GridError::OutOfBounds(last).into());
        }
    }
    write_rows(grid, &rows)
}

fn write_rows(grid: &mut Grid, rows: &[Vec<Terrain>]) -> Result<(), MapError> {
    for (y, row) in rows.iter().enumerate() {
        for (x, &t) in row.iter().enumerate() {
            grid.set(cell_point(x, y), t)?;
        }
    }
    Ok(())
}

/// Dump position as a grid coordinate. Indices past `i32::MAX` clamp to it,
/// which lies outside every grid.
fn cell_point(x: usize, y: usize) -> Point {
    Point::new(
        i32::try_from(x).unwrap_or(i32::MAX),
        i32::try_from(y).unwrap_or(i32::MAX),
    )
}

fn parse_rows(s: &str) -> Result<Vec<Vec<Terrain>>, MapError> {
    let s = s.trim_end();
    if s.is_empty() {
        return Err(MapError::Empty);
    }
    s.lines()
        .enumerate()
        .map(|(i, line)| parse_row(i + 1, line))
        .collect()
}

fn parse_row(line: usize, text: &str) -> Result<Vec<Terrain>, MapError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<u8>()
                .ok()
                .and_then(Terrain::from_code)
                .ok_or_else(|| MapError::InvalidCode {
                    line,
                    column: i + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
0 0 1 0
2 0 1 3
";

    #[test]
    fn parse_dimensions_and_cells() {
        let g = parse_map(DUMP).unwrap();
        assert_eq!(g.size(), Point::new(4, 2));
        assert_eq!(g.get(Point::new(2, 0)), Ok(Terrain::Obstacle));
        assert_eq!(g.get(Point::new(0, 1)), Ok(Terrain::RoadPreferred));
        assert_eq!(g.get(Point::new(3, 1)), Ok(Terrain::Hazard));
        assert_eq!(g.count(Terrain::Open), 4);
    }

    #[test]
    fn write_matches_input() {
        let g = parse_map(DUMP).unwrap();
        assert_eq!(write_map(&g), DUMP);
    }

    #[test]
    fn write_fresh_grid() {
        let mut g = Grid::new(3, 2).unwrap();
        g.set(Point::new(2, 1), Terrain::Obstacle).unwrap();
        assert_eq!(write_map(&g), "0 0 0\n0 0 1\n");
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        let g = parse_map("  0\t1  \n1   0\n\n\n").unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.get(Point::new(1, 0)), Ok(Terrain::Obstacle));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_map(""), Err(MapError::Empty)));
        assert!(matches!(parse_map("\n \n"), Err(MapError::Empty)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = parse_map("0 0 0\n0 0\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::InconsistentWidth {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn bad_codes_rejected() {
        let err = parse_map("0 0\n0 7\n").unwrap_err();
        match err {
            MapError::InvalidCode {
                line,
                column,
                token,
            } => {
                assert_eq!((line, column), (2, 2));
                assert_eq!(token, "7");
            }
            other => panic!("unexpected error {other}"),
        }
        assert!(matches!(
            parse_map("x 0\n"),
            Err(MapError::InvalidCode { .. })
        ));
        assert!(matches!(
            parse_map("-1\n"),
            Err(MapError::InvalidCode { .. })
        ));
    }

    #[test]
    fn load_into_keeps_unmentioned_cells() {
        let mut g = Grid::new(4, 4).unwrap();
        g.set(Point::new(3, 3), Terrain::Hazard).unwrap();
        load_into(&mut g, "1 1\n0 2 1\n").unwrap();
        assert_eq!(g.get(Point::new(1, 0)), Ok(Terrain::Obstacle));
        assert_eq!(g.get(Point::new(2, 1)), Ok(Terrain::Obstacle));
        assert_eq!(g.get(Point::new(2, 0)), Ok(Terrain::Open));
        assert_eq!(g.get(Point::new(3, 3)), Ok(Terrain::Hazard));
    }

    #[test]
    fn load_into_rejects_oversized_dump_atomically() {
        let mut g = Grid::new(2, 2).unwrap();
        let err = load_into(&mut g, "1 1\n1 1 1\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::Grid(GridError::OutOfBounds(p)) if p == Point::new(2, 1)
        ));
        assert_eq!(g.count(Terrain::Open), 4);

        assert!(load_into(&mut g, "1\n1\n1\n").is_err());
        assert_eq!(g.count(Terrain::Open), 4);
    }

    #[test]
    fn huge_indices_never_wrap_into_the_grid() {
        let g = Grid::new(4, 4).unwrap();
        assert_eq!(cell_point(2, 3), Point::new(2, 3));
        let far = cell_point(usize::MAX, 0);
        assert_eq!(far, Point::new(i32::MAX, 0));
        assert!(!g.contains(far));
        assert!(!g.contains(cell_point(1, usize::MAX)));
    }
}
