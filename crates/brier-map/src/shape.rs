//! Structural validation: rectangular shape and hedge-bounded border.

use brier_core::{CellKind, MapError};

/// Validate the grid's shape and border, returning `(width, height)`.
///
/// Every row must match row 0's character count
/// ([`MapError::RowWidthMismatch`], checked for all rows before any border
/// check). The top row, the bottom row, and the first and last character of
/// every row must be hedges ([`MapError::UnboundedMap`]); the normalizer
/// guarantees at least one non-empty row, so both dimensions are ≥ 1.
pub fn validate_shape(rows: &[String]) -> Result<(u32, u32), MapError> {
    let expected = rows[0].chars().count();
    for (row, line) in rows.iter().enumerate() {
        let actual = line.chars().count();
        if actual != expected {
            return Err(MapError::RowWidthMismatch {
                row,
                expected,
                actual,
            });
        }
    }

    let height = rows.len();
    let is_hedge = |c: char| CellKind::from_char(c) == Some(CellKind::Hedge);

    // Top and bottom rows are all hedge; interior rows are hedge-capped.
    for (row, line) in rows.iter().enumerate() {
        let bounded = if row == 0 || row == height - 1 {
            line.chars().all(is_hedge)
        } else {
            let mut chars = line.chars();
            // Width ≥ 1, so first always exists; last falls back to it
            // for a single-column grid.
            let first = chars.next().unwrap_or(' ');
            let last = chars.next_back().unwrap_or(first);
            is_hedge(first) && is_hedge(last)
        };
        if !bounded {
            return Err(MapError::UnboundedMap);
        }
    }

    Ok((expected as u32, height as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rectangular_bounded_grid_reports_dimensions() {
        let r = rows(&["####", "#SE#", "####"]);
        assert_eq!(validate_shape(&r), Ok((4, 3)));
    }

    #[test]
    fn short_row_is_a_width_mismatch() {
        let r = rows(&["####", "#S#", "####"]);
        assert_eq!(
            validate_shape(&r),
            Err(MapError::RowWidthMismatch {
                row: 1,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn long_row_is_a_width_mismatch() {
        let r = rows(&["####", "#S E#", "####"]);
        assert_eq!(
            validate_shape(&r),
            Err(MapError::RowWidthMismatch {
                row: 1,
                expected: 4,
                actual: 5,
            })
        );
    }

    #[test]
    fn width_is_checked_before_the_border() {
        // Row 2 is ragged and row 0 is unbounded; the mismatch wins.
        let r = rows(&[" ###", "#  #", "#####"]);
        assert!(matches!(
            validate_shape(&r),
            Err(MapError::RowWidthMismatch { row: 2, .. })
        ));
    }

    #[test]
    fn gap_in_top_row_is_unbounded() {
        let r = rows(&["## #", "#S #", "####"]);
        assert_eq!(validate_shape(&r), Err(MapError::UnboundedMap));
    }

    #[test]
    fn gap_in_bottom_row_is_unbounded() {
        let r = rows(&["####", "#S #", "## #"]);
        assert_eq!(validate_shape(&r), Err(MapError::UnboundedMap));
    }

    #[test]
    fn open_side_is_unbounded() {
        let left = rows(&["####", " S #", "####"]);
        let right = rows(&["####", "#S  ", "####"]);
        assert_eq!(validate_shape(&left), Err(MapError::UnboundedMap));
        assert_eq!(validate_shape(&right), Err(MapError::UnboundedMap));
    }

    #[test]
    fn all_hedge_grid_is_structurally_fine() {
        // Shape validation does not care about starts or ends.
        let r = rows(&["###", "###", "###"]);
        assert_eq!(validate_shape(&r), Ok((3, 3)));
    }

    #[test]
    fn single_row_grid_must_be_all_hedge() {
        assert_eq!(validate_shape(&rows(&["####"])), Ok((4, 1)));
        assert_eq!(
            validate_shape(&rows(&["#  #"])),
            Err(MapError::UnboundedMap)
        );
    }
}
