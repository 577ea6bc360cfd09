//! Cell classification: rows of characters into typed position sets.

use crate::map::CompiledMap;
use brier_core::{cartesian_y, CellKind, MapError, Position};
use indexmap::IndexSet;

/// Walk every cell of the validated grid and build a [`CompiledMap`].
///
/// Text row `r` (0 = topmost) and column `c` (0 = leftmost) classify into
/// `Position { x: c, y: cartesian_y(r, height) }`, converting top-down
/// text order into the bottom-up Cartesian convention consumers expect.
/// An unrecognized character fails immediately with
/// [`MapError::InvalidCharacter`]; a second `S` fails with
/// [`MapError::MultipleStartPositions`]. After the scan the grid must have
/// produced exactly one start and at least one end.
///
/// Reachability is not checked here; the returned map is handed to
/// [`check_reachable`](crate::reach::check_reachable) by the pipeline.
pub fn compile_grid(
    rows: &[String],
    width: u32,
    height: u32,
) -> Result<CompiledMap, MapError> {
    let mut hedges = IndexSet::new();
    let mut pickups = IndexSet::new();
    let mut ends = IndexSet::new();
    let mut start: Option<Position> = None;

    for (r, line) in rows.iter().enumerate() {
        let y = cartesian_y(r as u32, height);
        for (c, ch) in line.chars().enumerate() {
            let at = Position::new(c as i32, y);
            match CellKind::from_char(ch) {
                Some(CellKind::Hedge) => {
                    hedges.insert(at);
                }
                Some(CellKind::Pickup) => {
                    pickups.insert(at);
                }
                Some(CellKind::End) => {
                    ends.insert(at);
                }
                Some(CellKind::Start) => {
                    if let Some(first) = start {
                        return Err(MapError::MultipleStartPositions { first, second: at });
                    }
                    start = Some(at);
                }
                Some(CellKind::Empty) => {}
                None => return Err(MapError::InvalidCharacter { found: ch, at }),
            }
        }
    }

    let start = start.ok_or(MapError::NoStartPosition)?;
    if ends.is_empty() {
        return Err(MapError::NoEndPosition);
    }
    Ok(CompiledMap::new(width, height, hedges, pickups, ends, start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    fn grid(lines: &[&str]) -> Result<CompiledMap, MapError> {
        let r = rows(lines);
        let width = r[0].chars().count() as u32;
        compile_grid(&r, width, r.len() as u32)
    }

    // ── Classification ──────────────────────────────────────────

    #[test]
    fn minimal_passing_grid_compiles_with_flipped_coordinates() {
        let map = grid(&["####", "#SE#", "####"]).unwrap();
        // Text row 1 of a height-3 grid lands at y = 1.
        assert_eq!(map.start(), Position::new(1, 1));
        assert_eq!(
            map.ends().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(2, 1)]
        );
        assert!(map.pickups().is_empty());
        assert_eq!(map.hedges().len(), 10);
    }

    #[test]
    fn border_hedges_are_recorded_as_positions() {
        let map = grid(&["####", "#SE#", "####"]).unwrap();
        // Top text row sits at the top of the Cartesian grid.
        for x in 0..4 {
            assert!(map.is_hedge(Position::new(x, 2)));
            assert!(map.is_hedge(Position::new(x, 0)));
        }
        assert!(map.is_hedge(Position::new(0, 1)));
        assert!(map.is_hedge(Position::new(3, 1)));
    }

    #[test]
    fn pickups_accumulate_in_scan_order() {
        let map = grid(&["#####", "#S++#", "#+ E#", "#####"]).unwrap();
        let pickups: Vec<_> = map.pickups().iter().copied().collect();
        assert_eq!(
            pickups,
            vec![
                Position::new(2, 2),
                Position::new(3, 2),
                Position::new(1, 1),
            ]
        );
        assert_eq!(map.pickup_count(), 3);
    }

    // ── Failure classification ──────────────────────────────────

    #[test]
    fn unknown_character_fails_fast_with_its_position() {
        let err = grid(&["####", "#SX#", "####"]).unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidCharacter {
                found: 'X',
                at: Position::new(2, 1),
            }
        );
    }

    #[test]
    fn second_start_reports_both_positions() {
        let err = grid(&["#####", "#S S#", "#E  #", "#####"]).unwrap_err();
        assert_eq!(
            err,
            MapError::MultipleStartPositions {
                first: Position::new(1, 2),
                second: Position::new(3, 2),
            }
        );
    }

    #[test]
    fn missing_start_is_rejected_after_the_scan() {
        assert_eq!(grid(&["###", "#E#", "###"]), Err(MapError::NoStartPosition));
    }

    #[test]
    fn missing_end_is_rejected_after_the_scan() {
        assert_eq!(grid(&["###", "#S#", "###"]), Err(MapError::NoEndPosition));
    }

    #[test]
    fn invalid_character_wins_over_missing_start() {
        // Fail-fast: the scan stops at the bad character even though the
        // grid would also be missing its start.
        let err = grid(&["###", "#?#", "###"]).unwrap_err();
        assert!(matches!(err, MapError::InvalidCharacter { found: '?', .. }));
    }
}
