//! Reachability: flood fill from the start and membership checks.

use crate::map::CompiledMap;
use brier_core::{MapError, Position};
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// 4-connected neighbour offsets: up, down, left, right.
const OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Traversable neighbours of `p`: in bounds and not a hedge.
fn neighbours(map: &CompiledMap, p: Position) -> SmallVec<[Position; 4]> {
    let mut out = SmallVec::new();
    for (dx, dy) in OFFSETS {
        let n = Position::new(p.x + dx, p.y + dy);
        if map.in_bounds(n) && !map.is_hedge(n) {
            out.push(n);
        }
    }
    out
}

/// The set of cells reachable from the start through non-hedge cells.
///
/// Breadth-first flood fill bounded by `[0, width) × [0, height)`. The
/// result is defined purely by graph connectivity, so any frontier order
/// (BFS, DFS, anything else) yields the identical set; the tests hold the
/// implementation to that. O(width · height).
pub fn reachable_set(map: &CompiledMap) -> IndexSet<Position> {
    let mut visited = IndexSet::new();
    let mut frontier = VecDeque::new();
    visited.insert(map.start());
    frontier.push_back(map.start());

    while let Some(p) = frontier.pop_front() {
        for n in neighbours(map, p) {
            if visited.insert(n) {
                frontier.push_back(n);
            }
        }
    }
    visited
}

/// Verify every pickup and every end is reachable from the start.
///
/// Pickups are checked before ends, each in set iteration order; the
/// first absent position names the error ([`MapError::UnreachablePickup`]
/// or [`MapError::UnreachableEnd`]).
pub fn check_reachable(map: &CompiledMap) -> Result<(), MapError> {
    let reachable = reachable_set(map);
    for &at in map.pickups() {
        if !reachable.contains(&at) {
            return Err(MapError::UnreachablePickup { at });
        }
    }
    for &at in map.ends() {
        if !reachable.contains(&at) {
            return Err(MapError::UnreachableEnd { at });
        }
    }
    Ok(())
}
