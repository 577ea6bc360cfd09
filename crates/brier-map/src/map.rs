//! The compiled, validated map value.

use brier_core::Position;
use indexmap::IndexSet;

/// An immutable, fully validated level description.
///
/// A `CompiledMap` only ever comes out of the compiler pipeline, so its
/// existence implies every map invariant holds: rectangular grid, fully
/// hedged border, exactly one start, at least one end, and every pickup
/// and end reachable from the start. Consumers read the position sets to
/// place engine objects and the pickup count to seed counters; nothing
/// here is mutable.
///
/// Position sets iterate in grid scan order (top row first, left to
/// right), which keeps diagnostics and placement deterministic. Equality
/// is structural and order-insensitive on the sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledMap {
    width: u32,
    height: u32,
    hedges: IndexSet<Position>,
    pickups: IndexSet<Position>,
    ends: IndexSet<Position>,
    start: Position,
}

impl CompiledMap {
    /// Assemble a map from the grid compiler's accumulated sets.
    ///
    /// Crate-private: only the pipeline may mint values, which is what
    /// seals the invariants at the crate boundary.
    pub(crate) fn new(
        width: u32,
        height: u32,
        hedges: IndexSet<Position>,
        pickups: IndexSet<Position>,
        ends: IndexSet<Position>,
        start: Position,
    ) -> Self {
        Self {
            width,
            height,
            hedges,
            pickups,
            ends,
            start,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Wall positions, border included.
    pub fn hedges(&self) -> &IndexSet<Position> {
        &self.hedges
    }

    /// Collectible positions; possibly empty.
    pub fn pickups(&self) -> &IndexSet<Position> {
        &self.pickups
    }

    /// Goal positions; never empty.
    pub fn ends(&self) -> &IndexSet<Position> {
        &self.ends
    }

    /// The unique spawn position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Number of pickups, for counter initialization.
    pub fn pickup_count(&self) -> usize {
        self.pickups.len()
    }

    /// Whether `p` lies within `[0, width) × [0, height)`.
    pub fn in_bounds(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width as i32 && p.y >= 0 && p.y < self.height as i32
    }

    /// Whether `p` is a wall cell.
    pub fn is_hedge(&self, p: Position) -> bool {
        self.hedges.contains(&p)
    }
}
