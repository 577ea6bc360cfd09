//! The Brier map compiler pipeline.
//!
//! Levels are authored as ASCII-art text. [`compile`] turns a raw grid into
//! a validated, typed [`CompiledMap`] or rejects it with the first
//! [`MapError`] classification it hits. The pipeline runs four stages in
//! sequence, short-circuiting on failure:
//!
//! 1. [`normalize`] — trim, split into rows, reject interior blank lines.
//! 2. [`validate_shape`] — rectangular shape and hedge-bounded border.
//! 3. [`compile_grid`] — classify every cell, enforce exactly one start and
//!    at least one end, flip text rows into Cartesian coordinates.
//! 4. [`check_reachable`] — flood fill from the start; every pickup and
//!    every end must be reachable.
//!
//! The pipeline is pure and synchronous: no I/O, no suspension points,
//! runtime linear in rows × columns. Identical input always yields a
//! structurally equal result.
//!
//! # Example
//!
//! ```rust
//! use brier_map::compile;
//! use brier_core::Position;
//!
//! let map = compile("####\n#SE#\n####").unwrap();
//! assert_eq!(map.start(), Position::new(1, 1));
//! assert_eq!(map.pickup_count(), 0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod map;
pub mod normalize;
pub mod reach;
pub mod shape;

pub use grid::compile_grid;
pub use map::CompiledMap;
pub use normalize::normalize;
pub use reach::{check_reachable, reachable_set};
pub use shape::validate_shape;

use brier_core::MapError;

/// Compile raw ASCII map source into a validated [`CompiledMap`].
///
/// This is the single entry point both the level registry and external
/// callers use. On success every map invariant holds; on failure nothing
/// partial is observable.
pub fn compile(raw: &str) -> Result<CompiledMap, MapError> {
    let rows = normalize(raw)?;
    let (width, height) = validate_shape(&rows)?;
    let map = compile_grid(&rows, width, height)?;
    check_reachable(&map)?;
    Ok(map)
}
