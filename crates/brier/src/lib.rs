//! Brier: a small maze game whose levels are authored as ASCII-art text.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Brier sub-crates. For most users, adding `brier` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use brier::prelude::*;
//!
//! // Compile a level from raw ASCII art.
//! // (the doubled leading `#` below is rustdoc's escape for a literal `#`)
//! let map = compile(
//!     "#######
//!      #S + E#
//!      ########",
//! )
//! .unwrap();
//! assert_eq!(map.start(), Position::new(1, 1));
//! assert_eq!(map.pickup_count(), 1);
//!
//! // Or load the shipped catalog and look levels up by name.
//! let registry = LevelRegistry::builtin();
//! let level = registry.get_by_name("Level0").unwrap();
//! assert!(!level.ends().is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `brier-core` | [`types::Position`], [`types::CellKind`], [`types::MapError`] |
//! | [`map`] | `brier-map` | The compile pipeline and [`map::CompiledMap`] |
//! | [`levels`] | `brier-levels` | Built-in catalog and [`levels::LevelRegistry`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`brier-core`): positions, cell kinds, and the error taxonomy.
pub use brier_core as types;

/// The compiler pipeline (`brier-map`).
///
/// [`map::compile`] is the single entry point; the individual stages
/// ([`map::normalize`], [`map::validate_shape`], [`map::compile_grid`],
/// [`map::check_reachable`]) are public for callers that want to run or
/// test them in isolation.
pub use brier_map as map;

/// Built-in catalog and level registry (`brier-levels`).
pub use brier_levels as levels;

/// Common imports for typical Brier usage.
///
/// ```rust
/// use brier::prelude::*;
/// ```
pub mod prelude {
    pub use brier_core::{CellKind, MapError, Position};
    pub use brier_levels::LevelRegistry;
    pub use brier_map::{compile, CompiledMap};
}
