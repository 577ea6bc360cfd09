//! Core types for the Brier maze map compiler.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary shared by the compiler pipeline and the level
//! registry: grid positions, cell classification, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod position;

pub use cell::CellKind;
pub use error::MapError;
pub use position::{cartesian_y, Position};
