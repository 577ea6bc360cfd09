//! Built-in levels and the level registry for the Brier maze game.
//!
//! The [`builtin`] module holds the shipped level sources; [`LevelRegistry`]
//! compiles a catalog once at startup and then serves read-only lookups.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builtin;
pub mod registry;

pub use registry::LevelRegistry;
