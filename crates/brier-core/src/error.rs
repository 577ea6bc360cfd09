//! The map compiler error taxonomy.
//!
//! Every pipeline stage returns success or exactly one of these
//! classifications; the first violation wins and nothing is aggregated.
//! Compilation is pure, so a failure is a permanent classification of the
//! input, never a transient condition worth retrying.

use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors from map compilation and level lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The raw input was empty or all whitespace.
    EmptyInput,
    /// Normalization yielded no content rows.
    NoContentRows,
    /// A blank line appeared between two content rows.
    InteriorBlankLine,
    /// A row's width differs from the first row's width.
    RowWidthMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of row 0, which every row must match.
        expected: usize,
        /// Actual width of the offending row.
        actual: usize,
    },
    /// The outer ring of the grid is not made entirely of hedges.
    UnboundedMap,
    /// A character outside the map grammar.
    InvalidCharacter {
        /// The unrecognized character.
        found: char,
        /// Where it appeared, in Cartesian coordinates.
        at: Position,
    },
    /// More than one `S` cell.
    MultipleStartPositions {
        /// The start recorded first.
        first: Position,
        /// The second start that made the map ambiguous.
        second: Position,
    },
    /// No `S` cell anywhere in the grid.
    NoStartPosition,
    /// No `E` cell anywhere in the grid.
    NoEndPosition,
    /// A pickup that cannot be reached from the start.
    UnreachablePickup {
        /// The walled-off pickup.
        at: Position,
    },
    /// An end that cannot be reached from the start.
    UnreachableEnd {
        /// The walled-off end.
        at: Position,
    },
    /// A level name that never compiled successfully.
    UnknownLevelName {
        /// The requested name.
        name: String,
        /// Names that are available, in catalog order.
        available: Vec<String>,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "map source is empty or all whitespace"),
            Self::NoContentRows => write!(f, "map source contains no content rows"),
            Self::InteriorBlankLine => {
                write!(f, "blank line between two content rows")
            }
            Self::RowWidthMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {row} is {actual} cells wide, expected {expected} to match row 0"
                )
            }
            Self::UnboundedMap => write!(f, "map border is not fully hedged"),
            Self::InvalidCharacter { found, at } => {
                write!(f, "invalid character {found:?} at {at}")
            }
            Self::MultipleStartPositions { first, second } => {
                write!(f, "multiple start positions: {first} and {second}")
            }
            Self::NoStartPosition => write!(f, "map has no start position"),
            Self::NoEndPosition => write!(f, "map has no end position"),
            Self::UnreachablePickup { at } => {
                write!(f, "pickup at {at} is unreachable from the start")
            }
            Self::UnreachableEnd { at } => {
                write!(f, "end at {at} is unreachable from the start")
            }
            Self::UnknownLevelName { name, available } => {
                write!(f, "unknown level '{name}' (available: {})", available.join(", "))
            }
        }
    }
}

impl Error for MapError {}
