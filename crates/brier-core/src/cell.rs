//! Classification of map source characters.

use std::fmt;

/// The kind of a single grid cell.
///
/// The grammar is closed: exactly one source character maps to each kind
/// and every other character is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// An impassable wall cell (`#`), also forming the mandatory border.
    Hedge,
    /// A collectible cell (`+`); must be reachable from the start.
    Pickup,
    /// The unique spawn cell (`S`).
    Start,
    /// A goal cell (`E`); one or more per map.
    End,
    /// A traversable empty cell (space).
    Empty,
}

impl CellKind {
    /// Classify a source character, or `None` if it is not part of the grammar.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Hedge),
            '+' => Some(Self::Pickup),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            ' ' => Some(Self::Empty),
            _ => None,
        }
    }

    /// The source character this kind is written as.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hedge => '#',
            Self::Pickup => '+',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Empty => ' ',
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
