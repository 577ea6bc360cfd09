//! Grid positions and the text-row to Cartesian-y conversion.

use std::fmt;

/// A cell position on a compiled map, in Cartesian convention.
///
/// `x` grows rightward from the left edge, `y` grows upward from the
/// bottom edge — the convention consumers placing engine objects expect.
/// Component-wise equality and hashing make it usable as a set or map key
/// without reference-identity pitfalls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, counted from the left edge.
    pub x: i32,
    /// Row, counted from the bottom edge.
    pub y: i32,
}

impl Position {
    /// Construct a position from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Convert a top-to-bottom text row index into a bottom-up Cartesian y.
///
/// Source text is read top-down (row 0 is the topmost line) while the
/// compiled map uses a bottom-left origin, so `y = height - 1 - row`.
/// This flip is a silent but load-bearing contract with consumers, which
/// is why it is a named function rather than an inline expression.
///
/// `row` must be `< height`; the compiler only calls it with indices it
/// obtained by enumerating the validated rows.
pub const fn cartesian_y(row: u32, height: u32) -> i32 {
    (height - 1 - row) as i32
}
