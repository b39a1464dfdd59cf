//! The grid coordinate type shared by routes and the path finder.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// GridPoint
// ---------------------------------------------------------------------------

/// An integer coordinate on the shared map grid.
///
/// Equality and hashing are structural. No range check is applied here;
/// negative coordinates are representable and bounds belong to callers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    ///
    /// Overflows like plain `i32` arithmetic (panics in debug builds); use
    /// [`checked_shift`](Self::checked_shift) near the edge of the type.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Like [`shift`](Self::shift), but `None` if either axis overflows.
    #[inline]
    pub fn checked_shift(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The axis-aligned neighbours in order up, right, down, left.
    ///
    /// Neighbours that would fall outside the `i32` range are left out, so
    /// a point on the edge of the type yields fewer than four.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = GridPoint> {
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.checked_shift(dx, dy))
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// `Add` and `Sub` follow plain `i32` overflow semantics.
impl Add for GridPoint {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
