use trailgrid_core::GridPoint;

/// Manhattan (L1) distance between two points, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: GridPoint, b: GridPoint) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// Whether `a` and `b` differ by exactly 1 on one axis and 0 on the other.
#[inline]
pub fn is_adjacent(a: GridPoint, b: GridPoint) -> bool {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
}
