use trailgrid_core::GridPoint;

const DIRS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Reusable buffer for enumerating the axis-aligned neighbours of a point.
pub struct Neighbors {
    buf: Vec<GridPoint>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbours of `p` for which `keep` returns
    /// `true`. Offsets that would overflow the coordinate type are skipped.
    pub fn cardinal(&mut self, p: GridPoint, keep: impl Fn(GridPoint) -> bool) -> &[GridPoint] {
        self.buf.clear();
        for (dx, dy) in DIRS {
            let Some(n) = p.checked_shift(dx, dy) else {
                continue;
            };
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
