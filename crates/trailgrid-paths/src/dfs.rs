//! Depth-first path search over a candidate point set.

use std::collections::HashMap;

use trailgrid_core::{GridPoint, Route};

use crate::collect::PointSet;
use crate::error::PathNotFound;
use crate::neighbors::Neighbors;
use crate::stack::Stack;

/// Find a route from `start` to `end` through adjacent candidate points.
///
/// The returned route is named [`FOUND_PATH_NAME`](trailgrid_core::FOUND_PATH_NAME),
/// starts at `start`, ends at `end`, and never repeats a point. It is *a*
/// path, not necessarily the shortest, and when several exist which one is
/// returned is unspecified.
pub fn find_path_dfs(
    candidates: &PointSet,
    start: GridPoint,
    end: GridPoint,
) -> Result<Route, PathNotFound> {
    let mut search = Search::new(candidates, start, end)?;
    if search.run() {
        Ok(search.reconstruct())
    } else {
        log::debug!(
            "no path {start} -> {end}: exhausted after visiting {} points",
            search.visited.len()
        );
        Err(PathNotFound::NoPath)
    }
}

/// The connected component of `start` within `candidates`.
///
/// Empty if `start` itself is not a candidate.
pub fn reachable(candidates: &PointSet, start: GridPoint) -> PointSet {
    let mut seen = PointSet::new();
    if !candidates.contains(&start) {
        return seen;
    }

    let mut nb = Neighbors::new();
    let mut stack = Stack::new();
    stack.push(start);
    seen.insert(start);

    while let Ok(cp) = stack.pop() {
        for &np in nb.cardinal(cp, |n| candidates.contains(&n) && !seen.contains(&n)) {
            seen.insert(np);
            stack.push(np);
        }
    }
    seen
}

/// State of one search run. Built fresh per call and dropped afterwards.
struct Search<'c> {
    candidates: &'c PointSet,
    end: GridPoint,
    frontier: Stack<GridPoint>,
    visited: PointSet,
    // `None` marks the start point.
    parent: HashMap<GridPoint, Option<GridPoint>>,
    nb: Neighbors,
}

impl<'c> Search<'c> {
    /// Validate the endpoints and seed the frontier with `start`.
    fn new(
        candidates: &'c PointSet,
        start: GridPoint,
        end: GridPoint,
    ) -> Result<Self, PathNotFound> {
        if !candidates.contains(&start) {
            return Err(PathNotFound::StartOffRoute);
        }
        if !candidates.contains(&end) {
            return Err(PathNotFound::EndOffRoute);
        }
        log::debug!(
            "dfs {start} -> {end} over {} candidate points",
            candidates.len()
        );

        let mut search = Self {
            candidates,
            end,
            frontier: Stack::new(),
            visited: PointSet::new(),
            parent: HashMap::new(),
            nb: Neighbors::new(),
        };
        search.frontier.push(start);
        search.visited.insert(start);
        search.parent.insert(start, None);
        Ok(search)
    }

    /// Run until `end` is popped (`true`) or the frontier is exhausted.
    fn run(&mut self) -> bool {
        while let Ok(current) = self.frontier.pop() {
            if current == self.end {
                return true;
            }

            let candidates = self.candidates;
            let visited = &self.visited;
            let fresh = self
                .nb
                .cardinal(current, |n| candidates.contains(&n) && !visited.contains(&n));
            log::trace!("expand {current}: {} new neighbours", fresh.len());

            // Mark at push time so each point enters the frontier once.
            for &n in fresh {
                self.visited.insert(n);
                self.parent.insert(n, Some(current));
                self.frontier.push(n);
            }
        }
        false
    }

    /// Follow parent links from `end` back to the start.
    fn reconstruct(&self) -> Route {
        let mut path = Vec::new();
        let mut cur = Some(self.end);
        while let Some(p) = cur {
            path.push(p);
            cur = self.parent.get(&p).copied().flatten();
        }
        path.reverse();
        log::debug!(
            "path found: {} points, {} visited",
            path.len(),
            self.visited.len()
        );
        Route::found_path(path)
    }
}
