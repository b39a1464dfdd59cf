use trailgrid_core::{GridPoint, InvalidUser, Route};

use crate::collect::{PointSet, SearchMode, collect_for};
use crate::dfs::find_path_dfs;
use crate::error::PathError;
use crate::traits::RouteSource;

/// Finds walkable paths using only points from previously recorded routes.
///
/// `PathFinder` holds a shared borrow of the store and no search state of
/// its own, so one finder can serve concurrent callers.
pub struct PathFinder<'s, S: ?Sized> {
    source: &'s S,
}

impl<'s, S: RouteSource + ?Sized> PathFinder<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Search using only the routes of `user_id`'s own activities.
    pub fn find_path_user_only(
        &self,
        user_id: &str,
        start: GridPoint,
        end: GridPoint,
    ) -> Result<Route, PathError> {
        self.find_path(user_id, start, end, SearchMode::OwnRoutes)
    }

    /// Search using `user_id`'s routes plus those of everyone they follow.
    pub fn find_path_from_feed(
        &self,
        user_id: &str,
        start: GridPoint,
        end: GridPoint,
    ) -> Result<Route, PathError> {
        self.find_path(user_id, start, end, SearchMode::Feed)
    }

    pub fn find_path(
        &self,
        user_id: &str,
        start: GridPoint,
        end: GridPoint,
        mode: SearchMode,
    ) -> Result<Route, PathError> {
        let candidates = self.candidates(user_id, mode)?;
        Ok(find_path_dfs(&candidates, start, end)?)
    }

    /// The candidate set a search for `user_id` under `mode` would use.
    pub fn candidates(&self, user_id: &str, mode: SearchMode) -> Result<PointSet, InvalidUser> {
        collect_for(self.source, user_id, mode)
    }
}
