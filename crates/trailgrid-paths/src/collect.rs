//! Gathering search candidates from recorded routes.

use std::collections::HashSet;

use trailgrid_core::{GridPoint, InvalidUser, Route};

use crate::traits::RouteSource;

/// The deduplicated set of points a search may traverse.
pub type PointSet = HashSet<GridPoint>;

/// Which routes contribute candidate points to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchMode {
    /// Only the user's own activities.
    #[default]
    OwnRoutes,
    /// The user's activities plus those of every user they follow (one
    /// level, not transitive).
    Feed,
}

/// Union the points of every route into one set.
pub fn collect<'a>(routes: impl IntoIterator<Item = &'a Route>) -> PointSet {
    let mut points = PointSet::new();
    for route in routes {
        points.extend(route.points().iter().copied());
    }
    points
}

/// Gather the candidate set for `user_id` under `mode`.
///
/// A followed id that does not resolve fails the whole call with
/// [`InvalidUser`].
pub fn collect_for<S: RouteSource + ?Sized>(
    source: &S,
    user_id: &str,
    mode: SearchMode,
) -> Result<PointSet, InvalidUser> {
    let mut routes = source.routes_of(user_id)?;
    if mode == SearchMode::Feed {
        for followed in source.followed_by(user_id)? {
            routes.extend(source.routes_of(followed)?);
        }
    }
    let points = collect(routes.iter().copied());
    log::debug!(
        "collected {} candidate points from {} routes for '{user_id}' ({mode:?})",
        points.len(),
        routes.len()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    struct Users(HashMap<&'static str, (Vec<Route>, Vec<&'static str>)>);

    impl RouteSource for Users {
        fn routes_of(&self, user_id: &str) -> Result<Vec<&Route>, InvalidUser> {
            let (routes, _) = self
                .0
                .get(user_id)
                .ok_or_else(|| InvalidUser::Unknown(user_id.to_string()))?;
            Ok(routes.iter().collect())
        }

        fn followed_by(&self, user_id: &str) -> Result<Vec<&str>, InvalidUser> {
            let (_, follows) = self
                .0
                .get(user_id)
                .ok_or_else(|| InvalidUser::Unknown(user_id.to_string()))?;
            Ok(follows.to_vec())
        }
    }

    fn users() -> Users {
        let a = Route::with_points("a", [p(0, 0), p(1, 0)]).unwrap();
        let b = Route::with_points("b", [p(1, 0), p(2, 0)]).unwrap();
        let c = Route::with_points("c", [p(9, 9)]).unwrap();
        let mut m = HashMap::new();
        m.insert("ann", (vec![a], vec!["bob"]));
        m.insert("bob", (vec![b], vec!["cat"]));
        m.insert("cat", (vec![c], vec![]));
        Users(m)
    }

    #[test]
    fn collect_dedups() {
        let a = Route::with_points("a", [p(0, 0), p(1, 0), p(0, 0)]).unwrap();
        let b = Route::with_points("b", [p(1, 0), p(5, 5)]).unwrap();
        let set = collect([&a, &b]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&p(5, 5)));

        let reversed = collect([&b, &a]);
        assert_eq!(set, reversed);
        // Inputs are untouched.
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn collect_empty() {
        assert!(collect(std::iter::empty()).is_empty());
        let empty = Route::new("empty").unwrap();
        assert!(collect([&empty]).is_empty());
    }

    #[test]
    fn own_routes_only() {
        let set = collect_for(&users(), "ann", SearchMode::OwnRoutes).unwrap();
        assert_eq!(set, PointSet::from([p(0, 0), p(1, 0)]));
    }

    #[test]
    fn feed_is_one_level() {
        let set = collect_for(&users(), "ann", SearchMode::Feed).unwrap();
        assert_eq!(set, PointSet::from([p(0, 0), p(1, 0), p(2, 0)]));
        // cat is followed by bob, not ann.
        assert!(!set.contains(&p(9, 9)));
    }

    #[test]
    fn unknown_user() {
        assert_eq!(
            collect_for(&users(), "dan", SearchMode::Feed),
            Err(InvalidUser::Unknown("dan".into()))
        );
    }

    #[test]
    fn dangling_follow_is_invalid_user() {
        let mut u = users();
        u.0.get_mut("cat").unwrap().1.push("ghost");
        assert!(collect_for(&u, "cat", SearchMode::OwnRoutes).is_ok());
        assert_eq!(
            collect_for(&u, "cat", SearchMode::Feed),
            Err(InvalidUser::Unknown("ghost".into()))
        );
    }
}
