//! Named, ordered sequences of grid points.

use crate::error::RouteError;
use crate::geom::GridPoint;

/// Name given to every route produced by a path search.
pub const FOUND_PATH_NAME: &str = "Found Path";

/// An ordered sequence of [`GridPoint`]s with a name.
///
/// Insertion order is significant and duplicates are allowed. A route may
/// hold zero points; activities enforce non-emptiness when they take one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoute"))]
pub struct Route {
    name: String,
    points: Vec<GridPoint>,
}

impl Route {
    /// Create an empty route. Fails if `name` is empty or whitespace only.
    pub fn new(name: impl Into<String>) -> Result<Self, RouteError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RouteError::EmptyName);
        }
        Ok(Self {
            name,
            points: Vec::new(),
        })
    }

    /// Create a route holding `points` in the given order.
    pub fn with_points(
        name: impl Into<String>,
        points: impl IntoIterator<Item = GridPoint>,
    ) -> Result<Self, RouteError> {
        let mut route = Self::new(name)?;
        route.points.extend(points);
        Ok(route)
    }

    /// A route named [`FOUND_PATH_NAME`] holding a search result.
    pub fn found_path(points: Vec<GridPoint>) -> Self {
        Self {
            name: FOUND_PATH_NAME.to_string(),
            points,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The live point sequence. Clone it if isolation is needed.
    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Mutable access to the point sequence, for the owning caller.
    #[inline]
    pub fn points_mut(&mut self) -> &mut Vec<GridPoint> {
        &mut self.points
    }

    /// Append `p`. No adjacency or duplicate check.
    #[inline]
    pub fn add_point(&mut self, p: GridPoint) {
        self.points.push(p);
    }

    pub fn contains(&self, p: GridPoint) -> bool {
        self.points.contains(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Route length, measured as the number of points rather than a
    /// geometric distance.
    #[inline]
    pub fn distance(&self) -> usize {
        self.points.len()
    }
}

/// Unvalidated wire form; deserialization goes through [`Route::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoute {
    name: String,
    #[serde(default)]
    points: Vec<GridPoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoute> for Route {
    type Error = RouteError;

    fn try_from(raw: RawRoute) -> Result<Self, Self::Error> {
        Route::with_points(raw.name, raw.points)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r = Route::with_points("River", [GridPoint::new(1, 2), GridPoint::new(1, 3)]).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn blank_name_is_rejected_on_load() {
        let res: Result<Route, _> = serde_json::from_str(r#"{"name":" ","points":[]}"#);
        assert!(res.is_err());
    }
}
