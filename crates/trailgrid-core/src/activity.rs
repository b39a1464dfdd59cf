//! Recorded activities: a route ridden with some gear on a given day.

use chrono::NaiveDate;

use crate::error::ActivityError;
use crate::gear::Gear;
use crate::route::Route;

/// A validated activity record.
///
/// Once built, the route is guaranteed to hold at least one point, which is
/// what lets its points serve as search candidates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawActivity"))]
pub struct Activity {
    route: Route,
    gear: Gear,
    date: NaiveDate,
    distance: f64,
    duration_minutes: u32,
    name: String,
}

impl Activity {
    pub fn new(
        route: Route,
        gear: Gear,
        date: NaiveDate,
        distance: f64,
        duration_minutes: u32,
        name: impl Into<String>,
    ) -> Result<Self, ActivityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ActivityError::EmptyName);
        }
        if route.is_empty() {
            return Err(ActivityError::EmptyRoute);
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(ActivityError::NonPositiveDistance(distance));
        }
        if duration_minutes == 0 {
            return Err(ActivityError::ZeroDuration);
        }
        Ok(Self {
            route,
            gear,
            date,
            distance,
            duration_minutes,
            name,
        })
    }

    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[inline]
    pub fn gear(&self) -> &Gear {
        &self.gear
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Distance as entered by the rider, independent of the route.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawActivity {
    route: Route,
    gear: Gear,
    date: NaiveDate,
    distance: f64,
    duration_minutes: u32,
    name: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawActivity> for Activity {
    type Error = ActivityError;

    fn try_from(raw: RawActivity) -> Result<Self, Self::Error> {
        Activity::new(
            raw.route,
            raw.gear,
            raw.date,
            raw.distance,
            raw.duration_minutes,
            raw.name,
        )
    }
}
