//! The process-wide owner of every user profile.

use std::collections::HashMap;

use chrono::NaiveDate;
use trailgrid_core::{Activity, Gear, InvalidUser, Route};
use trailgrid_paths::{PathFinder, RouteSource};

use crate::error::StoreError;
use crate::feed::Feed;
use crate::profile::UserProfile;

/// Owns the map of user id to profile.
///
/// Mutation goes through `&mut UserStore`; the path finder only ever gets
/// a shared borrow via [`RouteSource`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<UserProfile>", into = "Vec<UserProfile>")
)]
pub struct UserStore {
    users: HashMap<String, UserProfile>,
}

fn check_id(user_id: &str) -> Result<(), InvalidUser> {
    if user_id.trim().is_empty() {
        Err(InvalidUser::EmptyId)
    } else {
        Ok(())
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user with an empty profile.
    pub fn create_user(&mut self, user_id: &str) -> Result<&mut UserProfile, StoreError> {
        check_id(user_id)?;
        if self.users.contains_key(user_id) {
            return Err(StoreError::DuplicateUser(user_id.to_string()));
        }
        log::debug!("create user '{user_id}'");
        let profile = self
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| UserProfile::new(user_id.to_string()));
        Ok(profile)
    }

    pub fn user(&self, user_id: &str) -> Result<&UserProfile, InvalidUser> {
        check_id(user_id)?;
        self.users
            .get(user_id)
            .ok_or_else(|| InvalidUser::Unknown(user_id.to_string()))
    }

    pub fn user_mut(&mut self, user_id: &str) -> Result<&mut UserProfile, InvalidUser> {
        check_id(user_id)?;
        self.users
            .get_mut(user_id)
            .ok_or_else(|| InvalidUser::Unknown(user_id.to_string()))
    }

    pub fn contains(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.users.contains_key(user_id)
    }

    /// All user ids, sorted.
    pub fn user_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.users.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Make `follower` follow `target`. Both users must exist.
    pub fn follow(&mut self, follower: &str, target: &str) -> Result<(), StoreError> {
        self.user(target)?;
        self.user_mut(follower)?.follow(target)?;
        log::debug!("'{follower}' now follows '{target}'");
        Ok(())
    }

    pub fn unfollow(&mut self, follower: &str, target: &str) -> Result<(), StoreError> {
        self.user_mut(follower)?.unfollow(target)?;
        log::debug!("'{follower}' unfollowed '{target}'");
        Ok(())
    }

    /// Append an already validated activity to `user_id`'s history.
    pub fn record_activity(
        &mut self,
        user_id: &str,
        activity: Activity,
    ) -> Result<&Activity, StoreError> {
        let profile = self.user_mut(user_id)?;
        log::debug!(
            "record '{}' for '{user_id}' ({} route points)",
            activity.name(),
            activity.route().len()
        );
        Ok(profile.add_activity(activity))
    }

    pub fn activities(&self, user_id: &str) -> Result<&[Activity], InvalidUser> {
        Ok(self.user(user_id)?.activities())
    }

    /// Record a new activity reusing the route and distance of the
    /// activity at `index` in `user_id`'s history.
    pub fn duplicate_route_activity(
        &mut self,
        user_id: &str,
        index: usize,
        gear: Gear,
        date: NaiveDate,
        duration_minutes: u32,
        name: &str,
    ) -> Result<&Activity, StoreError> {
        let source = self
            .activities(user_id)?
            .get(index)
            .ok_or(StoreError::ActivityIndex(index))?;
        let activity = Activity::new(
            source.route().clone(),
            gear,
            date,
            source.distance(),
            duration_minutes,
            name,
        )?;
        self.record_activity(user_id, activity)
    }

    /// The activities visible to `user_id`.
    pub fn feed(&self, user_id: &str) -> Result<Feed<'_>, InvalidUser> {
        let own = self.user(user_id)?;
        let followed = own
            .following()
            .iter()
            .filter_map(|id| self.users.get(id))
            .collect();
        Ok(Feed { own, followed })
    }

    /// A path finder reading from this store.
    pub fn path_finder(&self) -> PathFinder<'_, Self> {
        PathFinder::new(self)
    }
}

impl RouteSource for UserStore {
    fn routes_of(&self, user_id: &str) -> Result<Vec<&Route>, InvalidUser> {
        Ok(self.activities(user_id)?.iter().map(Activity::route).collect())
    }

    fn followed_by(&self, user_id: &str) -> Result<Vec<&str>, InvalidUser> {
        Ok(self
            .user(user_id)?
            .following()
            .iter()
            .map(String::as_str)
            .collect())
    }
}

impl TryFrom<Vec<UserProfile>> for UserStore {
    type Error = StoreError;

    /// Rebuild a store from profiles, rejecting blank or duplicate ids.
    ///
    /// Follows are replayed through [`follow`](Self::follow), so dangling,
    /// self and repeated follows fail the same way they would live.
    fn try_from(profiles: Vec<UserProfile>) -> Result<Self, Self::Error> {
        let mut users = HashMap::with_capacity(profiles.len());
        let mut follows = Vec::new();
        for mut profile in profiles {
            check_id(profile.user_id())?;
            let id = profile.user_id().to_string();
            if users.contains_key(&id) {
                return Err(StoreError::DuplicateUser(id));
            }
            follows.push((id.clone(), profile.take_following()));
            users.insert(id, profile);
        }
        let mut store = Self { users };
        for (follower, targets) in follows {
            for target in targets {
                store.follow(&follower, &target)?;
            }
        }
        Ok(store)
    }
}

impl From<UserStore> for Vec<UserProfile> {
    fn from(store: UserStore) -> Self {
        let mut profiles: Vec<UserProfile> = store.users.into_values().collect();
        profiles.sort_by(|a, b| a.user_id().cmp(b.user_id()));
        profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FollowError;
    use trailgrid_core::GridPoint;
    use trailgrid_paths::{PathError, PathNotFound, SearchMode, is_adjacent};

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()
    }

    fn ride(name: &str, pts: &[(i32, i32)]) -> Activity {
        let route = Route::with_points(name, pts.iter().map(|&(x, y)| p(x, y))).unwrap();
        let bike = Gear::bike("Rocket", "gravel", 11).unwrap();
        Activity::new(route, bike, day(), 10.0, 30, name).unwrap()
    }

    // ann: L-shaped ride; bob: extends it east; cy: isolated.
    fn store() -> UserStore {
        let mut s = UserStore::new();
        for id in ["ann", "bob", "cy"] {
            s.create_user(id).unwrap();
        }
        s.record_activity("ann", ride("corner", &[(0, 0), (0, 1), (1, 1)]))
            .unwrap();
        s.record_activity("bob", ride("east", &[(2, 1), (3, 1), (3, 2)]))
            .unwrap();
        s.record_activity("cy", ride("far", &[(20, 20), (21, 20)]))
            .unwrap();
        s.follow("ann", "bob").unwrap();
        s.follow("bob", "cy").unwrap();
        s
    }

    #[test]
    fn create_and_lookup() {
        let mut s = UserStore::new();
        assert!(s.is_empty());
        s.create_user("ann").unwrap();
        assert_eq!(
            s.create_user("ann").unwrap_err(),
            StoreError::DuplicateUser("ann".into())
        );
        assert_eq!(
            s.create_user("  ").unwrap_err(),
            StoreError::InvalidUser(InvalidUser::EmptyId)
        );
        assert!(s.contains("ann"));
        assert!(!s.contains(""));
        assert_eq!(s.user("bob").unwrap_err(), InvalidUser::Unknown("bob".into()));
        assert_eq!(s.user("").unwrap_err(), InvalidUser::EmptyId);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn user_ids_sorted() {
        assert_eq!(store().user_ids(), vec!["ann", "bob", "cy"]);
    }

    #[test]
    fn follow_requires_existing_target() {
        let mut s = store();
        assert_eq!(
            s.follow("ann", "zed"),
            Err(StoreError::InvalidUser(InvalidUser::Unknown("zed".into())))
        );
        assert_eq!(
            s.follow("ann", "bob"),
            Err(StoreError::Follow(FollowError::AlreadyFollowing("bob".into())))
        );
        s.unfollow("ann", "bob").unwrap();
        assert!(!s.user("ann").unwrap().is_following("bob"));
    }

    #[test]
    fn duplicate_route_reuses_route_and_distance() {
        let mut s = store();
        let helmet = Gear::helmet("Dome", "L").unwrap();
        let copy = s
            .duplicate_route_activity("ann", 0, helmet.clone(), day(), 45, "again")
            .unwrap();
        assert_eq!(copy.route().points(), &[p(0, 0), p(0, 1), p(1, 1)]);
        assert_eq!(copy.distance(), 10.0);
        assert_eq!(copy.duration_minutes(), 45);
        assert_eq!(s.activities("ann").unwrap().len(), 2);

        assert_eq!(
            s.duplicate_route_activity("ann", 9, helmet.clone(), day(), 45, "x")
                .unwrap_err(),
            StoreError::ActivityIndex(9)
        );
        assert!(matches!(
            s.duplicate_route_activity("ann", 0, helmet, day(), 0, "x"),
            Err(StoreError::InvalidActivity(_))
        ));
    }

    #[test]
    fn feed_views() {
        let s = store();
        let feed = s.feed("ann").unwrap();
        assert_eq!(feed.user_id(), "ann");
        let names: Vec<_> = feed.all().map(Activity::name).collect();
        assert_eq!(names, vec!["corner", "east"]);
        assert_eq!(feed.own().count(), 1);
        assert_eq!(feed.followed().map(Activity::name).collect::<Vec<_>>(), vec!["east"]);
        assert!(s.feed("nobody").is_err());
    }

    #[test]
    fn user_only_search() {
        let s = store();
        let finder = s.path_finder();
        let r = finder.find_path_user_only("ann", p(0, 0), p(1, 1)).unwrap();
        assert_eq!(r.points(), &[p(0, 0), p(0, 1), p(1, 1)]);
        assert_eq!(
            finder.find_path_user_only("ann", p(0, 0), p(3, 2)),
            Err(PathError::NotFound(PathNotFound::EndOffRoute))
        );
    }

    #[test]
    fn feed_search_joins_followed_routes() {
        let s = store();
        let finder = s.path_finder();
        let r = finder.find_path_from_feed("ann", p(0, 0), p(3, 2)).unwrap();
        assert_eq!(
            r.points(),
            &[p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(3, 1), p(3, 2)]
        );
        assert!(r.points().windows(2).all(|w| is_adjacent(w[0], w[1])));
        // Follows are not transitive: cy's ride is out of ann's feed.
        assert_eq!(
            finder.find_path_from_feed("ann", p(0, 0), p(21, 20)),
            Err(PathError::NotFound(PathNotFound::EndOffRoute))
        );
        // Inside bob's feed, but nothing connects the two rides.
        assert_eq!(
            finder.find_path_from_feed("bob", p(2, 1), p(21, 20)),
            Err(PathError::NotFound(PathNotFound::NoPath))
        );
    }

    #[test]
    fn search_for_unknown_user() {
        let s = store();
        assert_eq!(
            s.path_finder()
                .find_path("zed", p(0, 0), p(0, 1), SearchMode::Feed),
            Err(PathError::InvalidUser(InvalidUser::Unknown("zed".into())))
        );
    }

    #[test]
    fn rebuild_from_profiles() {
        let s = store();
        let profiles: Vec<UserProfile> = s.into();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].user_id(), "ann");
        let back = UserStore::try_from(profiles.clone()).unwrap();
        assert_eq!(back.len(), 3);

        let mut dup = profiles.clone();
        dup.push(profiles[0].clone());
        assert_eq!(
            UserStore::try_from(dup).unwrap_err(),
            StoreError::DuplicateUser("ann".into())
        );

        // ann follows bob; dropping bob leaves a dangling follow.
        let dangling: Vec<_> = profiles
            .into_iter()
            .filter(|p| p.user_id() != "bob")
            .collect();
        assert_eq!(
            UserStore::try_from(dangling).unwrap_err(),
            StoreError::InvalidUser(InvalidUser::Unknown("bob".into()))
        );
    }

}
