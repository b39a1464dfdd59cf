//! Per-user state: gear inventory, recorded activities and follows.

use trailgrid_core::{Activity, Gear};

use crate::error::FollowError;

/// Everything recorded for one user.
///
/// Follow targets are not checked for existence here; the owning
/// [`UserStore`](crate::UserStore) does that before calling [`follow`](Self::follow).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    user_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    gear: Vec<Gear>,
    #[cfg_attr(feature = "serde", serde(default))]
    activities: Vec<Activity>,
    #[cfg_attr(feature = "serde", serde(default))]
    following: Vec<String>,
}

impl UserProfile {
    pub(crate) fn new(user_id: String) -> Self {
        Self {
            user_id,
            gear: Vec::new(),
            activities: Vec::new(),
            following: Vec::new(),
        }
    }

    #[inline]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[inline]
    pub fn gear(&self) -> &[Gear] {
        &self.gear
    }

    /// Activities in the order they were recorded.
    #[inline]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Ids of followed users, in follow order.
    #[inline]
    pub fn following(&self) -> &[String] {
        &self.following
    }

    pub fn add_gear(&mut self, gear: Gear) {
        self.gear.push(gear);
    }

    /// Remove the first piece of gear named `name`, returning it.
    pub fn remove_gear(&mut self, name: &str) -> Option<Gear> {
        let i = self.gear.iter().position(|g| g.name() == name)?;
        Some(self.gear.remove(i))
    }

    pub(crate) fn add_activity(&mut self, activity: Activity) -> &Activity {
        self.activities.push(activity);
        let last = self.activities.len() - 1;
        &self.activities[last]
    }

    pub fn is_following(&self, target: &str) -> bool {
        self.following.iter().any(|id| id == target)
    }

    pub(crate) fn follow(&mut self, target: &str) -> Result<(), FollowError> {
        if target.is_empty() {
            return Err(FollowError::EmptyTarget);
        }
        if target == self.user_id {
            return Err(FollowError::SelfFollow);
        }
        if self.is_following(target) {
            return Err(FollowError::AlreadyFollowing(target.to_string()));
        }
        self.following.push(target.to_string());
        Ok(())
    }

    /// Detach the follow list, leaving it empty.
    pub(crate) fn take_following(&mut self) -> Vec<String> {
        std::mem::take(&mut self.following)
    }

    pub(crate) fn unfollow(&mut self, target: &str) -> Result<(), FollowError> {
        let i = self
            .following
            .iter()
            .position(|id| id == target)
            .ok_or_else(|| FollowError::NotFollowing(target.to_string()))?;
        self.following.remove(i);
        Ok(())
    }
}
