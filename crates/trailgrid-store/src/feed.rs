use trailgrid_core::Activity;

use crate::profile::UserProfile;

/// Activities visible to one user: their own plus those of followed users.
///
/// Followed ids that no longer resolve are skipped.
#[derive(Debug, Clone)]
pub struct Feed<'a> {
    pub(crate) own: &'a UserProfile,
    pub(crate) followed: Vec<&'a UserProfile>,
}

impl<'a> Feed<'a> {
    /// The user the feed was built for.
    pub fn user_id(&self) -> &'a str {
        self.own.user_id()
    }

    pub fn own(&self) -> impl Iterator<Item = &'a Activity> + '_ {
        self.own.activities().iter()
    }

    pub fn followed(&self) -> impl Iterator<Item = &'a Activity> + '_ {
        self.followed.iter().flat_map(|p| p.activities().iter())
    }

    /// Own activities first, then each followed user's in follow order.
    pub fn all(&self) -> impl Iterator<Item = &'a Activity> + '_ {
        self.own().chain(self.followed())
    }
}
