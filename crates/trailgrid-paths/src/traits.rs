use trailgrid_core::{InvalidUser, Route};

/// Read-only query view of the user/activity store.
///
/// The path finder only ever sees the store through this trait, so it can
/// never mutate profiles or activities.
pub trait RouteSource {
    /// Routes of every activity recorded by `user_id`.
    fn routes_of(&self, user_id: &str) -> Result<Vec<&Route>, InvalidUser>;

    /// Ids of the users that `user_id` follows.
    fn followed_by(&self, user_id: &str) -> Result<Vec<&str>, InvalidUser>;
}
