use trailgrid_core::{ActivityError, InvalidUser};

/// A follow or unfollow request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FollowError {
    #[error("target user id cannot be empty")]
    EmptyTarget,
    #[error("users cannot follow themselves")]
    SelfFollow,
    #[error("already following '{0}'")]
    AlreadyFollowing(String),
    #[error("not currently following '{0}'")]
    NotFollowing(String),
}

/// Errors raised by [`UserStore`](crate::UserStore) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidUser(#[from] InvalidUser),
    #[error("user '{0}' already exists")]
    DuplicateUser(String),
    #[error("failed to create activity: {0}")]
    InvalidActivity(#[from] ActivityError),
    #[error("invalid activity index: {0}")]
    ActivityIndex(usize),
    #[error(transparent)]
    Follow(#[from] FollowError),
}
