use trailgrid_core::InvalidUser;

/// `pop` or `peek` was called on an empty [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmptyStack {
    #[error("cannot pop from an empty stack")]
    Pop,
    #[error("cannot peek at an empty stack")]
    Peek,
}

/// Why a search produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathNotFound {
    #[error("starting point is not on any existing route")]
    StartOffRoute,
    #[error("ending point is not on any existing route")]
    EndOffRoute,
    #[error("no path exists between the two points")]
    NoPath,
}

/// Errors surfaced by [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error(transparent)]
    InvalidUser(#[from] InvalidUser),
    #[error(transparent)]
    NotFound(#[from] PathNotFound),
}
