//! In-memory profiles, gear, activities and follows for trailgrid.
//!
//! [`UserStore`] is the single owner of every [`UserProfile`]. It implements
//! [`trailgrid_paths::RouteSource`], so a
//! [`PathFinder`](trailgrid_paths::PathFinder) can read recorded routes
//! without being able to change them.

mod error;
mod feed;
mod profile;
mod store;

pub use error::{FollowError, StoreError};
pub use feed::Feed;
pub use profile::UserProfile;
pub use store::UserStore;
