//! Path search over the points of recorded routes.
//!
//! Given the routes a user (or a user's feed) has recorded, this crate finds
//! a sequence of 4-adjacent points linking a start and an end point, using
//! only points that appear on those routes:
//!
//! - **Candidate collection** from routes ([`collect`], [`collect_for`])
//! - **Depth-first search** with an explicit [`Stack`] frontier and
//!   parent-pointer reconstruction ([`find_path_dfs`])
//! - **Reachability** of a point's connected component ([`reachable`])
//!
//! [`PathFinder`] ties these to a [`RouteSource`], the read-only view of the
//! user/activity store, under a caller-chosen [`SearchMode`].
//!
//! Every search allocates its own frontier, visited set and parent map, so
//! calls are independent and may run concurrently.

mod collect;
mod dfs;
mod distance;
mod error;
mod finder;
mod neighbors;
mod stack;
mod traits;

pub use collect::{PointSet, SearchMode, collect, collect_for};
pub use dfs::{find_path_dfs, reachable};
pub use distance::{is_adjacent, manhattan};
pub use error::{EmptyStack, PathError, PathNotFound};
pub use finder::PathFinder;
pub use neighbors::Neighbors;
pub use stack::Stack;
pub use traits::RouteSource;
