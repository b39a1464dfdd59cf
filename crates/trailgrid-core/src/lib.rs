//! **trailgrid-core** — record types for the trailgrid route tracker.
//!
//! This crate provides the values shared across the workspace: grid
//! coordinates, named routes, gear, and validated activity records.

pub mod activity;
pub mod error;
pub mod gear;
pub mod geom;
pub mod route;

pub use activity::Activity;
pub use error::{ActivityError, GearError, InvalidUser, RouteError};
pub use gear::Gear;
pub use geom::GridPoint;
pub use route::{FOUND_PATH_NAME, Route};
