//! Errors raised when building records or resolving users.

/// A route could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The name was empty or whitespace only.
    #[error("route name cannot be empty")]
    EmptyName,
}

/// A gear record failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GearError {
    /// A required text field was empty.
    #[error("{kind} {field} cannot be empty")]
    EmptyField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("number of bike gears must be positive")]
    NoGears,
}

/// An activity record failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActivityError {
    #[error("activity name cannot be empty")]
    EmptyName,
    #[error("activity route cannot be empty")]
    EmptyRoute,
    #[error("activity distance must be positive, got {0}")]
    NonPositiveDistance(f64),
    #[error("activity duration must be positive")]
    ZeroDuration,
}

/// A user id did not resolve to a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUser {
    #[error("user id cannot be empty")]
    EmptyId,
    #[error("user '{0}' does not exist")]
    Unknown(String),
}
