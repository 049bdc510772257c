//! Unified error type for the Wayfarer facade.

use wayfarer_routes::RouteError;
use wayfarer_session::SessionError;

/// Top-level error that wraps the crate-specific errors.
///
/// Callers of the facade deal with this single type; the `#[from]`
/// attributes let `?` convert sub-crate errors automatically.
///
/// Note what is NOT here: guard denials. A guard that decides `Deny`
/// produces [`NavigationOutcome::Blocked`](crate::NavigationOutcome) —
/// blocking a navigation is an outcome, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum WayfarerError {
    /// A route-table error (no match, unknown name, redirect loop).
    #[error(transparent)]
    Route(#[from] RouteError),

    /// A session error (invalid credentials).
    #[error(transparent)]
    Session(#[from] SessionError),
}
