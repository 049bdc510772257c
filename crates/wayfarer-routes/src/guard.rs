//! Per-route navigation guards.
//!
//! A guard is a pre-check the router runs before committing a navigation
//! to a route that declares one. Guards return a [`GuardDecision`] value —
//! proceed, redirect, or deny. There is no continuation callback to
//! forget to call: a guard that returns has decided, by construction.

use std::sync::Arc;

use wayfarer_session::AuthSnapshot;

use crate::{ResolvedRoute, RouteTarget};

/// The outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation continue through the rest of the pipeline.
    Proceed,

    /// Abandon this attempt and navigate to the target instead.
    /// The redirect is silent — no error surfaces to the user.
    RedirectTo(RouteTarget),

    /// Block the navigation outright. The router stays where it is and
    /// reports the reason in its outcome.
    Deny {
        /// Why the navigation was blocked, for logs and diagnostics.
        reason: String,
    },
}

impl GuardDecision {
    /// Shorthand for redirecting to a named route.
    pub fn redirect_to_name(name: impl Into<String>) -> Self {
        Self::RedirectTo(RouteTarget::Name(name.into()))
    }

    /// Shorthand for redirecting to a path.
    pub fn redirect_to_path(path: impl Into<String>) -> Self {
        Self::RedirectTo(RouteTarget::Path(path.into()))
    }

    /// Shorthand for a denial with a reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }
}

/// What a guard gets to look at.
///
/// Borrowed views only — guards cannot mutate the session or the router.
/// The auth snapshot is taken once per attempt, so a guard and the global
/// checks that follow it see the same state.
pub struct GuardContext<'a> {
    /// The route this navigation is heading to.
    pub to: &'a ResolvedRoute,

    /// The route being left, absent on the very first navigation.
    pub from: Option<&'a ResolvedRoute>,

    /// Read-only authentication state.
    pub auth: &'a AuthSnapshot,
}

/// A route's pre-check, shared and callable from anywhere.
pub type BeforeEnter = Arc<dyn Fn(&GuardContext<'_>) -> GuardDecision + Send + Sync>;
