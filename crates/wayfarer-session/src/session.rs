//! The session context: who is logged in, and where to go after login.
//!
//! One `Session` exists per application context. It is created at startup,
//! mutated only by `login`/`logout`/`fetch_user`/the redirect setters, and
//! lives for the whole process. There is no global — the owner passes it
//! (or a snapshot of it) to whoever needs to read it.
//!
//! # The authentication invariant
//!
//! "Authenticated" and "has a user" must always agree. Instead of storing
//! a boolean next to an `Option<User>` and keeping them in sync by hand,
//! the session stores only the `Option<User>` and derives the flag. The
//! invariant can't be violated because it isn't stored twice.

use std::collections::BTreeSet;

use crate::{Authenticator, SessionError, User};

/// A read-only view of the session for navigation guards.
///
/// Guards run in a different crate and must not mutate (or even see) the
/// whole session, so they receive this plain-data snapshot instead. Cheap
/// to build: one bool and a clone of the role set.
#[derive(Debug, Clone, Default)]
pub struct AuthSnapshot {
    /// Whether a user is currently logged in.
    pub authenticated: bool,

    /// The current user's roles. Empty when logged out.
    pub roles: BTreeSet<String>,
}

impl AuthSnapshot {
    /// Any-of role check: `true` if the snapshot holds at least one of
    /// the given roles.
    pub fn has_any_role<'a>(&self, roles: impl IntoIterator<Item = &'a String>) -> bool {
        roles.into_iter().any(|role| self.roles.contains(role))
    }
}

/// Authentication state for one application context.
///
/// Generic over the [`Authenticator`] so production code, demos, and tests
/// can plug in different credential backends without touching the session
/// logic itself.
///
/// ## Pure transitions, explicit effects
///
/// `login` and `logout` only mutate session state. The navigation that a
/// UI performs afterwards (jump to the pending redirect, fall back to the
/// landing route, return to the login view) is the caller's explicit next
/// step — see the router facade in the `wayfarer` crate. That keeps this
/// type fully testable without any routing machinery.
#[derive(Debug)]
pub struct Session<A: Authenticator> {
    authenticator: A,

    /// The logged-in user, if any. `None` means logged out.
    user: Option<User>,

    /// Where to send the user after their next successful login.
    ///
    /// Set when an unauthenticated user is bounced off a protected route;
    /// consumed (and cleared) exactly once via
    /// [`take_redirect_after_login`](Self::take_redirect_after_login).
    pending_redirect: Option<String>,
}

impl<A: Authenticator> Session<A> {
    /// Creates a logged-out session backed by the given authenticator.
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            user: None,
            pending_redirect: None,
        }
    }

    // -- Read accessors ----------------------------------------------------

    /// Whether a user is currently logged in.
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The current user's roles. Empty when logged out.
    pub fn current_user_roles(&self) -> BTreeSet<String> {
        self.user
            .as_ref()
            .map(|user| user.roles.clone())
            .unwrap_or_default()
    }

    /// The pending post-login redirect, without consuming it.
    pub fn pending_redirect(&self) -> Option<&str> {
        self.pending_redirect.as_deref()
    }

    /// A read-only snapshot for guards.
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            authenticated: self.is_logged_in(),
            roles: self.current_user_roles(),
        }
    }

    // -- Transitions -------------------------------------------------------

    /// Attempts to log in with the given credentials.
    ///
    /// Suspends for however long the authenticator takes (the mock backend
    /// simulates network latency). Session state is untouched during the
    /// suspension and on failure; on success the previous user (if any) is
    /// replaced wholesale.
    ///
    /// # Errors
    /// Returns [`SessionError::InvalidCredentials`] for any pair the
    /// authenticator doesn't recognize.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<User, SessionError> {
        tracing::debug!(%username, "login attempt");

        match self.authenticator.authenticate(username, password).await {
            Ok(user) => {
                tracing::info!(user = %user.id, roles = ?user.roles, "login succeeded");
                self.user = Some(user.clone());
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(%username, "login failed");
                Err(err)
            }
        }
    }

    /// Logs out synchronously. Clears the user; never fails.
    ///
    /// The pending redirect survives a logout — it belongs to the *next*
    /// successful login, whoever that is.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.id, "logged out");
        }
    }

    /// Idempotent session-restoration probe.
    ///
    /// Returns the resident user if one is already logged in, otherwise
    /// answers `None`. This is the seam where a persistent-token check
    /// would go; none is performed — the demo keeps no storage, so a fresh
    /// process always starts logged out.
    pub async fn fetch_user(&mut self) -> Option<User> {
        match &self.user {
            Some(user) => {
                tracing::debug!(user = %user.id, "session already resident");
                Some(user.clone())
            }
            None => {
                tracing::debug!("no session to restore");
                None
            }
        }
    }

    /// Overwrites the pending post-login redirect unconditionally.
    pub fn set_redirect_after_login(&mut self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(%path, "pending redirect stored");
        self.pending_redirect = Some(path);
    }

    /// Consumes the pending redirect, clearing it.
    ///
    /// This is the single consumption point: whatever path comes back is
    /// gone from the session, so a stored redirect fires at most once.
    pub fn take_redirect_after_login(&mut self) -> Option<String> {
        self.pending_redirect.take()
    }
}
