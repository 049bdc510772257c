//! Authentication hook for validating credentials.
//!
//! Wayfarer doesn't prescribe where accounts live — that's your job (or
//! your identity provider's). The [`Authenticator`] trait is a single async
//! method that takes a credential pair and returns a [`User`] or an error.
//! The session calls it during [`login`](crate::Session::login).
//!
//! [`FixedAccounts`] is the shipped implementation: a hard-coded directory
//! of exactly two accounts with a timer-based delay standing in for network
//! latency. It is the "mock backend" of the demo app — no real network
//! calls, no password hashing, no token persistence.

use std::time::Duration;

use crate::{SessionError, User};

/// Validates a credential pair and returns the user's identity.
///
/// # Trait bounds
///
/// - `Send + Sync` → the authenticator can be shared across async tasks.
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the session that owns it.
///
/// # Example
///
/// ```rust
/// use wayfarer_session::{Authenticator, SessionError, User};
///
/// /// Accepts exactly one account. Only for tests.
/// struct SingleAccount;
///
/// impl Authenticator for SingleAccount {
///     async fn authenticate(
///         &self,
///         username: &str,
///         password: &str,
///     ) -> Result<User, SessionError> {
///         if username == "solo" && password == "hunter2" {
///             Ok(User::new("solo1", "Solo", "solo@example.com", ["user"]))
///         } else {
///             Err(SessionError::InvalidCredentials)
///         }
///     }
/// }
/// ```
pub trait Authenticator: Send + Sync + 'static {
    /// Validates the given credentials and returns the matching user.
    ///
    /// # Errors
    /// Returns [`SessionError::InvalidCredentials`] when the pair is not
    /// recognized. Implementations must not partially succeed — either a
    /// full `User` comes back or nothing does.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<User, SessionError>> + Send;
}

/// The mocked credential directory: two fixed accounts behind a fake
/// network delay.
///
/// | username | password   | roles           |
/// |----------|------------|-----------------|
/// | `user`   | `password` | `{user}`        |
/// | `admin`  | `password` | `{admin, user}` |
///
/// The delay is a plain `tokio::time::sleep`, so tests can either set it
/// to zero or run under a paused runtime clock. Session state is never
/// touched during the suspension — validation happens only after the
/// delay elapses, and the session mutates only after validation succeeds.
#[derive(Debug, Clone)]
pub struct FixedAccounts {
    delay: Duration,
}

impl FixedAccounts {
    /// A directory with the given simulated latency.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// A directory that answers immediately. Intended for tests.
    pub fn instant() -> Self {
        Self::with_delay(Duration::ZERO)
    }
}

impl Default for FixedAccounts {
    /// One second of simulated latency, matching the demo app.
    fn default() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }
}

impl Authenticator for FixedAccounts {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, SessionError> {
        tokio::time::sleep(self.delay).await;

        match (username, password) {
            ("user", "password") => Ok(User::new(
                "user123",
                "Test User",
                "user@example.com",
                ["user"],
            )),
            ("admin", "password") => Ok(User::new(
                "admin456",
                "Admin User",
                "admin@example.com",
                ["admin", "user"],
            )),
            _ => {
                tracing::debug!(%username, "credentials not in fixed directory");
                Err(SessionError::InvalidCredentials)
            }
        }
    }
}
