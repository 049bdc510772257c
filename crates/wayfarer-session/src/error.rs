//! Error types for the session layer.

/// Errors that can occur during session operations.
///
/// Login is the only fallible operation: guards and logout have no failure
/// path (guards allow or redirect, logout always succeeds), so this enum
/// currently has a single variant. It stays an enum so new kinds (token
/// expiry, backend unreachable) can be added without breaking callers.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The username/password pair was not recognized.
    ///
    /// The session is left exactly as it was before the attempt — a failed
    /// login never logs anyone out or clears a pending redirect.
    #[error("invalid username or password")]
    InvalidCredentials,
}
