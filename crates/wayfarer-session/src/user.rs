//! User identity types.
//!
//! A [`User`] is the value a successful login produces. It is immutable
//! once created — a new login replaces the whole value rather than
//! mutating fields in place.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a user account.
///
/// Newtype over `String` so a user id can't be confused with any other
/// string flowing through the system (paths, role names, titles).
///
/// `#[serde(transparent)]` serializes this as the bare string, not as a
/// wrapper object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

/// An authenticated user.
///
/// Produced by an [`Authenticator`](crate::Authenticator) on successful
/// login and held by the [`Session`](crate::Session) until logout. Replaced
/// wholesale on each login — no field-level mutation.
///
/// Roles live in a `BTreeSet` so membership checks are cheap and the
/// serialized order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier.
    pub id: UserId,

    /// Human-readable display name.
    pub name: String,

    /// Contact address, carried for display purposes only.
    pub email: String,

    /// The roles this user holds. Route metadata may require a
    /// non-empty intersection with this set ("any-of" semantics).
    pub roles: BTreeSet<String>,
}

impl User {
    /// Constructs a user from its parts. Roles accept anything iterable
    /// so call sites can pass arrays of string literals.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: UserId(id.into()),
            name: name.into(),
            email: email.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the user holds the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Returns `true` if the user holds ANY of the given roles.
    ///
    /// This is the "any-of" check route guards use: one shared role is
    /// enough, the user does not need every required role.
    pub fn has_any_role<'a>(&self, roles: impl IntoIterator<Item = &'a String>) -> bool {
        roles.into_iter().any(|role| self.roles.contains(role))
    }
}
