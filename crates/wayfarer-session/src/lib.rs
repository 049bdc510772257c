//! Session state and authentication for Wayfarer.
//!
//! This crate handles WHO the current user is:
//!
//! 1. **Authentication** — validating credentials ([`Authenticator`] trait,
//!    with the [`FixedAccounts`] mock directory for demos and tests)
//! 2. **Session state** — the single [`Session`] context object holding the
//!    current user and the pending post-login redirect
//! 3. **Snapshots** — the read-only [`AuthSnapshot`] view that navigation
//!    guards consume
//!
//! # How it fits in the stack
//!
//! ```text
//! Router Layer (above)  ← consults the session to allow/redirect navigations
//!     ↕
//! Session Layer (this crate)  ← owns user identity and the pending redirect
//!     ↕
//! Authenticator (below)  ← validates credentials, mocked or real
//! ```
//!
//! # Design
//!
//! The session is an owned context object passed explicitly to whoever
//! needs it — there is no process-wide global. All mutation goes through
//! `&mut self`, so single-writer discipline is enforced by the borrow
//! checker rather than by convention.
//!
//! Login and logout here are *pure state transitions*. The navigation side
//! effects a UI layer wants after them (jump to the stored redirect, return
//! to the login view) are layered on top by the `wayfarer` facade crate, so
//! the session stays testable without a router.

#![allow(async_fn_in_trait)]

mod auth;
mod error;
mod session;
mod user;

pub use auth::{Authenticator, FixedAccounts};
pub use error::SessionError;
pub use session::{AuthSnapshot, Session};
pub use user::{User, UserId};
