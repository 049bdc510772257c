//! # Wayfarer
//!
//! Client-side navigation with role-gated guards and shared session state.
//!
//! Wayfarer ties a declarative [`RouteTable`] to an explicit [`Session`]
//! context and runs every navigation attempt through a fixed pipeline:
//!
//! ```text
//! request → resolve (redirects/aliases) → route guard → global guard → commit
//! ```
//!
//! The global guard reads the target route's metadata and the session:
//! unauthenticated visitors to protected routes are bounced to the login
//! route (with the attempted path stored for after login), role-gated
//! routes check an any-of intersection, and everything else proceeds.
//! Guards return decision values — there is no continuation to forget.
//!
//! ## Quick start
//!
//! ```rust
//! use wayfarer::prelude::*;
//!
//! # fn main() -> Result<(), WayfarerError> {
//! let table = RouteTable::new(vec![
//!     Route::view("/", LazyView::component("HomeView")).name("Home"),
//!     Route::view("/login", LazyView::component("LoginView")).name("Login"),
//!     Route::view("/secret", LazyView::component("SecretView")).requires_auth(),
//! ])?;
//! let session = Session::new(FixedAccounts::instant());
//! let mut router = Router::new(table, session);
//!
//! // Logged out, so this lands on the login route instead.
//! let outcome = router.navigate("/secret")?;
//! let committed = outcome.committed().expect("redirects are silent");
//! assert!(committed.route.is_named("Login"));
//! assert_eq!(router.session().pending_redirect(), Some("/secret"));
//! # Ok(())
//! # }
//! ```

mod error;
mod history;
mod router;
mod scroll;

pub use error::WayfarerError;
pub use history::{History, HistoryEntry};
pub use router::{Committed, NavigationOutcome, RenderedView, Router, RouterConfig};
pub use scroll::{ScrollPosition, ScrollTarget, scroll_target};

pub use wayfarer_routes::{
    BeforeEnter, DEFAULT_SLOT, GuardContext, GuardDecision, LazyView, MatchedRoute, ResolvedRoute,
    Route, RouteError, RouteMeta, RouteTable, RouteTarget, ViewHandle,
};
pub use wayfarer_session::{
    AuthSnapshot, Authenticator, FixedAccounts, Session, SessionError, User, UserId,
};

/// The usual imports for building an app on Wayfarer.
pub mod prelude {
    pub use crate::{
        Authenticator, FixedAccounts, GuardContext, GuardDecision, LazyView, NavigationOutcome,
        Route, RouteTable, RouteTarget, Router, RouterConfig, ScrollTarget, Session, SessionError,
        User, WayfarerError,
    };
}
