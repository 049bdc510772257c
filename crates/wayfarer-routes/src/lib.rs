//! Declarative route table for Wayfarer.
//!
//! This crate defines the "map" a router navigates over:
//!
//! - **Routes** ([`Route`], [`RouteMeta`], [`RouteTarget`]) — the
//!   declarative description of paths, names, nesting, aliases, redirects,
//!   and per-route metadata.
//! - **Views** ([`LazyView`], [`ViewHandle`]) — deferred references to the
//!   view components a route renders, resolved on first navigation and
//!   cached thereafter.
//! - **Guards** ([`GuardDecision`], [`GuardContext`], [`BeforeEnter`]) —
//!   per-route pre-checks that return a decision value instead of calling
//!   a continuation, so "never decided" is unrepresentable.
//! - **The table** ([`RouteTable`], [`ResolvedRoute`]) — the compiled,
//!   immutable matcher that turns a requested path into a resolved route
//!   with captured parameters and the parent→leaf chain of matched records.
//!
//! # Architecture
//!
//! The table layer sits between declaration and navigation. It doesn't
//! know about sessions or history — it only knows how to turn a path into
//! a resolved route (applying aliases and redirects along the way).
//!
//! ```text
//! Declaration (Route tree) → Table (ResolvedRoute) → Router (pipeline)
//! ```

mod error;
mod guard;
mod route;
mod table;
mod view;

pub use error::RouteError;
pub use guard::{BeforeEnter, GuardContext, GuardDecision};
pub use route::{Route, RouteMeta, RouteTarget};
pub use table::{MatchedRoute, ResolvedRoute, RouteTable};
pub use view::{DEFAULT_SLOT, LazyView, ViewHandle};
