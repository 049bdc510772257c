//! Route declarations: the building blocks of a route table.
//!
//! A [`Route`] is declarative — it describes a path, what renders there,
//! and the metadata the guard pipeline reads. Routes are assembled with a
//! builder-style API and become immutable once registered in a
//! [`RouteTable`](crate::RouteTable).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guard::{BeforeEnter, GuardContext, GuardDecision};
use crate::view::{DEFAULT_SLOT, LazyView};

/// Where a redirect (or a navigation request) points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// A concrete path, e.g. `/login`.
    Path(String),

    /// A route name, resolved through the table's name registry.
    Name(String),
}

impl RouteTarget {
    /// Target the given path.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Target the route with the given name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Name(name) => write!(f, "name:{name}"),
        }
    }
}

/// Per-route metadata the guard pipeline reads.
///
/// Metadata is NOT inherited: a nested child that wants protection
/// declares `requires_auth` itself. The resolved leaf's metadata is what
/// the global guard consults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Document title for this route. Falls back to the app-wide title
    /// when absent.
    pub title: Option<String>,

    /// Whether an unauthenticated visitor is bounced to the login route.
    pub requires_auth: bool,

    /// Roles required to enter, any-of semantics. Only consulted when
    /// `requires_auth` is also set — roles without `requires_auth` are
    /// representable but never enforced.
    pub roles: Option<BTreeSet<String>>,
}

/// One node of the declarative route tree.
///
/// Constructed with [`Route::view`] or [`Route::redirect`] and refined
/// through the chained builder methods. A node either renders views (one
/// or more named slots) or redirects; redirect nodes cannot have children.
pub struct Route {
    pub(crate) path: String,
    pub(crate) name: Option<String>,
    pub(crate) views: Vec<(String, LazyView)>,
    pub(crate) redirect: Option<RouteTarget>,
    pub(crate) aliases: Vec<String>,
    pub(crate) meta: RouteMeta,
    pub(crate) before_enter: Option<BeforeEnter>,
    pub(crate) pass_params: bool,
    pub(crate) children: Vec<Route>,
}

impl Route {
    /// A route rendering a single view in the default slot.
    ///
    /// Path patterns support exact segments (`/about`), `:param` segments
    /// (`/users/:id`), and a trailing `*` catch-all (`/*`) that matches
    /// any remainder.
    pub fn view(path: impl Into<String>, view: LazyView) -> Self {
        Self {
            path: path.into(),
            name: None,
            views: vec![(DEFAULT_SLOT.to_string(), view)],
            redirect: None,
            aliases: Vec::new(),
            meta: RouteMeta::default(),
            before_enter: None,
            pass_params: false,
            children: Vec::new(),
        }
    }

    /// A route that resolves to another route instead of rendering.
    ///
    /// Redirect resolution happens before any guard runs.
    pub fn redirect(path: impl Into<String>, target: RouteTarget) -> Self {
        Self {
            path: path.into(),
            name: None,
            views: Vec::new(),
            redirect: Some(target),
            aliases: Vec::new(),
            meta: RouteMeta::default(),
            before_enter: None,
            pass_params: false,
            children: Vec::new(),
        }
    }

    /// Names the route for navigation-by-name and named redirects.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the document title for this route.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    /// Marks the route as requiring an authenticated session.
    pub fn requires_auth(mut self) -> Self {
        self.meta.requires_auth = true;
        self
    }

    /// Restricts the route to users holding ANY of the given roles.
    /// Only enforced together with [`requires_auth`](Self::requires_auth).
    pub fn roles(mut self, roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.meta.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a secondary path that resolves to this same route entry,
    /// keeping the alias visible as the requested path (no redirect).
    /// Alias paths are absolute.
    pub fn alias(mut self, path: impl Into<String>) -> Self {
        self.aliases.push(path.into());
        self
    }

    /// Attaches a route-specific guard, run before the global checks.
    pub fn before_enter(
        mut self,
        guard: impl Fn(&GuardContext<'_>) -> GuardDecision + Send + Sync + 'static,
    ) -> Self {
        self.before_enter = Some(std::sync::Arc::new(guard));
        self
    }

    /// Forwards captured path parameters to this route's views
    /// (the `props: true` equivalent).
    pub fn pass_params(mut self) -> Self {
        self.pass_params = true;
        self
    }

    /// Adds a view under a named slot (e.g. `"sidebar"`, `"header"`).
    /// A route may render several slots simultaneously.
    pub fn slot(mut self, slot: impl Into<String>, view: LazyView) -> Self {
        self.views.push((slot.into(), view));
        self
    }

    /// Nests a child route under this one. The child's path joins under
    /// the parent prefix; an empty child path is the parent's default
    /// child. Parents with children render as layout shells — their own
    /// views stay in the matched chain above the child's.
    pub fn child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("views", &self.views)
            .field("redirect", &self.redirect)
            .field("aliases", &self.aliases)
            .field("meta", &self.meta)
            .field("has_guard", &self.before_enter.is_some())
            .field("pass_params", &self.pass_params)
            .field("children", &self.children)
            .finish()
    }
}
