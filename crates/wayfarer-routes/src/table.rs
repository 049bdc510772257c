//! The compiled route table: matching, aliases, redirects, nesting.
//!
//! A [`RouteTable`] is built once at startup from the declarative route
//! tree and is immutable afterwards. Construction flattens the tree into
//! ordered match entries — one per addressable leaf, plus one per alias —
//! each carrying the parent→leaf chain of compiled records so nested
//! layouts render correctly.
//!
//! Matching precedence is registration order, first match wins. The demo
//! table simply lists its catch-all last.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::guard::BeforeEnter;
use crate::route::{Route, RouteMeta, RouteTarget};
use crate::view::LazyView;
use crate::RouteError;

/// How many redirect hops resolution follows before declaring a cycle.
const MAX_REDIRECT_DEPTH: usize = 8;

/// The parameter name a trailing `*` captures the remainder under.
pub(crate) const CATCH_ALL_PARAM: &str = "rest";

// ---------------------------------------------------------------------------
// Pattern segments
// ---------------------------------------------------------------------------

/// One compiled segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Matches exactly this text.
    Literal(String),

    /// Matches any single segment, capturing it under the given name.
    Param(String),

    /// Matches the whole remainder (including nothing). Only valid in
    /// the last position.
    CatchAll,
}

/// Splits a raw pattern into segments. `"/"` and `""` compile to no
/// segments at all, which is what matches the root path.
fn parse_segments(path: &str) -> Result<Vec<Segment>, RouteError> {
    path.split('/')
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part == "*" {
                Ok(Segment::CatchAll)
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    Err(RouteError::InvalidPattern(format!(
                        "unnamed parameter segment in {path}"
                    )))
                } else {
                    Ok(Segment::Param(name.to_string()))
                }
            } else {
                Ok(Segment::Literal(part.to_string()))
            }
        })
        .collect()
}

/// Rejects patterns where a catch-all is followed by anything.
fn validate_catch_all(segments: &[Segment], pattern: &str) -> Result<(), RouteError> {
    let misplaced = segments
        .iter()
        .position(|seg| *seg == Segment::CatchAll)
        .is_some_and(|pos| pos + 1 != segments.len());
    if misplaced {
        return Err(RouteError::InvalidPattern(format!(
            "catch-all must be the last segment in {pattern}"
        )));
    }
    Ok(())
}

/// Matches a requested path (already split into segments) against a
/// compiled pattern, capturing parameters on success.
fn match_segments(pattern: &[Segment], given: &[&str]) -> Option<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();
    for (index, segment) in pattern.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                if given.get(index).copied() != Some(text.as_str()) {
                    return None;
                }
            }
            Segment::Param(name) => {
                let value = given.get(index)?;
                params.insert(name.clone(), (*value).to_string());
            }
            Segment::CatchAll => {
                // A catch-all swallows everything left, including nothing.
                params.insert(CATCH_ALL_PARAM.to_string(), given[index..].join("/"));
                return Some(params);
            }
        }
    }
    (pattern.len() == given.len()).then_some(params)
}

// ---------------------------------------------------------------------------
// Compiled records
// ---------------------------------------------------------------------------

/// One node of the route tree after compilation. Shared between the
/// primary entry, alias entries, and every descendant's chain.
struct CompiledNode {
    name: Option<String>,
    views: Vec<(String, LazyView)>,
    pass_params: bool,
    before_enter: Option<BeforeEnter>,
    meta: RouteMeta,
    redirect: Option<RouteTarget>,
}

/// One addressable pattern in the table.
struct MatchEntry {
    segments: Vec<Segment>,
    pattern: String,
    /// True for entries generated from an alias declaration. Alias
    /// matches keep the requested path visible — even when the aliased
    /// route is itself a redirect.
    via_alias: bool,
    /// Parent→leaf chain; the leaf's meta and guard govern the match.
    chain: Vec<Arc<CompiledNode>>,
}

// ---------------------------------------------------------------------------
// Resolution products
// ---------------------------------------------------------------------------

/// One level of the matched parent→leaf chain.
///
/// A renderer walks these in order: depth 0 is the outermost layout,
/// the last element is the leaf the navigation addressed.
#[derive(Clone)]
pub struct MatchedRoute {
    /// The route's name, if it declared one.
    pub name: Option<String>,

    /// View slots this level renders, in declaration order.
    /// Single-view routes have one entry under the default slot.
    pub views: Vec<(String, LazyView)>,

    /// Whether captured path parameters are forwarded to these views.
    pub pass_params: bool,

    /// The route-specific guard, run by the router for the leaf only.
    pub before_enter: Option<BeforeEnter>,
}

impl fmt::Debug for MatchedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchedRoute")
            .field("name", &self.name)
            .field("views", &self.views)
            .field("pass_params", &self.pass_params)
            .field("has_guard", &self.before_enter.is_some())
            .finish()
    }
}

/// The product of resolving a path: everything a navigation attempt needs.
///
/// Transient — produced per attempt, consumed by the guard pipeline and
/// the renderer, then discarded (the router keeps the committed one as
/// its current location).
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    /// The leaf route's name, if any.
    pub name: Option<String>,

    /// The requested path, without the hash fragment.
    pub path: String,

    /// The requested path including the hash fragment. This is what a
    /// pending post-login redirect stores.
    pub full_path: String,

    /// The hash fragment including its `#`, when the request carried one.
    pub hash: Option<String>,

    /// Parameters captured from `:param` and `*` segments across the
    /// whole matched chain.
    pub params: BTreeMap<String, String>,

    /// The leaf route's metadata. Not merged from parents.
    pub meta: RouteMeta,

    /// Parent→leaf chain of matched records.
    pub matched: Vec<MatchedRoute>,

    /// The originally requested path when a redirect was followed to get
    /// here. `None` for direct matches and for alias matches.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    /// The leaf's route-specific guard, if it declared one.
    pub fn before_enter(&self) -> Option<&BeforeEnter> {
        self.matched.last().and_then(|leaf| leaf.before_enter.as_ref())
    }

    /// Whether the leaf carries the given name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

// ---------------------------------------------------------------------------
// RouteTable
// ---------------------------------------------------------------------------

/// The compiled, immutable route table.
pub struct RouteTable {
    entries: Vec<MatchEntry>,
    names: HashMap<String, usize>,
}

impl RouteTable {
    /// Compiles a declarative route list into a table.
    ///
    /// # Errors
    /// - [`RouteError::Empty`] for an empty list
    /// - [`RouteError::DuplicateName`] when two routes share a name
    /// - [`RouteError::InvalidPattern`] for malformed declarations
    ///   (misplaced catch-all, redirect with children, named parent
    ///   without a default child, …)
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        if routes.is_empty() {
            return Err(RouteError::Empty);
        }
        let mut table = Self {
            entries: Vec::new(),
            names: HashMap::new(),
        };
        for route in routes {
            table.compile(route, &[], "", &[])?;
        }
        Ok(table)
    }

    /// Number of addressable patterns (aliases included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries. Unreachable through [`new`](Self::new),
    /// which rejects empty route lists.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a route with the given name exists.
    pub fn has_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    fn compile(
        &mut self,
        route: Route,
        prefix_segments: &[Segment],
        prefix_pattern: &str,
        chain: &[Arc<CompiledNode>],
    ) -> Result<(), RouteError> {
        let pattern = join_pattern(prefix_pattern, &route.path);
        let own = parse_segments(&route.path)?;
        let mut segments = prefix_segments.to_vec();
        segments.extend(own);
        validate_catch_all(&segments, &pattern)?;

        let Route {
            name,
            views,
            redirect,
            aliases,
            meta,
            before_enter,
            pass_params,
            children,
            ..
        } = route;

        if redirect.is_some() && !children.is_empty() {
            return Err(RouteError::InvalidPattern(format!(
                "redirect route {pattern} cannot have children"
            )));
        }

        let node = Arc::new(CompiledNode {
            name: name.clone(),
            views,
            pass_params,
            before_enter,
            meta,
            redirect,
        });
        let mut chain = chain.to_vec();
        chain.push(node);

        if children.is_empty() {
            let index = self.entries.len();
            if let Some(route_name) = &name {
                if self.names.insert(route_name.clone(), index).is_some() {
                    return Err(RouteError::DuplicateName(route_name.clone()));
                }
            }
            tracing::debug!(%pattern, name = ?name, "route registered");
            self.entries.push(MatchEntry {
                segments: segments.clone(),
                pattern: pattern.clone(),
                via_alias: false,
                chain: chain.clone(),
            });
            for alias in aliases {
                let alias_segments = parse_segments(&alias)?;
                validate_catch_all(&alias_segments, &alias)?;
                tracing::debug!(%alias, of = %pattern, "alias registered");
                self.entries.push(MatchEntry {
                    segments: alias_segments,
                    pattern: alias,
                    via_alias: true,
                    chain: chain.clone(),
                });
            }
            return Ok(());
        }

        // A parent with children renders as a layout shell; only its
        // children are addressable. Aliases would alias nothing.
        if !aliases.is_empty() {
            return Err(RouteError::InvalidPattern(format!(
                "aliases on parent route {pattern} are unsupported"
            )));
        }

        for child in children {
            self.compile(child, &segments, &pattern, &chain)?;
        }

        // A named parent resolves by name through its default ("") child.
        if let Some(parent_name) = name {
            let default_child = self
                .entries
                .iter()
                .position(|entry| !entry.via_alias && entry.pattern == pattern);
            match default_child {
                Some(index) => {
                    if self.names.insert(parent_name.clone(), index).is_some() {
                        return Err(RouteError::DuplicateName(parent_name));
                    }
                }
                None => {
                    return Err(RouteError::InvalidPattern(format!(
                        "named parent {pattern} has no default child"
                    )));
                }
            }
        }
        Ok(())
    }

    // -- Resolution --------------------------------------------------------

    /// Resolves a requested path to a route, applying alias and redirect
    /// resolution before anything else (guards never see the intermediate
    /// hops). Hash fragments (`/about#team`) match the bare path and are
    /// carried through for the scroll policy.
    pub fn resolve(&self, requested: &str) -> Result<ResolvedRoute, RouteError> {
        let (path, fragment) = split_hash(requested);
        self.resolve_path(path, fragment, None, 0)
    }

    /// Resolves a route by its registered name.
    ///
    /// # Errors
    /// [`RouteError::UnknownName`] when nothing carries the name;
    /// [`RouteError::ParamsRequired`] when the named pattern has dynamic
    /// segments (it can't be instantiated without parameter values).
    pub fn resolve_name(&self, name: &str) -> Result<ResolvedRoute, RouteError> {
        let path = self.path_for_name(name)?;
        self.resolve_path(&path, None, None, 0)
    }

    /// Resolves either kind of target.
    pub fn resolve_target(&self, target: &RouteTarget) -> Result<ResolvedRoute, RouteError> {
        match target {
            RouteTarget::Path(path) => self.resolve(path),
            RouteTarget::Name(name) => self.resolve_name(name),
        }
    }

    fn path_for_name(&self, name: &str) -> Result<String, RouteError> {
        let index = self
            .names
            .get(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        let entry = &self.entries[*index];
        let dynamic = entry
            .segments
            .iter()
            .any(|segment| !matches!(segment, Segment::Literal(_)));
        if dynamic {
            return Err(RouteError::ParamsRequired(name.to_string()));
        }
        Ok(entry.pattern.clone())
    }

    fn resolve_path(
        &self,
        path: &str,
        fragment: Option<&str>,
        redirected_from: Option<String>,
        depth: usize,
    ) -> Result<ResolvedRoute, RouteError> {
        if depth > MAX_REDIRECT_DEPTH {
            return Err(RouteError::RedirectLoop(path.to_string()));
        }

        let given: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        for entry in &self.entries {
            let Some(params) = match_segments(&entry.segments, &given) else {
                continue;
            };
            let leaf = entry.chain.last().expect("compiled chain is never empty");

            if let Some(target) = &leaf.redirect {
                let target_path = match target {
                    RouteTarget::Path(p) => p.clone(),
                    RouteTarget::Name(n) => self.path_for_name(n)?,
                };
                if entry.via_alias {
                    // The alias stays visible: resolve what the aliased
                    // route points at, but keep the requested path and
                    // surface no redirect.
                    let mut resolved = self.resolve_path(&target_path, fragment, None, depth + 1)?;
                    resolved.path = path.to_string();
                    resolved.full_path = join_full_path(path, fragment);
                    resolved.redirected_from = None;
                    return Ok(resolved);
                }
                tracing::debug!(from = %path, to = %target_path, "redirect applied");
                let origin = redirected_from.unwrap_or_else(|| join_full_path(path, fragment));
                return self.resolve_path(&target_path, fragment, Some(origin), depth + 1);
            }

            return Ok(build_resolved(entry, path, fragment, params, redirected_from));
        }
        Err(RouteError::NoMatch(path.to_string()))
    }
}

/// Debug lists the registered patterns only — chains hold closures.
impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<&str> = self.entries.iter().map(|e| e.pattern.as_str()).collect();
        f.debug_struct("RouteTable")
            .field("patterns", &patterns)
            .finish()
    }
}

fn build_resolved(
    entry: &MatchEntry,
    path: &str,
    fragment: Option<&str>,
    params: BTreeMap<String, String>,
    redirected_from: Option<String>,
) -> ResolvedRoute {
    let leaf = entry.chain.last().expect("compiled chain is never empty");
    let matched = entry
        .chain
        .iter()
        .map(|node| MatchedRoute {
            name: node.name.clone(),
            views: node.views.clone(),
            pass_params: node.pass_params,
            before_enter: node.before_enter.clone(),
        })
        .collect();
    ResolvedRoute {
        name: leaf.name.clone(),
        path: path.to_string(),
        full_path: join_full_path(path, fragment),
        hash: fragment.map(|f| format!("#{f}")),
        params,
        meta: leaf.meta.clone(),
        matched,
        redirected_from,
    }
}

fn join_pattern(prefix: &str, path: &str) -> String {
    if path.starts_with('/') || prefix.is_empty() {
        // Absolute (top-level routes, or explicit absolutes in children).
        if path.is_empty() { "/".to_string() } else { path.to_string() }
    } else if path.is_empty() {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), path)
    }
}

fn split_hash(requested: &str) -> (&str, Option<&str>) {
    match requested.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (requested, None),
    }
}

fn join_full_path(path: &str, fragment: Option<&str>) -> String {
    match fragment {
        Some(f) => format!("{path}#{f}"),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GuardDecision, LazyView};

    /// A table shaped like the demo app's: redirects, an alias, params,
    /// nesting, named slots, and a trailing catch-all.
    fn demo_table() -> RouteTable {
        RouteTable::new(vec![
            Route::view("/", LazyView::component("HomeView"))
                .name("Home")
                .title("Home Page"),
            Route::redirect("/main", RouteTarget::path("/")).alias("/main-alias"),
            Route::redirect("/old-home", RouteTarget::name("Home")),
            Route::view("/about", LazyView::component("AboutView"))
                .name("About")
                .title("About Us"),
            Route::view("/login", LazyView::component("LoginView"))
                .name("Login")
                .title("Login"),
            Route::view("/users/:id", LazyView::component("UserProfileView"))
                .name("UserProfile")
                .title("User Profile")
                .requires_auth()
                .pass_params(),
            Route::view("/user/:userId", LazyView::component("UserLayout"))
                .requires_auth()
                .title("User Section")
                .child(
                    Route::view("", LazyView::component("UserOverview"))
                        .name("UserOverview")
                        .title("User Overview"),
                )
                .child(
                    Route::view("profile", LazyView::component("UserProfileSub"))
                        .name("UserProfileSub")
                        .title("User Sub Profile"),
                ),
            Route::view("/dashboard", LazyView::component("DashboardLayout"))
                .name("Dashboard")
                .title("Dashboard")
                .requires_auth()
                .child(
                    Route::view("", LazyView::component("DashboardMain"))
                        .name("DashboardDetail")
                        .title("Main Dashboard")
                        .slot("sidebar", LazyView::component("DashboardSidebar"))
                        .slot("header", LazyView::component("DashboardHeader")),
                ),
            Route::view("/*", LazyView::component("NotFoundView"))
                .name("NotFound")
                .title("Page Not Found"),
        ])
        .expect("demo table should compile")
    }

    // =====================================================================
    // Construction
    // =====================================================================

    #[test]
    fn test_new_empty_list_is_rejected() {
        let result = RouteTable::new(Vec::new());
        assert!(matches!(result, Err(RouteError::Empty)));
    }

    #[test]
    fn test_new_duplicate_name_is_rejected() {
        let result = RouteTable::new(vec![
            Route::view("/", LazyView::component("A")).name("Home"),
            Route::view("/other", LazyView::component("B")).name("Home"),
        ]);
        assert!(matches!(result, Err(RouteError::DuplicateName(n)) if n == "Home"));
    }

    #[test]
    fn test_new_misplaced_catch_all_is_rejected() {
        let result = RouteTable::new(vec![Route::view(
            "/*/trailing",
            LazyView::component("X"),
        )]);
        assert!(matches!(result, Err(RouteError::InvalidPattern(_))));
    }

    #[test]
    fn test_new_redirect_with_children_is_rejected() {
        let result = RouteTable::new(vec![
            Route::redirect("/a", RouteTarget::path("/"))
                .child(Route::view("b", LazyView::component("B"))),
        ]);
        assert!(matches!(result, Err(RouteError::InvalidPattern(_))));
    }

    #[test]
    fn test_new_named_parent_without_default_child_is_rejected() {
        let result = RouteTable::new(vec![
            Route::view("/p", LazyView::component("Layout"))
                .name("Parent")
                .child(Route::view("only", LazyView::component("Only"))),
        ]);
        assert!(matches!(result, Err(RouteError::InvalidPattern(_))));
    }

    // =====================================================================
    // Exact and parametric matching
    // =====================================================================

    #[test]
    fn test_resolve_root_matches_home() {
        let table = demo_table();

        let resolved = table.resolve("/").expect("should match");

        assert!(resolved.is_named("Home"));
        assert_eq!(resolved.full_path, "/");
        assert!(resolved.redirected_from.is_none());
    }

    #[test]
    fn test_resolve_param_captures_value() {
        let table = demo_table();

        let resolved = table.resolve("/users/42").expect("should match");

        assert!(resolved.is_named("UserProfile"));
        assert_eq!(resolved.params.get("id").map(String::as_str), Some("42"));
        assert!(resolved.meta.requires_auth);
    }

    #[test]
    fn test_resolve_unmatched_falls_to_catch_all() {
        let table = demo_table();

        let resolved = table.resolve("/no/such/page").expect("catch-all matches");

        assert!(resolved.is_named("NotFound"));
        assert_eq!(
            resolved.params.get(CATCH_ALL_PARAM).map(String::as_str),
            Some("no/such/page")
        );
    }

    #[test]
    fn test_resolve_no_match_without_catch_all() {
        let table = RouteTable::new(vec![Route::view("/", LazyView::component("Home"))])
            .expect("should compile");

        let result = table.resolve("/missing");

        assert!(matches!(result, Err(RouteError::NoMatch(p)) if p == "/missing"));
    }

    #[test]
    fn test_resolve_registration_order_wins() {
        // "/about" is registered before the catch-all, so it wins even
        // though both match.
        let table = demo_table();

        let resolved = table.resolve("/about").expect("should match");

        assert!(resolved.is_named("About"));
    }

    // =====================================================================
    // Redirects and aliases
    // =====================================================================

    #[test]
    fn test_resolve_redirect_by_path_lands_on_target() {
        let table = demo_table();

        let resolved = table.resolve("/main").expect("should resolve");

        assert!(resolved.is_named("Home"));
        assert_eq!(resolved.path, "/");
        assert_eq!(resolved.redirected_from.as_deref(), Some("/main"));
    }

    #[test]
    fn test_resolve_redirect_by_name_lands_on_target() {
        let table = demo_table();

        let resolved = table.resolve("/old-home").expect("should resolve");

        assert!(resolved.is_named("Home"));
        assert_eq!(resolved.redirected_from.as_deref(), Some("/old-home"));
    }

    #[test]
    fn test_resolve_alias_keeps_requested_path_and_hides_redirect() {
        let table = demo_table();

        let resolved = table.resolve("/main-alias").expect("should resolve");

        assert!(resolved.is_named("Home"));
        assert_eq!(resolved.path, "/main-alias");
        assert_eq!(resolved.full_path, "/main-alias");
        assert!(resolved.redirected_from.is_none());
    }

    #[test]
    fn test_resolve_redirect_cycle_is_capped() {
        let table = RouteTable::new(vec![
            Route::redirect("/a", RouteTarget::path("/b")),
            Route::redirect("/b", RouteTarget::path("/a")),
        ])
        .expect("should compile");

        let result = table.resolve("/a");

        assert!(matches!(result, Err(RouteError::RedirectLoop(_))));
    }

    // =====================================================================
    // Nesting and named slots
    // =====================================================================

    #[test]
    fn test_resolve_nested_default_child() {
        let table = demo_table();

        let resolved = table.resolve("/user/7").expect("should match");

        assert!(resolved.is_named("UserOverview"));
        assert_eq!(resolved.params.get("userId").map(String::as_str), Some("7"));
        // Parent layout above, child below.
        assert_eq!(resolved.matched.len(), 2);
        assert_eq!(resolved.matched[0].views[0].1.resolve().name(), "UserLayout");
        assert_eq!(resolved.matched[1].views[0].1.resolve().name(), "UserOverview");
    }

    #[test]
    fn test_resolve_nested_named_child() {
        let table = demo_table();

        let resolved = table.resolve("/user/7/profile").expect("should match");

        assert!(resolved.is_named("UserProfileSub"));
        assert_eq!(resolved.meta.title.as_deref(), Some("User Sub Profile"));
        // Meta is the leaf's, not merged: the child never declared
        // requires_auth, so the resolved route doesn't carry it.
        assert!(!resolved.meta.requires_auth);
    }

    #[test]
    fn test_resolve_named_slots_all_present() {
        let table = demo_table();

        let resolved = table.resolve("/dashboard").expect("should match");

        assert!(resolved.is_named("DashboardDetail"));
        let child = resolved.matched.last().unwrap();
        let slots: Vec<&str> = child.views.iter().map(|(slot, _)| slot.as_str()).collect();
        assert_eq!(slots, vec!["default", "sidebar", "header"]);
    }

    #[test]
    fn test_resolve_name_of_parent_hits_default_child() {
        let table = demo_table();

        let resolved = table.resolve_name("Dashboard").expect("should resolve");

        assert_eq!(resolved.path, "/dashboard");
        assert!(resolved.is_named("DashboardDetail"));
    }

    // =====================================================================
    // Name resolution
    // =====================================================================

    #[test]
    fn test_resolve_name_static_route() {
        let table = demo_table();

        let resolved = table.resolve_name("Login").expect("should resolve");

        assert_eq!(resolved.full_path, "/login");
    }

    #[test]
    fn test_resolve_name_unknown_errors() {
        let table = demo_table();

        let result = table.resolve_name("Nowhere");

        assert!(matches!(result, Err(RouteError::UnknownName(n)) if n == "Nowhere"));
    }

    #[test]
    fn test_resolve_name_dynamic_pattern_errors() {
        let table = demo_table();

        let result = table.resolve_name("UserProfile");

        assert!(matches!(result, Err(RouteError::ParamsRequired(n)) if n == "UserProfile"));
    }

    #[test]
    fn test_resolve_target_both_kinds() {
        let table = demo_table();

        let by_path = table.resolve_target(&RouteTarget::path("/about")).unwrap();
        let by_name = table.resolve_target(&RouteTarget::name("About")).unwrap();

        assert_eq!(by_path.name, by_name.name);
    }

    // =====================================================================
    // Hash fragments
    // =====================================================================

    #[test]
    fn test_resolve_hash_is_split_and_preserved() {
        let table = demo_table();

        let resolved = table.resolve("/about#team").expect("should match");

        assert!(resolved.is_named("About"));
        assert_eq!(resolved.path, "/about");
        assert_eq!(resolved.full_path, "/about#team");
        assert_eq!(resolved.hash.as_deref(), Some("#team"));
    }

    #[test]
    fn test_resolve_hash_survives_redirect() {
        let table = demo_table();

        let resolved = table.resolve("/main#anchor").expect("should resolve");

        assert!(resolved.is_named("Home"));
        assert_eq!(resolved.hash.as_deref(), Some("#anchor"));
    }

    // =====================================================================
    // Guards on resolved routes
    // =====================================================================

    #[test]
    fn test_before_enter_exposed_on_leaf() {
        let table = RouteTable::new(vec![
            Route::view("/guarded", LazyView::component("X"))
                .before_enter(|_ctx| GuardDecision::deny("closed")),
            Route::view("/open", LazyView::component("Y")),
        ])
        .expect("should compile");

        assert!(table.resolve("/guarded").unwrap().before_enter().is_some());
        assert!(table.resolve("/open").unwrap().before_enter().is_none());
    }
}
