//! The navigation pipeline: resolve → route guard → global guard → commit.
//!
//! Every navigation attempt flows through [`Router::navigate`] (or one of
//! the wrappers that call it). The steps, in order:
//!
//! 1. **Resolve** the requested target through the route table. Aliases
//!    and table-level redirects are applied here, before any guard sees
//!    anything.
//! 2. **Route guard** — the target leaf's `before_enter`, if declared.
//!    Its decision value either proceeds, restarts the pipeline at a
//!    redirect target, or blocks the attempt.
//! 3. **Global guard** — updates the document title from the target's
//!    metadata, then checks authentication (bounce to login, storing the
//!    attempted path) and roles (any-of intersection, bounce to home).
//! 4. **Commit** — history bookkeeping, lazy view resolution, scroll
//!    target computation, and the router's current location moves.
//!
//! All of this runs on `&mut self`: attempts are sequential and each runs
//! to completion before the next can start, so "latest request wins" is
//! the trivial concurrency contract.

use std::collections::BTreeMap;

use wayfarer_routes::{
    GuardContext, GuardDecision, ResolvedRoute, RouteTable, RouteTarget, ViewHandle,
};
use wayfarer_session::{Authenticator, Session, User};

use crate::WayfarerError;
use crate::history::{History, HistoryEntry};
use crate::scroll::{ScrollPosition, ScrollTarget, scroll_target};

/// How many guard-issued redirects one attempt may chain before the
/// router gives up and blocks it. Guards redirecting to each other
/// forever would otherwise spin.
const MAX_GUARD_REDIRECTS: usize = 8;

/// App-wide router settings.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// The document title when the target route declares none, and the
    /// suffix appended when it does (`"{route title} - {app_title}"`).
    pub app_title: String,

    /// Where a successful login lands when no redirect is pending, and
    /// where role-check failures bounce to.
    pub home: RouteTarget,

    /// Where unauthenticated visitors to protected routes bounce to,
    /// and where logout lands.
    pub login: RouteTarget,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            app_title: "Wayfarer Demo App".to_string(),
            home: RouteTarget::name("Home"),
            login: RouteTarget::name("Login"),
        }
    }
}

/// Which way a committed navigation moves the history cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavKind {
    Push,
    Back,
    Forward,
}

/// One view the rendering layer should mount after a commit.
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// Nesting depth: 0 is the outermost layout, the last depth is the
    /// leaf the navigation addressed.
    pub depth: usize,

    /// The slot this view renders into (`"default"` unless the route
    /// declared named slots).
    pub slot: String,

    /// The resolved view component.
    pub view: ViewHandle,

    /// Captured path parameters, present only when the matched route
    /// opted into parameter forwarding.
    pub params: Option<BTreeMap<String, String>>,
}

/// A committed navigation: the final route after any redirects, plus
/// everything the rendering layer needs.
#[derive(Debug, Clone)]
pub struct Committed {
    /// Where the router now is.
    pub route: ResolvedRoute,

    /// Views to mount, parent layouts first.
    pub views: Vec<RenderedView>,

    /// The document title after the global guard ran.
    pub title: String,

    /// Where the viewport should go.
    pub scroll: ScrollTarget,

    /// The originally requested path when a table-level redirect was
    /// followed. Alias matches and guard redirects report `None`.
    pub redirected_from: Option<String>,
}

/// The result of a navigation attempt.
///
/// Redirects are silent — a redirected attempt still ends `Committed`,
/// just somewhere else. `Blocked` only arises when a guard explicitly
/// denies, and it leaves the router exactly where it was.
#[derive(Debug, Clone)]
pub enum NavigationOutcome {
    Committed(Committed),
    Blocked {
        /// The denying guard's reason, for logs and diagnostics. Never
        /// shown as an error page — the router simply stays put.
        reason: String,
    },
}

impl NavigationOutcome {
    /// The committed navigation, if the attempt wasn't blocked.
    pub fn committed(&self) -> Option<&Committed> {
        match self {
            Self::Committed(committed) => Some(committed),
            Self::Blocked { .. } => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Ties a route table to a session and runs the guard pipeline.
///
/// Owns both collaborators. The session stays reachable through
/// [`session`](Self::session)/[`session_mut`](Self::session_mut) for
/// callers that want pure state transitions without navigation; the
/// [`login`](Self::login)/[`logout`](Self::logout) methods here are the
/// explicit "transition, then navigate" couplings the demo app uses.
pub struct Router<A: Authenticator> {
    table: RouteTable,
    session: Session<A>,
    config: RouterConfig,
    current: Option<ResolvedRoute>,
    history: History,
    document_title: String,
    /// Viewport position reported by the host for the current location,
    /// saved into history when the user navigates away.
    recorded_scroll: Option<ScrollPosition>,
    /// Monotonic attempt counter, tags the tracing output.
    attempts: u64,
}

impl<A: Authenticator> Router<A> {
    /// A router with default configuration, parked nowhere. The first
    /// navigation (typically to `/`) establishes the current location.
    pub fn new(table: RouteTable, session: Session<A>) -> Self {
        Self::with_config(table, session, RouterConfig::default())
    }

    pub fn with_config(table: RouteTable, session: Session<A>, config: RouterConfig) -> Self {
        let document_title = config.app_title.clone();
        Self {
            table,
            session,
            config,
            current: None,
            history: History::new(),
            document_title,
            recorded_scroll: None,
            attempts: 0,
        }
    }

    // -- Read accessors ----------------------------------------------------

    /// Where the router currently is, once anything has committed.
    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// The document title as of the last global-guard run.
    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    pub fn session(&self) -> &Session<A> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<A> {
        &mut self.session
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // -- Navigation --------------------------------------------------------

    /// Navigates to a path, running the full pipeline.
    pub fn navigate(&mut self, path: &str) -> Result<NavigationOutcome, WayfarerError> {
        let target = RouteTarget::path(path);
        self.navigate_to(&target)
    }

    /// Navigates to a path or a named route.
    pub fn navigate_to(&mut self, target: &RouteTarget) -> Result<NavigationOutcome, WayfarerError> {
        self.attempts += 1;
        let attempt = self.attempts;
        tracing::debug!(
            attempt,
            %target,
            from = ?self.current.as_ref().map(|route| route.full_path.clone()),
            "navigation requested"
        );
        self.navigate_inner(target, NavKind::Push, None, 0, attempt)
    }

    /// Traverses one entry back, re-running the full pipeline on the
    /// target and restoring its saved scroll position. `None` when the
    /// back stack is empty.
    pub fn back(&mut self) -> Option<Result<NavigationOutcome, WayfarerError>> {
        let entry = self.history.peek_back()?.clone();
        self.attempts += 1;
        let attempt = self.attempts;
        let target = RouteTarget::path(entry.full_path);
        Some(self.navigate_inner(&target, NavKind::Back, entry.scroll, 0, attempt))
    }

    /// Traverses one entry forward, the mirror of [`back`](Self::back).
    pub fn forward(&mut self) -> Option<Result<NavigationOutcome, WayfarerError>> {
        let entry = self.history.peek_forward()?.clone();
        self.attempts += 1;
        let attempt = self.attempts;
        let target = RouteTarget::path(entry.full_path);
        Some(self.navigate_inner(&target, NavKind::Forward, entry.scroll, 0, attempt))
    }

    /// Stores the host-reported viewport position for the current
    /// location. It rides into history on the next navigation so that
    /// back/forward traversal can restore it.
    pub fn record_scroll(&mut self, position: ScrollPosition) {
        self.recorded_scroll = Some(position);
    }

    // -- Session-coupled operations ---------------------------------------

    /// Logs in, then performs the post-login navigation: the pending
    /// redirect if one is stored (consumed exactly once), otherwise the
    /// configured home route.
    ///
    /// # Errors
    /// [`SessionError::InvalidCredentials`](wayfarer_session::SessionError)
    /// propagates untouched — no navigation happens and the router stays
    /// where it was, so a login view can surface the rejection.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(User, NavigationOutcome), WayfarerError> {
        let user = self.session.login(username, password).await?;
        let outcome = match self.session.take_redirect_after_login() {
            Some(path) => {
                tracing::info!(%path, "resuming stored redirect after login");
                self.navigate(&path)?
            }
            None => {
                let home = self.config.home.clone();
                self.navigate_to(&home)?
            }
        };
        Ok((user, outcome))
    }

    /// Logs out, then navigates to the login route.
    pub fn logout(&mut self) -> Result<NavigationOutcome, WayfarerError> {
        self.session.logout();
        let login = self.config.login.clone();
        self.navigate_to(&login)
    }

    /// Session-restoration probe, passed through for convenience.
    pub async fn fetch_user(&mut self) -> Option<User> {
        self.session.fetch_user().await
    }

    // -- Pipeline ----------------------------------------------------------

    fn navigate_inner(
        &mut self,
        target: &RouteTarget,
        kind: NavKind,
        saved: Option<ScrollPosition>,
        depth: usize,
        attempt: u64,
    ) -> Result<NavigationOutcome, WayfarerError> {
        if depth > MAX_GUARD_REDIRECTS {
            tracing::warn!(attempt, %target, "guard redirect limit exceeded");
            return Ok(NavigationOutcome::Blocked {
                reason: format!("guard redirect limit exceeded at {target}"),
            });
        }

        // Step 1: resolve. Table-level redirects and aliases happen here.
        let resolved = self.table.resolve_target(target)?;
        let redirected_from = resolved.redirected_from.clone();

        // Step 2: route-specific guard.
        let decision = match resolved.before_enter() {
            Some(guard) => {
                let snapshot = self.session.snapshot();
                let ctx = GuardContext {
                    to: &resolved,
                    from: self.current.as_ref(),
                    auth: &snapshot,
                };
                guard(&ctx)
            }
            None => GuardDecision::Proceed,
        };
        match decision {
            GuardDecision::Proceed => {}
            GuardDecision::RedirectTo(next) => {
                tracing::debug!(attempt, to = %next, "route guard redirected");
                return self.navigate_inner(&next, NavKind::Push, None, depth + 1, attempt);
            }
            GuardDecision::Deny { reason } => {
                tracing::warn!(attempt, route = ?resolved.name, %reason, "route guard denied");
                return Ok(NavigationOutcome::Blocked { reason });
            }
        }

        // Step 3a: document title. Runs before the auth check — a denied
        // attempt still retitles to the target, then the redirect leg
        // retitles again.
        self.document_title = match &resolved.meta.title {
            Some(title) => format!("{title} - {}", self.config.app_title),
            None => self.config.app_title.clone(),
        };

        // Step 3b: authentication.
        if resolved.meta.requires_auth && !self.session.is_logged_in() {
            tracing::info!(
                attempt,
                path = %resolved.full_path,
                "unauthenticated on a protected route, deferring to login"
            );
            self.session.set_redirect_after_login(resolved.full_path.clone());
            let login = self.config.login.clone();
            return self.navigate_inner(&login, NavKind::Push, None, depth + 1, attempt);
        }

        // Step 3c: roles. Only consulted when requires_auth is set —
        // roles without requires_auth are declared but never enforced.
        if resolved.meta.requires_auth {
            if let Some(required) = &resolved.meta.roles {
                let snapshot = self.session.snapshot();
                if !snapshot.has_any_role(required) {
                    tracing::warn!(
                        attempt,
                        route = ?resolved.name,
                        required = ?required,
                        held = ?snapshot.roles,
                        "missing required role, bouncing to home"
                    );
                    let home = self.config.home.clone();
                    return self.navigate_inner(&home, NavKind::Push, None, depth + 1, attempt);
                }
            }
        }

        // Step 4: commit.
        Ok(NavigationOutcome::Committed(self.commit(
            resolved,
            kind,
            saved,
            redirected_from,
            attempt,
        )))
    }

    fn commit(
        &mut self,
        resolved: ResolvedRoute,
        kind: NavKind,
        saved: Option<ScrollPosition>,
        redirected_from: Option<String>,
        attempt: u64,
    ) -> Committed {
        let scroll = scroll_target(&resolved, self.current.as_ref(), saved);

        // History bookkeeping: the location being left carries whatever
        // scroll position the host recorded for it.
        let leaving = self.current.take().map(|route| {
            HistoryEntry::with_scroll(route.full_path, self.recorded_scroll.take())
        });
        if let Some(entry) = leaving {
            match kind {
                NavKind::Push => self.history.push(entry),
                NavKind::Back => {
                    let _ = self.history.go_back(entry);
                }
                NavKind::Forward => {
                    let _ = self.history.go_forward(entry);
                }
            }
        }

        // Lazy view resolution, cached after the first navigation here.
        let mut views = Vec::new();
        for (depth, matched) in resolved.matched.iter().enumerate() {
            for (slot, lazy) in &matched.views {
                views.push(RenderedView {
                    depth,
                    slot: slot.clone(),
                    view: lazy.resolve(),
                    params: matched.pass_params.then(|| resolved.params.clone()),
                });
            }
        }

        tracing::info!(
            attempt,
            to = %resolved.full_path,
            route = ?resolved.name,
            title = %self.document_title,
            "navigation committed"
        );
        self.current = Some(resolved.clone());

        Committed {
            route: resolved,
            views,
            title: self.document_title.clone(),
            scroll,
            redirected_from,
        }
    }
}
