//! Lazy view references.
//!
//! A route doesn't hold its view component — it holds a *loader* for it.
//! The loader runs the first time the route is actually navigated to, and
//! the result is cached for every navigation after that. Nothing loads at
//! table-construction time.
//!
//! The core never inspects a view's internals: a [`ViewHandle`] is an
//! opaque reference the rendering layer interprets. Routes that declare
//! parameter forwarding get the captured path parameters handed to the
//! handle alongside it (see the router's rendered-view output).

use std::fmt;
use std::sync::{Arc, OnceLock};

/// The slot name a single-view route renders into.
///
/// Multi-slot routes name their slots explicitly ("sidebar", "header", …);
/// everything else lands here.
pub const DEFAULT_SLOT: &str = "default";

/// An opaque reference to an external view component.
///
/// Cheap to clone (shared string). Equality is by name, which is all the
/// core ever needs to know about a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    name: Arc<str>,
}

impl ViewHandle {
    /// A handle to the view component with the given name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// The component name the rendering layer resolves.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

struct LazyInner {
    loader: Box<dyn Fn() -> ViewHandle + Send + Sync>,
    cell: OnceLock<ViewHandle>,
}

/// A view reference resolved on demand.
///
/// Wraps a loader closure and a once-cell: [`resolve`](Self::resolve) runs
/// the loader on first call and answers from the cache on every later
/// call, even across clones (clones share the cell through an `Arc`).
///
/// In the demo this stands in for deferred code-splitting: the loader
/// would fetch/initialize the component chunk; here it just constructs
/// the handle.
#[derive(Clone)]
pub struct LazyView {
    inner: Arc<LazyInner>,
}

impl LazyView {
    /// A lazy view backed by the given loader.
    pub fn new(loader: impl Fn() -> ViewHandle + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(LazyInner {
                loader: Box::new(loader),
                cell: OnceLock::new(),
            }),
        }
    }

    /// Shorthand for a loader that just names the component. The laziness
    /// still applies — the handle is built on first navigation.
    pub fn component(name: &'static str) -> Self {
        Self::new(move || ViewHandle::new(name))
    }

    /// Resolves the view, running the loader at most once.
    pub fn resolve(&self) -> ViewHandle {
        self.inner
            .cell
            .get_or_init(|| {
                let handle = (self.inner.loader)();
                tracing::debug!(view = %handle, "lazy view resolved");
                handle
            })
            .clone()
    }

    /// Whether the loader has already run.
    pub fn is_resolved(&self) -> bool {
        self.inner.cell.get().is_some()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.cell.get() {
            Some(handle) => write!(f, "LazyView(resolved: {handle})"),
            None => write!(f, "LazyView(pending)"),
        }
    }
}
