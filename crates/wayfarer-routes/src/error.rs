//! Error types for the route table.

/// Errors that can occur while building or querying a route table.
///
/// Construction errors (`DuplicateName`, `InvalidPattern`, `Empty`) are
/// programmer mistakes surfaced once at startup; resolution errors
/// (`NoMatch`, `UnknownName`, `RedirectLoop`, `ParamsRequired`) can occur
/// per navigation attempt. A table whose last route is a catch-all never
/// produces `NoMatch`.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// No registered pattern matches the requested path.
    #[error("no route matches path {0}")]
    NoMatch(String),

    /// No route carries the requested name.
    #[error("no route named {0}")]
    UnknownName(String),

    /// Two routes declared the same name. Names must be unique because
    /// redirects and navigation-by-name look routes up by them.
    #[error("duplicate route name {0}")]
    DuplicateName(String),

    /// Redirect resolution exceeded the depth cap — almost certainly a
    /// redirect cycle in the table.
    #[error("redirect limit exceeded while resolving {0}")]
    RedirectLoop(String),

    /// The named route's pattern has dynamic segments, so it cannot be
    /// resolved by name alone.
    #[error("route {0} has dynamic segments and cannot be resolved by name alone")]
    ParamsRequired(String),

    /// A route declaration is malformed (catch-all not in last position,
    /// redirect route with children, and so on).
    #[error("invalid route declaration: {0}")]
    InvalidPattern(String),

    /// The table was built from an empty route list.
    #[error("route table has no routes")]
    Empty,
}
