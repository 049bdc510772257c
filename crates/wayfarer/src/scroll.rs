//! Scroll restoration policy.
//!
//! A pure function from navigation inputs to a scroll target. No state is
//! held — the router computes the target at commit time and hands it to
//! the rendering layer, which is the only thing that can actually move a
//! viewport.

use serde::{Deserialize, Serialize};
use wayfarer_routes::ResolvedRoute;

/// A viewport position, in CSS pixels from the document origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    /// Position at the document origin.
    pub const TOP: Self = Self { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Where the viewport should go after a committed navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollTarget {
    /// Restore a previously saved position (back/forward traversal).
    Saved(ScrollPosition),

    /// Scroll the element matching the selector into view.
    Anchor {
        /// CSS selector, the hash fragment verbatim (e.g. `#team`).
        selector: String,
        /// Animate the scroll instead of jumping.
        smooth: bool,
    },

    /// Scroll to the top of the document.
    Top,
}

/// Computes the scroll target for a committed navigation.
///
/// Precedence: a saved position wins outright (even when the destination
/// carries a hash), then a hash fragment yields a smooth anchor scroll,
/// then the default is top.
pub fn scroll_target(
    to: &ResolvedRoute,
    from: Option<&ResolvedRoute>,
    saved: Option<ScrollPosition>,
) -> ScrollTarget {
    tracing::debug!(
        to = ?to.name,
        from = ?from.map(|route| route.name.clone()),
        saved = ?saved,
        "computing scroll target"
    );
    if let Some(position) = saved {
        return ScrollTarget::Saved(position);
    }
    if let Some(hash) = &to.hash {
        return ScrollTarget::Anchor {
            selector: hash.clone(),
            smooth: true,
        };
    }
    ScrollTarget::Top
}
