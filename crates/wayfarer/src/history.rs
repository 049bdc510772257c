//! Navigation history with saved scroll positions.
//!
//! A back stack and a forward stack of visited locations. The *current*
//! location is not stored here — the router owns it — so every entry in
//! either stack is somewhere the user could traverse to.
//!
//! The router peeks before it moves: guards run against the target first,
//! and the cursor only moves on commit. A blocked back-navigation leaves
//! the stacks untouched.

use crate::scroll::ScrollPosition;

/// One visited location.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The full path (hash included) that was visited.
    pub full_path: String,

    /// The viewport position recorded when the user left this location,
    /// if the host reported one. Fed back through the scroll policy on
    /// back/forward traversal.
    pub scroll: Option<ScrollPosition>,
}

impl HistoryEntry {
    pub fn new(full_path: impl Into<String>) -> Self {
        Self {
            full_path: full_path.into(),
            scroll: None,
        }
    }

    pub fn with_scroll(full_path: impl Into<String>, scroll: Option<ScrollPosition>) -> Self {
        Self {
            full_path: full_path.into(),
            scroll,
        }
    }
}

/// Back/forward stacks around the router's current location.
#[derive(Debug, Default)]
pub struct History {
    back: Vec<HistoryEntry>,
    forward: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry a back-traversal would land on.
    pub fn peek_back(&self) -> Option<&HistoryEntry> {
        self.back.last()
    }

    /// The entry a forward-traversal would land on.
    pub fn peek_forward(&self) -> Option<&HistoryEntry> {
        self.forward.last()
    }

    pub fn back_len(&self) -> usize {
        self.back.len()
    }

    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    /// Records a normal (push) navigation: the location being left goes
    /// onto the back stack and any forward entries are discarded — the
    /// user has branched off the old timeline.
    pub fn push(&mut self, leaving: HistoryEntry) {
        self.back.push(leaving);
        self.forward.clear();
    }

    /// Commits a back-traversal: pops the target (already navigated to by
    /// the router) and parks the location being left on the forward stack.
    pub fn go_back(&mut self, leaving: HistoryEntry) -> Option<HistoryEntry> {
        let target = self.back.pop()?;
        self.forward.push(leaving);
        Some(target)
    }

    /// Commits a forward-traversal, the mirror of [`go_back`](Self::go_back).
    pub fn go_forward(&mut self, leaving: HistoryEntry) -> Option<HistoryEntry> {
        let target = self.forward.pop()?;
        self.back.push(leaving);
        Some(target)
    }
}
