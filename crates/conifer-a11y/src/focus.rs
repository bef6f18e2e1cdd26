//! Focus Tracking
//!
//! The document has at most one focused node. Widgets move focus through
//! this tracker (dialog open focuses the dismiss control, dialog close
//! returns focus to the trigger) and the host mirrors it into the real DOM.

use conifer_dom::NodeId;
use tracing::debug;

/// Tracks the currently focused node
#[derive(Debug, Default)]
pub struct FocusTracker {
    focused: Option<NodeId>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to a node
    pub fn focus(&mut self, id: NodeId) {
        debug!(node = ?id, "focus");
        self.focused = Some(id);
    }

    /// Clear focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Currently focused node
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_and_blur() {
        let mut focus = FocusTracker::new();
        assert_eq!(focus.focused(), None);

        focus.focus(NodeId::ROOT);
        assert_eq!(focus.focused(), Some(NodeId::ROOT));

        focus.blur();
        assert_eq!(focus.focused(), None);
    }
}
