//! Inert Isolation
//!
//! While an overlay is open, every top-level sibling of the overlay root is
//! marked `inert`: non-focusable and excluded from assistive-technology
//! traversal. Release reverses exactly the set this instance marked;
//! markers set by anyone else survive.

use conifer_dom::{Document, NodeId};
use tracing::debug;

use crate::aria::attr;

/// Bookkeeping for one isolate/release pair.
///
/// Strictly paired per overlay session: `release` drains the recorded set,
/// so a second release is a no-op.
#[derive(Debug, Default)]
pub struct FocusIsolation {
    isolated: Vec<NodeId>,
}

impl FocusIsolation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this instance currently holds isolation markers
    pub fn is_active(&self) -> bool {
        !self.isolated.is_empty()
    }

    /// Mark every sibling of `exclude` as inert.
    ///
    /// Siblings that already carry the marker were not set by us and are
    /// skipped, so they keep it across `release`. No-op when `exclude` has
    /// no parent or no siblings.
    pub fn isolate(&mut self, doc: &mut Document, exclude: NodeId) {
        let Some(parent) = doc.tree().parent(exclude) else {
            return;
        };
        let siblings: Vec<NodeId> = doc
            .tree()
            .child_elements(parent)
            .filter(|&c| c != exclude && !doc.tree().has_attribute(c, attr::INERT))
            .collect();

        for id in siblings {
            doc.tree_mut().set_attribute(id, attr::INERT, attr::INERT);
            self.isolated.push(id);
        }
        debug!(count = self.isolated.len(), "isolated siblings");
    }

    /// Remove the marker from exactly the recorded set
    pub fn release(&mut self, doc: &mut Document) {
        for id in self.isolated.drain(..) {
            doc.tree_mut().remove_attribute(id, attr::INERT);
        }
    }
}
