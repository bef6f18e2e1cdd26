//! Conifer DOM - lightweight document tree
//!
//! Arena-backed DOM substrate for the Conifer widget library. Widgets bind
//! to nodes in this tree and express every state change as an attribute or
//! class-list mutation; the host is responsible for reflecting those
//! mutations into real markup.

mod document;
mod node;
mod query;
mod tree;

pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use query::SimpleSelector;
pub use tree::{Children, Descendants, DomError, DomResult, DomTree};

/// Node identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Document root
    pub const ROOT: NodeId = NodeId(0);

    /// Check if this id refers to a node at all
    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}
