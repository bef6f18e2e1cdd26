//! Element queries
//!
//! Simple-selector matching: tag, class, id, universal. Enough for widget
//! binding and delegated-click resolution; combinators are out of scope.

use crate::{DomTree, Node, NodeId};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            (!id.is_empty()).then(|| Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            (!class.is_empty()).then(|| Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_ascii_lowercase()))
        }
    }
}

impl DomTree {
    /// Check if an element matches a selector
    pub fn matches(&self, id: NodeId, selector: &SimpleSelector) -> bool {
        let Some(el) = self.get(id).and_then(Node::as_element) else {
            return false;
        };
        match selector {
            SimpleSelector::Universal => true,
            SimpleSelector::Tag(tag) => el.tag.eq_ignore_ascii_case(tag),
            SimpleSelector::Class(class) => el.has_class(class),
            SimpleSelector::Id(want) => el.attribute("id") == Some(want),
        }
    }

    /// Find the closest ancestor-or-self matching a selector
    pub fn closest(&self, id: NodeId, selector: &SimpleSelector) -> Option<NodeId> {
        let mut at = id;
        while at.is_some() {
            if self.matches(at, selector) {
                return Some(at);
            }
            at = self.get(at).map_or(NodeId::NONE, |n| n.parent);
        }
        None
    }

    /// First descendant of `root` matching a selector
    pub fn query_selector(&self, root: NodeId, selector: &SimpleSelector) -> Option<NodeId> {
        self.descendants(root).find(|&d| self.matches(d, selector))
    }

    /// All descendants of `root` matching a selector, in document order
    pub fn query_selector_all(&self, root: NodeId, selector: &SimpleSelector) -> Vec<NodeId> {
        self.descendants(root)
            .filter(|&d| self.matches(d, selector))
            .collect()
    }
}
