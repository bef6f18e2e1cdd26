//! DOM Tree (arena-based allocation)
//!
//! Structural mutation returns `DomResult`; attribute and class writes are
//! infallible and silently no-op on ids that do not refer to an element.
//! Detached nodes stay in the arena and can be re-attached later.

use thiserror::Error;
use tracing::trace;

use crate::{Node, NodeId};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Node id does not refer to a node
    #[error("node not found")]
    NotFound,
    /// Inserting a node under itself or one of its descendants
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Operation requires an element or document node
    #[error("not an element")]
    NotAnElement,
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree containing only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Document root id
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes ever allocated (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_some().then_some(parent)
    }

    /// First child of a node
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        let child = self.get(id)?.first_child;
        child.is_some().then_some(child)
    }

    /// Tag name if `id` is an element
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.get(id)?.as_element().map(|e| e.tag.as_str())
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            cur: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Iterate over the direct element children of a node
    pub fn child_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .filter(|&c| self.get(c).is_some_and(Node::is_element))
    }

    /// Iterate over all descendants of `root` in document order
    /// (`root` itself excluded)
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            root,
            cur: self.get(root).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Check whether `id` is `ancestor` or sits inside its subtree
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut at = id;
        while at.is_some() {
            if at == ancestor {
                return true;
            }
            at = self.get(at).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous position first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        match self.get(parent) {
            None => return Err(DomError::NotFound),
            Some(n) if n.as_text().is_some() => return Err(DomError::NotAnElement),
            Some(_) => {}
        }
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest);
        }

        self.detach(child);

        let prev_last = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);
        if prev_last.is_some() {
            if let Some(n) = self.get_mut(prev_last) {
                n.next_sibling = child;
            }
        }
        if let Some(n) = self.get_mut(child) {
            n.parent = parent;
            n.prev_sibling = prev_last;
            n.next_sibling = NodeId::NONE;
        }
        if let Some(n) = self.get_mut(parent) {
            if n.first_child == NodeId::NONE {
                n.first_child = child;
            }
            n.last_child = child;
        }
        Ok(())
    }

    /// Unlink a node from its parent and siblings. No-op for unknown ids or
    /// already-detached nodes; the node stays in the arena.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if parent == NodeId::NONE {
            return;
        }
        trace!(node = id.0, "detach");

        if prev.is_some() {
            if let Some(n) = self.get_mut(prev) {
                n.next_sibling = next;
            }
        }
        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        }
        if let Some(p) = self.get_mut(parent) {
            if p.first_child == id {
                p.first_child = next;
            }
            if p.last_child == id {
                p.last_child = prev;
            }
        }
        if let Some(n) = self.get_mut(id) {
            n.parent = NodeId::NONE;
            n.prev_sibling = NodeId::NONE;
            n.next_sibling = NodeId::NONE;
        }
    }

    /// Get an attribute value on an element
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attribute(name)
    }

    /// Set an attribute on an element (no-op otherwise)
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.get_mut(id).and_then(Node::as_element_mut) {
            el.set_attribute(name, value);
        }
    }

    /// Remove an attribute from an element (no-op otherwise)
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.get_mut(id).and_then(Node::as_element_mut) {
            el.remove_attribute(name);
        }
    }

    /// Check attribute presence
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_attribute(name))
    }

    /// Add a class to an element (no-op otherwise)
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.get_mut(id).and_then(Node::as_element_mut) {
            el.add_class(class);
        }
    }

    /// Remove a class from an element (no-op otherwise)
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.get_mut(id).and_then(Node::as_element_mut) {
            el.remove_class(class);
        }
    }

    /// Check class membership
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id)
            .and_then(Node::as_element)
            .is_some_and(|e| e.has_class(class))
    }

    /// Concatenated text of a node's subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        if let Some(text) = node.as_text() {
            return text.to_string();
        }
        let mut out = String::new();
        for d in self.descendants(id) {
            if let Some(text) = self.get(d).and_then(Node::as_text) {
                out.push_str(text);
            }
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    cur: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.cur == NodeId::NONE {
            return None;
        }
        let result = self.cur;
        self.cur = self
            .tree
            .get(self.cur)
            .map_or(NodeId::NONE, |n| n.next_sibling);
        Some(result)
    }
}

/// Pre-order iterator over a subtree, excluding the subtree root
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    cur: NodeId,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.cur == NodeId::NONE {
            return None;
        }
        let result = self.cur;
        let node = self.tree.get(self.cur)?;
        if node.first_child.is_some() {
            self.cur = node.first_child;
        } else {
            let mut at = self.cur;
            self.cur = NodeId::NONE;
            while at != self.root && at.is_some() {
                let Some(n) = self.tree.get(at) else { break };
                if n.next_sibling.is_some() {
                    self.cur = n.next_sibling;
                    break;
                }
                at = n.parent;
            }
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_iterate_children() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        tree.append_child(tree.root(), ul).unwrap();
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, b).unwrap();

        let kids: Vec<_> = tree.children(ul).collect();
        assert_eq!(kids, vec![a, b]);
        assert_eq!(tree.parent(a), Some(ul));
    }

    #[test]
    fn detach_relinks_siblings() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        let c = tree.create_element("li");
        for id in [a, b, c] {
            tree.append_child(ul, id).unwrap();
        }

        tree.detach(b);
        let kids: Vec<_> = tree.children(ul).collect();
        assert_eq!(kids, vec![a, c]);
        assert_eq!(tree.parent(b), None);

        // detach is a no-op when already detached
        tree.detach(b);
        assert_eq!(tree.children(ul).count(), 2);
    }

    #[test]
    fn reattach_after_detach() {
        let mut tree = DomTree::new();
        let src = tree.create_element("div");
        let dst = tree.create_element("div");
        let content = tree.create_element("p");
        tree.append_child(src, content).unwrap();

        tree.append_child(dst, content).unwrap();
        assert_eq!(tree.parent(content), Some(dst));
        assert_eq!(tree.children(src).count(), 0);
    }

    #[test]
    fn append_rejects_cycles() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest)
        );
    }

    #[test]
    fn descendants_in_document_order() {
        let mut tree = DomTree::new();
        let root = tree.create_element("div");
        let a = tree.create_element("span");
        let a1 = tree.create_text("x");
        let b = tree.create_element("span");
        tree.append_child(root, a).unwrap();
        tree.append_child(a, a1).unwrap();
        tree.append_child(root, b).unwrap();

        let order: Vec<_> = tree.descendants(root).collect();
        assert_eq!(order, vec![a, a1, b]);
    }

    #[test]
    fn text_content_concatenates_subtree() {
        let mut tree = DomTree::new();
        let h = tree.create_element("h2");
        let t1 = tree.create_text("Hello ");
        let em = tree.create_element("em");
        let t2 = tree.create_text("world");
        tree.append_child(h, t1).unwrap();
        tree.append_child(h, em).unwrap();
        tree.append_child(em, t2).unwrap();

        assert_eq!(tree.text_content(h), "Hello world");
    }

    #[test]
    fn attribute_writes_are_infallible() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");

        // silently ignored on non-elements and unknown ids
        tree.set_attribute(text, "hidden", "");
        tree.set_attribute(NodeId::NONE, "hidden", "");
        assert!(!tree.has_attribute(text, "hidden"));
    }
}
