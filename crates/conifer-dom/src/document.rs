//! Document - high-level document API

use crate::{DomTree, Node, NodeId};

/// A document: tree plus cached structural handles.
///
/// `body`'s children are the "top-level siblings" that overlay isolation
/// operates over.
pub struct Document {
    tree: DomTree,
    html: NodeId,
    body: NodeId,
}

impl Document {
    /// Create a document with the basic html/body skeleton
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let body = tree.create_element("body");
        // skeleton wiring cannot fail on a fresh tree
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, body);
        Self { tree, html, body }
    }

    /// Get `<html>` element
    pub fn html(&self) -> NodeId {
        self.html
    }

    /// Get `<body>` element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Get element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&d| {
                self.tree
                    .get(d)
                    .and_then(Node::as_element)
                    .is_some_and(|e| e.attribute("id") == Some(id))
            })
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_structure() {
        let doc = Document::new();
        assert_eq!(doc.tree().parent(doc.body()), Some(doc.html()));
        assert_eq!(doc.tree().tag(doc.body()), Some("body"));
    }

    #[test]
    fn get_element_by_id() {
        let mut doc = Document::new();
        let body = doc.body();
        let btn = doc.tree_mut().create_element("button");
        doc.tree_mut().set_attribute(btn, "id", "invoke-dialog");
        doc.tree_mut().append_child(body, btn).unwrap();

        assert_eq!(doc.get_element_by_id("invoke-dialog"), Some(btn));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }
}
