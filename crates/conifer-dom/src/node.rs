//! DOM Node
//!
//! Nodes carry sibling/child links as `NodeId`s into the arena plus
//! node-specific data. Element data caches the class list separately from
//! the attribute list because widgets toggle classes far more often than
//! they read them back.

use crate::NodeId;

/// DOM node: tree links plus data
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(content.to_string()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Tag name (lowercase)
    pub tag: String,
    /// Attributes in insertion order
    attrs: Vec<Attribute>,
    /// Cached class list
    classes: Vec<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|a| a.name == name)?;
        Some(self.attrs.remove(idx).value)
    }

    /// Check if an attribute is present (value may be empty)
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Iterate over attributes
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    /// Add a class (no-op if already present)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class (no-op if absent)
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Current class list
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_attribute() {
        let mut el = ElementData::new("button");
        el.set_attribute("aria-pressed", "false");
        el.set_attribute("aria-pressed", "true");

        assert_eq!(el.attribute("aria-pressed"), Some("true"));
        assert_eq!(el.attributes().count(), 1);
    }

    #[test]
    fn presence_only_attribute() {
        let mut el = ElementData::new("div");
        el.set_attribute("hidden", "");

        assert!(el.has_attribute("hidden"));
        assert_eq!(el.attribute("hidden"), Some(""));

        el.remove_attribute("hidden");
        assert!(!el.has_attribute("hidden"));
    }

    #[test]
    fn class_list() {
        let mut el = ElementData::new("li");
        el.add_class("accordion");
        el.add_class("accordion");
        el.add_class("accordion--expanded");

        assert_eq!(el.classes().len(), 2);
        assert!(el.has_class("accordion--expanded"));

        el.remove_class("accordion--expanded");
        assert!(!el.has_class("accordion--expanded"));
    }

    #[test]
    fn tag_is_lowercased() {
        let el = ElementData::new("DIV");
        assert_eq!(el.tag, "div");
    }
}
