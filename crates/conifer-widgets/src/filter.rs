//! Hierarchical Filter Lists
//!
//! A parent tri-state checkbox over a set of dependent child checkboxes.
//! Child booleans are the source of truth; the parent's state is derived
//! bottom-up from their checked count on every change and projected into
//! `aria-checked`. Mixed is derived-only: a user action on the parent
//! always cascades a definite boolean down.

use conifer_a11y::aria::{attr, is_true, AriaRole, TriState};
use conifer_dom::{Document, NodeId, SimpleSelector};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{WidgetError, WidgetResult};

/// Presence marker standing in for the native `checked` property
pub const CHECKED_MARKER: &str = "checked";

/// Class names a filter group is bound through
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub parent_list_class: String,
    pub descendant_list_class: String,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            parent_list_class: "input-group__parent".to_string(),
            descendant_list_class: "input-group__descendant".to_string(),
        }
    }
}

/// One parent control plus its dependent children
#[derive(Debug)]
pub struct FilterGroup {
    parent: NodeId,
    children: Vec<NodeId>,
    checked: Vec<bool>,
    state: TriState,
}

impl FilterGroup {
    /// Bind to pre-existing markup under `container`.
    ///
    /// The parent control (`role="checkbox"` inside the parent list) is
    /// required; a missing descendant list means zero children, which is
    /// legal and leaves the parent Unchecked by convention.
    pub fn bind(doc: &mut Document, container: NodeId, opts: FilterOptions) -> WidgetResult<Self> {
        let parent_list = doc
            .tree()
            .query_selector(container, &SimpleSelector::Class(opts.parent_list_class.clone()))
            .ok_or_else(|| {
                warn!(class = %opts.parent_list_class, "filter group is missing its parent list");
                WidgetError::Structure(format!(
                    "filter group is missing a .{} list",
                    opts.parent_list_class
                ))
            })?;
        let parent = doc
            .tree()
            .descendants(parent_list)
            .find(|&d| {
                doc.tree()
                    .attribute(d, attr::ROLE)
                    .and_then(AriaRole::parse)
                    == Some(AriaRole::Checkbox)
            })
            .ok_or_else(|| {
                warn!("filter group is missing a role=\"checkbox\" parent control");
                WidgetError::Structure(
                    "filter group is missing a role=\"checkbox\" parent control".to_string(),
                )
            })?;

        let children: Vec<NodeId> = match doc.tree().query_selector(
            container,
            &SimpleSelector::Class(opts.descendant_list_class.clone()),
        ) {
            Some(list) => doc
                .tree()
                .descendants(list)
                .filter(|&d| doc.tree().attribute(d, "type") == Some("checkbox"))
                .collect(),
            None => Vec::new(),
        };

        let checked = children
            .iter()
            .map(|&c| doc.tree().has_attribute(c, CHECKED_MARKER))
            .collect();
        let mut group = Self {
            parent,
            children,
            checked,
            state: TriState::Unchecked,
        };
        group.recompute(doc);
        Ok(group)
    }

    /// Current parent tri-state
    pub fn state(&self) -> TriState {
        self.state
    }

    /// Parent control node
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Number of dependent children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A child's checked state
    pub fn child_checked(&self, index: usize) -> Option<bool> {
        self.checked.get(index).copied()
    }

    /// A child changed: write it, then recompute the parent bottom-up
    pub fn set_child(&mut self, doc: &mut Document, index: usize, checked: bool) -> WidgetResult<()> {
        if index >= self.children.len() {
            return Err(WidgetError::Precondition("set_child"));
        }
        self.checked[index] = checked;
        project_checked(doc, self.children[index], checked);
        self.recompute(doc);
        Ok(())
    }

    /// The parent was activated: cascade the definite boolean to every child
    pub fn set_parent(&mut self, doc: &mut Document, checked: bool) {
        for index in 0..self.children.len() {
            self.checked[index] = checked;
            project_checked(doc, self.children[index], checked);
        }
        self.recompute(doc);
    }

    // parent state is a pure function of the children's checked count,
    // recomputed on every change and never cached stale
    fn recompute(&mut self, doc: &mut Document) {
        let count = self.checked.iter().filter(|&&c| c).count();
        self.state = TriState::from_counts(count, self.checked.len());
        debug!(checked = count, total = self.checked.len(), state = ?self.state, "filter parent recomputed");

        doc.tree_mut()
            .set_attribute(self.parent, attr::CHECKED, self.state.as_str());
        project_checked(doc, self.parent, self.state == TriState::Checked);
    }
}

fn project_checked(doc: &mut Document, node: NodeId, checked: bool) {
    if checked {
        doc.tree_mut().set_attribute(node, CHECKED_MARKER, "");
    } else {
        doc.tree_mut().remove_attribute(node, CHECKED_MARKER);
    }
}

/// Flip the filter section's own show/hide control and return the new state
pub fn toggle_section(doc: &mut Document, control: NodeId) -> bool {
    let next = !is_true(doc.tree().attribute(control, attr::EXPANDED));
    doc.tree_mut()
        .set_attribute(control, attr::EXPANDED, if next { "true" } else { "false" });
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_doc(children: usize) -> (Document, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.tree_mut().create_element("fieldset");
        doc.tree_mut().add_class(container, "input-group");
        doc.tree_mut().append_child(body, container).unwrap();

        let parent_list = doc.tree_mut().create_element("ul");
        doc.tree_mut().add_class(parent_list, "input-group__parent");
        let li = doc.tree_mut().create_element("li");
        let parent = doc.tree_mut().create_element("span");
        doc.tree_mut()
            .set_attribute(parent, attr::ROLE, AriaRole::Checkbox.as_str());
        doc.tree_mut().append_child(container, parent_list).unwrap();
        doc.tree_mut().append_child(parent_list, li).unwrap();
        doc.tree_mut().append_child(li, parent).unwrap();

        if children > 0 {
            let list = doc.tree_mut().create_element("ul");
            doc.tree_mut().add_class(list, "input-group__descendant");
            doc.tree_mut().append_child(container, list).unwrap();
            for _ in 0..children {
                let li = doc.tree_mut().create_element("li");
                let input = doc.tree_mut().create_element("input");
                doc.tree_mut().set_attribute(input, "type", "checkbox");
                doc.tree_mut().append_child(list, li).unwrap();
                doc.tree_mut().append_child(li, input).unwrap();
            }
        }
        (doc, container)
    }

    #[test]
    fn two_of_three_children_is_mixed() {
        let (mut doc, container) = filter_doc(3);
        let mut group = FilterGroup::bind(&mut doc, container, FilterOptions::default()).unwrap();

        group.set_child(&mut doc, 0, true).unwrap();
        group.set_child(&mut doc, 1, true).unwrap();

        assert_eq!(group.state(), TriState::Mixed);
        assert_eq!(doc.tree().attribute(group.parent(), attr::CHECKED), Some("mixed"));
        assert!(!doc.tree().has_attribute(group.parent(), CHECKED_MARKER));
    }

    #[test]
    fn all_and_none_checked() {
        let (mut doc, container) = filter_doc(3);
        let mut group = FilterGroup::bind(&mut doc, container, FilterOptions::default()).unwrap();

        assert_eq!(group.state(), TriState::Unchecked);

        for idx in 0..3 {
            group.set_child(&mut doc, idx, true).unwrap();
        }
        assert_eq!(group.state(), TriState::Checked);
        assert!(doc.tree().has_attribute(group.parent(), CHECKED_MARKER));

        for idx in 0..3 {
            group.set_child(&mut doc, idx, false).unwrap();
        }
        assert_eq!(group.state(), TriState::Unchecked);
        assert_eq!(doc.tree().attribute(group.parent(), attr::CHECKED), Some("false"));
    }

    #[test]
    fn parent_cascades_definite_boolean() {
        let (mut doc, container) = filter_doc(3);
        let mut group = FilterGroup::bind(&mut doc, container, FilterOptions::default()).unwrap();

        group.set_parent(&mut doc, true);
        assert_eq!(group.state(), TriState::Checked);
        for idx in 0..3 {
            assert_eq!(group.child_checked(idx), Some(true));
        }

        group.set_parent(&mut doc, false);
        assert_eq!(group.state(), TriState::Unchecked);
        for idx in 0..3 {
            assert_eq!(group.child_checked(idx), Some(false));
        }
    }

    #[test]
    fn zero_children_is_unchecked_by_convention() {
        let (mut doc, container) = filter_doc(0);
        let mut group = FilterGroup::bind(&mut doc, container, FilterOptions::default()).unwrap();

        assert_eq!(group.child_count(), 0);
        assert_eq!(group.state(), TriState::Unchecked);

        // even an explicit parent activation cannot invent children
        group.set_parent(&mut doc, true);
        assert_eq!(group.state(), TriState::Unchecked);
    }

    #[test]
    fn bind_reads_initial_checked_markers() {
        let (mut doc, container) = filter_doc(2);
        // pre-check one child in the markup
        let list = doc
            .tree()
            .query_selector(container, &SimpleSelector::Class("input-group__descendant".into()))
            .unwrap();
        let inputs: Vec<NodeId> = doc
            .tree()
            .descendants(list)
            .filter(|&d| doc.tree().attribute(d, "type") == Some("checkbox"))
            .collect();
        doc.tree_mut().set_attribute(inputs[0], CHECKED_MARKER, "");

        let group = FilterGroup::bind(&mut doc, container, FilterOptions::default()).unwrap();
        assert_eq!(group.state(), TriState::Mixed);
    }

    #[test]
    fn missing_parent_control_is_a_structure_error() {
        let mut doc = Document::new();
        let body = doc.body();
        let container = doc.tree_mut().create_element("fieldset");
        doc.tree_mut().append_child(body, container).unwrap();

        assert!(matches!(
            FilterGroup::bind(&mut doc, container, FilterOptions::default()),
            Err(WidgetError::Structure(_))
        ));
    }

    #[test]
    fn section_toggle_flips_expanded() {
        let mut doc = Document::new();
        let body = doc.body();
        let control = doc.tree_mut().create_element("button");
        doc.tree_mut().append_child(body, control).unwrap();

        assert!(toggle_section(&mut doc, control));
        assert_eq!(doc.tree().attribute(control, attr::EXPANDED), Some("true"));
        assert!(!toggle_section(&mut doc, control));
    }
}
