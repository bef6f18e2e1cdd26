//! Exclusive Disclosure
//!
//! A group of collapsible panels where at most one member is expanded at a
//! time. The expanded index is the source of truth; `aria-expanded`, the
//! expanded class, and the region's `hidden` marker are written together as
//! a projection of it, so a control can never claim `aria-expanded="true"`
//! over hidden content.

use conifer_a11y::aria::attr;
use conifer_dom::{Document, NodeId, SimpleSelector};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{WidgetError, WidgetResult};

/// Class names a disclosure group is bound through
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisclosureOptions {
    pub item_class: String,
    pub control_class: String,
    pub region_class: String,
    pub expanded_class: String,
}

impl Default for DisclosureOptions {
    fn default() -> Self {
        Self {
            item_class: "accordion".to_string(),
            control_class: "accordion__control".to_string(),
            region_class: "accordion__content".to_string(),
            expanded_class: "accordion--expanded".to_string(),
        }
    }
}

/// One collapsible member: its container, toggle control, and content region
#[derive(Debug, Clone, Copy)]
pub struct DisclosureItem {
    pub root: NodeId,
    pub control: NodeId,
    pub region: NodeId,
}

/// Ordered group of disclosure items with the ≤1-expanded invariant
#[derive(Debug)]
pub struct DisclosureGroup {
    container: NodeId,
    items: Vec<DisclosureItem>,
    expanded: Option<usize>,
    opts: DisclosureOptions,
}

impl DisclosureGroup {
    /// Bind to pre-existing markup under `container`.
    ///
    /// Every item must carry a recognized control/region pairing; a group
    /// with no items, or an item missing either half, is a structure error.
    /// All members start collapsed.
    pub fn bind(
        doc: &mut Document,
        container: NodeId,
        opts: DisclosureOptions,
    ) -> WidgetResult<Self> {
        let item_sel = SimpleSelector::Class(opts.item_class.clone());
        let control_sel = SimpleSelector::Class(opts.control_class.clone());
        let region_sel = SimpleSelector::Class(opts.region_class.clone());

        let roots = doc.tree().query_selector_all(container, &item_sel);
        if roots.is_empty() {
            warn!(class = %opts.item_class, "disclosure group has no items");
            return Err(WidgetError::Structure(format!(
                "disclosure group has no .{} items",
                opts.item_class
            )));
        }

        let mut items = Vec::with_capacity(roots.len());
        for root in roots {
            let control = doc.tree().query_selector(root, &control_sel).ok_or_else(|| {
                warn!(class = %opts.control_class, "disclosure item is missing its control");
                WidgetError::Structure(format!("item is missing a .{} control", opts.control_class))
            })?;
            let region = doc.tree().query_selector(root, &region_sel).ok_or_else(|| {
                warn!(class = %opts.region_class, "disclosure item is missing its region");
                WidgetError::Structure(format!("item is missing a .{} region", opts.region_class))
            })?;
            items.push(DisclosureItem {
                root,
                control,
                region,
            });
        }

        let group = Self {
            container,
            items,
            expanded: None,
            opts,
        };
        for idx in 0..group.items.len() {
            group.apply(doc, idx, false);
        }
        Ok(group)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The members, in document order
    pub fn items(&self) -> &[DisclosureItem] {
        &self.items
    }

    /// Index of the expanded member, if any
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Whether `target` sits inside the group's container
    pub fn contains(&self, doc: &Document, target: NodeId) -> bool {
        doc.tree().contains(self.container, target)
    }

    /// Index of the member containing `target`, if any
    pub fn item_containing(&self, doc: &Document, target: NodeId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| doc.tree().contains(item.root, target))
    }

    /// Toggle one member: collapsing the expanded one empties the group;
    /// expanding a collapsed one collapses every other member first.
    pub fn toggle(&mut self, doc: &mut Document, index: usize) -> WidgetResult<()> {
        if index >= self.items.len() {
            return Err(WidgetError::Precondition("toggle"));
        }
        if self.expanded == Some(index) {
            self.apply(doc, index, false);
            self.expanded = None;
        } else {
            if let Some(prev) = self.expanded.take() {
                self.apply(doc, prev, false);
            }
            self.apply(doc, index, true);
            self.expanded = Some(index);
        }
        debug!(index, expanded = ?self.expanded, "disclosure toggled");
        Ok(())
    }

    /// Collapse the whole group
    pub fn collapse_all(&mut self, doc: &mut Document) {
        if let Some(idx) = self.expanded.take() {
            self.apply(doc, idx, false);
        }
    }

    // attribute, class, and hidden marker always change in one operation
    fn apply(&self, doc: &mut Document, index: usize, expanded: bool) {
        let item = self.items[index];
        let tree = doc.tree_mut();
        tree.set_attribute(
            item.control,
            attr::EXPANDED,
            if expanded { "true" } else { "false" },
        );
        if expanded {
            tree.add_class(item.root, &self.opts.expanded_class);
            tree.remove_attribute(item.region, attr::HIDDEN);
        } else {
            tree.remove_class(item.root, &self.opts.expanded_class);
            tree.set_attribute(item.region, attr::HIDDEN, "");
        }
    }
}
