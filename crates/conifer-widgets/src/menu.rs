//! Navigation Menu
//!
//! The navigation variant of an exclusive disclosure: submenus share the
//! ≤1-expanded invariant and the whole group additionally collapses when
//! focus moves to a different top-level item, when a click lands outside
//! the menu container, and on Escape.

use conifer_a11y::aria::{attr, is_true};
use conifer_dom::{Document, NodeId};
use tracing::debug;

use crate::disclosure::{DisclosureGroup, DisclosureOptions};
use crate::error::WidgetResult;
use crate::keyboard::{Key, KeyRouter, WidgetId};

/// Menu with exclusive submenus and an optional menu-toggle control
#[derive(Debug)]
pub struct Menu {
    group: DisclosureGroup,
    toggle_control: Option<NodeId>,
    widget_id: WidgetId,
}

impl Menu {
    /// Bind to a menu container; `toggle_control` is the small-viewport
    /// show/hide button, when the markup has one.
    pub fn bind(
        doc: &mut Document,
        container: NodeId,
        toggle_control: Option<NodeId>,
        opts: DisclosureOptions,
        router: &mut KeyRouter,
    ) -> WidgetResult<Self> {
        let group = DisclosureGroup::bind(doc, container, opts)?;
        Ok(Self {
            group,
            toggle_control,
            widget_id: router.register(),
        })
    }

    /// The underlying disclosure group
    pub fn group(&self) -> &DisclosureGroup {
        &self.group
    }

    /// Router handle for this menu
    pub fn widget_id(&self) -> WidgetId {
        self.widget_id
    }

    /// Flip the whole-menu toggle (`aria-expanded` on the toggle control).
    /// `None` when the menu has no toggle control.
    pub fn toggle_menu(&self, doc: &mut Document) -> Option<bool> {
        let control = self.toggle_control?;
        let expanded = is_true(doc.tree().attribute(control, attr::EXPANDED));
        let next = !expanded;
        doc.tree_mut()
            .set_attribute(control, attr::EXPANDED, if next { "true" } else { "false" });
        Some(next)
    }

    /// Toggle one submenu, claiming or releasing Escape ownership to match
    pub fn toggle_submenu(
        &mut self,
        doc: &mut Document,
        index: usize,
        router: &mut KeyRouter,
    ) -> WidgetResult<()> {
        self.group.toggle(doc, index)?;
        if self.group.expanded().is_some() {
            router.claim(self.widget_id);
        } else {
            router.release(self.widget_id);
        }
        Ok(())
    }

    /// Focus moved: collapse when it left the expanded submenu's item
    pub fn on_focus_moved(&mut self, doc: &mut Document, target: NodeId, router: &mut KeyRouter) {
        let Some(open) = self.group.expanded() else {
            return;
        };
        if self.group.item_containing(doc, target) != Some(open) {
            debug!("focus left the open submenu; collapsing");
            self.collapse(doc, router);
        }
    }

    /// Click landed somewhere: collapse when it was outside the menu
    pub fn on_document_click(
        &mut self,
        doc: &mut Document,
        target: NodeId,
        router: &mut KeyRouter,
    ) {
        if !self.group.contains(doc, target) {
            self.collapse(doc, router);
        }
    }

    /// Handle a routed key press; Escape owned by this menu collapses it
    pub fn on_key(&mut self, doc: &mut Document, router: &mut KeyRouter, key: Key) {
        if router.route(key) == Some(self.widget_id) {
            self.collapse(doc, router);
        }
    }

    fn collapse(&mut self, doc: &mut Document, router: &mut KeyRouter) {
        self.group.collapse_all(doc);
        router.release(self.widget_id);
    }
}
