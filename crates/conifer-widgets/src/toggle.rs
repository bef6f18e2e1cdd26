//! Toggle Buttons
//!
//! A pressed/not-pressed boolean bound to one control and its
//! `aria-pressed` attribute. Stateless beyond the attribute itself: there
//! is no in-memory copy to fall out of sync.

use conifer_a11y::aria::{attr, is_true};
use conifer_dom::{Document, NodeId, SimpleSelector};
use serde::Deserialize;
use tracing::debug;

use crate::error::{WidgetError, WidgetResult};

/// Options for delegated toggle handling
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToggleOptions {
    /// Selector a clicked element is resolved against via `closest`
    pub selector: String,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            selector: ".button--toggle".to_string(),
        }
    }
}

/// Delegated toggle-button handler
#[derive(Debug)]
pub struct ToggleButton {
    selector: SimpleSelector,
}

impl ToggleButton {
    /// Build a handler; a malformed selector is a configuration error
    pub fn new(options: ToggleOptions) -> WidgetResult<Self> {
        let selector = SimpleSelector::parse(&options.selector)
            .ok_or(WidgetError::Configuration("selector"))?;
        Ok(Self { selector })
    }

    /// Resolve a click against the configured selector and press the
    /// matching control. `None` when the click landed outside any toggle.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> Option<bool> {
        let control = doc.tree().closest(target, &self.selector)?;
        Some(press(doc, control))
    }
}

/// Flip a control's pressed state and return the new state.
///
/// An absent `aria-pressed` is treated as "not pressed", so the first press
/// writes `"true"`.
pub fn press(doc: &mut Document, control: NodeId) -> bool {
    let pressed = is_true(doc.tree().attribute(control, attr::PRESSED));
    let next = !pressed;
    doc.tree_mut()
        .set_attribute(control, attr::PRESSED, if next { "true" } else { "false" });
    debug!(control = ?control, pressed = next, "toggle pressed");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_doc() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let btn = doc.tree_mut().create_element("button");
        doc.tree_mut().add_class(btn, "button--toggle");
        let label = doc.tree_mut().create_element("span");
        doc.tree_mut().append_child(body, btn).unwrap();
        doc.tree_mut().append_child(btn, label).unwrap();
        (doc, btn, label)
    }

    #[test]
    fn first_press_writes_true() {
        let (mut doc, btn, _) = toggle_doc();
        assert!(!doc.tree().has_attribute(btn, attr::PRESSED));

        assert!(press(&mut doc, btn));
        assert_eq!(doc.tree().attribute(btn, attr::PRESSED), Some("true"));

        assert!(!press(&mut doc, btn));
        assert_eq!(doc.tree().attribute(btn, attr::PRESSED), Some("false"));
    }

    #[test]
    fn delegated_click_resolves_through_descendants() {
        let (mut doc, btn, label) = toggle_doc();
        let toggle = ToggleButton::new(ToggleOptions::default()).unwrap();

        // click on the inner label resolves to the button
        assert_eq!(toggle.handle_click(&mut doc, label), Some(true));
        assert_eq!(doc.tree().attribute(btn, attr::PRESSED), Some("true"));

        // click elsewhere is ignored
        let body = doc.body();
        assert_eq!(toggle.handle_click(&mut doc, body), None);
    }

    #[test]
    fn bad_selector_is_a_configuration_error() {
        let err = ToggleButton::new(ToggleOptions {
            selector: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, WidgetError::Configuration(_)));
    }
}
