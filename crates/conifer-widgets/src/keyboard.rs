//! Keyboard Routing
//!
//! One router per page replaces ad-hoc `onkeydown` overwrites: Escape goes
//! to whichever widget currently owns the active overlay or disclosure,
//! chosen by an explicit ownership claim rather than registration order.

use tracing::debug;

/// Keys the widgets react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Other,
}

/// Handle identifying a registered widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u32);

impl WidgetId {
    /// Registration index, unique within the issuing router
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Central keyboard router
#[derive(Debug, Default)]
pub struct KeyRouter {
    next_id: u32,
    owner: Option<WidgetId>,
}

impl KeyRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget, yielding its handle
    pub fn register(&mut self) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Claim Escape ownership (called when a widget opens/expands)
    pub fn claim(&mut self, id: WidgetId) {
        debug!(widget = id.0, "escape ownership claimed");
        self.owner = Some(id);
    }

    /// Release ownership, only if `id` still holds it
    pub fn release(&mut self, id: WidgetId) {
        if self.owner == Some(id) {
            self.owner = None;
        }
    }

    /// Current Escape owner
    pub fn owner(&self) -> Option<WidgetId> {
        self.owner
    }

    /// Route a key press to the widget that should handle it.
    ///
    /// Escape with no owner is a no-op, so repeated Escape while everything
    /// is already closed routes nowhere.
    pub fn route(&self, key: Key) -> Option<WidgetId> {
        match key {
            Key::Escape => self.owner,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_routes_to_current_owner() {
        let mut router = KeyRouter::new();
        let dialog = router.register();
        let menu = router.register();

        assert_eq!(router.route(Key::Escape), None);

        router.claim(menu);
        router.claim(dialog);
        assert_eq!(router.route(Key::Escape), Some(dialog));
        assert_eq!(router.route(Key::Enter), None);
    }

    #[test]
    fn release_only_by_owner() {
        let mut router = KeyRouter::new();
        let a = router.register();
        let b = router.register();

        router.claim(a);
        router.release(b); // not the owner: ignored
        assert_eq!(router.owner(), Some(a));

        router.release(a);
        assert_eq!(router.owner(), None);
        router.release(a); // second release: no-op
    }
}
