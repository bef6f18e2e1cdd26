//! ARIA Support
//!
//! Attribute names, roles, boolean parsing, and the tri-state checkbox
//! value. Widgets hold typed state and project it through these helpers;
//! attributes are never read back as the source of truth.

/// Attribute names produced and consumed by the widgets
pub mod attr {
    pub const ROLE: &str = "role";
    pub const EXPANDED: &str = "aria-expanded";
    pub const PRESSED: &str = "aria-pressed";
    pub const CHECKED: &str = "aria-checked";
    pub const LABELLED_BY: &str = "aria-labelledby";
    /// Presence-only marker: excluded from focus and AT traversal
    pub const INERT: &str = "inert";
    /// Presence-only marker: content region not rendered
    pub const HIDDEN: &str = "hidden";
}

/// Interpret a boolean ARIA attribute value.
///
/// An absent attribute and `"false"` are treated identically as false.
pub fn is_true(value: Option<&str>) -> bool {
    matches!(value, Some("true"))
}

/// ARIA role (the subset the widgets produce or require)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    Button,
    Checkbox,
    Dialog,
    Menu,
    MenuItem,
    Navigation,
}

impl AriaRole {
    /// Attribute value for this role
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Checkbox => "checkbox",
            Self::Dialog => "dialog",
            Self::Menu => "menu",
            Self::MenuItem => "menuitem",
            Self::Navigation => "navigation",
        }
    }

    /// Parse from an attribute value
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "dialog" => Self::Dialog,
            "menu" => Self::Menu,
            "menuitem" => Self::MenuItem,
            "navigation" => Self::Navigation,
            _ => return None,
        })
    }
}

/// Tri-state checkbox value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Checked,
    Unchecked,
    Mixed,
}

impl TriState {
    /// `aria-checked` value for this state
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "true",
            Self::Unchecked => "false",
            Self::Mixed => "mixed",
        }
    }

    /// Parse an `aria-checked` value
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "true" => Self::Checked,
            "false" => Self::Unchecked,
            "mixed" => Self::Mixed,
            _ => return None,
        })
    }

    /// Derive a parent's state from its children's checked count.
    ///
    /// Zero children is Unchecked by convention, never a count computation.
    pub fn from_counts(checked: usize, total: usize) -> Self {
        if total == 0 || checked == 0 {
            Self::Unchecked
        } else if checked == total {
            Self::Checked
        } else {
            Self::Mixed
        }
    }
}

/// Allocator for generated label ids of the form `<prefix>-<counter>`.
///
/// A counter rather than wall-clock time: two allocations in the same
/// instant must still produce distinct ids.
#[derive(Debug)]
pub struct IdAllocator {
    prefix: String,
    counter: u64,
}

impl IdAllocator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }

    /// Produce the next id; ids strictly increase and are never reused
    pub fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_false_are_not_pressed() {
        assert!(!is_true(None));
        assert!(!is_true(Some("false")));
        assert!(!is_true(Some("")));
        assert!(is_true(Some("true")));
    }

    #[test]
    fn tri_state_from_counts() {
        assert_eq!(TriState::from_counts(3, 3), TriState::Checked);
        assert_eq!(TriState::from_counts(2, 3), TriState::Mixed);
        assert_eq!(TriState::from_counts(0, 3), TriState::Unchecked);
        // zero children: unchecked by convention
        assert_eq!(TriState::from_counts(0, 0), TriState::Unchecked);
    }

    #[test]
    fn tri_state_round_trips_attribute_values() {
        for state in [TriState::Checked, TriState::Unchecked, TriState::Mixed] {
            assert_eq!(TriState::parse(state.as_str()), Some(state));
        }
        assert_eq!(TriState::parse("maybe"), None);
    }

    #[test]
    fn role_parse() {
        assert_eq!(AriaRole::parse("checkbox"), Some(AriaRole::Checkbox));
        assert_eq!(AriaRole::parse("DIALOG"), Some(AriaRole::Dialog));
        assert_eq!(AriaRole::parse("tooltip"), None);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut ids = IdAllocator::new("q");
        let a = ids.next_id();
        let b = ids.next_id();
        assert_eq!(a, "q-1");
        assert_eq!(b, "q-2");
        assert_ne!(a, b);
    }
}
