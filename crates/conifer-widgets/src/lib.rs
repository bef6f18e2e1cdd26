//! Conifer Widgets
//!
//! Accessible interaction-state widgets for progressively enhancing
//! server-rendered markup: modal dialogs, disclosure menus, accordions,
//! toggle buttons, hierarchical filter lists, and pointer-tolerant cards.
//!
//! Widgets bind to nodes in a [`conifer_dom::Document`], keep their state
//! in typed fields, and project it into ARIA attributes, class lists, and
//! presence markers. The host wires its event source to each widget's
//! explicit entry points; Escape is dispatched through one [`KeyRouter`]
//! per page.
//!
//! # Example
//! ```rust,ignore
//! use conifer_widgets::{Dialog, DialogContent, DialogStrings, KeyRouter};
//!
//! let mut router = KeyRouter::new();
//! let mut dialog = Dialog::new(trigger, Some(callback), &mut router);
//! dialog.open(&mut doc, &mut focus, &mut router,
//!     DialogContent::Prompt(DialogStrings::default()))?;
//! ```

pub mod card;
pub mod dialog;
pub mod disclosure;
pub mod error;
pub mod filter;
pub mod keyboard;
pub mod menu;
pub mod toggle;

pub use card::{Card, CardOptions};
pub use dialog::{ConfirmCallback, Dialog, DialogContent, DialogStrings, OverlaySession};
pub use disclosure::{DisclosureGroup, DisclosureItem, DisclosureOptions};
pub use error::{WidgetError, WidgetResult};
pub use filter::{toggle_section, FilterGroup, FilterOptions};
pub use keyboard::{Key, KeyRouter, WidgetId};
pub use menu::Menu;
pub use toggle::{press, ToggleButton, ToggleOptions};
