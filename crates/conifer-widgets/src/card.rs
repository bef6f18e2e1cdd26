//! Pointer-Tolerant Cards
//!
//! A whole card acts as a click target for its heading link, but a slow
//! press-release reads as text selection or a drag and must not navigate.
//! The threshold compares caller-supplied timestamps; no clock is read
//! here.

use conifer_dom::{Document, NodeId, SimpleSelector};
use serde::Deserialize;
use tracing::warn;

use crate::error::{WidgetError, WidgetResult};

/// Card options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    /// Press-to-release time below which the gesture counts as a click
    pub click_threshold_ms: u64,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            click_threshold_ms: 200,
        }
    }
}

/// A card bound to its heading link
#[derive(Debug)]
pub struct Card {
    root: NodeId,
    link: NodeId,
    opts: CardOptions,
    pressed_at: Option<u64>,
}

impl Card {
    /// Bind to a card root; the heading link is required
    pub fn bind(doc: &Document, root: NodeId, opts: CardOptions) -> WidgetResult<Self> {
        let heading = doc
            .tree()
            .query_selector(root, &SimpleSelector::Tag("h2".to_string()))
            .ok_or_else(|| {
                warn!("card is missing a heading");
                WidgetError::Structure("card is missing a heading".to_string())
            })?;
        let link = doc
            .tree()
            .query_selector(heading, &SimpleSelector::Tag("a".to_string()))
            .ok_or_else(|| {
                warn!("card heading is missing a link");
                WidgetError::Structure("card heading is missing a link".to_string())
            })?;
        Ok(Self {
            root,
            link,
            opts,
            pressed_at: None,
        })
    }

    /// Card root element
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The heading link the card activates
    pub fn link(&self) -> NodeId {
        self.link
    }

    /// Record the press timestamp (milliseconds, caller-supplied)
    pub fn pointer_down(&mut self, timestamp_ms: u64) {
        self.pressed_at = Some(timestamp_ms);
    }

    /// Resolve a release: `Some(link)` when the gesture was quick enough to
    /// count as a click, `None` for a drag or a release without a press.
    pub fn pointer_up(&mut self, timestamp_ms: u64) -> Option<NodeId> {
        let down = self.pressed_at.take()?;
        (timestamp_ms.saturating_sub(down) < self.opts.click_threshold_ms).then_some(self.link)
    }
}
