//! Modal Dialog
//!
//! A dismissible overlay with open/close transitions, trigger-return focus,
//! and Escape dismissal. One concurrent session per dialog: opening while
//! open is rejected, never silently corrupted. Backdrop clicks do not
//! dismiss; accidental data loss on confirm/cancel dialogs is worse than an
//! extra keypress.

use conifer_a11y::aria::{attr, AriaRole, IdAllocator};
use conifer_a11y::{FocusIsolation, FocusTracker};
use conifer_dom::{Document, DomResult, DomTree, NodeId};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::error::{WidgetError, WidgetResult};
use crate::keyboard::{Key, KeyRouter, WidgetId};

/// Display strings for a generated confirm dialog
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogStrings {
    pub question: String,
    pub confirm_label: String,
    pub dismiss_label: String,
}

impl Default for DialogStrings {
    fn default() -> Self {
        Self {
            question: "Are you sure?".to_string(),
            confirm_label: "Confirm".to_string(),
            dismiss_label: "Cancel".to_string(),
        }
    }
}

/// What the overlay is built from
pub enum DialogContent {
    /// A generated question/confirm/dismiss prompt
    Prompt(DialogStrings),
    /// An existing source region whose first two element children must be
    /// a title element followed by a content element
    Region(NodeId),
}

/// Callback invoked after a confirmed dialog has fully closed
pub type ConfirmCallback = Box<dyn FnMut(&Document)>;

/// One open-to-close cycle of the overlay
pub struct OverlaySession {
    root: NodeId,
    backdrop: NodeId,
    trigger: NodeId,
    label_id: String,
    dismiss: NodeId,
    confirm: Option<NodeId>,
    /// Region content moved into the overlay, returned home on close
    borrowed: Option<(NodeId, NodeId)>,
    isolation: FocusIsolation,
}

impl OverlaySession {
    /// Overlay root element (`role="dialog"`)
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The default-focused dismiss control
    pub fn dismiss(&self) -> NodeId {
        self.dismiss
    }

    /// Confirm control, when the content carries one
    pub fn confirm(&self) -> Option<NodeId> {
        self.confirm
    }

    /// Generated id the dialog is labelled by
    pub fn label_id(&self) -> &str {
        &self.label_id
    }
}

/// Dismissible modal dialog bound to one trigger control
pub struct Dialog {
    trigger: NodeId,
    callback: Option<ConfirmCallback>,
    ids: IdAllocator,
    widget_id: WidgetId,
    session: Option<OverlaySession>,
}

struct BuiltOverlay {
    root: NodeId,
    dismiss: NodeId,
    confirm: Option<NodeId>,
    borrowed: Option<(NodeId, NodeId)>,
}

impl Dialog {
    /// Bind a dialog to its trigger control.
    ///
    /// The callback is invoked on confirm, after the overlay is gone;
    /// omitting it degrades confirm to close-plus-error-report.
    pub fn new(trigger: NodeId, callback: Option<ConfirmCallback>, router: &mut KeyRouter) -> Self {
        let widget_id = router.register();
        // prefix carries the router-issued index so two dialogs on the same
        // page can never generate the same label id
        Self {
            trigger,
            callback,
            ids: IdAllocator::new(&format!("q{}", widget_id.index())),
            widget_id,
            session: None,
        }
    }

    /// Whether a session is active
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    /// Router handle for this dialog
    pub fn widget_id(&self) -> WidgetId {
        self.widget_id
    }

    /// Open the overlay: insert it, isolate the rest of the document, move
    /// focus to the dismiss control, and claim Escape ownership.
    ///
    /// Rejected with a precondition error while a session is active.
    pub fn open(
        &mut self,
        doc: &mut Document,
        focus: &mut FocusTracker,
        router: &mut KeyRouter,
        content: DialogContent,
    ) -> WidgetResult<()> {
        if self.session.is_some() {
            return Err(WidgetError::Precondition("open"));
        }

        let label_id = self.ids.next_id();
        let built = match content {
            DialogContent::Prompt(strings) => build_prompt(doc.tree_mut(), &label_id, &strings)?,
            DialogContent::Region(source) => build_from_region(doc, &label_id, source)?,
        };

        let body = doc.body();
        let backdrop = {
            let tree = doc.tree_mut();
            let backdrop = tree.create_element("div");
            tree.add_class(backdrop, "overlay");
            tree.set_attribute(backdrop, attr::INERT, attr::INERT);
            backdrop
        };
        doc.tree_mut().append_child(body, backdrop)?;
        doc.tree_mut().append_child(body, built.root)?;

        let mut isolation = FocusIsolation::new();
        isolation.isolate(doc, built.root);

        // default focus lands on dismiss, never confirm
        focus.focus(built.dismiss);
        router.claim(self.widget_id);

        debug!(label = %label_id, "dialog opened");
        self.session = Some(OverlaySession {
            root: built.root,
            backdrop,
            trigger: self.trigger,
            label_id,
            dismiss: built.dismiss,
            confirm: built.confirm,
            borrowed: built.borrowed,
            isolation,
        });
        Ok(())
    }

    /// Close the overlay: release exactly this session's isolated set,
    /// remove overlay and backdrop, and return focus to the trigger.
    ///
    /// No-op when already closed.
    pub fn close(&mut self, doc: &mut Document, focus: &mut FocusTracker, router: &mut KeyRouter) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        session.isolation.release(doc);
        if let Some((source, content)) = session.borrowed {
            if doc.tree_mut().append_child(source, content).is_err() {
                warn!("could not return dialog content to its source region");
            }
        }
        doc.tree_mut().detach(session.root);
        doc.tree_mut().detach(session.backdrop);
        focus.focus(session.trigger);
        router.release(self.widget_id);
        debug!(label = %session.label_id, "dialog closed");
    }

    /// Confirm: close first, then notify, so the callback observes a
    /// restored, non-isolated document. Rejected when not open; a missing
    /// callback is reported and execution continues.
    pub fn confirm(
        &mut self,
        doc: &mut Document,
        focus: &mut FocusTracker,
        router: &mut KeyRouter,
    ) -> WidgetResult<()> {
        if self.session.is_none() {
            return Err(WidgetError::Precondition("confirm"));
        }
        self.close(doc, focus, router);
        match self.callback.as_mut() {
            Some(callback) => callback(doc),
            None => error!("no confirm callback configured; dialog closed without notification"),
        }
        Ok(())
    }

    /// Handle a routed key press; Escape owned by this dialog closes it
    pub fn on_key(
        &mut self,
        doc: &mut Document,
        focus: &mut FocusTracker,
        router: &mut KeyRouter,
        key: Key,
    ) {
        if router.route(key) == Some(self.widget_id) {
            self.close(doc, focus, router);
        }
    }
}

fn build_button(tree: &mut DomTree, class: &str, label: &str) -> DomResult<NodeId> {
    let btn = tree.create_element("button");
    tree.add_class(btn, class);
    let text = tree.create_text(label);
    tree.append_child(btn, text)?;
    Ok(btn)
}

fn build_prompt(
    tree: &mut DomTree,
    label_id: &str,
    strings: &DialogStrings,
) -> WidgetResult<BuiltOverlay> {
    let root = tree.create_element("div");
    tree.set_attribute(root, attr::ROLE, AriaRole::Dialog.as_str());
    tree.set_attribute(root, attr::LABELLED_BY, label_id);

    let question = tree.create_element("p");
    tree.set_attribute(question, "id", label_id);
    let text = tree.create_text(&strings.question);
    tree.append_child(question, text)?;
    tree.append_child(root, question)?;

    let buttons = tree.create_element("div");
    tree.add_class(buttons, "buttons");
    let dismiss = build_button(tree, "dismiss", &strings.dismiss_label)?;
    let confirm = build_button(tree, "confirm", &strings.confirm_label)?;
    tree.append_child(buttons, dismiss)?;
    tree.append_child(buttons, confirm)?;
    tree.append_child(root, buttons)?;

    Ok(BuiltOverlay {
        root,
        dismiss,
        confirm: Some(confirm),
        borrowed: None,
    })
}

fn build_from_region(
    doc: &mut Document,
    label_id: &str,
    source: NodeId,
) -> WidgetResult<BuiltOverlay> {
    // validate the source shape before mutating anything
    let kids: Vec<NodeId> = doc.tree().child_elements(source).collect();
    let title = *kids.first().ok_or_else(|| {
        warn!("dialog source region missing a title element");
        WidgetError::Structure("dialog source region missing a title element".to_string())
    })?;
    let content = *kids.get(1).ok_or_else(|| {
        warn!("dialog source region missing a content element");
        WidgetError::Structure("dialog source region missing a content element".to_string())
    })?;
    let heading_text = doc.tree().text_content(title);

    let tree = doc.tree_mut();
    let root = tree.create_element("article");
    tree.set_attribute(root, attr::ROLE, AriaRole::Dialog.as_str());
    tree.set_attribute(root, attr::LABELLED_BY, label_id);

    let close = build_button(tree, "dialog__close", "Close")?;
    tree.append_child(root, close)?;

    let heading = tree.create_element("h1");
    tree.add_class(heading, "dialog__header");
    tree.set_attribute(heading, "id", label_id);
    let text = tree.create_text(&heading_text);
    tree.append_child(heading, text)?;
    tree.append_child(root, heading)?;

    let wrapper = tree.create_element("div");
    tree.add_class(wrapper, "dialog__content");
    // the region's content element moves into the overlay for the session
    tree.append_child(wrapper, content)?;
    tree.append_child(root, wrapper)?;

    Ok(BuiltOverlay {
        root,
        dismiss: close,
        confirm: None,
        borrowed: Some((source, content)),
    })
}
