//! Submit button busy state, after Bootstrap's `button('loading')` and
//! `button('reset')`.

use crate::dom::{Document, NodeId};
use crate::page::Page;
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, EnumString};

const STATE_ATTR: &str = "data-state";
const RESET_TEXT_ATTR: &str = "data-reset-text";
const LOADING_TEXT_ATTR: &str = "data-loading-text";
const DISABLED: &str = "disabled";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonState {
    #[default]
    Idle,
    Loading,
}

pub fn state(doc: &Document, button: NodeId) -> ButtonState {
    doc.attr(button, STATE_ATTR)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// The visible caption: `value` for `<input>` buttons, the text otherwise.
pub fn label(doc: &Document, button: NodeId) -> &str {
    if doc.tag(button) == "input" {
        doc.attr(button, "value").unwrap_or_default()
    } else {
        doc.text(button)
    }
}

fn set_label(doc: &mut Document, button: NodeId, label: &str) {
    if doc.tag(button) == "input" {
        doc.set_attr(button, "value", label);
    } else {
        doc.set_text(button, label);
    }
}

pub fn set_loading(doc: &mut Document, button: NodeId) {
    if state(doc, button) == ButtonState::Loading {
        return;
    }
    let label = label(doc, button).to_string();
    doc.set_attr(button, RESET_TEXT_ATTR, &label);
    if let Some(loading) = doc.attr(button, LOADING_TEXT_ATTR).map(str::to_string) {
        set_label(doc, button, &loading);
    }
    doc.add_class(button, DISABLED);
    doc.set_attr(button, DISABLED, DISABLED);
    doc.set_attr(button, STATE_ATTR, ButtonState::Loading.as_ref());
}

pub fn reset(doc: &mut Document, button: NodeId) {
    if state(doc, button) == ButtonState::Idle {
        return;
    }
    if let Some(label) = doc.attr(button, RESET_TEXT_ATTR).map(str::to_string) {
        set_label(doc, button, &label);
        doc.remove_attr(button, RESET_TEXT_ATTR);
    }
    doc.remove_class(button, DISABLED);
    doc.remove_attr(button, DISABLED);
    doc.remove_attr(button, STATE_ATTR);
}

/// Keeps buttons in the loading state for as long as it lives.
///
/// Dropping the guard resets them, including when the owning future is
/// cancelled mid-request.
pub struct LoadingGuard {
    page: Arc<Page>,
    buttons: Vec<NodeId>,
}

impl LoadingGuard {
    pub fn engage(page: Arc<Page>, buttons: Vec<NodeId>) -> Self {
        page.update(|doc| {
            for button in &buttons {
                set_loading(doc, *button);
            }
        });
        Self { page, buttons }
    }

    pub fn buttons(&self) -> &[NodeId] {
        &self.buttons
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut doc = self.page.lock();
        for button in &self.buttons {
            reset(&mut doc, *button);
        }
        tracing::trace!("reset {} submit button(s)", self.buttons.len());
    }
}
