use crate::dom::NodeId;

/// Events a section reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomEvent {
    Click { target: NodeId },
    Submit { form: NodeId },
}

/// Request for the row template of `base` to append a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddRow {
    pub base: String,
    /// The element whose id is `base`, when the page has one.
    pub container: Option<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No handler of the section matched the event.
    Unhandled,
    /// A placeholder was clicked but its marked ancestor has no usable id.
    RowAddSkipped,
    RowAdded {
        add_row: AddRow,
        placeholder: NodeId,
        /// The appended row, when a registered template applied.
        row: Option<NodeId>,
    },
    Invalid,
    /// The form already has a save in flight.
    Ignored,
    Saved {
        status: u16,
    },
    Failed {
        status: Option<u16>,
        message: String,
    },
}

/// Result of dispatching one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch {
    /// The browser default action (navigation, native submit) is suppressed.
    pub default_prevented: bool,
    pub outcome: Outcome,
}

impl Dispatch {
    pub fn unhandled() -> Self {
        Self {
            default_prevented: false,
            outcome: Outcome::Unhandled,
        }
    }

    pub fn prevented(outcome: Outcome) -> Self {
        Self {
            default_prevented: true,
            outcome,
        }
    }
}
