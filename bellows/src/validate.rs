use crate::dom::form::{current_value, is_control, is_disabled};
use crate::dom::{Document, NodeId, Selector};

/// Decides whether a form may be submitted. Implementations may mark invalid
/// fields in the document.
pub trait FormValidator: Send + Sync {
    fn is_valid(&self, doc: &mut Document, form: NodeId) -> bool;
}

impl<F> FormValidator for F
where
    F: Fn(&mut Document, NodeId) -> bool + Send + Sync,
{
    fn is_valid(&self, doc: &mut Document, form: NodeId) -> bool {
        self(doc, form)
    }
}

/// Every enabled control marked `required` must hold a non-blank value.
#[derive(Clone, Debug)]
pub struct RequiredFields {
    pub group_class: String,
    pub error_class: String,
}

impl Default for RequiredFields {
    fn default() -> Self {
        Self {
            group_class: "control-group".to_string(),
            error_class: "error".to_string(),
        }
    }
}

impl RequiredFields {
    fn marker(&self, doc: &Document, control: NodeId, form: NodeId) -> NodeId {
        doc.closest(control, &Selector::Class(self.group_class.clone()))
            .filter(|group| doc.contains(form, *group))
            .unwrap_or(control)
    }
}

impl FormValidator for RequiredFields {
    fn is_valid(&self, doc: &mut Document, form: NodeId) -> bool {
        let required: Vec<NodeId> = doc
            .descendants(form)
            .into_iter()
            .filter(|n| is_control(doc, *n) && doc.has_attr(*n, "required"))
            .filter(|n| !is_disabled(doc, *n, form))
            .collect();

        let checked: Vec<(NodeId, bool)> = required
            .iter()
            .map(|control| {
                let empty = current_value(doc, *control).trim().is_empty();
                if empty {
                    tracing::debug!(
                        "required field '{}' is empty",
                        doc.attr(*control, "name").unwrap_or_default()
                    );
                }
                (self.marker(doc, *control, form), empty)
            })
            .collect();

        // Clear first so a group holding several fields keeps any error.
        for (marker, _) in &checked {
            doc.remove_class(*marker, &self.error_class);
        }
        for (marker, empty) in &checked {
            if *empty {
                doc.add_class(*marker, &self.error_class);
            }
        }
        checked.iter().all(|(_, empty)| !empty)
    }
}
