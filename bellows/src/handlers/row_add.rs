use crate::config::SectionConfig;
use crate::dom::{Document, NodeId, Selector};
use crate::event::{AddRow, Outcome};
use crate::rows::RowTemplates;

/// Turns a click on an empty-section placeholder into an [`AddRow`].
#[derive(Clone, Debug)]
pub struct RowAddHandler {
    delegate: Selector,
    marker: Selector,
    suffix: String,
    hidden_class: String,
}

impl RowAddHandler {
    pub fn new(config: &SectionConfig) -> Self {
        Self {
            delegate: Selector::IdSuffix(config.empty_suffix.clone()),
            marker: Selector::Class(config.marker_class.clone()),
            suffix: config.empty_suffix.clone(),
            hidden_class: config.hidden_class.clone(),
        }
    }

    /// Innermost node from `target` up to, not including, `root` that the
    /// handler is delegated for.
    pub fn delegate_target(&self, doc: &Document, root: NodeId, target: NodeId) -> Option<NodeId> {
        doc.ancestors(target)
            .take_while(|n| *n != root)
            .find(|n| self.delegate.matches(doc, *n))
    }

    /// The marked placeholder around `target` and the base id its own id
    /// names.
    pub fn placeholder_base(&self, doc: &Document, target: NodeId) -> Option<(NodeId, String)> {
        let Some(placeholder) = doc.closest(target, &self.marker) else {
            tracing::debug!("click on {target}: no {} ancestor", self.marker);
            return None;
        };
        let Some(base) = doc
            .element_id(placeholder)
            .and_then(|id| split_placeholder_id(id, &self.suffix))
        else {
            tracing::debug!("click on {target}: {placeholder} id does not end in '{}'", self.suffix);
            return None;
        };
        Some((placeholder, base.to_string()))
    }

    pub fn handle(&self, doc: &mut Document, rows: &RowTemplates, target: NodeId) -> Outcome {
        let Some((placeholder, base)) = self.placeholder_base(doc, target) else {
            return Outcome::RowAddSkipped;
        };

        let container = doc.get_by_id(&base);
        let row = match (rows.get(&base), container) {
            (Some(template), Some(container)) => match template.add_row(doc, container) {
                Ok(row) => Some(row),
                Err(e) => {
                    tracing::warn!("add row to #{base}: {e}");
                    None
                }
            },
            (Some(_), None) => {
                tracing::warn!("row template for '{base}' registered but #{base} is missing");
                None
            }
            (None, _) => {
                tracing::debug!("no row template registered for '{base}'");
                None
            }
        };

        doc.add_class(placeholder, &self.hidden_class);
        tracing::debug!("addrow on #{base}, placeholder {placeholder} hidden");

        Outcome::RowAdded {
            add_row: AddRow { base, container },
            placeholder,
            row,
        }
    }
}

/// Splits `<base><suffix>` into `<base>`. The base must not be empty.
pub fn split_placeholder_id<'a>(id: &'a str, suffix: &str) -> Option<&'a str> {
    id.strip_suffix(suffix).filter(|base| !base.is_empty())
}
