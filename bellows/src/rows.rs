use crate::dom::{Document, NodeId, Selector};
use crate::error::{BellowsError, Result};
use std::collections::HashMap;
use std::sync::Arc;

const INDEXED_ATTRS: &[&str] = &["name", "id", "for"];

/// Controller able to append one input row to a repeatable section.
pub trait RowTemplate: Send + Sync {
    /// Adds a row under `container` and returns the new row node.
    fn add_row(&self, doc: &mut Document, container: NodeId) -> Result<NodeId>;
}

/// Row templates keyed by the base id of their container (`addresses` for
/// the `addressesEmpty` placeholder).
#[derive(Clone, Default)]
pub struct RowTemplates {
    templates: HashMap<String, Arc<dyn RowTemplate>>,
}

impl RowTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, base: impl Into<String>, template: Arc<dyn RowTemplate>) {
        self.templates.insert(base.into(), template);
    }

    pub fn get(&self, base: &str) -> Option<&Arc<dyn RowTemplate>> {
        self.templates.get(base)
    }

    pub fn contains(&self, base: &str) -> bool {
        self.templates.contains_key(base)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl std::fmt::Debug for RowTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bases: Vec<&String> = self.templates.keys().collect();
        bases.sort();
        f.debug_struct("RowTemplates").field("bases", &bases).finish()
    }
}

/// Clones a hidden template row kept in the container.
///
/// The template carries both `template_class` and `hidden_class`; each copy
/// drops `hidden_class` and gets the next row index written into the first
/// numeric segment of its dotted `name`, `id` and `for` attributes
/// (`addresses.0.street` becomes `addresses.2.street` for the third row).
#[derive(Clone, Debug)]
pub struct TemplateRow {
    pub template_class: String,
    pub hidden_class: String,
}

impl Default for TemplateRow {
    fn default() -> Self {
        Self {
            template_class: "dynamic-row".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

impl TemplateRow {
    fn find_template(&self, doc: &Document, container: NodeId) -> Option<NodeId> {
        doc.query_all(container, &Selector::Class(self.template_class.clone()))
            .into_iter()
            .find(|n| doc.has_class(*n, &self.hidden_class))
    }
}

impl RowTemplate for TemplateRow {
    fn add_row(&self, doc: &mut Document, container: NodeId) -> Result<NodeId> {
        let template = self.find_template(doc, container).ok_or_else(|| {
            BellowsError::RowTemplate {
                base: doc.element_id(container).unwrap_or_default().to_string(),
                reason: format!(
                    "no .{}.{} template row",
                    self.template_class, self.hidden_class
                ),
            }
        })?;
        let parent = doc.parent(template).unwrap_or(container);
        let index = doc
            .children(parent)
            .iter()
            .filter(|n| **n != template && doc.has_class(**n, &self.template_class))
            .count();

        let copy = doc.to_element(template);
        let row = doc.append(parent, copy);
        doc.remove_class(row, &self.hidden_class);

        let mut nodes = vec![row];
        nodes.extend(doc.descendants(row));
        for node in nodes {
            for attr in INDEXED_ATTRS {
                if let Some(value) = doc.attr(node, attr).map(str::to_string) {
                    doc.set_attr(node, attr, &reindex(&value, index));
                }
            }
        }

        tracing::debug!("appended row {index} from template {template}");
        Ok(row)
    }
}

/// Replaces the first all-digit dotted segment of `value` with `index`.
pub fn reindex(value: &str, index: usize) -> String {
    let mut replaced = false;
    value
        .split('.')
        .map(|segment| {
            if !replaced && !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                replaced = true;
                index.to_string()
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}
