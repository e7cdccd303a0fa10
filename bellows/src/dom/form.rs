//! Form field collection and `application/x-www-form-urlencoded` encoding.
//!
//! Collection follows what a browser sends for a native submit: named,
//! enabled controls in document order, unchecked boxes and button-like
//! inputs skipped.

use super::{Document, NodeId};

const SKIPPED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "file", "image"];

/// Ordered name/value pairs of one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn collect(doc: &Document, form: NodeId) -> Self {
        let mut pairs = Vec::new();
        for control in doc.descendants(form) {
            if !is_control(doc, control) {
                continue;
            }
            let Some(name) = doc.attr(control, "name").filter(|n| !n.is_empty()) else {
                continue;
            };
            if is_disabled(doc, control, form) {
                continue;
            }
            for value in submitted_values(doc, control) {
                pairs.push((name.to_string(), normalize_newlines(&value)));
            }
        }
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_urlencoded(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub fn is_control(doc: &Document, id: NodeId) -> bool {
    matches!(doc.tag(id), "input" | "select" | "textarea")
}

/// A control is disabled by its own attribute or by a disabled fieldset
/// between it and the form.
pub fn is_disabled(doc: &Document, control: NodeId, form: NodeId) -> bool {
    doc.ancestors(control)
        .take_while(|n| *n != form)
        .any(|n| {
            doc.has_attr(n, "disabled") && (n == control || doc.tag(n) == "fieldset")
        })
}

/// The value a user sees in the control, regardless of whether it would be
/// submitted.
pub fn current_value(doc: &Document, control: NodeId) -> String {
    match doc.tag(control) {
        "textarea" => doc.text(control).to_string(),
        "select" => selected_options(doc, control)
            .first()
            .map(|o| option_value(doc, *o))
            .unwrap_or_default(),
        _ => doc.attr(control, "value").unwrap_or_default().to_string(),
    }
}

fn submitted_values(doc: &Document, control: NodeId) -> Vec<String> {
    match doc.tag(control) {
        "textarea" => vec![doc.text(control).to_string()],
        "select" => selected_options(doc, control)
            .into_iter()
            .map(|o| option_value(doc, o))
            .collect(),
        _ => {
            let kind = doc
                .attr(control, "type")
                .unwrap_or("text")
                .to_ascii_lowercase();
            if SKIPPED_INPUT_TYPES.contains(&kind.as_str()) {
                return Vec::new();
            }
            if kind == "checkbox" || kind == "radio" {
                if !doc.has_attr(control, "checked") {
                    return Vec::new();
                }
                return vec![doc.attr(control, "value").unwrap_or("on").to_string()];
            }
            vec![doc.attr(control, "value").unwrap_or_default().to_string()]
        }
    }
}

fn selected_options(doc: &Document, select: NodeId) -> Vec<NodeId> {
    let options: Vec<NodeId> = doc
        .descendants(select)
        .into_iter()
        .filter(|n| doc.tag(*n) == "option" && !doc.has_attr(*n, "disabled"))
        .collect();
    let selected: Vec<NodeId> = options
        .iter()
        .copied()
        .filter(|o| doc.has_attr(*o, "selected"))
        .collect();

    if doc.has_attr(select, "multiple") {
        return selected;
    }
    // A single select always has a value: the last selected option, or the
    // first one when nothing is marked.
    match selected.last() {
        Some(last) => vec![*last],
        None => options.into_iter().take(1).collect(),
    }
}

fn option_value(doc: &Document, option: NodeId) -> String {
    match doc.attr(option, "value") {
        Some(value) => value.to_string(),
        None => doc.text(option).trim().to_string(),
    }
}

fn normalize_newlines(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// `encodeURIComponent` with spaces sent as `+`.
pub fn encode_component(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for b in src.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
