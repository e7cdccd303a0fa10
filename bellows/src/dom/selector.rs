use super::{Document, NodeId};
use std::fmt;

/// The handful of selectors a section needs, kept typed instead of parsed
/// from CSS text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `[id$="suffix"]`
    IdSuffix(String),
    /// `tag`
    Tag(String),
    /// `tag[attr="value"]`
    TagWithAttr {
        tag: String,
        attr: String,
        value: String,
    },
}

impl Selector {
    pub fn form_named(name: &str) -> Self {
        Self::TagWithAttr {
            tag: "form".to_string(),
            attr: "name".to_string(),
            value: name.to_string(),
        }
    }

    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        match self {
            Self::Id(expected) => doc.element_id(id) == Some(expected.as_str()),
            Self::Class(class) => doc.has_class(id, class),
            Self::IdSuffix(suffix) => doc
                .element_id(id)
                .is_some_and(|value| value.ends_with(suffix.as_str())),
            Self::Tag(tag) => doc.tag(id).eq_ignore_ascii_case(tag),
            Self::TagWithAttr { tag, attr, value } => {
                doc.tag(id).eq_ignore_ascii_case(tag) && doc.attr(id, attr) == Some(value.as_str())
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::IdSuffix(suffix) => write!(f, "[id$=\"{suffix}\"]"),
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::TagWithAttr { tag, attr, value } => write!(f, "{tag}[{attr}=\"{value}\"]"),
        }
    }
}
