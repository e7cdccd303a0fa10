use super::{Document, Element};
use crate::error::{BellowsError, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

impl Document {
    /// Parses a full HTML page. The `<html>` element becomes the root.
    pub fn parse_html(html: &str) -> Result<Self> {
        let dom: RcDom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| BellowsError::Parse(e.to_string()))?;

        let root = dom
            .document
            .children
            .borrow()
            .iter()
            .find_map(convert)
            .ok_or_else(|| BellowsError::Parse("document has no root element".to_string()))?;

        Ok(Document::new(root))
    }
}

fn convert(node: &Handle) -> Option<Element> {
    let NodeData::Element { name, attrs, .. } = &node.data else {
        return None;
    };

    let mut element = Element::new(&name.local);
    for attr in attrs.borrow().iter() {
        element.set_attr(&attr.name.local, &attr.value);
    }

    // Text before the first child element is the element text; text after a
    // child is that child's tail. Comments are dropped.
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let slot = match element.children.last_mut() {
                    Some(previous) => &mut previous.tail_content,
                    None => &mut element.text_content,
                };
                slot.get_or_insert_with(String::new)
                    .push_str(&contents.borrow());
            }
            NodeData::Element { .. } => {
                if let Some(converted) = convert(child) {
                    element.children.push(converted);
                }
            }
            _ => {}
        }
    }

    Some(element)
}
