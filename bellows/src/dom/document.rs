use super::{Element, Selector};
use crate::error::{BellowsError, Result};
use std::fmt;

/// Handle to a node of one [`Document`].
///
/// Ids are never reused: removing a node only detaches it, so a handle stays
/// valid for the lifetime of the document that issued it. The arena does not
/// shrink either; a document that keeps replacing banners or rows grows by the
/// detached subtrees until it is dropped or re-parsed from its rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    tail: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Mutable page model: an arena of element nodes with parent links.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    scroll_top: u32,
}

impl Document {
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            scroll_top: 0,
        };
        doc.root = doc.insert_tree(root, None);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Rejects handles that were not issued by this document.
    pub fn check(&self, id: NodeId) -> Result<NodeId> {
        if id.0 < self.nodes.len() {
            Ok(id)
        } else {
            Err(BellowsError::UnknownNode(id))
        }
    }

    // ---------------------------------------------------------------------------
    // Attributes, classes, text
    // ---------------------------------------------------------------------------

    pub fn tag(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        self.nodes[id.0]
            .attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        &self.nodes[id.0].attributes
    }

    pub fn has_attr(&self, id: NodeId, key: &str) -> bool {
        self.attr(id, key).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, key: &str, value: &str) {
        let attributes = &mut self.nodes[id.0].attributes;
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((key.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, key: &str) {
        self.nodes[id.0].attributes.retain(|(k, _)| k != key);
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "id")
    }

    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.attr(id, "class").unwrap_or_default().split_whitespace()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|c| c == class)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let mut classes: Vec<String> = self.classes(id).map(str::to_string).collect();
        classes.push(class.to_string());
        self.set_attr(id, "class", &classes.join(" "));
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let classes: Vec<String> = self
            .classes(id)
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        if classes.is_empty() {
            self.remove_attr(id, "class");
        } else {
            self.set_attr(id, "class", &classes.join(" "));
        }
    }

    /// Text before the first child element.
    pub fn text(&self, id: NodeId) -> &str {
        self.nodes[id.0].text.as_deref().unwrap_or_default()
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.nodes[id.0].text = Some(text.to_string());
    }

    /// Text between `id` and its next sibling element.
    pub fn tail(&self, id: NodeId) -> &str {
        self.nodes[id.0].tail.as_deref().unwrap_or_default()
    }

    pub fn set_tail(&mut self, id: NodeId, text: &str) {
        self.nodes[id.0].tail = Some(text.to_string());
    }

    // ---------------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// The node itself followed by each of its ancestors.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |n| self.parent(*n))
    }

    /// All nodes below `id` in document order, `id` excluded.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev());
        }
        out
    }

    /// True when `ancestor` is a strict ancestor of `node`.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).skip(1).any(|n| n == ancestor)
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        id == self.root || self.contains(self.root, id)
    }

    /// Nearest node, starting with `id` itself, matching `selector`.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        self.ancestors(id).find(|n| selector.matches(self, *n))
    }

    pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|n| selector.matches(self, *n))
    }

    pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|n| selector.matches(self, *n))
            .collect()
    }

    /// First attached node carrying the given `id` attribute.
    pub fn get_by_id(&self, element_id: &str) -> Option<NodeId> {
        if self.element_id(self.root) == Some(element_id) {
            return Some(self.root);
        }
        self.query(self.root, &Selector::Id(element_id.to_string()))
    }

    // ---------------------------------------------------------------------------
    // Tree mutation
    // ---------------------------------------------------------------------------

    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let index = self.children(parent).len();
        self.insert_child(parent, index, element)
    }

    pub fn prepend(&mut self, parent: NodeId, element: Element) -> NodeId {
        self.insert_child(parent, 0, element)
    }

    pub fn insert_child(&mut self, parent: NodeId, index: usize, element: Element) -> NodeId {
        let id = self.insert_tree(element, Some(parent));
        let children = &mut self.nodes[parent.0].children;
        let index = index.min(children.len());
        children.insert(index, id);
        id
    }

    /// Detaches `id`, together with its tail text, from its parent. The root
    /// cannot be removed. The detached nodes stay in the arena.
    pub fn remove(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        self.nodes[parent.0].children.retain(|c| *c != id);
        self.nodes[id.0].parent = None;
    }

    /// Copies the subtree rooted at `id` back into a builder element.
    pub fn to_element(&self, id: NodeId) -> Element {
        let node = &self.nodes[id.0];
        Element {
            tag: node.tag.clone(),
            attributes: node.attributes.clone(),
            children: node.children.iter().map(|c| self.to_element(*c)).collect(),
            text_content: node.text.clone(),
            tail_content: node.tail.clone(),
        }
    }

    // ---------------------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------------------

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    pub fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_top = offset;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_top = 0;
    }

    fn insert_tree(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag: element.tag,
            attributes: element.attributes,
            text: element.text_content,
            tail: element.tail_content,
            parent,
            children: Vec::new(),
        });
        let children: Vec<NodeId> = element
            .children
            .into_iter()
            .map(|child| self.insert_tree(child, Some(id)))
            .collect();
        self.nodes[id.0].children = children;
        id
    }
}
