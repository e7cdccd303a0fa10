/// Detached element tree used to build pages and to move subtrees in and out
/// of a [`Document`](super::Document).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) children: Vec<Element>,
    pub(crate) text_content: Option<String>,
    pub(crate) tail_content: Option<String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn name(self, name: &str) -> Self {
        self.attr("name", name)
    }

    pub fn value(self, value: &str) -> Self {
        self.attr("value", value)
    }

    /// Adds a boolean attribute such as `checked` or `disabled`.
    pub fn flag(self, key: &str) -> Self {
        self.attr(key, key)
    }

    pub fn class(mut self, class: &str) -> Self {
        let mut classes = self.get_attr("class").unwrap_or_default().to_string();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
        self.set_attr("class", &classes);
        self
    }

    /// Text before the first child element.
    pub fn text(mut self, text: &str) -> Self {
        self.text_content = Some(text.to_string());
        self
    }

    /// Text following this element inside its parent, up to the next
    /// sibling element.
    pub fn tail(mut self, text: &str) -> Self {
        self.tail_content = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn set_attr(&mut self, key: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((key.to_string(), value.to_string())),
        }
    }
}
