use super::{Document, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Raw text elements: their text is written back unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

impl Document {
    /// Serializes the subtree at `id` back to HTML.
    pub fn render(&self, id: NodeId) -> String {
        let mut html = String::new();
        self.render_into(id, &mut html);
        html
    }

    pub fn render_page(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.render(self.root()))
    }

    fn render_into(&self, id: NodeId, html: &mut String) {
        let tag = self.tag(id);
        html.push('<');
        html.push_str(tag);

        for (key, value) in self.attributes(id) {
            html.push_str(&format!(" {}=\"{}\"", key, html_escape(value)));
        }
        html.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            return;
        }

        if RAW_TEXT_ELEMENTS.contains(&tag) {
            html.push_str(self.text(id));
        } else {
            html.push_str(&html_escape(self.text(id)));
        }
        for child in self.children(id) {
            self.render_into(*child, html);
            html.push_str(&html_escape(self.tail(*child)));
        }

        html.push_str(&format!("</{tag}>"));
    }
}

// Helper function to escape HTML
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
