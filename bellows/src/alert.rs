use crate::dom::{Document, NodeId, Selector, div};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

const PERSISTENT_ATTR: &str = "data-persistent";
const KIND_ATTR: &str = "data-kind";

/// Inline outcome banners.
pub trait Alerts: Send + Sync {
    /// Removes every banner under `scope`.
    fn reset(&self, doc: &mut Document, scope: NodeId);
    fn show_success(&self, doc: &mut Document, form: NodeId, message: &str);
    fn show_permanent_error(&self, doc: &mut Document, form: NodeId, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub node: NodeId,
    pub kind: BannerKind,
    pub message: String,
    pub persistent: bool,
}

/// Banners rendered as `div.alert` elements at the top of the form.
#[derive(Clone, Debug)]
pub struct InlineBanners {
    pub banner_class: String,
    pub success_class: String,
    pub error_class: String,
    pub transient_class: String,
}

impl Default for InlineBanners {
    fn default() -> Self {
        Self {
            banner_class: "alert".to_string(),
            success_class: "alert-success".to_string(),
            error_class: "alert-error".to_string(),
            transient_class: "fade".to_string(),
        }
    }
}

impl InlineBanners {
    /// Banners currently shown under `scope`, in document order. Elements
    /// carrying the banner class but neither kind class are skipped.
    pub fn banners(&self, doc: &Document, scope: NodeId) -> Vec<Banner> {
        doc.query_all(scope, &Selector::Class(self.banner_class.clone()))
            .into_iter()
            .filter_map(|node| {
                let kind = BannerKind::iter().find(|k| doc.has_class(node, self.kind_class(*k)))?;
                Some(Banner {
                    node,
                    kind,
                    message: doc.text(node).to_string(),
                    persistent: doc.attr(node, PERSISTENT_ATTR) == Some("true"),
                })
            })
            .collect()
    }

    fn kind_class(&self, kind: BannerKind) -> &str {
        match kind {
            BannerKind::Success => &self.success_class,
            BannerKind::Error => &self.error_class,
        }
    }

    fn show(&self, doc: &mut Document, form: NodeId, kind: BannerKind, message: &str) -> NodeId {
        let mut banner = div()
            .class(&self.banner_class)
            .class(self.kind_class(kind))
            .attr(KIND_ATTR, kind.as_ref());
        banner = match kind {
            BannerKind::Success => banner.class(&self.transient_class),
            BannerKind::Error => banner.attr(PERSISTENT_ATTR, "true"),
        };
        doc.prepend(form, banner.text(message))
    }
}

impl Alerts for InlineBanners {
    fn reset(&self, doc: &mut Document, scope: NodeId) {
        for banner in doc.query_all(scope, &Selector::Class(self.banner_class.clone())) {
            doc.remove(banner);
        }
    }

    fn show_success(&self, doc: &mut Document, form: NodeId, message: &str) {
        // A new confirmation replaces the previous transient one.
        for banner in self.banners(doc, form) {
            if !banner.persistent {
                doc.remove(banner.node);
            }
        }
        self.show(doc, form, BannerKind::Success, message);
    }

    fn show_permanent_error(&self, doc: &mut Document, form: NodeId, message: &str) {
        self.show(doc, form, BannerKind::Error, message);
    }
}
