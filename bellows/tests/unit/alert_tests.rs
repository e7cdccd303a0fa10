use crate::fixtures::{by_id, section_page};
use bellows::alert::{Alerts, BannerKind, InlineBanners};

#[test]
fn test_success_banner_is_transient_and_first_in_form() {
    let mut doc = section_page();
    let form = by_id(&doc, "configForm");
    let alerts = InlineBanners::default();

    alerts.show_success(&mut doc, form, "Saved");

    let first = doc.children(form)[0];
    assert!(doc.has_class(first, "alert"));
    assert!(doc.has_class(first, "alert-success"));
    assert!(doc.has_class(first, "fade"));
    assert_eq!(doc.attr(first, "data-kind"), Some("success"));
    assert_eq!(doc.text(first), "Saved");

    let banners = alerts.banners(&doc, form);
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].kind, BannerKind::Success);
    assert!(!banners[0].persistent);
}

#[test]
fn test_error_banner_is_persistent() {
    let mut doc = section_page();
    let form = by_id(&doc, "configForm");
    let alerts = InlineBanners::default();

    alerts.show_permanent_error(&mut doc, form, "Boom");

    let banners = alerts.banners(&doc, form);
    assert_eq!(banners.len(), 1);
    assert_eq!(banners[0].kind, BannerKind::Error);
    assert_eq!(banners[0].message, "Boom");
    assert!(banners[0].persistent);
    assert!(doc.has_class(banners[0].node, "alert-error"));
}

#[test]
fn test_new_success_replaces_previous_but_keeps_errors() {
    let mut doc = section_page();
    let form = by_id(&doc, "configForm");
    let alerts = InlineBanners::default();

    alerts.show_permanent_error(&mut doc, form, "Earlier failure");
    alerts.show_success(&mut doc, form, "Saved");
    alerts.show_success(&mut doc, form, "Saved again");

    let messages: Vec<(BannerKind, String)> = alerts
        .banners(&doc, form)
        .into_iter()
        .map(|b| (b.kind, b.message))
        .collect();
    assert_eq!(
        messages,
        vec![
            (BannerKind::Success, "Saved again".to_string()),
            (BannerKind::Error, "Earlier failure".to_string()),
        ]
    );
}

#[test]
fn test_reset_clears_every_banner_in_scope_only() {
    let mut doc = section_page();
    let form = by_id(&doc, "configForm");
    let section = by_id(&doc, "section");
    let outside = by_id(&doc, "outsideEmpty");
    let alerts = InlineBanners::default();

    alerts.show_permanent_error(&mut doc, form, "Boom");
    alerts.show_success(&mut doc, form, "Saved");
    alerts.show_permanent_error(&mut doc, outside, "Elsewhere");

    alerts.reset(&mut doc, section);

    assert!(alerts.banners(&doc, section).is_empty());
    assert_eq!(alerts.banners(&doc, outside).len(), 1);
}

#[test]
fn test_custom_classes() {
    let mut doc = section_page();
    let form = by_id(&doc, "configForm");
    let alerts = InlineBanners {
        banner_class: "notice".to_string(),
        success_class: "notice-ok".to_string(),
        error_class: "notice-bad".to_string(),
        transient_class: "auto-hide".to_string(),
    };

    alerts.show_success(&mut doc, form, "Done");

    let banner = doc.children(form)[0];
    assert_eq!(doc.attr(banner, "class"), Some("notice notice-ok auto-hide"));
    assert!(InlineBanners::default().banners(&doc, form).is_empty());
}
