use crate::fixtures::{ScriptedTransport, by_id, section_page, section_with};
use bellows::dom::*;
use bellows::handlers::RowAddHandler;
use bellows::rows::{RowTemplate, RowTemplates, TemplateRow};
use bellows::{AddRow, BellowsError, DomEvent, Outcome, Page, Section, SectionConfig};
use std::sync::{Arc, Mutex};

fn section_with_template(template: Arc<dyn RowTemplate>) -> Section {
    let page = Arc::new(Page::new(section_page()));
    Section::builder(
        page,
        SectionConfig::default(),
        Arc::new(ScriptedTransport::default()),
    )
    .row_template("addresses", template)
    .build()
    .unwrap()
}

/// Template that only records which containers it was asked to extend.
#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<NodeId>>,
}

impl RowTemplate for Recorder {
    fn add_row(&self, doc: &mut Document, container: NodeId) -> bellows::Result<NodeId> {
        self.calls.lock().unwrap().push(container);
        Ok(doc.append(container, div().class("row")))
    }
}

#[test]
fn test_click_on_placeholder_link_adds_row() {
    let recorder = Arc::new(Recorder::default());
    let section = section_with_template(recorder.clone());
    let (link, placeholder, container) = section.page().read(|doc| {
        (
            by_id(doc, "addAddress"),
            by_id(doc, "addressesEmpty"),
            by_id(doc, "addresses"),
        )
    });

    let dispatch = section.click(link).unwrap();

    assert!(dispatch.default_prevented);
    let Outcome::RowAdded {
        add_row,
        placeholder: hidden,
        row,
    } = &dispatch.outcome
    else {
        panic!("expected a row to be added, got {:?}", dispatch.outcome);
    };
    assert_eq!(
        *add_row,
        AddRow {
            base: "addresses".to_string(),
            container: Some(container),
        }
    );
    assert_eq!(*hidden, placeholder);
    assert!(row.is_some());
    assert_eq!(*recorder.calls.lock().unwrap(), vec![container]);
    assert!(section.page().read(|doc| doc.has_class(placeholder, "hidden")));
}

#[test]
fn test_click_on_placeholder_itself() {
    let section = section_with(Arc::new(ScriptedTransport::default()));
    let placeholder = section.page().read(|doc| by_id(doc, "addressesEmpty"));

    let dispatch = section.click(placeholder).unwrap();

    assert!(dispatch.default_prevented);
    assert!(matches!(
        dispatch.outcome,
        Outcome::RowAdded { ref add_row, row: None, .. } if add_row.base == "addresses"
    ));
    assert!(section.page().read(|doc| doc.has_class(placeholder, "hidden")));
}

#[test]
fn test_template_row_is_cloned_and_reindexed() {
    let section = section_with_template(Arc::new(TemplateRow::default()));
    let link = section.page().read(|doc| by_id(doc, "addAddress"));

    let Outcome::RowAdded { row: Some(first), .. } = section.click(link).unwrap().outcome else {
        panic!("template row not applied");
    };
    // The placeholder is hidden now, so the second row is requested directly.
    let second = section.page().update(|doc| {
        let container = by_id(doc, "addresses");
        TemplateRow::default().add_row(doc, container).unwrap()
    });

    section.page().read(|doc| {
        assert!(!doc.has_class(first, "hidden"));
        assert!(doc.has_class(first, "dynamic-row"));

        let names: Vec<&str> = doc
            .query_all(first, &Selector::Tag("input".to_string()))
            .into_iter()
            .filter_map(|n| doc.attr(n, "name"))
            .collect();
        assert_eq!(names, vec!["addresses.0.street", "addresses.0.city"]);

        let label = doc.query(second, &Selector::Tag("label".to_string())).unwrap();
        assert_eq!(doc.attr(label, "for"), Some("addresses.1.street"));
        assert!(doc.get_by_id("addresses.1.street").is_some());

        // The template itself stays hidden and untouched.
        let container = by_id(doc, "addresses");
        let hidden_templates = doc
            .children(container)
            .iter()
            .filter(|n| doc.has_class(**n, "hidden"))
            .count();
        assert_eq!(hidden_templates, 1);
        assert_eq!(doc.children(container).len(), 3);
    });
}

#[test]
fn test_template_without_hidden_row_still_hides_placeholder() {
    let page = Arc::new(Page::new(Document::new(
        body().child(
            div()
                .id("section")
                .child(div().id("rulesEmpty").class("unwell"))
                .child(div().id("rules")),
        ),
    )));
    let section = Section::builder(
        page,
        SectionConfig::default(),
        Arc::new(ScriptedTransport::default()),
    )
    .row_template("rules", Arc::new(TemplateRow::default()))
    .build()
    .unwrap();
    let placeholder = section.page().read(|doc| by_id(doc, "rulesEmpty"));

    let dispatch = section.click(placeholder).unwrap();

    assert!(matches!(dispatch.outcome, Outcome::RowAdded { row: None, .. }));
    assert!(section.page().read(|doc| doc.has_class(placeholder, "hidden")));
}

#[test]
fn test_template_row_error_names_container() {
    let mut doc = Document::new(div().id("rules"));
    let container = doc.root();
    let err = TemplateRow::default().add_row(&mut doc, container).unwrap_err();
    assert!(matches!(err, BellowsError::RowTemplate { ref base, .. } if base == "rules"));
}

#[test]
fn test_click_outside_delegated_selector_is_unhandled() {
    let section = section_with(Arc::new(ScriptedTransport::default()));
    let before = section.page().snapshot();
    let input = section
        .page()
        .read(|doc| doc.query(by_id(doc, "configForm"), &Selector::Tag("input".to_string())))
        .unwrap();

    let dispatch = section.click(input).unwrap();

    assert!(!dispatch.default_prevented);
    assert_eq!(dispatch.outcome, Outcome::Unhandled);
    assert_eq!(
        section.page().read(|doc| doc.render_page()),
        before.render_page()
    );
}

#[test]
fn test_click_outside_section_is_unhandled() {
    let section = section_with(Arc::new(ScriptedTransport::default()));
    let outside = section.page().read(|doc| by_id(doc, "outsideEmpty"));

    let dispatch = section.click(outside).unwrap();

    assert_eq!(dispatch, bellows::Dispatch::unhandled());
    assert!(!section.page().read(|doc| doc.has_class(outside, "hidden")));
}

#[test]
fn test_suffix_match_without_marker_is_skipped() {
    let page = Arc::new(Page::new(Document::new(
        body().child(
            div()
                .id("section")
                .child(a().id("linksEmpty").text("no marker"))
                .child(div().class("unwell").id("Empty").child(span().id("bareEmpty"))),
        ),
    )));
    let section = Section::builder(
        page,
        SectionConfig::default(),
        Arc::new(ScriptedTransport::default()),
    )
    .build()
    .unwrap();
    let (no_marker, bare) = section
        .page()
        .read(|doc| (by_id(doc, "linksEmpty"), by_id(doc, "bareEmpty")));
    let before = section.page().snapshot().render_page();

    let dispatch = section.click(no_marker).unwrap();
    assert!(dispatch.default_prevented);
    assert_eq!(dispatch.outcome, Outcome::RowAddSkipped);

    // `.unwell#Empty` has an empty base.
    let dispatch = section.click(bare).unwrap();
    assert!(dispatch.default_prevented);
    assert_eq!(dispatch.outcome, Outcome::RowAddSkipped);

    assert_eq!(section.page().snapshot().render_page(), before);
}

#[test]
fn test_custom_suffix_and_marker() {
    let config = SectionConfig {
        empty_suffix: "Placeholder".to_string(),
        marker_class: "empty-state".to_string(),
        hidden_class: "d-none".to_string(),
        ..SectionConfig::default()
    };
    let page = Arc::new(Page::new(Document::new(
        body().child(
            div()
                .id("section")
                .child(div().id("sourcesPlaceholder").class("empty-state")),
        ),
    )));
    let section = Section::builder(page, config, Arc::new(ScriptedTransport::default()))
        .build()
        .unwrap();
    let placeholder = section.page().read(|doc| by_id(doc, "sourcesPlaceholder"));

    let dispatch = section.click(placeholder).unwrap();

    assert!(matches!(
        dispatch.outcome,
        Outcome::RowAdded { ref add_row, .. } if add_row.base == "sources" && add_row.container.is_none()
    ));
    assert!(section.page().read(|doc| doc.has_class(placeholder, "d-none")));
}

#[tokio::test]
async fn test_dispatch_routes_click() {
    let section = section_with(Arc::new(ScriptedTransport::default()));
    let link = section.page().read(|doc| by_id(doc, "addAddress"));

    let dispatch = section.dispatch(DomEvent::Click { target: link }).await.unwrap();

    assert!(matches!(dispatch.outcome, Outcome::RowAdded { .. }));
}

#[test]
fn test_foreign_node_is_an_error() {
    let section = section_with(Arc::new(ScriptedTransport::default()));
    let big = Document::new(
        div().children((0..500).map(|i| span().id(&format!("s{i}")))),
    );
    let foreign = by_id(&big, "s499");

    assert!(matches!(
        section.click(foreign),
        Err(BellowsError::UnknownNode(id)) if id == foreign
    ));
}

#[test]
fn test_missing_root_fails_build() {
    let page = Arc::new(Page::new(Document::new(body())));
    let result = Section::builder(
        page,
        SectionConfig::default(),
        Arc::new(ScriptedTransport::default()),
    )
    .build();
    assert!(matches!(result, Err(BellowsError::MissingRoot(ref id)) if id == "section"));
}

#[test]
fn test_placeholder_base_from_nested_target() {
    let doc = section_page();
    let handler = RowAddHandler::new(&SectionConfig::default());

    let base = handler.placeholder_base(&doc, by_id(&doc, "addAddress"));
    assert_eq!(
        base,
        Some((by_id(&doc, "addressesEmpty"), "addresses".to_string()))
    );
    assert_eq!(handler.placeholder_base(&doc, by_id(&doc, "addresses")), None);
    assert_eq!(
        handler
            .placeholder_base(&doc, by_id(&doc, "outsideEmpty"))
            .map(|(_, base)| base),
        Some("outside".to_string())
    );
}

#[test]
fn test_prebuilt_template_registry() {
    let mut rows = RowTemplates::new();
    assert!(rows.is_empty());
    rows.register("addresses", Arc::new(TemplateRow::default()));
    assert!(rows.contains("addresses"));
    assert!(!rows.contains("addressesEmpty"));

    let page = Arc::new(Page::new(section_page()));
    let section = Section::builder(
        page,
        SectionConfig::default(),
        Arc::new(ScriptedTransport::default()),
    )
    .rows(rows)
    .build()
    .unwrap();
    assert_eq!(section.rows().len(), 1);
    assert!(section.rows().contains("addresses"));

    let link = section.page().read(|doc| by_id(doc, "addAddress"));
    assert!(matches!(
        section.click(link).unwrap().outcome,
        Outcome::RowAdded { row: Some(_), .. }
    ));
}
