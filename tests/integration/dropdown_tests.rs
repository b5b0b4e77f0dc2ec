use std::rc::Rc;

use rivet_mvc::{
    append_view, Document, DropdownButton, DropdownController, FakeDocument, FakeNode, Label,
    LabelController, Model, View,
};

use super::{given_a_counter_dropdown, given_a_counter_model, given_an_empty_page, Counter};

/// Handles into a mounted dropdown's rendering.
struct DropdownParts {
    toggle: FakeNode,
    container: FakeNode,
}

fn mount(doc: &FakeDocument, dropdown: &DropdownButton<FakeDocument, Counter>) -> DropdownParts {
    append_view(doc, &doc.body(), dropdown);
    let outer = doc.children(&doc.body())[0];
    let children = doc.children(&outer);
    assert_eq!(children.len(), 2);
    DropdownParts {
        toggle: children[0],
        container: children[1],
    }
}

#[test]
fn given_a_fresh_dropdown_should_start_collapsed() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let dropdown = given_a_counter_dropdown(&doc, &model);

    let parts = mount(&doc, &dropdown);

    assert_eq!(doc.tag(&parts.toggle), "button");
    assert!(doc.is_hidden(&parts.container));
}

#[test]
fn given_two_activations_should_expand_then_collapse() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let dropdown = given_a_counter_dropdown(&doc, &model);
    let parts = mount(&doc, &dropdown);

    doc.click(&parts.toggle);
    assert!(!doc.is_hidden(&parts.container));

    doc.click(&parts.toggle);
    assert!(doc.is_hidden(&parts.container));
}

#[test]
fn given_a_mounted_dropdown_should_nest_the_dropdown_views_rendering_in_the_container() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let dropdown = given_a_counter_dropdown(&doc, &model);
    let parts = mount(&doc, &dropdown);

    let nested = doc.children(&parts.container);
    assert_eq!(nested.len(), 1);
    assert_eq!(doc.tag(&nested[0]), "button");
    assert_eq!(doc.text(&nested[0]), "++");
}

#[test]
fn given_a_model_change_when_notified_should_update_toggle_and_nested_view() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let nested_doc = doc.clone();
    let dropdown = DropdownButton::new(
        doc.clone(),
        &model,
        DropdownController::new(
            |c: &Counter| format!("Clicks: {}", c.count),
            move |model: &Model<Counter>| {
                Label::new(
                    nested_doc.clone(),
                    model,
                    LabelController::new(|c: &Counter| format!("count is {}", c.count)),
                ) as Rc<dyn View<FakeDocument>>
            },
        ),
    );
    let parts = mount(&doc, &dropdown);
    let nested = doc.children(&parts.container)[0];
    assert_eq!(doc.tag(&nested), "span");

    model.with_mut(|c| c.count = 7);
    model.notify();

    assert_eq!(doc.text(&parts.toggle), "Clicks: 7");
    assert_eq!(doc.text(&nested), "count is 7");
}

#[test]
fn given_a_nested_increment_button_when_clicked_should_update_the_toggle_text() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let dropdown = given_a_counter_dropdown(&doc, &model);
    let parts = mount(&doc, &dropdown);

    doc.click(&parts.toggle);
    let nested = doc.children(&parts.container)[0];
    doc.click(&nested);

    assert_eq!(model.with(|c| c.count), 6);
    assert_eq!(doc.text(&parts.toggle), "Clicks: 6");
    assert!(!doc.is_hidden(&parts.container));
}

#[test]
fn given_display_projections_should_drive_the_internal_button() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    model.with_mut(|c| c.enabled = false);
    let nested_doc = doc.clone();
    let dropdown = DropdownButton::new(
        doc.clone(),
        &model,
        DropdownController::new(
            |c: &Counter| format!("Clicks: {}", c.count),
            move |model: &Model<Counter>| {
                Label::new(
                    nested_doc.clone(),
                    model,
                    LabelController::new(|_: &Counter| "inner".to_string()),
                ) as Rc<dyn View<FakeDocument>>
            },
        )
        .with_class(|_| "menu".to_string())
        .with_enabled(|c| c.enabled),
    );
    let parts = mount(&doc, &dropdown);

    assert_eq!(doc.attribute(&parts.toggle, "class"), Some("menu".to_string()));
    assert!(doc.is_disabled(&parts.toggle));
}
