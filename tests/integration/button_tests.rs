use rivet_mvc::{append_view, Button, ButtonController, Document};

use super::{given_a_counter_model, given_an_empty_page, increment, Counter};

#[test]
fn given_a_button_when_appended_should_render_a_control_with_the_right_text() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|c: &Counter| format!("Clicks: {}", c.count)),
    );

    append_view(&doc, &doc.body(), &*button);

    let children = doc.children(&doc.body());
    assert_eq!(children.len(), 1);
    assert_eq!(doc.tag(&children[0]), "button");
    assert_eq!(doc.text(&children[0]), "Clicks: 5");
}

#[test]
fn given_an_enabled_projection_should_track_the_flag_across_notifies() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    model.with_mut(|c| c.enabled = false);
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|_: &Counter| "go".to_string()).with_enabled(|c| c.enabled),
    );
    append_view(&doc, &doc.body(), &*button);
    let control = doc.children(&doc.body())[0];

    assert!(doc.is_disabled(&control));

    model.with_mut(|c| c.enabled = true);
    model.notify();

    assert!(!doc.is_disabled(&control));
}

#[test]
fn given_no_enabled_projection_should_leave_the_control_enabled() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|_: &Counter| "go".to_string()),
    );
    append_view(&doc, &doc.body(), &*button);

    assert!(!doc.is_disabled(&doc.children(&doc.body())[0]));
}

#[test]
fn given_an_on_clicked_reaction_should_invoke_it_once_per_activation() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|_: &Counter| "++".to_string()).with_on_clicked(increment),
    );
    append_view(&doc, &doc.body(), &*button);
    let control = doc.children(&doc.body())[0];

    doc.click(&control);
    assert_eq!(model.with(|c| c.clicks), 1);

    doc.click(&control);
    assert_eq!(model.with(|c| c.clicks), 2);
}

#[test]
fn given_no_on_clicked_reaction_should_treat_activation_as_inert() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|c: &Counter| format!("Clicks: {}", c.count)),
    );
    append_view(&doc, &doc.body(), &*button);
    let control = doc.children(&doc.body())[0];

    doc.click(&control);

    assert_eq!(model.with(|c| c.clicks), 0);
    assert_eq!(doc.text(&control), "Clicks: 5");
}

#[test]
fn given_a_model_change_when_notified_should_patch_text_in_place() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|c: &Counter| format!("Clicks: {}", c.count)),
    );
    append_view(&doc, &doc.body(), &*button);
    let control = doc.children(&doc.body())[0];

    model.with_mut(|c| c.count = 9);
    model.notify();

    assert_eq!(doc.children(&doc.body()), vec![control]);
    assert_eq!(doc.text(&control), "Clicks: 9");
}

#[test]
fn given_a_class_projection_should_patch_the_class_on_notify() {
    let doc = given_an_empty_page();
    let model = given_a_counter_model();
    let button = Button::new(
        doc.clone(),
        &model,
        ButtonController::new(|_: &Counter| "go".to_string())
            .with_class(|c| if c.enabled { "live" } else { "dim" }.to_string()),
    );
    append_view(&doc, &doc.body(), &*button);
    let control = doc.children(&doc.body())[0];
    assert_eq!(doc.attribute(&control, "class"), Some("live".to_string()));

    model.with_mut(|c| c.enabled = false);
    model.notify();

    assert_eq!(doc.attribute(&control, "class"), Some("dim".to_string()));
}
