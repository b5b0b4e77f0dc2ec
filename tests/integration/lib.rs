
use std::cell::Cell;
use std::rc::Rc;

use rivet_mvc::{FakeDocument, Model, Observer};
pub(crate) use counter_app::*;

mod button_tests;
mod dropdown_tests;

/// Observer that counts its `update` calls.
pub(crate) struct CountingObserver {
    updates: Cell<usize>,
}

impl CountingObserver {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            updates: Cell::new(0),
        })
    }

    pub(crate) fn updates(&self) -> usize {
        self.updates.get()
    }
}

impl Observer for CountingObserver {
    fn update(&self) {
        self.updates.set(self.updates.get() + 1);
    }
}

pub(crate) fn given_an_empty_page() -> FakeDocument {
    FakeDocument::new()
}

pub(crate) struct LabelModel {
    pub(crate) label_text: String,
    pub(crate) class_text: String,
}

pub(crate) fn given_a_label_model() -> Model<LabelModel> {
    Model::new(LabelModel {
        label_text: "boris".to_string(),
        class_text: "hilda".to_string(),
    })
}
