//! DropdownButton: a button that toggles a nested view's visibility.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::view::replace_or_skip;
use crate::{Button, ButtonController, Document, Model, Observer, View};

/// Projections a [`DropdownButton`] is parameterized with.
///
/// The display projections (`get_text`, `get_class`, `is_enabled`) drive
/// the internal button exactly as in [`ButtonController`]. There is no
/// `on_clicked`: activation is reserved for toggling the dropdown.
///
/// `get_dropdown_view` supplies the nested view. It is consulted exactly
/// once, at construction; returning a different view later has no effect on
/// an already built dropdown.
pub struct DropdownController<D: Document, T> {
    pub get_text: Box<dyn Fn(&T) -> String>,
    pub get_class: Option<Box<dyn Fn(&T) -> String>>,
    pub is_enabled: Option<Box<dyn Fn(&T) -> bool>>,
    pub get_dropdown_view: Box<dyn Fn(&Model<T>) -> Rc<dyn View<D>>>,
}

impl<D: Document, T> DropdownController<D, T> {
    /// Controller with the two required projections.
    pub fn new(
        get_text: impl Fn(&T) -> String + 'static,
        get_dropdown_view: impl Fn(&Model<T>) -> Rc<dyn View<D>> + 'static,
    ) -> Self {
        Self {
            get_text: Box::new(get_text),
            get_class: None,
            is_enabled: None,
            get_dropdown_view: Box::new(get_dropdown_view),
        }
    }

    /// Add a class projection.
    pub fn with_class(mut self, get_class: impl Fn(&T) -> String + 'static) -> Self {
        self.get_class = Some(Box::new(get_class));
        self
    }

    /// Add an enabled-state projection.
    pub fn with_enabled(mut self, is_enabled: impl Fn(&T) -> bool + 'static) -> Self {
        self.is_enabled = Some(Box::new(is_enabled));
        self
    }
}

/// A composite view: a [`Button`] that shows or hides a nested view.
///
/// Renders an outer `div` holding the internal button's rendering and a
/// container `div` for the nested view. The dropdown starts collapsed
/// (container hidden); every activation of the button toggles between
/// collapsed and expanded. There is no external API to force a state.
///
/// Updates delegate to the internal button and the nested view; the
/// dropdown itself renders nothing model-dependent beyond them.
pub struct DropdownButton<D: Document, T> {
    doc: D,
    button: Rc<Button<D, T>>,
    dropdown_view: Rc<dyn View<D>>,
    container: RefCell<Option<D::Node>>,
    expanded: Cell<bool>,
}

impl<D, T> DropdownButton<D, T>
where
    D: Document + Clone + 'static,
    T: 'static,
{
    /// Build a dropdown over `model` and register it as an observer.
    ///
    /// The internal button takes over the controller's display projections;
    /// its activation reaction toggles this dropdown. The nested view is
    /// fetched from `get_dropdown_view` here and kept for the dropdown's
    /// lifetime.
    pub fn new(doc: D, model: &Model<T>, controller: DropdownController<D, T>) -> Rc<Self> {
        let DropdownController {
            get_text,
            get_class,
            is_enabled,
            get_dropdown_view,
        } = controller;
        let dropdown_view = get_dropdown_view(model);

        let dropdown = Rc::new_cyclic(|weak_self: &Weak<Self>| {
            let mut button_controller = ButtonController {
                get_text,
                get_class,
                is_enabled,
                on_clicked: None,
            };
            let weak_self = weak_self.clone();
            button_controller = button_controller.with_on_clicked(move |_| {
                if let Some(dropdown) = weak_self.upgrade() {
                    dropdown.toggle();
                }
            });
            Self {
                doc: doc.clone(),
                button: Button::new(doc, model, button_controller),
                dropdown_view,
                container: RefCell::new(None),
                expanded: Cell::new(false),
            }
        });
        model.add_observer(dropdown.clone());
        dropdown
    }

    fn toggle(&self) {
        let expanded = !self.expanded.get();
        self.expanded.set(expanded);
        log::trace!(
            "dropdown {}",
            if expanded { "expanded" } else { "collapsed" }
        );
        if let Some(container) = self.container.borrow().as_ref() {
            self.doc.set_hidden(container, !expanded);
        }
    }
}

impl<D, T> View<D> for DropdownButton<D, T>
where
    D: Document + Clone + 'static,
    T: 'static,
{
    fn write_over(&self, placeholder: &D::Node) {
        let outer = self.doc.create_element("div");

        let button_slot = self.doc.create_element("div");
        self.doc.append_child(&outer, &button_slot);
        self.button.write_over(&button_slot);

        let container = self.doc.create_element("div");
        self.doc.set_hidden(&container, !self.expanded.get());
        self.doc.append_child(&outer, &container);

        let view_slot = self.doc.create_element("div");
        self.doc.append_child(&container, &view_slot);
        self.dropdown_view.write_over(&view_slot);

        *self.container.borrow_mut() = Some(container);
        replace_or_skip(&self.doc, placeholder, &outer);
    }
}

impl<D, T> Observer for DropdownButton<D, T>
where
    D: Document + Clone + 'static,
    T: 'static,
{
    fn update(&self) {
        self.button.update();
        self.dropdown_view.update();
    }
}
