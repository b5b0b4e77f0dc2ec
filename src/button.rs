//! Button view: an interactive control driven by a model.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::view::replace_or_skip;
use crate::{Document, Model, Observer, View};

/// Projections and reactions a [`Button`] is parameterized with.
///
/// `get_text` is required. An absent `get_class` or `is_enabled` means the
/// button never touches the corresponding state (absent `is_enabled` leaves
/// the control enabled). An absent `on_clicked` makes activation a no-op.
pub struct ButtonController<T> {
    pub get_text: Box<dyn Fn(&T) -> String>,
    pub get_class: Option<Box<dyn Fn(&T) -> String>>,
    pub is_enabled: Option<Box<dyn Fn(&T) -> bool>>,
    pub on_clicked: Option<Box<dyn Fn(&Model<T>)>>,
}

impl<T> ButtonController<T> {
    /// Controller with only the required text projection.
    pub fn new(get_text: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            get_text: Box::new(get_text),
            get_class: None,
            is_enabled: None,
            on_clicked: None,
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

    /// Add an activation reaction.
    ///
    /// The reaction receives the model handle so it can mutate the data and
    /// [`notify`](Model::notify).
    pub fn with_on_clicked(mut self, on_clicked: impl Fn(&Model<T>) + 'static) -> Self {
        self.on_clicked = Some(Box::new(on_clicked));
        self
    }
}

/// A leaf view rendering one `button` control.
///
/// One activation handler is registered on the rendered control at
/// [`write_over`](View::write_over) time and never re-registered; it looks
/// up `on_clicked` at each activation, so an absent reaction simply makes
/// clicks inert.
///
/// # Example
///
/// ```rust
/// use rivet_mvc::{append_view, Button, ButtonController, Document, FakeDocument, Model};
///
/// struct Counter { count: i32 }
///
/// let doc = FakeDocument::new();
/// let model = Model::new(Counter { count: 0 });
/// let button = Button::new(
///     doc.clone(),
///     &model,
///     ButtonController::new(|c: &Counter| format!("clicks: {}", c.count)).with_on_clicked(
///         |model| {
///             model.with_mut(|c| c.count += 1);
///             model.notify();
///         },
///     ),
/// );
/// append_view(&doc, &doc.body(), &*button);
///
/// let control = doc.children(&doc.body())[0];
/// doc.click(&control);
/// assert_eq!(doc.text(&control), "clicks: 1");
/// ```
pub struct Button<D: Document, T> {
    doc: D,
    model: Model<T>,
    controller: ButtonController<T>,
    node: RefCell<Option<D::Node>>,
    weak_self: Weak<Self>,
}

impl<D, T> Button<D, T>
where
    D: Document + 'static,
    T: 'static,
{
    /// Build a button over `model` and register it as an observer.
    pub fn new(doc: D, model: &Model<T>, controller: ButtonController<T>) -> Rc<Self> {
        let button = Rc::new_cyclic(|weak_self| Self {
            doc,
            model: model.clone(),
            controller,
            node: RefCell::new(None),
            weak_self: weak_self.clone(),
        });
        model.add_observer(button.clone());
        button
    }
}

impl<D, T> View<D> for Button<D, T>
where
    D: Document + 'static,
    T: 'static,
{
    fn write_over(&self, placeholder: &D::Node) {
        let node = self.doc.create_element("button");
        let text = self.model.with(|m| (self.controller.get_text)(m));
        self.doc.set_text(&node, &text);
        if let Some(is_enabled) = &self.controller.is_enabled {
            let enabled = self.model.with(|m| is_enabled(m));
            self.doc.set_disabled(&node, !enabled);
        }
        if let Some(get_class) = &self.controller.get_class {
            let class = self.model.with(|m| get_class(m));
            self.doc.set_attribute(&node, "class", &class);
        }
        // Bound once, even without an on_clicked reaction; the lookup
        // happens per activation so all buttons share one policy.
        let weak_self = self.weak_self.clone();
        self.doc.on_click(
            &node,
            Box::new(move || {
                if let Some(button) = weak_self.upgrade() {
                    if let Some(on_clicked) = &button.controller.on_clicked {
                        on_clicked(&button.model);
                    }
                }
            }),
        );
        *self.node.borrow_mut() = Some(node.clone());
        replace_or_skip(&self.doc, placeholder, &node);
    }
}

impl<D, T> Observer for Button<D, T>
where
    D: Document + 'static,
    T: 'static,
{
    /// Patch text, enabled state, and class against the current model.
    ///
    /// # Panics
    ///
    /// Panics if called before [`write_over`](View::write_over).
    fn update(&self) {
        let node = self.node.borrow();
        let node = node
            .as_ref()
            .expect("Button::update called before write_over");
        let text = self.model.with(|m| (self.controller.get_text)(m));
        if text != self.doc.text(node) {
            self.doc.set_text(node, &text);
        }
        if let Some(is_enabled) = &self.controller.is_enabled {
            let enabled = self.model.with(|m| is_enabled(m));
            self.doc.set_disabled(node, !enabled);
        }
        if let Some(get_class) = &self.controller.get_class {
            let class = self.model.with(|m| get_class(m));
            if Some(&class) != self.doc.attribute(node, "class").as_ref() {
                self.doc.set_attribute(node, "class", &class);
            }
        }
    }
}
