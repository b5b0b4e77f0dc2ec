//! Label view: a single text node driven by a model.

use std::cell::RefCell;
use std::rc::Rc;

use crate::view::replace_or_skip;
use crate::{Document, Model, Observer, View};

/// Projections a [`Label`] reads its presentation from.
///
/// `get_text` is required; `get_class` is optional, and its absence means
/// the label never touches the class attribute.
pub struct LabelController<T> {
    pub get_text: Box<dyn Fn(&T) -> String>,
    pub get_class: Option<Box<dyn Fn(&T) -> String>>,
}

impl<T> LabelController<T> {
    /// Controller with only the required text projection.
    pub fn new(get_text: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            get_text: Box::new(get_text),
            get_class: None,
        }
    }

    /// Add a class projection.
    pub fn with_class(mut self, get_class: impl Fn(&T) -> String + 'static) -> Self {
        self.get_class = Some(Box::new(get_class));
        self
    }
}

/// A leaf view rendering one `span` of text.
///
/// # Example
///
/// ```rust
/// use rivet_mvc::{append_view, Document, FakeDocument, Label, LabelController, Model};
///
/// struct Greeting { name: String }
///
/// let doc = FakeDocument::new();
/// let model = Model::new(Greeting { name: "Boris".to_string() });
/// let label = Label::new(
///     doc.clone(),
///     &model,
///     LabelController::new(|g: &Greeting| format!("hello, {}", g.name)),
/// );
/// append_view(&doc, &doc.body(), &*label);
///
/// let span = doc.children(&doc.body())[0];
/// assert_eq!(doc.text(&span), "hello, Boris");
///
/// model.with_mut(|g| g.name = "Hilda".to_string());
/// model.notify();
/// assert_eq!(doc.text(&span), "hello, Hilda");
/// ```
pub struct Label<D: Document, T> {
    doc: D,
    model: Model<T>,
    controller: LabelController<T>,
    span: RefCell<Option<D::Node>>,
}

impl<D, T> Label<D, T>
where
    D: Document + 'static,
    T: 'static,
{
    /// Build a label over `model` and register it as an observer.
    pub fn new(doc: D, model: &Model<T>, controller: LabelController<T>) -> Rc<Self> {
        let label = Rc::new(Self {
            doc,
            model: model.clone(),
            controller,
            span: RefCell::new(None),
        });
        model.add_observer(label.clone());
        label
    }
}

impl<D, T> View<D> for Label<D, T>
where
    D: Document + 'static,
    T: 'static,
{
    fn write_over(&self, placeholder: &D::Node) {
        let span = self.doc.create_element("span");
        let text = self.model.with(|m| (self.controller.get_text)(m));
        self.doc.set_text(&span, &text);
        if let Some(get_class) = &self.controller.get_class {
            let class = self.model.with(|m| get_class(m));
            self.doc.set_attribute(&span, "class", &class);
        }
        *self.span.borrow_mut() = Some(span.clone());
        replace_or_skip(&self.doc, placeholder, &span);
    }
}

impl<D, T> Observer for Label<D, T>
where
    D: Document + 'static,
    T: 'static,
{
    /// Patch text and class in place, writing only values that differ from
    /// what is currently rendered.
    ///
    /// # Panics
    ///
    /// Panics if called before [`write_over`](View::write_over); there is
    /// nothing to patch yet, which is a programmer error.
    fn update(&self) {
        let span = self.span.borrow();
        let span = span
            .as_ref()
            .expect("Label::update called before write_over");
        let text = self.model.with(|m| (self.controller.get_text)(m));
        if text != self.doc.text(span) {
            self.doc.set_text(span, &text);
        }
        if let Some(get_class) = &self.controller.get_class {
            let class = self.model.with(|m| get_class(m));
            if Some(&class) != self.doc.attribute(span, "class").as_ref() {
                self.doc.set_attribute(span, "class", &class);
            }
        }
    }
}
