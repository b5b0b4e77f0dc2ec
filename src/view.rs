//! The contract every renderable thing implements.

use crate::{Document, Observer};

/// A renderable unit bound to a model.
///
/// A view does two things:
///
/// - [`write_over`](Self::write_over) renders the view and replaces an
///   existing placeholder node with the rendering. Writing over, rather
///   than appending, lets a view occupy a slot reserved by a generic
///   placeholder without the caller knowing the view's output shape, and
///   makes composite views simpler.
/// - [`update`](Observer::update) (from the [`Observer`] supertrait)
///   patches the previous rendering in place against the current model
///   state, touching only what actually changed so transient host state
///   (focus, text selection) survives.
///
/// Views register themselves on their model at construction, so a plain
/// `model.notify()` reaches every view built over that model.
pub trait View<D: Document>: Observer {
    /// Render this view and replace `placeholder` with the rendering.
    ///
    /// If `placeholder` has no parent the replacement is silently skipped;
    /// the view still retains its rendering for later updates.
    fn write_over(&self, placeholder: &D::Node);
}

/// Append `view` as a new last child of `parent`.
///
/// Appends a placeholder and immediately writes the view over it, so after
/// the call `parent` has gained exactly one child: the view's own rendered
/// root.
pub fn append_view<D, V>(doc: &D, parent: &D::Node, view: &V)
where
    D: Document,
    V: View<D> + ?Sized,
{
    let placeholder = doc.create_element("div");
    doc.append_child(parent, &placeholder);
    view.write_over(&placeholder);
}

/// Swap a freshly rendered root in for `placeholder`, tolerating detached
/// placeholders per the write-over contract.
pub(crate) fn replace_or_skip<D: Document>(doc: &D, placeholder: &D::Node, rendered: &D::Node) {
    if !doc.replace(placeholder, rendered) {
        log::debug!("write_over target has no parent; leaving tree untouched");
    }
}
