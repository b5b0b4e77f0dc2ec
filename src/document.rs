//! Document tree abstraction that views render into.

use std::rc::Rc;

#[cfg(any(test, feature = "testing"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "testing"))]
use std::collections::BTreeMap;

/// Host document tree, injected into every view.
///
/// Implement this trait to bind views to your document system (a browser
/// DOM via wasm bindings, a retained scene tree, etc.). Views never touch a
/// global document; they only call through the handle they were constructed
/// with, which keeps them host-independent and testable against
/// [`FakeDocument`].
///
/// All methods are infallible: a handle passed back into the document is
/// expected to name a node that document created.
pub trait Document {
    /// Node handle. Cheap to clone; names a node, does not own it.
    type Node: Clone + 'static;

    /// Create a detached element with the given tag.
    fn create_element(&self, tag: &str) -> Self::Node;

    /// Current text content of a node.
    fn text(&self, node: &Self::Node) -> String;

    /// Replace a node's text content.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Current value of an attribute, or `None` if it was never set.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Set the disabled state of an interactive control.
    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Set whether a node (and its subtree) is hidden.
    fn set_hidden(&self, node: &Self::Node, hidden: bool);

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Replace `old` with `new` in `old`'s parent.
    ///
    /// Returns `false` without touching the tree when `old` has no parent.
    fn replace(&self, old: &Self::Node, new: &Self::Node) -> bool;

    /// Register a callback invoked on every activation (click) of `node`.
    ///
    /// Callbacks accumulate; registering twice means two invocations per
    /// activation. Delivery is synchronous.
    fn on_click(&self, node: &Self::Node, handler: Box<dyn Fn()>);
}

/// Delegating impl so a shared (or mocked) document can be handed to views.
impl<D: Document + ?Sized> Document for Rc<D> {
    type Node = D::Node;

    fn create_element(&self, tag: &str) -> Self::Node {
        (**self).create_element(tag)
    }

    fn text(&self, node: &Self::Node) -> String {
        (**self).text(node)
    }

    fn set_text(&self, node: &Self::Node, text: &str) {
        (**self).set_text(node, text)
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        (**self).attribute(node, name)
    }

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) {
        (**self).set_attribute(node, name, value)
    }

    fn set_disabled(&self, node: &Self::Node, disabled: bool) {
        (**self).set_disabled(node, disabled)
    }

    fn set_hidden(&self, node: &Self::Node, hidden: bool) {
        (**self).set_hidden(node, hidden)
    }

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) {
        (**self).append_child(parent, child)
    }

    fn replace(&self, old: &Self::Node, new: &Self::Node) -> bool {
        (**self).replace(old, new)
    }

    fn on_click(&self, node: &Self::Node, handler: Box<dyn Fn()>) {
        (**self).on_click(node, handler)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Handle to a node in a [`FakeDocument`].
///
/// Only available with the `testing` feature or during tests.
///
/// Handles compare equal exactly when they name the same node, so tests can
/// assert that an update patched a node in place rather than replacing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeNode(usize);

#[cfg(any(test, feature = "testing"))]
struct FakeNodeData {
    tag: String,
    text: String,
    attributes: BTreeMap<String, String>,
    disabled: bool,
    hidden: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    click_handlers: Vec<Rc<dyn Fn()>>,
}

#[cfg(any(test, feature = "testing"))]
impl FakeNodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            attributes: BTreeMap::new(),
            disabled: false,
            hidden: false,
            parent: None,
            children: Vec::new(),
            click_handlers: Vec::new(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// In-memory document tree for tests.
///
/// Only available with the `testing` feature or during tests.
///
/// A fresh document holds a single `body` node; use [`body`](Self::body) as
/// the mount point. Cloning the handle yields another handle to the same
/// tree. [`click`](Self::click) dispatches a node's registered handlers
/// synchronously, outside any internal borrow, so handlers may freely read
/// and mutate the tree.
///
/// # Example
///
/// ```rust
/// use rivet_mvc::{Document, FakeDocument};
///
/// let doc = FakeDocument::new();
/// let span = doc.create_element("span");
/// doc.set_text(&span, "boris");
/// doc.append_child(&doc.body(), &span);
///
/// assert_eq!(doc.children(&doc.body()), vec![span]);
/// assert_eq!(doc.text(&span), "boris");
/// ```
pub struct FakeDocument {
    nodes: Rc<RefCell<Vec<FakeNodeData>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Clone for FakeDocument {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl FakeDocument {
    /// Create a document containing only an empty `body` node.
    pub fn new() -> Self {
        Self {
            nodes: Rc::new(RefCell::new(vec![FakeNodeData::new("body")])),
        }
    }

    /// The root node every fresh document starts with.
    pub fn body(&self) -> FakeNode {
        FakeNode(0)
    }

    /// Tag the node was created with.
    pub fn tag(&self, node: &FakeNode) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    /// Child handles of a node, in document order.
    pub fn children(&self, node: &FakeNode) -> Vec<FakeNode> {
        self.nodes.borrow()[node.0]
            .children
            .iter()
            .map(|&id| FakeNode(id))
            .collect()
    }

    /// Whether the node is reachable from `body`.
    pub fn contains(&self, node: &FakeNode) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = node.0;
        while let Some(parent) = nodes[current].parent {
            current = parent;
        }
        current == 0
    }

    /// Disabled state of a control node.
    pub fn is_disabled(&self, node: &FakeNode) -> bool {
        self.nodes.borrow()[node.0].disabled
    }

    /// Hidden state of a node.
    pub fn is_hidden(&self, node: &FakeNode) -> bool {
        self.nodes.borrow()[node.0].hidden
    }

    /// Dispatch an activation event to a node.
    ///
    /// Invokes every handler registered via
    /// [`Document::on_click`] on that node, in registration order, and
    /// returns once all have completed.
    pub fn click(&self, node: &FakeNode) {
        // Snapshot so handlers can register further handlers or mutate the
        // tree without tripping a RefCell borrow.
        let handlers: Vec<Rc<dyn Fn()>> = self.nodes.borrow()[node.0].click_handlers.clone();
        for handler in &handlers {
            handler();
        }
    }

    fn detach(nodes: &mut Vec<FakeNodeData>, id: usize) {
        if let Some(parent) = nodes[id].parent.take() {
            nodes[parent].children.retain(|&child| child != id);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Document for FakeDocument {
    type Node = FakeNode;

    fn create_element(&self, tag: &str) -> FakeNode {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNodeData::new(tag));
        FakeNode(nodes.len() - 1)
    }

    fn text(&self, node: &FakeNode) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    fn set_text(&self, node: &FakeNode, text: &str) {
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }

    fn attribute(&self, node: &FakeNode, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &FakeNode, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_disabled(&self, node: &FakeNode, disabled: bool) {
        self.nodes.borrow_mut()[node.0].disabled = disabled;
    }

    fn set_hidden(&self, node: &FakeNode, hidden: bool) {
        self.nodes.borrow_mut()[node.0].hidden = hidden;
    }

    fn append_child(&self, parent: &FakeNode, child: &FakeNode) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach(&mut nodes, child.0);
        nodes[parent.0].children.push(child.0);
        nodes[child.0].parent = Some(parent.0);
    }

    fn replace(&self, old: &FakeNode, new: &FakeNode) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes[old.0].parent else {
            return false;
        };
        Self::detach(&mut nodes, new.0);
        let slot = nodes[parent]
            .children
            .iter()
            .position(|&child| child == old.0);
        match slot {
            Some(slot) => {
                nodes[parent].children[slot] = new.0;
                nodes[new.0].parent = Some(parent);
                nodes[old.0].parent = None;
                true
            }
            None => false,
        }
    }

    fn on_click(&self, node: &FakeNode, handler: Box<dyn Fn()>) {
        self.nodes.borrow_mut()[node.0]
            .click_handlers
            .push(Rc::from(handler));
    }
}
