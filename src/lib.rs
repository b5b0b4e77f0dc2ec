//! A minimal observer-based view binding library.
//!
//! Models are plain data wrapped in an observable handle; views render a
//! model's state over a placeholder node in a host document tree and patch
//! that rendering in place whenever the model notifies its observers. The
//! document tree is an injected capability ([`Document`]), so the same view
//! code runs against a browser DOM binding, any retained node tree, or the
//! in-memory [`FakeDocument`] used for testing.
//!
//! Views are parameterized by controllers: small structs of pure projection
//! functions from model data to presentation values, plus optional event
//! reactions. A projection that is absent simply means the feature is
//! absent.
//!
//! ## Example
//!
//! A counter behind a dropdown: the dropdown's button shows the count and
//! toggles an increment button in and out of view.
//!
//! ```rust
//! use std::rc::Rc;
//! use rivet_mvc::{
//!     append_view, Button, ButtonController, Document, DropdownButton, DropdownController,
//!     FakeDocument, Model, View,
//! };
//!
//! struct Counter { count: i32 }
//!
//! let doc = FakeDocument::new();
//! let model = Model::new(Counter { count: 5 });
//!
//! let dropdown = DropdownButton::new(
//!     doc.clone(),
//!     &model,
//!     DropdownController::new(
//!         |c: &Counter| format!("Clicks: {}", c.count),
//!         {
//!             let doc = doc.clone();
//!             move |model| {
//!                 Button::new(
//!                     doc.clone(),
//!                     model,
//!                     ButtonController::new(|_: &Counter| "++".to_string()).with_on_clicked(
//!                         |model| {
//!                             model.with_mut(|c| c.count += 1);
//!                             model.notify();
//!                         },
//!                     ),
//!                 ) as Rc<dyn View<FakeDocument>>
//!             }
//!         },
//!     ),
//! );
//! append_view(&doc, &doc.body(), &*dropdown);
//!
//! // Outer div: [button, hidden container].
//! let outer = doc.children(&doc.body())[0];
//! let toggle = doc.children(&outer)[0];
//! let container = doc.children(&outer)[1];
//! assert_eq!(doc.text(&toggle), "Clicks: 5");
//! assert!(doc.is_hidden(&container));
//!
//! // Expand, then increment through the nested button.
//! doc.click(&toggle);
//! assert!(!doc.is_hidden(&container));
//! let increment = doc.children(&container)[0];
//! doc.click(&increment);
//! assert_eq!(doc.text(&toggle), "Clicks: 6");
//! ```

mod button;
mod document;
mod dropdown;
mod label;
mod model;
mod view;

pub use button::{Button, ButtonController};
pub use document::Document;
pub use dropdown::{DropdownButton, DropdownController};
pub use label::{Label, LabelController};
pub use model::{Model, Observer};
pub use view::{append_view, View};

// Test utilities (only available with the 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use document::{FakeDocument, FakeNode};
