//! Observable model wrapper and the observer contract.

use std::cell::RefCell;
use std::rc::Rc;

/// Reaction to a model change.
///
/// Anything registered on a [`Model`] must implement this trait. Every view
/// in this crate is an observer; applications can register their own
/// observers alongside views (e.g. to log or persist on change).
///
/// Observers are compared by allocation identity, never by value.
pub trait Observer {
    /// React to a change in the observed model.
    ///
    /// Called synchronously from [`Model::notify`]. Reading the model from
    /// inside `update` is fine; so is triggering a further `notify`, which
    /// runs to completion depth-first before the outer call returns.
    fn update(&self);
}

struct Shared<T> {
    data: RefCell<T>,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
}

/// A shared handle to application data with change notification.
///
/// `Model` owns an observer set and the application data it wraps. Cloning
/// the handle is cheap and yields another handle to the same data and the
/// same observer set; the model is single-threaded by design.
///
/// Mutation and notification are separate steps, so several mutations can
/// be batched under a single fan-out:
///
/// ```rust
/// use rivet_mvc::Model;
///
/// struct Counter { count: i32 }
///
/// let model = Model::new(Counter { count: 0 });
/// model.with_mut(|c| c.count += 1);
/// model.notify();
/// assert_eq!(model.with(|c| c.count), 1);
/// ```
pub struct Model<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Model<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> Model<T> {
    /// Wrap `data` in a new model with an empty observer set.
    pub fn new(data: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                data: RefCell::new(data),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register an observer.
    ///
    /// Registration is idempotent per identity: adding the same allocation
    /// twice leaves a single registration, and [`notify`](Self::notify)
    /// still delivers exactly one `update` to it.
    ///
    /// Observers are held strongly and are never removed automatically; an
    /// observer registered here lives at least as long as the model unless
    /// [`delete_observer`](Self::delete_observer) is called.
    pub fn add_observer(&self, observer: Rc<dyn Observer>) {
        let mut observers = self.shared.observers.borrow_mut();
        if !observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            observers.push(observer);
        }
    }

    /// Remove an observer by identity. No-op if it was never registered.
    pub fn delete_observer(&self, observer: &Rc<dyn Observer>) {
        self.shared
            .observers
            .borrow_mut()
            .retain(|o| !Rc::ptr_eq(o, observer));
    }

    /// Call [`Observer::update`] on every currently registered observer.
    ///
    /// The fan-out is synchronous and returns only after every observer has
    /// completed. The observer set is snapshotted on entry, so an observer
    /// added or removed from inside an `update` call takes effect on the
    /// next `notify`, not the in-progress one. Ordering within a pass is
    /// unspecified.
    pub fn notify(&self) {
        let snapshot: Vec<Rc<dyn Observer>> = self.shared.observers.borrow().clone();
        log::trace!("notifying {} observer(s)", snapshot.len());
        for observer in &snapshot {
            observer.update();
        }
    }

    /// Read the wrapped data through a closure.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.data.borrow())
    }

    /// Mutate the wrapped data through a closure.
    ///
    /// Does not notify; call [`notify`](Self::notify) once all mutations
    /// for the change are in place.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.shared.data.borrow_mut())
    }
}
