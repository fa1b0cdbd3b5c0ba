//! Observable state container.
//!
//! Holds one value behind an `Rc` and a single change subscriber. Every
//! `set` swaps the whole value and notifies the subscriber synchronously,
//! once. Subscribing again replaces the previous subscriber.

use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Box<dyn FnMut(&T)>;

pub struct State<T> {
    value: Rc<T>,
    on_change: Option<Subscriber<T>>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(value),
            on_change: None,
        }
    }

    /// The current value, shared rather than copied.
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&self.value)
    }

    /// Replace the held value and notify the subscriber, if any.
    pub fn set(&mut self, value: T) {
        self.value = Rc::new(value);
        tracing::trace!("state replaced");
        if let Some(callback) = self.on_change.as_mut() {
            callback(&*self.value);
        }
    }

    /// Compute the next value from the current one, then `set` it.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&*self.value);
        self.set(next);
    }

    /// Register `callback` as the only subscriber. It receives the freshly
    /// set value.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn unsubscribe(&mut self) {
        self.on_change = None;
    }

    pub fn is_subscribed(&self) -> bool {
        self.on_change.is_some()
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.value)
            .field("subscribed", &self.on_change.is_some())
            .finish()
    }
}
