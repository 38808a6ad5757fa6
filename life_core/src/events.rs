// events.rs - Generation-changed observers and the render collaborator

/// Handle returned by [`Observers::subscribe`]. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<T> = Box<dyn FnMut(T)>;

/// Observer list owned by whoever emits the event.
pub struct Observers<T: Copy> {
    next_id: u64,
    callbacks: Vec<(Subscription, Callback<T>)>,
}

impl<T: Copy> Observers<T> {
    pub fn new() -> Self {
        Self { next_id: 0, callbacks: Vec::new() }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(T) + 'static) -> Subscription {
        let handle = Subscription(self.next_id);
        self.next_id += 1;
        self.callbacks.push((handle, Box::new(callback)));
        handle
    }

    /// Removes a subscriber. Returns `false` if the handle was not (or no
    /// longer) subscribed.
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(h, _)| *h != handle);
        self.callbacks.len() != before
    }

    /// Delivers `value` to every subscriber in subscription order.
    pub fn emit(&mut self, value: T) {
        for (_, callback) in &mut self.callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize { self.callbacks.len() }
    pub fn is_empty(&self) -> bool { self.callbacks.is_empty() }
}

impl<T: Copy> Default for Observers<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Copy> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("subscribers", &self.callbacks.len()).finish()
    }
}

/// Receives visual create/destroy notifications for cells. Owns every
/// rendering concern; the simulation never reads it back.
pub trait CellRenderer {
    fn create_visual(&mut self, x: usize, y: usize);
    fn destroy_visual(&mut self, x: usize, y: usize);
}

/// Renderer that draws nothing. Used headless and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl CellRenderer for NullRenderer {
    fn create_visual(&mut self, _x: usize, _y: usize) {}
    fn destroy_visual(&mut self, _x: usize, _y: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();
        let a = Rc::clone(&seen);
        observers.subscribe(move |v: u64| a.borrow_mut().push(("a", v)));
        let b = Rc::clone(&seen);
        observers.subscribe(move |v: u64| b.borrow_mut().push(("b", v)));

        observers.emit(7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();
        let c = Rc::clone(&count);
        let handle = observers.subscribe(move |_: u64| *c.borrow_mut() += 1);

        observers.emit(1);
        assert!(observers.unsubscribe(handle));
        observers.emit(2);
        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
        assert!(!observers.unsubscribe(handle));
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut observers: Observers<u64> = Observers::new();
        let first = observers.subscribe(|_| {});
        observers.unsubscribe(first);
        let second = observers.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(observers.len(), 1);
    }
}
