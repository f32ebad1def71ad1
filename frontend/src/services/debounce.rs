use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs only the most recent call once `wait_ms` pass without another call.
///
/// Each instance owns its own timer, so two debounced handlers never cancel
/// each other.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule `action`, cancelling whatever was pending.
    pub fn call<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        // Dropping the previous Timeout clears it. A timeout that already
        // fired is left in the slot until the next call replaces it.
        let timeout = Timeout::new(self.wait_ms, action);
        *self.pending.borrow_mut() = Some(timeout);
    }
}
