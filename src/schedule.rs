/// Timer handles for debounced and delayed work
use std::cell::RefCell;

use gloo::timers::callback::Timeout;

/// Runs only the most recently scheduled task, once `delay_ms` passes
/// without another call.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Debouncer {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn schedule<F: FnOnce() + 'static>(&self, task: F) {
        let timeout = Timeout::new(self.delay_ms, task);
        // Dropping the previous handle clears its timer
        drop(self.pending.replace(Some(timeout)));
    }

    pub fn cancel(&self) {
        drop(self.pending.take());
    }
}

/// A set of timers cancelled together
#[derive(Default)]
pub struct TimerGroup {
    timers: RefCell<Vec<Timeout>>,
}

impl TimerGroup {
    pub fn add<F: FnOnce() + 'static>(&self, delay_ms: u32, task: F) {
        self.timers.borrow_mut().push(Timeout::new(delay_ms, task));
    }

    pub fn cancel_all(&self) {
        self.timers.borrow_mut().clear();
    }
}

/// Fire-and-forget delayed task
pub fn after<F: FnOnce() + 'static>(delay_ms: u32, task: F) {
    let _ = Timeout::new(delay_ms, task).forget();
}
