use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Откладывает вызов; новый вызов в пределах окна отменяет предыдущий
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F: FnOnce() + 'static>(&self, f: F) {
        // Drop предыдущего Timeout снимает таймер
        let previous = self.pending.replace(Some(Timeout::new(self.delay_ms, f)));
        drop(previous);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
