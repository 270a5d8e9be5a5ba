//! Browser-backed scheduler
//!
//! Each scheduled payload owns a `gloo_timers` timeout. Cancelling drops the
//! timeout, which clears it.

use gloo_timers::callback::Timeout;
use kk_wedding::{Deferred, Scheduler, TimerId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct BrowserScheduler {
    next_id: u64,
    pending: Rc<RefCell<HashMap<u64, Timeout>>>,
    dispatch: Rc<dyn Fn(Deferred)>,
}

impl BrowserScheduler {
    /// `dispatch` runs when a payload comes due
    pub fn new(dispatch: impl Fn(Deferred) + 'static) -> Self {
        Self {
            next_id: 0,
            pending: Rc::new(RefCell::new(HashMap::new())),
            dispatch: Rc::new(dispatch),
        }
    }
}

impl Scheduler<Deferred> for BrowserScheduler {
    fn schedule(&mut self, delay_ms: u32, payload: Deferred) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;

        let pending = Rc::clone(&self.pending);
        let dispatch = Rc::clone(&self.dispatch);
        let timeout = Timeout::new(delay_ms, move || {
            // Already fired: forget it so the running callback is not freed
            if let Some(fired) = pending.borrow_mut().remove(&id) {
                fired.forget();
            }
            dispatch(payload);
        });

        self.pending.borrow_mut().insert(id, timeout);
        TimerId(id)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.borrow_mut().remove(&id.0).is_some()
    }
}
