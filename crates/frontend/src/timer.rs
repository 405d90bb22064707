//! `gloo` interval behind the repeating timer interface

use dash_auth_core::{RepeatingTimer, Tick, TickFn};
use gloo::timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;

/// Repeating timer backed by `setInterval`.
///
/// Dropping the timer clears the interval, so a component holding one stops
/// polling when it unmounts.
#[derive(Default)]
pub struct IntervalTimer {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl RepeatingTimer for IntervalTimer {
    fn start(&mut self, period_ms: u32, mut tick: TickFn) {
        self.stop();

        let slot = Rc::downgrade(&self.interval);
        let interval = Interval::new(period_ms, move || {
            if tick() == Tick::Continue {
                return;
            }
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let Some(interval) = slot.borrow_mut().take() else {
                return;
            };
            // Clear now, but free the closure only after this callback returns
            let closure = interval.cancel();
            wasm_bindgen_futures::spawn_local(async move {
                drop(closure);
            });
        });

        *self.interval.borrow_mut() = Some(interval);
    }

    fn stop(&mut self) {
        self.interval.borrow_mut().take();
    }

    fn is_running(&self) -> bool {
        self.interval.borrow().is_some()
    }
}
