//! Timer-based helpers built on `gloo-timers`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Runs only the most recently scheduled callback, `delay_ms` after it was
/// scheduled.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: StoredValue::new_local(None),
            delay_ms,
        }
    }

    /// Schedule `callback`, cancelling whatever was pending.
    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        // Dropping a `Timeout` clears it.
        self.pending
            .set_value(Some(Timeout::new(self.delay_ms, callback)));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}

/// Follows `flag`, but only turns on once it has stayed on for `delay_ms`.
/// Turning off is immediate. A pending timer dies with the owning scope.
pub fn delayed_flag(flag: Signal<bool>, delay_ms: u32) -> Signal<bool> {
    let shown = RwSignal::new(false);
    let timer = Debouncer::new(delay_ms);

    Effect::new(move || {
        if flag.get() {
            timer.schedule(move || shown.set(true));
        } else {
            timer.cancel();
            shown.set(false);
        }
    });

    shown.into()
}
