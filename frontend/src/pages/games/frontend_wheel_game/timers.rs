use gloo_timers::callback::Timeout;
use shared::{Scheduler, TimerEvent};
use yew::Callback;

/// Browser-clock scheduler: each timer fires once and hands its event back to
/// the wheel component as a message.
pub struct TimeoutScheduler {
    on_fire: Callback<TimerEvent>,
}

impl TimeoutScheduler {
    pub fn new(on_fire: Callback<TimerEvent>) -> Self {
        Self { on_fire }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) {
        let on_fire = self.on_fire.clone();
        let timeout = Timeout::new(delay_ms, move || {
            on_fire.emit(event);
        });
        // Spins cannot be cancelled, so the timer never needs a handle
        std::mem::forget(timeout);
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
