//! Timer seam between the spin controller and whatever clock drives it.

use serde::{Deserialize, Serialize};

/// Continuations the controller asks to be woken up for.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The spin animation for `spin_id` has run its full duration.
    SpinComplete { spin_id: u64 },
    /// Grace period after closing the result panel has elapsed.
    Respin,
}

pub trait Scheduler {
    /// Deliver `event` back to the controller after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, event: TimerEvent);

    /// Current time in milliseconds, used to stamp spin sessions.
    fn now_ms(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTimer {
    due_ms: u64,
    seq: u64,
    event: TimerEvent,
}

/// Virtual clock: timers only fire when the owner advances time.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_events(&self) -> Vec<TimerEvent> {
        self.pending.iter().map(|timer| timer.event).collect()
    }

    /// Removes the earliest timer due at or before `until_ms` and moves the
    /// clock to its due time. Timers due together fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerEvent> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(position, _)| position)?;

        let timer = self.pending.remove(position);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.event)
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) {
        let timer = PendingTimer {
            due_ms: self.now_ms + delay_ms as u64,
            seq: self.next_seq,
            event,
        };
        self.next_seq += 1;
        self.pending.push(timer);
    }

    fn now_ms(&self) -> f64 {
        self.now_ms as f64
    }
}
