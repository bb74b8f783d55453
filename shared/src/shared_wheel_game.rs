//! Spin controller: the idle/spinning state machine behind the prize wheel.
//!
//! A trigger while idle picks a reward, plans the landing angle, starts the
//! visuals and schedules its own completion; the completion reveals the reward
//! and returns the wheel to idle. Triggers that arrive mid-spin are dropped.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::presentation::{PresentationPort, ToneKind};
use crate::random::RandomSource;
use crate::rewards::{RewardEntry, RewardTable};
use crate::rotation::plan_total_rotation;
use crate::scheduler::{ManualScheduler, Scheduler, TimerEvent};
use crate::selector::select_reward;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinState {
    Idle,
    Spinning,
}

/// Display-facing snapshot of the controller.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ControllerState {
    pub busy: bool,
    pub total_spins: u64,
    pub last_reward_name: Option<String>,
}

/// One in-flight spin. Created on trigger, consumed by its completion.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SpinSession {
    pub spin_id: u64,
    pub reward_index: usize,
    pub reward: RewardEntry,
    pub rotation_degrees: f64,
    pub started_at_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinOutcome {
    Started {
        spin_id: u64,
        reward_index: usize,
        rotation_degrees: f64,
    },
    /// A spin was already in flight.
    Ignored,
}

impl SpinOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, SpinOutcome::Started { .. })
    }
}

/// Keys the wheel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelKey {
    Enter,
    Space,
    Escape,
    Other,
}

impl WheelKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => WheelKey::Enter,
            " " | "Spacebar" => WheelKey::Space,
            "Escape" | "Esc" => WheelKey::Escape,
            _ => WheelKey::Other,
        }
    }
}

pub struct SpinController<P, R, S> {
    table: RewardTable,
    config: WheelConfig,
    port: P,
    rng: R,
    scheduler: S,
    state: ControllerState,
    session: Option<SpinSession>,
    result_visible: bool,
    respin_pending: bool,
    next_spin_id: u64,
}

impl<P, R, S> SpinController<P, R, S>
where
    P: PresentationPort,
    R: RandomSource,
    S: Scheduler,
{
    pub fn new(table: RewardTable, config: WheelConfig, port: P, rng: R, scheduler: S) -> Self {
        Self {
            table,
            config,
            port,
            rng,
            scheduler,
            state: ControllerState::default(),
            session: None,
            result_visible: false,
            respin_pending: false,
            next_spin_id: 1,
        }
    }

    pub fn table(&self) -> &RewardTable {
        &self.table
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn state(&self) -> SpinState {
        if self.state.busy {
            SpinState::Spinning
        } else {
            SpinState::Idle
        }
    }

    pub fn snapshot(&self) -> &ControllerState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.busy
    }

    pub fn total_spins(&self) -> u64 {
        self.state.total_spins
    }

    pub fn last_reward_name(&self) -> Option<&str> {
        self.state.last_reward_name.as_deref()
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// Idle -> Spinning. The busy flag is checked and set before anything is
    /// scheduled, so at most one spin is ever in flight.
    pub fn spin(&mut self) -> SpinOutcome {
        if self.state.busy {
            debug!("Spin requested while the wheel is turning, ignoring");
            return SpinOutcome::Ignored;
        }

        self.state.busy = true;
        self.port.disable_input();
        self.port.play_tone(ToneKind::Start);

        let (reward_index, reward) = select_reward(&self.table, &mut self.rng);
        let reward = reward.clone();
        let rotation_degrees =
            plan_total_rotation(reward_index, self.table.len(), &self.config, &mut self.rng);

        self.port.apply_rotation(rotation_degrees);
        self.port.begin_spin_visual();

        let spin_id = self.next_spin_id;
        self.next_spin_id += 1;

        info!(
            "Spin {} started: {} (segment {}), rotating {:.1} degrees",
            spin_id, reward.name, reward_index, rotation_degrees
        );

        self.session = Some(SpinSession {
            spin_id,
            reward_index,
            reward,
            rotation_degrees,
            started_at_ms: self.scheduler.now_ms(),
        });
        self.scheduler
            .schedule(self.config.spin_duration_ms, TimerEvent::SpinComplete { spin_id });

        SpinOutcome::Started {
            spin_id,
            reward_index,
            rotation_degrees,
        }
    }

    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::SpinComplete { spin_id } => self.complete(spin_id),
            TimerEvent::Respin => {
                self.respin_pending = false;
                self.spin();
            }
        }
    }

    /// Closes the result panel if it is open. Returns whether anything closed.
    pub fn dismiss(&mut self) -> bool {
        if !self.result_visible {
            return false;
        }
        self.result_visible = false;
        self.port.hide_result();
        true
    }

    /// Close the result, then spin once the close animation has settled.
    /// Repeated requests during the grace period collapse into one spin.
    pub fn spin_again(&mut self) -> bool {
        if self.respin_pending {
            debug!("Spin again already pending, ignoring");
            return false;
        }
        self.dismiss();
        self.respin_pending = true;
        self.scheduler
            .schedule(self.config.respin_delay_ms, TimerEvent::Respin);
        true
    }

    /// True while Enter/Space would start a spin: idle and no result showing.
    pub fn accepts_spin_key(&self) -> bool {
        !self.state.busy && !self.result_visible
    }

    /// Enter/Space spin only from a clean idle wheel; Escape closes the result.
    /// Returns true when the key was acted on.
    pub fn handle_key(&mut self, key: WheelKey) -> bool {
        match key {
            WheelKey::Enter | WheelKey::Space => {
                if !self.accepts_spin_key() {
                    return false;
                }
                self.spin().is_started()
            }
            WheelKey::Escape => self.dismiss(),
            WheelKey::Other => false,
        }
    }

    /// Spinning -> Idle.
    fn complete(&mut self, spin_id: u64) {
        let session = match self.session.take() {
            Some(session) if session.spin_id == spin_id => session,
            other => {
                debug!("Ignoring completion for stale spin {}", spin_id);
                self.session = other;
                return;
            }
        };

        self.state.busy = false;
        self.port.enable_input();
        self.port.end_spin_visual();

        self.state.total_spins += 1;
        self.state.last_reward_name = Some(session.reward.name.clone());
        self.port
            .update_stats(self.state.total_spins, self.state.last_reward_name.as_deref());

        self.port.play_tone(ToneKind::Win);
        self.port.reveal_result(&session.reward);
        self.result_visible = true;

        info!(
            "Spin {} landed on {} ({} spins total)",
            spin_id, session.reward.name, self.state.total_spins
        );
    }
}

impl<P, R> SpinController<P, R, ManualScheduler>
where
    P: PresentationPort,
    R: RandomSource,
{
    /// Moves the virtual clock forward, firing every timer that comes due,
    /// including ones scheduled by earlier timers within the window.
    pub fn advance_time(&mut self, ms: u64) {
        let until = self.scheduler.now() + ms;
        while let Some(event) = self.scheduler.pop_due(until) {
            self.handle_timer(event);
        }
        self.scheduler.set_now(until);
    }
}
