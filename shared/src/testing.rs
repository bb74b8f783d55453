// Test doubles shared by the unit tests

use crate::presentation::{PresentationPort, ToneKind};
use crate::rewards::{RewardEntry, RewardTable};

pub fn weights_table(weights: &[f64]) -> RewardTable {
    let entries = weights
        .iter()
        .enumerate()
        .map(|(i, w)| {
            RewardEntry::new(&format!("Reward {}", i), *w, &format!("icon-{}", i), "#000000", &format!("You won reward {}", i))
        })
        .collect();
    RewardTable::new(entries).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    ApplyRotation(f64),
    BeginSpinVisual,
    EndSpinVisual,
    DisableInput,
    EnableInput,
    RevealResult(RewardEntry),
    HideResult,
    PlayTone(ToneKind),
    UpdateStats(u64, Option<String>),
}

#[derive(Debug, Default)]
pub struct RecordingPort {
    pub calls: Vec<PortCall>,
}

impl RecordingPort {
    pub fn take(&mut self) -> Vec<PortCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn count(&self, wanted: &PortCall) -> usize {
        self.calls.iter().filter(|call| *call == wanted).count()
    }
}

impl PresentationPort for RecordingPort {
    fn apply_rotation(&mut self, degrees: f64) {
        self.calls.push(PortCall::ApplyRotation(degrees));
    }

    fn begin_spin_visual(&mut self) {
        self.calls.push(PortCall::BeginSpinVisual);
    }

    fn end_spin_visual(&mut self) {
        self.calls.push(PortCall::EndSpinVisual);
    }

    fn disable_input(&mut self) {
        self.calls.push(PortCall::DisableInput);
    }

    fn enable_input(&mut self) {
        self.calls.push(PortCall::EnableInput);
    }

    fn reveal_result(&mut self, reward: &RewardEntry) {
        self.calls.push(PortCall::RevealResult(reward.clone()));
    }

    fn hide_result(&mut self) {
        self.calls.push(PortCall::HideResult);
    }

    fn play_tone(&mut self, kind: ToneKind) {
        self.calls.push(PortCall::PlayTone(kind));
    }

    fn update_stats(&mut self, total_spins: u64, last_reward_name: Option<&str>) {
        self.calls.push(PortCall::UpdateStats(total_spins, last_reward_name.map(str::to_string)));
    }
}
