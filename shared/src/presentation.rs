use serde::{Deserialize, Serialize};

use crate::rewards::RewardEntry;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ToneKind {
    Start,
    Win,
}

/// Everything the spin controller asks of the display.
///
/// Calls are fire-and-forget: implementations must swallow (and log) their
/// own failures, in particular for `play_tone`, so a broken side effect can
/// never stall or abort a spin.
pub trait PresentationPort {
    fn apply_rotation(&mut self, degrees: f64);
    fn begin_spin_visual(&mut self);
    fn end_spin_visual(&mut self);
    fn disable_input(&mut self);
    fn enable_input(&mut self);
    fn reveal_result(&mut self, reward: &RewardEntry);
    fn hide_result(&mut self);
    fn play_tone(&mut self, kind: ToneKind);
    fn update_stats(&mut self, total_spins: u64, last_reward_name: Option<&str>);
}
