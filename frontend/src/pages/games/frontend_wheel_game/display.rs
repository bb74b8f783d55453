use shared::{PresentationPort, RewardEntry, ToneKind};

use super::audio::TonePlayer;

const DEGREES_PER_TURN: f64 = 360.0;

/// Everything the wheel page renders, updated by the spin controller through
/// [`PresentationPort`]. The component re-renders from this after each message.
#[derive(Default)]
pub struct WheelDisplay {
    /// Absolute CSS rotation of the wheel face.
    pub rotation: f64,
    pub spinning: bool,
    pub input_enabled: bool,
    pub result: Option<RewardEntry>,
    pub result_open: bool,
    pub total_spins: u64,
    pub last_reward: Option<String>,
    tones: Option<TonePlayer>,
}

impl WheelDisplay {
    pub fn new() -> Self {
        Self {
            input_enabled: true,
            tones: Some(TonePlayer::new()),
            ..Default::default()
        }
    }

    /// Display without sound, for environments with no Web Audio.
    #[cfg(test)]
    pub fn silent() -> Self {
        Self {
            input_enabled: true,
            ..Default::default()
        }
    }
}

impl PresentationPort for WheelDisplay {
    /// `degrees` is relative to the resting position. It is added on top of the
    /// turns already completed so the wheel always moves forward yet lands at
    /// the same spot within the turn.
    fn apply_rotation(&mut self, degrees: f64) {
        let completed_turns = (self.rotation / DEGREES_PER_TURN).ceil();
        self.rotation = completed_turns * DEGREES_PER_TURN + degrees;
    }

    fn begin_spin_visual(&mut self) {
        self.spinning = true;
    }

    fn end_spin_visual(&mut self) {
        self.spinning = false;
    }

    fn disable_input(&mut self) {
        self.input_enabled = false;
    }

    fn enable_input(&mut self) {
        self.input_enabled = true;
    }

    fn reveal_result(&mut self, reward: &RewardEntry) {
        self.result = Some(reward.clone());
        self.result_open = true;
    }

    fn hide_result(&mut self) {
        self.result_open = false;
    }

    fn play_tone(&mut self, kind: ToneKind) {
        if let Some(tones) = self.tones.as_mut() {
            if let Err(e) = tones.play(kind) {
                log::warn!("{}", e);
            }
        }
    }

    fn update_stats(&mut self, total_spins: u64, last_reward_name: Option<&str>) {
        self.total_spins = total_spins;
        self.last_reward = last_reward_name.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keeps_moving_forward() {
        let mut display = WheelDisplay::silent();
        display.apply_rotation(1836.0);
        assert_eq!(display.rotation, 1836.0);

        display.apply_rotation(1800.0 + 300.0);
        assert_eq!(display.rotation, 2160.0 + 2100.0);
        assert_eq!(display.rotation % 360.0, 300.0);
    }

    #[test]
    fn test_result_and_stats() {
        let mut display = WheelDisplay::silent();
        let reward = RewardEntry::new("Coin x10", 40.0, "🪙", "#f093fb", "Kamu mendapatkan 10 Coin!");

        display.disable_input();
        display.begin_spin_visual();
        assert!(!display.input_enabled);
        assert!(display.spinning);

        display.enable_input();
        display.end_spin_visual();
        display.update_stats(1, Some("Coin x10"));
        display.play_tone(ToneKind::Win);
        display.reveal_result(&reward);
        assert!(display.input_enabled);
        assert!(!display.spinning);
        assert_eq!(display.total_spins, 1);
        assert_eq!(display.last_reward.as_deref(), Some("Coin x10"));
        assert!(display.result_open);

        display.hide_result();
        assert!(!display.result_open);
        assert_eq!(display.result, Some(reward));
    }
}
