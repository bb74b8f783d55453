pub mod config;
pub mod constants;
pub mod presentation;
pub mod random;
pub mod rewards;
pub mod rotation;
pub mod scheduler;
pub mod selector;
pub mod shared_wheel_game;
pub mod validation;

#[cfg(test)]
mod testing;

pub use config::{WheelConfig, WheelConfigError};
pub use presentation::{PresentationPort, ToneKind};
pub use random::{RandomSource, SequenceSource, WheelRng};
pub use rewards::{RewardEntry, RewardTable, RewardTableError};
pub use scheduler::{ManualScheduler, Scheduler, TimerEvent};
pub use shared_wheel_game::{ControllerState, SpinController, SpinOutcome, SpinSession, SpinState, WheelKey};
