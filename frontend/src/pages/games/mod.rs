mod frontend_wheel_game;

pub use frontend_wheel_game::{log_startup, FrontendWheelGame};
