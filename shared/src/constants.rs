// Wheel timing and geometry defaults

pub const FULL_TURNS: u32 = 5;
pub const SPIN_DURATION_MS: u32 = 3000;
pub const RESPIN_DELAY_MS: u32 = 300;
/// Total jitter spread in degrees; the landing point moves up to half of this either side of the segment centre.
pub const JITTER_DEGREES: f64 = 40.0;

pub const DEGREES_PER_TURN: f64 = 360.0;
/// Largest share of a segment arc the jitter spread may cover; keeps the landing point off the segment edges.
pub const MAX_JITTER_SHARE: f64 = 0.9;
/// Weights are expressed in percentage points.
pub const WEIGHT_SCALE: f64 = 100.0;
pub const WEIGHT_TOLERANCE: f64 = 0.001;

pub const EMPTY_TABLE_ERROR: &str = "Reward table must contain at least one reward";
pub const INVALID_WEIGHT_ERROR: &str = "Reward weight must be a positive, finite number";
pub const MISSING_NAME_ERROR: &str = "Reward name must not be empty";
pub const INVALID_JITTER_ERROR: &str = "Jitter spread must be a finite, non-negative number of degrees";
pub const ZERO_DURATION_ERROR: &str = "Spin duration must be greater than zero";
