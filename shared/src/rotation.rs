use crate::config::WheelConfig;
use crate::constants::{DEGREES_PER_TURN, MAX_JITTER_SHARE};
use crate::random::RandomSource;

/// Angle, within a single turn, that puts the pointer inside segment `index`.
///
/// The result is the segment centre plus a jitter of up to half of
/// `jitter_degrees` either way, so consecutive wins on the same reward do not
/// stop at the identical spot. The spread is capped at `MAX_JITTER_SHARE` of
/// the segment arc; the angle never leaves segment `index`.
pub fn plan_rotation<R>(index: usize, segment_count: usize, jitter_degrees: f64, jitter: &mut R) -> f64
where
    R: RandomSource + ?Sized,
{
    debug_assert!(segment_count > 0, "wheel needs at least one segment");
    let segment_angle = DEGREES_PER_TURN / segment_count.max(1) as f64;
    let base_rotation = index as f64 * segment_angle + segment_angle / 2.0;
    let offset = (jitter.next_f64() - 0.5) * jitter_spread(jitter_degrees, segment_angle);
    base_rotation + offset
}

fn jitter_spread(jitter_degrees: f64, segment_angle: f64) -> f64 {
    if !jitter_degrees.is_finite() {
        return 0.0;
    }
    jitter_degrees.clamp(0.0, segment_angle * MAX_JITTER_SHARE)
}

/// Full turns for show plus the relative landing angle.
pub fn plan_total_rotation<R>(index: usize, segment_count: usize, config: &WheelConfig, jitter: &mut R) -> f64
where
    R: RandomSource + ?Sized,
{
    config.full_turns as f64 * DEGREES_PER_TURN
        + plan_rotation(index, segment_count, config.jitter_degrees, jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_without_jitter() {
        assert_eq!(plan_rotation(0, 5, 40.0, &mut || 0.5), 36.0);
        assert_eq!(plan_rotation(2, 5, 40.0, &mut || 0.5), 180.0);
        assert_eq!(plan_rotation(1, 4, 40.0, &mut || 0.5), 135.0);
    }

    #[test]
    fn test_jitter_extremes() {
        assert_eq!(plan_rotation(0, 5, 40.0, &mut || 0.0), 16.0);
        let high = plan_rotation(0, 5, 40.0, &mut || 0.999_999);
        assert!(high < 56.0 && high > 55.99);
    }

    #[test]
    fn test_stays_within_segment_bounds() {
        for index in 0..5 {
            let lower = index as f64 * 72.0 - 20.0;
            let upper = index as f64 * 72.0 + 92.0;
            let mut draw = 0.0;
            while draw < 1.0 {
                let angle = plan_rotation(index, 5, 40.0, &mut || draw);
                assert!(angle >= lower && angle <= upper, "index {} draw {} -> {}", index, draw, angle);
                // jitter never leaves the reward's own arc for five segments
                assert!(angle > index as f64 * 72.0 && angle < (index + 1) as f64 * 72.0);
                draw += 0.01;
            }
        }
    }

    #[test]
    fn test_configurable_spread() {
        assert_eq!(plan_rotation(0, 10, 0.0, &mut || 0.9), 18.0);
        assert_eq!(plan_rotation(0, 10, 10.0, &mut || 1.0), 23.0);
    }

    #[test]
    fn test_wide_spread_stays_in_segment() {
        // 100 degrees of spread on a 72 degree arc
        for index in 0..5 {
            let mut draw = 0.0;
            while draw < 1.0 {
                let angle = plan_rotation(index, 5, 100.0, &mut || draw);
                let segment = (angle / 72.0).floor() as usize;
                assert_eq!(segment, index, "draw {} landed at {}", draw, angle);
                draw += 0.01;
            }
        }
        let edge = plan_rotation(0, 5, 100.0, &mut || 0.99);
        assert!(edge < 72.0, "landed outside segment 0 at {}", edge);
    }

    #[test]
    fn test_unusable_spread_means_no_jitter() {
        assert_eq!(plan_rotation(1, 4, -30.0, &mut || 0.0), 135.0);
        assert_eq!(plan_rotation(1, 4, f64::NAN, &mut || 0.0), 135.0);
    }

    #[test]
    fn test_total_adds_full_turns() {
        let config = WheelConfig::default();
        assert_eq!(plan_total_rotation(0, 5, &config, &mut || 0.5), 1836.0);
        assert_eq!(plan_total_rotation(4, 5, &config, &mut || 0.5), 1800.0 + 324.0);
    }
}
