//! Critically-damped smoothing
//!
//! [`smooth_damp`] moves a value toward a target like a critically damped spring.
//! It never overshoots and carries a velocity between calls, so the caller must
//! keep that velocity around from frame to frame.

/// Move `current` toward `target`, roughly reaching it after `smooth_time` seconds.
///
/// `velocity` is read and written; pass the same variable every frame.
/// A non-positive `delta_time` (a paused frame) leaves everything untouched.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, delta_time: f32) -> f32 {
    if delta_time <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;

    // Polynomial approximation of exp(-omega * dt)
    let x = omega * delta_time;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp overshoot
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_without_overshoot() {
        let mut value = 75.0;
        let mut velocity = 0.0;
        for _ in 0..300 {
            value = smooth_damp(value, 20.0, &mut velocity, 0.1, 1.0 / 60.0);
            assert!(value >= 20.0, "overshot to {value}");
        }
        assert!((value - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_moves_monotonically_upward() {
        let mut value = 20.0;
        let mut velocity = 0.0;
        let mut last = value;
        for _ in 0..60 {
            value = smooth_damp(value, 75.0, &mut velocity, 0.2, 1.0 / 60.0);
            assert!(value >= last);
            assert!(value <= 75.0);
            last = value;
        }
        assert!(velocity >= 0.0);
    }

    #[test]
    fn test_paused_frame_is_noop() {
        let mut velocity = 3.0;
        let value = smooth_damp(40.0, 20.0, &mut velocity, 0.1, 0.0);
        assert_eq!(value, 40.0);
        assert_eq!(velocity, 3.0);
    }

    #[test]
    fn test_zero_smooth_time_is_finite() {
        let mut velocity = 0.0;
        let value = smooth_damp(75.0, 20.0, &mut velocity, 0.0, 1.0 / 60.0);
        assert!(value.is_finite());
        assert!(velocity.is_finite());
        assert!((20.0..=75.0).contains(&value));
    }
}
