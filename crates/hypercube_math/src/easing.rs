//! Easing curves for animation sweeps

/// Quadratic ease-in-out.
///
/// Maps `t` in `[0, duration]` to a value going from `start` to
/// `start + change`, accelerating through the first half and decelerating
/// through the second.
pub fn in_out_quad(t: f32, start: f32, change: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return start + change;
    }
    let mut t = (t / (duration / 2.0)).clamp(0.0, 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + start;
    }
    t -= 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + start
}
