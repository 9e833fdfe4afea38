//! Animation and input timings
//!
//! All durations are in seconds. Ranges are `[min, max]` and sampled
//! uniformly whenever a pause starts.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::PuzzleError;

/// Shortest sweep duration accepted; keeps the easing curve well defined
pub const MIN_ROTATION_DURATION: f32 = 1e-3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleTiming {
    /// Length of one quarter-turn sweep
    pub rotation_duration: f32,
    /// Rest between two sweeps
    pub rotation_pause: [f32; 2],
    /// Extra rest after the fifth sweep, before the sequence repeats
    pub cycle_pause: [f32; 2],
    /// Grey hold before a normal recolor fades in
    pub fade_delay: f32,
    /// Grey hold after a strike or reset
    pub strike_delay: f32,
    /// Length of the tint fade
    pub fade_duration: f32,
    /// Hold time that turns a press into a reset
    pub long_press: f32,
}

impl Default for PuzzleTiming {
    fn default() -> Self {
        Self {
            rotation_duration: 2.0,
            rotation_pause: [0.5, 0.6],
            cycle_pause: [1.75, 2.25],
            fade_delay: 0.22,
            strike_delay: 2.22,
            fade_duration: 1.5,
            long_press: 0.7,
        }
    }
}

impl PuzzleTiming {
    /// Check that every duration is finite and non-negative, the sweep is
    /// long enough to ease, and every range is ordered
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let scalars = [
            ("rotation_duration", self.rotation_duration),
            ("fade_delay", self.fade_delay),
            ("strike_delay", self.strike_delay),
            ("fade_duration", self.fade_duration),
            ("long_press", self.long_press),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(PuzzleError::InvalidTiming(format!("{} must be a non-negative number, got {}", name, value)));
            }
        }
        if self.rotation_duration < MIN_ROTATION_DURATION {
            return Err(PuzzleError::InvalidTiming(format!(
                "rotation_duration must be at least {}s, got {}",
                MIN_ROTATION_DURATION, self.rotation_duration
            )));
        }

        for (name, [lo, hi]) in [("rotation_pause", self.rotation_pause), ("cycle_pause", self.cycle_pause)] {
            if !lo.is_finite() || !hi.is_finite() || lo < 0.0 {
                return Err(PuzzleError::InvalidTiming(format!("{} must hold non-negative numbers", name)));
            }
            if lo > hi {
                return Err(PuzzleError::InvalidTiming(format!("{} range is inverted: [{}, {}]", name, lo, hi)));
            }
        }
        Ok(())
    }

    /// Rest after a sweep
    pub fn sample_rotation_pause<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        sample_range(self.rotation_pause, rng)
    }

    /// Extra rest at the end of a full cycle
    pub fn sample_cycle_pause<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        sample_range(self.cycle_pause, rng)
    }
}

fn sample_range<R: Rng + ?Sized>([lo, hi]: [f32; 2], rng: &mut R) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
