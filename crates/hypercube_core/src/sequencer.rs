//! Rotation sequencing
//!
//! Cycles through the five stage rotations, sweeping each from 0 to a
//! quarter turn with an ease-in-out curve and snapping back to the unrotated
//! lattice between sweeps. Runs until stopped.

use std::f32::consts::FRAC_PI_2;

use hypercube_math::easing::in_out_quad;
use hypercube_math::{RotationAxisPair, Vec4, VERTEX_COUNT};
use rand::Rng;

use crate::rules::StageRotations;
use crate::timing::{PuzzleTiming, MIN_ROTATION_DURATION};

#[derive(Clone, Copy, Debug, PartialEq)]
enum SweepState {
    Idle,
    Resting { remaining: f32 },
    Sweeping { elapsed: f32 },
}

#[derive(Clone, Debug)]
pub struct RotationSequencer {
    rotations: StageRotations,
    timing: PuzzleTiming,
    /// Index into the rotation list of the next or current sweep
    index: usize,
    state: SweepState,
    completed_sweeps: u64,
    unrotated: [Vec4; VERTEX_COUNT],
}

impl RotationSequencer {
    pub fn new(rotations: StageRotations, timing: PuzzleTiming) -> Self {
        Self {
            rotations,
            timing,
            index: 0,
            state: SweepState::Idle,
            completed_sweeps: 0,
            unrotated: std::array::from_fn(Vec4::lattice_vertex),
        }
    }

    /// Start from the first rotation after a cycle pause
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.index = 0;
        self.state = SweepState::Resting { remaining: self.timing.sample_cycle_pause(rng) };
    }

    /// Abandon any sweep and snap back to the unrotated lattice
    pub fn stop(&mut self) {
        self.state = SweepState::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.state != SweepState::Idle
    }

    /// Advance by `dt` seconds, carrying leftover time across sweep and rest
    /// boundaries
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        let duration = self.sweep_duration();
        let mut dt = dt.max(0.0);
        if !dt.is_finite() || self.state == SweepState::Idle {
            return;
        }

        // Drop whole cycles so the per-sweep loop below stays short
        let cycle = self.max_cycle_length();
        if dt >= cycle {
            let skipped = (dt / cycle).floor();
            self.completed_sweeps += skipped as u64 * self.rotations.len() as u64;
            dt = dt.rem_euclid(cycle);
        }

        loop {
            match self.state {
                SweepState::Idle => return,
                SweepState::Resting { remaining } => {
                    if dt < remaining {
                        self.state = SweepState::Resting { remaining: remaining - dt };
                        return;
                    }
                    dt -= remaining;
                    self.state = SweepState::Sweeping { elapsed: 0.0 };
                }
                SweepState::Sweeping { elapsed } => {
                    let elapsed = elapsed + dt;
                    if elapsed < duration {
                        self.state = SweepState::Sweeping { elapsed };
                        return;
                    }
                    dt = elapsed - duration;
                    self.completed_sweeps += 1;

                    let mut pause = self.timing.sample_rotation_pause(rng);
                    if self.index + 1 == self.rotations.len() {
                        pause += self.timing.sample_cycle_pause(rng);
                    }
                    self.index = (self.index + 1) % self.rotations.len();
                    self.state = SweepState::Resting { remaining: pause };
                }
            }
        }
    }

    fn sweep_duration(&self) -> f32 {
        self.timing.rotation_duration.max(MIN_ROTATION_DURATION)
    }

    /// Upper bound on one pass through all rotations, rests included
    fn max_cycle_length(&self) -> f32 {
        let sweeps = self.rotations.len() as f32;
        sweeps * (self.sweep_duration() + self.timing.rotation_pause[1]) + self.timing.cycle_pause[1]
    }

    /// The rotation being swept and its eased angle, if a sweep is in flight
    pub fn current(&self) -> Option<(RotationAxisPair, f32)> {
        match self.state {
            SweepState::Sweeping { elapsed } => {
                let pair = self.rotations.get(self.index)?;
                let angle = in_out_quad(elapsed, 0.0, FRAC_PI_2, self.sweep_duration());
                Some((pair, angle))
            }
            _ => None,
        }
    }

    /// Index into the rotation list of the current or next sweep
    pub fn rotation_index(&self) -> usize {
        self.index
    }

    pub fn completed_sweeps(&self) -> u64 {
        self.completed_sweeps
    }

    /// 4D positions of all vertices for the current frame
    pub fn vertex_positions(&self) -> [Vec4; VERTEX_COUNT] {
        match self.current() {
            Some((pair, angle)) => self.unrotated.map(|p| pair.rotate(p, angle)),
            None => self.unrotated,
        }
    }
}
