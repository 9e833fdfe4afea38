//! Tint transitions
//!
//! Every puzzle transition turns the hypercube grey, holds for a delay, then
//! fades linearly to a freshly drawn tint. The fade is advanced by frame
//! deltas and reports its own progress, so the caller can gate other work on
//! [`ColorFade::is_complete`].

use rand::Rng;

/// An HSV color, each channel in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tint {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Tint {
    /// Neutral grey shown while transitioning and after the puzzle is solved
    pub const GREY: Tint = Tint { hue: 0.5, saturation: 0.0, value: 0.5 };

    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self { hue, saturation, value }
    }

    /// Draw a saturated, bright tint: hue in `[0, 1)`, saturation in
    /// `[0.6, 0.9)`, value in `[0.75, 1)`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.gen_range(0.0..1.0),
            saturation: rng.gen_range(0.6..0.9),
            value: rng.gen_range(0.75..1.0),
        }
    }

    /// Channel-wise linear interpolation (hue is not wrapped)
    pub fn lerp(self, to: Tint, t: f32) -> Tint {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Tint {
            hue: mix(self.hue, to.hue),
            saturation: mix(self.saturation, to.saturation),
            value: mix(self.value, to.value),
        }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::GREY
    }
}

/// A grey hold followed by a linear fade to a target tint
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFade {
    delay: f32,
    duration: f32,
    /// Seconds since the fade was started, including the delay
    elapsed: f32,
    target: Tint,
    progress: f32,
}

impl ColorFade {
    /// Start a fade from grey to `target` after `delay` seconds
    pub fn new(delay: f32, duration: f32, target: Tint) -> Self {
        let mut fade = Self {
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            elapsed: 0.0,
            target,
            progress: 0.0,
        };
        fade.refresh();
        fade
    }

    /// A fade that stays grey. Completes immediately.
    pub fn hold_grey() -> Self {
        Self {
            delay: 0.0,
            duration: 0.0,
            elapsed: 0.0,
            target: Tint::GREY,
            progress: 1.0,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns true when the fade is complete.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.refresh();
        self.is_complete()
    }

    fn refresh(&mut self) {
        let fading = self.elapsed - self.delay;
        self.progress = if fading < 0.0 {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            (fading / self.duration).min(1.0)
        };
    }

    /// Seconds of `dt` past the end of the fade, for carrying into the
    /// next state
    pub fn overshoot(&self) -> f32 {
        (self.elapsed - self.delay - self.duration).max(0.0)
    }

    /// Progress of the fade itself (0.0 during the delay, 1.0 when complete)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Still holding grey before the fade starts
    pub fn in_delay(&self) -> bool {
        self.elapsed < self.delay
    }

    pub fn target(&self) -> Tint {
        self.target
    }

    /// Tint to display right now
    pub fn tint(&self) -> Tint {
        Tint::GREY.lerp(self.target, self.progress)
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}
