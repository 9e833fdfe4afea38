//! Puzzle simulation system
//!
//! Steps the puzzle at a fixed frame rate:
//! - Advancing the state machine
//! - Delivering signals to the host
//! - Producing a render frame per step

use hypercube_core::{Phase, PressOutcome, Projection, Puzzle, PuzzleError, PuzzleHost};
use hypercube_math::Tesseract;
use hypercube_render::HypercubeFrame;

/// Simulated seconds `force_solve` gives up after
pub const SOLVE_TIME_LIMIT: f32 = 120.0;

/// Most steps a single `run_for` takes; longer runs use longer steps
pub const MAX_RUN_STEPS: u32 = 100_000;

/// Drives one puzzle with fixed-size frames
pub struct SimulationSystem {
    puzzle: Puzzle,
    tesseract: Tesseract,
    projection: Projection,
    frame_dt: f32,
    elapsed: f64,
}

impl SimulationSystem {
    /// Create a simulation that advances `frame_dt` seconds per step
    pub fn new(puzzle: Puzzle, projection: Projection, frame_dt: f32) -> Self {
        Self {
            puzzle,
            tesseract: Tesseract::new(),
            projection,
            frame_dt,
            elapsed: 0.0,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn frame_dt(&self) -> f32 {
        self.frame_dt
    }

    /// Simulated seconds since creation
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Run one frame and return what to draw
    pub fn step<H: PuzzleHost + ?Sized>(&mut self, host: &mut H) -> Result<HypercubeFrame, PuzzleError> {
        self.advance(self.frame_dt, host)?;
        Ok(self.frame())
    }

    /// Render the current state without advancing
    pub fn frame(&self) -> HypercubeFrame {
        HypercubeFrame::from_puzzle(&self.puzzle, &self.tesseract, &self.projection)
    }

    fn advance<H: PuzzleHost + ?Sized>(&mut self, dt: f32, host: &mut H) -> Result<(), PuzzleError> {
        let result = self.puzzle.advance(dt);
        self.elapsed += f64::from(dt);
        // Signals raised before an error still go out
        self.puzzle.dispatch_signals(host);
        result?;
        log::trace!("[Hypercube #{}] t={:.3} {}", self.puzzle.id(), self.elapsed, self.puzzle.phase());
        Ok(())
    }

    /// Advance by `seconds` in equal steps no longer than a frame, or in
    /// [`MAX_RUN_STEPS`] equal steps for very long runs
    pub fn run_for<H: PuzzleHost + ?Sized>(&mut self, seconds: f32, host: &mut H) -> Result<(), PuzzleError> {
        if !seconds.is_finite() {
            return Err(PuzzleError::InvalidTimeStep(seconds));
        }
        if seconds <= 0.0 {
            return Ok(());
        }
        let seconds = f64::from(seconds);
        let frames = (seconds / f64::from(self.frame_dt)).ceil().clamp(1.0, f64::from(MAX_RUN_STEPS)) as u32;
        let dt = (seconds / f64::from(frames)) as f32;
        for _ in 0..frames {
            self.advance(dt, host)?;
        }
        Ok(())
    }

    /// Short-press a vertex
    pub fn tap<H: PuzzleHost + ?Sized>(&mut self, vertex: usize, host: &mut H) -> Result<PressOutcome, PuzzleError> {
        let outcome = self.puzzle.select(vertex)?;
        self.puzzle.dispatch_signals(host);
        Ok(outcome)
    }

    /// Hold a vertex down for `seconds` of simulated time, then release it
    pub fn hold<H: PuzzleHost + ?Sized>(
        &mut self,
        vertex: usize,
        seconds: f32,
        host: &mut H,
    ) -> Result<PressOutcome, PuzzleError> {
        if self.puzzle.press(vertex)? == PressOutcome::Ignored {
            return Ok(PressOutcome::Ignored);
        }
        self.run_for(seconds, host)?;
        let outcome = self.puzzle.release(vertex)?;
        self.puzzle.dispatch_signals(host);
        Ok(outcome)
    }

    /// Play the puzzle to the end by always picking the target.
    ///
    /// Returns `false` if it is not solved within [`SOLVE_TIME_LIMIT`].
    pub fn force_solve<H: PuzzleHost + ?Sized>(&mut self, host: &mut H) -> Result<bool, PuzzleError> {
        let mut waited = 0.0;
        loop {
            match self.puzzle.phase() {
                Phase::Solved => return Ok(true),
                Phase::Rotating => {
                    self.tap(0, host)?;
                }
                Phase::AwaitingInput { target, .. } => {
                    self.tap(target, host)?;
                }
                Phase::Transitioning => {}
            }
            if self.puzzle.is_solved() {
                return Ok(true);
            }
            if waited >= SOLVE_TIME_LIMIT {
                log::warn!("[Hypercube #{}] Gave up solving after {}s", self.puzzle.id(), SOLVE_TIME_LIMIT);
                return Ok(false);
            }
            self.advance(self.frame_dt, host)?;
            waited += self.frame_dt;
        }
    }
}
