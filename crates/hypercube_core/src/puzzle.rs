//! Puzzle state machine
//!
//! One puzzle instance: the rotation loop, the tint transitions, per-stage
//! recoloring and the evaluation of vertex presses. Everything is driven by
//! [`Puzzle::advance`], called once per frame, plus the press and release
//! events of the player. Each event runs to completion before the next.

use std::fmt;

use hypercube_math::{Projection, ShapeDescriptor, Vec4, VERTEX_COUNT};
use rand_chacha::ChaCha8Rng;

use crate::coloring::{assign_colors, VertexColoring};
use crate::press::{PressTracker, Release};
use crate::rules::{RuleSet, StageRotations, STAGE_COUNT};
use crate::sequencer::RotationSequencer;
use crate::timing::PuzzleTiming;
use crate::transition::{ColorFade, Tint};
use crate::{Color, PuzzleError};

/// Observable phase of a puzzle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Cycling through the rotations; a short press stops it
    Rotating,
    /// Grey hold and tint fade; input is ignored
    Transitioning,
    /// Colored and waiting for the player to pick a vertex
    AwaitingInput { stage: usize, target: usize },
    /// All four stages cleared
    Solved,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Rotating => write!(f, "rotating"),
            Phase::Transitioning => write!(f, "transitioning"),
            Phase::AwaitingInput { stage, .. } => write!(f, "awaiting input (stage {})", stage + 1),
            Phase::Solved => write!(f, "solved"),
        }
    }
}

/// Result of a press or release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing happened
    Ignored,
    /// A press is being held
    Held,
    /// The rotation stopped and stage 0 is being colored
    Stopped,
    /// The target was found and the next stage is being colored
    Cleared { next_stage: usize },
    /// The last target was found
    Solved,
    /// A wrong vertex was picked
    Strike,
}

/// Notifications for the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleSignal {
    Solved,
    Strike,
}

/// Receives the puzzle's outbound signals
pub trait PuzzleHost {
    fn signal_solved(&mut self);
    fn signal_strike(&mut self);
}

/// What to do once a transition's fade finishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AfterFade {
    Recolor { stage: usize },
    Resume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Rotating,
    Transitioning { after: AfterFade },
    AwaitingInput { stage: usize, target: usize },
    Solved,
}

pub struct Puzzle {
    id: u32,
    rules: RuleSet,
    rotations: StageRotations,
    timing: PuzzleTiming,
    rng: ChaCha8Rng,
    sequencer: RotationSequencer,
    press: PressTracker,
    fade: ColorFade,
    state: State,
    stage: usize,
    coloring: Option<VertexColoring>,
    signals: Vec<PuzzleSignal>,
}

impl Puzzle {
    /// Create a puzzle that starts out rotating.
    ///
    /// Prefer [`crate::PuzzleBuilder`], which fills in seeds and defaults.
    pub fn new(
        id: u32,
        rules: RuleSet,
        rotations: StageRotations,
        timing: PuzzleTiming,
        mut rng: ChaCha8Rng,
    ) -> Result<Self, PuzzleError> {
        timing.validate()?;

        // The rotation loop starts once the opening fade is done
        let sequencer = RotationSequencer::new(rotations, timing.clone());
        let fade = ColorFade::new(timing.fade_delay, timing.fade_duration, Tint::random(&mut rng));

        log::info!("[Hypercube #{}] Rotations are: {}", id, rotations);

        Ok(Self {
            id,
            press: PressTracker::new(timing.long_press),
            rules,
            rotations,
            timing,
            rng,
            sequencer,
            fade,
            state: State::Rotating,
            stage: 0,
            coloring: None,
            signals: Vec::new(),
        })
    }

    /// Advance all timers by `dt` seconds.
    ///
    /// Fails on a non-finite `dt`, leaving the puzzle untouched, and if
    /// recoloring hits an internal invariant violation; the puzzle then
    /// falls back to resuming the rotation.
    pub fn advance(&mut self, dt: f32) -> Result<(), PuzzleError> {
        if !dt.is_finite() {
            return Err(PuzzleError::InvalidTimeStep(dt));
        }
        let dt = dt.max(0.0);

        if self.press.advance(dt).is_some() && self.handle_long_press() {
            return Ok(());
        }

        match self.state {
            State::Rotating => {
                if self.sequencer.is_running() {
                    self.fade.update(dt);
                    self.sequencer.advance(dt, &mut self.rng);
                } else if self.fade.update(dt) {
                    let leftover = self.fade.overshoot();
                    self.sequencer.start(&mut self.rng);
                    self.sequencer.advance(leftover, &mut self.rng);
                }
            }
            State::Transitioning { after } => {
                if self.fade.update(dt) {
                    let leftover = self.fade.overshoot();
                    self.finish_transition(after, leftover)?;
                }
            }
            State::AwaitingInput { .. } | State::Solved => {}
        }
        Ok(())
    }

    fn finish_transition(&mut self, after: AfterFade, leftover: f32) -> Result<(), PuzzleError> {
        match after {
            AfterFade::Recolor { stage } => match self.recolor(stage) {
                Ok(target) => {
                    self.state = State::AwaitingInput { stage, target };
                    Ok(())
                }
                Err(e) => {
                    log::error!("[Hypercube #{}] Coloring stage {} failed: {}", self.id, stage + 1, e);
                    self.stage = 0;
                    self.begin_transition(self.timing.strike_delay, AfterFade::Resume);
                    Err(e)
                }
            },
            AfterFade::Resume => {
                self.stage = 0;
                self.state = State::Rotating;
                self.sequencer.start(&mut self.rng);
                self.sequencer.advance(leftover, &mut self.rng);
                Ok(())
            }
        }
    }

    fn recolor(&mut self, stage: usize) -> Result<usize, PuzzleError> {
        let goal = self
            .rules
            .goal(&self.rotations, stage)
            .ok_or(PuzzleError::StageOutOfRange(stage))?;

        log::info!("[Hypercube #{}] Stage {} correct face: {}", self.id, stage + 1, goal.face);
        log::info!("[Hypercube #{}] Stage {} correct color: {}", self.id, stage + 1, goal.color);

        let coloring = assign_colors(&goal.face, goal.color, &mut self.rng)?;
        let target = coloring.target_vertex();
        log::info!(
            "[Hypercube #{}] Stage {} correct vertex: {}",
            self.id,
            stage + 1,
            ShapeDescriptor::vertex(target)
        );
        log::debug!(
            "[Hypercube #{}] Stage {} coloring leaves {} clashing faces",
            self.id,
            stage + 1,
            coloring.clashing_faces()
        );

        self.coloring = Some(coloring);
        Ok(target)
    }

    /// Grey out, stop rotating and schedule `after` once the fade is done
    fn begin_transition(&mut self, delay: f32, after: AfterFade) {
        self.press.cancel();
        self.sequencer.stop();
        self.coloring = None;
        let target = Tint::random(&mut self.rng);
        self.fade = ColorFade::new(delay, self.timing.fade_duration, target);
        self.state = State::Transitioning { after };
    }

    /// Returns true if the hold reset the puzzle
    fn handle_long_press(&mut self) -> bool {
        if let State::AwaitingInput { .. } = self.state {
            log::info!("[Hypercube #{}] Module reset.", self.id);
            self.stage = 0;
            self.begin_transition(self.timing.strike_delay, AfterFade::Resume);
            return true;
        }
        false
    }

    /// Start pressing a vertex
    pub fn press(&mut self, vertex: usize) -> Result<PressOutcome, PuzzleError> {
        check_vertex(vertex)?;
        if !self.accepts_input() {
            return Ok(PressOutcome::Ignored);
        }
        Ok(if self.press.press(vertex) { PressOutcome::Held } else { PressOutcome::Ignored })
    }

    /// Release a vertex. A release before the hold threshold is a short
    /// press and is evaluated here.
    pub fn release(&mut self, vertex: usize) -> Result<PressOutcome, PuzzleError> {
        check_vertex(vertex)?;
        if self.press.release(vertex) == Release::Ignored || !self.accepts_input() {
            return Ok(PressOutcome::Ignored);
        }

        let outcome = match self.state {
            State::Rotating => {
                self.stage = 0;
                self.begin_transition(self.timing.fade_delay, AfterFade::Recolor { stage: 0 });
                PressOutcome::Stopped
            }
            State::AwaitingInput { stage, target } if vertex == target => {
                let next_stage = stage + 1;
                self.stage = next_stage;
                if next_stage == STAGE_COUNT {
                    log::info!("[Hypercube #{}] Module solved.", self.id);
                    self.press.cancel();
                    self.coloring = None;
                    self.fade = ColorFade::hold_grey();
                    self.state = State::Solved;
                    self.signals.push(PuzzleSignal::Solved);
                    PressOutcome::Solved
                } else {
                    self.begin_transition(self.timing.fade_delay, AfterFade::Recolor { stage: next_stage });
                    PressOutcome::Cleared { next_stage }
                }
            }
            State::AwaitingInput { .. } => {
                log::info!(
                    "[Hypercube #{}] Incorrect vertex {} pressed; resuming rotations.",
                    self.id,
                    ShapeDescriptor::vertex(vertex)
                );
                self.stage = 0;
                self.signals.push(PuzzleSignal::Strike);
                self.begin_transition(self.timing.strike_delay, AfterFade::Resume);
                PressOutcome::Strike
            }
            State::Transitioning { .. } | State::Solved => PressOutcome::Ignored,
        };
        Ok(outcome)
    }

    /// Press and immediately release a vertex
    pub fn select(&mut self, vertex: usize) -> Result<PressOutcome, PuzzleError> {
        self.press(vertex)?;
        self.release(vertex)
    }

    fn accepts_input(&self) -> bool {
        matches!(self.state, State::Rotating | State::AwaitingInput { .. })
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Rotating => Phase::Rotating,
            State::Transitioning { .. } => Phase::Transitioning,
            State::AwaitingInput { stage, target } => Phase::AwaitingInput { stage, target },
            State::Solved => Phase::Solved,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Stages cleared so far (4 once solved)
    pub fn stage(&self) -> usize {
        self.stage
    }

    pub fn is_rotating(&self) -> bool {
        self.state == State::Rotating
    }

    pub fn is_solved(&self) -> bool {
        self.state == State::Solved
    }

    /// The vertex to pick, only while awaiting input
    pub fn target_vertex(&self) -> Option<usize> {
        match self.state {
            State::AwaitingInput { target, .. } => Some(target),
            _ => None,
        }
    }

    /// The displayed coloring, only while awaiting input
    pub fn coloring(&self) -> Option<&VertexColoring> {
        match self.state {
            State::AwaitingInput { .. } => self.coloring.as_ref(),
            _ => None,
        }
    }

    /// Palette color shown on a vertex; `None` while the vertices share the
    /// grey or tinted material
    pub fn vertex_color(&self, vertex: usize) -> Option<Color> {
        self.coloring()?.color(vertex)
    }

    /// Tint of edges and faces (and of vertices without a palette color)
    pub fn tint(&self) -> Tint {
        self.fade.tint()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rotations(&self) -> &StageRotations {
        &self.rotations
    }

    pub fn timing(&self) -> &PuzzleTiming {
        &self.timing
    }

    /// Rotated 4D vertex positions for this frame
    pub fn vertex_positions(&self) -> [Vec4; VERTEX_COUNT] {
        self.sequencer.vertex_positions()
    }

    pub fn projected_vertices(&self, projection: &Projection) -> [[f32; 3]; VERTEX_COUNT] {
        projection.project_all(&self.vertex_positions())
    }

    /// Take the signals raised since the last call
    pub fn drain_signals(&mut self) -> Vec<PuzzleSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Deliver pending signals to a host
    pub fn dispatch_signals<H: PuzzleHost + ?Sized>(&mut self, host: &mut H) {
        for signal in self.drain_signals() {
            match signal {
                PuzzleSignal::Solved => host.signal_solved(),
                PuzzleSignal::Strike => host.signal_strike(),
            }
        }
    }
}

fn check_vertex(vertex: usize) -> Result<(), PuzzleError> {
    if vertex < VERTEX_COUNT {
        Ok(())
    } else {
        Err(PuzzleError::VertexOutOfRange(vertex))
    }
}
