//! Puzzle logic for the hypercube
//!
//! This crate turns a rule seed into a playable puzzle:
//!
//! - [`RuleSet`] - face and color-permutation tables per rotation
//! - [`StageRotations`] - the five rotations one instance shows
//! - [`assign_colors`] - per-stage vertex coloring with a unique target
//! - [`RotationSequencer`] - the eased quarter-turn loop
//! - [`ColorFade`] / [`Tint`] - grey hold and tint fade between stages
//! - [`Puzzle`] - the state machine, driven by [`Puzzle::advance`]
//! - [`PuzzleBuilder`] - seeds and defaults for a new [`Puzzle`]

mod color;
mod error;
pub mod rules;
pub mod coloring;
pub mod timing;
pub mod transition;
pub mod press;
pub mod sequencer;
pub mod puzzle;
pub mod builder;

pub use color::{all_permutations, is_permutation, permutation_letters, Color, ColorPermutation};
pub use error::PuzzleError;
pub use rules::{RuleSet, StageGoal, StageRotations, RULE_COUNT, STAGE_COUNT};
pub use coloring::{assign_colors, clash_counts, VertexColoring};
pub use timing::PuzzleTiming;
pub use transition::{ColorFade, Tint};
pub use press::{PressTracker, Release};
pub use sequencer::RotationSequencer;
pub use puzzle::{Phase, PressOutcome, Puzzle, PuzzleHost, PuzzleSignal};
pub use builder::{PuzzleBuilder, DEFAULT_RULE_SEED};

// Re-export the geometry types that appear in this crate's API
pub use hypercube_math::{Axis, AxisState, Projection, RotationAxisPair, ShapeDescriptor, Vec4, VERTEX_COUNT};
