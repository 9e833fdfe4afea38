//! Puzzle error types
//!
//! Covers malformed rule tables, out-of-range vertex input, and internal
//! invariant violations detected by the coloring engine.

use hypercube_math::ShapeDescriptor;
use thiserror::Error;

use crate::Color;

/// Error type for puzzle operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PuzzleError {
    /// A vertex index outside `0..16`
    #[error("vertex index {0} is out of range (expected 0..16)")]
    VertexOutOfRange(usize),
    /// A stage index at or past the last stage
    #[error("stage {0} is out of range (expected 0..4)")]
    StageOutOfRange(usize),
    /// A rule-table entry that is not a 2D face
    #[error("{0} is not a face: exactly two axes must be fixed")]
    NotAFace(ShapeDescriptor),
    /// Two rule-table entries describe the same face
    #[error("rule entries {first} and {second} describe the same face")]
    DuplicateFace { first: usize, second: usize },
    /// A color-permutation row that repeats a color
    #[error("color permutation {0} is not a permutation of the four colors")]
    InvalidPermutation(usize),
    /// A face that does not have four member vertices
    #[error("face has {found} vertices, expected {expected}")]
    FaceSize { expected: usize, found: usize },
    /// The coloring finished with a vertex still uncolored
    #[error("coloring left vertex {0} unresolved")]
    UnresolvedVertex(usize),
    /// The target color was not dealt onto the target face
    #[error("target color {0} missing from the target face")]
    TargetColorMissing(Color),
    /// Timing parameters that cannot drive the animation
    #[error("invalid timing: {0}")]
    InvalidTiming(String),
    /// A frame step that is infinite or NaN
    #[error("time step {0} is not finite")]
    InvalidTimeStep(f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_math::Axis;

    #[test]
    fn test_vertex_out_of_range_display() {
        let msg = PuzzleError::VertexOutOfRange(16).to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn test_not_a_face_names_the_shape() {
        let edge = ShapeDescriptor::with(&[(Axis::X, true), (Axis::Y, true), (Axis::Z, true)]);
        let msg = PuzzleError::NotAFace(edge).to_string();
        assert!(msg.contains("top-back-right edge"), "got {}", msg);
    }

    #[test]
    fn test_duplicate_face_display() {
        let msg = PuzzleError::DuplicateFace { first: 2, second: 7 }.to_string();
        assert!(msg.contains('2') && msg.contains('7'));
    }

    #[test]
    fn test_target_color_missing_display() {
        let msg = PuzzleError::TargetColorMissing(Color::Green).to_string();
        assert!(msg.contains("green"));
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", PuzzleError::UnresolvedVertex(3));
        assert!(debug.contains("UnresolvedVertex"));
    }
}
