//! Vertex coloring for one stage
//!
//! The four vertices of the target face receive the four colors through a
//! random bijection, which makes the vertex holding the target color the
//! only one on that face with it. The other twelve vertices are then filled
//! in breadth-first, each taking the color that clashes with the fewest 2D
//! faces through it. A proper coloring is not always possible, so the
//! second phase is best-effort only.

use std::collections::VecDeque;

use hypercube_math::{Axis, ShapeDescriptor, Tesseract, VERTEX_COUNT};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Color, PuzzleError};

/// A color for every vertex plus the vertex the player must find
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexColoring {
    colors: [Color; VERTEX_COUNT],
    target: usize,
}

impl VertexColoring {
    #[inline]
    pub fn colors(&self) -> &[Color; VERTEX_COUNT] {
        &self.colors
    }

    #[inline]
    pub fn color(&self, vertex: usize) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    /// The unique vertex on the target face carrying the target color
    #[inline]
    pub fn target_vertex(&self) -> usize {
        self.target
    }

    /// Number of the 24 faces on which some color appears more than once
    pub fn clashing_faces(&self) -> usize {
        let colors = self.colors;
        hypercube_math::tesseract::enumerate_faces()
            .iter()
            .filter(|face| {
                let mut seen = [false; 4];
                face.corners.iter().any(|&v| {
                    let c = colors[v].index();
                    std::mem::replace(&mut seen[c], true)
                })
            })
            .count()
    }
}

/// Color all 16 vertices for a stage.
///
/// Fails only when an internal invariant breaks: a target descriptor that
/// is not a face, or a vertex left uncolored. Neither happens for valid
/// rule tables.
pub fn assign_colors<R: Rng + ?Sized>(
    target_face: &ShapeDescriptor,
    target_color: Color,
    rng: &mut R,
) -> Result<VertexColoring, PuzzleError> {
    if !target_face.is_face() {
        return Err(PuzzleError::NotAFace(*target_face));
    }
    let members = target_face.members();
    if members.len() != 4 {
        return Err(PuzzleError::FaceSize { expected: 4, found: members.len() });
    }

    let mut colors: [Option<Color>; VERTEX_COUNT] = [None; VERTEX_COUNT];
    let mut queue = VecDeque::new();
    let mut target = None;

    // Phase 1: deal the four colors onto the target face
    let mut remaining = Color::ALL.to_vec();
    for &v in &members {
        let color = remaining.remove(rng.gen_range(0..remaining.len()));
        colors[v] = Some(color);
        queue.extend(Tesseract::neighbors(v));
        if color == target_color {
            target = Some(v);
        }
    }
    let target = target.ok_or(PuzzleError::TargetColorMissing(target_color))?;

    // Phase 2: breadth-first fill, least-clashing color first
    while let Some(v) = queue.pop_front() {
        if colors[v].is_some() {
            continue;
        }

        let clashes = clash_counts(&colors, v);
        let mut order = Color::ALL;
        // Stable: ties keep the lower color index
        order.sort_by_key(|c| clashes[c.index()]);
        colors[v] = Some(order[0]);

        let mut axes = Axis::ALL;
        axes.shuffle(rng);
        queue.extend(axes.iter().map(|a| v ^ a.bit()));
    }

    let mut resolved = [Color::Red; VERTEX_COUNT];
    for (v, c) in colors.iter().enumerate() {
        resolved[v] = c.ok_or(PuzzleError::UnresolvedVertex(v))?;
    }

    Ok(VertexColoring { colors: resolved, target })
}

/// For each color, the number of axis pairs `(d, e)` such that some vertex
/// agreeing with `vertex` on both `d` and `e` already has that color. Each
/// such pair is one 2D face through `vertex`.
pub fn clash_counts(colors: &[Option<Color>; VERTEX_COUNT], vertex: usize) -> [u32; 4] {
    let mut counts = [0u32; 4];
    for color in Color::ALL {
        for d in 0..4 {
            for e in (d + 1)..4 {
                let plane = (1 << d) | (1 << e);
                let clash = (0..VERTEX_COUNT)
                    .any(|u| (u ^ vertex) & plane == 0 && colors[u] == Some(color));
                if clash {
                    counts[color.index()] += 1;
                }
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_math::AxisState;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn zig_front() -> ShapeDescriptor {
        ShapeDescriptor::with(&[(Axis::Z, false), (Axis::W, false)])
    }

    #[test]
    fn test_target_face_gets_four_distinct_colors() {
        let face = zig_front();
        for seed in 0..64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let coloring = assign_colors(&face, Color::Red, &mut rng).unwrap();

            let mut on_face: Vec<Color> = face.members().iter().map(|&v| coloring.colors()[v]).collect();
            on_face.sort();
            assert_eq!(on_face, Color::ALL.to_vec());
        }
    }

    #[test]
    fn test_target_vertex_is_the_target_color_on_the_face() {
        let face = ShapeDescriptor::with(&[(Axis::X, true), (Axis::Y, false)]);
        for color in Color::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(color.index() as u64);
            let coloring = assign_colors(&face, color, &mut rng).unwrap();
            let target = coloring.target_vertex();
            assert!(face.matches(target));
            assert_eq!(coloring.color(target), Some(color));

            let holders: Vec<usize> = face
                .members()
                .into_iter()
                .filter(|&v| coloring.colors()[v] == color)
                .collect();
            assert_eq!(holders, vec![target]);
        }
    }

    #[test]
    fn test_rejects_non_face() {
        let edge = ShapeDescriptor([AxisState::Low, AxisState::Low, AxisState::High, AxisState::Free]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = assign_colors(&edge, Color::Blue, &mut rng).unwrap_err();
        assert_eq!(err, PuzzleError::NotAFace(edge));
    }

    #[test]
    fn test_same_seed_same_coloring() {
        let face = zig_front();
        let a = assign_colors(&face, Color::Green, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        let b = assign_colors(&face, Color::Green, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clash_counts_empty() {
        let colors = [None; VERTEX_COUNT];
        assert_eq!(clash_counts(&colors, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_clash_counts_neighbour_edge() {
        // Vertex 1 differs from 0 only in X, so it agrees with 0 on the
        // pairs (Y,Z), (Y,W), (Z,W): three faces through vertex 0.
        let mut colors = [None; VERTEX_COUNT];
        colors[1] = Some(Color::Yellow);
        assert_eq!(clash_counts(&colors, 0), [0, 3, 0, 0]);
    }

    #[test]
    fn test_clash_counts_diagonal() {
        // Vertex 3 differs from 0 in X and Y: shares only the (Z,W) face
        let mut colors = [None; VERTEX_COUNT];
        colors[3] = Some(Color::Blue);
        colors[15] = Some(Color::Blue); // opposite corner shares nothing
        assert_eq!(clash_counts(&colors, 0), [0, 0, 0, 1]);
    }

    #[test]
    fn test_clashing_faces_counts_repeats() {
        let face = zig_front();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let coloring = assign_colors(&face, Color::Red, &mut rng).unwrap();
        // The target face never clashes, so at most 23 faces can
        assert!(coloring.clashing_faces() <= 23);
    }
}
