//! Per-frame render output
//!
//! Turns projected vertex positions into the primitives a renderer draws:
//! vertex spheres, edge cylinders placed by midpoint, orientation and
//! half-length, and a double-sided triangle list for the faces.

use bytemuck::{Pod, Zeroable};
use hypercube_core::{Projection, Puzzle, VERTEX_COUNT};
use hypercube_math::Tesseract;

use crate::palette::{vertex_display_colors, MaterialColors};

/// A projected vertex with its display color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

/// Placement of one edge, for a unit cylinder along +Y
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct EdgeSegment {
    pub midpoint: [f32; 3],
    /// Quaternion `(x, y, z, w)` turning +Y onto the edge direction
    pub rotation: [f32; 4],
    pub half_length: f32,
}

impl EdgeSegment {
    pub fn between(a: [f32; 3], b: [f32; 3]) -> Self {
        let d = sub(b, a);
        Self {
            midpoint: [(a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5, (a[2] + b[2]) * 0.5],
            rotation: from_to_up(d),
            half_length: length(d) * 0.5,
        }
    }
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Shortest-arc rotation from +Y onto `dir`. A zero direction gives the
/// identity; exactly -Y turns half way round X.
pub fn from_to_up(dir: [f32; 3]) -> [f32; 4] {
    let len = length(dir);
    if len < f32::EPSILON {
        return [0.0, 0.0, 0.0, 1.0];
    }
    let [x, y, z] = [dir[0] / len, dir[1] / len, dir[2] / len];

    // cross(+Y, d) = (z, 0, -x), dot(+Y, d) = y
    let w = 1.0 + y;
    if w < 1e-6 {
        return [1.0, 0.0, 0.0, 0.0];
    }
    let q = [z, 0.0, -x, w];
    let n = (q[0] * q[0] + q[2] * q[2] + q[3] * q[3]).sqrt();
    [q[0] / n, 0.0, q[2] / n, q[3] / n]
}

/// Everything a renderer needs for one frame of the hypercube
#[derive(Clone, Debug)]
pub struct HypercubeFrame {
    pub vertices: [FrameVertex; VERTEX_COUNT],
    /// One segment per edge, in lattice edge order
    pub edges: Vec<EdgeSegment>,
    /// Face triangles as vertex indices, both windings, three per triangle
    pub face_indices: Vec<u32>,
    pub materials: MaterialColors,
}

impl HypercubeFrame {
    /// Assemble a frame from projected positions and per-vertex colors
    pub fn build(
        tesseract: &Tesseract,
        positions: &[[f32; 3]; VERTEX_COUNT],
        vertex_colors: &[[f32; 4]; VERTEX_COUNT],
        materials: MaterialColors,
    ) -> Self {
        let vertices = std::array::from_fn(|i| FrameVertex {
            position: positions[i],
            color: vertex_colors[i],
        });

        let edges = tesseract
            .edges()
            .iter()
            .map(|e| EdgeSegment::between(positions[e.a], positions[e.b]))
            .collect();

        let face_indices = tesseract
            .faces()
            .iter()
            .flat_map(|f| f.triangles())
            .flatten()
            .map(|i| i as u32)
            .collect();

        Self { vertices, edges, face_indices, materials }
    }

    /// Current frame of a puzzle
    pub fn from_puzzle(puzzle: &Puzzle, tesseract: &Tesseract, projection: &Projection) -> Self {
        let positions = puzzle.projected_vertices(projection);
        let materials = MaterialColors::from_tint(puzzle.tint());
        let colors = vertex_display_colors(puzzle, &materials);
        Self::build(tesseract, &positions, &colors, materials)
    }

    pub fn triangle_count(&self) -> usize {
        self.face_indices.len() / 3
    }

    /// Raw bytes of the vertex array for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn edge_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges)
    }
}
