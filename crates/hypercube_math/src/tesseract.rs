//! Tesseract (4D hypercube) lattice
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w),
//! 32 edges and 24 square faces. Everything here is derived from bit
//! relationships between vertex indices: bit `d` of an index is the sign
//! of coordinate `d`.

use crate::{Axis, AxisMask, AxisState, ShapeDescriptor, Vec4};

/// Number of vertices
pub const VERTEX_COUNT: usize = 1 << 4;
/// Number of edges
pub const EDGE_COUNT: usize = 32;
/// Number of 2D faces
pub const FACE_COUNT: usize = 24;

/// An edge between two vertices whose indices differ in exactly one bit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Lower vertex index
    pub a: usize,
    /// Higher vertex index
    pub b: usize,
}

impl Edge {
    /// The axis along which the edge runs
    pub fn axis(&self) -> Axis {
        let bit = (self.a ^ self.b).trailing_zeros() as usize;
        Axis::ALL[bit & 3]
    }
}

/// A square face, stored as its four corners in the order
/// `(i, i | j, i & j, j)` where `i < j` are the two corners that each carry
/// exactly one of the face's free bits.
///
/// The corner ordering is shared by triangulation and by anything mapping
/// a [`ShapeDescriptor`] to vertices, so it must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    pub corners: [usize; 4],
}

impl Face {
    fn from_diagonal(i: usize, j: usize) -> Self {
        Self { corners: [i, i | j, i & j, j] }
    }

    /// Axes spanning the face
    pub fn free_axes(&self) -> AxisMask {
        AxisMask::from_bits_truncate((self.corners[0] ^ self.corners[3]) as u8)
    }

    /// Descriptor fixing the two non-spanning axes to this face's sides
    pub fn shape(&self) -> ShapeDescriptor {
        let free = self.free_axes();
        let anchor = self.corners[2];
        let mut states = [AxisState::Free; 4];
        for axis in Axis::ALL {
            if !free.contains(axis.mask()) {
                states[axis.index()] = AxisState::fixed(anchor & axis.bit() != 0);
            }
        }
        ShapeDescriptor(states)
    }

    /// Triangles covering the face from both windings, so it renders from
    /// either side: `(i, i|j, i&j)`, `(i|j, i&j, j)` and their reverses.
    pub fn triangles(&self) -> [[usize; 3]; 4] {
        let [i, or, and, j] = self.corners;
        [
            [i, or, and],
            [or, and, j],
            [and, or, i],
            [j, and, or],
        ]
    }
}

/// All vertex indices, `0..16`
pub fn enumerate_vertices() -> [usize; VERTEX_COUNT] {
    std::array::from_fn(|i| i)
}

/// All 32 edges as `(i, j)` with `i < j` and Hamming distance one
pub fn enumerate_edges() -> Vec<Edge> {
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for i in 0..VERTEX_COUNT {
        for j in (i + 1)..VERTEX_COUNT {
            let x = i ^ j;
            if x & (x - 1) == 0 {
                edges.push(Edge { a: i, b: j });
            }
        }
    }
    edges
}

/// All 24 faces.
///
/// A face is emitted for the pair `i < j` when `i ^ j` has exactly two bits
/// set and each of `i`, `j` holds exactly one of those bits; this picks
/// one diagonal per face, so no face is produced twice.
pub fn enumerate_faces() -> Vec<Face> {
    let single_bit = |x: usize| x != 0 && x & (x - 1) == 0;

    let mut faces = Vec::with_capacity(FACE_COUNT);
    for i in 0..VERTEX_COUNT {
        for j in (i + 1)..VERTEX_COUNT {
            let b1 = i ^ j;
            let b2 = b1 & (b1 - 1);
            if single_bit(b2) && single_bit(i & b1) && single_bit(j & b1) {
                faces.push(Face::from_diagonal(i, j));
            }
        }
    }
    faces
}

/// Tesseract lattice with precomputed edges and faces
#[derive(Clone, Debug)]
pub struct Tesseract {
    /// Unrotated vertex positions, indexed by vertex index
    vertices: [Vec4; VERTEX_COUNT],
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Tesseract {
    /// Create the unit-coordinate tesseract (every component ±1)
    pub fn new() -> Self {
        Self {
            vertices: std::array::from_fn(Vec4::lattice_vertex),
            edges: enumerate_edges(),
            faces: enumerate_faces(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The four single-bit neighbours of a vertex, in axis order
    pub fn neighbors(vertex: usize) -> [usize; 4] {
        Axis::ALL.map(|a| vertex ^ a.bit())
    }

    /// Whether two vertices lie on a common 2D face: they agree on at least
    /// two axes.
    pub fn share_face(a: usize, b: usize) -> bool {
        a != b && ((a ^ b) & 0xF).count_ones() <= 2
    }
}

impl Default for Tesseract {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_enumeration() {
        let v = enumerate_vertices();
        assert_eq!(v.len(), 16);
        assert_eq!(v[0], 0);
        assert_eq!(v[15], 15);
    }

    #[test]
    fn test_edge_count_and_hamming_distance() {
        let edges = enumerate_edges();
        assert_eq!(edges.len(), EDGE_COUNT);

        let unique: HashSet<_> = edges.iter().collect();
        assert_eq!(unique.len(), EDGE_COUNT);

        for e in &edges {
            assert!(e.a < e.b);
            assert_eq!((e.a ^ e.b).count_ones(), 1, "edge {:?}", e);
        }
    }

    #[test]
    fn test_every_vertex_has_four_edges() {
        let edges = enumerate_edges();
        for v in 0..VERTEX_COUNT {
            let degree = edges.iter().filter(|e| e.a == v || e.b == v).count();
            assert_eq!(degree, 4);
        }
    }

    #[test]
    fn test_edge_axis() {
        assert_eq!(Edge { a: 0, b: 8 }.axis(), Axis::W);
        assert_eq!(Edge { a: 5, b: 7 }.axis(), Axis::Y);
    }

    #[test]
    fn test_face_count_and_uniqueness() {
        let faces = enumerate_faces();
        assert_eq!(faces.len(), FACE_COUNT);

        let unique: HashSet<[usize; 4]> = faces
            .iter()
            .map(|f| {
                let mut c = f.corners;
                c.sort();
                c
            })
            .collect();
        assert_eq!(unique.len(), FACE_COUNT);
    }

    #[test]
    fn test_faces_span_two_free_axes() {
        for face in enumerate_faces() {
            assert_eq!(face.free_axes().count(), 2, "face {:?}", face);
            let shape = face.shape();
            assert!(shape.is_face());

            let mut members = shape.members();
            let mut corners = face.corners.to_vec();
            members.sort();
            corners.sort();
            assert_eq!(members, corners, "descriptor and corners disagree");
        }
    }

    #[test]
    fn test_face_corner_order() {
        for face in enumerate_faces() {
            let [i, or, and, j] = face.corners;
            assert!(i < j);
            assert_eq!(or, i | j);
            assert_eq!(and, i & j);
            // Consecutive corners around the quad are edges
            assert_eq!((i ^ or).count_ones(), 1);
            assert_eq!((j ^ and).count_ones(), 1);
        }
    }

    #[test]
    fn test_six_planes_four_faces_each() {
        let faces = enumerate_faces();
        for a in 0..4 {
            for b in (a + 1)..4 {
                let mask = AxisMask::from_bits_truncate(((1 << a) | (1 << b)) as u8);
                let n = faces.iter().filter(|f| f.free_axes() == mask).count();
                assert_eq!(n, 4);
            }
        }
    }

    #[test]
    fn test_triangles_cover_face() {
        for face in enumerate_faces() {
            let tris = face.triangles();
            for tri in &tris {
                for v in tri {
                    assert!(face.corners.contains(v));
                }
            }
            // Front and back windings of the same triangle
            assert_eq!(tris[0], [tris[2][2], tris[2][1], tris[2][0]]);
        }
    }

    #[test]
    fn test_tesseract_positions() {
        let t = Tesseract::new();
        assert_eq!(t.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[15], Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(t.edges().len(), EDGE_COUNT);
        assert_eq!(t.faces().len(), FACE_COUNT);
    }

    #[test]
    fn test_neighbors() {
        assert_eq!(Tesseract::neighbors(0), [1, 2, 4, 8]);
        assert_eq!(Tesseract::neighbors(15), [14, 13, 11, 7]);
    }

    #[test]
    fn test_share_face() {
        assert!(Tesseract::share_face(0, 3));
        assert!(Tesseract::share_face(0, 1));
        assert!(!Tesseract::share_face(0, 7));
        assert!(!Tesseract::share_face(4, 4));
        // every vertex shares a face with 4 + 6 = 10 others
        for v in 0..VERTEX_COUNT {
            let n = (0..VERTEX_COUNT).filter(|&u| Tesseract::share_face(v, u)).count();
            assert_eq!(n, 10);
        }
    }
}
