//! 4D to 3D perspective projection
//!
//! Points are viewed from a 4D eye sitting on the +W axis. Coordinates are
//! scaled by `w_distance / (w_distance - w)`, so cells nearer the eye in W
//! appear larger. The map is smooth as long as the eye stays outside the
//! rotated hypercube (`w_distance` > 2, the largest |w| any rotated
//! lattice vertex can reach).

use serde::{Serialize, Deserialize};

use crate::Vec4;

/// Smallest denominator allowed in the perspective divide
const MIN_DEPTH: f32 = 1e-3;

/// Perspective projection parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Distance of the 4D eye from the origin along W
    pub w_distance: f32,
    /// Uniform scale applied to the projected 3D coordinates
    pub scale: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            w_distance: 3.0,
            scale: 1.0,
        }
    }
}

impl Projection {
    pub fn new(w_distance: f32, scale: f32) -> Self {
        Self { w_distance, scale }
    }

    /// Project a 4D point to its 3D render position
    pub fn project(&self, p: Vec4) -> [f32; 3] {
        let depth = (self.w_distance - p.w).max(MIN_DEPTH);
        let k = self.scale * self.w_distance / depth;
        [p.x * k, p.y * k, p.z * k]
    }

    /// Project a batch of points
    pub fn project_all<const N: usize>(&self, points: &[Vec4; N]) -> [[f32; 3]; N] {
        (*points).map(|p| self.project(p))
    }
}
