//! Oriented rotation planes
//!
//! A 4D rotation happens in a plane spanned by two axes. The puzzle
//! distinguishes direction: `XY` carries X towards Y, while `YX` carries
//! Y towards X. That gives 12 oriented pairs from the 6 planes.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::{mat4, Axis, Mat4, Vec4};

/// An ordered pair of distinct axes naming a directed rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationAxisPair {
    XY,
    YX,
    XZ,
    ZX,
    XW,
    WX,
    YZ,
    ZY,
    YW,
    WY,
    ZW,
    WZ,
}

impl RotationAxisPair {
    /// Canonical ordering. Rule tables are indexed by position in this list.
    pub const ALL: [RotationAxisPair; 12] = [
        Self::XY, Self::YX, Self::XZ, Self::ZX, Self::XW, Self::WX,
        Self::YZ, Self::ZY, Self::YW, Self::WY, Self::ZW, Self::WZ,
    ];

    /// Position in [`RotationAxisPair::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The (from, to) axes of the rotation
    pub const fn axes(self) -> (Axis, Axis) {
        use Axis::*;
        match self {
            Self::XY => (X, Y),
            Self::YX => (Y, X),
            Self::XZ => (X, Z),
            Self::ZX => (Z, X),
            Self::XW => (X, W),
            Self::WX => (W, X),
            Self::YZ => (Y, Z),
            Self::ZY => (Z, Y),
            Self::YW => (Y, W),
            Self::WY => (W, Y),
            Self::ZW => (Z, W),
            Self::WZ => (W, Z),
        }
    }

    /// Look up the pair rotating `from` towards `to`. `None` if the axes coincide.
    pub fn from_axes(from: Axis, to: Axis) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.axes() == (from, to))
    }

    /// Parse a two-letter name such as `"ZW"` (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let from = Axis::from_symbol(chars.next()?)?;
        let to = Axis::from_symbol(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Self::from_axes(from, to)
    }

    /// The same plane traversed in the opposite direction
    pub fn reversed(self) -> Self {
        // Both orientations of a plane sit side by side in ALL.
        Self::ALL[self.index() ^ 1]
    }

    /// Rotation matrix for this pair at `angle` radians
    pub fn matrix(self, angle: f32) -> Mat4 {
        let (a, b) = self.axes();
        mat4::plane_rotation(angle, a.index(), b.index())
    }

    /// Rotate a point by `angle` radians in this pair's plane and direction
    pub fn rotate(self, point: Vec4, angle: f32) -> Vec4 {
        mat4::transform(self.matrix(angle), point)
    }
}

impl fmt::Display for RotationAxisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.axes();
        write!(f, "{}{}", a.symbol(), b.symbol())
    }
}
