//! Shape descriptors for sub-elements of the hypercube
//!
//! A descriptor fixes some axes to their low or high side and leaves the
//! rest free. Four fixed axes describe a vertex, three an edge, two a face,
//! one a cube, none the whole hypercube.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::{Axis, AxisMask};

/// State of one axis in a shape descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisState {
    /// Fixed to the negative side (vertex bit clear)
    Low,
    /// Fixed to the positive side (vertex bit set)
    High,
    /// Not fixed
    Free,
}

impl AxisState {
    /// Fixed state for a side flag (`false` = low, `true` = high)
    #[inline]
    pub const fn fixed(high: bool) -> Self {
        if high { AxisState::High } else { AxisState::Low }
    }

    #[inline]
    pub fn is_fixed(self) -> bool {
        self != AxisState::Free
    }

    /// Whether a vertex bit value is allowed by this state
    #[inline]
    pub fn admits(self, bit_set: bool) -> bool {
        match self {
            AxisState::Low => !bit_set,
            AxisState::High => bit_set,
            AxisState::Free => true,
        }
    }
}

/// Per-axis description of a hypercube element, indexed by [`Axis::index`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeDescriptor(pub [AxisState; 4]);

impl ShapeDescriptor {
    /// The whole hypercube (nothing fixed)
    pub const HYPERCUBE: Self = Self([AxisState::Free; 4]);

    /// Descriptor that fixes exactly the given axes to the given sides
    pub fn with(fixed: &[(Axis, bool)]) -> Self {
        let mut states = [AxisState::Free; 4];
        for &(axis, high) in fixed {
            states[axis.index()] = AxisState::fixed(high);
        }
        Self(states)
    }

    /// The descriptor of a single vertex (all four axes fixed)
    pub fn vertex(index: usize) -> Self {
        let mut states = [AxisState::Free; 4];
        for axis in Axis::ALL {
            states[axis.index()] = AxisState::fixed(index & axis.bit() != 0);
        }
        Self(states)
    }

    #[inline]
    pub fn state(&self, axis: Axis) -> AxisState {
        self.0[axis.index()]
    }

    /// Axes that are fixed
    pub fn fixed_axes(&self) -> AxisMask {
        Axis::ALL
            .into_iter()
            .filter(|a| self.state(*a).is_fixed())
            .fold(AxisMask::empty(), |m, a| m | a.mask())
    }

    /// Number of fixed axes
    pub fn fixed_count(&self) -> u32 {
        self.fixed_axes().count()
    }

    /// True for a genuine 2D face: exactly two fixed axes
    pub fn is_face(&self) -> bool {
        self.fixed_count() == 2
    }

    /// Whether the vertex lies on this element
    pub fn matches(&self, vertex: usize) -> bool {
        Axis::ALL
            .into_iter()
            .all(|a| self.state(a).admits(vertex & a.bit() != 0))
    }

    /// Vertices lying on this element, ascending
    pub fn members(&self) -> Vec<usize> {
        (0..crate::tesseract::VERTEX_COUNT).filter(|&v| self.matches(v)).collect()
    }
}

impl fmt::Display for ShapeDescriptor {
    /// Human-readable name such as `zig-front face` or `zag-top-back-left vertex`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = Axis::NAMING_ORDER
            .into_iter()
            .filter_map(|a| match self.state(a) {
                AxisState::Low => Some(a.side_names()[0]),
                AxisState::High => Some(a.side_names()[1]),
                AxisState::Free => None,
            })
            .collect();

        let kind = match words.len() {
            0 => return write!(f, "hypercube"),
            1 => "cube",
            2 => "face",
            3 => "edge",
            _ => "vertex",
        };
        write!(f, "{} {}", words.join("-"), kind)
    }
}
