//! 4D geometry for the hypercube puzzle
//!
//! This crate provides the point type, planar rotations, projection and the
//! combinatorial lattice of the tesseract.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Axis`] / [`AxisMask`] - the four axes and sets of them
//! - [`RotationAxisPair`] - one of the 12 directed rotation planes
//! - [`Mat4`] - 4x4 matrix for plane rotations
//! - [`Projection`] - 4D to 3D perspective projection
//!
//! ## Lattice
//!
//! - [`ShapeDescriptor`] - per-axis Low/High/Free description of a sub-element
//! - [`Tesseract`] - vertices, edges and faces derived from index bit patterns

mod vec4;
mod axis;
pub mod mat4;
pub mod rotation;
pub mod shape;
pub mod tesseract;
pub mod projection;
pub mod easing;

pub use vec4::Vec4;
pub use axis::{Axis, AxisMask};
pub use mat4::Mat4;
pub use rotation::RotationAxisPair;
pub use shape::{AxisState, ShapeDescriptor};
pub use tesseract::{Edge, Face, Tesseract, VERTEX_COUNT, EDGE_COUNT, FACE_COUNT};
pub use projection::Projection;
