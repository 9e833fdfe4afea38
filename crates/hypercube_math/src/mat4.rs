//! 4x4 matrix utilities for planar rotations
//!
//! In 4D a rotation happens in a plane spanned by two axes. The matrix for
//! such a rotation is the identity except for the 2x2 block at (p1, p2).

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// Positive angles carry axis `p1` towards axis `p2`.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use hypercube_math::mat4::{plane_rotation, transform};
/// use hypercube_math::Vec4;
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 0, 3);
/// let v = transform(m, Vec4::new(1.0, 0.0, 0.0, 0.0));
/// assert!((v.w - 1.0).abs() < 1e-6);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Rotate a point by `angle` radians in the (dim1, dim2) plane.
///
/// The two remaining coordinates are left untouched.
pub fn rotate(point: Vec4, dim1: usize, dim2: usize, angle: f32) -> Vec4 {
    transform(plane_rotation(angle, dim1, dim2), point)
}
