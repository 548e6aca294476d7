/// Transform matrix builders and rotation state
///
/// Every builder returns a matrix in the row-vector convention used by
/// [`crate::algebra::transform`].
use nalgebra::Vector3;

use crate::algebra::Matrix4x4;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn as_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

#[rustfmt::skip]
pub fn make_translate_matrix(translate: &Vector3<f32>) -> Matrix4x4 {
    Matrix4x4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        translate.x, translate.y, translate.z, 1.0,
    )
}

#[rustfmt::skip]
pub fn make_scale_matrix(scale: &Vector3<f32>) -> Matrix4x4 {
    Matrix4x4::new(
        scale.x, 0.0, 0.0, 0.0,
        0.0, scale.y, 0.0, 0.0,
        0.0, 0.0, scale.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn make_rotate_x_matrix(radian: f32) -> Matrix4x4 {
    let (s, c) = radian.sin_cos();
    Matrix4x4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c, s, 0.0,
        0.0, -s, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn make_rotate_y_matrix(radian: f32) -> Matrix4x4 {
    let (s, c) = radian.sin_cos();
    Matrix4x4::new(
        c, 0.0, -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
        s, 0.0, c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
pub fn make_rotate_z_matrix(radian: f32) -> Matrix4x4 {
    let (s, c) = radian.sin_cos();
    Matrix4x4::new(
        c, s, 0.0, 0.0,
        -s, c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Combined Euler rotation, applied X then Y then Z
pub fn rotation_matrix(rotation: &RotationState) -> Matrix4x4 {
    make_rotate_x_matrix(rotation.x)
        * make_rotate_y_matrix(rotation.y)
        * make_rotate_z_matrix(rotation.z)
}

/// Affine transform composed as `Scale · RotateX · RotateY · RotateZ · Translate`.
///
/// `rotate` holds Euler angles in radians.
pub fn make_affine_matrix(
    scale: &Vector3<f32>,
    rotate: &Vector3<f32>,
    translate: &Vector3<f32>,
) -> Matrix4x4 {
    let rotation = rotation_matrix(&RotationState::new(rotate.x, rotate.y, rotate.z));
    make_scale_matrix(scale) * rotation * make_translate_matrix(translate)
}

/// Perspective projection mapping view-space depth `[near, far]` to `[0, 1]`.
///
/// `near == far` divides by zero; callers must keep them apart.
#[rustfmt::skip]
pub fn make_perspective_fov_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4x4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let depth = far - near;
    Matrix4x4::new(
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, far / depth, 1.0,
        0.0, 0.0, -near * far / depth, 0.0,
    )
}

/// Orthographic projection mapping x and y to `[-1, 1]` and depth to `[0, 1]`
#[rustfmt::skip]
pub fn make_orthographic_matrix(
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    near: f32,
    far: f32,
) -> Matrix4x4 {
    Matrix4x4::new(
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, 1.0 / (far - near), 0.0,
        (left + right) / (left - right), (top + bottom) / (bottom - top), near / (near - far), 1.0,
    )
}

/// Full-screen viewport with its origin at the top-left corner
pub fn make_viewport_matrix(width: f32, height: f32) -> Matrix4x4 {
    make_viewport_matrix_region(0.0, 0.0, width, height, 0.0, 1.0)
}

/// Viewport covering a sub-region of the screen.
///
/// Flips Y so NDC up becomes screen-space down, and remaps NDC depth `[0, 1]`
/// to `[min_depth, max_depth]`.
#[rustfmt::skip]
pub fn make_viewport_matrix_region(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Matrix4x4 {
    Matrix4x4::new(
        width / 2.0, 0.0, 0.0, 0.0,
        0.0, -height / 2.0, 0.0, 0.0,
        0.0, 0.0, max_depth - min_depth, 0.0,
        left + width / 2.0, top + height / 2.0, min_depth, 1.0,
    )
}
