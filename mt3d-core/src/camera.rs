/// Camera and projection utilities
use nalgebra::{Point3, RowVector4, Vector3};
use std::f32::consts::FRAC_PI_2;

use crate::algebra::{inverse, Matrix4x4};
use crate::error::GeomError;
use crate::transform::{
    make_affine_matrix, make_perspective_fov_matrix, make_viewport_matrix, RotationState,
};

/// Radians of rotation per unit of pointer movement
pub const ORBIT_SENSITIVITY: f32 = 0.005;
/// World units of movement per unit of pointer movement
pub const PAN_SPEED: f32 = 0.01;
/// World units of movement per wheel notch
pub const ZOOM_SPEED: f32 = 0.05;
/// Raw wheel delta reported for one notch
pub const WHEEL_NOTCH: f32 = 120.0;
/// Pitch stays this far from straight up or down
const PITCH_MARGIN: f32 = 0.01;

/// Camera placed by an Euler rotation and a translation.
///
/// The view matrix is the inverse of the camera's own world matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub translate: Vector3<f32>,
    pub rotate: RotationState,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            translate: Vector3::new(0.0, 2.0, -7.5),
            rotate: RotationState::new(0.2, 0.0, 0.0),
            fov_y: 0.45,
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Camera-to-world transform
    pub fn world_matrix(&self) -> Matrix4x4 {
        make_affine_matrix(
            &Vector3::new(1.0, 1.0, 1.0),
            &self.rotate.as_vector(),
            &self.translate,
        )
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Result<Matrix4x4, GeomError> {
        inverse(&self.world_matrix())
    }

    pub fn projection_matrix(&self) -> Matrix4x4 {
        make_perspective_fov_matrix(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn viewport_matrix(&self) -> Matrix4x4 {
        make_viewport_matrix(self.width, self.height)
    }

    /// `view · projection`
    pub fn view_projection_matrix(&self) -> Result<Matrix4x4, GeomError> {
        Ok(self.view_matrix()? * self.projection_matrix())
    }

    /// Project a world-space point to screen space.
    ///
    /// Screen x and y are in pixels with y pointing down; z is depth in `[0, 1]`
    /// for points between the near and far planes. `Ok(None)` means the point
    /// sits on or behind the camera plane and has no screen position.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
    ) -> Result<Option<Point3<f32>>, GeomError> {
        Ok(project_with(
            point,
            &self.view_projection_matrix()?,
            &self.viewport_matrix(),
        ))
    }

    /// Look direction projected onto the ground plane
    pub fn forward(&self) -> Vector3<f32> {
        let (s, c) = self.rotate.y.sin_cos();
        Vector3::new(s, 0.0, c)
    }

    pub fn right(&self) -> Vector3<f32> {
        let (s, c) = self.rotate.y.sin_cos();
        Vector3::new(c, 0.0, -s)
    }

    /// Rotate from pointer deltas, keeping pitch short of vertical
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.rotate.rotate(dy * ORBIT_SENSITIVITY, dx * ORBIT_SENSITIVITY, 0.0);
        let limit = FRAC_PI_2 - PITCH_MARGIN;
        self.rotate.x = self.rotate.x.clamp(-limit, limit);
    }

    /// Slide the camera opposite to the pointer, along its right axis and world up
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let offset = self.right() * dx + Vector3::y() * dy;
        self.translate -= offset * PAN_SPEED;
    }

    /// Move along the horizontal look direction; positive wheel moves forward
    pub fn zoom(&mut self, wheel: f32) {
        let notches = wheel / WHEEL_NOTCH;
        self.translate += self.forward() * (notches * ZOOM_SPEED);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.aspect = self.width / self.height;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

/// Run a world point through a precomputed view-projection and viewport.
///
/// Returns `None` for points with `w <= 0`, which lie on or behind the camera.
pub fn project_with(
    point: &Point3<f32>,
    view_projection: &Matrix4x4,
    viewport: &Matrix4x4,
) -> Option<Point3<f32>> {
    let clip = RowVector4::new(point.x, point.y, point.z, 1.0) * view_projection;
    let w = clip[3];
    if w <= 0.0 {
        return None;
    }
    let ndc = Point3::new(clip[0] / w, clip[1] / w, clip[2] / w);
    crate::algebra::transform(&ndc, viewport)
}
