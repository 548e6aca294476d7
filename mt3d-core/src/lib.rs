/// MT3D Core Library - Shared affine geometry and intersection logic
///
/// This library provides the stateless core for the demo scenes: vector and
/// matrix algebra, transform builders, primitive collision queries, a camera,
/// and wireframe generation. It never draws or reads input devices.

pub mod algebra;
pub mod camera;
pub mod collision;
pub mod error;
pub mod geometry;
pub mod transform;
pub mod wireframe;

// Re-export commonly used types
pub use algebra::Matrix4x4;
pub use camera::Camera;
pub use error::GeomError;
pub use geometry::{Aabb, Plane, Segment, Sphere, Triangle};
pub use transform::RotationState;
pub use wireframe::Line;
