//! Regression scenes taken from the demo defaults

use approx::assert_abs_diff_eq;
use mt3d_core::algebra::{inverse, multiply_matrix, transform};
use mt3d_core::collision::{closest_point, segment_triangle, sphere_aabb, sphere_plane};
use mt3d_core::transform::{
    make_affine_matrix, make_perspective_fov_matrix, make_translate_matrix, make_viewport_matrix,
};
use mt3d_core::{Aabb, Matrix4x4, Plane, Segment, Sphere, Triangle};
use nalgebra::{Point3, Vector3};

#[test]
fn segment_crosses_default_triangle() {
    let triangle = Triangle::new(
        Point3::new(-0.5, 0.0, 0.0),
        Point3::new(0.5, 0.0, 0.0),
        Point3::new(0.0, -1.0, 0.0),
    );
    let segment = Segment::new(Point3::new(-1.0, 1.0, -2.0), Vector3::new(2.0, -2.0, 4.0));
    assert!(segment_triangle(&segment, &triangle));
}

#[test]
fn closest_point_is_minimum_over_samples() {
    let segment = Segment::new(Point3::new(-2.0, -1.0, 0.0), Vector3::new(3.0, 2.0, 2.0));
    let point = Point3::new(-1.5, 0.6, 0.6);
    let closest = closest_point(&point, &segment);

    let t = (closest - segment.origin).dot(&segment.diff) / segment.diff.norm_squared();
    assert!((0.0..=1.0).contains(&t));
    assert_abs_diff_eq!(segment.point_at(t), closest, epsilon = 1e-5);

    let best = (closest - point).norm();
    for i in 0..=1000 {
        let sample = segment.point_at(i as f32 / 1000.0);
        assert!(best <= (sample - point).norm() + 1e-5);
    }
}

#[test]
fn sphere_centered_on_plane_always_collides() {
    let mut plane = Plane::new(Vector3::new(0.2, 1.0, -0.4), 0.0);
    plane.normalize();
    let center = Point3::new(1.0, 2.0, 3.0);
    plane.distance = plane.normal.dot(&center.coords);
    for radius in [0.0, 0.01, 1.0, 50.0] {
        assert!(sphere_plane(&Sphere::new(center, radius), &plane));
    }
}

#[test]
fn sphere_touching_box_face_collides() {
    let aabb = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.0, 0.2, 1.0));
    let sphere = Sphere::new(Point3::new(0.0, 0.7, 0.5), 0.5);
    assert!(sphere_aabb(&sphere, &aabb));
}

#[test]
fn perspective_maps_near_and_far_to_depth_range() {
    let (near, far) = (0.1, 100.0);
    let projection = make_perspective_fov_matrix(0.45, 16.0 / 9.0, near, far);
    let camera_z = -5.0;
    let view = make_translate_matrix(&Vector3::new(0.0, 0.0, -camera_z));
    let view_projection = multiply_matrix(&view, &projection);

    let at_near = transform(&Point3::new(0.0, 0.0, camera_z + near), &view_projection).unwrap();
    assert_abs_diff_eq!(at_near.z, 0.0, epsilon = 1e-4);
    let at_far = transform(&Point3::new(0.0, 0.0, camera_z + far), &view_projection).unwrap();
    assert_abs_diff_eq!(at_far.z, 1.0, epsilon = 1e-4);
}

#[test]
fn viewport_sends_clip_top_to_screen_top() {
    let viewport = make_viewport_matrix(1280.0, 720.0);
    let screen = transform(&Point3::new(0.0, 1.0, 0.5), &viewport).unwrap();
    assert_abs_diff_eq!(screen.y, 0.0, epsilon = 1e-4);
}

#[test]
fn camera_chain_round_trips_through_inverse() {
    let camera_world = make_affine_matrix(
        &Vector3::new(1.0, 1.0, 1.0),
        &Vector3::new(0.26, 0.0, 0.0),
        &Vector3::new(0.0, 1.9, -6.49),
    );
    let view = inverse(&camera_world).unwrap();
    assert_abs_diff_eq!(
        multiply_matrix(&camera_world, &view),
        Matrix4x4::identity(),
        epsilon = 1e-4
    );

    // The camera position maps to the view-space origin
    let eye = Point3::new(0.0, 1.9, -6.49);
    assert_abs_diff_eq!(transform(&eye, &view).unwrap(), Point3::origin(), epsilon = 1e-4);
}
