/// Intersection and closest-point queries between primitives
///
/// All queries are inclusive at the boundary: touching counts as intersecting.
use nalgebra::{Point3, Vector3};
use tracing::trace;

use crate::algebra::{dot, length};
use crate::geometry::{Aabb, Plane, Segment, Sphere, Triangle};

/// Slack allowed on barycentric weights so points on an edge count as inside
pub const BARYCENTRIC_EPSILON: f32 = 1e-5;

pub fn sphere_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane.signed_distance(&sphere.center).abs() <= sphere.radius
}

pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    length(&(b.center - a.center)) <= a.radius + b.radius
}

/// True when the segment's endpoints lie on opposite sides of the plane, or either lies on it
pub fn segment_plane(segment: &Segment, plane: &Plane) -> bool {
    let d1 = plane.signed_distance(&segment.origin);
    let d2 = plane.signed_distance(&segment.end());
    d1 * d2 <= 0.0
}

/// Point where the segment crosses the plane.
///
/// `None` when the segment misses the plane, or runs parallel to it so the
/// crossing is not a single point.
pub fn segment_plane_point(segment: &Segment, plane: &Plane) -> Option<Point3<f32>> {
    let d1 = plane.signed_distance(&segment.origin);
    let d2 = plane.signed_distance(&segment.end());
    if d1 * d2 > 0.0 || d1 == d2 {
        return None;
    }
    Some(segment.point_at(d1 / (d1 - d2)))
}

pub fn segment_triangle(segment: &Segment, triangle: &Triangle) -> bool {
    let plane = triangle.plane();
    let d1 = plane.signed_distance(&segment.origin);
    let d2 = plane.signed_distance(&segment.end());

    if d1 * d2 > 0.0 {
        return false;
    }
    // Both ends on the plane (or a triangle with no normal): no single crossing point
    if d1 == d2 {
        trace!(?segment, ?triangle, "segment is parallel to the triangle plane");
        return false;
    }

    let t = d1 / (d1 - d2);
    let point = segment.point_at(t);

    let [v0, v1, v2] = triangle.vertices;
    let e0 = v1 - v0;
    let e1 = v2 - v0;
    let ep = point - v0;

    let d00 = dot(&e0, &e0);
    let d01 = dot(&e0, &e1);
    let d11 = dot(&e1, &e1);
    let d20 = dot(&ep, &e0);
    let d21 = dot(&ep, &e1);

    // Equals |e0 x e1|^2; exact degenerate triangles already left at `d1 == d2`,
    // so this only catches products that underflow to zero
    let denom = d00 * d11 - d01 * d01;
    if denom == 0.0 {
        trace!(?triangle, "barycentric denominator vanished");
        return false;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    let u = 1.0 - v - w;

    u >= -BARYCENTRIC_EPSILON && v >= -BARYCENTRIC_EPSILON && w >= -BARYCENTRIC_EPSILON
}

pub fn sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    let closest = aabb.clamp(&sphere.center);
    (closest - sphere.center).norm_squared() <= sphere.radius * sphere.radius
}

pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    (0..3).all(|i| a.min[i] <= b.max[i] && a.max[i] >= b.min[i])
}

/// Projection of `v1` onto `v2`, or zero when `v2` has zero length
pub fn project(v1: &Vector3<f32>, v2: &Vector3<f32>) -> Vector3<f32> {
    let len_sq = dot(v2, v2);
    if len_sq == 0.0 {
        return Vector3::zeros();
    }
    v2 * (dot(v1, v2) / len_sq)
}

/// Point on the segment nearest to `point`. A zero-length segment yields its origin.
pub fn closest_point(point: &Point3<f32>, segment: &Segment) -> Point3<f32> {
    let len_sq = dot(&segment.diff, &segment.diff);
    if len_sq == 0.0 {
        return segment.origin;
    }
    let t = (dot(&(point - segment.origin), &segment.diff) / len_sq).clamp(0.0, 1.0);
    segment.point_at(t)
}

/// Some vector orthogonal to `v`
pub fn perpendicular(v: &Vector3<f32>) -> Vector3<f32> {
    if v.x != 0.0 || v.y != 0.0 {
        return Vector3::new(-v.y, v.x, 0.0);
    }
    Vector3::new(0.0, -v.z, v.y)
}
