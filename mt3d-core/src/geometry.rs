/// Geometry primitives used by the collision queries
use nalgebra::{Point3, Vector3};

use crate::algebra::{dot, normalize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Plane `dot(p, normal) == distance`
///
/// Predicates assume `normal` is unit length. Call [`Plane::normalize`] after editing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vector3<f32>, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane through `point` with the given normal
    pub fn from_point(normal: Vector3<f32>, point: &Point3<f32>) -> Self {
        let normal = normalize(&normal);
        Self {
            normal,
            distance: dot(&point.coords, &normal),
        }
    }

    pub fn normalize(&mut self) {
        self.normal = normalize(&self.normal);
    }

    /// Signed distance from `point` to the plane, positive on the normal's side
    pub fn signed_distance(&self, point: &Point3<f32>) -> f32 {
        dot(&point.coords, &self.normal) - self.distance
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vector3::y(), 0.0)
    }
}

/// Line segment from `origin` to `origin + diff`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub origin: Point3<f32>,
    pub diff: Vector3<f32>,
}

impl Segment {
    pub fn new(origin: Point3<f32>, diff: Vector3<f32>) -> Self {
        Self { origin, diff }
    }

    pub fn end(&self) -> Point3<f32> {
        self.origin + self.diff
    }

    pub fn point_at(&self, t: f32) -> Point3<f32> {
        self.origin + self.diff * t
    }
}

/// Axis-aligned bounding box
///
/// Queries expect `min <= max` on every axis; they never re-sort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Swap any component where `min` ended up above `max`
    pub fn sort_bounds(&mut self) {
        for i in 0..3 {
            if self.min[i] > self.max[i] {
                std::mem::swap(&mut self.min[i], &mut self.max[i]);
            }
        }
    }

    pub fn contains(&self, point: &Point3<f32>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    /// Point of the box closest to `point`.
    ///
    /// Unsorted bounds still give an answer (the `max` bound wins) instead of panicking.
    pub fn clamp(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
            point.z.max(self.min.z).min(self.max.z),
        )
    }

    /// The eight corners, bit 0/1/2 of the index selecting max on x/y/z
    pub fn corners(&self) -> [Point3<f32>; 8] {
        std::array::from_fn(|i| {
            Point3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}

/// A triangle face defined by three vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Face normal, following the vertex order given. Zero for a degenerate triangle.
    pub fn normal(&self) -> Vector3<f32> {
        let v0 = self.vertices[0];
        let v1 = self.vertices[1];
        let v2 = self.vertices[2];

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        normalize(&edge1.cross(&edge2))
    }

    /// The plane containing the triangle
    pub fn plane(&self) -> Plane {
        let normal = self.normal();
        Plane::new(normal, dot(&self.vertices[0].coords, &normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_end() {
        let segment = Segment::new(Point3::new(-2.0, -1.0, 0.0), Vector3::new(3.0, 2.0, 2.0));
        assert_eq!(segment.end(), Point3::new(1.0, 1.0, 2.0));
        assert_eq!(segment.point_at(0.0), segment.origin);
    }

    #[test]
    fn test_plane_signed_distance() {
        let mut plane = Plane::new(Vector3::new(0.0, 2.0, 0.0), 1.0);
        plane.normalize();
        assert_eq!(plane.normal, Vector3::y());
        assert_eq!(plane.signed_distance(&Point3::new(5.0, 3.0, -1.0)), 2.0);
        assert_eq!(plane.signed_distance(&Point3::new(0.0, -1.0, 0.0)), -2.0);
    }

    #[test]
    fn test_plane_from_point() {
        let plane = Plane::from_point(Vector3::new(0.0, 0.0, 3.0), &Point3::new(1.0, 1.0, 4.0));
        assert_eq!(plane.normal, Vector3::z());
        assert_eq!(plane.distance, 4.0);
    }

    #[test]
    fn test_aabb_sort_bounds() {
        let mut aabb = Aabb::new(Point3::new(1.0, -1.0, 2.0), Point3::new(-1.0, 1.0, 0.0));
        aabb.sort_bounds();
        assert_eq!(aabb.min, Point3::new(-1.0, -1.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_aabb_clamp_and_corners() {
        let aabb = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.0, 0.2, 1.0));
        assert_eq!(
            aabb.clamp(&Point3::new(3.0, 0.0, -4.0)),
            Point3::new(0.0, 0.0, -0.5)
        );
        let corners = aabb.corners();
        assert_eq!(corners[0], aabb.min);
        assert_eq!(corners[7], aabb.max);
        assert!(corners.iter().all(|c| aabb.contains(c)));
    }

    #[test]
    fn test_triangle_normal_follows_winding() {
        let ccw = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(ccw.normal(), Vector3::z());

        let cw = Triangle::new(ccw.vertices[0], ccw.vertices[2], ccw.vertices[1]);
        assert_eq!(cw.normal(), -Vector3::z());
    }

    #[test]
    fn test_degenerate_triangle_normal_is_zero() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let triangle = Triangle::new(p, p, Point3::new(2.0, 4.0, 6.0));
        assert_eq!(triangle.normal(), Vector3::zeros());
    }
}
