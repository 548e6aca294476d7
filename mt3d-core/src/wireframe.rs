/// World-space line lists for drawing primitives as wireframes
use nalgebra::{Point3, Vector3};
use std::f32::consts::PI;

use crate::algebra::{cross, lerp, normalize};
use crate::collision::perpendicular;
use crate::geometry::{Aabb, Plane, Sphere, Triangle};

/// A line from one world-space point to another
pub type Line = (Point3<f32>, Point3<f32>);

pub const GRID_HALF_WIDTH: f32 = 2.0;
pub const GRID_SUBDIVISION: u32 = 10;
pub const SPHERE_SUBDIVISION: u32 = 10;
/// Distance from the plane's center to each corner of its quad
pub const PLANE_EXTENT: f32 = 2.0;

/// Square grid on the y = 0 plane, lines running along z then along x
pub fn grid_lines() -> Vec<Line> {
    let every = (GRID_HALF_WIDTH * 2.0) / GRID_SUBDIVISION as f32;
    let mut lines = Vec::with_capacity(2 * (GRID_SUBDIVISION as usize + 1));

    for index in 0..=GRID_SUBDIVISION {
        let x = -GRID_HALF_WIDTH + index as f32 * every;
        lines.push((
            Point3::new(x, 0.0, -GRID_HALF_WIDTH),
            Point3::new(x, 0.0, GRID_HALF_WIDTH),
        ));
    }
    for index in 0..=GRID_SUBDIVISION {
        let z = -GRID_HALF_WIDTH + index as f32 * every;
        lines.push((
            Point3::new(-GRID_HALF_WIDTH, 0.0, z),
            Point3::new(GRID_HALF_WIDTH, 0.0, z),
        ));
    }
    lines
}

/// Latitude/longitude wireframe
pub fn sphere_lines(sphere: &Sphere) -> Vec<Line> {
    let lon_every = 2.0 * PI / SPHERE_SUBDIVISION as f32;
    let lat_every = PI / SPHERE_SUBDIVISION as f32;
    let on_sphere = |lat: f32, lon: f32| {
        sphere.center
            + Vector3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()) * sphere.radius
    };

    let mut lines = Vec::with_capacity(2 * (SPHERE_SUBDIVISION * SPHERE_SUBDIVISION) as usize);
    for lat_index in 0..SPHERE_SUBDIVISION {
        let lat = -PI / 2.0 + lat_every * lat_index as f32;
        for lon_index in 0..SPHERE_SUBDIVISION {
            let lon = lon_index as f32 * lon_every;
            let a = on_sphere(lat, lon);
            let b = on_sphere(lat + lat_every, lon);
            let c = on_sphere(lat, lon + lon_every);
            lines.push((a, b));
            lines.push((a, c));
        }
    }
    lines
}

/// Corners of a square patch of the plane centered at `distance * normal`
pub fn plane_corners(plane: &Plane) -> [Point3<f32>; 4] {
    let center = Point3::from(plane.normal * plane.distance);
    let p0 = normalize(&perpendicular(&plane.normal));
    let p2 = cross(&plane.normal, &p0);
    [p0, -p0, p2, -p2].map(|dir| center + dir * PLANE_EXTENT)
}

/// Outline of the plane patch, visiting corners 0, 2, 1, 3
pub fn plane_quad(plane: &Plane) -> Vec<Line> {
    let c = plane_corners(plane);
    vec![(c[0], c[2]), (c[2], c[1]), (c[1], c[3]), (c[3], c[0])]
}

pub fn aabb_edges(aabb: &Aabb) -> Vec<Line> {
    let c = aabb.corners();
    // Pairs of corner indices differing in exactly one bit
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (2, 3),
        (4, 5),
        (6, 7),
        (0, 2),
        (1, 3),
        (4, 6),
        (5, 7),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    EDGES.iter().map(|&(a, b)| (c[a], c[b])).collect()
}

pub fn triangle_edges(triangle: &Triangle) -> Vec<Line> {
    let [v0, v1, v2] = triangle.vertices;
    vec![(v0, v1), (v1, v2), (v2, v0)]
}

/// Quadratic Bézier point by repeated linear interpolation
pub fn bezier_point(p0: &Point3<f32>, p1: &Point3<f32>, p2: &Point3<f32>, t: f32) -> Point3<f32> {
    let a = lerp(p0, p1, t);
    let b = lerp(p1, p2, t);
    lerp(&a, &b, t)
}

/// Quadratic Bézier curve as a polyline of `segments` lines
pub fn bezier_lines(
    p0: &Point3<f32>,
    p1: &Point3<f32>,
    p2: &Point3<f32>,
    segments: u32,
) -> Vec<Line> {
    let segments = segments.max(1);
    (0..segments)
        .map(|i| {
            let t0 = i as f32 / segments as f32;
            let t1 = (i + 1) as f32 / segments as f32;
            (bezier_point(p0, p1, p2, t0), bezier_point(p0, p1, p2, t1))
        })
        .collect()
}
