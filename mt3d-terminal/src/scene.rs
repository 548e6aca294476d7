/// Demo scenes: primitive state, per-frame collision checks and line lists
use clap::ValueEnum;
use mt3d_core::collision::{
    aabb_aabb, closest_point, segment_plane, segment_plane_point, segment_triangle, sphere_aabb,
    sphere_plane, sphere_sphere,
};
use mt3d_core::wireframe::{
    aabb_edges, bezier_lines, grid_lines, plane_quad, sphere_lines, triangle_edges,
};
use mt3d_core::{Aabb, Line, Plane, Segment, Sphere, Triangle};
use nalgebra::{Point3, Vector3};
use tracing::debug;

/// Radius of the small spheres marking points of interest
const MARKER_RADIUS: f32 = 0.05;
const BEZIER_SEGMENTS: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    Grid,
    SpherePlane,
    SphereSphere,
    SegmentPlane,
    Triangle,
    Aabb,
    AabbAabb,
    Bezier,
    ClosestPoint,
}

impl SceneKind {
    pub const ALL: [SceneKind; 9] = [
        SceneKind::Grid,
        SceneKind::SpherePlane,
        SceneKind::SphereSphere,
        SceneKind::SegmentPlane,
        SceneKind::Triangle,
        SceneKind::Aabb,
        SceneKind::AabbAabb,
        SceneKind::Bezier,
        SceneKind::ClosestPoint,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Grid => "Grid",
            SceneKind::SpherePlane => "Sphere / Plane",
            SceneKind::SphereSphere => "Sphere / Sphere",
            SceneKind::SegmentPlane => "Segment / Plane",
            SceneKind::Triangle => "Segment / Triangle",
            SceneKind::Aabb => "Sphere / AABB",
            SceneKind::AabbAabb => "AABB / AABB",
            SceneKind::Bezier => "Bezier",
            SceneKind::ClosestPoint => "Closest Point",
        }
    }
}

/// How a line should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Grid,
    Shape,
    Hit,
    Plane,
    Marker,
}

/// Primitive state for one demo scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub kind: SceneKind,
    pub sphere: Sphere,
    pub plane: Plane,
    pub segment: Segment,
    pub triangle: Triangle,
    pub aabb: Aabb,
    /// Fixed partner for the sphere-sphere and box-box scenes
    pub other_sphere: Sphere,
    pub other_aabb: Aabb,
    pub control_points: [Point3<f32>; 3],
    pub point: Point3<f32>,
    hit: bool,
}

impl Scene {
    pub fn new(kind: SceneKind) -> Self {
        let segment = match kind {
            SceneKind::ClosestPoint => {
                Segment::new(Point3::new(-2.0, -1.0, 0.0), Vector3::new(3.0, 2.0, 2.0))
            }
            SceneKind::SegmentPlane => {
                Segment::new(Point3::new(-0.7, 0.3, 0.0), Vector3::new(2.0, -0.5, 0.0))
            }
            _ => Segment::new(Point3::new(-1.0, 1.0, -2.0), Vector3::new(2.0, -2.0, 4.0)),
        };
        let mut scene = Self {
            kind,
            sphere: Sphere::new(Point3::new(0.0, 0.0, 0.5), 1.0),
            plane: Plane::default(),
            segment,
            triangle: Triangle::new(
                Point3::new(-0.5, 0.0, 0.0),
                Point3::new(0.5, 0.0, 0.0),
                Point3::new(0.0, -1.0, 0.0),
            ),
            aabb: Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.0, 0.2, 1.0)),
            other_sphere: Sphere::new(Point3::new(1.5, 0.5, 0.5), 0.6),
            other_aabb: Aabb::new(Point3::new(-0.2, 0.0, 0.0), Point3::new(0.6, 0.8, 0.6)),
            control_points: [
                Point3::new(-0.8, 0.58, 1.0),
                Point3::new(1.76, 1.0, -0.3),
                Point3::new(0.94, -0.7, 2.3),
            ],
            point: Point3::new(-1.5, 0.6, 0.6),
            hit: false,
        };
        if kind == SceneKind::Aabb {
            scene.sphere = Sphere::new(Point3::new(1.0, 0.5, 0.0), 0.6);
        }
        scene.update();
        scene
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Move the scene's editable primitive
    pub fn nudge(&mut self, delta: Vector3<f32>) {
        match self.kind {
            SceneKind::Grid => {}
            SceneKind::SpherePlane | SceneKind::SphereSphere | SceneKind::Aabb => {
                self.sphere.center += delta
            }
            SceneKind::AabbAabb => {
                self.aabb.min += delta;
                self.aabb.max += delta;
            }
            SceneKind::SegmentPlane | SceneKind::Triangle => self.segment.origin += delta,
            SceneKind::Bezier => self.control_points[1] += delta,
            SceneKind::ClosestPoint => self.point += delta,
        }
    }

    /// Grow or shrink the scene's editable primitive
    pub fn resize(&mut self, amount: f32) {
        match self.kind {
            SceneKind::SpherePlane | SceneKind::SphereSphere => {
                self.sphere.radius = (self.sphere.radius + amount).max(0.0)
            }
            SceneKind::SegmentPlane => self.plane.distance += amount,
            SceneKind::Triangle => self.segment.diff *= 1.0 + amount,
            // Unsorted bounds are fixed up in `update`
            SceneKind::Aabb | SceneKind::AabbAabb => self.aabb.max += Vector3::repeat(amount),
            SceneKind::Grid | SceneKind::Bezier | SceneKind::ClosestPoint => {}
        }
    }

    /// Re-establish invariants after edits and recompute the collision state
    pub fn update(&mut self) {
        self.plane.normalize();
        self.aabb.sort_bounds();
        self.other_aabb.sort_bounds();

        let hit = match self.kind {
            SceneKind::Grid | SceneKind::Bezier | SceneKind::ClosestPoint => false,
            SceneKind::SpherePlane => sphere_plane(&self.sphere, &self.plane),
            SceneKind::SphereSphere => sphere_sphere(&self.sphere, &self.other_sphere),
            SceneKind::SegmentPlane => segment_plane(&self.segment, &self.plane),
            SceneKind::Triangle => segment_triangle(&self.segment, &self.triangle),
            SceneKind::Aabb => sphere_aabb(&self.sphere, &self.aabb),
            SceneKind::AabbAabb => aabb_aabb(&self.aabb, &self.other_aabb),
        };
        if hit != self.hit {
            debug!(scene = ?self.kind, hit, "collision state changed");
        }
        self.hit = hit;
    }

    /// Every line to draw this frame, grid first
    pub fn lines(&self) -> Vec<(Line, Shade)> {
        let mut lines = tag(grid_lines(), Shade::Grid);
        let shape = if self.hit { Shade::Hit } else { Shade::Shape };

        match self.kind {
            SceneKind::Grid => {}
            SceneKind::SpherePlane => {
                lines.extend(tag(plane_quad(&self.plane), Shade::Plane));
                lines.extend(tag(sphere_lines(&self.sphere), shape));
            }
            SceneKind::SphereSphere => {
                lines.extend(tag(sphere_lines(&self.other_sphere), Shade::Plane));
                lines.extend(tag(sphere_lines(&self.sphere), shape));
            }
            SceneKind::SegmentPlane => {
                lines.extend(tag(plane_quad(&self.plane), Shade::Plane));
                lines.push(((self.segment.origin, self.segment.end()), shape));
                if let Some(point) = segment_plane_point(&self.segment, &self.plane) {
                    lines.extend(tag(sphere_lines(&marker(point)), Shade::Marker));
                }
            }
            SceneKind::Triangle => {
                lines.extend(tag(triangle_edges(&self.triangle), Shade::Plane));
                lines.push(((self.segment.origin, self.segment.end()), shape));
            }
            SceneKind::Aabb => {
                lines.extend(tag(aabb_edges(&self.aabb), shape));
                lines.extend(tag(sphere_lines(&self.sphere), Shade::Shape));
            }
            SceneKind::AabbAabb => {
                lines.extend(tag(aabb_edges(&self.other_aabb), Shade::Plane));
                lines.extend(tag(aabb_edges(&self.aabb), shape));
            }
            SceneKind::Bezier => {
                let [p0, p1, p2] = &self.control_points;
                lines.extend(tag(bezier_lines(p0, p1, p2, BEZIER_SEGMENTS), Shade::Shape));
                for point in &self.control_points {
                    lines.extend(tag(sphere_lines(&marker(*point)), Shade::Marker));
                }
            }
            SceneKind::ClosestPoint => {
                lines.push(((self.segment.origin, self.segment.end()), Shade::Shape));
                let closest = closest_point(&self.point, &self.segment);
                lines.extend(tag(sphere_lines(&marker(self.point)), Shade::Marker));
                lines.extend(tag(sphere_lines(&marker(closest)), Shade::Hit));
            }
        }
        lines
    }
}

fn marker(center: Point3<f32>) -> Sphere {
    Sphere::new(center, MARKER_RADIUS)
}

fn tag(lines: Vec<Line>, shade: Shade) -> Vec<(Line, Shade)> {
    lines.into_iter().map(|line| (line, shade)).collect()
}
