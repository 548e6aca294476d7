/// Vector and matrix algebra on fixed-size 3D types
///
/// Matrices follow the row-vector convention: a point is a row `[x y z 1]`
/// multiplied on the left, `p' = p · M`. Element `m[(row, col)]` is row-major,
/// so translation lives in row 3 and the perspective term in `m[(2, 3)]`.
use nalgebra::{Matrix4, Point3, RowVector4, Vector3};
use tracing::{debug, trace};

use crate::error::GeomError;

/// 4x4 matrix in the row-vector convention
pub type Matrix4x4 = Matrix4<f32>;

pub fn add(v1: &Vector3<f32>, v2: &Vector3<f32>) -> Vector3<f32> {
    v1 + v2
}

pub fn subtract(v1: &Vector3<f32>, v2: &Vector3<f32>) -> Vector3<f32> {
    v1 - v2
}

/// Scalar-vector product
pub fn multiply(scalar: f32, v: &Vector3<f32>) -> Vector3<f32> {
    v * scalar
}

/// Matrix product `m1 · m2`. Order matters: with row vectors, `m1` is applied first.
pub fn multiply_matrix(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    m1 * m2
}

pub fn dot(v1: &Vector3<f32>, v2: &Vector3<f32>) -> f32 {
    v1.dot(v2)
}

pub fn cross(v1: &Vector3<f32>, v2: &Vector3<f32>) -> Vector3<f32> {
    v1.cross(v2)
}

pub fn length(v: &Vector3<f32>) -> f32 {
    v.norm()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has zero length
pub fn normalize(v: &Vector3<f32>) -> Vector3<f32> {
    let len = length(v);
    if len == 0.0 {
        trace!("normalize of zero-length vector");
        return Vector3::zeros();
    }
    v / len
}

/// Transform a point with implicit `w = 1`, then apply the perspective divide.
///
/// Returns `None` when the resulting `w` is zero (a point at infinity).
pub fn transform(point: &Point3<f32>, matrix: &Matrix4x4) -> Option<Point3<f32>> {
    let row = RowVector4::new(point.x, point.y, point.z, 1.0) * matrix;
    let w = row[3];
    if w == 0.0 {
        trace!(?point, "transformed point has w = 0");
        return None;
    }
    Some(Point3::new(row[0] / w, row[1] / w, row[2] / w))
}

/// Transform a direction with implicit `w = 0`, ignoring translation
pub fn transform_normal(v: &Vector3<f32>, matrix: &Matrix4x4) -> Vector3<f32> {
    let row = RowVector4::new(v.x, v.y, v.z, 0.0) * matrix;
    Vector3::new(row[0], row[1], row[2])
}

/// General 4x4 inverse
pub fn inverse(matrix: &Matrix4x4) -> Result<Matrix4x4, GeomError> {
    match matrix.try_inverse() {
        Some(inv) if inv.iter().all(|x| x.is_finite()) => Ok(inv),
        _ => {
            debug!(?matrix, "attempted to invert a singular matrix");
            Err(GeomError::SingularMatrix)
        }
    }
}

/// Linear interpolation between two points
pub fn lerp(a: &Point3<f32>, b: &Point3<f32>, t: f32) -> Point3<f32> {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{make_affine_matrix, make_perspective_fov_matrix};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_add_subtract() {
        let a = Vector3::new(1.0, -2.0, 3.5);
        let b = Vector3::new(0.5, 4.0, -1.5);
        assert_eq!(add(&a, &b), Vector3::new(1.5, 2.0, 2.0));
        assert_eq!(subtract(&a, &b), Vector3::new(0.5, -6.0, 5.0));
        assert_eq!(add(&subtract(&a, &b), &b), a);
    }

    #[test]
    fn test_scalar_multiply() {
        let v = Vector3::new(1.0, -2.0, 0.25);
        assert_eq!(multiply(2.0, &v), Vector3::new(2.0, -4.0, 0.5));
        assert_eq!(multiply(0.0, &v), Vector3::zeros());
        assert_relative_eq!(length(&multiply(-3.0, &v)), 3.0 * length(&v), epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(normalize(&Vector3::zeros()), Vector3::zeros());
    }

    #[test]
    fn test_normalize_idempotent() {
        for v in [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1.0, 2.0, 0.5),
            Vector3::new(0.0, 0.0, -7.0),
        ] {
            let once = normalize(&v);
            assert_relative_eq!(length(&once), 1.0, epsilon = 1e-6);
            assert_relative_eq!(normalize(&once), once, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cross_follows_right_hand_rule() {
        let x = Vector3::x();
        let y = Vector3::y();
        assert_eq!(cross(&x, &y), Vector3::z());
        assert_eq!(cross(&y, &x), -Vector3::z());
    }

    #[test]
    fn test_identity_transform() {
        let identity = Matrix4x4::identity();
        for p in [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.5, -2.0, 3.25),
            Point3::new(-100.0, 0.01, 42.0),
        ] {
            assert_eq!(transform(&p, &identity), Some(p));
        }
    }

    #[test]
    fn test_transform_uses_translation_row() {
        let mut m = Matrix4x4::identity();
        m[(3, 0)] = 1.0;
        m[(3, 1)] = 2.0;
        m[(3, 2)] = 3.0;
        let p = transform(&Point3::new(1.0, 1.0, 1.0), &m).unwrap();
        assert_eq!(p, Point3::new(2.0, 3.0, 4.0));

        // Directions ignore the translation row
        let v = transform_normal(&Vector3::new(1.0, 1.0, 1.0), &m);
        assert_eq!(v, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_transform_point_at_infinity() {
        // Perspective matrix gives w = z, so a point on the z = 0 plane has no projection
        let m = make_perspective_fov_matrix(0.45, 16.0 / 9.0, 0.1, 100.0);
        assert_eq!(transform(&Point3::new(1.0, 1.0, 0.0), &m), None);
    }

    #[test]
    fn test_inverse_round_trip() {
        let matrices = [
            make_affine_matrix(
                &Vector3::new(1.0, 1.0, 1.0),
                &Vector3::new(0.2, 0.0, 0.0),
                &Vector3::new(0.0, 2.0, -7.5),
            ),
            make_affine_matrix(
                &Vector3::new(2.0, 0.5, 3.0),
                &Vector3::new(-0.4, 1.2, 2.7),
                &Vector3::new(10.0, -3.0, 0.25),
            ),
            make_perspective_fov_matrix(0.45, 16.0 / 9.0, 0.1, 100.0),
        ];
        for m in matrices {
            let inv = inverse(&m).unwrap();
            assert_abs_diff_eq!(
                multiply_matrix(&m, &inv),
                Matrix4x4::identity(),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_inverse_singular() {
        let mut m = Matrix4x4::identity();
        m[(2, 2)] = 0.0;
        assert_eq!(inverse(&m), Err(GeomError::SingularMatrix));
        assert_eq!(inverse(&Matrix4x4::zeros()), Err(GeomError::SingularMatrix));
    }

    #[test]
    fn test_multiply_is_not_commutative() {
        let a = make_affine_matrix(
            &Vector3::new(1.0, 1.0, 1.0),
            &Vector3::new(0.0, 0.5, 0.0),
            &Vector3::zeros(),
        );
        let b = make_affine_matrix(
            &Vector3::new(1.0, 1.0, 1.0),
            &Vector3::zeros(),
            &Vector3::new(1.0, 0.0, 0.0),
        );
        assert!((multiply_matrix(&a, &b) - multiply_matrix(&b, &a)).norm() > 1e-3);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Point3::new(0.0, 1.0, 2.0);
        let b = Point3::new(4.0, -1.0, 0.0);
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);
        assert_eq!(lerp(&a, &b, 0.5), Point3::new(2.0, 0.0, 1.0));
    }
}
