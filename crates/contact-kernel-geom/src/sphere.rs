//! Origin-centered sphere.

use contact_kernel_math::{normalize_or, Dir3, Mat3, Point3, Vec3};

use crate::error::ensure_positive;
use crate::intersect::intersect_sphere;
use crate::{ImplicitSurface, NearestPoint, Ray, RayHit, Result, ShapeKind};

/// A solid sphere of the given radius centered at the origin.
///
/// Implicit function: `f(p) = |p|^2 - r^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Create a sphere. The radius must be finite and strictly positive.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("sphere radius", radius)?,
        })
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ImplicitSurface for Sphere {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn implicit_value(&self, p: &Point3) -> f64 {
        p.coords.norm_squared() - self.radius * self.radius
    }

    fn implicit_gradient(&self, p: &Point3) -> Vec3 {
        2.0 * p.coords
    }

    fn implicit_hessian(&self, _p: &Point3) -> Mat3 {
        Mat3::identity() * 2.0
    }

    fn intersects_ray(&self, ray: &Ray) -> Option<RayHit> {
        intersect_sphere(ray, self)
    }

    fn find_nearest_point(&self, p: &Point3) -> NearestPoint {
        // The center has no preferred direction; report the +x pole.
        let normal = normalize_or(p.coords, Dir3::new_normalize(Vec3::x()));
        NearestPoint {
            point: Point3::from(self.radius * normal.as_ref()),
            inside: p.coords.norm() <= self.radius,
            normal,
        }
    }

    fn bounding_radius(&self) -> Option<f64> {
        Some(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    #[test]
    fn test_sphere_rejects_bad_radius() {
        assert!(Sphere::new(0.0).is_err());
        assert!(Sphere::new(-3.5).is_err());
        assert!(Sphere::new(f64::NAN).is_err());
        assert_eq!(Sphere::new(3.5).unwrap().radius(), 3.5);
    }

    #[test]
    fn test_sphere_nearest_point_random() {
        let radius = 3.5;
        let sphere = Sphere::new(radius).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let normal = Normal::new(0.0, 3.0).unwrap();
        for _ in 0..100 {
            let pos = Point3::new(
                normal.sample(&mut rng),
                normal.sample(&mut rng),
                normal.sample(&mut rng),
            );
            let nearest = sphere.find_nearest_point(&pos);
            let dir = pos.coords.normalize();
            assert_relative_eq!(nearest.point.coords, dir * radius, epsilon = 1e-12);
            assert_eq!(nearest.inside, pos.coords.norm() <= radius);
            assert_relative_eq!(nearest.normal.into_inner(), dir, epsilon = 1e-12);
            assert!(sphere.implicit_value(&nearest.point).abs() < 1e-10);
        }
    }

    #[test]
    fn test_sphere_nearest_point_at_center() {
        let sphere = Sphere::new(2.0).unwrap();
        let nearest = sphere.find_nearest_point(&Point3::origin());
        assert!(nearest.inside);
        assert_relative_eq!(nearest.point, Point3::new(2.0, 0.0, 0.0));
        assert!((nearest.normal.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_nearest_point_idempotent() {
        let sphere = Sphere::new(3.5).unwrap();
        let on_surface = Point3::from(Vec3::new(1.0, -2.0, 0.5).normalize() * 3.5);
        let nearest = sphere.find_nearest_point(&on_surface);
        assert_relative_eq!(nearest.point, on_surface, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_curvature() {
        let sphere = Sphere::new(2.0).unwrap();
        let p = Point3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(sphere.gaussian_curvature(&p), 0.25, epsilon = 1e-12);
        let t = Dir3::new_normalize(Vec3::x());
        assert_relative_eq!(sphere.normal_curvature(&p, &t), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_project_to_surface() {
        let sphere = Sphere::new(3.0).unwrap();
        let p = Point3::new(3.01, 0.02, -0.01);
        let projected = sphere.project_to_surface(&p, 4);
        assert!(sphere.implicit_value(&projected).abs() < 1e-10);
    }
}
