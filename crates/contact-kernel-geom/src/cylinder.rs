//! Infinite right circular cylinder about the z axis.

use contact_kernel_math::{normalize_or, Dir3, Mat3, Point3, Vec3};

use crate::error::ensure_positive;
use crate::intersect::intersect_cylinder;
use crate::{ImplicitSurface, NearestPoint, Ray, RayHit, Result, ShapeKind};

/// An infinite solid cylinder of the given radius whose axis is the z axis.
///
/// Implicit function: `f(p) = x^2 + y^2 - r^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
}

impl Cylinder {
    /// Create a cylinder. The radius must be finite and strictly positive.
    pub fn new(radius: f64) -> Result<Self> {
        Ok(Self {
            radius: ensure_positive("cylinder radius", radius)?,
        })
    }

    /// Radius of the cylinder.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ImplicitSurface for Cylinder {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cylinder
    }

    fn implicit_value(&self, p: &Point3) -> f64 {
        p.x * p.x + p.y * p.y - self.radius * self.radius
    }

    fn implicit_gradient(&self, p: &Point3) -> Vec3 {
        Vec3::new(2.0 * p.x, 2.0 * p.y, 0.0)
    }

    fn implicit_hessian(&self, _p: &Point3) -> Mat3 {
        Mat3::from_diagonal(&Vec3::new(2.0, 2.0, 0.0))
    }

    fn intersects_ray(&self, ray: &Ray) -> Option<RayHit> {
        intersect_cylinder(ray, self)
    }

    fn find_nearest_point(&self, p: &Point3) -> NearestPoint {
        let planar = Vec3::new(p.x, p.y, 0.0);
        // On the axis every radial direction is equally near.
        let normal = normalize_or(planar, Dir3::new_normalize(Vec3::x()));
        let rim = self.radius * normal.as_ref();
        NearestPoint {
            point: Point3::new(rim.x, rim.y, p.z),
            inside: planar.norm() <= self.radius,
            normal,
        }
    }

    fn bounding_radius(&self) -> Option<f64> {
        None
    }
}
