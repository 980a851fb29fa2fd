//! The half-space `x >= 0`.

use contact_kernel_math::{Dir3, Mat3, Point3, Vec3};

use crate::intersect::intersect_half_space;
use crate::{ImplicitSurface, NearestPoint, Ray, RayHit, ShapeKind};

/// The solid half-space `x >= 0`, bounded by the plane `x = 0`.
///
/// Implicit function: `f(p) = -x`. The outward normal is `(-1, 0, 0)`
/// everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HalfSpace;

impl HalfSpace {
    /// Create the half-space.
    pub fn new() -> Self {
        Self
    }

    /// The constant outward normal `(-1, 0, 0)`.
    pub fn outward_normal() -> Dir3 {
        Dir3::new_unchecked(-Vec3::x())
    }
}

impl ImplicitSurface for HalfSpace {
    fn kind(&self) -> ShapeKind {
        ShapeKind::HalfSpace
    }

    fn implicit_value(&self, p: &Point3) -> f64 {
        -p.x
    }

    fn implicit_gradient(&self, _p: &Point3) -> Vec3 {
        -Vec3::x()
    }

    fn implicit_hessian(&self, _p: &Point3) -> Mat3 {
        Mat3::zeros()
    }

    fn intersects_ray(&self, ray: &Ray) -> Option<RayHit> {
        intersect_half_space(ray)
    }

    fn find_nearest_point(&self, p: &Point3) -> NearestPoint {
        NearestPoint {
            point: Point3::new(0.0, p.y, p.z),
            inside: p.x >= 0.0,
            normal: Self::outward_normal(),
        }
    }

    fn bounding_radius(&self) -> Option<f64> {
        None
    }
}
