//! The implicit-surface capability shared by every contact shape.

use contact_kernel_math::{adjugate, normalize_or, Dir3, Mat3, Point3, Vec3};

use crate::{Ray, RayHit};

/// The kind of a contact shape (for match-based dispatch and diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Half-space `x >= 0`.
    HalfSpace,
    /// Origin-centered sphere.
    Sphere,
    /// Infinite cylinder about the z axis.
    Cylinder,
    /// Axis-aligned ellipsoid.
    Ellipsoid,
}

/// Closest boundary point to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// The point on the boundary.
    pub point: Point3,
    /// Whether the query point lies in the closed solid region.
    pub inside: bool,
    /// Outward unit normal at `point`.
    pub normal: Dir3,
}

/// A shape whose boundary is the zero set of a scalar function `f`.
///
/// `f` is negative inside, zero on the boundary and positive outside, so the
/// gradient points out of the solid. All of the kernel's shapes are quadrics,
/// which makes the Hessian constant.
pub trait ImplicitSurface: Send + Sync + std::fmt::Debug {
    /// The kind of this shape.
    fn kind(&self) -> ShapeKind;

    /// Evaluate the implicit function at `p`.
    fn implicit_value(&self, p: &Point3) -> f64;

    /// Gradient of the implicit function at `p`.
    fn implicit_gradient(&self, p: &Point3) -> Vec3;

    /// Hessian of the implicit function at `p`.
    fn implicit_hessian(&self, p: &Point3) -> Mat3;

    /// First forward crossing of the ray with the boundary, if any.
    fn intersects_ray(&self, ray: &Ray) -> Option<RayHit>;

    /// Closest boundary point to `p`.
    fn find_nearest_point(&self, p: &Point3) -> NearestPoint;

    /// Radius of the smallest origin-centered sphere enclosing the shape,
    /// or `None` if the shape is unbounded.
    fn bounding_radius(&self) -> Option<f64>;

    /// Whether `p` lies in the closed solid region.
    fn contains(&self, p: &Point3) -> bool {
        self.implicit_value(p) <= 0.0
    }

    /// Outward unit normal of the level set through `p`.
    fn surface_normal(&self, p: &Point3) -> Dir3 {
        normalize_or(
            self.implicit_gradient(p),
            Dir3::new_normalize(Vec3::x()),
        )
    }

    /// Gaussian curvature of the level set through `p`.
    fn gaussian_curvature(&self, p: &Point3) -> f64 {
        let g = self.implicit_gradient(p);
        let g2 = g.norm_squared();
        if g2 == 0.0 {
            return 0.0;
        }
        let adj = adjugate(&self.implicit_hessian(p));
        g.dot(&(adj * g)) / (g2 * g2)
    }

    /// Normal curvature along the unit tangent `t` at `p`.
    ///
    /// Positive where the surface bends away from the outward normal, e.g.
    /// `1/r` for a sphere of radius `r`.
    fn normal_curvature(&self, p: &Point3, t: &Dir3) -> f64 {
        let g = self.implicit_gradient(p);
        let g_norm = g.norm();
        if g_norm == 0.0 {
            return 0.0;
        }
        t.dot(&(self.implicit_hessian(p) * t.as_ref())) / g_norm
    }

    /// Pull a point near the boundary onto it with Newton steps along the
    /// gradient. Cheaper than [`find_nearest_point`](Self::find_nearest_point)
    /// and exact enough for points within integration drift of the surface.
    fn project_to_surface(&self, p: &Point3, iterations: usize) -> Point3 {
        let mut x = *p;
        for _ in 0..iterations {
            let g = self.implicit_gradient(&x);
            let g2 = g.norm_squared();
            if g2 == 0.0 {
                break;
            }
            let f = self.implicit_value(&x);
            if f == 0.0 {
                break;
            }
            x -= (f / g2) * g;
        }
        x
    }
}
