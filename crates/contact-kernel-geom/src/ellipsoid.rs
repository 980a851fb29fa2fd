//! Axis-aligned ellipsoid and its exact nearest-point projection.

use contact_kernel_math::{Dir3, Mat3, Point3, Tolerance, Vec3};
use tracing::trace;

use crate::error::ensure_positive;
use crate::intersect::intersect_ellipsoid;
use crate::{ImplicitSurface, NearestPoint, Ray, RayHit, Result, ShapeKind};

/// Root-finder iteration cap for the Lagrange multiplier.
const MAX_MULTIPLIER_ITERATIONS: usize = 200;

/// A solid axis-aligned ellipsoid centered at the origin.
///
/// Implicit function: `f(p) = (x/a)^2 + (y/b)^2 + (z/c)^2 - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radii: Vec3,
}

impl Ellipsoid {
    /// Create an ellipsoid from its three semi-axis lengths.
    pub fn new(radii: Vec3) -> Result<Self> {
        ensure_positive("ellipsoid x radius", radii.x)?;
        ensure_positive("ellipsoid y radius", radii.y)?;
        ensure_positive("ellipsoid z radius", radii.z)?;
        Ok(Self { radii })
    }

    /// Semi-axis lengths along x, y and z.
    pub fn radii(&self) -> Vec3 {
        self.radii
    }

    /// `1 / radius^2` per axis.
    pub(crate) fn inv_radii_sq(&self) -> Vec3 {
        self.radii.map(|r| 1.0 / (r * r))
    }

    /// Outward unit normal at a point on the surface.
    pub(crate) fn normal_at(&self, p: &Point3) -> Dir3 {
        Dir3::new_normalize(p.coords.component_mul(&self.inv_radii_sq()))
    }

    /// Closest point on the surface to `p`.
    ///
    /// The minimizer of `|x - p|^2` on the surface satisfies
    /// `x_i = r_i^2 p_i / (r_i^2 + λ)` for a Lagrange multiplier `λ`. The
    /// root is sought in the shifted multiplier `t = λ + r_min^2`, a root of
    /// `F(t) = Σ (r_i p_i / (s_i + t))^2 - 1` with `s_i = r_i^2 - r_min^2`, so
    /// the shortest-axis denominator is `t` itself and never cancels. `F` is
    /// convex and decreasing on `(0, ∞)`; its root is bracketed by
    /// `[r_min^2, r_min^2 + r_max |p|]` outside and `(0, r_min^2]` inside.
    fn closest_surface_point(&self, p: &Point3) -> Point3 {
        let r2 = self.radii.component_mul(&self.radii);
        let r2_min = r2.min();
        let shift = r2.add_scalar(-r2_min);
        let rp = self.radii.component_mul(&p.coords);
        let f = |t: f64| {
            (0..3)
                .map(|i| (rp[i] / (shift[i] + t)).powi(2))
                .sum::<f64>()
                - 1.0
        };
        let df = |t: f64| {
            (0..3)
                .map(|i| -2.0 * rp[i] * rp[i] / (shift[i] + t).powi(3))
                .sum::<f64>()
        };

        let outside = self.implicit_value(p) >= 0.0;
        let (mut lo, mut hi) = if outside {
            (r2_min, r2_min + self.radii.max() * p.coords.norm())
        } else {
            if let Some(x) = self.degenerate_interior_point(p, &shift, r2_min) {
                return x;
            }
            (0.0, r2_min)
        };

        // Safeguarded Newton: outside, start at the bracket end where F >= 0
        // (left of the root), where Newton steps on a convex decreasing F
        // never overshoot.
        let mut t = if outside { lo } else { 0.5 * (lo + hi) };
        for _ in 0..MAX_MULTIPLIER_ITERATIONS {
            let value = f(t);
            if value == 0.0 {
                break;
            }
            if value > 0.0 {
                lo = t;
            } else {
                hi = t;
            }
            let slope = df(t);
            let newton = t - value / slope;
            let next = if slope < 0.0 && newton > lo && newton < hi {
                newton
            } else {
                0.5 * (lo + hi)
            };
            if (next - t).abs() <= 1e-15 * t {
                t = next;
                break;
            }
            t = next;
        }

        Point3::from(Vec3::from_fn(|i, _| r2[i] * p[i] / (shift[i] + t)))
    }

    /// Interior points on (or within rounding of) the plane orthogonal to the
    /// smallest axis may have no usable root of `F`. Then `t = 0` and the
    /// free coordinate along the smallest axis is fixed by the surface
    /// equation, on the side of the query point.
    fn degenerate_interior_point(
        &self,
        p: &Point3,
        shift: &Vec3,
        r2_min: f64,
    ) -> Option<Point3> {
        let is_short = |i: usize| shift[i] <= Tolerance::DEFAULT.linear * r2_min;
        let negligible = f64::EPSILON * r2_min;
        if (0..3).any(|i| is_short(i) && (self.radii[i] * p[i]).abs() > negligible) {
            return None;
        }

        let mut x = Vec3::zeros();
        let mut used = 0.0;
        for i in (0..3).filter(|&i| !is_short(i)) {
            x[i] = self.radii[i] * self.radii[i] * p[i] / shift[i];
            used += x[i] * x[i] / (self.radii[i] * self.radii[i]);
        }
        if used > 1.0 {
            // F has a root in the open bracket after all.
            return None;
        }
        let axis = (0..3)
            .filter(|&i| is_short(i))
            .fold(None, |best: Option<usize>, i| match best {
                Some(b) if p[b].abs() >= p[i].abs() => Some(b),
                _ => Some(i),
            })?;
        x[axis] = (self.radii[axis] * (1.0 - used).sqrt()).copysign(p[axis]);
        trace!(?p, axis, "ellipsoid nearest point on degenerate branch");
        Some(Point3::from(x))
    }
}

impl ImplicitSurface for Ellipsoid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipsoid
    }

    fn implicit_value(&self, p: &Point3) -> f64 {
        p.coords.component_mul(&p.coords).dot(&self.inv_radii_sq()) - 1.0
    }

    fn implicit_gradient(&self, p: &Point3) -> Vec3 {
        2.0 * p.coords.component_mul(&self.inv_radii_sq())
    }

    fn implicit_hessian(&self, _p: &Point3) -> Mat3 {
        Mat3::from_diagonal(&(2.0 * self.inv_radii_sq()))
    }

    fn intersects_ray(&self, ray: &Ray) -> Option<RayHit> {
        intersect_ellipsoid(ray, self)
    }

    fn find_nearest_point(&self, p: &Point3) -> NearestPoint {
        let point = self.closest_surface_point(p);
        NearestPoint {
            point,
            inside: self.implicit_value(p) <= 0.0,
            normal: self.normal_at(&point),
        }
    }

    fn bounding_radius(&self) -> Option<f64> {
        Some(self.radii.max())
    }
}
