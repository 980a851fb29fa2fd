//! Ray-ellipsoid intersection (quadratic equation in scaled coordinates).

use super::first_forward_root;
use crate::{Ellipsoid, Ray, RayHit};

/// Intersect a ray with an axis-aligned ellipsoid.
///
/// Scaling each axis by `1/radius` turns the ellipsoid into the unit sphere,
/// so the ray-sphere quadratic applies to the scaled origin and direction.
/// The normal is the normalized implicit gradient at the hit point.
pub fn intersect_ellipsoid(ray: &Ray, ellipsoid: &Ellipsoid) -> Option<RayHit> {
    let radii = ellipsoid.radii();
    let o = ray.origin.coords.component_div(&radii);
    let d = ray.direction.component_div(&radii);

    let a = d.dot(&d);
    let half_b = o.dot(&d);
    let c = o.dot(&o) - 1.0;

    let t = first_forward_root(a, half_b, c)?;
    let point = ray.at(t);
    Some(RayHit {
        distance: t,
        point,
        normal: ellipsoid.normal_at(&point),
    })
}
