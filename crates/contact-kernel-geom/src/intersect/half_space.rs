//! Ray/half-space intersection (closed-form).

use crate::{HalfSpace, Ray, RayHit};

/// Intersect a ray with the boundary plane `x = 0` of the half-space.
///
/// Returns `None` if the ray is parallel to the plane or crosses it behind
/// the origin.
pub fn intersect_half_space(ray: &Ray) -> Option<RayHit> {
    let dx = ray.direction.x;

    // Ray is parallel to plane
    if dx == 0.0 {
        return None;
    }

    let t = -ray.origin.x / dx;

    // Intersection is behind ray origin
    if t < 0.0 {
        return None;
    }

    let mut point = ray.at(t);
    point.x = 0.0;
    Some(RayHit {
        distance: t,
        point,
        normal: HalfSpace::outward_normal(),
    })
}
