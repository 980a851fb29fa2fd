//! Ray-shape intersection algorithms.
//!
//! Each shape has a dedicated intersector. All of them report the first
//! forward crossing of the boundary (`t >= 0`), which for a ray starting
//! inside a bounded shape is the exit point.

mod cylinder;
mod ellipsoid;
mod half_space;
mod sphere;

pub use cylinder::intersect_cylinder;
pub use ellipsoid::intersect_ellipsoid;
pub use half_space::intersect_half_space;
pub use sphere::intersect_sphere;

/// Smallest non-negative root of `a t^2 + 2 half_b t + c = 0`, with `a > 0`.
///
/// A tangent ray (discriminant exactly zero) counts as a hit.
pub(crate) fn first_forward_root(a: f64, half_b: f64, c: f64) -> Option<f64> {
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let near = (-half_b - sqrt_disc) / a;
    if near >= 0.0 {
        return Some(near);
    }
    let far = (-half_b + sqrt_disc) / a;
    (far >= 0.0).then_some(far)
}
