#![warn(missing_docs)]

//! Geodesics between two points on a contact shape.
//!
//! Two solvers produce the same [`Geodesic`] value:
//!
//! - [`calc_geodesic_analytical`] - closed forms for spheres, cylinders and
//!   the half-space
//! - [`calc_geodesic_using_orthogonal_method`] - shooting on any
//!   [`ImplicitSurface`], refining a trial start tangent and length
//!
//! [`calc_geodesic`] picks the closed form when there is one.
//!
//! # Example
//!
//! ```
//! use contact_kernel_geodesic::{calc_geodesic_analytical, calc_geodesic_using_orthogonal_method};
//! use contact_kernel_geom::{ContactShape, Sphere};
//! use contact_kernel_math::{Point3, Vec3};
//!
//! let r = 3.5;
//! let sphere: ContactShape = Sphere::new(r).unwrap().into();
//! let p = Point3::new(r, 0.0, 0.0);
//! let q = Point3::new(0.0, r, 0.0);
//! let hint = Vec3::new(-1.0, 1.0, 0.0);
//!
//! let exact = calc_geodesic_analytical(&sphere, &p, &q, &hint, &hint).unwrap();
//! assert!((exact.length() - r * std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let shot = calc_geodesic_using_orthogonal_method(
//!     &sphere,
//!     &p,
//!     &q,
//!     &exact.tangent_p().into_inner(),
//!     exact.length(),
//! )
//! .unwrap();
//! assert!((shot.length() - exact.length()).abs() < 1e-4);
//! ```
//!
//! [`ImplicitSurface`]: contact_kernel_geom::ImplicitSurface

mod analytical;
mod geodesic;
mod integrator;
mod options;
mod shooting;

pub use analytical::{
    calc_geodesic_analytical, cylinder_geodesic, half_space_geodesic, sphere_geodesic,
};
pub use geodesic::{Geodesic, GeodesicPoint};
pub use options::ShootingOptions;
pub use shooting::{
    calc_geodesic_using_orthogonal_method, calc_geodesic_using_orthogonal_method_with,
};

use contact_kernel_geom::{ContactError, ContactShape, Result};
use contact_kernel_math::{Point3, Vec3};
use tracing::debug;

/// Geodesic from `p` to `q` by whichever solver suits `shape`.
///
/// Shapes with a closed form use [`calc_geodesic_analytical`]. The others
/// are shot with default [`ShootingOptions`], starting along the chord from
/// `p` to `q` with the chord length as trial length; `hint_p` stands in for
/// the chord when `p` and `q` coincide.
pub fn calc_geodesic(
    shape: &ContactShape,
    p: &Point3,
    q: &Point3,
    hint_p: &Vec3,
    hint_q: &Vec3,
) -> Result<Geodesic> {
    match calc_geodesic_analytical(shape, p, q, hint_p, hint_q) {
        Err(ContactError::NoAnalyticalGeodesic { shape: kind }) => {
            debug!(?kind, "no closed-form geodesic, shooting from the chord");
            let chord = q - p;
            let length = chord.norm();
            let tangent = if length > 0.0 { chord } else { *hint_p };
            calc_geodesic_using_orthogonal_method(shape, p, q, &tangent, length)
        }
        solved => solved,
    }
}
