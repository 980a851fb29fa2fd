#![warn(missing_docs)]

//! Contact-surface geometry kernel facade.
//!
//! Analytic contact shapes (half-space, sphere, cylinder, ellipsoid) with ray
//! intersection, nearest-point projection, and geodesics between surface
//! points. The component crates are re-exported whole; the common types are
//! also available at the top level.
//!
//! # Example
//!
//! ```
//! use contact_kernel::{calc_geodesic, ContactShape, ImplicitSurface, Point3, Ray, Sphere, Vec3};
//!
//! let sphere: ContactShape = Sphere::new(3.5).unwrap().into();
//!
//! let ray = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::x()).unwrap();
//! let hit = sphere.intersects_ray(&ray).unwrap();
//! assert!((hit.distance - 1.5).abs() < 1e-12);
//!
//! let nearest = sphere.find_nearest_point(&Point3::new(0.0, 1.0, 0.0));
//! assert!(nearest.inside);
//!
//! let p = Point3::new(3.5, 0.0, 0.0);
//! let q = Point3::new(0.0, 3.5, 0.0);
//! let g = calc_geodesic(&sphere, &p, &q, &Vec3::y(), &Vec3::y()).unwrap();
//! assert!((g.length() - 3.5 * std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

pub use contact_kernel_geodesic;
pub use contact_kernel_geom;
pub use contact_kernel_math;

pub use contact_kernel_geodesic::{
    calc_geodesic, calc_geodesic_analytical, calc_geodesic_using_orthogonal_method,
    calc_geodesic_using_orthogonal_method_with, Geodesic, GeodesicPoint, ShootingOptions,
};
pub use contact_kernel_geom::{
    ContactError, ContactShape, Cylinder, Ellipsoid, HalfSpace, ImplicitSurface, NearestPoint,
    Ray, RayHit, Result, ShapeKind, Sphere,
};
pub use contact_kernel_math::{Dir3, Point3, Tolerance, Vec3};
