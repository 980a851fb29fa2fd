#![warn(missing_docs)]

//! Analytic contact shapes for the contact-surface geometry kernel.
//!
//! Four shapes share one capability set: ray intersection and exact
//! nearest-point projection, both expressed through the implicit function
//! whose zero set is the shape's boundary.
//!
//! # Architecture
//!
//! - [`ImplicitSurface`] - value/gradient/Hessian, curvature, ray and projection queries
//! - [`HalfSpace`], [`Sphere`], [`Cylinder`], [`Ellipsoid`] - the concrete shapes
//! - [`ContactShape`] - closed enum over the four shapes
//! - [`intersect`] - ray-shape intersection algorithms for each shape
//! - [`Ray`], [`RayHit`], [`NearestPoint`] - query inputs and results
//!
//! # Example
//!
//! ```
//! use contact_kernel_geom::{ContactShape, ImplicitSurface, Ray, Sphere};
//! use contact_kernel_math::{Point3, Vec3};
//!
//! let sphere: ContactShape = Sphere::new(3.5).unwrap().into();
//! let ray = Ray::new(Point3::new(4.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)).unwrap();
//! let hit = sphere.intersects_ray(&ray).unwrap();
//! assert!((hit.distance - 0.5).abs() < 1e-12);
//! ```

mod cylinder;
mod ellipsoid;
mod error;
mod half_space;
pub mod intersect;
mod ray;
mod shape;
mod sphere;
mod surface;

pub use cylinder::Cylinder;
pub use ellipsoid::Ellipsoid;
pub use error::{ContactError, Result};
pub use half_space::HalfSpace;
pub use ray::{unit_direction, Ray, RayHit};
pub use shape::ContactShape;
pub use sphere::Sphere;
pub use surface::{ImplicitSurface, NearestPoint, ShapeKind};
