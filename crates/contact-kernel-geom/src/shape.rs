//! The closed set of contact shapes.

use contact_kernel_math::{Mat3, Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::{
    ContactError, Cylinder, Ellipsoid, HalfSpace, ImplicitSurface, NearestPoint, Ray, RayHit,
    ShapeKind, Sphere,
};

/// One of the kernel's analytic contact shapes.
///
/// Serializes as an internally tagged object, e.g.
/// `{"type": "ellipsoid", "radii": [1.5, 2.2, 3.1]}`. Parameters are
/// validated on deserialization exactly as by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShapeSpec", into = "ShapeSpec")]
pub enum ContactShape {
    /// Half-space `x >= 0`.
    HalfSpace(HalfSpace),
    /// Origin-centered sphere.
    Sphere(Sphere),
    /// Infinite cylinder about the z axis.
    Cylinder(Cylinder),
    /// Axis-aligned ellipsoid.
    Ellipsoid(Ellipsoid),
}

impl ContactShape {
    /// The shape as a trait object, for code that is generic over surfaces.
    pub fn as_surface(&self) -> &dyn ImplicitSurface {
        match self {
            ContactShape::HalfSpace(s) => s,
            ContactShape::Sphere(s) => s,
            ContactShape::Cylinder(s) => s,
            ContactShape::Ellipsoid(s) => s,
        }
    }
}

impl ImplicitSurface for ContactShape {
    fn kind(&self) -> ShapeKind {
        self.as_surface().kind()
    }

    fn implicit_value(&self, p: &Point3) -> f64 {
        self.as_surface().implicit_value(p)
    }

    fn implicit_gradient(&self, p: &Point3) -> Vec3 {
        self.as_surface().implicit_gradient(p)
    }

    fn implicit_hessian(&self, p: &Point3) -> Mat3 {
        self.as_surface().implicit_hessian(p)
    }

    fn intersects_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.as_surface().intersects_ray(ray)
    }

    fn find_nearest_point(&self, p: &Point3) -> NearestPoint {
        self.as_surface().find_nearest_point(p)
    }

    fn bounding_radius(&self) -> Option<f64> {
        self.as_surface().bounding_radius()
    }
}

impl From<HalfSpace> for ContactShape {
    fn from(s: HalfSpace) -> Self {
        ContactShape::HalfSpace(s)
    }
}

impl From<Sphere> for ContactShape {
    fn from(s: Sphere) -> Self {
        ContactShape::Sphere(s)
    }
}

impl From<Cylinder> for ContactShape {
    fn from(s: Cylinder) -> Self {
        ContactShape::Cylinder(s)
    }
}

impl From<Ellipsoid> for ContactShape {
    fn from(s: Ellipsoid) -> Self {
        ContactShape::Ellipsoid(s)
    }
}

/// Wire form of [`ContactShape`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ShapeSpec {
    HalfSpace,
    Sphere { radius: f64 },
    Cylinder { radius: f64 },
    Ellipsoid { radii: [f64; 3] },
}

impl TryFrom<ShapeSpec> for ContactShape {
    type Error = ContactError;

    fn try_from(spec: ShapeSpec) -> Result<Self, Self::Error> {
        Ok(match spec {
            ShapeSpec::HalfSpace => HalfSpace::new().into(),
            ShapeSpec::Sphere { radius } => Sphere::new(radius)?.into(),
            ShapeSpec::Cylinder { radius } => Cylinder::new(radius)?.into(),
            ShapeSpec::Ellipsoid { radii } => Ellipsoid::new(Vec3::from(radii))?.into(),
        })
    }
}

impl From<ContactShape> for ShapeSpec {
    fn from(shape: ContactShape) -> Self {
        match shape {
            ContactShape::HalfSpace(_) => ShapeSpec::HalfSpace,
            ContactShape::Sphere(s) => ShapeSpec::Sphere { radius: s.radius() },
            ContactShape::Cylinder(c) => ShapeSpec::Cylinder { radius: c.radius() },
            ContactShape::Ellipsoid(e) => ShapeSpec::Ellipsoid {
                radii: e.radii().into(),
            },
        }
    }
}
