//! Closed-form geodesics for the shapes that have them.

use std::f64::consts::PI;

use contact_kernel_geom::{
    ContactError, ContactShape, Cylinder, HalfSpace, ImplicitSurface, Result, ShapeKind, Sphere,
};
use contact_kernel_math::{
    any_perpendicular, normalize_or, project_onto_plane, Dir3, Point3, Tolerance, Vec3,
};

use crate::{Geodesic, GeodesicPoint};

/// Segments used to sample a closed-form path.
const PATH_SEGMENTS: usize = 32;

/// Closed-form geodesic from `p` to `q` on `shape`.
///
/// Both points are first projected onto the surface. The hints resolve the
/// cases where the endpoints alone do not determine the arc: coincident
/// endpoints, antipodal points on a sphere, and half-turns on a cylinder.
///
/// Ellipsoids have no closed form and yield
/// [`ContactError::NoAnalyticalGeodesic`].
pub fn calc_geodesic_analytical(
    shape: &ContactShape,
    p: &Point3,
    q: &Point3,
    hint_p: &Vec3,
    hint_q: &Vec3,
) -> Result<Geodesic> {
    match shape {
        ContactShape::Sphere(sphere) => Ok(sphere_geodesic(sphere, p, q, hint_p, hint_q)),
        ContactShape::Cylinder(cylinder) => Ok(cylinder_geodesic(cylinder, p, q, hint_p, hint_q)),
        ContactShape::HalfSpace(half_space) => {
            Ok(half_space_geodesic(half_space, p, q, hint_p, hint_q))
        }
        ContactShape::Ellipsoid(_) => Err(ContactError::NoAnalyticalGeodesic {
            shape: ShapeKind::Ellipsoid,
        }),
    }
}

/// Unit tangent at a surface point with outward normal `n`, taken from the
/// hint projected into the tangent plane.
fn tangent_from_hint(hint: &Vec3, n: &Dir3) -> Dir3 {
    normalize_or(project_onto_plane(hint, n), any_perpendicular(n))
}

/// Zero-length geodesic whose tangents are the projected hints.
fn coincident(point: Point3, normal: Dir3, hint_p: &Vec3, hint_q: &Vec3) -> Geodesic {
    Geodesic::degenerate(
        point,
        normal,
        tangent_from_hint(hint_p, &normal),
        tangent_from_hint(hint_q, &normal),
    )
}

/// Shorter great-circle arc on a sphere.
///
/// The arc lies in the plane through `P`, `Q` and the center. Its tangent at
/// `P` points toward `Q`; its tangent at `Q` is the direction of travel.
pub fn sphere_geodesic(
    sphere: &Sphere,
    p: &Point3,
    q: &Point3,
    hint_p: &Vec3,
    hint_q: &Vec3,
) -> Geodesic {
    let r = sphere.radius();
    let np = sphere.find_nearest_point(p);
    let up = np.normal;
    let uq = sphere.find_nearest_point(q).normal;

    let cross = up.cross(uq.as_ref());
    let angle = cross.norm().atan2(up.dot(uq.as_ref()));
    if Tolerance::DEFAULT.angles_equal(angle, 0.0) {
        return coincident(np.point, up, hint_p, hint_q);
    }

    // Rotation axis of the arc; taken from the hint when P and Q are antipodal.
    let axis = match Dir3::try_new(cross, Tolerance::DEFAULT.angular) {
        Some(axis) => axis,
        None => {
            let t = tangent_from_hint(hint_p, &up);
            Dir3::new_normalize(up.cross(t.as_ref()))
        }
    };
    let east = Dir3::new_normalize(axis.cross(up.as_ref()));

    let path = (0..=PATH_SEGMENTS)
        .map(|k| {
            let theta = angle * k as f64 / PATH_SEGMENTS as f64;
            let (s, c) = theta.sin_cos();
            let normal = Dir3::new_normalize(c * up.as_ref() + s * east.as_ref());
            GeodesicPoint {
                point: Point3::from(r * normal.as_ref()),
                tangent: Dir3::new_normalize(-s * up.as_ref() + c * east.as_ref()),
                normal,
                arc_length: r * theta,
            }
        })
        .collect();
    Geodesic::from_path(path, Some(r * angle.sin()))
}

/// Straight line in the unrolled cylinder, wrapped back as a helix.
///
/// Unrolling maps `(φ, z)` to `(r φ, z)`; the angular separation is taken the
/// short way round, in `(-π, π]`.
pub fn cylinder_geodesic(
    cylinder: &Cylinder,
    p: &Point3,
    q: &Point3,
    hint_p: &Vec3,
    hint_q: &Vec3,
) -> Geodesic {
    let r = cylinder.radius();
    let np = cylinder.find_nearest_point(p);
    let nq = cylinder.find_nearest_point(q);

    let phi_p = np.normal.y.atan2(np.normal.x);
    let phi_q = nq.normal.y.atan2(nq.normal.x);
    let mut d_phi = (phi_q - phi_p + PI).rem_euclid(2.0 * PI) - PI;
    if Tolerance::DEFAULT.angles_equal(d_phi.abs(), PI) {
        // Half a turn apart: both ways round are equally short.
        let east = Vec3::new(-phi_p.sin(), phi_p.cos(), 0.0);
        d_phi = if hint_p.dot(&east) >= 0.0 { PI } else { -PI };
    }
    let z_p = np.point.z;
    let d_z = nq.point.z - z_p;

    let du = r * d_phi;
    let length = du.hypot(d_z);
    if Tolerance::DEFAULT.is_zero(length) {
        return coincident(np.point, np.normal, hint_p, hint_q);
    }
    let (cos_a, sin_a) = (du / length, d_z / length);

    let path = (0..=PATH_SEGMENTS)
        .map(|k| {
            let f = k as f64 / PATH_SEGMENTS as f64;
            let (s, c) = (phi_p + f * d_phi).sin_cos();
            let east = Vec3::new(-s, c, 0.0);
            GeodesicPoint {
                point: Point3::new(r * c, r * s, z_p + f * d_z),
                tangent: Dir3::new_normalize(cos_a * east + sin_a * Vec3::z()),
                normal: Dir3::new_normalize(Vec3::new(c, s, 0.0)),
                arc_length: f * length,
            }
        })
        .collect();
    Geodesic::from_path(path, Some(length))
}

/// Straight segment in the boundary plane `x = 0`.
pub fn half_space_geodesic(
    half_space: &HalfSpace,
    p: &Point3,
    q: &Point3,
    hint_p: &Vec3,
    hint_q: &Vec3,
) -> Geodesic {
    let a = half_space.find_nearest_point(p).point;
    let b = half_space.find_nearest_point(q).point;
    let normal = HalfSpace::outward_normal();
    if Tolerance::DEFAULT.points_equal(&a, &b) {
        return coincident(a, normal, hint_p, hint_q);
    }
    let chord = b - a;
    let length = chord.norm();
    let tangent = Dir3::new_normalize(chord);

    let path = (0..=PATH_SEGMENTS)
        .map(|k| {
            let f = k as f64 / PATH_SEGMENTS as f64;
            GeodesicPoint {
                point: a + f * chord,
                tangent,
                normal,
                arc_length: f * length,
            }
        })
        .collect();
    Geodesic::from_path(path, Some(length))
}
