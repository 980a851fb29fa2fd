//! Orthogonal shooting method for the two-point geodesic problem.
//!
//! Each iteration integrates a trial geodesic from `P` and splits the miss
//! `r = Q - x(L)` in the Darboux frame at the far end. The component along the
//! tangent corrects the length; the component along the binormal, divided by
//! the Jacobi field `j(L)`, corrects the start direction. Starting near the
//! true solution this is a Newton iteration; far from it, it may not converge.

use contact_kernel_geom::{ContactError, ImplicitSurface, Result};
use contact_kernel_math::{
    any_perpendicular, normalize_or, project_onto_plane, Dir3, Point3, Tolerance, Vec3,
};
use tracing::{debug, warn};

use crate::integrator::shoot;
use crate::{Geodesic, ShootingOptions};

/// Jacobi field below this fraction of the arc length counts as vanished
/// (conjugate point).
const MIN_JACOBI_RATIO: f64 = 1e-8;

/// Shoot a geodesic from `p` to `q` with [`ShootingOptions::default`].
///
/// See [`calc_geodesic_using_orthogonal_method_with`].
pub fn calc_geodesic_using_orthogonal_method<S: ImplicitSurface + ?Sized>(
    surface: &S,
    p: &Point3,
    q: &Point3,
    initial_tangent_p: &Vec3,
    initial_length: f64,
) -> Result<Geodesic> {
    calc_geodesic_using_orthogonal_method_with(
        surface,
        p,
        q,
        initial_tangent_p,
        initial_length,
        &ShootingOptions::default(),
    )
}

/// Shoot a geodesic from `p` to `q`, starting from a trial tangent and length.
///
/// Both endpoints are projected onto the surface first. The trial tangent is
/// projected into the tangent plane at `P`; it does not need unit length.
///
/// # Errors
///
/// - [`ContactError::Argument`] for invalid options, non-finite inputs, a
///   non-positive trial length, or a trial tangent along the normal at `P`.
/// - [`ContactError::Convergence`] when the miss stays above
///   `options.tolerance` after `options.max_iterations` shots, or when the
///   iteration breaks down (conjugate point, collapsing length).
pub fn calc_geodesic_using_orthogonal_method_with<S: ImplicitSurface + ?Sized>(
    surface: &S,
    p: &Point3,
    q: &Point3,
    initial_tangent_p: &Vec3,
    initial_length: f64,
    options: &ShootingOptions,
) -> Result<Geodesic> {
    options.validate()?;
    let finite = |v: &Vec3| v.iter().all(|c| c.is_finite());
    if !(finite(&p.coords) && finite(&q.coords) && finite(initial_tangent_p)) {
        return Err(ContactError::Argument(
            "geodesic endpoints and tangent must be finite".into(),
        ));
    }

    let start = surface.find_nearest_point(p).point;
    let target = surface.find_nearest_point(q).point;
    let normal_p = surface.surface_normal(&start);

    if (target - start).norm() <= options.tolerance {
        let tangent = normalize_or(
            project_onto_plane(initial_tangent_p, &normal_p),
            any_perpendicular(&normal_p),
        );
        return Ok(Geodesic::degenerate(start, normal_p, tangent, tangent));
    }
    if !(initial_length.is_finite() && initial_length > 0.0) {
        return Err(ContactError::Argument(format!(
            "initial geodesic length must be finite and > 0, got {initial_length}"
        )));
    }
    let mut tangent = Dir3::try_new(
        project_onto_plane(initial_tangent_p, &normal_p),
        Tolerance::DEFAULT.linear,
    )
    .ok_or_else(|| {
        ContactError::Argument("initial tangent is parallel to the surface normal at P".into())
    })?;

    let mut length = initial_length;
    let mut residual = f64::INFINITY;
    for iteration in 0..options.max_iterations {
        let shot = shoot(surface, &start, &tangent, length, options);
        let miss = target - shot.end.point();
        residual = miss.norm();
        debug!(iteration, residual, length, "orthogonal shooting step");

        if residual <= options.tolerance {
            debug!(iterations = iteration + 1, length, "orthogonal shooting converged");
            return Ok(Geodesic::from_path(shot.samples, Some(shot.end.j)));
        }

        let jacobi = shot.end.j;
        let usable = residual.is_finite() && jacobi.abs() >= MIN_JACOBI_RATIO * length;
        let far = match shot.samples.last() {
            Some(far) if usable => far,
            _ => {
                let reason = "conjugate point or non-finite state";
                return Err(breakdown(iteration + 1, residual, reason));
            }
        };

        let d_length = miss.dot(far.tangent.as_ref());
        let d_theta = miss.dot(far.binormal().as_ref()) / jacobi;
        length += d_length;
        if !(length.is_finite() && length > 0.0 && d_theta.is_finite()) {
            return Err(breakdown(iteration + 1, residual, "length collapsed"));
        }

        // Rotate the start tangent about the normal at P.
        let (s, c) = d_theta.sin_cos();
        let binormal_p = normal_p.cross(tangent.as_ref());
        tangent = Dir3::new_normalize(c * tangent.as_ref() + s * binormal_p);
    }

    warn!(
        iterations = options.max_iterations,
        residual, "orthogonal shooting did not converge"
    );
    Err(ContactError::Convergence {
        iterations: options.max_iterations,
        residual,
    })
}

fn breakdown(iterations: usize, residual: f64, reason: &str) -> ContactError {
    warn!(iterations, residual, reason, "orthogonal shooting broke down");
    ContactError::Convergence {
        iterations,
        residual,
    }
}
