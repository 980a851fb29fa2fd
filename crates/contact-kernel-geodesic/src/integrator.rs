//! Geodesic initial-value integration on an implicit surface.
//!
//! Along a unit-speed geodesic the acceleration is purely normal:
//!
//! ```text
//! x'  = t
//! t'  = -(tᵀ H t / |∇f|²) ∇f
//! ```
//!
//! Alongside the curve we carry the scalar Jacobi field `j` of the family of
//! geodesics obtained by rotating the start tangent about the start normal:
//! `j'' = -K j` with `j(0) = 0`, `j'(0) = 1`, where `K` is the Gaussian
//! curvature. `j(L)` is the sensitivity of the end point along the binormal.

use contact_kernel_geom::ImplicitSurface;
use contact_kernel_math::{normalize_or, project_onto_plane, Dir3, Point3, Vec3};

use crate::{GeodesicPoint, ShootingOptions};

/// Integration state at one arc-length station.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GeodesicState {
    pub x: Vec3,
    pub t: Vec3,
    pub j: f64,
    pub j_dot: f64,
}

impl GeodesicState {
    fn start(point: &Point3, tangent: &Dir3) -> Self {
        Self {
            x: point.coords,
            t: tangent.into_inner(),
            j: 0.0,
            j_dot: 1.0,
        }
    }

    /// `self + h * rate`
    fn advanced(&self, h: f64, rate: &GeodesicState) -> Self {
        Self {
            x: self.x + h * rate.x,
            t: self.t + h * rate.t,
            j: self.j + h * rate.j,
            j_dot: self.j_dot + h * rate.j_dot,
        }
    }

    pub fn point(&self) -> Point3 {
        Point3::from(self.x)
    }
}

/// Right-hand side of the geodesic + Jacobi system.
fn rate<S: ImplicitSurface + ?Sized>(surface: &S, state: &GeodesicState) -> GeodesicState {
    let p = state.point();
    let g = surface.implicit_gradient(&p);
    let g2 = g.norm_squared();
    let accel = if g2 > 0.0 {
        let h = surface.implicit_hessian(&p);
        -(state.t.dot(&(h * state.t)) / g2) * g
    } else {
        Vec3::zeros()
    };
    GeodesicState {
        x: state.t,
        t: accel,
        j: state.j_dot,
        j_dot: -surface.gaussian_curvature(&p) * state.j,
    }
}

/// One classical fourth-order Runge-Kutta step of size `h`.
fn rk4_step<S: ImplicitSurface + ?Sized>(
    surface: &S,
    state: &GeodesicState,
    h: f64,
) -> GeodesicState {
    let k1 = rate(surface, state);
    let k2 = rate(surface, &state.advanced(0.5 * h, &k1));
    let k3 = rate(surface, &state.advanced(0.5 * h, &k2));
    let k4 = rate(surface, &state.advanced(h, &k3));
    GeodesicState {
        x: state.x + h / 6.0 * (k1.x + 2.0 * k2.x + 2.0 * k3.x + k4.x),
        t: state.t + h / 6.0 * (k1.t + 2.0 * k2.t + 2.0 * k3.t + k4.t),
        j: state.j + h / 6.0 * (k1.j + 2.0 * k2.j + 2.0 * k3.j + k4.j),
        j_dot: state.j_dot + h / 6.0 * (k1.j_dot + 2.0 * k2.j_dot + 2.0 * k3.j_dot + k4.j_dot),
    }
}

/// Sampled result of one shot.
#[derive(Debug, Clone)]
pub(crate) struct Shot {
    pub samples: Vec<GeodesicPoint>,
    pub end: GeodesicState,
}

/// Integrate the geodesic leaving `start` along `tangent` for arc length `length`.
///
/// After every step the point is pulled back onto the surface and the tangent
/// back into the tangent plane, which keeps drift from accumulating.
pub(crate) fn shoot<S: ImplicitSurface + ?Sized>(
    surface: &S,
    start: &Point3,
    tangent: &Dir3,
    length: f64,
    options: &ShootingOptions,
) -> Shot {
    let steps = options.integration_steps.max(1);
    let h = length / steps as f64;

    let mut state = GeodesicState::start(start, tangent);
    let mut samples = Vec::with_capacity(steps + 1);
    samples.push(GeodesicPoint {
        point: *start,
        tangent: *tangent,
        normal: surface.surface_normal(start),
        arc_length: 0.0,
    });

    for k in 1..=steps {
        let previous = samples[samples.len() - 1].tangent;
        state = rk4_step(surface, &state, h);

        let p = surface.project_to_surface(&state.point(), options.projection_iterations);
        let normal = surface.surface_normal(&p);
        let tangent = normalize_or(project_onto_plane(&state.t, &normal), previous);
        state.x = p.coords;
        state.t = tangent.into_inner();

        samples.push(GeodesicPoint {
            point: p,
            tangent,
            normal,
            arc_length: k as f64 * h,
        });
    }

    Shot {
        samples,
        end: state,
    }
}
