//! Seeded random surface points for solver cross-checks.

use contact_kernel_geom::ImplicitSurface;
use contact_kernel_math::Point3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Draws surface points by projecting Gaussian samples onto a shape.
pub struct SurfaceSampler {
    rng: StdRng,
    normal: Normal<f64>,
}

impl SurfaceSampler {
    /// Sampler with a fixed seed and Gaussian spread `sigma` per coordinate.
    pub fn new(seed: u64, sigma: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            normal: Normal::new(0.0, sigma).unwrap(),
        }
    }

    /// Gaussian point in space.
    pub fn point(&mut self) -> Point3 {
        Point3::new(
            self.normal.sample(&mut self.rng),
            self.normal.sample(&mut self.rng),
            self.normal.sample(&mut self.rng),
        )
    }

    /// Gaussian point projected onto `surface`.
    pub fn surface_point<S: ImplicitSurface + ?Sized>(&mut self, surface: &S) -> Point3 {
        surface.find_nearest_point(&self.point()).point
    }
}

/// Composite Simpson rule for `∫ f` over `[a, b]` with `n` (even) panels.
pub fn simpson(f: impl Fn(f64) -> f64, a: f64, b: f64, n: usize) -> f64 {
    let h = (b - a) / n as f64;
    let inner: f64 = (1..n)
        .map(|k| {
            let w = if k % 2 == 1 { 4.0 } else { 2.0 };
            w * f(a + k as f64 * h)
        })
        .sum();
    (f(a) + inner + f(b)) * h / 3.0
}
