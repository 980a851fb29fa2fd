//! Configuration of the shooting solver.

use contact_kernel_geom::{ContactError, Result};
use serde::{Deserialize, Serialize};

/// Settings for [`crate::calc_geodesic_using_orthogonal_method_with`].
///
/// Deserializes with per-field defaults, so a settings file only needs the
/// fields it changes:
///
/// ```
/// use contact_kernel_geodesic::ShootingOptions;
///
/// let options: ShootingOptions = serde_json::from_str(r#"{"max_iterations": 10}"#).unwrap();
/// assert_eq!(options.max_iterations, 10);
/// assert_eq!(options.integration_steps, ShootingOptions::default().integration_steps);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootingOptions {
    /// Converged when the integrated end point is within this distance of `Q`.
    pub tolerance: f64,
    /// Maximum number of shots before reporting non-convergence.
    pub max_iterations: usize,
    /// Fixed RK4 steps per shot.
    pub integration_steps: usize,
    /// Newton steps that pull each integrated point back onto the surface.
    pub projection_iterations: usize,
}

impl ShootingOptions {
    /// Default settings: 1e-9 tolerance, 50 shots, 256 steps, 3 projection steps.
    pub const DEFAULT: Self = Self {
        tolerance: 1e-9,
        max_iterations: 50,
        integration_steps: 256,
        projection_iterations: 3,
    };

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the number of integration steps per shot.
    pub fn with_integration_steps(mut self, integration_steps: usize) -> Self {
        self.integration_steps = integration_steps;
        self
    }

    /// Set the number of projection steps after each integration step.
    pub fn with_projection_iterations(mut self, projection_iterations: usize) -> Self {
        self.projection_iterations = projection_iterations;
        self
    }

    /// Check that the settings can drive a solve.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ContactError::Argument(format!(
                "shooting tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(ContactError::Argument(
                "shooting needs at least one iteration".into(),
            ));
        }
        if self.integration_steps == 0 {
            return Err(ContactError::Argument(
                "shooting needs at least one integration step".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ShootingOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        assert!(ShootingOptions::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_options() {
        let base = ShootingOptions::default();
        assert!(base.with_tolerance(0.0).validate().is_err());
        assert!(base.with_tolerance(f64::NAN).validate().is_err());
        assert!(base.with_max_iterations(0).validate().is_err());
        assert!(base.with_integration_steps(0).validate().is_err());
        assert!(base.with_projection_iterations(0).validate().is_ok());
    }

    #[test]
    fn test_options_json_round_trip() {
        let options = ShootingOptions::default()
            .with_tolerance(1e-8)
            .with_integration_steps(512);
        let json = serde_json::to_string(&options).unwrap();
        let back: ShootingOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
