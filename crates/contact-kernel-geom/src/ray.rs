//! Ray representation and the result of a ray-shape intersection.

use contact_kernel_math::{is_unit, Dir3, Point3, Vec3};

use crate::{ContactError, Result};

/// Validate a caller-supplied direction as a unit vector.
///
/// The vector is not renormalized: a direction whose length deviates from 1
/// by more than [`contact_kernel_math::Tolerance::UNIT`] is rejected.
pub fn unit_direction(v: &Vec3) -> Result<Dir3> {
    if !v.iter().all(|c| c.is_finite()) || !is_unit(v) {
        return Err(ContactError::Argument(format!(
            "direction must be a unit vector, got {v:?} (norm {})",
            v.norm()
        )));
    }
    Ok(Dir3::new_unchecked(*v))
}

/// A ray in 3D space defined by origin and unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a ray, rejecting a direction that is not unit length.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
        Ok(Self {
            origin,
            direction: unit_direction(&direction)?,
        })
    }

    /// Create a ray from an already normalized direction.
    pub fn from_dir(origin: Point3, direction: Dir3) -> Self {
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}

/// Result of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray (non-negative).
    pub distance: f64,
    /// Point where the ray crosses the boundary.
    pub point: Point3,
    /// Outward surface normal at `point`.
    pub normal: Dir3,
}
