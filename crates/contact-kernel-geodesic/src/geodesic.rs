//! The geodesic result value shared by both solvers.

use contact_kernel_math::{Dir3, Point3};

/// One sample along a geodesic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicPoint {
    /// Position on the surface.
    pub point: Point3,
    /// Unit tangent (direction of travel).
    pub tangent: Dir3,
    /// Outward unit surface normal.
    pub normal: Dir3,
    /// Arc length from the start point.
    pub arc_length: f64,
}

impl GeodesicPoint {
    /// Unit binormal `normal × tangent`, completing the Darboux frame.
    pub fn binormal(&self) -> Dir3 {
        Dir3::new_normalize(self.normal.cross(self.tangent.as_ref()))
    }
}

/// A geodesic arc from `P` to `Q` on a contact shape.
///
/// Produced fresh by each solver call. It carries no reference to the shape
/// that produced it; callers keep that association themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Geodesic {
    length: f64,
    jacobi_q: Option<f64>,
    path: Vec<GeodesicPoint>,
}

impl Geodesic {
    /// Build a geodesic from its sampled path (at least one sample).
    ///
    /// The length is the arc length of the last sample.
    pub(crate) fn from_path(path: Vec<GeodesicPoint>, jacobi_q: Option<f64>) -> Self {
        debug_assert!(!path.is_empty());
        let length = path.last().map_or(0.0, |s| s.arc_length);
        Self {
            length,
            jacobi_q,
            path,
        }
    }

    /// A zero-length geodesic at `point` with separate start and end tangents.
    pub(crate) fn degenerate(
        point: Point3,
        normal: Dir3,
        tangent_p: Dir3,
        tangent_q: Dir3,
    ) -> Self {
        let sample = |tangent| GeodesicPoint {
            point,
            tangent,
            normal,
            arc_length: 0.0,
        };
        Self::from_path(vec![sample(tangent_p), sample(tangent_q)], Some(0.0))
    }

    /// Arc length of the geodesic.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Start point `P`.
    pub fn point_p(&self) -> Point3 {
        self.first().point
    }

    /// End point `Q`.
    pub fn point_q(&self) -> Point3 {
        self.last().point
    }

    /// Unit tangent at `P`, pointing along the arc toward `Q`.
    pub fn tangent_p(&self) -> Dir3 {
        self.first().tangent
    }

    /// Unit tangent at `Q`: the direction of travel on arrival, pointing away
    /// from `P`. Both solvers use this convention, so their end tangents
    /// compare directly; negate it for the direction back toward `P`.
    pub fn tangent_q(&self) -> Dir3 {
        self.last().tangent
    }

    /// Outward surface normal at `P`.
    pub fn normal_p(&self) -> Dir3 {
        self.first().normal
    }

    /// Outward surface normal at `Q`.
    pub fn normal_q(&self) -> Dir3 {
        self.last().normal
    }

    /// Binormal at `P`.
    pub fn binormal_p(&self) -> Dir3 {
        self.first().binormal()
    }

    /// Binormal at `Q`.
    pub fn binormal_q(&self) -> Dir3 {
        self.last().binormal()
    }

    /// Rotational Jacobi field at `Q`: how far `Q` moves along the binormal
    /// per radian of rotation of the start tangent about the normal at `P`.
    pub fn jacobi_q(&self) -> Option<f64> {
        self.jacobi_q
    }

    /// Sampled path from `P` to `Q`.
    pub fn path(&self) -> &[GeodesicPoint] {
        &self.path
    }

    /// The same arc traversed from `Q` to `P`.
    ///
    /// The length is unchanged; the tangents are negated and swapped. The
    /// Jacobi value is dropped because it depends on the start point.
    pub fn reversed(&self) -> Self {
        let path = self
            .path
            .iter()
            .rev()
            .map(|s| GeodesicPoint {
                point: s.point,
                tangent: -s.tangent,
                normal: s.normal,
                arc_length: self.length - s.arc_length,
            })
            .collect();
        Self {
            length: self.length,
            jacobi_q: None,
            path,
        }
    }

    fn first(&self) -> &GeodesicPoint {
        &self.path[0]
    }

    fn last(&self) -> &GeodesicPoint {
        &self.path[self.path.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use contact_kernel_math::Vec3;

    fn straight_line() -> Geodesic {
        let normal = Dir3::new_normalize(-Vec3::x());
        let tangent = Dir3::new_normalize(Vec3::y());
        let path = (0..=4)
            .map(|k| {
                let s = k as f64 * 0.5;
                GeodesicPoint {
                    point: Point3::new(0.0, s, 1.0),
                    tangent,
                    normal,
                    arc_length: s,
                }
            })
            .collect();
        Geodesic::from_path(path, Some(2.0))
    }

    #[test]
    fn test_geodesic_accessors() {
        let g = straight_line();
        assert_relative_eq!(g.length(), 2.0);
        assert_relative_eq!(g.point_p(), Point3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(g.point_q(), Point3::new(0.0, 2.0, 1.0));
        assert_relative_eq!(g.tangent_q().into_inner(), Vec3::y());
        // (-x) × y = -z
        assert_relative_eq!(g.binormal_p().into_inner(), -Vec3::z());
        assert_eq!(g.jacobi_q(), Some(2.0));
        assert_eq!(g.path().len(), 5);
    }

    #[test]
    fn test_geodesic_reversed() {
        let g = straight_line();
        let r = g.reversed();
        assert_relative_eq!(r.length(), g.length());
        assert_relative_eq!(r.point_p(), g.point_q());
        assert_relative_eq!(r.tangent_p().into_inner(), -g.tangent_q().into_inner());
        assert_relative_eq!(r.tangent_q().into_inner(), -g.tangent_p().into_inner());
        assert_relative_eq!(r.path()[1].arc_length, 0.5);
        assert_eq!(r.jacobi_q(), None);
    }

    #[test]
    fn test_geodesic_degenerate() {
        let g = Geodesic::degenerate(
            Point3::new(1.0, 0.0, 0.0),
            Dir3::new_normalize(Vec3::x()),
            Dir3::new_normalize(Vec3::y()),
            Dir3::new_normalize(Vec3::z()),
        );
        assert_eq!(g.length(), 0.0);
        assert_eq!(g.point_p(), g.point_q());
        assert_eq!(g.tangent_q().into_inner(), Vec3::z());
    }
}
