//! Ray-cylinder intersection (quadratic equation in the x-y plane).

use contact_kernel_math::{Dir3, Vec3};

use super::first_forward_root;
use crate::{Cylinder, Ray, RayHit};

/// Intersect a ray with an infinite cylinder about the z axis.
///
/// Only the x-y components take part: `|P_xy(t)|^2 = r^2`. A ray parallel
/// to the axis never crosses the boundary.
pub fn intersect_cylinder(ray: &Ray, cylinder: &Cylinder) -> Option<RayHit> {
    let o = &ray.origin;
    let d = ray.direction.as_ref();
    let radius = cylinder.radius();

    let a = d.x * d.x + d.y * d.y;
    let half_b = o.x * d.x + o.y * d.y;
    let c = o.x * o.x + o.y * o.y - radius * radius;

    // Ray is parallel to axis
    if a == 0.0 {
        return None;
    }

    let t = first_forward_root(a, half_b, c)?;
    let point = ray.at(t);
    Some(RayHit {
        distance: t,
        point,
        normal: Dir3::new_normalize(Vec3::new(point.x, point.y, 0.0)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_kernel_math::Point3;

    const RADIUS: f64 = 3.5;

    fn ray(origin: [f64; 3], dir: [f64; 3]) -> Ray {
        Ray::from_dir(
            Point3::new(origin[0], origin[1], origin[2]),
            Dir3::new_normalize(Vec3::new(dir[0], dir[1], dir[2])),
        )
    }

    fn cyl() -> Cylinder {
        Cylinder::new(RADIUS).unwrap()
    }

    #[test]
    fn test_ray_cylinder_misses() {
        let r = RADIUS;
        assert!(intersect_cylinder(&ray([r * 1.1, 0.0, 0.0], [1.0, 0.0, 0.0]), &cyl()).is_none());
        assert!(intersect_cylinder(&ray([-r * 1.1, 0.0, 0.0], [-1.0, 1.0, 0.0]), &cyl()).is_none());
        assert!(intersect_cylinder(&ray([-r * 1.1, 0.0, 0.0], [0.0, 1.0, 0.0]), &cyl()).is_none());
    }

    #[test]
    fn test_ray_cylinder_parallel_to_axis() {
        assert!(intersect_cylinder(&ray([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]), &cyl()).is_none());
        assert!(intersect_cylinder(&ray([10.0, 0.0, 0.0], [0.0, 0.0, -1.0]), &cyl()).is_none());
    }

    #[test]
    fn test_ray_cylinder_grazing() {
        // Tangent line y = -r, nudged by one machine epsilon either way.
        let r = RADIUS;
        let eps = f64::EPSILON;
        assert!(intersect_cylinder(&ray([-r, -r, 0.0], [1.0, -eps, 0.0]), &cyl()).is_none());
        assert!(intersect_cylinder(&ray([-r, -r, 0.0], [1.0, eps, 0.0]), &cyl()).is_some());
    }

    #[test]
    fn test_ray_cylinder_perpendicular() {
        let hit =
            intersect_cylinder(&ray([-(RADIUS + 1.0), 0.0, 0.0], [1.0, 0.0, 0.0]), &cyl()).unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-12);
        assert!((hit.normal.x + 1.0).abs() < 1e-12);
        assert!(hit.normal.y.abs() < 1e-12);
    }

    #[test]
    fn test_ray_cylinder_diagonal_in_plane() {
        let r = RADIUS;
        let hit =
            intersect_cylinder(&ray([-r * 2.0, r * 2.0, 37.0], [1.0, -1.0, 0.0]), &cyl()).unwrap();
        assert!((hit.distance - r * (2.0 * 2.0_f64.sqrt() - 1.0)).abs() < 1e-12);
        let s = 1.0 / 2.0_f64.sqrt();
        assert!((hit.normal.x + s).abs() < 1e-12);
        assert!((hit.normal.y - s).abs() < 1e-12);
        assert!((hit.point.z - 37.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_cylinder_oblique() {
        let r = RADIUS;
        let hit =
            intersect_cylinder(&ray([-r * 2.0, 0.0, -r * 2.0], [1.0, 0.0, 1.0]), &cyl()).unwrap();
        assert!((hit.distance - r * 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((hit.normal.x + 1.0).abs() < 1e-12);
        assert!(hit.normal.z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_cylinder_from_axis() {
        let hit = intersect_cylinder(&ray([0.0, 0.0, 5.0], [0.0, 1.0, 1.0]), &cyl()).unwrap();
        // Planar speed is 1/sqrt(2).
        assert!((hit.distance - RADIUS * 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((hit.normal.y - 1.0).abs() < 1e-12);
    }
}
