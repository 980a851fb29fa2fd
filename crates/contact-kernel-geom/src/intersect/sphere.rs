//! Ray-sphere intersection (quadratic equation).

use contact_kernel_math::Dir3;

use super::first_forward_root;
use crate::{Ray, RayHit, Sphere};

/// Intersect a ray with a sphere centered at the origin.
///
/// Solves `|o + t d|^2 = r^2` and reports the smallest root with `t >= 0`.
/// From inside the sphere this is the exit point.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<RayHit> {
    let oc = ray.origin.coords;
    let d = ray.direction.as_ref();
    let radius = sphere.radius();

    // Quadratic: |oc + t*d|^2 = r^2
    let a = d.dot(d); // Always 1 for unit direction
    let half_b = oc.dot(d);
    let c = oc.dot(&oc) - radius * radius;

    let t = first_forward_root(a, half_b, c)?;
    let point = ray.at(t);
    Some(RayHit {
        distance: t,
        point,
        normal: Dir3::new_normalize(point.coords),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_kernel_math::{Point3, Vec3};

    fn ray(origin: [f64; 3], dir: [f64; 3]) -> Ray {
        Ray::from_dir(
            Point3::new(origin[0], origin[1], origin[2]),
            Dir3::new_normalize(Vec3::new(dir[0], dir[1], dir[2])),
        )
    }

    fn sphere() -> Sphere {
        Sphere::new(3.5).unwrap()
    }

    #[test]
    fn test_ray_sphere_miss_behind() {
        assert!(intersect_sphere(&ray([4.0, 0.0, 0.0], [1.0, 0.0, 0.0]), &sphere()).is_none());
    }

    #[test]
    fn test_ray_sphere_miss_offset() {
        let r = ray([-10.0, 10.0, 0.0], [1.0, 0.0, 0.0]);
        assert!(intersect_sphere(&r, &sphere()).is_none());
    }

    #[test]
    fn test_ray_sphere_exit_from_inside() {
        let hit = intersect_sphere(&ray([2.0, 0.0, 0.0], [1.0, 0.0, 0.0]), &sphere()).unwrap();
        assert!((hit.distance - 1.5).abs() < 1e-12);
        assert!((hit.normal.x - 1.0).abs() < 1e-12);

        let hit = intersect_sphere(&ray([2.0, 0.0, 0.0], [-1.0, 0.0, 0.0]), &sphere()).unwrap();
        assert!((hit.distance - 5.5).abs() < 1e-12);
        assert!((hit.normal.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_sphere_entry_from_outside() {
        let hit = intersect_sphere(&ray([4.0, 0.0, 0.0], [-1.0, 0.0, 0.0]), &sphere()).unwrap();
        assert!((hit.distance - 0.5).abs() < 1e-12);
        assert!((hit.normal.x - 1.0).abs() < 1e-12);
        assert!((hit.point.x - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_ray_sphere_from_center_diagonal() {
        let hit = intersect_sphere(&ray([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]), &sphere()).unwrap();
        assert!((hit.distance - 3.5).abs() < 1e-12);
        let expected = 1.0 / 3.0_f64.sqrt();
        assert!((hit.normal.x - expected).abs() < 1e-12);
        assert!((hit.normal.y - expected).abs() < 1e-12);
        assert!((hit.normal.z - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ray_sphere_tangent() {
        // Ray grazing the sphere at (3.5, 0, 0)
        let hit = intersect_sphere(&ray([3.5, -10.0, 0.0], [0.0, 1.0, 0.0]), &sphere()).unwrap();
        assert!((hit.distance - 10.0).abs() < 1e-6);
    }
}
