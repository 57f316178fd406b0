//! Implicit sphere intersection (spec.md §4.2).

use std::sync::Arc;

use crate::aabb::Aabb;
use crate::hittable::{HitRecord, Hittable};
use crate::materials::Materials;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// A sphere of `center`/`radius`. A **negative radius is a supported
/// trick**: the outward normal `(P - C) / r` flips sign when `r < 0`,
/// realizing an inward-facing (hollow-glass) surface without a separate
/// boolean flag (spec.md §4.2).
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<Materials>,
    bbox: Aabb,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Arc<Materials>) -> Sphere {
        let rvec = Vec3::new(radius.abs(), radius.abs(), radius.abs());
        let bbox = Aabb::from_corners(center - rvec, center + rvec);

        Sphere {
            center,
            radius,
            material,
            bbox,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let oc = self.center - *ray.origin();
        let a = ray.direction().length_squared();
        let half_b = ray.direction().dot(&oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Try the near root first, then the far root.
        let mut root = (half_b - sqrtd) / a;
        if root < t_min || root > t_max {
            root = (half_b + sqrtd) / a;
            if root < t_min || root > t_max {
                return None;
            }
        }

        let t = root;
        let point = ray.at(t);
        let outward_normal = (point - self.center) / self.radius;

        Some(HitRecord::new(ray, point, outward_normal, t, self.material.clone()))
    }

    fn bounding_box(&self, _t_start: f64, _t_end: f64) -> Option<Aabb> {
        Some(self.bbox)
    }
}
