//! Planar triangle intersection (spec.md §4.3).

use std::sync::Arc;

use crate::aabb::Aabb;
use crate::hittable::{HitRecord, Hittable};
use crate::materials::Materials;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Degenerate (axis-aligned, zero-thickness) triangle bounding boxes are
/// padded by this much so they still yield a valid slab (spec.md §4.3).
const BBOX_EPSILON: f64 = 1e-5;

pub struct Triangle {
    a: Point3,
    b: Point3,
    c: Point3,
    normal: Point3,
    material: Arc<Materials>,
    bbox: Aabb,
}

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3, material: Arc<Materials>) -> Triangle {
        let normal = (b - a).cross(&(c - a)).unit();
        let bbox = Aabb::from_corners(
            Point3::new(a.x().min(b.x()).min(c.x()), a.y().min(b.y()).min(c.y()), a.z().min(b.z()).min(c.z())),
            Point3::new(a.x().max(b.x()).max(c.x()), a.y().max(b.y()).max(c.y()), a.z().max(b.z()).max(c.z())),
        )
        .pad(BBOX_EPSILON);

        Triangle {
            a,
            b,
            c,
            normal,
            material,
            bbox,
        }
    }

    /// All three edge-cross-normal signs must agree (spec.md §4.3).
    fn contains_point_on_plane(&self, p: Point3) -> bool {
        let n = self.normal;
        let side_ab = (self.b - self.a).cross(&n).dot(&(p - self.a));
        let side_bc = (self.c - self.b).cross(&n).dot(&(p - self.b));
        let side_ca = (self.a - self.c).cross(&n).dot(&(p - self.c));

        (side_ab >= 0.0 && side_bc >= 0.0 && side_ca >= 0.0)
            || (side_ab <= 0.0 && side_bc <= 0.0 && side_ca <= 0.0)
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < f64::EPSILON {
            return None; // ray parallel to the triangle's plane
        }

        let t = (self.a.dot(&self.normal) - self.normal.dot(ray.origin())) / denom;
        if t < t_min || t > t_max {
            return None;
        }

        let point = ray.at(t);
        if !self.contains_point_on_plane(point) {
            return None;
        }

        Some(HitRecord::new(ray, point, self.normal, t, self.material.clone()))
    }

    fn bounding_box(&self, _t_start: f64, _t_end: f64) -> Option<Aabb> {
        Some(self.bbox)
    }
}
