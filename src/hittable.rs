//! The polymorphic intersection interface (spec.md §3, "Hittable (capability)").
//!
//! Re-architected per spec.md §9 as a closed sum type (`Hittables`) rather
//! than a trait-object hierarchy: the rendering hot path dispatches on a
//! small, known set of variants instead of paying virtual-call overhead.

use std::sync::Arc;

use crate::aabb::Aabb;
use crate::materials::Materials;
use crate::objects::bvh::BvhNode;
use crate::objects::hittable_list::HittableList;
use crate::objects::mesh::Mesh;
use crate::objects::sphere::Sphere;
use crate::objects::triangle::Triangle;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// The nearest-hit record (spec.md §3).
///
/// Invariant: `front_face = (ray.direction() . outward_normal) < 0`, and
/// `normal` is `outward_normal` when `front_face` else its negation — the
/// recorded normal always faces back against the incoming ray.
pub struct HitRecord {
    pub point: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub material: Arc<Materials>,
}

impl HitRecord {
    /// Builds a `HitRecord` from an *outward*-facing normal, flipping it to
    /// face the incoming ray if needed. `outward_normal` must already be
    /// unit length.
    pub fn new(ray: &Ray, point: Point3, outward_normal: Vec3, t: f64, material: Arc<Materials>) -> HitRecord {
        let front_face = ray.direction().dot(&outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        HitRecord {
            point,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// An object must implement this to participate in ray tracing.
pub trait Hittable {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord>;

    /// `t_start`/`t_end` are kept for future motion-blur support (spec.md
    /// §1); no primitive in this crate is time-varying, so the bound is
    /// computed once and does not depend on them.
    fn bounding_box(&self, t_start: f64, t_end: f64) -> Option<Aabb>;
}

/// The closed set of primitive/aggregate kinds this crate supports.
pub enum Hittables {
    Sphere(Sphere),
    Triangle(Triangle),
    Mesh(Mesh),
    HittableList(HittableList),
    Bvh(BvhNode),
}

impl Hittable for Hittables {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        match self {
            Hittables::Sphere(s) => s.hit(ray, t_min, t_max),
            Hittables::Triangle(t) => t.hit(ray, t_min, t_max),
            Hittables::Mesh(m) => m.hit(ray, t_min, t_max),
            Hittables::HittableList(l) => l.hit(ray, t_min, t_max),
            Hittables::Bvh(b) => b.hit(ray, t_min, t_max),
        }
    }

    fn bounding_box(&self, t_start: f64, t_end: f64) -> Option<Aabb> {
        match self {
            Hittables::Sphere(s) => s.bounding_box(t_start, t_end),
            Hittables::Triangle(t) => t.bounding_box(t_start, t_end),
            Hittables::Mesh(m) => m.bounding_box(t_start, t_end),
            Hittables::HittableList(l) => l.bounding_box(t_start, t_end),
            Hittables::Bvh(b) => b.bounding_box(t_start, t_end),
        }
    }
}
