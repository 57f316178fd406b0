//! Bounding volume hierarchy over a set of hittables (spec.md §4.6).
//!
//! Construction picks a **randomly chosen** split axis at every internal
//! node rather than the teacher's longest-axis heuristic — spec.md is
//! explicit that the axis choice is random, which also sidesteps
//! degenerate cases (e.g. a perfectly flat scene) where longest-axis
//! selection stalls on ties.

use crate::aabb::{Aabb, Axis};
use crate::error::RenderError;
use crate::hittable::{HitRecord, Hittable, Hittables};
use crate::ray::Ray;
use crate::rng::Rng;

pub struct BvhNode {
    left: Box<Hittables>,
    right: Option<Box<Hittables>>,
    bbox: Aabb,
}

impl BvhNode {
    /// Builds a hierarchy over `objects`, consuming them. `objects` must be
    /// non-empty. Fails with `RenderError::ConfigurationError` if any member
    /// lacks a bounding box (spec.md §4.6, §7 — fatal at scene build).
    pub fn build(mut objects: Vec<Hittables>, t_start: f64, t_end: f64, rng: &mut Rng) -> Result<BvhNode, RenderError> {
        assert!(!objects.is_empty(), "BvhNode::build requires at least one object");

        if objects.len() == 1 {
            let only = objects.pop().unwrap();
            let bbox = bbox_of(&only, t_start, t_end)?;
            return Ok(BvhNode {
                left: Box::new(only),
                right: None,
                bbox,
            });
        }

        let axis = match rng.axis() {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        };

        let mut keyed = Vec::with_capacity(objects.len());
        for object in objects {
            let key = bbox_of(&object, t_start, t_end)?.axis_interval(axis).min();
            keyed.push((key, object));
        }
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("NaN bounding-box extent"));
        let mut objects: Vec<Hittables> = keyed.into_iter().map(|(_, object)| object).collect();

        let (left, right) = if objects.len() == 2 {
            let right = objects.pop().unwrap();
            let left = objects.pop().unwrap();
            (left, right)
        } else {
            let mid = objects.len() / 2;
            let right_half = objects.split_off(mid);
            let left_half = objects;
            (
                Hittables::Bvh(BvhNode::build(left_half, t_start, t_end, rng)?),
                Hittables::Bvh(BvhNode::build(right_half, t_start, t_end, rng)?),
            )
        };

        let bbox = Aabb::merge(&bbox_of(&left, t_start, t_end)?, &bbox_of(&right, t_start, t_end)?);
        Ok(BvhNode {
            left: Box::new(left),
            right: Some(Box::new(right)),
            bbox,
        })
    }
}

fn bbox_of(h: &Hittables, t_start: f64, t_end: f64) -> Result<Aabb, RenderError> {
    h.bounding_box(t_start, t_end).ok_or_else(|| {
        RenderError::ConfigurationError("a primitive inside a BVH has no bounding box".to_string())
    })
}

impl Hittable for BvhNode {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        if !self.bbox.hit(ray, t_min, t_max) {
            return None;
        }

        let left_hit = self.left.hit(ray, t_min, t_max);

        let Some(right) = &self.right else {
            return left_hit;
        };

        // Tighten tMax to the left hit's t before probing the right child,
        // so the right traversal can only return a strictly closer hit
        // (spec.md §4.6).
        let tighter_max = left_hit.as_ref().map_or(t_max, |rec| rec.t);
        let right_hit = right.hit(ray, t_min, tighter_max);

        right_hit.or(left_hit)
    }

    fn bounding_box(&self, _t_start: f64, _t_end: f64) -> Option<Aabb> {
        Some(self.bbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::materials::Materials;
    use crate::objects::hittable_list::HittableList;
    use crate::objects::sphere::Sphere;
    use crate::vec3::{Point3, Vec3};
    use std::sync::Arc;

    fn mat() -> Arc<Materials> {
        Arc::new(Materials::Lambertian(Lambertian::new(Vec3::new(0.5, 0.5, 0.5))))
    }

    #[test]
    fn single_object_bvh_is_hit_like_the_bare_object() {
        let mut rng = Rng::new(1);
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, mat());
        let bvh = BvhNode::build(vec![Hittables::Sphere(sphere)], 0.0, 1.0, &mut rng).unwrap();

        let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let rec = bvh.hit(&r, 0.0, f64::INFINITY).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn agrees_with_linear_list_on_nearest_hit() {
        let mut rng = Rng::new(7);
        let near = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, mat());
        let far = Sphere::new(Point3::new(0.0, 0.0, -5.0), 0.5, mat());
        let side = Sphere::new(Point3::new(3.0, 3.0, -1.0), 0.5, mat());

        let bvh = BvhNode::build(
            vec![
                Hittables::Sphere(near),
                Hittables::Sphere(far),
                Hittables::Sphere(side),
            ],
            0.0,
            1.0,
            &mut rng,
        )
        .unwrap();

        let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let rec = bvh.hit(&r, 0.0, f64::INFINITY).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn bounding_box_encloses_all_members() {
        let mut rng = Rng::new(3);
        let a = Sphere::new(Point3::origin(), 1.0, mat());
        let b = Sphere::new(Point3::new(10.0, 0.0, 0.0), 1.0, mat());
        let bvh = BvhNode::build(vec![Hittables::Sphere(a), Hittables::Sphere(b)], 0.0, 1.0, &mut rng).unwrap();

        let bbox = bvh.bounding_box(0.0, 1.0).unwrap();
        assert!(bbox.contains(&Point3::new(11.0, 0.0, 0.0)));
        assert!(bbox.contains(&Point3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn member_without_a_bounding_box_is_a_configuration_error() {
        // An empty HittableList has no bounding box (spec.md §4.5), so a BVH
        // built over one must surface ConfigurationError rather than panic.
        let mut rng = Rng::new(1);
        let err = BvhNode::build(
            vec![Hittables::HittableList(HittableList::default()), Hittables::Sphere(Sphere::new(Point3::origin(), 1.0, mat()))],
            0.0,
            1.0,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::ConfigurationError(_)));
    }
}
