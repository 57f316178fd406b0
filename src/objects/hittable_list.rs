//! A linear collection of hittables that itself behaves as one (spec.md §4.5).

use crate::aabb::Aabb;
use crate::hittable::{HitRecord, Hittable};
use crate::hittable::Hittables;
use crate::ray::Ray;

#[derive(Default)]
pub struct HittableList {
    objects: Vec<Hittables>,
}

impl HittableList {
    pub fn new(objects: Vec<Hittables>) -> HittableList {
        HittableList { objects }
    }

    pub fn add(&mut self, object: Hittables) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Hittables] {
        &self.objects
    }

    pub fn into_objects(self) -> Vec<Hittables> {
        self.objects
    }
}

impl Hittable for HittableList {
    /// Iterates every member. The Open Question in spec.md §9 ("should the
    /// loop tighten tMax from the best hit found so far") is resolved in
    /// favor of tightening — strictly faster, and still returns the
    /// argmin-`t` hit among members.
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        let mut closest = t_max;
        let mut best: Option<HitRecord> = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, t_min, closest) {
                closest = rec.t;
                best = Some(rec);
            }
        }

        best
    }

    fn bounding_box(&self, t_start: f64, t_end: f64) -> Option<Aabb> {
        if self.objects.is_empty() {
            return None;
        }

        let mut result: Option<Aabb> = None;
        for object in &self.objects {
            let bbox = object.bounding_box(t_start, t_end)?;
            result = Some(match result {
                Some(acc) => Aabb::merge(&acc, &bbox),
                None => bbox,
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::lambertian::Lambertian;
    use crate::materials::Materials;
    use crate::objects::sphere::Sphere;
    use crate::vec3::{Point3, Vec3};
    use std::sync::Arc;

    fn mat() -> Arc<Materials> {
        Arc::new(Materials::Lambertian(Lambertian::new(Vec3::new(0.5, 0.5, 0.5))))
    }

    #[test]
    fn returns_argmin_t_among_members() {
        let near = Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, mat());
        let far = Sphere::new(Point3::new(0.0, 0.0, -5.0), 0.5, mat());

        let list = HittableList::new(vec![
            Hittables::Sphere(far),
            Hittables::Sphere(near),
        ]);

        let r = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0));
        let rec = list.hit(&r, 0.0, f64::INFINITY).unwrap();
        assert!((rec.t - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_list_has_no_bounding_box() {
        let list = HittableList::default();
        assert!(list.bounding_box(0.0, 1.0).is_none());
    }

    #[test]
    fn bounding_box_merges_all_members() {
        let a = Sphere::new(Point3::origin(), 1.0, mat());
        let b = Sphere::new(Point3::new(5.0, 0.0, 0.0), 1.0, mat());
        let list = HittableList::new(vec![Hittables::Sphere(a), Hittables::Sphere(b)]);

        let bbox = list.bounding_box(0.0, 1.0).unwrap();
        assert!(bbox.contains(&Point3::new(5.5, 0.0, 0.0)));
        assert!(bbox.contains(&Point3::new(-0.5, 0.0, 0.0)));
    }
}
