//! Fuzzed specular reflectance (spec.md §4.7).

use crate::hittable::HitRecord;
use crate::materials::{Material, ScatterResult};
use crate::ray::Ray;
use crate::rng::Rng;
use crate::vec3::{Color, Vec3};

pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` is clamped into `[0, 1]`: it perturbs the ideal reflection
    /// direction by `fuzz * random_unit_vector`, so a factor past 1 would
    /// let the result point into the surface more often than the `dot`
    /// check below could reasonably filter out.
    pub fn new(albedo: Color, fuzz: f64) -> Metal {
        Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut Rng) -> Option<ScatterResult> {
        let reflected = r_in.direction().reflect(&rec.normal).unit() + self.fuzz * Vec3::random_unit_vector(rng);
        let scattered = Ray::new(rec.point, reflected);

        if scattered.direction().dot(&rec.normal) > 0.0 {
            Some(ScatterResult {
                ray: scattered,
                attenuation: self.albedo,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Materials;
    use crate::vec3::Point3;
    use std::sync::Arc;

    #[test]
    fn zero_fuzz_reflects_perfectly() {
        let metal = Metal::new(Color::new(0.8, 0.8, 0.8), 0.0);
        let mat = Arc::new(Materials::Metal(Metal::new(Color::new(0.8, 0.8, 0.8), 0.0)));
        let incoming = Ray::new(Point3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let rec = HitRecord::new(&incoming, Point3::origin(), Vec3::new(0.0, 1.0, 0.0), 1.0, mat);

        let mut rng = Rng::new(2);
        let result = metal.scatter(&incoming, &rec, &mut rng).unwrap();
        let expected = Vec3::new(1.0, -1.0, 0.0).unit();
        assert!((result.ray.direction().x() - expected.x()).abs() < 1e-9);
        assert!((result.ray.direction().y() - expected.y()).abs() < 1e-9);
    }

    #[test]
    fn fuzz_is_clamped_into_unit_interval() {
        let metal = Metal::new(Color::black(), 5.0);
        assert_eq!(metal.fuzz, 1.0);
    }

    #[test]
    fn grazing_fuzzed_reflection_can_be_absorbed() {
        // At grazing incidence with heavy fuzz the perturbed reflection can
        // dip below the surface; across enough seeds that must happen at
        // least once, exercising the `dot <= 0` absorption branch.
        let metal = Metal::new(Color::white(), 1.0);
        let incoming = Ray::new(Point3::new(-1.0, 0.001, 0.0), Vec3::new(1.0, -0.001, 0.0));

        let absorbed_at_least_once = (0..200).any(|seed| {
            let mat = Arc::new(Materials::Metal(Metal::new(Color::white(), 1.0)));
            let rec = HitRecord::new(&incoming, Point3::origin(), Vec3::new(0.0, 1.0, 0.0), 1.0, mat);
            let mut rng = Rng::new(seed);
            metal.scatter(&incoming, &rec, &mut rng).is_none()
        });

        assert!(absorbed_at_least_once);
    }
}
