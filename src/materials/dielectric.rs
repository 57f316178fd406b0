//! Refractive (glass/water) surfaces with Schlick-approximated Fresnel
//! reflectance (spec.md §4.7).

use crate::hittable::HitRecord;
use crate::materials::{Material, ScatterResult};
use crate::ray::Ray;
use crate::rng::Rng;
use crate::vec3::Color;

pub struct Dielectric {
    refraction_index: f64,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Dielectric {
        Dielectric { refraction_index }
    }

    /// Schlick's approximation for the angle-dependent Fresnel reflectance.
    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut Rng) -> Option<ScatterResult> {
        let eta = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = r_in.direction().unit();
        let cos_theta = (-unit_direction).dot(&rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = eta * sin_theta > 1.0;
        let direction = if cannot_refract || Dielectric::reflectance(cos_theta, eta) > rng.uniform() {
            unit_direction.reflect(&rec.normal)
        } else {
            unit_direction.refract(&rec.normal, eta)
        };

        Some(ScatterResult {
            ray: Ray::new(rec.point, direction),
            attenuation: Color::white(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Materials;
    use crate::vec3::{Point3, Vec3};
    use std::sync::Arc;

    #[test]
    fn perpendicular_entry_refracts_without_bending() {
        let glass = Dielectric::new(1.5);
        let mat = Arc::new(Materials::Dielectric(Dielectric::new(1.5)));
        let incoming = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&incoming, Point3::origin(), Vec3::new(0.0, 0.0, 1.0), 1.0, mat);

        let mut rng = Rng::new(1);
        let result = glass.scatter(&incoming, &rec, &mut rng).unwrap();
        assert!((result.ray.direction().unit() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-9);
    }

    #[test]
    fn total_internal_reflection_beyond_critical_angle() {
        let glass = Dielectric::new(1.5);
        let mat = Arc::new(Materials::Dielectric(Dielectric::new(1.5)));
        // Grazing ray exiting a denser medium (front_face = false => eta = 1.5),
        // well past the critical angle so refraction is impossible.
        let incoming = Ray::new(Point3::new(-1.0, 0.01, 0.0), Vec3::new(1.0, -0.01, 0.0));
        let rec = HitRecord::new(&incoming, Point3::origin(), Vec3::new(0.0, 1.0, 0.0), 1.0, mat);
        assert!(!rec.front_face);

        let mut rng = Rng::new(2);
        let result = glass.scatter(&incoming, &rec, &mut rng).unwrap();
        // Reflected, so it bounces back into the y > 0 half-space.
        assert!(result.ray.direction().y() > 0.0);
    }

    #[test]
    fn attenuation_is_always_white() {
        let glass = Dielectric::new(1.33);
        let mat = Arc::new(Materials::Dielectric(Dielectric::new(1.33)));
        let incoming = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&incoming, Point3::origin(), Vec3::new(0.0, 0.0, 1.0), 1.0, mat);

        let mut rng = Rng::new(3);
        let result = glass.scatter(&incoming, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, Color::white());
    }
}
