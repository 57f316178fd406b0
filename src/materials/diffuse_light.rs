//! Emissive surfaces, reintroduced from the original tracer's light sources
//! (not present in the retrieval pack's teacher, which has no emitters).

use crate::hittable::HitRecord;
use crate::materials::{Material, ScatterResult};
use crate::ray::Ray;
use crate::rng::Rng;
use crate::vec3::Color;

pub struct DiffuseLight {
    emit: Color,
}

impl DiffuseLight {
    pub fn new(emit: Color) -> DiffuseLight {
        DiffuseLight { emit }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _r_in: &Ray, _rec: &HitRecord, _rng: &mut Rng) -> Option<ScatterResult> {
        None
    }

    /// Emits only from the front face; the back of a light panel is black,
    /// resolving the Open Question on back-face emission in favor of the
    /// recommended behavior.
    fn emit(&self, rec: &HitRecord) -> Color {
        if rec.front_face {
            self.emit
        } else {
            Color::black()
        }
    }
}
