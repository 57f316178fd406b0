//! Surface scattering and emission models (spec.md §3, "Material").

pub mod dielectric;
pub mod diffuse_light;
pub mod lambertian;
pub mod metal;

use crate::hittable::HitRecord;
use crate::ray::Ray;
use crate::rng::Rng;
use crate::vec3::Color;

use dielectric::Dielectric;
use diffuse_light::DiffuseLight;
use lambertian::Lambertian;
use metal::Metal;

/// The outcome of a successful scatter event: the outgoing ray and how much
/// of the incoming radiance survives along it (spec.md §4.7).
pub struct ScatterResult {
    pub ray: Ray,
    pub attenuation: Color,
}

/// Behavior a surface contributes to the light transport equation.
/// `scatter` answers "does the ray continue, and by how much is it
/// attenuated"; `emit` answers "does this surface itself radiate light".
/// Most materials emit nothing, so `emit` defaults to black.
pub trait Material {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut Rng) -> Option<ScatterResult>;

    fn emit(&self, _rec: &HitRecord) -> Color {
        Color::black()
    }
}

/// Closed sum type over every supported material, mirroring `Hittables`
/// (spec.md §9) so the scattering hot path dispatches on a known set of
/// variants instead of a trait object.
pub enum Materials {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
}

impl Material for Materials {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut Rng) -> Option<ScatterResult> {
        match self {
            Materials::Lambertian(l) => l.scatter(r_in, rec, rng),
            Materials::Metal(m) => m.scatter(r_in, rec, rng),
            Materials::Dielectric(d) => d.scatter(r_in, rec, rng),
            Materials::DiffuseLight(d) => d.scatter(r_in, rec, rng),
        }
    }

    fn emit(&self, rec: &HitRecord) -> Color {
        match self {
            Materials::Lambertian(l) => l.emit(rec),
            Materials::Metal(m) => m.emit(rec),
            Materials::Dielectric(d) => d.emit(rec),
            Materials::DiffuseLight(d) => d.emit(rec),
        }
    }
}
