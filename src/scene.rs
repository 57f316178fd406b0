//! A scene bundles the world geometry, camera, and background a render
//! needs (spec.md §1 collaborators). Reintroduces the original tracer's
//! sky-gradient background alongside a flat solid color, resolving the
//! background-source Open Question in favor of the scene owning it.

use crate::camera::Camera;
use crate::hittable::Hittables;
use crate::ray::Ray;
use crate::vec3::Color;

/// What a ray that hits nothing resolves to.
pub enum Background {
    Solid(Color),
    /// Linear interpolation between white at the horizon and a pale blue
    /// at the zenith, parameterized by the ray direction's `y` component
    /// — the gradient sky from the original tracer's `main.cpp`.
    SkyGradient,
}

impl Background {
    pub fn sample(&self, ray: &Ray) -> Color {
        match self {
            Background::Solid(c) => *c,
            Background::SkyGradient => {
                let unit_direction = ray.direction().unit();
                let t = 0.5 * (unit_direction.y() + 1.0);
                (1.0 - t) * Color::white() + t * Color::new(0.5, 0.7, 1.0)
            }
        }
    }
}

pub struct Scene {
    pub world: Hittables,
    pub camera: Camera,
    pub background: Background,
}

impl Scene {
    pub fn new(world: Hittables, camera: Camera, background: Background) -> Scene {
        Scene {
            world,
            camera,
            background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::{Point3, Vec3};

    #[test]
    fn solid_background_ignores_ray_direction() {
        let bg = Background::Solid(Color::new(0.1, 0.2, 0.3));
        let r = Ray::new(Point3::origin(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(bg.sample(&r), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn sky_gradient_is_white_at_horizon() {
        let bg = Background::SkyGradient;
        let r = Ray::new(Point3::origin(), Vec3::new(1.0, 0.0, 0.0));
        let c = bg.sample(&r);
        assert!((c.r() - 1.0).abs() < 1e-9);
        assert!((c.g() - 1.0).abs() < 1e-9);
        assert!((c.b() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sky_gradient_is_pale_blue_at_zenith() {
        let bg = Background::SkyGradient;
        let r = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0));
        let c = bg.sample(&r);
        assert!((c.r() - 0.5).abs() < 1e-9);
        assert!((c.g() - 0.7).abs() < 1e-9);
        assert!((c.b() - 1.0).abs() < 1e-9);
    }
}
