//! Thin-lens camera: orthonormal basis construction, viewport geometry, and
//! depth-of-field ray generation (spec.md §4.8, §4.10).

use crate::ray::Ray;
use crate::rng::Rng;
use crate::vec3::{Point3, Vec3};

pub struct Camera {
    position: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    right: Vec3,
    up: Vec3,
    lens_radius: f64,
    image_width: u32,
    image_height: u32,
}

impl Camera {
    /// `vfov_degrees` is the vertical field of view. `aperture` of `0`
    /// disables depth of field (every ray originates exactly at
    /// `look_from`); `lensRadius = aperture/2` (spec.md §4.8).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        world_up: Vec3,
        vfov_degrees: f64,
        aspect_ratio: f64,
        image_width: u32,
        aperture: f64,
        focal_length: f64,
    ) -> Camera {
        let image_height = ((image_width as f64 / aspect_ratio) as u32).max(1);

        let theta = vfov_degrees.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = aspect_ratio * viewport_height;

        let forward = (look_at - look_from).unit();
        let right = forward.cross(&world_up).unit();
        let up = right.cross(&forward);

        let horizontal = viewport_width * right * focal_length;
        let vertical = viewport_height * up * focal_length;
        let lower_left_corner = look_from - horizontal / 2.0 - vertical / 2.0 + forward * focal_length;

        Camera {
            position: look_from,
            lower_left_corner,
            horizontal,
            vertical,
            right,
            up,
            lens_radius: aperture / 2.0,
            image_width,
            image_height,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Samples a ray through pixel `(i, j)` (origin bottom-left), jittered
    /// within the pixel footprint and mapped to normalized screen
    /// coordinates via spec.md §4.10's `u = (i+ξ)/(W−1)`,
    /// `v = (H−1−j+ξ')/(H−1)`.
    pub fn sample_ray(&self, i: u32, j: u32, rng: &mut Rng) -> Ray {
        let denom_w = if self.image_width > 1 {
            (self.image_width - 1) as f64
        } else {
            1.0
        };
        let denom_h = if self.image_height > 1 {
            (self.image_height - 1) as f64
        } else {
            1.0
        };

        let u = (i as f64 + rng.uniform()) / denom_w;
        let v = ((self.image_height - 1) as f64 - j as f64 + rng.uniform()) / denom_h;

        self.ray_from_uv(u, v, rng)
    }

    /// Builds a ray from normalized screen coordinates `(u, v)`, sampling
    /// a point on the lens when `lens_radius > 0` (spec.md §4.8).
    fn ray_from_uv(&self, u: f64, v: f64, rng: &mut Rng) -> Ray {
        let lens = self.lens_radius * Vec3::random_in_unit_disk(rng);
        let offset = lens.x() * self.right + lens.y() * self.up;
        let origin = self.position + offset;
        let direction = self.lower_left_corner + u * self.horizontal + v * self.vertical - origin;

        Ray::new(origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_height_matches_aspect_ratio() {
        let cam = Camera::new(
            Point3::origin(),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            2.0,
            200,
            0.0,
            1.0,
        );
        assert_eq!(cam.image_height(), 100);
    }

    #[test]
    fn zero_aperture_rays_all_originate_at_look_from() {
        let cam = Camera::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::origin(),
            Vec3::new(0.0, 1.0, 0.0),
            40.0,
            1.0,
            64,
            0.0,
            10.0,
        );
        let mut rng = Rng::new(9);
        for _ in 0..20 {
            let r = cam.sample_ray(10, 10, &mut rng);
            assert_eq!(*r.origin(), Point3::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn center_pixel_ray_points_toward_look_at() {
        let cam = Camera::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::origin(),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
            101,
            0.0,
            1.0,
        );
        let mut rng = Rng::new(1);
        let r = cam.sample_ray(50, 50, &mut rng);
        // Pixel (50, 50) is near image center for a 101x101 image; its
        // direction should point roughly down -z, toward look_at.
        assert!(r.direction().unit().z() < -0.9);
    }

    #[test]
    fn nonzero_aperture_spreads_ray_origins_within_the_lens() {
        let cam = Camera::new(
            Point3::new(0.0, 0.0, 1.0),
            Point3::origin(),
            Vec3::new(0.0, 1.0, 0.0),
            40.0,
            1.0,
            64,
            0.5,
            1.0,
        );
        let mut rng = Rng::new(3);
        let origins: Vec<_> = (0..10).map(|_| *cam.sample_ray(32, 32, &mut rng).origin()).collect();
        assert!(origins.windows(2).any(|w| w[0] != w[1]));
        for origin in &origins {
            assert!((*origin - Point3::new(0.0, 0.0, 1.0)).length() <= 0.25 + 1e-9);
        }
    }
}
