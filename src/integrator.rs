//! Recursive radiance estimation for Monte-Carlo path tracing (spec.md §4.9),
//! expressed iteratively per the Design Notes' preference: depth is bounded
//! by a worker's stack only incidentally, not by construction.

use crate::hittable::{Hittable, Hittables};
use crate::ray::Ray;
use crate::rng::Rng;
use crate::scene::Background;
use crate::vec3::Color;

/// A surface shadow-acne epsilon: hits closer than this to the ray origin
/// are ignored, since they are almost always self-intersections introduced
/// by floating-point error in the previous bounce (spec.md §4.9).
const T_MIN: f64 = 0.001;

/// Estimates the radiance arriving along `ray`. `max_depth` bounds the
/// number of scatter events; once exhausted, any further contribution is
/// treated as black — identical to a recursive formulation returning black
/// at `depth == 0`, since that return value is then multiplied into the
/// caller's throughput and added, contributing nothing further either way.
pub fn ray_color(ray: &Ray, world: &Hittables, background: &Background, max_depth: u32, rng: &mut Rng) -> Color {
    let mut radiance = Color::black();
    let mut throughput = Color::white();
    let mut current_ray = ray.clone();
    let mut remaining = max_depth;

    loop {
        if remaining == 0 {
            break;
        }

        let Some(rec) = world.hit(&current_ray, T_MIN, f64::INFINITY) else {
            radiance += throughput * background.sample(&current_ray);
            break;
        };

        let emitted = rec.material.emit(&rec);
        radiance += throughput * emitted;

        let Some(scattered) = rec.material.scatter(&current_ray, &rec, rng) else {
            break;
        };

        throughput = throughput * scattered.attenuation;
        current_ray = scattered.ray;
        remaining -= 1;
    }

    radiance
}
