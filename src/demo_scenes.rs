//! Hand-written scenes to render, standing in for a scene file format this
//! crate does not define (spec.md §1 Non-goals: no on-disk scene description).
//! `random_sphere_field` and `hollow_glass_spheres` are generalized from the
//! original tracer's `book_cover_scene` and `tutorial_scene`.

use std::sync::Arc;

use crate::camera::Camera;
use crate::hittable::Hittables;
use crate::materials::dielectric::Dielectric;
use crate::materials::lambertian::Lambertian;
use crate::materials::metal::Metal;
use crate::materials::Materials;
use crate::objects::bvh::BvhNode;
use crate::objects::hittable_list::HittableList;
use crate::objects::mesh::Mesh;
use crate::objects::sphere::Sphere;
use crate::ray::Ray;
use crate::rng::Rng;
use crate::scene::{Background, Scene};
use crate::vec3::{Color, Point3, Vec3};

/// A field of randomly placed, randomly materialed small spheres around
/// three large feature spheres — one diffuse, one metal, one hollow glass
/// (the negative-radius trick from spec.md §4.2).
pub fn random_sphere_field(image_width: u32, rng: &mut Rng) -> Scene {
    let mut objects = Vec::new();

    let ground_material = Arc::new(Materials::Lambertian(Lambertian::new(Color::new(0.5, 0.5, 0.5))));
    objects.push(Hittables::Sphere(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground_material)));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = rng.uniform();
            let center = Point3::new(a as f64 + 0.9 * rng.uniform(), 0.2, b as f64 + 0.9 * rng.uniform());

            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                let albedo = Vec3::random(rng) * Vec3::random(rng);
                Arc::new(Materials::Lambertian(Lambertian::new(albedo)))
            } else if choose_mat < 0.95 {
                let albedo = Vec3::random_range(rng, 0.5, 1.0);
                let fuzz = rng.range(0.0, 0.5);
                Arc::new(Materials::Metal(Metal::new(albedo, fuzz)))
            } else {
                Arc::new(Materials::Dielectric(Dielectric::new(1.5)))
            };

            objects.push(Hittables::Sphere(Sphere::new(center, 0.2, material)));
        }
    }

    let glass = Arc::new(Materials::Dielectric(Dielectric::new(1.5)));
    objects.push(Hittables::Sphere(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass)));

    let diffuse = Arc::new(Materials::Lambertian(Lambertian::new(Color::new(0.4, 0.2, 0.1))));
    objects.push(Hittables::Sphere(Sphere::new(Point3::new(-4.0, 1.0, 0.0), 1.0, diffuse)));

    let metal = Arc::new(Materials::Metal(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)));
    objects.push(Hittables::Sphere(Sphere::new(Point3::new(4.0, 1.0, 0.0), 1.0, metal)));

    let world = Hittables::Bvh(BvhNode::build(objects, 0.0, 1.0, rng).expect("every sphere has a bounding box"));

    let camera = Camera::new(
        Point3::new(13.0, 2.0, 3.0),
        Point3::origin(),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        16.0 / 9.0,
        image_width,
        0.1,
        10.0,
    );

    Scene::new(world, camera, Background::SkyGradient)
}

/// Three spheres in a row: matte ground, a hollow glass sphere (built from
/// a positive-radius outer surface and a negative-radius inner surface so
/// the ray sees the glass from both sides), and a fuzzed metal sphere.
pub fn hollow_glass_spheres(image_width: u32) -> Scene {
    let ground = Arc::new(Materials::Lambertian(Lambertian::new(Color::new(0.8, 0.8, 0.0))));
    let center_mat = Arc::new(Materials::Lambertian(Lambertian::new(Color::new(0.1, 0.2, 0.5))));
    let glass = Arc::new(Materials::Dielectric(Dielectric::new(1.5)));
    let right = Arc::new(Materials::Metal(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0)));

    let world = HittableList::new(vec![
        Hittables::Sphere(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground)),
        Hittables::Sphere(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, center_mat)),
        Hittables::Sphere(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, glass.clone())),
        Hittables::Sphere(Sphere::new(Point3::new(-1.0, 0.0, -1.0), -0.4, glass)),
        Hittables::Sphere(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, right)),
    ]);

    let camera = Camera::new(
        Point3::new(-2.0, 2.0, 1.0),
        Point3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        16.0 / 9.0,
        image_width,
        0.0,
        (Point3::new(-2.0, 2.0, 1.0) - Point3::new(0.0, 0.0, -1.0)).length(),
    );

    Scene::new(Hittables::HittableList(world), camera, Background::SkyGradient)
}

/// A single quad built from two triangles, floating above a ground plane,
/// exercising `Mesh` (spec.md §4.4).
pub fn quad_mesh_scene(image_width: u32, rng: &mut Rng) -> Scene {
    let ground = Arc::new(Materials::Lambertian(Lambertian::new(Color::new(0.5, 0.5, 0.5))));
    let quad_material = Arc::new(Materials::Lambertian(Lambertian::new(Color::new(0.8, 0.2, 0.2))));

    let vertices = [
        Point3::new(-1.0, 0.0, -1.0),
        Point3::new(1.0, 0.0, -1.0),
        Point3::new(1.0, 2.0, -1.0),
        Point3::new(-1.0, 2.0, -1.0),
    ];
    let indices = [[0usize, 1, 2], [0usize, 2, 3]];

    let mesh = Mesh::new(&vertices, &indices, &[quad_material], &[0, 0], 0.0, 1.0, rng)
        .expect("quad mesh is well-formed");

    let world = HittableList::new(vec![
        Hittables::Sphere(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground)),
        Hittables::Mesh(mesh),
    ]);

    let camera = Camera::new(
        Point3::new(0.0, 1.0, 4.0),
        Point3::new(0.0, 1.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        40.0,
        16.0 / 9.0,
        image_width,
        0.0,
        1.0,
    );

    Scene::new(Hittables::HittableList(world), camera, Background::SkyGradient)
}
