//! Indexed triangle mesh (spec.md §4.4), generalized from the original
//! tracer's brute-force vertex/index buffer loop into triangles over an
//! internal BVH, matching how this crate accelerates every other
//! multi-primitive aggregate.

use std::sync::Arc;

use crate::aabb::Aabb;
use crate::error::RenderError;
use crate::hittable::{HitRecord, Hittable, Hittables};
use crate::materials::Materials;
use crate::objects::bvh::BvhNode;
use crate::objects::triangle::Triangle;
use crate::ray::Ray;
use crate::rng::Rng;
use crate::vec3::Point3;

pub struct Mesh {
    bvh: BvhNode,
}

impl Mesh {
    /// Builds a mesh from a vertex buffer, triangle index triples, a
    /// material table, and a per-triangle index into that table.
    /// `material_index` defaults to material `0` for any triangle whose
    /// slot is absent, mirroring the single-material case (spec.md §4.4).
    pub fn new(
        vertices: &[Point3],
        indices: &[[usize; 3]],
        materials: &[Arc<Materials>],
        material_index: &[usize],
        t_start: f64,
        t_end: f64,
        rng: &mut Rng,
    ) -> Result<Mesh, RenderError> {
        if vertices.len() < 3 {
            return Err(RenderError::ConfigurationError(
                "a mesh needs at least 3 vertices".to_string(),
            ));
        }
        if materials.is_empty() {
            return Err(RenderError::ConfigurationError(
                "a mesh needs at least 1 material".to_string(),
            ));
        }

        let triangles: Vec<Hittables> = indices
            .iter()
            .enumerate()
            .map(|(i, tri)| {
                let mat_idx = material_index.get(i).copied().unwrap_or(0);
                let material = materials
                    .get(mat_idx)
                    .cloned()
                    .unwrap_or_else(|| materials[0].clone());

                Hittables::Triangle(Triangle::new(
                    vertices[tri[0]],
                    vertices[tri[1]],
                    vertices[tri[2]],
                    material,
                ))
            })
            .collect();

        if triangles.is_empty() {
            return Err(RenderError::ConfigurationError(
                "a mesh needs at least 1 triangle".to_string(),
            ));
        }

        Ok(Mesh {
            bvh: BvhNode::build(triangles, t_start, t_end, rng)?,
        })
    }
}

impl Hittable for Mesh {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord> {
        self.bvh.hit(ray, t_min, t_max)
    }

    fn bounding_box(&self, t_start: f64, t_end: f64) -> Option<Aabb> {
        self.bvh.bounding_box(t_start, t_end)
    }
}
