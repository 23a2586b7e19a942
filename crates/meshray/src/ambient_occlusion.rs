//! Per-vertex ambient-occlusion baking.
//!
//! For every vertex of the tree's mesh, casts a batch of hemisphere rays
//! oriented around the vertex normal and measures the fraction that escape
//! the mesh. The tree is immutable during the bake, so the per-vertex loop
//! fans out across threads with rayon.

use glam::Vec3;
use meshray_core::Ray;
use meshray_octree::Octree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning for [`bake_vertex_occlusion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientOcclusionOptions {
    /// Hemisphere rays cast per vertex.
    pub samples_per_vertex: u32,
    /// Offset of each ray origin along the vertex normal, keeping samples
    /// from immediately re-hitting the surface they start on.
    pub bias: f32,
    /// Seed for the sample directions. The same seed always produces the
    /// same bake, regardless of thread count.
    pub seed: u64,
}

impl Default for AmbientOcclusionOptions {
    fn default() -> Self {
        Self {
            samples_per_vertex: 32,
            bias: 1e-3,
            seed: 0,
        }
    }
}

/// Bakes per-vertex ambient access: 1.0 is fully open, 0.0 fully occluded.
///
/// Each vertex gets [`AmbientOcclusionOptions::samples_per_vertex`] rays
/// distributed uniformly over the hemisphere around its normal, starting
/// slightly off the surface; its ambient access is the fraction of rays that
/// hit nothing. Vertices with a zero normal (referenced by no triangle, or
/// only by degenerate ones) have no usable hemisphere and are reported fully
/// open.
///
/// Every vertex derives its RNG from `(seed, vertex id)`, so the result is
/// deterministic however rayon schedules the work.
pub fn bake_vertex_occlusion(octree: &Octree, options: &AmbientOcclusionOptions) -> Vec<f32> {
    let mesh = octree.mesh();
    let normals = mesh.vertex_normals();
    let samples = options.samples_per_vertex.max(1);

    let access: Vec<f32> = mesh
        .vertices()
        .par_iter()
        .zip(normals.par_iter())
        .enumerate()
        .map(|(id, (&position, &normal))| {
            if normal.length_squared() < 1e-12 {
                return 1.0;
            }

            let mut rng = StdRng::seed_from_u64(
                options.seed ^ (id as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15),
            );
            let origin = position + normal * options.bias;

            let mut hits = 0_u32;
            for _ in 0..samples {
                let dir = hemisphere_sample(&mut rng, normal);
                if octree.any_hit(&Ray::new(origin, dir)) {
                    hits += 1;
                }
            }

            #[allow(clippy::cast_precision_loss)]
            let occlusion = hits as f32 / samples as f32;
            1.0 - occlusion
        })
        .collect();

    log::debug!(
        "baked ambient occlusion: {} vertices x {samples} samples",
        access.len()
    );
    access
}

/// Uniform direction on the hemisphere around `normal`.
///
/// Rejection-samples the unit ball, normalizes, and flips the result into
/// the hemisphere. Near-zero candidates are rejected too so normalization
/// never amplifies noise.
fn hemisphere_sample<R: Rng>(rng: &mut R, normal: Vec3) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0_f32..=1.0),
            rng.gen_range(-1.0_f32..=1.0),
            rng.gen_range(-1.0_f32..=1.0),
        );
        let len_sq = candidate.length_squared();
        if len_sq > 1e-4 && len_sq <= 1.0 {
            let dir = candidate / len_sq.sqrt();
            return if dir.dot(normal) < 0.0 { -dir } else { dir };
        }
    }
}
