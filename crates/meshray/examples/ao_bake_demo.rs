//! Bakes per-vertex ambient occlusion for a mesh and prints a histogram.
//!
//! Pass a path to an OBJ file to bake a real mesh; without arguments, a
//! procedural sphere-above-a-floor scene is used.
//!
//! Run with: cargo run --example ao_bake_demo [mesh.obj]

use meshray_rs::{
    bake_vertex_occlusion, AmbientOcclusionOptions, Octree, OctreeOptions, TriangleMesh, Vec3,
};

fn main() {
    env_logger::init();

    let mesh = match std::env::args().nth(1) {
        Some(path) => load_obj(&path),
        None => sphere_over_floor(),
    };
    println!(
        "mesh: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    let octree = Octree::build(mesh, OctreeOptions::default());

    let options = AmbientOcclusionOptions {
        samples_per_vertex: 64,
        ..AmbientOcclusionOptions::default()
    };
    let start = std::time::Instant::now();
    let access = bake_vertex_occlusion(&octree, &options);
    println!(
        "baked {} vertices x {} samples in {:.2?}",
        access.len(),
        options.samples_per_vertex,
        start.elapsed()
    );

    // Ten-bucket histogram of ambient access.
    let mut buckets = [0_usize; 10];
    for &a in &access {
        let bucket = ((a * 10.0) as usize).min(9);
        buckets[bucket] += 1;
    }
    for (i, count) in buckets.iter().enumerate() {
        let lo = i as f32 / 10.0;
        let hi = lo + 0.1;
        println!("access [{lo:.1}, {hi:.1}): {count:6} {}", "#".repeat(count * 60 / access.len().max(1)));
    }
}

fn load_obj(path: &str) -> TriangleMesh {
    let (models, _materials) =
        tobj::load_obj(path, &tobj::GPU_LOAD_OPTIONS).expect("failed to read OBJ file");

    // Merge every model into one flat buffer pair.
    let mut positions = Vec::new();
    let mut indices = Vec::new();
    for model in models {
        let base = (positions.len() / 3) as u32;
        positions.extend_from_slice(&model.mesh.positions);
        indices.extend(model.mesh.indices.iter().map(|i| base + i));
    }
    TriangleMesh::from_flat(&positions, &indices).expect("OBJ produced an invalid mesh")
}

/// A UV sphere hovering just above a large floor quad; the underside of the
/// sphere and the floor beneath it shade each other.
fn sphere_over_floor() -> TriangleMesh {
    let rings = 24_u32;
    let segments = 48_u32;
    let radius = 1.0_f32;
    let center = Vec3::new(0.0, 1.2, 0.0);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let theta = std::f32::consts::PI * ring as f32 / rings as f32;
        for segment in 0..=segments {
            let phi = 2.0 * std::f32::consts::PI * segment as f32 / segments as f32;
            vertices.push(
                center
                    + radius
                        * Vec3::new(
                            theta.sin() * phi.cos(),
                            theta.cos(),
                            theta.sin() * phi.sin(),
                        ),
            );
        }
    }
    for ring in 0..rings {
        for segment in 0..segments {
            let i0 = ring * (segments + 1) + segment;
            let i1 = i0 + 1;
            let i2 = i0 + segments + 1;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    let base = vertices.len() as u32;
    vertices.extend_from_slice(&[
        Vec3::new(-8.0, 0.0, -8.0),
        Vec3::new(8.0, 0.0, -8.0),
        Vec3::new(8.0, 0.0, 8.0),
        Vec3::new(-8.0, 0.0, 8.0),
    ]);
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);

    TriangleMesh::new(vertices, indices).expect("procedural mesh is always valid")
}
