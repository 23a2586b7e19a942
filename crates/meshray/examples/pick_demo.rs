//! Builds an octree over a procedural hilly terrain grid and picks triangles
//! with a few cursor positions, the way a click handler would.
//!
//! Run with: cargo run --example pick_demo

use meshray_rs::{pick, pick_ray, Mat4, Octree, OctreeOptions, TriangleMesh, Vec2, Vec3};

fn main() {
    env_logger::init();

    let mesh = hills_mesh(64, 64, 160.0);
    println!(
        "terrain: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    let octree = Octree::build(mesh, OctreeOptions::default());
    println!("scene bounds: {:?}", octree.bounds());

    let viewport = Vec2::new(1280.0, 720.0);
    let proj = Mat4::perspective_lh(
        std::f32::consts::FRAC_PI_4,
        viewport.x / viewport.y,
        1.0,
        1000.0,
    );
    let view = Mat4::look_at_lh(Vec3::new(0.0, 60.0, -110.0), Vec3::ZERO, Vec3::Y);
    let world = Mat4::IDENTITY;

    let cursors = [
        viewport * 0.5,
        Vec2::new(200.0, 200.0),
        Vec2::new(1100.0, 650.0),
        Vec2::new(640.0, 40.0),
    ];
    for cursor in cursors {
        let ray = pick_ray(cursor, viewport, &proj, &view, &world);
        match pick(&octree, &ray) {
            Some(result) => println!(
                "cursor ({:4}, {:4}) -> triangle {:5} at t = {:8.3}, position {:?}",
                cursor.x, cursor.y, result.triangle, result.t, result.position
            ),
            None => println!("cursor ({:4}, {:4}) -> no hit", cursor.x, cursor.y),
        }
    }
}

/// A grid of `nx` x `nz` cells over a `size` x `size` patch, displaced by a
/// gentle hill function.
fn hills_mesh(nx: u32, nz: u32, size: f32) -> TriangleMesh {
    let height = |x: f32, z: f32| 0.3 * (z * (0.1 * x).sin() + x * (0.1 * z).cos());

    let mut vertices = Vec::with_capacity(((nx + 1) * (nz + 1)) as usize);
    for iz in 0..=nz {
        for ix in 0..=nx {
            let x = (ix as f32 / nx as f32 - 0.5) * size;
            let z = (iz as f32 / nz as f32 - 0.5) * size;
            vertices.push(Vec3::new(x, height(x, z), z));
        }
    }

    let mut indices = Vec::with_capacity((nx * nz * 6) as usize);
    for iz in 0..nz {
        for ix in 0..nx {
            let i0 = iz * (nx + 1) + ix;
            let i1 = i0 + 1;
            let i2 = i0 + (nx + 1);
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    TriangleMesh::new(vertices, indices).expect("grid mesh is always valid")
}
