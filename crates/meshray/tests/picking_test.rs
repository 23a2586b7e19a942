//! End-to-end picking behavior: quad hit/miss scenarios, nearest-hit
//! ordering, and agreement between the octree path and the brute-force
//! reference picker.

use meshray_rs::{
    pick, pick_brute_force, pick_ray, Mat4, Octree, OctreeOptions, Ray, TriangleMesh, Vec2, Vec3,
};
use proptest::prelude::*;

/// Unit quad in the z = 0 plane, split into two triangles.
fn quad_mesh() -> TriangleMesh {
    TriangleMesh::new(
        vec![
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
    .expect("valid mesh")
}

fn sphere_mesh() -> TriangleMesh {
    let rings = 12_u32;
    let segments = 24_u32;
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=rings {
        let theta = std::f32::consts::PI * ring as f32 / rings as f32;
        for segment in 0..=segments {
            let phi = 2.0 * std::f32::consts::PI * segment as f32 / segments as f32;
            vertices.push(Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ));
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
    TriangleMesh::new(vertices, indices).expect("valid mesh")
}

#[test]
fn test_quad_pick_scenario() {
    let octree = Octree::build(quad_mesh(), OctreeOptions::default());
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

    let result = pick(&octree, &ray).expect("ray through the quad must hit");
    assert!((result.t - 5.0).abs() < 1e-4);
    // (0, 0) lies on the shared diagonal; either triangle is a correct
    // answer, and it must match the brute-force reference.
    assert!(result.triangle < 2);
    let reference = pick_brute_force(octree.mesh(), &ray).expect("reference must hit");
    assert_eq!(result, reference);
}

#[test]
fn test_quad_miss_scenario() {
    let octree = Octree::build(quad_mesh(), OctreeOptions::default());
    let ray = Ray::new(Vec3::new(10.0, 10.0, -5.0), Vec3::Z);
    assert_eq!(pick(&octree, &ray), None);
    assert!(!octree.any_hit(&ray));
}

#[test]
fn test_nearest_hit_prefers_closer_of_stacked_triangles() {
    // Two stacked triangles covering the same (x, y) footprint; the farther
    // one comes first in the index buffer.
    let mesh = TriangleMesh::new(
        vec![
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ],
        vec![0, 1, 2, 3, 4, 5],
    )
    .expect("valid mesh");
    let octree = Octree::build(mesh, OctreeOptions::default());

    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
    let hit = octree.nearest_hit(&ray).expect("should hit");
    assert_eq!(hit.triangle, 1);
    assert!((hit.t - 6.0).abs() < 1e-4);

    let reference = pick_brute_force(octree.mesh(), &ray).expect("reference must hit");
    assert_eq!(hit.t, reference.t);
    assert_eq!(hit.triangle, reference.triangle);
}

#[test]
fn test_pick_ray_end_to_end() {
    let octree = Octree::build(quad_mesh(), OctreeOptions::default());

    let viewport = Vec2::new(1024.0, 768.0);
    let proj = Mat4::perspective_lh(
        std::f32::consts::FRAC_PI_4,
        viewport.x / viewport.y,
        0.1,
        100.0,
    );
    let view = Mat4::look_at_lh(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::Y);

    let ray = pick_ray(viewport * 0.5, viewport, &proj, &view, &Mat4::IDENTITY);
    let result = pick(&octree, &ray).expect("screen center looks straight at the quad");
    assert!((result.t - 5.0).abs() < 1e-3);
    assert!(result.position.length() < 1e-3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Query soundness: the octree path agrees exactly with a linear scan
    // over all triangles, for hits and misses alike.
    #[test]
    fn prop_octree_pick_matches_brute_force(
        ox in -3.0_f32..3.0,
        oy in -3.0_f32..3.0,
        oz in -3.0_f32..3.0,
        tx in -1.0_f32..1.0,
        ty in -1.0_f32..1.0,
        tz in -1.0_f32..1.0,
    ) {
        let mesh = sphere_mesh();
        let octree = Octree::build(mesh.clone(), OctreeOptions::default());

        let origin = Vec3::new(ox, oy, oz);
        let target = Vec3::new(tx, ty, tz);
        prop_assume!((target - origin).length() > 1e-3);
        let ray = Ray::new(origin, target - origin);

        let fast = pick(&octree, &ray);
        let slow = pick_brute_force(&mesh, &ray);
        match (fast, slow) {
            (None, None) => {}
            (Some(f), Some(s)) => {
                prop_assert_eq!(f.triangle, s.triangle);
                prop_assert_eq!(f.t, s.t);
            }
            (f, s) => prop_assert!(false, "octree {f:?} disagrees with brute force {s:?}"),
        }
        prop_assert_eq!(octree.any_hit(&ray), slow.is_some());
    }
}
