//! Structural invariants of the octree build.
//!
//! These tests walk the finished tree and check the properties the query
//! phase depends on: leaves only own triangles that really intersect their
//! box, no triangle is ever dropped from a box it intersects, and building
//! is deterministic.

use meshray_rs::{triangle_aabb, Octree, OctreeOptions, TriangleMesh, Vec3};

/// Small separated triangles scattered over a 4x4x4 grid.
fn scattered_mesh(count: usize) -> TriangleMesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    for i in 0..count {
        let cell = |n: usize| (n as f32) * 4.0 - 6.0;
        let center = Vec3::new(cell(i % 4), cell((i / 4) % 4), cell((i / 16) % 4));
        let base = vertices.len() as u32;
        vertices.push(center);
        vertices.push(center + Vec3::new(0.3, 0.0, 0.0));
        vertices.push(center + Vec3::new(0.0, 0.3, 0.0));
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    TriangleMesh::new(vertices, indices).expect("valid mesh")
}

/// A UV sphere with enough triangles for a multi-level tree.
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

fn collect_leaves(tree: &Octree) -> Vec<&meshray_rs::OctreeNode> {
    let mut leaves = Vec::new();
    tree.root().for_each_leaf(&mut |leaf| leaves.push(leaf));
    leaves
}

#[test]
fn test_containment_every_leaf_triangle_intersects_its_box() {
    for mesh in [scattered_mesh(61), sphere_mesh()] {
        let tree = Octree::build(mesh, OctreeOptions::default());
        for leaf in collect_leaves(&tree) {
            for &id in leaf.triangles() {
                let [v0, v1, v2] = tree.mesh().triangle(id as usize);
                assert!(
                    triangle_aabb(v0, v1, v2, leaf.bounds()),
                    "leaf owns triangle {id} that does not intersect its box"
                );
            }
        }
    }
}

#[test]
fn test_completeness_no_triangle_dropped_from_an_intersecting_leaf() {
    for mesh in [scattered_mesh(61), sphere_mesh()] {
        let tree = Octree::build(mesh, OctreeOptions::default());
        for leaf in collect_leaves(&tree) {
            for id in 0..tree.mesh().num_triangles() {
                let [v0, v1, v2] = tree.mesh().triangle(id);
                if triangle_aabb(v0, v1, v2, leaf.bounds()) {
                    assert!(
                        leaf.triangles().contains(&(id as u32)),
                        "triangle {id} intersects a leaf box but is missing from its list"
                    );
                }
            }
        }
    }
}

#[test]
fn test_build_is_deterministic() {
    let first = Octree::build(sphere_mesh(), OctreeOptions::default());
    let second = Octree::build(sphere_mesh(), OctreeOptions::default());
    assert_eq!(first, second);
}

#[test]
fn test_subdivision_threshold_scenarios() {
    // 61 spatially separated triangles force the root to split.
    let above = Octree::build(scattered_mesh(61), OctreeOptions::default());
    assert!(!above.root().is_leaf());

    // 59 triangles stay below the threshold: the root is a leaf.
    let below = Octree::build(scattered_mesh(59), OctreeOptions::default());
    assert!(below.root().is_leaf());
    assert_eq!(below.root().triangles().len(), 59);
}

#[test]
fn test_boundary_triangle_is_kept_on_both_sides_of_the_split() {
    // A vertex set symmetric under negation pins the scene center, and with
    // it the subdivision planes, exactly at the origin.
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Triangle 0 lies exactly in the x = 0 subdivision plane.
    vertices.extend_from_slice(&[
        Vec3::new(0.0, -0.5, -0.5),
        Vec3::new(0.0, 0.5, -0.5),
        Vec3::new(0.0, 0.0, 0.5),
    ]);
    indices.extend_from_slice(&[0, 1, 2]);

    // 32 mirrored pairs of filler triangles push the build over the leaf
    // threshold.
    for i in 0..32_usize {
        let p = Vec3::new(
            1.0 + (i % 4) as f32,
            1.0 + ((i / 4) % 4) as f32,
            1.0 + (i / 16) as f32,
        ) * 1.2;
        let corners = [p, p + Vec3::new(0.3, 0.0, 0.0), p + Vec3::new(0.0, 0.3, 0.0)];
        for sign in [1.0_f32, -1.0] {
            let base = vertices.len() as u32;
            vertices.extend(corners.iter().map(|&v| v * sign));
            indices.extend_from_slice(&[base, base + 1, base + 2]);
        }
    }

    let tree = Octree::build(
        TriangleMesh::new(vertices, indices).expect("valid mesh"),
        OctreeOptions::default(),
    );
    assert!(!tree.root().is_leaf());
    assert_eq!(tree.bounds().center, Vec3::ZERO);

    let mut leaves_left = 0;
    let mut leaves_right = 0;
    tree.root().for_each_leaf(&mut |leaf| {
        if leaf.triangles().contains(&0) {
            if leaf.bounds().center.x < 0.0 {
                leaves_left += 1;
            } else {
                leaves_right += 1;
            }
        }
    });
    assert!(
        leaves_left > 0 && leaves_right > 0,
        "plane-aligned triangle must be owned by octants on both sides (left {leaves_left}, right {leaves_right})"
    );
}
