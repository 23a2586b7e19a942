//! Octree construction and ray queries.

use glam::Vec3;
use meshray_core::{ray_triangle, triangle_aabb, Aabb, Ray, Result, TriangleMesh};
use serde::{Deserialize, Serialize};

use crate::node::{NodeKind, OctreeNode};

/// Build-time tuning for [`Octree::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OctreeOptions {
    /// Nodes owning fewer triangles than this become leaves.
    ///
    /// Lower values deepen the tree, trading build time for cheaper
    /// per-query triangle scans; higher values flatten it.
    pub leaf_threshold: usize,

    /// Depth at which subdivision stops unconditionally.
    ///
    /// Without a cap, geometry that defeats spatial separation (many
    /// triangles coincident at one point) would subdivide forever, since
    /// every child inherits the full triangle list. At the cap a node
    /// becomes a leaf no matter how many triangles it owns.
    pub max_depth: u32,
}

impl Default for OctreeOptions {
    fn default() -> Self {
        Self {
            leaf_threshold: 60,
            max_depth: 16,
        }
    }
}

/// A triangle hit reported by [`Octree::nearest_hit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parametric distance along the ray (a multiple of its direction
    /// length).
    pub t: f32,
    /// Id of the hit triangle in the mesh the tree was built over.
    pub triangle: u32,
}

/// An octree over a triangle mesh, answering ray-intersection queries.
///
/// The tree caches its own copy of the mesh, so it is self-contained and
/// `Send + Sync`: once built, any number of threads may query it
/// concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Octree {
    mesh: TriangleMesh,
    root: OctreeNode,
    options: OctreeOptions,
}

impl Octree {
    /// Builds an octree over `mesh`.
    ///
    /// The scene box covers every vertex; each recursion level splits a box
    /// into eight octants and hands every child the subset of its parent's
    /// triangles that intersect the child's box. Subdivision stops when a
    /// node owns fewer than [`OctreeOptions::leaf_threshold`] triangles or
    /// sits at [`OctreeOptions::max_depth`].
    ///
    /// An empty mesh yields a zero-extent leaf root that reports no
    /// intersections.
    pub fn build(mesh: TriangleMesh, options: OctreeOptions) -> Self {
        if mesh.num_triangles() == 0 {
            log::warn!("building an octree over an empty mesh");
        }

        let bounds = mesh.bounds();
        #[allow(clippy::cast_possible_truncation)]
        let all_triangles: Vec<u32> = (0..mesh.num_triangles() as u32).collect();
        let root = build_node(&mesh, bounds, all_triangles, 0, &options);

        let tree = Self {
            mesh,
            root,
            options,
        };
        log::debug!(
            "octree built: {} triangles, {} leaves, depth {}",
            tree.mesh.num_triangles(),
            tree.root.leaf_count(),
            tree.root.depth()
        );
        tree
    }

    /// Validates flat vertex/index buffers and builds an octree over them.
    pub fn try_build(
        vertices: Vec<Vec3>,
        indices: Vec<u32>,
        options: OctreeOptions,
    ) -> Result<Self> {
        Ok(Self::build(TriangleMesh::new(vertices, indices)?, options))
    }

    /// Whether `ray` hits any triangle of the mesh.
    ///
    /// Descends only into children whose box the ray crosses and returns on
    /// the first triangle hit, so it does not identify the nearest one. Use
    /// [`Octree::nearest_hit`] when the closest triangle matters.
    pub fn any_hit(&self, ray: &Ray) -> bool {
        any_hit_node(&self.mesh, &self.root, ray)
    }

    /// The closest triangle hit along `ray`, if any.
    ///
    /// Unlike [`Octree::any_hit`] this visits every child whose box the ray
    /// crosses and keeps the minimum `t`. Ties between coincident triangles
    /// go to the lower triangle id, so repeated queries are deterministic.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<RayHit> {
        let mut best = None;
        nearest_hit_node(&self.mesh, &self.root, ray, &mut best);
        best
    }

    /// The scene bounding box (the root node's bounds).
    pub fn bounds(&self) -> &Aabb {
        self.root.bounds()
    }

    /// The root node, for walking the tree.
    pub fn root(&self) -> &OctreeNode {
        &self.root
    }

    /// The mesh this tree was built over.
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// The options this tree was built with.
    pub fn options(&self) -> &OctreeOptions {
        &self.options
    }
}

fn build_node(
    mesh: &TriangleMesh,
    bounds: Aabb,
    triangles: Vec<u32>,
    depth: u32,
    options: &OctreeOptions,
) -> OctreeNode {
    if triangles.len() < options.leaf_threshold || depth >= options.max_depth {
        return OctreeNode {
            bounds,
            kind: NodeKind::Leaf { triangles },
        };
    }

    let children = bounds.subdivide().map(|child_bounds| {
        // Re-test every parent triangle against this octant; a triangle
        // straddling the split planes lands in several children.
        let kept: Vec<u32> = triangles
            .iter()
            .copied()
            .filter(|&id| {
                let [v0, v1, v2] = mesh.triangle(id as usize);
                triangle_aabb(v0, v1, v2, &child_bounds)
            })
            .collect();
        build_node(mesh, child_bounds, kept, depth + 1, options)
    });

    OctreeNode {
        bounds,
        kind: NodeKind::Internal {
            children: Box::new(children),
        },
    }
}

fn any_hit_node(mesh: &TriangleMesh, node: &OctreeNode, ray: &Ray) -> bool {
    match &node.kind {
        NodeKind::Leaf { triangles } => triangles.iter().any(|&id| {
            let [v0, v1, v2] = mesh.triangle(id as usize);
            ray_triangle(ray, v0, v1, v2).is_some()
        }),
        NodeKind::Internal { children } => children.iter().any(|child| {
            child.bounds.intersect_ray(ray).is_some() && any_hit_node(mesh, child, ray)
        }),
    }
}

fn nearest_hit_node(mesh: &TriangleMesh, node: &OctreeNode, ray: &Ray, best: &mut Option<RayHit>) {
    match &node.kind {
        NodeKind::Leaf { triangles } => {
            for &id in triangles {
                let [v0, v1, v2] = mesh.triangle(id as usize);
                if let Some(t) = ray_triangle(ray, v0, v1, v2) {
                    let better = best.map_or(true, |b| {
                        t < b.t || (t == b.t && id < b.triangle)
                    });
                    if better {
                        *best = Some(RayHit { t, triangle: id });
                    }
                }
            }
        }
        NodeKind::Internal { children } => {
            for child in children.iter() {
                let Some(entry) = child.bounds.intersect_ray(ray) else {
                    continue;
                };
                // A hit inside the child cannot be closer than the box entry
                // distance, so a child entered beyond the current best has
                // nothing to offer.
                if best.map_or(true, |b| entry <= b.t) {
                    nearest_hit_node(mesh, child, ray, best);
                }
            }
        }
    }
}
