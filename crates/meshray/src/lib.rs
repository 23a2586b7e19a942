//! Octree-accelerated ray casting for triangle meshes.
//!
//! meshray-rs builds an octree over an indexed triangle mesh and answers ray
//! intersection queries against it:
//! - [`Octree::any_hit`] — does a ray hit the mesh at all?
//! - [`Octree::nearest_hit`] — which triangle does it hit first?
//! - [`pick`] — cursor picking: screen position → mesh-local ray → triangle
//! - [`bake_vertex_occlusion`] — per-vertex ambient occlusion, thousands of
//!   hemisphere rays against the same immutable tree, in parallel
//!
//! Mesh loading is the caller's concern: the library consumes flat vertex
//! and index buffers an external loader has already produced.

pub mod ambient_occlusion;
pub mod pick;

pub use ambient_occlusion::{bake_vertex_occlusion, AmbientOcclusionOptions};
pub use meshray_core::{
    ray_triangle, triangle_aabb, Aabb, MeshrayError, Octant, Ray, Result, TriangleMesh,
};
pub use meshray_octree::{Octree, OctreeNode, OctreeOptions, RayHit};
pub use pick::{pick, pick_brute_force, pick_ray, PickResult};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3};
