//! Octree acceleration structure for ray queries against triangle meshes.
//!
//! [`Octree::build`] subdivides a mesh's bounding box recursively, assigning
//! each triangle to every octant it intersects, until octants own few enough
//! triangles (or the depth cap is reached). [`Octree::any_hit`] and
//! [`Octree::nearest_hit`] then answer ray queries by descending only into
//! children whose box the ray actually crosses.
//!
//! The tree is immutable after build; queries take `&self`, so a batch
//! workload (an ambient-occlusion bake, a pick per frame) can fan rays out
//! across threads freely.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod node;
pub mod octree;

pub use node::OctreeNode;
pub use octree::{Octree, OctreeOptions, RayHit};
