//! Geometry primitives for meshray-rs.
//!
//! This crate provides the math building blocks the octree accelerator is
//! assembled from:
//! - [`Aabb`] axis-aligned boxes with octant subdivision and a slab ray test
//! - [`Ray`] plus the [`ray_triangle`] and [`triangle_aabb`] intersection
//!   kernels
//! - [`TriangleMesh`], the validated indexed-triangle container queries run
//!   against

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod aabb;
pub mod error;
pub mod intersect;
pub mod mesh;
pub mod octant;
pub mod ray;

pub use aabb::Aabb;
pub use error::{MeshrayError, Result};
pub use intersect::{ray_triangle, triangle_aabb};
pub use mesh::TriangleMesh;
pub use octant::Octant;
pub use ray::Ray;

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3};
