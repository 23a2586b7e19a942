//! Indexed triangle meshes.

use glam::Vec3;

use crate::aabb::Aabb;
use crate::error::{MeshrayError, Result};

/// An indexed triangle mesh: flat vertex positions plus an index buffer in
/// which every three consecutive entries form one triangle.
///
/// Indices are validated on construction, so every later access can assume
/// they are in range. The mesh is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    indices: Vec<u32>,
}

impl TriangleMesh {
    /// Creates a mesh from vertex positions and a triangle index buffer.
    ///
    /// Fails if the index count is not a multiple of three or any index
    /// refers past the end of the vertex array. An empty mesh is valid.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(MeshrayError::IndexCountNotTriangular(indices.len()));
        }
        for &index in &indices {
            if index as usize >= vertices.len() {
                return Err(MeshrayError::IndexOutOfBounds {
                    index,
                    num_vertices: vertices.len(),
                });
            }
        }
        Ok(Self { vertices, indices })
    }

    /// Creates a mesh from flat buffers as produced by external mesh loaders:
    /// positions as `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn from_flat(positions: &[f32], indices: &[u32]) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshrayError::PositionCountNotTriple(positions.len()));
        }
        let vertices: &[Vec3] = bytemuck::cast_slice(positions);
        Self::new(vertices.to_vec(), indices.to_vec())
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// All vertex positions.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The full index buffer.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The three vertex indices of triangle `id`.
    pub fn triangle_indices(&self, id: usize) -> [u32; 3] {
        [
            self.indices[id * 3],
            self.indices[id * 3 + 1],
            self.indices[id * 3 + 2],
        ]
    }

    /// The three corner positions of triangle `id`.
    pub fn triangle(&self, id: usize) -> [Vec3; 3] {
        let [i0, i1, i2] = self.triangle_indices(id);
        [
            self.vertices[i0 as usize],
            self.vertices[i1 as usize],
            self.vertices[i2 as usize],
        ]
    }

    /// The minimal axis-aligned box covering all vertices.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Area-weighted per-vertex normals.
    ///
    /// Face normals (unnormalized cross products, so larger faces weigh
    /// more) are accumulated onto each corner vertex and normalized at the
    /// end. Vertices referenced by no triangle, or only by degenerate ones,
    /// keep a zero normal.
    pub fn vertex_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for id in 0..self.num_triangles() {
            let [i0, i1, i2] = self.triangle_indices(id);
            let [a, b, c] = self.triangle(id);
            let n = (b - a).cross(c - a);
            normals[i0 as usize] += n;
            normals[i1 as usize] += n;
            normals[i2 as usize] += n;
        }
        for normal in &mut normals {
            let len = normal.length();
            if len > 1e-10 {
                *normal /= len;
            }
        }
        normals
    }
}
