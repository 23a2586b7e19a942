//! Error types for meshray-rs.

use thiserror::Error;

/// The main error type for meshray-rs operations.
#[derive(Error, Debug)]
pub enum MeshrayError {
    /// A triangle index refers past the end of the vertex array.
    #[error("index {index} out of bounds for {num_vertices} vertices")]
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },

    /// The index buffer length is not a multiple of three.
    #[error("index count {0} does not form whole triangles")]
    IndexCountNotTriangular(usize),

    /// A flat position buffer length is not a multiple of three.
    #[error("flat position buffer of length {0} does not form whole points")]
    PositionCountNotTriple(usize),
}

/// A specialized Result type for meshray-rs operations.
pub type Result<T> = std::result::Result<T, MeshrayError>;
