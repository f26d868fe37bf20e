//! Mesh packing.
//!
//! Turns a [`GeometrySource`](crate::geometry::GeometrySource) into one
//! interleaved `f32` vertex buffer plus its `u16` index list, and uploads the
//! result to the GPU.
//!
//! Attribute order inside each vertex record is ascending binding slot.

mod error;
mod gpu;
mod packer;

pub use error::PackError;
pub use gpu::MeshBuffers;
pub use packer::{
    AttributeLayout, AttributeLocations, FLOAT_SIZE, INDEX_SIZE, PackedVertexBuffer, locations, pack,
};
