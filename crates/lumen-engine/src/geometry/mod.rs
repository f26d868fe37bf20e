//! CPU-side geometry sources.
//!
//! A geometry is a set of named float attributes plus an optional `u16`
//! triangle-list index. The mesh packer consumes these to build interleaved
//! vertex buffers.

mod box_geometry;
mod source;
mod triangle;

pub use box_geometry::box_geometry;
pub use source::{GeometryAttribute, GeometrySource};
pub use triangle::{TRIANGLE_VERTEX_DATA, TRIANGLE_VERTEX_STRIDE, colored_triangle};
