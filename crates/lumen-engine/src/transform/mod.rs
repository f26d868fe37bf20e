//! World, view and projection matrices for `mat4x4<f32>` uniforms.
//!
//! All functions are pure. Composition runs in `f64` and the result is
//! narrowed to 16 column-major `f32`s only when serialized, so output
//! matches a double-precision reference. Inputs are not validated;
//! degenerate parameters yield non-finite entries.

mod camera;
mod grid;
mod matrix;

pub use camera::{CameraParams, TransformState};
pub use grid::{grid_offset, grid_row_length};
pub use matrix::{
    IDENTITY, MATRIX_UNIFORM_SIZE, MatrixData, deg_to_rad, projection_matrix, view_matrix,
    world_matrix,
};
