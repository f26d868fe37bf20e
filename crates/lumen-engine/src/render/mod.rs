//! GPU resource helpers shared by the pages.
//!
//! Thin wrappers over wgpu for the handful of resources every 3D page
//! builds: a depth target, matrix and vector uniforms, and a sampled
//! texture. Pipelines stay in the pages.

mod depth;
mod pass;
mod texture;
mod uniform;

pub use depth::{DEPTH_FORMAT, DepthTarget};
pub use pass::begin_pass;
pub use texture::{SampledTexture, checkerboard, load_rgba};
pub use uniform::{
    VEC4_UNIFORM_SIZE, create_matrix_uniform, create_vec4_uniform, upload_matrix, upload_vec4,
};
