//! Lumen engine crate.
//!
//! The reusable core of the tutorial pages: the mesh-to-vertex-buffer packer
//! (`mesh`), the transform/uniform updater (`transform`) and the geometry they
//! consume, plus the platform and GPU runtime the pages run on.

pub mod geometry;
pub mod mesh;
pub mod transform;

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
