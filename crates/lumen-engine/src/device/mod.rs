//! GPU device + surface management.
//!
//! This module is responsible for:
//! - acquiring the adapter (the one failure surfaced to pages) and device
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and presenting them after submission

mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
