//! The tutorial pages.
//!
//! Each page is an [`App`](lumen_engine::core::App) that owns one
//! [`AppContext`] and builds its own pipeline and buffers from scratch.

mod context;
mod cube;
mod cube_grid;
mod hello_triangle;
mod keys;
mod textured_cube;
mod uniform_offset;

use anyhow::Result;
use lumen_engine::device::GpuInit;
use lumen_engine::input::{InputFrame, Key};
use lumen_engine::window::Runtime;

use crate::cli::{Cli, Page};

pub use context::AppContext;

/// Background of every page.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::WHITE;

/// Opens the window for the page selected on the command line and runs it
/// until the window closes.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.runtime_config();
    let gpu_init = GpuInit::default();

    match cli.page {
        Page::HelloTriangle => {
            Runtime::run(config, gpu_init, hello_triangle::HelloTriangle::new())
        }
        Page::UniformOffset => {
            Runtime::run(config, gpu_init, uniform_offset::UniformOffset::new())
        }
        Page::TexturedCube => {
            let image = cube::cube_image(cli.texture.as_deref())?;
            Runtime::run(config, gpu_init, textured_cube::TexturedCube::new(image))
        }
        Page::CubeGrid => {
            let image = cube::cube_image(cli.texture.as_deref())?;
            Runtime::run(config, gpu_init, cube_grid::CubeGrid::new(image))
        }
    }
}

fn escape_pressed(frame: &InputFrame) -> bool {
    frame.keys_pressed.contains(&Key::Escape)
}
