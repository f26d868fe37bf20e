use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lumen_engine::logging::LoggingConfig;
use lumen_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// WebGPU tutorial pages rendered with wgpu.
#[derive(Debug, Parser)]
#[command(name = "lumen-pages", version, about)]
pub struct Cli {
    /// Page to open.
    #[arg(value_enum)]
    pub page: Page,

    /// Image used as the cube texture; a checkerboard is generated when absent.
    #[arg(long, value_name = "PATH")]
    pub texture: Option<PathBuf>,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Page {
    /// Static colored triangle.
    HelloTriangle,
    /// Triangle moved by the arrow keys through a uniform.
    UniformOffset,
    /// One textured cube under a perspective camera.
    TexturedCube,
    /// A hundred animated textured cubes laid out in a grid.
    CubeGrid,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::HelloTriangle => "Hello WebGPU",
            Page::UniformOffset => "Uniform re-render",
            Page::TexturedCube => "3D cube with texture",
            Page::CubeGrid => "Animated multiple 3D objects",
        }
    }
}

impl Cli {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_verbosity(self.verbose)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.page.title().to_string(),
            initial_size: LogicalSize::new(f64::from(self.width), f64::from(self.height)),
        }
    }
}
