use anyhow::Result;
use image::RgbaImage;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::Gpu;
use lumen_engine::transform::{CameraParams, TransformState};
use winit::dpi::PhysicalSize;

use super::cube::CubeScene;
use super::keys::apply_cube_key;
use super::{AppContext, escape_pressed};

const CAMERA: CameraParams = CameraParams::new([0.0, 0.0, 5.0], 0.1, 1000.0, 45.0);
const INITIAL_STATE: TransformState = TransformState::new([0.0, 0.0], [45.0, -45.0]);

/// Single textured cube. `a`/`d`/`s`/`w` move it, arrows rotate it.
pub struct TexturedCube {
    image: RgbaImage,
    ctx: AppContext<TransformState, CubeScene>,
}

impl TexturedCube {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            ctx: AppContext::new(INITIAL_STATE),
        }
    }
}

impl App for TexturedCube {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let scene = CubeScene::new(gpu, CAMERA, 1, &self.image)?;
        self.ctx.install(scene);
        Ok(())
    }

    fn on_resize(&mut self, gpu: &Gpu<'_>, size: PhysicalSize<u32>) {
        if let Some((_, scene)) = self.ctx.parts() {
            scene.resize(gpu, size);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if escape_pressed(ctx.input_frame) {
            return AppControl::Exit;
        }
        let Some((state, scene)) = self.ctx.parts() else {
            return AppControl::Continue;
        };

        for &key in &ctx.input_frame.key_downs {
            if apply_cube_key(state, key) {
                log::trace!("cube state {state:?}");
            }
        }

        scene.write_world(ctx.gpu.queue(), 0, &state.world_matrix());

        ctx.render(|_, frame| scene.draw(frame))
    }
}
