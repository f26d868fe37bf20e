use anyhow::Result;
use image::RgbaImage;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::Gpu;
use lumen_engine::transform::{CameraParams, TransformState, grid_offset, grid_row_length};
use winit::dpi::PhysicalSize;

use super::cube::CubeScene;
use super::keys::apply_cube_key;
use super::{AppContext, escape_pressed};

/// Cubes drawn besides the main one.
const MORE_CUBE_COUNT: u32 = 99;
/// Distance between neighbouring grid cells.
const GRID_STEP: f32 = 1.5;
/// Degrees added to both angles per elapsed millisecond.
const SPIN_RATE: f32 = 0.05;

const CAMERA: CameraParams = CameraParams::new([7.0, 7.0, 15.0], 0.1, 1000.0, 45.0);
const INITIAL_STATE: TransformState = TransformState::new([0.0, 0.0], [45.0, -225.0]);

/// Grid of spinning cubes sharing one state. Instance 0 is the main cube at
/// the state offset; the others follow row by row.
pub struct CubeGrid {
    image: RgbaImage,
    row_length: u32,
    ctx: AppContext<TransformState, CubeScene>,
}

impl CubeGrid {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            row_length: grid_row_length(MORE_CUBE_COUNT),
            ctx: AppContext::new(INITIAL_STATE),
        }
    }
}

/// Advances the auto-rotation by `dt_ms` milliseconds.
fn spin(state: &mut TransformState, dt_ms: f32) {
    let delta = SPIN_RATE * dt_ms;
    state.nudge_rotation(delta, delta);
}

impl App for CubeGrid {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let count = 1 + MORE_CUBE_COUNT as usize;
        let scene = CubeScene::new(gpu, CAMERA, count, &self.image)?;
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
        let row_length = self.row_length;
        let Some((state, scene)) = self.ctx.parts() else {
            return AppControl::Continue;
        };

        for &key in &ctx.input_frame.key_downs {
            apply_cube_key(state, key);
        }
        spin(state, ctx.time.dt_ms());

        let queue = ctx.gpu.queue();
        for i in 0..scene.instance_count() {
            let delta = grid_offset(i as u32, row_length, GRID_STEP);
            scene.write_world(queue, i, &state.world_matrix_at(delta));
        }

        ctx.render(|_, frame| scene.draw(frame))
    }
}
