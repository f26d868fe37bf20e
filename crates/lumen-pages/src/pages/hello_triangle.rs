use anyhow::Result;
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::Gpu;
use lumen_engine::geometry::{TRIANGLE_VERTEX_DATA, TRIANGLE_VERTEX_STRIDE};
use lumen_engine::render::begin_pass;
use wgpu::util::DeviceExt;

use super::{AppContext, CLEAR_COLOR, escape_pressed};

const TRIANGLE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

struct Resources {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
}

/// Static triangle: hand-written interleaved vertices, no uniforms.
pub struct HelloTriangle {
    ctx: AppContext<(), Resources>,
}

impl HelloTriangle {
    pub fn new() -> Self {
        Self {
            ctx: AppContext::new(()),
        }
    }
}

impl App for HelloTriangle {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("triangle pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: TRIANGLE_VERTEX_STRIDE,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &TRIANGLE_ATTRIBUTES,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(gpu.surface_format().into())],
            }),
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("triangle vbo"),
            contents: bytemuck::cast_slice(&TRIANGLE_VERTEX_DATA),
            usage: wgpu::BufferUsages::VERTEX,
        });

        self.ctx.install(Resources {
            pipeline,
            vertex_buffer,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if escape_pressed(ctx.input_frame) {
            return AppControl::Exit;
        }
        let Some((_, res)) = self.ctx.parts() else {
            return AppControl::Continue;
        };

        ctx.render(|_, frame| {
            let mut rpass = begin_pass(&mut frame.encoder, &frame.view, CLEAR_COLOR, None);
            rpass.set_pipeline(&res.pipeline);
            rpass.set_vertex_buffer(0, res.vertex_buffer.slice(..));
            rpass.draw(0..3, 0..1);
        })
    }
}
