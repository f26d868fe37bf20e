use anyhow::{Context, Result};
use lumen_engine::core::{App, AppControl, FrameCtx};
use lumen_engine::device::Gpu;
use lumen_engine::geometry::colored_triangle;
use lumen_engine::mesh::{MeshBuffers, locations, pack};
use lumen_engine::render::{VEC4_UNIFORM_SIZE, begin_pass, create_vec4_uniform, upload_vec4};

use super::keys::arrow_offset;
use super::{AppContext, CLEAR_COLOR, escape_pressed};

struct Resources {
    pipeline: wgpu::RenderPipeline,
    mesh: MeshBuffers,
    offset_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Triangle shifted by a `vec4f` offset uniform; arrow keys move it.
pub struct UniformOffset {
    ctx: AppContext<[f32; 2], Resources>,
}

impl UniformOffset {
    pub fn new() -> Self {
        Self {
            ctx: AppContext::new([0.0, 0.0]),
        }
    }
}

impl App for UniformOffset {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();

        let packed = pack(&colored_triangle(), &locations(&[("position", 0), ("color", 1)]))
            .context("failed to pack triangle")?;
        let mesh = MeshBuffers::upload(device, &packed, "offset triangle");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("offset triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/offset_triangle.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("offset bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: std::num::NonZeroU64::new(VEC4_UNIFORM_SIZE),
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("offset pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("offset pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[mesh.layout()],
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

        let offset_ubo = create_vec4_uniform(device, "offset ubo");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("offset bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: offset_ubo.as_entire_binding(),
            }],
        });

        self.ctx.install(Resources {
            pipeline,
            mesh,
            offset_ubo,
            bind_group,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if escape_pressed(ctx.input_frame) {
            return AppControl::Exit;
        }
        let Some((offset, res)) = self.ctx.parts() else {
            return AppControl::Continue;
        };

        for delta in ctx.input_frame.key_downs.iter().filter_map(|&k| arrow_offset(k)) {
            offset[0] += delta[0];
            offset[1] += delta[1];
            log::debug!("offset now ({:.1}, {:.1})", offset[0], offset[1]);
        }

        upload_vec4(ctx.gpu.queue(), &res.offset_ubo, [offset[0], offset[1], 0.0, 0.0]);

        ctx.render(|_, frame| {
            let mut rpass = begin_pass(&mut frame.encoder, &frame.view, CLEAR_COLOR, None);
            rpass.set_pipeline(&res.pipeline);
            rpass.set_bind_group(0, &res.bind_group, &[]);
            res.mesh.bind(&mut rpass);
            res.mesh.draw(&mut rpass);
        })
    }
}
