//! Pipeline and resources shared by the two cube pages.

use std::num::NonZeroU64;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use lumen_engine::device::{Gpu, GpuFrame};
use lumen_engine::geometry::box_geometry;
use lumen_engine::mesh::{MeshBuffers, locations, pack};
use lumen_engine::render::{
    DepthTarget, SampledTexture, begin_pass, checkerboard, create_matrix_uniform, load_rgba,
    upload_matrix,
};
use lumen_engine::transform::{CameraParams, MATRIX_UNIFORM_SIZE, MatrixData};
use winit::dpi::PhysicalSize;

use super::CLEAR_COLOR;

/// Shader locations of the packed box attributes.
pub const CUBE_ATTRIBUTES: [(&str, u32); 2] = [("position", 0), ("uv", 1)];

const CHECKERBOARD_SIZE: u32 = 256;
const CHECKERBOARD_CELLS: u32 = 8;

/// Loads the cube texture from `path`, or generates a checkerboard.
pub fn cube_image(path: Option<&Path>) -> Result<RgbaImage> {
    match path {
        Some(path) => load_rgba(path),
        None => {
            log::info!("no --texture given, using a generated checkerboard");
            Ok(checkerboard(CHECKERBOARD_SIZE, CHECKERBOARD_CELLS))
        }
    }
}

/// One drawn cube: its own world matrix and a bind group pointing at it.
struct CubeInstance {
    world_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Unit box drawn `instances` times with a shared camera and texture.
pub struct CubeScene {
    pipeline: wgpu::RenderPipeline,
    mesh: MeshBuffers,
    view_ubo: wgpu::Buffer,
    projection_ubo: wgpu::Buffer,
    depth: DepthTarget,
    camera: CameraParams,
    instances: Vec<CubeInstance>,
}

impl CubeScene {
    /// Builds the scene and uploads the view and projection matrices.
    pub fn new(
        gpu: &Gpu<'_>,
        camera: CameraParams,
        instance_count: usize,
        image: &RgbaImage,
    ) -> Result<Self> {
        let device = gpu.device();
        let queue = gpu.queue();

        let packed = pack(&box_geometry(1.0, 1.0, 1.0), &locations(&CUBE_ATTRIBUTES))
            .context("failed to pack cube geometry")?;
        let mesh = MeshBuffers::upload(device, &packed, "cube");

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cube shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/textured_cube.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cube bgl"),
            entries: &[
                matrix_entry(0),
                matrix_entry(1),
                matrix_entry(2),
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 4,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cube pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube pipeline"),
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
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(DepthTarget::state()),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let texture = SampledTexture::from_rgba(device, queue, image, "cube texture");

        let view_ubo = create_matrix_uniform(device, "camera view ubo");
        let projection_ubo = create_matrix_uniform(device, "projection ubo");

        let instances = (0..instance_count)
            .map(|i| {
                let world_ubo = create_matrix_uniform(device, &format!("cube {i} world ubo"));
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("cube {i} bind group")),
                    layout: &bind_group_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: world_ubo.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: view_ubo.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: projection_ubo.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 3,
                            resource: wgpu::BindingResource::Sampler(&texture.sampler),
                        },
                        wgpu::BindGroupEntry {
                            binding: 4,
                            resource: wgpu::BindingResource::TextureView(&texture.view),
                        },
                    ],
                });
                CubeInstance {
                    world_ubo,
                    bind_group,
                }
            })
            .collect();

        let depth = DepthTarget::new(device, gpu.size());

        let scene = Self {
            pipeline,
            mesh,
            view_ubo,
            projection_ubo,
            depth,
            camera,
            instances,
        };

        // The camera never moves; the view matrix is written once.
        upload_matrix(queue, &scene.view_ubo, &scene.camera.view_matrix());
        scene.write_projection(gpu);

        log::info!("cube scene ready with {instance_count} instance(s)");
        Ok(scene)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Matches the depth target and projection to a new surface size.
    pub fn resize(&mut self, gpu: &Gpu<'_>, size: PhysicalSize<u32>) {
        self.depth.resize(gpu.device(), size);
        self.write_projection(gpu);
    }

    /// Uploads the world matrix of instance `i`.
    pub fn write_world(&self, queue: &wgpu::Queue, i: usize, world: &MatrixData) {
        if let Some(instance) = self.instances.get(i) {
            upload_matrix(queue, &instance.world_ubo, world);
        }
    }

    /// Records one pass drawing every instance.
    pub fn draw(&self, frame: &mut GpuFrame) {
        let mut rpass = begin_pass(
            &mut frame.encoder,
            &frame.view,
            CLEAR_COLOR,
            Some(&self.depth),
        );

        rpass.set_pipeline(&self.pipeline);
        self.mesh.bind(&mut rpass);

        for instance in &self.instances {
            rpass.set_bind_group(0, &instance.bind_group, &[]);
            self.mesh.draw(&mut rpass);
        }
    }

    fn write_projection(&self, gpu: &Gpu<'_>) {
        let aspect = gpu.aspect();
        log::debug!("projection updated for aspect {aspect:.3}");
        upload_matrix(
            gpu.queue(),
            &self.projection_ubo,
            &self.camera.projection_matrix(aspect),
        );
    }
}

fn matrix_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: NonZeroU64::new(MATRIX_UNIFORM_SIZE),
        },
        count: None,
    }
}
