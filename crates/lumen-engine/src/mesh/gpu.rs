use wgpu::util::DeviceExt;

use super::PackedVertexBuffer;

/// GPU-resident copy of a [`PackedVertexBuffer`].
///
/// Uploaded once at setup; the buffers are never rewritten.
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    stride: u64,
    attributes: Vec<wgpu::VertexAttribute>,
}

impl MeshBuffers {
    pub fn upload(device: &wgpu::Device, packed: &PackedVertexBuffer, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: packed.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: packed.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh `{label}`: {} vertices, {} indices",
            packed.vertex_count(),
            packed.index_count()
        );

        Self {
            vertex_buffer,
            index_buffer,
            index_count: packed.index_count(),
            stride: packed.stride,
            attributes: packed.vertex_attributes(),
        }
    }

    /// Layout for `wgpu::VertexState::buffers`, one interleaved buffer.
    pub fn layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &self.attributes,
        }
    }

    /// Binds vertex slot 0 and the `u16` index buffer.
    pub fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
