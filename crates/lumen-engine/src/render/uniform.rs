use crate::transform::{MATRIX_UNIFORM_SIZE, MatrixData};

/// Byte size of a `vec4<f32>` uniform.
pub const VEC4_UNIFORM_SIZE: u64 = 16;

fn create_uniform(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Uninitialized `mat4x4<f32>` uniform buffer.
pub fn create_matrix_uniform(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    create_uniform(device, label, MATRIX_UNIFORM_SIZE)
}

/// Uninitialized `vec4<f32>` uniform buffer.
pub fn create_vec4_uniform(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    create_uniform(device, label, VEC4_UNIFORM_SIZE)
}

/// Writes all 64 bytes of `matrix` at offset 0.
pub fn upload_matrix(queue: &wgpu::Queue, buffer: &wgpu::Buffer, matrix: &MatrixData) {
    queue.write_buffer(buffer, 0, bytemuck::cast_slice(matrix));
}

pub fn upload_vec4(queue: &wgpu::Queue, buffer: &wgpu::Buffer, value: [f32; 4]) {
    queue.write_buffer(buffer, 0, bytemuck::cast_slice(&value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_wgsl_types() {
        assert_eq!(
            MATRIX_UNIFORM_SIZE as usize,
            std::mem::size_of::<MatrixData>()
        );
        assert_eq!(VEC4_UNIFORM_SIZE as usize, std::mem::size_of::<[f32; 4]>());
    }

    #[test]
    fn matrix_bytes_are_column_major_floats() {
        let m = crate::transform::IDENTITY;
        let bytes: &[u8] = bytemuck::cast_slice(&m);
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[20..24], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0.0f32.to_ne_bytes());
    }
}
