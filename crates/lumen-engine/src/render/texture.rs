use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

const LIGHT: Rgba<u8> = Rgba([235, 235, 235, 255]);
const DARK: Rgba<u8> = Rgba([40, 90, 160, 255]);

/// Square checkerboard of `size` pixels with `cells` squares per side.
///
/// Used as the cube texture when no image is supplied.
pub fn checkerboard(size: u32, cells: u32) -> RgbaImage {
    let cell = (size / cells.max(1)).max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            LIGHT
        } else {
            DARK
        }
    })
}

/// Decodes an image file into RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to load texture {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// 2D `rgba8unorm` texture with its view and a linear sampler.
pub struct SampledTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl SampledTexture {
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        label: &str,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        log::debug!("uploaded texture `{label}` {width}x{height}");

        Self {
            texture,
            view,
            sampler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_alternates_cells() {
        let img = checkerboard(64, 8);
        assert_eq!(img.dimensions(), (64, 64));
        assert_eq!(*img.get_pixel(0, 0), LIGHT);
        assert_eq!(*img.get_pixel(8, 0), DARK);
        assert_eq!(*img.get_pixel(8, 8), LIGHT);
        assert_eq!(*img.get_pixel(63, 0), DARK);
    }

    #[test]
    fn checkerboard_tolerates_zero_cells() {
        let img = checkerboard(4, 0);
        assert_eq!(img.dimensions(), (4, 4));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_rgba(Path::new("/nonexistent/cube.png")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/cube.png"));
    }
}
