use super::DepthTarget;

/// Begins a render pass that clears `view` to `clear` and, when given, the
/// depth target to 1.0.
pub fn begin_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    clear: wgpu::Color,
    depth: Option<&DepthTarget>,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("lumen pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: depth.map(DepthTarget::attachment),
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}
