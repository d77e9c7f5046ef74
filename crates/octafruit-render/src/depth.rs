use std::sync::Arc;

use octafruit_winit::window::PhysicalSize;

use crate::context::GraphicsContext;

pub const DEFAULT_DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A depth attachment sized to match a window surface.
pub struct DepthTexture {
    texture: wgpu::Texture,
    view: Arc<wgpu::TextureView>,
    size: PhysicalSize<u32>,
    format: wgpu::TextureFormat,
}

impl DepthTexture {
    pub fn new(context: &GraphicsContext, size: PhysicalSize<u32>) -> Self {
        Self::new_with_format(context, size, DEFAULT_DEPTH_FORMAT)
    }

    pub fn new_with_format(
        context: &GraphicsContext,
        size: PhysicalSize<u32>,
        format: wgpu::TextureFormat,
    ) -> Self {
        let texture = context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = Arc::new(texture.create_view(&wgpu::TextureViewDescriptor::default()));

        Self {
            texture,
            view,
            size,
            format,
        }
    }

    /// Recreates the texture if the size changed.
    pub fn resize(&mut self, context: &GraphicsContext, size: PhysicalSize<u32>) {
        if self.needs_resize(size) {
            *self = Self::new_with_format(context, size, self.format);
        }
    }

    pub fn needs_resize(&self, size: PhysicalSize<u32>) -> bool {
        self.size != size
    }

    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    pub fn view(&self) -> Arc<wgpu::TextureView> {
        self.view.clone()
    }

    pub fn view_ref(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }
}
