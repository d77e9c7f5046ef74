use std::ops::Deref;
use std::sync::Arc;

use octafruit_winit::window::{PhysicalSize, Window, WindowBackend};

use crate::context::GraphicsContext;
use crate::frame::{FrameContext, FrameStats, Surface};

struct PendingReconfigure {
    resize: Option<PhysicalSize<u32>>,
}

impl PendingReconfigure {
    const fn new() -> Self {
        Self { resize: None }
    }
}

/// Descriptor for configuring a window's rendering context.
pub struct WindowContextDescriptor {
    /// The surface texture format. If None, uses the default format for the surface.
    pub format: Option<wgpu::TextureFormat>,
}

impl Default for WindowContextDescriptor {
    fn default() -> Self {
        Self { format: None }
    }
}

pub struct WindowContext {
    pub(crate) context: Arc<GraphicsContext>,
    pub(crate) surface: wgpu::Surface<'static>,
    pub(crate) config: wgpu::SurfaceConfiguration,
    pub(crate) reconfigure: PendingReconfigure,
}

impl WindowContext {
    pub fn new(
        context: Arc<GraphicsContext>,
        window: &Window,
        descriptor: WindowContextDescriptor,
    ) -> Self {
        let window = window.window.clone();
        let PhysicalSize { width, height } = window.inner_size();
        let surface = context
            .instance()
            .create_surface(window)
            .expect("Failed to create surface");

        let mut config = surface
            .get_default_config(context.adapter(), width, height)
            .expect("Failed to get default surface configuration");

        if let Some(format) = descriptor.format {
            config.format = format;
        }

        surface.configure(context.device(), &config);

        Self {
            surface,
            config,
            reconfigure: PendingReconfigure::new(),
            context,
        }
    }

    pub fn context(&self) -> &Arc<GraphicsContext> {
        &self.context
    }

    pub fn surface(&self) -> &wgpu::Surface<'static> {
        &self.surface
    }

    pub fn surface_config(&self) -> &wgpu::SurfaceConfiguration {
        &self.config
    }
}

pub struct RenderableWindow {
    pub(crate) window: Window,
    pub(crate) context: WindowContext,
}

impl RenderableWindow {
    pub fn new(window: Window, context: Arc<GraphicsContext>) -> Self {
        Self::new_with_descriptor(window, context, WindowContextDescriptor::default())
    }

    pub fn new_with_descriptor(
        window: Window,
        context: Arc<GraphicsContext>,
        descriptor: WindowContextDescriptor,
    ) -> Self {
        let context = WindowContext::new(context, &window, descriptor);
        Self { window, context }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn context(&self) -> &WindowContext {
        &self.context
    }

    /// Queue a surface reconfigure for the next frame.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.context.reconfigure.resize = Some(size);
        }
    }

    /// Current surface aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        let config = &self.context.config;
        config.width as f32 / config.height.max(1) as f32
    }
}

impl Deref for RenderableWindow {
    type Target = Window;

    fn deref(&self) -> &Self::Target {
        &self.window
    }
}

impl WindowBackend for RenderableWindow {
    type FrameContext = FrameContext;

    fn begin_drawing(&mut self) -> Self::FrameContext {
        if let Some(new_size) = self.context.reconfigure.resize.take() {
            self.context.config.width = new_size.width;
            self.context.config.height = new_size.height;
            self.context
                .surface
                .configure(self.context.context.device(), &self.context.config);
        }

        let frame = self
            .context
            .surface
            .get_current_texture()
            .expect("Failed to acquire surface texture");
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder =
            self.context
                .context
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });

        FrameContext {
            surface: Some(Surface {
                texture: frame,
                view,
            }),
            encoder: Some(encoder),
            context: self.context.context.clone(),
            stats: FrameStats::new(),
        }
    }
}
