use std::sync::Arc;

pub use winit::dpi::{LogicalSize, PhysicalSize};
pub use winit::window::Window as WinitWindow;
use winit::{error::OsError, event_loop::ActiveEventLoop};

pub struct WindowDescriptor {
    pub title: String,
    pub resizeable: bool,
    pub size: Option<PhysicalSize<u32>>,
    pub visible: bool,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "Octafruit Window".to_string(),
            resizeable: true,
            size: None,
            visible: true,
        }
    }
}

pub struct Window {
    pub window: Arc<winit::window::Window>,
}

impl Window {
    pub fn id(&self) -> winit::window::WindowId {
        self.window.id()
    }

    /// Get the physical size of the window in pixels.
    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Get the scale factor for this window.
    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    pub(crate) fn new(
        event_loop: &ActiveEventLoop,
        descriptor: WindowDescriptor,
    ) -> Result<Self, OsError> {
        let mut attributes = WinitWindow::default_attributes()
            .with_title(descriptor.title)
            .with_resizable(descriptor.resizeable)
            .with_visible(descriptor.visible);

        if let Some(size) = descriptor.size {
            attributes = attributes.with_inner_size(size);
        }

        let window = Arc::new(event_loop.create_window(attributes)?);

        Ok(Window { window })
    }
}

pub trait WindowBackend {
    type FrameContext;

    fn begin_drawing(&mut self) -> Self::FrameContext;
}

pub trait WindowExt {
    /// Requests a redraw of the window.
    fn request_redraw(&self);
}

impl WindowExt for Window {
    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
