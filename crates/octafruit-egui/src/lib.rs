//! Immediate mode GUI rendering using egui on top of the octafruit-render
//! wrapper.

mod state;

use octafruit_render::{FrameContext, GraphicsContext, RenderableWindow};
use octafruit_winit::event::{EventBatch, HandleStatus};
use state::State;

// Re-export egui types the demos use directly
pub use egui::{
    self, Align, Checkbox, Color32, Context as EguiContext, DragValue, Response, RichText, Slider,
    TextEdit, Ui, Widget,
};
pub use state::EventResponse;

pub struct Egui {
    context: egui::Context,
    renderer: egui_wgpu::Renderer,
    state: State,
    full_output: Option<egui::FullOutput>,
}

impl Egui {
    pub fn new(window: &RenderableWindow, graphics_ctx: &GraphicsContext) -> Self {
        let context = egui::Context::default();
        let id = context.viewport_id();

        context.set_visuals(egui::Visuals::dark());

        let state = State::new(context.clone(), id);

        let renderer = egui_wgpu::Renderer::new(
            graphics_ctx.device(),
            window.context().surface_config().format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                ..Default::default()
            },
        );

        Self {
            context,
            renderer,
            state,
            full_output: None,
        }
    }

    /// Begin UI frame and run the GUI closure.
    pub fn ui(&mut self, window: &RenderableWindow, gui: impl FnMut(&egui::Context)) {
        let raw_input = self.state.take_input(window);
        self.full_output.replace(self.context.run(raw_input, gui));
    }

    /// Render egui to the current frame.
    pub fn render(&mut self, window: &RenderableWindow, frame: &mut FrameContext) {
        let Some(full_output) = self.full_output.take() else {
            return;
        };

        let graphics_ctx = frame.context().clone();
        let device = graphics_ctx.device();
        let queue = graphics_ctx.queue();

        let tris = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let config = window.context().surface_config();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [config.width, config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.renderer
            .update_buffers(device, queue, frame.encoder(), &tris, &screen_descriptor);

        {
            let (encoder, surface) = frame.encoder_and_surface();
            let mut rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: surface.view(),
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    label: Some("Egui Render Pass"),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.renderer.render(&mut rpass, &tris, &screen_descriptor);
        }

        frame.increment_passes();

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    /// Feed the event batch to egui, removing every event it consumes.
    ///
    /// Returns true if egui consumed any event this frame.
    pub fn handle_events(&mut self, window: &RenderableWindow, events: &mut EventBatch) -> bool {
        let mut any_consumed = false;

        events.dispatch(|event| {
            let response = self.state.on_event(window, event);
            if response.consumed {
                any_consumed = true;
            }

            let mut status = HandleStatus::empty();
            if response.repaint || response.consumed {
                status |= HandleStatus::HANDLED;
            }
            if response.consumed {
                status |= HandleStatus::CONSUMED;
            }
            status
        });

        any_consumed
    }

    /// Get the egui context for direct access.
    pub fn context(&self) -> &egui::Context {
        &self.context
    }
}
