//! Same viewer as `fruits`, but with the quadratic profile, which keeps
//! the surface a revolution of a three point curve.

use octafruit_demos::{input::OrbitInput, panel::FruitPanel, renderer::FruitRenderer};
use octafruit_egui::Egui;
use octafruit_mesh::{CurveMode, FruitUniforms};
use octafruit_render::{
    DepthTexture, GraphicsContext, GraphicsContextDescriptor, OrbitCamera, RenderableWindow,
};
use octafruit_winit::{
    FrameTime, WindowId,
    app::{App, AppCtx, run_app},
    event::{Event, EventBatch, HandleStatus},
    window::{PhysicalSize, WindowBackend, WindowDescriptor, WindowExt},
};

struct OctasphereApp {
    window: RenderableWindow,
    depth: DepthTexture,
    camera: OrbitCamera,
    egui: Egui,
    renderer: FruitRenderer,
    panel: FruitPanel,
    input: OrbitInput,
    frame_time_ms: f32,
}

fn create_app(ctx: &mut AppCtx) -> Box<dyn App> {
    let window = ctx
        .create_window(WindowDescriptor {
            title: "Octasphere".to_string(),
            size: Some(PhysicalSize::new(1280, 720)),
            ..Default::default()
        })
        .expect("failed to create window");

    let context = GraphicsContext::new_sync(GraphicsContextDescriptor::default());
    let window = RenderableWindow::new(window, context.clone());

    let depth = DepthTexture::new(&context, window.window().physical_size());
    let camera = OrbitCamera::new(3.0, window.aspect_ratio());
    let egui = Egui::new(&window, &context);
    let renderer = FruitRenderer::new(&context, window.context().surface_config().format);

    Box::new(OctasphereApp {
        window,
        depth,
        camera,
        egui,
        renderer,
        panel: FruitPanel::new(CurveMode::Quadratic),
        input: OrbitInput::new(),
        frame_time_ms: 0.0,
    })
}

impl App for OctasphereApp {
    fn update(&mut self, _ctx: &mut AppCtx, time: &FrameTime) {
        self.frame_time_ms = time.delta_millis();
        self.window.window().request_redraw();
    }

    fn render(&mut self, _ctx: &mut AppCtx, window_id: WindowId, events: &mut EventBatch) {
        if window_id != self.window.window().id() {
            return;
        }

        events.dispatch(|event| match event {
            Event::WindowResized(size) => {
                self.window.resize(*size);
                self.depth
                    .resize(self.window.context().context(), *size);
                self.camera
                    .set_aspect_ratio(size.width as f32 / size.height.max(1) as f32);
                HandleStatus::handled()
            }
            _ => HandleStatus::ignored(),
        });

        self.egui.handle_events(&self.window, events);
        events.dispatch(|event| self.input.handle(event, &mut self.camera));

        self.egui
            .ui(&self.window, |ctx| self.panel.ui(ctx, self.frame_time_ms));

        let uniforms = FruitUniforms::new(
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
            &self.panel.params,
            self.panel.flat_shading,
        );

        let mut frame = self.window.begin_drawing();
        self.renderer.render(
            &mut frame,
            &self.depth,
            &uniforms,
            &self.panel.params,
            self.panel.background_color(),
        );
        self.egui.render(&self.window, &mut frame);
        frame.finish();
    }
}

fn main() {
    octafruit_core::logging::init();
    run_app(create_app);
}
