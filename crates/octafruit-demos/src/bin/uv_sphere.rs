//! Wireframe grid of UV spheres. Needs line polygon mode, so the device
//! request fails up front on hardware without it.

use octafruit_demos::{
    input::OrbitInput,
    panel::SpherePanel,
    sphere::{SPHERE_GRID_SIZE, SphereRenderer},
};
use octafruit_egui::Egui;
use octafruit_mesh::SphereUniforms;
use octafruit_render::{
    GpuFeatures, GraphicsContext, GraphicsContextDescriptor, OrbitCamera, RenderableWindow,
};
use octafruit_winit::{
    FrameTime, WindowId,
    app::{App, AppCtx, run_app},
    event::{Event, EventBatch, HandleStatus},
    window::{PhysicalSize, WindowBackend, WindowDescriptor, WindowExt},
};

struct UvSphereApp {
    window: RenderableWindow,
    camera: OrbitCamera,
    egui: Egui,
    renderer: SphereRenderer,
    panel: SpherePanel,
    input: OrbitInput,
    frame_time_ms: f32,
}

fn create_app(ctx: &mut AppCtx) -> Box<dyn App> {
    let window = ctx
        .create_window(WindowDescriptor {
            title: "UV Sphere".to_string(),
            size: Some(PhysicalSize::new(1280, 720)),
            ..Default::default()
        })
        .expect("failed to create window");

    let context = GraphicsContext::new_sync(GraphicsContextDescriptor {
        required_features: GpuFeatures::POLYGON_MODE_LINE,
        ..Default::default()
    });
    let window = RenderableWindow::new(window, context.clone());

    let camera = OrbitCamera::new(4.0, window.aspect_ratio());
    let egui = Egui::new(&window, &context);
    let renderer = SphereRenderer::new(&context, window.context().surface_config().format);

    Box::new(UvSphereApp {
        window,
        camera,
        egui,
        renderer,
        panel: SpherePanel::new(),
        input: OrbitInput::new(),
        frame_time_ms: 0.0,
    })
}

impl App for UvSphereApp {
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

        let uniforms = SphereUniforms::new(
            self.camera.view_projection_matrix(),
            self.panel.radius,
            self.panel.inter_lod,
            SPHERE_GRID_SIZE,
        );

        let mut frame = self.window.begin_drawing();
        self.renderer
            .render(&mut frame, &uniforms, self.panel.background_color());
        self.egui.render(&self.window, &mut frame);
        frame.finish();
    }
}

fn main() {
    octafruit_core::logging::init();
    run_app(create_app);
}
