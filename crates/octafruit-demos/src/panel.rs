use glam::Vec3;
use octafruit_egui::egui;
use octafruit_export::ShaderPreset;
use octafruit_mesh::{CurveMode, MAX_SHELLS, ShapeParams};

use crate::sphere::MAX_SPHERE_INTER_LOD;

/// Configuration and information windows for the fruit demos.
pub struct FruitPanel {
    pub background: [f32; 3],
    pub params: ShapeParams,
    pub flat_shading: bool,
    pub shader_name: String,
}

impl FruitPanel {
    pub fn new(mode: CurveMode) -> Self {
        let mut params = ShapeParams::default();
        params.profile.mode = mode;

        Self {
            background: [0.1, 0.1, 0.1],
            params,
            flat_shading: false,
            shader_name: String::from("fruit"),
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context, frame_time_ms: f32) {
        information_window(ctx, frame_time_ms);

        egui::Window::new("Configuration").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Background");
                ui.color_edit_button_rgb(&mut self.background);
            });

            ui.add(
                egui::Slider::new(&mut self.params.inter_lod, 1..=MAX_SHELLS)
                    .text("Inter Level of Detail"),
            );

            ui.checkbox(&mut self.flat_shading, "Flat Shading");

            ui.separator();

            // The quadratic profile only reads the first three points
            let visible_points = match self.params.profile.mode {
                CurveMode::Cubic => 4,
                CurveMode::Quadratic => 3,
            };
            for (i, point) in self
                .params
                .profile
                .points
                .iter_mut()
                .take(visible_points)
                .enumerate()
            {
                control_point_sliders(ui, &format!("P{i}"), point);
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Shader name");
                ui.text_edit_singleline(&mut self.shader_name);
            });

            if ui.button("Save Shader").clicked() {
                self.save_shader();
            }
        });
    }

    pub fn background_color(&self) -> wgpu::Color {
        let [r, g, b] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }

    fn save_shader(&self) {
        let name = self.shader_name.trim();
        let name = if name.is_empty() { "fruit" } else { name };

        let path = match std::env::current_dir() {
            Ok(dir) => dir.join(format!("{name}.wgsl")),
            Err(error) => {
                tracing::error!(%error, "could not resolve the working directory");
                return;
            }
        };

        let preset = ShaderPreset::new(self.params.profile.points);
        match preset.write_to(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "shader preset saved"),
            Err(error) => tracing::error!(%error, "failed to save shader preset"),
        }
    }
}

/// Configuration and information windows for the sphere grid demo.
pub struct SpherePanel {
    pub background: [f32; 3],
    pub radius: f32,
    pub inter_lod: u32,
}

impl SpherePanel {
    pub fn new() -> Self {
        Self {
            background: [0.1, 0.1, 0.1],
            radius: 0.5,
            inter_lod: 1,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context, frame_time_ms: f32) {
        information_window(ctx, frame_time_ms);

        egui::Window::new("Configuration").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Background");
                ui.color_edit_button_rgb(&mut self.background);
            });

            ui.add(egui::Slider::new(&mut self.radius, 0.1..=1.0).text("Radius"));
            ui.add(
                egui::Slider::new(&mut self.inter_lod, 1..=MAX_SPHERE_INTER_LOD)
                    .text("Inter Sphere LOD"),
            );
        });
    }

    pub fn background_color(&self) -> wgpu::Color {
        let [r, g, b] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }
}

impl Default for SpherePanel {
    fn default() -> Self {
        Self::new()
    }
}

fn information_window(ctx: &egui::Context, frame_time_ms: f32) {
    egui::Window::new("Information").show(ctx, |ui| {
        ui.label(format!("Frame time: {frame_time_ms:.2} ms"));
    });
}

fn control_point_sliders(ui: &mut egui::Ui, label: &str, point: &mut Vec3) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::Slider::new(&mut point.x, -5.0..=5.0).text("x"));
        ui.add(egui::Slider::new(&mut point.y, -5.0..=5.0).text("y"));
        ui.add(egui::Slider::new(&mut point.z, -5.0..=5.0).text("z"));
    });
}
