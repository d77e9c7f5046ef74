use octafruit_render::OrbitCamera;
use octafruit_winit::event::{
    ElementState, Event, HandleStatus, Key, MouseButton, MouseScrollDelta, NamedKey,
    PhysicalPosition,
};

const ROTATE_SENSITIVITY: f32 = 0.01;
const PAN_SENSITIVITY: f32 = 0.002;
const ZOOM_LINE_SENSITIVITY: f32 = 0.25;
const ZOOM_PIXEL_SENSITIVITY: f32 = 0.01;

/// Maps mouse input to the examiner camera.
///
/// Left drag orbits, right drag (or left drag with Control held) pans,
/// the scroll wheel dollies.
pub struct OrbitInput {
    cursor: Option<PhysicalPosition<f64>>,
    rotating: bool,
    panning: bool,
    ctrl_held: bool,
}

impl OrbitInput {
    pub fn new() -> Self {
        Self {
            cursor: None,
            rotating: false,
            panning: false,
            ctrl_held: false,
        }
    }

    pub fn handle(&mut self, event: &Event, camera: &mut OrbitCamera) -> HandleStatus {
        match event {
            Event::MouseButtonDown(MouseButton::Left) => {
                if self.ctrl_held {
                    self.panning = true;
                } else {
                    self.rotating = true;
                }
                HandleStatus::handled()
            }
            Event::MouseButtonDown(MouseButton::Right) => {
                self.panning = true;
                HandleStatus::handled()
            }
            Event::MouseButtonUp(MouseButton::Left) => {
                self.rotating = false;
                self.panning = false;
                HandleStatus::handled()
            }
            Event::MouseButtonUp(MouseButton::Right) => {
                self.panning = false;
                HandleStatus::handled()
            }
            Event::MouseMoved(pos) => {
                let delta = match self.cursor.replace(*pos) {
                    Some(last) => ((pos.x - last.x) as f32, (pos.y - last.y) as f32),
                    None => (0.0, 0.0),
                };

                if self.rotating {
                    camera.rotate(-delta.0 * ROTATE_SENSITIVITY, delta.1 * ROTATE_SENSITIVITY);
                } else if self.panning {
                    let scale = PAN_SENSITIVITY * camera.distance;
                    camera.pan(-delta.0 * scale, delta.1 * scale);
                }
                HandleStatus::handled()
            }
            Event::MouseLeft => {
                self.cursor = None;
                self.rotating = false;
                self.panning = false;
                HandleStatus::handled()
            }
            Event::MouseScrolled(delta) => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * ZOOM_LINE_SENSITIVITY,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * ZOOM_PIXEL_SENSITIVITY,
                };
                camera.zoom(amount * camera.distance);
                HandleStatus::handled()
            }
            Event::KeyInput(key) if key.logical_key == Key::Named(NamedKey::Control) => {
                self.ctrl_held = key.state == ElementState::Pressed;
                HandleStatus::handled()
            }
            _ => HandleStatus::ignored(),
        }
    }
}

impl Default for OrbitInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(input: &mut OrbitInput, camera: &mut OrbitCamera, from: (f64, f64), to: (f64, f64)) {
        input.handle(&Event::MouseMoved(PhysicalPosition::new(from.0, from.1)), camera);
        input.handle(&Event::MouseButtonDown(MouseButton::Left), camera);
        input.handle(&Event::MouseMoved(PhysicalPosition::new(to.0, to.1)), camera);
        input.handle(&Event::MouseButtonUp(MouseButton::Left), camera);
    }

    #[test]
    fn left_drag_orbits() {
        let mut input = OrbitInput::new();
        let mut camera = OrbitCamera::new(3.0, 1.0);

        drag(&mut input, &mut camera, (100.0, 100.0), (150.0, 100.0));

        assert_ne!(camera.yaw, 0.0);
        assert_eq!(camera.target, glam::Vec3::ZERO);
    }

    #[test]
    fn drag_with_control_pans() {
        let mut input = OrbitInput::new();
        let mut camera = OrbitCamera::new(3.0, 1.0);

        input.handle(
            &Event::KeyInput(octafruit_winit::event::KeyEvent {
                physical_key: octafruit_winit::event::PhysicalKey::Code(
                    octafruit_winit::event::KeyCode::ControlLeft,
                ),
                logical_key: Key::Named(NamedKey::Control),
                text: None,
                state: ElementState::Pressed,
                repeat: false,
                is_synthetic: false,
            }),
            &mut camera,
        );
        drag(&mut input, &mut camera, (100.0, 100.0), (100.0, 160.0));

        assert_eq!(camera.yaw, 0.0);
        assert_ne!(camera.target, glam::Vec3::ZERO);
    }

    #[test]
    fn scroll_zooms_in() {
        let mut input = OrbitInput::new();
        let mut camera = OrbitCamera::new(3.0, 1.0);

        input.handle(
            &Event::MouseScrolled(MouseScrollDelta::LineDelta(0.0, 1.0)),
            &mut camera,
        );

        assert!(camera.distance < 3.0);
    }
}
