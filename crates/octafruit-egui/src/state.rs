use octafruit_render::RenderableWindow;
use octafruit_winit::event::{ElementState, Event, Key, KeyEvent, MouseButton, MouseScrollDelta, NamedKey};

#[derive(Clone, Copy, Debug, Default)]
pub struct EventResponse {
    /// If true, egui consumed this event, i.e. wants exclusive use of it
    /// (e.g. a mouse click on an egui window, or typing into a text field).
    pub consumed: bool,

    /// Do we need an egui refresh because of this event?
    pub repaint: bool,
}

pub struct State {
    context: egui::Context,
    input: egui::RawInput,
    viewport_id: egui::ViewportId,
    pointer_pos_in_points: Option<egui::Pos2>,
}

impl State {
    pub fn new(context: egui::Context, viewport_id: egui::ViewportId) -> Self {
        let input = egui::RawInput {
            focused: false,
            ..Default::default()
        };

        Self {
            context,
            input,
            viewport_id,
            pointer_pos_in_points: None,
        }
    }

    pub fn take_input(&mut self, window: &RenderableWindow) -> egui::RawInput {
        let screen_size_in_pixels = screen_size_in_pixels(window);
        let screen_size_in_points = screen_size_in_pixels / pixels_per_point(&self.context, window);

        self.input.screen_rect = (screen_size_in_points.x > 0.0 && screen_size_in_points.y > 0.0)
            .then(|| egui::Rect::from_min_size(egui::Pos2::ZERO, screen_size_in_points));

        self.input.viewport_id = self.viewport_id;

        self.input
            .viewports
            .entry(self.viewport_id)
            .or_default()
            .native_pixels_per_point = Some(window.window().scale_factor() as f32);

        self.input.take()
    }

    pub fn on_event(&mut self, window: &RenderableWindow, event: &Event) -> EventResponse {
        match event {
            Event::ScaleFactorChanged(scale_factor) => {
                self.input
                    .viewports
                    .entry(self.viewport_id)
                    .or_default()
                    .native_pixels_per_point = Some(*scale_factor as f32);

                EventResponse {
                    repaint: true,
                    consumed: false,
                }
            }

            Event::Focused(focused) => {
                self.input.focused = *focused;
                self.input.events.push(egui::Event::WindowFocused(*focused));
                EventResponse {
                    repaint: true,
                    consumed: false,
                }
            }

            Event::MouseButtonDown(button) => {
                self.on_mouse_button_input(ElementState::Pressed, *button);
                EventResponse {
                    repaint: true,
                    consumed: self.context.wants_pointer_input(),
                }
            }

            Event::MouseButtonUp(button) => {
                self.on_mouse_button_input(ElementState::Released, *button);
                EventResponse {
                    repaint: true,
                    consumed: self.context.wants_pointer_input(),
                }
            }

            Event::MouseScrolled(delta) => {
                self.on_mouse_wheel(window, *delta);
                EventResponse {
                    repaint: true,
                    consumed: self.context.wants_pointer_input(),
                }
            }

            Event::MouseMoved(pos) => {
                let pixels_per_point = pixels_per_point(&self.context, window);
                let pos_in_points =
                    egui::pos2(pos.x as f32 / pixels_per_point, pos.y as f32 / pixels_per_point);

                self.pointer_pos_in_points = Some(pos_in_points);
                self.input
                    .events
                    .push(egui::Event::PointerMoved(pos_in_points));

                EventResponse {
                    repaint: true,
                    consumed: self.context.is_using_pointer(),
                }
            }

            Event::MouseLeft => {
                self.pointer_pos_in_points = None;
                self.input.events.push(egui::Event::PointerGone);
                EventResponse {
                    repaint: true,
                    consumed: false,
                }
            }

            Event::KeyInput(event) => {
                if event.is_synthetic && event.state == ElementState::Pressed {
                    EventResponse {
                        repaint: true,
                        consumed: false,
                    }
                } else {
                    self.on_keyboard_input(event);

                    let consumed = self.context.wants_keyboard_input()
                        || matches!(event.logical_key, Key::Named(NamedKey::Tab));
                    EventResponse {
                        repaint: true,
                        consumed,
                    }
                }
            }

            _ => EventResponse {
                repaint: false,
                consumed: false,
            },
        }
    }

    fn on_mouse_button_input(&mut self, state: ElementState, button: MouseButton) {
        if let Some(pos) = self.pointer_pos_in_points
            && let Some(button) = translate_mouse_button(button)
        {
            let pressed = state == ElementState::Pressed;

            self.input.events.push(egui::Event::PointerButton {
                pos,
                button,
                pressed,
                modifiers: self.input.modifiers,
            });
        }
    }

    fn on_mouse_wheel(&mut self, window: &RenderableWindow, delta: MouseScrollDelta) {
        let pixels_per_point = pixels_per_point(&self.context, window);

        let (unit, delta) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (egui::MouseWheelUnit::Line, egui::vec2(x, y)),
            MouseScrollDelta::PixelDelta(pos) => (
                egui::MouseWheelUnit::Point,
                egui::vec2(pos.x as f32, pos.y as f32) / pixels_per_point,
            ),
        };
        let modifiers = self.input.modifiers;
        self.input.events.push(egui::Event::MouseWheel {
            unit,
            delta,
            modifiers,
        });
    }

    fn on_keyboard_input(&mut self, event: &KeyEvent) {
        let pressed = event.state == ElementState::Pressed;

        self.update_modifiers(&event.logical_key, pressed);

        if let Some(key) = translate_key(&event.logical_key) {
            self.input.events.push(egui::Event::Key {
                key,
                physical_key: None,
                pressed,
                repeat: false,
                modifiers: self.input.modifiers,
            });
        }

        if let Some(text) = &event.text
            && !text.is_empty()
            && text.chars().all(is_printable_char)
        {
            let is_cmd = self.input.modifiers.ctrl
                || self.input.modifiers.command
                || self.input.modifiers.mac_cmd;
            if pressed && !is_cmd {
                self.input.events.push(egui::Event::Text(text.to_string()));
            }
        }
    }

    fn update_modifiers(&mut self, key: &Key, pressed: bool) {
        match key {
            Key::Named(NamedKey::Control) => {
                self.input.modifiers.ctrl = pressed;
                if !cfg!(target_os = "macos") {
                    self.input.modifiers.command = pressed;
                }
            }
            Key::Named(NamedKey::Shift) => self.input.modifiers.shift = pressed,
            Key::Named(NamedKey::Alt) => self.input.modifiers.alt = pressed,
            Key::Named(NamedKey::Super) => {
                if cfg!(target_os = "macos") {
                    self.input.modifiers.mac_cmd = pressed;
                    self.input.modifiers.command = pressed;
                }
            }
            _ => {}
        }
    }
}

pub fn screen_size_in_pixels(window: &RenderableWindow) -> egui::Vec2 {
    let size = window.window().physical_size();
    egui::vec2(size.width as f32, size.height as f32)
}

pub fn pixels_per_point(context: &egui::Context, window: &RenderableWindow) -> f32 {
    let native_pixels_per_point = window.window().scale_factor() as f32;
    context.zoom_factor() * native_pixels_per_point
}

fn is_printable_char(chr: char) -> bool {
    let is_in_private_use_area = ('\u{e000}'..='\u{f8ff}').contains(&chr)
        || ('\u{f0000}'..='\u{ffffd}').contains(&chr)
        || ('\u{100000}'..='\u{10fffd}').contains(&chr);

    !is_in_private_use_area && !chr.is_ascii_control()
}

fn translate_mouse_button(button: MouseButton) -> Option<egui::PointerButton> {
    match button {
        MouseButton::Left => Some(egui::PointerButton::Primary),
        MouseButton::Right => Some(egui::PointerButton::Secondary),
        MouseButton::Middle => Some(egui::PointerButton::Middle),
        MouseButton::Back => Some(egui::PointerButton::Extra1),
        MouseButton::Forward => Some(egui::PointerButton::Extra2),
        MouseButton::Other(_) => None,
    }
}

fn translate_key(key: &Key) -> Option<egui::Key> {
    match key {
        Key::Named(named_key) => translate_named_key(*named_key),
        Key::Character(str) => egui::Key::from_name(str.as_str()),
        Key::Unidentified(_) | Key::Dead(_) => None,
    }
}

/// The named keys egui's widgets react to. Character keys go through
/// [`egui::Key::from_name`] instead.
fn translate_named_key(named_key: NamedKey) -> Option<egui::Key> {
    use egui::Key;

    Some(match named_key {
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::End => Key::End,
        NamedKey::Home => Key::Home,
        NamedKey::PageDown => Key::PageDown,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::Insert => Key::Insert,
        NamedKey::Escape => Key::Escape,
        NamedKey::Cut => Key::Cut,
        NamedKey::Copy => Key::Copy,
        NamedKey::Paste => Key::Paste,
        NamedKey::Space => Key::Space,
        _ => {
            tracing::trace!("unmapped named key: {named_key:?}");
            return None;
        }
    })
}
