pub use winit::dpi::{PhysicalPosition, PhysicalSize};
pub use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent as WinitEvent};
pub use winit::keyboard::*;

use std::collections::VecDeque;

/// Event queue with batching and deduplication
pub struct EventQueue {
    /// Pending events for this frame
    pending: VecDeque<Event>,

    /// High-priority events (processed first)
    priority: VecDeque<Event>,

    /// Deduplicated events (only last value kept)
    latest_mouse_pos: Option<PhysicalPosition<f64>>,
    latest_scale_factor: Option<f64>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(64),
            priority: VecDeque::with_capacity(8),
            latest_mouse_pos: None,
            latest_scale_factor: None,
        }
    }

    /// Push event to queue (called from winit handler)
    pub fn push(&mut self, event: Event) {
        match event {
            // High priority - process first
            Event::CloseRequested | Event::WindowResized(_) | Event::Focused(_) => {
                self.priority.push_back(event);
            }

            // Deduplicate - only keep latest
            Event::MouseMoved(pos) => {
                self.latest_mouse_pos = Some(pos);
            }
            Event::ScaleFactorChanged(scale) => {
                self.latest_scale_factor = Some(scale);
            }

            // Normal priority
            _ => {
                self.pending.push_back(event);
            }
        }
    }

    /// Process all events and return batch
    pub fn drain(&mut self) -> EventBatch {
        let mut events = Vec::with_capacity(self.priority.len() + self.pending.len() + 2);

        events.extend(self.priority.drain(..));

        if let Some(scale) = self.latest_scale_factor.take() {
            events.push(Event::ScaleFactorChanged(scale));
        }
        if let Some(pos) = self.latest_mouse_pos.take() {
            events.push(Event::MouseMoved(pos));
        }

        events.extend(self.pending.drain(..));

        EventBatch { events }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Run `handler` over the batch, removing every event it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&Event) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Window resized to a new physical size.
    WindowResized(PhysicalSize<u32>),
    /// Scale factor changed.
    ScaleFactorChanged(f64),
    /// Window focus changed.
    Focused(bool),
    /// Window close requested.
    CloseRequested,
    /// Mouse button pressed.
    MouseButtonDown(MouseButton),
    /// Mouse button released.
    MouseButtonUp(MouseButton),
    /// Mouse wheel scrolled.
    MouseScrolled(MouseScrollDelta),
    /// Mouse cursor moved (physical coordinates).
    MouseMoved(PhysicalPosition<f64>),
    /// Mouse cursor entered the window.
    MouseEntered,
    /// Mouse cursor left the window.
    MouseLeft,
    /// Keyboard input event.
    KeyInput(KeyEvent),
}

#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub physical_key: PhysicalKey,
    pub logical_key: Key,
    pub text: Option<SmolStr>,
    pub state: ElementState,
    pub repeat: bool,
    pub is_synthetic: bool,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

impl Event {
    pub(crate) fn from_winit(event: winit::event::WindowEvent) -> Option<Self> {
        match event {
            WinitEvent::Resized(size) => Some(Event::WindowResized(size)),
            WinitEvent::ScaleFactorChanged {
                scale_factor,
                inner_size_writer: _,
            } => Some(Event::ScaleFactorChanged(scale_factor)),
            WinitEvent::Focused(focus) => Some(Event::Focused(focus)),
            WinitEvent::CloseRequested => Some(Event::CloseRequested),
            WinitEvent::MouseInput {
                device_id: _,
                state,
                button,
            } => match state {
                ElementState::Pressed => Some(Event::MouseButtonDown(button)),
                ElementState::Released => Some(Event::MouseButtonUp(button)),
            },
            WinitEvent::MouseWheel {
                device_id: _,
                delta,
                phase: _,
            } => Some(Event::MouseScrolled(delta)),
            WinitEvent::CursorMoved {
                device_id: _,
                position,
            } => Some(Event::MouseMoved(position)),
            WinitEvent::CursorEntered { device_id: _ } => Some(Event::MouseEntered),
            WinitEvent::CursorLeft { device_id: _ } => Some(Event::MouseLeft),
            WinitEvent::KeyboardInput {
                device_id: _,
                event,
                is_synthetic,
            } => Some(Event::KeyInput(KeyEvent {
                physical_key: event.physical_key,
                logical_key: event.logical_key,
                repeat: event.repeat,
                text: event.text,
                state: event.state,
                is_synthetic,
            })),
            WinitEvent::Moved(_) | WinitEvent::TouchpadPressure { .. } => None,
            unknown => {
                tracing::trace!("unhandled window event: {:?}", unknown);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_moves_are_deduplicated() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseMoved(PhysicalPosition::new(1.0, 1.0)));
        queue.push(Event::MouseMoved(PhysicalPosition::new(2.0, 2.0)));
        queue.push(Event::MouseMoved(PhysicalPosition::new(3.0, 3.0)));

        let batch = queue.drain();
        assert_eq!(batch.len(), 1);
        match batch.iter().next() {
            Some(Event::MouseMoved(pos)) => assert_eq!(pos.x, 3.0),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn close_requested_comes_first() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseEntered);
        queue.push(Event::CloseRequested);

        let batch = queue.drain();
        assert!(matches!(batch.iter().next(), Some(Event::CloseRequested)));
    }

    #[test]
    fn dispatch_removes_consumed_events() {
        let mut queue = EventQueue::new();
        queue.push(Event::MouseEntered);
        queue.push(Event::MouseLeft);

        let mut batch = queue.drain();
        batch.dispatch(|event| match event {
            Event::MouseEntered => HandleStatus::consumed(),
            _ => HandleStatus::ignored(),
        });

        assert_eq!(batch.len(), 1);
        assert!(matches!(batch.iter().next(), Some(Event::MouseLeft)));
    }
}
