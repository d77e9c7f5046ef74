pub mod app;
pub mod event;
pub mod time;
pub mod window;

// Re-export WindowId for convenience
pub use winit::window::WindowId;

pub use time::FrameTime;
