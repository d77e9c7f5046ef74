//! Thin wgpu wrapper: context creation with feature checks, surface
//! management, frame lifecycle and pass builders.

pub mod camera;
pub mod compute;
pub mod context;
pub mod depth;
pub mod features;
pub mod frame;
pub mod window;

pub use camera::OrbitCamera;
pub use compute::{ComputePass, ComputePassBuilder};
pub use context::{GraphicsContext, GraphicsContextDescriptor};
pub use depth::{DEFAULT_DEPTH_FORMAT, DepthTexture};
pub use features::{FeatureSupportResult, GpuFeatures};
pub use frame::{FrameContext, RenderPass, RenderPassBuilder, Surface};
pub use window::{RenderableWindow, WindowContext, WindowContextDescriptor};
