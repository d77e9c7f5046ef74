//! Shared pieces of the demo binaries: renderers, UI panels and the
//! orbit input mapping.

pub mod input;
pub mod panel;
pub mod renderer;
pub mod sphere;
