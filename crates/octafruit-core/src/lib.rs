//! Octafruit Core
//!
//! Shared utilities for the octafruit demo workspace.

pub mod logging;
pub mod math;
