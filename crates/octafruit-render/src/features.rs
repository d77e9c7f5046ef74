//! GPU feature detection.
//!
//! Wraps the wgpu features the demos care about, with a required vs
//! requested split so missing hardware support fails before any pipeline
//! is created.

use bitflags::bitflags;

bitflags! {
    /// GPU features that can be requested or required.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GpuFeatures: u32 {
        /// Polygon mode: line (wireframe rendering).
        const POLYGON_MODE_LINE = 1 << 0;

        /// Polygon mode: point.
        const POLYGON_MODE_POINT = 1 << 1;

        /// Push constants for small, frequently updated data.
        const PUSH_CONSTANTS = 1 << 2;

        /// Allows disabling depth clipping in the rasterizer.
        const DEPTH_CLIP_CONTROL = 1 << 3;
    }
}

impl GpuFeatures {
    /// Convert to wgpu::Features.
    pub fn to_wgpu(self) -> wgpu::Features {
        let mut features = wgpu::Features::empty();

        if self.contains(GpuFeatures::POLYGON_MODE_LINE) {
            features |= wgpu::Features::POLYGON_MODE_LINE;
        }
        if self.contains(GpuFeatures::POLYGON_MODE_POINT) {
            features |= wgpu::Features::POLYGON_MODE_POINT;
        }
        if self.contains(GpuFeatures::PUSH_CONSTANTS) {
            features |= wgpu::Features::PUSH_CONSTANTS;
        }
        if self.contains(GpuFeatures::DEPTH_CLIP_CONTROL) {
            features |= wgpu::Features::DEPTH_CLIP_CONTROL;
        }

        features
    }

    /// Convert from wgpu::Features, dropping everything without a flag here.
    pub fn from_wgpu(features: wgpu::Features) -> Self {
        let mut gpu_features = GpuFeatures::empty();

        if features.contains(wgpu::Features::POLYGON_MODE_LINE) {
            gpu_features |= GpuFeatures::POLYGON_MODE_LINE;
        }
        if features.contains(wgpu::Features::POLYGON_MODE_POINT) {
            gpu_features |= GpuFeatures::POLYGON_MODE_POINT;
        }
        if features.contains(wgpu::Features::PUSH_CONSTANTS) {
            gpu_features |= GpuFeatures::PUSH_CONSTANTS;
        }
        if features.contains(wgpu::Features::DEPTH_CLIP_CONTROL) {
            gpu_features |= GpuFeatures::DEPTH_CLIP_CONTROL;
        }

        gpu_features
    }

    /// Check whether the adapter supports all of these features.
    pub fn check_support(self, adapter: &wgpu::Adapter) -> FeatureSupportResult {
        let adapter_features = GpuFeatures::from_wgpu(adapter.features());
        let missing = self - (self & adapter_features);

        if missing.is_empty() {
            FeatureSupportResult::Supported
        } else {
            FeatureSupportResult::Missing(missing)
        }
    }
}

impl Default for GpuFeatures {
    fn default() -> Self {
        GpuFeatures::empty()
    }
}

/// Result of checking feature support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureSupportResult {
    /// All requested features are supported.
    Supported,
    /// Some features are missing.
    Missing(GpuFeatures),
}

impl FeatureSupportResult {
    pub fn is_supported(&self) -> bool {
        matches!(self, FeatureSupportResult::Supported)
    }

    pub fn missing(&self) -> Option<GpuFeatures> {
        match self {
            FeatureSupportResult::Supported => None,
            FeatureSupportResult::Missing(features) => Some(*features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_features_map_to_empty() {
        let features = GpuFeatures::empty();
        assert!(features.is_empty());
        assert_eq!(features.to_wgpu(), wgpu::Features::empty());
    }

    #[test]
    fn roundtrip_through_wgpu() {
        let features = GpuFeatures::POLYGON_MODE_LINE | GpuFeatures::PUSH_CONSTANTS;

        let wgpu_features = features.to_wgpu();
        let back = GpuFeatures::from_wgpu(wgpu_features);

        assert_eq!(features, back);
    }

    #[test]
    fn unmapped_wgpu_features_are_dropped() {
        let back = GpuFeatures::from_wgpu(wgpu::Features::TIMESTAMP_QUERY);
        assert!(back.is_empty());
    }
}
