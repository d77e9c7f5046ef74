use std::sync::Arc;

use crate::features::GpuFeatures;

/// Configuration for creating a [`GraphicsContext`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphicsContextDescriptor {
    /// Features the app cannot run without. Missing support is fatal.
    pub required_features: GpuFeatures,
    /// Features the app can take advantage of but does not need.
    pub requested_features: GpuFeatures,
}

/// A globally shared graphics context.
pub struct GraphicsContext {
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    features: GpuFeatures,
}

impl GraphicsContext {
    /// Creates a new graphics context synchronously.
    ///
    /// See [`GraphicsContext::new`] for the asynchronous version.
    pub fn new_sync(descriptor: GraphicsContextDescriptor) -> Arc<Self> {
        pollster::block_on(Self::new(descriptor))
    }

    /// Creates a new graphics context asynchronously.
    ///
    /// # Panics
    ///
    /// Panics if no suitable adapter exists or if the adapter lacks any of
    /// the descriptor's required features. The check runs before any
    /// pipeline is created, so an unsupported device fails immediately
    /// with a clear message instead of a mid-frame validation error.
    pub async fn new(descriptor: GraphicsContextDescriptor) -> Arc<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to find a suitable GPU adapter");

        if let Some(missing) = descriptor.required_features.check_support(&adapter).missing() {
            panic!("This device does not support the required GPU features: {missing:?}");
        }

        let mut features = descriptor.required_features;
        match descriptor.requested_features.check_support(&adapter) {
            crate::features::FeatureSupportResult::Supported => {
                features |= descriptor.requested_features;
            }
            crate::features::FeatureSupportResult::Missing(missing) => {
                tracing::warn!("Requested GPU features unavailable, continuing without: {missing:?}");
                features |= descriptor.requested_features - missing;
            }
        }

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: features.to_wgpu(),
                required_limits: wgpu::Limits::default(),
                label: None,
                ..Default::default()
            })
            .await
            .expect("Failed to create device");

        tracing::info!(adapter = ?adapter.get_info().name, ?features, "graphics context ready");

        Arc::new(Self {
            instance,
            adapter,
            device,
            queue,
            features,
        })
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// The features that were actually enabled on the device.
    pub fn features(&self) -> GpuFeatures {
        self.features
    }

    pub fn has_feature(&self, feature: GpuFeatures) -> bool {
        self.features.contains(feature)
    }
}
