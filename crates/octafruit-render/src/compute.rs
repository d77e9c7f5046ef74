//! Compute pass builder, mirroring the render pass lifecycle: the pass
//! borrows the frame's command encoder and returns it on drop.

use crate::frame::FrameContext;

pub struct ComputePassBuilder<'a> {
    label: Option<&'a str>,
}

impl<'a> ComputePassBuilder<'a> {
    pub fn new() -> Self {
        Self { label: None }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Begins the compute pass on the frame's encoder.
    ///
    /// The encoder is taken from the FrameContext and released back when
    /// the ComputePass is dropped or [`finish`](ComputePass::finish) is
    /// called.
    pub fn build(self, frame_context: &'a mut FrameContext) -> ComputePass<'a> {
        let mut encoder = frame_context.encoder.take().unwrap();

        let pass = encoder
            .begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: self.label,
                timestamp_writes: None,
            })
            .forget_lifetime();

        frame_context.increment_passes();

        ComputePass {
            context: frame_context,
            encoder: Some(encoder),
            pass: Some(pass),
        }
    }
}

impl<'a> Default for ComputePassBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ComputePass<'a> {
    pub context: &'a mut FrameContext,
    pub(crate) encoder: Option<wgpu::CommandEncoder>,
    pub(crate) pass: Option<wgpu::ComputePass<'static>>,
}

impl<'a> ComputePass<'a> {
    pub fn set_pipeline(&mut self, pipeline: &wgpu::ComputePipeline) {
        self.pass.as_mut().unwrap().set_pipeline(pipeline);
    }

    pub fn set_bind_group(&mut self, index: u32, bind_group: &wgpu::BindGroup, offsets: &[u32]) {
        self.pass
            .as_mut()
            .unwrap()
            .set_bind_group(index, bind_group, offsets);
    }

    pub fn dispatch_workgroups(&mut self, x: u32, y: u32, z: u32) {
        self.pass.as_mut().unwrap().dispatch_workgroups(x, y, z);
    }

    pub fn finish(self) {
        drop(self);
    }
}

impl Drop for ComputePass<'_> {
    fn drop(&mut self) {
        drop(self.pass.take());

        // Return the encoder to the frame context
        self.context.encoder = self.encoder.take();
    }
}
