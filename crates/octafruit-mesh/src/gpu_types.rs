//! GPU-side data layouts shared with the WGSL generator shaders.
//!
//! Every struct here has a byte-identical counterpart in the shaders; the
//! size assertions below guard the layouts.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::tessellation::ShapeParams;

/// Vertex written by the generator compute stage and consumed unchanged by
/// the pass-through vertex shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MeshVertex {
    /// Clip-space position.
    pub clip_pos: [f32; 4],
    /// View-space position in xyz, accumulated shell offset in w.
    pub view_pos: [f32; 4],
    /// Decoded unit direction in xyz, w unused.
    pub direction: [f32; 4],
}

impl MeshVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x4,
        2 => Float32x4,
    ];

    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Vertex of the wireframe sphere grid: clip-space position only.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SphereVertex {
    pub clip_pos: [f32; 4],
}

impl SphereVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![
        0 => Float32x4,
    ];

    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Uniform block of the fruit generator and its render pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FruitUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub p0: [f32; 4],
    pub p1: [f32; 4],
    pub p2: [f32; 4],
    /// Fourth control point; w carries the flat-shading flag.
    pub p3: [f32; 4],
    pub inter_lod: u32,
    pub curve_mode: u32,
    pub grid_size: u32,
    pub _pad: u32,
}

impl FruitUniforms {
    pub fn new(view: Mat4, projection: Mat4, params: &ShapeParams, flat_shading: bool) -> Self {
        let [p0, p1, p2, p3] = params.profile.points;
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            p0: [p0.x, p0.y, p0.z, 0.0],
            p1: [p1.x, p1.y, p1.z, 0.0],
            p2: [p2.x, p2.y, p2.z, 0.0],
            p3: [p3.x, p3.y, p3.z, if flat_shading { 1.0 } else { 0.0 }],
            inter_lod: params.inter_lod,
            curve_mode: params.profile.mode.as_u32(),
            grid_size: params.grid_size(),
            _pad: 0,
        }
    }
}

/// Uniform block of the wireframe sphere grid.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SphereUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub radius: f32,
    pub inter_lod: u32,
    pub grid_size: u32,
    pub _pad: u32,
}

impl SphereUniforms {
    pub fn new(view_proj: Mat4, radius: f32, inter_lod: u32, grid_size: u32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            radius,
            inter_lod,
            grid_size,
            _pad: 0,
        }
    }
}

// Layouts are mirrored in WGSL; a silent size change would corrupt every
// draw, so pin them here.
static_assertions::const_assert_eq!(std::mem::size_of::<MeshVertex>(), 48);
static_assertions::const_assert_eq!(std::mem::size_of::<SphereVertex>(), 16);
static_assertions::const_assert_eq!(std::mem::size_of::<FruitUniforms>(), 208);
static_assertions::const_assert_eq!(std::mem::size_of::<SphereUniforms>(), 80);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CurveMode;

    #[test]
    fn flat_shading_flag_rides_in_p3_w() {
        let params = ShapeParams::default();
        let flat = FruitUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, &params, true);
        let smooth = FruitUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, &params, false);
        assert_eq!(flat.p3[3], 1.0);
        assert_eq!(smooth.p3[3], 0.0);
    }

    #[test]
    fn uniforms_snapshot_the_lod_selection() {
        let mut params = ShapeParams::default();
        params.inter_lod = 4;
        let uniforms = FruitUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, &params, false);
        assert_eq!(uniforms.inter_lod, 4);
        assert_eq!(uniforms.grid_size, crate::lod::grid_size(4));
        assert_eq!(uniforms.curve_mode, CurveMode::Cubic.as_u32());
    }

    #[test]
    fn vertex_layout_stride_matches_struct() {
        assert_eq!(MeshVertex::vertex_layout().array_stride, 48);
        assert_eq!(SphereVertex::vertex_layout().array_stride, 16);
    }
}
