//! Procedural sphere-like mesh generation on an octahedral grid.
//!
//! A square N x N grid of samples is mapped onto the octahedron and decoded
//! into unit directions. Each direction is bent along a Bezier profile curve
//! and swept around the equator, producing organic "fruit" silhouettes.
//! `inter_lod` repeats the shape as side-by-side shells.
//!
//! The same functions run inside the WGSL generator shader; this crate is
//! the CPU mirror used for buffer sizing and for testing the geometry.

pub mod gpu_types;
pub mod lod;
pub mod octa;
pub mod profile;
pub mod shading;
pub mod tessellation;
pub mod warp;

pub use gpu_types::{FruitUniforms, MeshVertex, SphereUniforms, SphereVertex};
pub use lod::{MAX_GRID_SIZE, MAX_SHELLS, SHELL_SPACING, THREAD_BUDGET, grid_size};
pub use octa::oct_decode;
pub use profile::{CurveMode, CurveProfile};
pub use tessellation::{GridTopology, ShapeParams, SurfaceMesh, SurfaceVertex, generate_mesh};
pub use warp::warp_direction;
