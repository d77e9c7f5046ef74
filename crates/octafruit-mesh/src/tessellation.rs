//! Multi-shell grid tessellation.
//!
//! Every grid cell owns fixed output slots computed from its coordinates, so
//! all cells (and all shells) can be filled independently and in any order.
//! The same arithmetic indexes the storage buffers written by the generator
//! shader.

use glam::Vec3;

use crate::lod::{self, SHELL_SPACING};
use crate::octa;
use crate::profile::CurveProfile;
use crate::warp;

/// Per-frame snapshot of the shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    /// Number of side-by-side shells.
    pub inter_lod: u32,
    pub profile: CurveProfile,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            inter_lod: 1,
            profile: CurveProfile::default(),
        }
    }
}

impl ShapeParams {
    /// Grid side length after splitting the thread budget across shells.
    pub fn grid_size(&self) -> u32 {
        lod::grid_size(self.inter_lod)
    }

    pub fn topology(&self) -> GridTopology {
        GridTopology::new(self.grid_size(), self.inter_lod)
    }
}

/// Slot arithmetic for an `n x n` grid repeated over `shells` shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    n: u32,
    shells: u32,
}

impl GridTopology {
    pub fn new(n: u32, shells: u32) -> Self {
        debug_assert!(n >= 2);
        Self { n, shells }
    }

    /// Topology sized for the largest parameters the demos allow. Used to
    /// allocate GPU buffers once.
    pub fn max() -> Self {
        Self::new(lod::MAX_GRID_SIZE, lod::MAX_SHELLS)
    }

    pub fn grid_size(&self) -> u32 {
        self.n
    }

    pub fn shells(&self) -> u32 {
        self.shells
    }

    /// Total vertex count: shells * n^2.
    pub fn vertex_count(&self) -> u32 {
        self.shells * self.n * self.n
    }

    /// Total triangle count: 2 * shells * (n - 1)^2.
    pub fn triangle_count(&self) -> u32 {
        2 * self.shells * (self.n - 1) * (self.n - 1)
    }

    /// Total index count (three per triangle).
    pub fn index_count(&self) -> u32 {
        3 * self.triangle_count()
    }

    /// Vertex slot owned by cell `(x, y)` of `shell`.
    pub fn vertex_slot(&self, x: u32, y: u32, shell: u32) -> u32 {
        y * self.n + x + shell * self.n * self.n
    }

    /// First of the two triangle slots owned by interior cell `(x, y)`.
    pub fn triangle_slot(&self, x: u32, y: u32, shell: u32) -> u32 {
        let per_shell = 2 * (self.n - 1) * (self.n - 1);
        2 * (y * (self.n - 1) + x) + shell * per_shell
    }

    /// Whether the cell keeps the default diagonal.
    ///
    /// Cells whose x and y both lie in the same half of the grid split along
    /// one diagonal; the mixed-half cells flip it, which makes the diagonals
    /// radiate from the grid center.
    pub fn diagonal_unflipped(&self, x: u32, y: u32) -> bool {
        let half = self.n / 2;
        (x < half && y < half) || (x >= half && y >= half)
    }

    /// The two index triples for interior cell `(x, y)` of `shell`.
    ///
    /// `x` and `y` must be < `n - 1`.
    pub fn cell_triangles(&self, x: u32, y: u32, shell: u32) -> [[u32; 3]; 2] {
        let current = self.vertex_slot(x, y, shell);
        let right = current + 1;
        let bottom = current + self.n;
        let bottom_right = bottom + 1;

        if self.diagonal_unflipped(x, y) {
            [
                [current, right, bottom],
                [right, bottom_right, bottom],
            ]
        } else {
            [
                [current, right, bottom_right],
                [bottom_right, bottom, current],
            ]
        }
    }
}

/// One generated surface sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceVertex {
    /// Warped position in model space, shell offset already applied.
    pub position: Vec3,
    /// Decoded unit direction the position was derived from.
    pub direction: Vec3,
    /// Accumulated shell offset along +X.
    pub offset: f32,
}

/// CPU-generated mesh, mirroring the generator shader's output buffers.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub vertices: Vec<SurfaceVertex>,
    pub indices: Vec<u32>,
}

/// Generate the full mesh for a parameter snapshot.
///
/// Output slots are written by index rather than pushed, exactly as the
/// shader threads do it, so slot arithmetic bugs show up as untouched
/// sentinel values instead of silently reordered data.
pub fn generate_mesh(params: &ShapeParams) -> SurfaceMesh {
    let topo = params.topology();
    let n = topo.grid_size();

    let mut vertices = vec![
        SurfaceVertex {
            position: Vec3::ZERO,
            direction: Vec3::ZERO,
            offset: 0.0,
        };
        topo.vertex_count() as usize
    ];
    let mut indices = vec![u32::MAX; topo.index_count() as usize];

    for y in 0..n {
        for x in 0..n {
            let dir = octa::decode_cell(x, y, n);
            let base = warp::warp_direction(&params.profile, dir);

            let mut offset = 0.0;
            for shell in 0..topo.shells() {
                let slot = topo.vertex_slot(x, y, shell) as usize;
                vertices[slot] = SurfaceVertex {
                    position: base + Vec3::new(offset, 0.0, 0.0),
                    direction: dir,
                    offset,
                };
                offset += SHELL_SPACING;
            }

            if x < n - 1 && y < n - 1 {
                for shell in 0..topo.shells() {
                    let triangles = topo.cell_triangles(x, y, shell);
                    let base_index = 3 * topo.triangle_slot(x, y, shell) as usize;
                    for (t, triangle) in triangles.iter().enumerate() {
                        indices[base_index + 3 * t..base_index + 3 * t + 3]
                            .copy_from_slice(triangle);
                    }
                }
            }
        }
    }

    SurfaceMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_formulas() {
        for (n, shells) in [(3, 1), (5, 2), (11, 28)] {
            let topo = GridTopology::new(n, shells);
            assert_eq!(topo.vertex_count(), shells * n * n);
            assert_eq!(topo.triangle_count(), 2 * shells * (n - 1) * (n - 1));
        }
    }

    #[test]
    fn vertex_slots_cover_the_range_exactly_once() {
        let topo = GridTopology::new(5, 3);
        let mut seen = vec![false; topo.vertex_count() as usize];
        for shell in 0..3 {
            for y in 0..5 {
                for x in 0..5 {
                    let slot = topo.vertex_slot(x, y, shell) as usize;
                    assert!(!seen[slot], "slot {slot} written twice");
                    seen[slot] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn triangle_slots_are_disjoint() {
        let topo = GridTopology::new(5, 3);
        let mut seen = vec![false; topo.triangle_count() as usize];
        for shell in 0..3 {
            for y in 0..4 {
                for x in 0..4 {
                    let slot = topo.triangle_slot(x, y, shell) as usize;
                    for s in [slot, slot + 1] {
                        assert!(!seen[s], "triangle slot {s} written twice");
                        seen[s] = true;
                    }
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn diagonal_parity_on_a_five_grid() {
        let topo = GridTopology::new(5, 1);
        // Same-half corners keep the default split.
        assert_eq!(topo.diagonal_unflipped(0, 0), topo.diagonal_unflipped(4, 4));
        // Mixed-half corners flip it.
        assert!(topo.diagonal_unflipped(0, 0));
        assert!(!topo.diagonal_unflipped(0, 4));
        assert!(!topo.diagonal_unflipped(4, 0));
    }

    #[test]
    fn flipped_cell_uses_the_other_diagonal() {
        let topo = GridTopology::new(5, 1);
        let [a, b] = topo.cell_triangles(0, 0, 0);
        assert_eq!(a, [0, 1, 5]);
        assert_eq!(b, [1, 6, 5]);

        let [c, d] = topo.cell_triangles(0, 4 - 1, 0);
        // (0, 3) is a mixed-half cell on the 5 grid.
        let current = topo.vertex_slot(0, 3, 0);
        assert_eq!(c, [current, current + 1, current + 6]);
        assert_eq!(d, [current + 6, current + 5, current]);
    }
}
