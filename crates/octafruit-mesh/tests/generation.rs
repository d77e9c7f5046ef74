use glam::Vec3;
use octafruit_mesh::{
    CurveProfile, GridTopology, SHELL_SPACING, ShapeParams, generate_mesh, grid_size,
};

fn params_with_shells(inter_lod: u32) -> ShapeParams {
    ShapeParams {
        inter_lod,
        profile: CurveProfile::default(),
    }
}

#[test]
fn generated_counts_match_topology() {
    for inter_lod in [1, 2, 3, 14, 28] {
        let params = params_with_shells(inter_lod);
        let mesh = generate_mesh(&params);
        let topo = params.topology();

        assert_eq!(mesh.vertices.len() as u32, topo.vertex_count());
        assert_eq!(mesh.indices.len() as u32, topo.index_count());
    }
}

#[test]
fn every_index_references_a_written_vertex() {
    let params = params_with_shells(3);
    let mesh = generate_mesh(&params);
    let vertex_count = mesh.vertices.len() as u32;

    for &index in &mesh.indices {
        assert!(index < vertex_count, "index {index} out of range");
    }
    // The sentinel from the slot-writing scheme must never survive.
    assert!(!mesh.indices.contains(&u32::MAX));
}

#[test]
fn shells_are_translated_copies_along_x() {
    let params = params_with_shells(3);
    let mesh = generate_mesh(&params);
    let topo = params.topology();
    let n = topo.grid_size();

    for shell in 1..3 {
        for y in 0..n {
            for x in 0..n {
                let base = mesh.vertices[topo.vertex_slot(x, y, 0) as usize];
                let copy = mesh.vertices[topo.vertex_slot(x, y, shell) as usize];
                let expected_offset = shell as f32 * SHELL_SPACING;

                assert_eq!(copy.offset, expected_offset);
                assert_eq!(
                    copy.position,
                    base.position + Vec3::new(expected_offset, 0.0, 0.0)
                );
                assert_eq!(copy.direction, base.direction);
            }
        }
    }
}

#[test]
fn grid_center_sits_on_the_profile_end() {
    // One shell keeps the full 11 grid; its center decodes to the +Z pole.
    let params = params_with_shells(1);
    let mesh = generate_mesh(&params);
    let topo = params.topology();
    let n = topo.grid_size();
    assert_eq!(n, 11);

    let center = mesh.vertices[topo.vertex_slot(n / 2, n / 2, 0) as usize];
    assert_eq!(center.direction, Vec3::Z);
    assert!(center.position.abs_diff_eq(params.profile.end(), 1e-6));
}

#[test]
fn five_grid_center_decodes_straight_to_the_pole() {
    // A 5 grid evaluated directly, independent of the thread-budget
    // coupling: the center cell decodes to the +Z pole and warps to the
    // curve's end point.
    let profile = CurveProfile::default();
    let dir = octafruit_mesh::octa::decode_cell(2, 2, 5);

    assert_eq!(dir, Vec3::Z);
    assert!(octafruit_mesh::warp_direction(&profile, dir).abs_diff_eq(profile.end(), 1e-6));
}

#[test]
fn grid_corner_sits_on_the_profile_start() {
    let params = params_with_shells(1);
    let mesh = generate_mesh(&params);
    let topo = params.topology();

    // Corners decode to the -Z pole, which maps to t = 0.
    let corner = mesh.vertices[topo.vertex_slot(0, 0, 0) as usize];
    assert!(corner.direction.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    assert!(corner.position.abs_diff_eq(params.profile.start(), 1e-6));
}

#[test]
fn degenerate_three_grid_is_a_valid_mesh() {
    // inter_lod 28 pushes the budget down to the minimal 3 grid.
    let params = params_with_shells(28);
    let topo = params.topology();
    assert_eq!(topo.grid_size(), 3);

    let mesh = generate_mesh(&params);
    assert_eq!(topo.triangle_count(), 2 * 28 * 4);
    for triangle in mesh.indices.chunks_exact(3) {
        assert!(triangle.iter().all(|&i| (i as usize) < mesh.vertices.len()));
        // No degenerate triangles: all three corners distinct.
        assert_ne!(triangle[0], triangle[1]);
        assert_ne!(triangle[1], triangle[2]);
        assert_ne!(triangle[0], triangle[2]);
    }
}

#[test]
fn all_vertices_lie_on_the_warped_surface() {
    let params = params_with_shells(2);
    let mesh = generate_mesh(&params);

    for vertex in &mesh.vertices {
        let expected = octafruit_mesh::warp_direction(&params.profile, vertex.direction)
            + Vec3::new(vertex.offset, 0.0, 0.0);
        assert!(vertex.position.abs_diff_eq(expected, 1e-6));
    }
}

#[test]
fn max_topology_bounds_every_reachable_configuration() {
    let max = GridTopology::max();
    for inter_lod in 1..=28 {
        let topo = GridTopology::new(grid_size(inter_lod), inter_lod);
        assert!(topo.vertex_count() <= max.vertex_count());
        assert!(topo.index_count() <= max.index_count());
    }
}
