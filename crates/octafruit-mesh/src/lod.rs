//! Level-of-detail selection.
//!
//! `inter_lod` shells share a fixed thread budget, so the per-shape grid
//! resolution steps down as the shell count grows.

/// Distance between neighbouring shells along +X.
pub const SHELL_SPACING: f32 = 2.5;

/// Thread budget of one generator workgroup.
pub const THREAD_BUDGET: u32 = 128;

/// Largest supported grid size (side length of the sample grid).
pub const MAX_GRID_SIZE: u32 = 11;

/// Largest supported shell count.
pub const MAX_SHELLS: u32 = 28;

/// Grid side length for a per-shape thread budget.
///
/// Always odd, so the grid has a center sample that decodes to a pole.
pub fn grid_size_for_budget(budget: u32) -> u32 {
    if budget >= 121 {
        11
    } else if budget >= 64 {
        9
    } else if budget >= 42 {
        7
    } else if budget >= 16 {
        5
    } else {
        3
    }
}

/// Grid side length when the thread budget is split across `inter_lod` shells.
pub fn grid_size(inter_lod: u32) -> u32 {
    grid_size_for_budget(THREAD_BUDGET / inter_lod.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_thresholds() {
        assert_eq!(grid_size_for_budget(128), 11);
        assert_eq!(grid_size_for_budget(121), 11);
        assert_eq!(grid_size_for_budget(120), 9);
        assert_eq!(grid_size_for_budget(64), 9);
        assert_eq!(grid_size_for_budget(63), 7);
        assert_eq!(grid_size_for_budget(42), 7);
        assert_eq!(grid_size_for_budget(41), 5);
        assert_eq!(grid_size_for_budget(16), 5);
        assert_eq!(grid_size_for_budget(15), 3);
        assert_eq!(grid_size_for_budget(0), 3);
    }

    #[test]
    fn grid_size_is_always_odd() {
        for inter_lod in 1..=MAX_SHELLS {
            assert_eq!(grid_size(inter_lod) % 2, 1, "inter_lod {inter_lod}");
        }
    }

    #[test]
    fn single_shell_uses_full_grid() {
        assert_eq!(grid_size(1), 11);
        assert_eq!(grid_size(MAX_SHELLS), 3);
    }

    #[test]
    fn zero_shells_does_not_divide_by_zero() {
        assert_eq!(grid_size(0), grid_size(1));
    }
}
