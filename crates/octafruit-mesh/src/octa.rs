//! Octahedral sphere parameterization.

use glam::{Vec2, Vec3};
use octafruit_core::math::remap;

/// +1 for non-negative values, -1 otherwise. Never returns 0.
#[inline]
pub fn sign_not_zero(k: f32) -> f32 {
    if k >= 0.0 { 1.0 } else { -1.0 }
}

/// Component-wise [`sign_not_zero`].
#[inline]
pub fn sign_not_zero2(v: Vec2) -> Vec2 {
    Vec2::new(sign_not_zero(v.x), sign_not_zero(v.y))
}

/// Map a grid index in `[0, n - 1]` to an octahedral coordinate in `[-1, 1]`.
#[inline]
pub fn grid_coord(i: u32, n: u32) -> f32 {
    remap(i as f32, 0.0, (n - 1) as f32, -1.0, 1.0)
}

/// Decode an octahedral coordinate to a unit direction on the sphere.
///
/// The lower hemisphere (z < 0) is folded back over the diamond edge before
/// normalizing, so the whole `[-1, 1]^2` square covers the sphere.
pub fn oct_decode(o: Vec2) -> Vec3 {
    let mut v = Vec3::new(o.x, o.y, 1.0 - o.x.abs() - o.y.abs());
    if v.z < 0.0 {
        let folded = (Vec2::ONE - Vec2::new(v.y.abs(), v.x.abs())) * sign_not_zero2(v.truncate());
        v.x = folded.x;
        v.y = folded.y;
    }
    v.normalize()
}

/// Decode grid cell `(x, y)` of an `n x n` grid to a unit direction.
#[inline]
pub fn decode_cell(x: u32, y: u32, n: u32) -> Vec3 {
    oct_decode(Vec2::new(grid_coord(x, n), grid_coord(y, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_unit_length_for_all_grids() {
        for n in [3, 5, 7, 9, 11] {
            for y in 0..n {
                for x in 0..n {
                    let dir = decode_cell(x, y, n);
                    assert!(
                        (dir.length() - 1.0).abs() < 1e-6,
                        "n={n} cell=({x},{y}) len={}",
                        dir.length()
                    );
                }
            }
        }
    }

    #[test]
    fn center_decodes_to_positive_pole() {
        assert_eq!(oct_decode(Vec2::ZERO), Vec3::Z);
    }

    #[test]
    fn corners_decode_to_negative_pole() {
        for corner in [
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, -1.0),
        ] {
            let dir = oct_decode(corner);
            assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-6), "corner {corner:?} -> {dir:?}");
        }
    }

    #[test]
    fn fold_is_continuous_at_the_equator_edge() {
        // Sample two points just inside and just outside the fold line.
        let inner = oct_decode(Vec2::new(0.5, 0.4999));
        let outer = oct_decode(Vec2::new(0.5, 0.5001));
        assert!(inner.distance(outer) < 1e-3);
    }

    #[test]
    fn sign_not_zero_never_returns_zero() {
        assert_eq!(sign_not_zero(0.0), 1.0);
        assert_eq!(sign_not_zero(-0.0), 1.0);
        assert_eq!(sign_not_zero(f32::MIN_POSITIVE), 1.0);
        assert_eq!(sign_not_zero(-1.0), -1.0);
    }
}
