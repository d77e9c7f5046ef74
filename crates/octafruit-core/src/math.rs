//! Small math helpers shared by the mesh generator and shaders' CPU mirrors.

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_endpoints_are_exact() {
        assert_eq!(remap(0.0, 0.0, 10.0, -1.0, 1.0), -1.0);
        assert_eq!(remap(10.0, 0.0, 10.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn remap_midpoint() {
        assert_eq!(remap(5.0, 0.0, 10.0, -1.0, 1.0), 0.0);
        assert_eq!(remap(2.0, 0.0, 4.0, 0.0, 1.0), 0.5);
    }

    #[test]
    fn remap_inverted_range() {
        assert_eq!(remap(0.0, 0.0, 1.0, 1.0, -1.0), 1.0);
        assert_eq!(remap(1.0, 0.0, 1.0, 1.0, -1.0), -1.0);
    }
}
