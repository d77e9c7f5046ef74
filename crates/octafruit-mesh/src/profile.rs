//! Bezier profile curves.
//!
//! The profile runs from the south pole (t = 0) to the north pole (t = 1)
//! and defines the silhouette that gets swept around the equator.

use glam::Vec3;

/// Default control points, a gentle pear-like silhouette.
pub const DEFAULT_CONTROL_POINTS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, -0.3),
    Vec3::new(1.0, 0.0, -0.7),
    Vec3::new(1.0, 0.0, 0.3),
    Vec3::new(0.0, 0.0, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// Cubic Bezier over all four control points.
    #[default]
    Cubic,
    /// Legacy quadratic Bezier over the first three control points.
    Quadratic,
}

impl CurveMode {
    /// Encoding used in the generator shader's uniform block.
    pub fn as_u32(self) -> u32 {
        match self {
            CurveMode::Cubic => 0,
            CurveMode::Quadratic => 1,
        }
    }
}

/// A profile curve over four UI-editable control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveProfile {
    pub points: [Vec3; 4],
    pub mode: CurveMode,
}

impl Default for CurveProfile {
    fn default() -> Self {
        Self {
            points: DEFAULT_CONTROL_POINTS,
            mode: CurveMode::Cubic,
        }
    }
}

impl CurveProfile {
    pub fn new(points: [Vec3; 4], mode: CurveMode) -> Self {
        Self { points, mode }
    }

    /// Evaluate the profile at `t` in `[0, 1]`.
    pub fn eval(&self, t: f32) -> Vec3 {
        match self.mode {
            CurveMode::Cubic => self.eval_cubic(t),
            CurveMode::Quadratic => self.eval_quadratic(t),
        }
    }

    /// Cubic Bezier in expanded polynomial form.
    ///
    /// At t = 0 only the constant term survives, so the start point is exact.
    fn eval_cubic(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, p3] = self.points;
        let t_sq = t * t;
        let t_cu = t_sq * t;
        p0 + t * (-3.0 * p0 + 3.0 * p1)
            + t_sq * (3.0 * p0 - 6.0 * p1 + 3.0 * p2)
            + t_cu * (-p0 + 3.0 * p1 - 3.0 * p2 + p3)
    }

    /// Quadratic Bezier by repeated interpolation over the first three points.
    fn eval_quadratic(&self, t: f32) -> Vec3 {
        let [p0, p1, p2, _] = self.points;
        let a = p0.lerp(p1, t);
        let b = p1.lerp(p2, t);
        a.lerp(b, t)
    }

    /// The curve point at t = 0.
    pub fn start(&self) -> Vec3 {
        self.points[0]
    }

    /// The curve point at t = 1.
    pub fn end(&self) -> Vec3 {
        match self.mode {
            CurveMode::Cubic => self.points[3],
            CurveMode::Quadratic => self.points[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_endpoints() {
        let profile = CurveProfile::default();
        // t = 0 leaves only the constant term, so it is bit-exact.
        assert_eq!(profile.eval(0.0), profile.points[0]);
        assert!(profile.eval(1.0).abs_diff_eq(profile.points[3], 1e-6));
    }

    #[test]
    fn quadratic_endpoints() {
        let profile = CurveProfile::new(DEFAULT_CONTROL_POINTS, CurveMode::Quadratic);
        assert_eq!(profile.eval(0.0), profile.points[0]);
        assert!(profile.eval(1.0).abs_diff_eq(profile.points[2], 1e-6));
    }

    #[test]
    fn cubic_midpoint_matches_de_casteljau() {
        let profile = CurveProfile::default();
        let [p0, p1, p2, p3] = profile.points;
        let t = 0.37;

        let a = p0.lerp(p1, t);
        let b = p1.lerp(p2, t);
        let c = p2.lerp(p3, t);
        let ab = a.lerp(b, t);
        let bc = b.lerp(c, t);
        let expected = ab.lerp(bc, t);

        assert!(profile.eval(t).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn quadratic_ignores_fourth_point() {
        let mut a = CurveProfile::new(DEFAULT_CONTROL_POINTS, CurveMode::Quadratic);
        let mut b = a;
        a.points[3] = Vec3::splat(100.0);
        b.points[3] = Vec3::splat(-100.0);
        assert_eq!(a.eval(0.5), b.eval(0.5));
    }
}
