//! Sweeping the profile curve around the equator.

use glam::{Vec2, Vec3};

use crate::octa::sign_not_zero;
use crate::profile::CurveProfile;

/// Rotate `point.xy` around the Z axis to the azimuth of `dir`.
///
/// The sine/cosine pair comes from normalizing `dir.yx`; the cosine is then
/// re-derived from the sine so the pair stays on the unit circle even when
/// `dir` is not perfectly normalized. At the poles (`dir.xy` ~ 0) the
/// azimuth is undefined and the point is returned unrotated.
pub fn equator_rotate(dir: Vec3, point: Vec3) -> Vec3 {
    let Some(sc) = Vec2::new(dir.y, dir.x).try_normalize() else {
        return point;
    };
    let sin = sc.x.clamp(-1.0, 1.0);
    let cos = (1.0 - sin * sin).sqrt() * sign_not_zero(sc.y);

    Vec3::new(
        cos * point.x - sin * point.y,
        sin * point.x + cos * point.y,
        point.z,
    )
}

/// Evaluate the warped surface point for a unit direction.
///
/// `dir.z` selects the curve parameter (south pole maps to t = 0, north
/// pole to t = 1), and the resulting profile point is swept to the
/// direction's azimuth.
pub fn warp_direction(profile: &CurveProfile, dir: Vec3) -> Vec3 {
    let t = (dir.z + 1.0) / 2.0;
    equator_rotate(dir, profile.eval(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::CurveMode;

    #[test]
    fn poles_evaluate_to_curve_endpoints() {
        let profile = CurveProfile::default();
        assert_eq!(warp_direction(&profile, Vec3::NEG_Z), profile.start());
        assert!(warp_direction(&profile, Vec3::Z).abs_diff_eq(profile.end(), 1e-6));
    }

    #[test]
    fn rotation_preserves_radius() {
        let profile = CurveProfile::default();
        for dir in [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::new(0.7, 0.7, 0.14).normalize(),
        ] {
            let p = warp_direction(&profile, dir);
            let t = (dir.z + 1.0) / 2.0;
            let unrotated = profile.eval(t);
            assert!(
                (p.truncate().length() - unrotated.truncate().length()).abs() < 1e-5,
                "dir {dir:?}"
            );
            assert!((p.z - unrotated.z).abs() < 1e-6);
        }
    }

    #[test]
    fn equator_point_on_positive_x_is_unrotated() {
        // dir = +X means azimuth zero, the rotation must be the identity.
        let point = Vec3::new(0.8, 0.0, 0.25);
        let rotated = equator_rotate(Vec3::X, point);
        assert!(rotated.abs_diff_eq(point, 1e-6));
    }

    #[test]
    fn opposite_azimuths_mirror_the_point() {
        let point = Vec3::new(0.8, 0.0, 0.25);
        let pos = equator_rotate(Vec3::Y, point);
        let neg = equator_rotate(Vec3::NEG_Y, point);
        assert!(pos.abs_diff_eq(Vec3::new(0.0, 0.8, 0.25), 1e-5), "{pos:?}");
        assert!(neg.abs_diff_eq(Vec3::new(0.0, -0.8, 0.25), 1e-5), "{neg:?}");
    }

    #[test]
    fn quadratic_profile_pole_matches_third_point() {
        let profile =
            CurveProfile::new(crate::profile::DEFAULT_CONTROL_POINTS, CurveMode::Quadratic);
        assert!(warp_direction(&profile, Vec3::Z).abs_diff_eq(profile.points[2], 1e-6));
    }
}
