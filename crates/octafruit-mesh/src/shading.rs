//! CPU mirror of the fragment stage's fixed Blinn-Phong model.
//!
//! The fragment shader derives a flat normal from screen-space derivatives
//! of the recomputed view-space position; this module only mirrors the
//! lighting math itself so it can be checked against known normals.

use glam::{Vec3, Vec4};

/// Headlight direction of propagation: from the camera into the scene,
/// which is -Z in view space.
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const AMBIENT_COLOR: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const DIFFUSE_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
/// RGB specular color, exponent in w.
pub const SPECULAR_EXPONENT: Vec4 = Vec4::new(1.0, 1.0, 1.0, 128.0);
pub const TEXTURE_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Shade a view-space surface point with the fixed light rig.
///
/// `normal` is expected to face the camera (positive Z component for
/// visible fragments), matching what the fragment shader derives from
/// screen-space derivatives.
pub fn shade(normal: Vec3, view_pos: Vec3) -> Vec3 {
    let l = (-LIGHT_DIRECTION).normalize();
    let n = normal.normalize();
    let v = (-view_pos).normalize();
    let h = (l + v).normalize();

    let diffuse = n.dot(l).max(0.0);
    let specular = n.dot(h).max(0.0).powf(SPECULAR_EXPONENT.w);

    AMBIENT_COLOR + diffuse * DIFFUSE_COLOR * TEXTURE_COLOR + specular * SPECULAR_EXPONENT.truncate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_the_camera_is_fully_lit() {
        // Camera-facing normal, fragment straight ahead of the camera. The
        // headlight, view and half vectors all line up with the normal.
        let color = shade(Vec3::Z, Vec3::new(0.0, 0.0, -2.0));
        assert!((color.x - 2.0).abs() < 1e-5, "{color:?}");
        assert!((color.y - 1.0).abs() < 1e-5);
        assert!((color.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn facing_away_is_black() {
        let color = shade(Vec3::NEG_Z, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn grazing_normal_has_no_diffuse() {
        let color = shade(Vec3::X, Vec3::new(0.0, 0.0, -2.0));
        // Diffuse vanishes; the remaining specular term is grey, so the
        // red channel cannot exceed blue.
        assert_eq!(color.x, color.z);
        assert_eq!(color.y, color.z);
    }

    #[test]
    fn specular_follows_the_fragment_view_position() {
        // Two fragments with the same camera-facing normal: the one
        // straight ahead of the camera catches the full highlight, the
        // one shifted along x does not.
        let ahead = shade(Vec3::Z, Vec3::new(0.0, 0.0, -2.0));
        let shifted = shade(Vec3::Z, Vec3::new(5.0, 0.0, -2.0));
        assert!(shifted.x < ahead.x, "{shifted:?} vs {ahead:?}");
    }

    #[test]
    fn ambient_is_black() {
        assert_eq!(AMBIENT_COLOR, Vec3::ZERO);
    }
}
