use glam::{Mat4, Vec3};

const MIN_DISTANCE: f32 = 0.05;
const MAX_DISTANCE: f32 = 500.0;
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// An examiner style camera orbiting a target point.
///
/// Yaw and pitch are in radians. The projection is right handed with a
/// zero-to-one depth range, matching wgpu's clip space.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance,
            fov_y_degrees: 45.0,
            aspect,
            near: 0.0001,
            far: 10000.0,
        }
    }

    /// Orbit around the target. `delta` is in radians (yaw, pitch).
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Move the target in the camera's right/up plane.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        self.target += right * delta_x + up * delta_y;
    }

    /// Dolly toward or away from the target.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let offset = Vec3::new(
            sin_yaw * cos_pitch,
            sin_pitch,
            cos_yaw * cos_pitch,
        ) * self.distance;

        self.target + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_are_finite() {
        let mut camera = OrbitCamera::new(3.0, 16.0 / 9.0);
        camera.rotate(1.3, -0.7);
        camera.pan(0.25, -0.1);

        let vp = camera.view_projection_matrix();
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = OrbitCamera::new(3.0, 1.0);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);

        camera.zoom(-10000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn rotation_preserves_distance() {
        let mut camera = OrbitCamera::new(4.0, 1.0);
        camera.rotate(2.1, 0.4);

        let distance = (camera.position() - camera.target).length();
        assert!((distance - 4.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_pole() {
        let mut camera = OrbitCamera::new(3.0, 1.0);
        camera.rotate(0.0, 10.0);
        assert!(camera.pitch < std::f32::consts::FRAC_PI_2);
    }
}
