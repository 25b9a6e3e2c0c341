use glam::{Mat3, Mat4, Quat, Vec3};

/// Perspective camera carried by the viewer.
///
/// Orientation is a quaternion; the camera looks down its local -Z with +Y
/// up. Translation helpers move along the local axes, so "forward" always
/// means the current view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerCamera {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ViewerCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 1.0,
            far: 10_000.0,
        }
    }
}

impl ViewerCamera {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            aspect,
            ..Self::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Move by `local`, expressed in the camera's own axes.
    pub fn translate_local(&mut self, local: Vec3) {
        self.position += self.rotation * local;
    }

    pub fn translate_x(&mut self, distance: f32) {
        self.translate_local(Vec3::new(distance, 0.0, 0.0));
    }

    pub fn translate_y(&mut self, distance: f32) {
        self.translate_local(Vec3::new(0.0, distance, 0.0));
    }

    pub fn translate_z(&mut self, distance: f32) {
        self.translate_local(Vec3::new(0.0, 0.0, distance));
    }

    /// Orient the camera toward `target`, keeping world +Y as up.
    ///
    /// Returns false and leaves the orientation unchanged when `target`
    /// coincides with the camera position.
    pub fn look_at(&mut self, target: Vec3) -> bool {
        let back = self.position - target;
        if back.length_squared() <= f32::EPSILON {
            return false;
        }
        let z = back.normalize();
        let mut x = Vec3::Y.cross(z);
        if x.length_squared() <= f32::EPSILON {
            // Looking straight up or down: any horizontal right axis works.
            x = Vec3::X;
        }
        let x = x.normalize();
        let y = z.cross(x);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize();
        true
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn default_camera() {
        let cam = ViewerCamera::default();
        assert_eq!(cam.forward(), Vec3::NEG_Z);
        let vp = cam.view_projection();
        // Should produce a valid matrix (no NaN)
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut cam = ViewerCamera::new(Vec3::new(50.0, 0.0, 50.0), 1.0);
        assert!(cam.look_at(Vec3::new(20480.0, 0.0, 0.0)));
        let expected = (Vec3::new(20480.0, 0.0, 0.0) - cam.position).normalize();
        assert!((cam.forward() - expected).length() < EPS);
        assert!(cam.up().y > 0.99);
    }

    #[test]
    fn look_at_own_position_is_rejected() {
        let mut cam = ViewerCamera::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
        let before = cam.rotation;
        assert!(!cam.look_at(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(cam.rotation, before);
    }

    #[test]
    fn look_straight_down_stays_finite() {
        let mut cam = ViewerCamera::new(Vec3::new(0.0, 100.0, 0.0), 1.0);
        assert!(cam.look_at(Vec3::ZERO));
        assert!((cam.forward() - Vec3::NEG_Y).length() < EPS);
        assert!(cam.rotation.is_finite());
    }

    #[test]
    fn forward_translation_follows_orientation() {
        for target in [
            Vec3::new(1000.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1000.0),
            Vec3::new(-700.0, 0.0, 700.0),
        ] {
            let mut cam = ViewerCamera::new(Vec3::new(50.0, 0.0, 50.0), 1.0);
            cam.look_at(target);
            let start = cam.position;
            let forward = cam.forward();
            cam.translate_z(-30.0);
            let moved = cam.position - start;
            assert!((moved.length() - 30.0).abs() < EPS);
            assert!((moved.dot(forward) - 30.0).abs() < EPS);
        }
    }

    #[test]
    fn strafe_and_ascend_use_local_axes() {
        let mut cam = ViewerCamera::new(Vec3::ZERO, 1.0);
        cam.look_at(Vec3::new(0.0, 0.0, 1000.0));
        cam.translate_x(30.0);
        // facing +Z, right is -X
        assert!((cam.position - Vec3::new(-30.0, 0.0, 0.0)).length() < EPS);
        cam.translate_y(60.0);
        assert!((cam.position.y - 60.0).abs() < EPS);
    }

    #[test]
    fn view_matrix_maps_position_to_origin() {
        let mut cam = ViewerCamera::new(Vec3::new(5.0, 6.0, 7.0), 1.0);
        cam.look_at(Vec3::new(100.0, 0.0, 0.0));
        let p = cam.view_matrix().transform_point3(cam.position);
        assert!(p.length() < EPS);
    }
}
