//! # Viewer Camera
//!
//! A yaw/pitch camera for inspecting a model from a movable eye point.
//!
//! ## Coordinate System
//! Standard right-handed Y-up coordinates:
//! - X+ = Right
//! - Y+ = Up
//! - Z+ = Towards the viewer
//!
//! With both angles at zero the camera looks down -Z, so the default eye
//! point `(0, 0, 500)` faces the origin.

use crate::foundation::math::{utils, Mat4, Point3, Vec3};

/// Projection kind selected at camera construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Perspective projection with a vertical field of view
    Perspective,
    /// Orthographic projection sized by the window dimensions
    Orthographic,
}

/// Camera with an eye point and yaw/pitch orientation
///
/// Orientation is stored as two angles in degrees rather than a quaternion;
/// the view basis is derived on demand. Matrix calculations are performed
/// on-demand rather than cached.
#[derive(Debug, Clone)]
pub struct Camera {
    kind: ProjectionKind,
    eye: Vec3,
    /// Rotation around the world Y axis, degrees
    yaw: f32,
    /// Rotation around the horizontal axis, degrees
    pitch: f32,
    fov: f32,
    width: f32,
    height: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// The eye point restored by [`reset`](Self::reset) and used at construction.
    #[must_use]
    pub fn default_eye_point() -> Vec3 {
        Vec3::new(0.0, 0.0, 500.0)
    }

    /// Create a camera of the given projection kind at the default eye point.
    #[must_use]
    pub fn new(kind: ProjectionKind) -> Self {
        Self {
            kind,
            eye: Self::default_eye_point(),
            yaw: 0.0,
            pitch: 0.0,
            fov: utils::deg_to_rad(45.0),
            width: 1024.0,
            height: 768.0,
            near: 1.0,
            far: 10_000.0,
        }
    }

    /// Set the near and far clip plane distances.
    pub fn set_clip_planes(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = utils::deg_to_rad(fov_degrees);
    }

    /// Update the logical window size, which drives the aspect ratio and the
    /// orthographic bounds. Called by the window layer on resize events.
    pub fn set_window_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Aspect ratio (width / height) of the last known window size.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Current eye point in world space.
    #[must_use]
    pub fn eye_point(&self) -> Vec3 {
        self.eye
    }

    /// Move the eye point to an absolute position.
    pub fn set_eye_point(&mut self, eye: Vec3) {
        self.eye = eye;
        log::trace!("Camera eye point set to {:?}", eye);
    }

    /// Move the eye point by a world-space offset.
    pub fn translate_eye_point(&mut self, offset: Vec3) {
        self.eye += offset;
    }

    /// Yaw angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Rotate around the world Y axis. Positive angles turn left.
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw += degrees;
    }

    /// Rotate around the horizontal axis. Positive angles look up.
    ///
    /// The pitch is clamped short of +-90 degrees so the view direction
    /// never collapses onto the world up axis.
    pub fn rotate_pitch(&mut self, degrees: f32) {
        self.pitch = (self.pitch + degrees).clamp(-89.0, 89.0);
    }

    /// Clear yaw and pitch, restoring the straight-down-minus-Z view.
    pub fn reset_angles(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// Restore the default eye point and clear both angles.
    pub fn reset(&mut self) {
        self.set_eye_point(Self::default_eye_point());
        self.reset_angles();
    }

    /// Unit vector the camera is looking along.
    #[must_use]
    pub fn view_direction(&self) -> Vec3 {
        let yaw = utils::deg_to_rad(self.yaw);
        let pitch = utils::deg_to_rad(self.pitch);
        Vec3::new(
            -yaw.sin() * pitch.cos(),
            pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }

    /// Unit vector pointing to the camera's left, parallel to the ground plane.
    #[must_use]
    pub fn horizontal_direction(&self) -> Vec3 {
        Vec3::y().cross(&self.view_direction()).normalize()
    }

    /// Unit vector completing the view basis (camera-local up).
    #[must_use]
    pub fn up_direction(&self) -> Vec3 {
        self.view_direction()
            .cross(&self.horizontal_direction())
            .normalize()
    }

    /// World-to-camera transformation matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let eye = Point3::from(self.eye);
        let target = Point3::from(self.eye + self.view_direction());
        Mat4::look_at_rh(&eye, &target, &self.up_direction())
    }

    /// Camera-to-clip transformation matrix for the configured projection kind.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.kind {
            ProjectionKind::Perspective => {
                Mat4::new_perspective(self.aspect_ratio(), self.fov, self.near, self.far)
            }
            ProjectionKind::Orthographic => Mat4::new_orthographic(
                -self.width / 2.0,
                self.width / 2.0,
                -self.height / 2.0,
                self.height / 2.0,
                self.near,
                self.far,
            ),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ProjectionKind::Perspective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert_relative_eq!(camera.view_direction(), Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(camera.eye_point(), Vec3::new(0.0, 0.0, 500.0));
    }

    #[test]
    fn view_basis_is_orthonormal() {
        let mut camera = Camera::default();
        camera.rotate_yaw(33.0);
        camera.rotate_pitch(-21.0);

        let view = camera.view_direction();
        let horizontal = camera.horizontal_direction();
        let up = camera.up_direction();

        assert_relative_eq!(view.norm(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(view.dot(&horizontal), 0.0, epsilon = 1e-5);
        assert_relative_eq!(view.dot(&up), 0.0, epsilon = 1e-5);
        assert_relative_eq!(horizontal.dot(&up), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn translate_moves_eye_by_offset() {
        let mut camera = Camera::default();
        camera.translate_eye_point(Vec3::new(1.0, -2.0, 3.0));
        assert_relative_eq!(camera.eye_point(), Vec3::new(1.0, -2.0, 503.0));
    }

    #[test]
    fn pitch_is_clamped_short_of_vertical() {
        let mut camera = Camera::default();
        camera.rotate_pitch(200.0);
        assert_relative_eq!(camera.pitch(), 89.0);
        camera.rotate_pitch(-500.0);
        assert_relative_eq!(camera.pitch(), -89.0);
        // Horizontal direction stays well defined at the clamp.
        assert_relative_eq!(camera.horizontal_direction().norm(), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn reset_restores_default_state() {
        let mut camera = Camera::default();
        camera.set_eye_point(Vec3::new(100.0, 50.0, -75.0));
        camera.rotate_yaw(45.0);
        camera.rotate_pitch(10.0);

        camera.reset();

        assert_relative_eq!(camera.eye_point(), Camera::default_eye_point());
        assert_relative_eq!(camera.yaw(), 0.0);
        assert_relative_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn window_size_drives_aspect_ratio() {
        let mut camera = Camera::default();
        camera.set_window_size(800.0, 600.0);
        assert_relative_eq!(camera.aspect_ratio(), 800.0 / 600.0);
    }

    #[test]
    fn orthographic_projection_uses_window_bounds() {
        let mut camera = Camera::new(ProjectionKind::Orthographic);
        camera.set_window_size(200.0, 100.0);
        let projection = camera.projection_matrix();
        // The X scale of an orthographic matrix is 2 / (right - left).
        assert_relative_eq!(projection[(0, 0)], 2.0 / 200.0, epsilon = 1e-6);
        assert_relative_eq!(projection[(1, 1)], 2.0 / 100.0, epsilon = 1e-6);
    }
}
