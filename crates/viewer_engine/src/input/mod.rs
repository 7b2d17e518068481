//! Keyboard-to-camera dispatch
//!
//! Key events are translated into a closed set of [`CameraAction`]s and the
//! actions are applied to the camera with fixed per-keypress steps. Known
//! limitation: the steps are not scaled by frame time, so movement speed
//! follows the key repeat rate.

use crate::render::Camera;

/// World units moved per translation keypress
pub const TRANSLATE_STEP: f32 = 10.0;

/// Degrees rotated per rotation keypress
pub const ROTATE_STEP_DEGREES: f32 = 5.0;

/// One camera mutation triggered by a keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAction {
    /// Translate along the view direction
    MoveForward,
    /// Translate against the view direction
    MoveBackward,
    /// Translate along the horizontal direction
    StrafeLeft,
    /// Translate against the horizontal direction
    StrafeRight,
    /// Translate along the camera-local up direction
    MoveUp,
    /// Translate against the camera-local up direction
    MoveDown,
    /// Turn left around the world Y axis
    YawLeft,
    /// Turn right around the world Y axis
    YawRight,
    /// Look up
    PitchUp,
    /// Look down
    PitchDown,
    /// Restore the default eye point and clear both angles
    Reset,
}

/// Map a key to its camera action, if it has one.
///
/// W/S move along the view axis, A/D strafe, Q/E move vertically, the
/// arrow keys rotate, and R resets the camera.
#[must_use]
pub fn action_for_key(key: glfw::Key) -> Option<CameraAction> {
    match key {
        glfw::Key::W => Some(CameraAction::MoveForward),
        glfw::Key::S => Some(CameraAction::MoveBackward),
        glfw::Key::A => Some(CameraAction::StrafeLeft),
        glfw::Key::D => Some(CameraAction::StrafeRight),
        glfw::Key::Q => Some(CameraAction::MoveUp),
        glfw::Key::E => Some(CameraAction::MoveDown),
        glfw::Key::Left => Some(CameraAction::YawLeft),
        glfw::Key::Right => Some(CameraAction::YawRight),
        glfw::Key::Up => Some(CameraAction::PitchUp),
        glfw::Key::Down => Some(CameraAction::PitchDown),
        glfw::Key::R => Some(CameraAction::Reset),
        _ => None,
    }
}

/// Apply one action to the camera.
pub fn apply_action(camera: &mut Camera, action: CameraAction) {
    match action {
        CameraAction::MoveForward => {
            camera.translate_eye_point(camera.view_direction() * TRANSLATE_STEP);
        }
        CameraAction::MoveBackward => {
            camera.translate_eye_point(camera.view_direction() * -TRANSLATE_STEP);
        }
        CameraAction::StrafeLeft => {
            camera.translate_eye_point(camera.horizontal_direction() * TRANSLATE_STEP);
        }
        CameraAction::StrafeRight => {
            camera.translate_eye_point(camera.horizontal_direction() * -TRANSLATE_STEP);
        }
        CameraAction::MoveUp => {
            camera.translate_eye_point(camera.up_direction() * TRANSLATE_STEP);
        }
        CameraAction::MoveDown => {
            camera.translate_eye_point(camera.up_direction() * -TRANSLATE_STEP);
        }
        CameraAction::YawLeft => camera.rotate_yaw(ROTATE_STEP_DEGREES),
        CameraAction::YawRight => camera.rotate_yaw(-ROTATE_STEP_DEGREES),
        CameraAction::PitchUp => camera.rotate_pitch(ROTATE_STEP_DEGREES),
        CameraAction::PitchDown => camera.rotate_pitch(-ROTATE_STEP_DEGREES),
        CameraAction::Reset => camera.reset(),
    }
}

/// True for the key actions that trigger camera dispatch.
///
/// Releases are ignored; holding a key moves the camera through OS key
/// repeat.
#[must_use]
pub fn is_dispatching_action(action: glfw::Action) -> bool {
    matches!(action, glfw::Action::Press | glfw::Action::Repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::ProjectionKind;
    use approx::assert_relative_eq;

    fn test_camera() -> Camera {
        let mut camera = Camera::new(ProjectionKind::Perspective);
        camera.set_eye_point(Vec3::new(0.0, 0.0, 500.0));
        camera
    }

    #[test]
    fn movement_keys_map_to_actions() {
        assert_eq!(action_for_key(glfw::Key::W), Some(CameraAction::MoveForward));
        assert_eq!(action_for_key(glfw::Key::S), Some(CameraAction::MoveBackward));
        assert_eq!(action_for_key(glfw::Key::A), Some(CameraAction::StrafeLeft));
        assert_eq!(action_for_key(glfw::Key::D), Some(CameraAction::StrafeRight));
        assert_eq!(action_for_key(glfw::Key::Q), Some(CameraAction::MoveUp));
        assert_eq!(action_for_key(glfw::Key::E), Some(CameraAction::MoveDown));
        assert_eq!(action_for_key(glfw::Key::Left), Some(CameraAction::YawLeft));
        assert_eq!(action_for_key(glfw::Key::Right), Some(CameraAction::YawRight));
        assert_eq!(action_for_key(glfw::Key::Up), Some(CameraAction::PitchUp));
        assert_eq!(action_for_key(glfw::Key::Down), Some(CameraAction::PitchDown));
        assert_eq!(action_for_key(glfw::Key::R), Some(CameraAction::Reset));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(action_for_key(glfw::Key::Space), None);
        assert_eq!(action_for_key(glfw::Key::Escape), None);
        assert_eq!(action_for_key(glfw::Key::F1), None);
    }

    #[test]
    fn releases_do_not_dispatch() {
        assert!(is_dispatching_action(glfw::Action::Press));
        assert!(is_dispatching_action(glfw::Action::Repeat));
        assert!(!is_dispatching_action(glfw::Action::Release));
    }

    #[test]
    fn translations_move_eye_and_leave_angles() {
        let translations = [
            CameraAction::MoveForward,
            CameraAction::MoveBackward,
            CameraAction::StrafeLeft,
            CameraAction::StrafeRight,
            CameraAction::MoveUp,
            CameraAction::MoveDown,
        ];
        for action in translations {
            let mut camera = test_camera();
            apply_action(&mut camera, action);
            assert_ne!(camera.eye_point(), test_camera().eye_point(), "{action:?}");
            assert_relative_eq!(camera.yaw(), 0.0);
            assert_relative_eq!(camera.pitch(), 0.0);
        }
    }

    #[test]
    fn rotations_change_one_angle_and_leave_eye() {
        let mut camera = test_camera();
        apply_action(&mut camera, CameraAction::YawLeft);
        assert_relative_eq!(camera.yaw(), ROTATE_STEP_DEGREES);
        assert_relative_eq!(camera.pitch(), 0.0);
        assert_relative_eq!(camera.eye_point(), test_camera().eye_point());

        let mut camera = test_camera();
        apply_action(&mut camera, CameraAction::PitchDown);
        assert_relative_eq!(camera.pitch(), -ROTATE_STEP_DEGREES);
        assert_relative_eq!(camera.yaw(), 0.0);
        assert_relative_eq!(camera.eye_point(), test_camera().eye_point());
    }

    #[test]
    fn forward_moves_along_view_direction() {
        let mut camera = test_camera();
        apply_action(&mut camera, CameraAction::MoveForward);
        assert_relative_eq!(camera.eye_point(), Vec3::new(0.0, 0.0, 490.0));
    }

    #[test]
    fn reset_after_forward_restores_default_eye() {
        let mut camera = test_camera();
        apply_action(&mut camera, CameraAction::MoveForward);
        apply_action(&mut camera, CameraAction::Reset);
        assert_relative_eq!(camera.eye_point(), Camera::default_eye_point());
        assert_relative_eq!(camera.yaw(), 0.0);
        assert_relative_eq!(camera.pitch(), 0.0);
    }
}
