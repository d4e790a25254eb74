use bevy::{
    input::mouse::MouseMotion,
    prelude::*,
    window::{CursorGrabMode, PrimaryWindow},
};
use thiserror::Error;

use crate::constants::{MOUSE_SENSITIVITY, PITCH_LIMIT};

#[derive(Debug, Error)]
pub enum PathError {
    #[error("waypoint path must contain at least one point")]
    EmptyPath,
}

/// Capture state of the ride. While `Released` the path and look angles are
/// frozen so the OS cursor can be used for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Captured,
    Released,
}

#[derive(Resource)]
pub struct RailsCamera {
    path: Vec<Vec3>,
    pub path_time: f32,
    pub speed: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub capture: CaptureState,
}

impl RailsCamera {
    /// Build a rails camera riding the given cyclic waypoint path.
    ///
    /// The path is validated here once; `advance` assumes it is non-empty.
    pub fn new(path: Vec<Vec3>, speed: f32) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let position = path[0];
        let mut camera = Self {
            path,
            path_time: 0.0,
            speed,
            yaw: 0.0,
            pitch: 0.0,
            position,
            target: position,
            capture: CaptureState::Captured,
        };
        camera.target = camera.position + camera.look_direction();
        Ok(camera)
    }

    pub fn is_captured(&self) -> bool {
        self.capture == CaptureState::Captured
    }

    pub fn toggle_capture(&mut self) {
        self.capture = match self.capture {
            CaptureState::Captured => CaptureState::Released,
            CaptureState::Released => CaptureState::Captured,
        };
    }

    /// View direction from the accumulated yaw/pitch angles.
    ///
    /// Yaw rotates around the vertical axis, pitch is elevation; both in
    /// radians.
    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        )
    }

    /// Advance the ride by one frame and return the new (position, target).
    ///
    /// While `Released` this is a no-op returning the previously computed
    /// pose; mouse deltas accumulated in that state are discarded.
    pub fn advance(&mut self, delta_time: f32, mouse_delta: Vec2) -> (Vec3, Vec3) {
        if !self.is_captured() {
            return (self.position, self.target);
        }

        self.path_time += delta_time * self.speed;
        let segment = self.path_time as usize % self.path.len();
        let t = self.path_time.fract();

        self.yaw += mouse_delta.x * MOUSE_SENSITIVITY;
        // Inverted so upward mouse motion looks up
        self.pitch -= mouse_delta.y * MOUSE_SENSITIVITY;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let next = (segment + 1) % self.path.len();
        self.position = self.path[segment].lerp(self.path[next], t);
        self.target = self.position + self.look_direction();

        (self.position, self.target)
    }
}

/// Per-frame camera update: drain mouse motion, advance the ride, and write
/// the resulting pose to the camera transform.
pub fn rails_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut rails: ResMut<RailsCamera>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    let (position, target) = rails.advance(time.delta_secs(), mouse_delta);

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = Transform::from_translation(position).looking_at(target, Vec3::Y);
    }
}

/// Toggle capture on F9 and apply the cursor grab side effect.
pub fn capture_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut rails: ResMut<RailsCamera>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if keyboard.just_pressed(KeyCode::F9) {
        rails.toggle_capture();
        if let Ok(mut window) = windows.single_mut() {
            apply_cursor_capture(&mut window, rails.is_captured());
        }
    }
}

pub fn apply_cursor_capture(window: &mut Window, captured: bool) {
    if captured {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_path() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 3.0, -10.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(10.0, 3.0, 0.0),
            Vec3::new(10.0, 3.0, 10.0),
        ]
    }

    fn demo_camera(speed: f32) -> RailsCamera {
        RailsCamera::new(demo_path(), speed).unwrap()
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            RailsCamera::new(Vec::new(), 0.1),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn path_time_never_decreases() {
        let mut camera = demo_camera(0.1);
        let mut previous = camera.path_time;
        for delta_time in [0.0, 0.016, 0.5, 0.0, 3.0] {
            camera.advance(delta_time, Vec2::ZERO);
            assert!(camera.path_time >= previous);
            previous = camera.path_time;
        }
    }

    #[test]
    fn pitch_stays_within_limits() {
        let mut camera = demo_camera(0.1);
        for delta_y in [10_000.0, -50_000.0, 123.0, -0.5, 99_999.0] {
            camera.advance(0.016, Vec2::new(0.0, delta_y));
            assert!(camera.pitch >= -PITCH_LIMIT && camera.pitch <= PITCH_LIMIT);
        }
    }

    #[test]
    fn position_is_continuous_across_waypoints() {
        // Just before the boundary the position approaches the waypoint the
        // next segment starts from.
        let mut camera = demo_camera(1.0);
        camera.advance(0.9999, Vec2::ZERO);
        assert_relative_eq!(camera.position.z, 0.0, epsilon = 1e-2);

        let mut camera = demo_camera(1.0);
        let (position, _) = camera.advance(1.0, Vec2::ZERO);
        assert_relative_eq!(position.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(position.y, 3.0, epsilon = 1e-5);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn path_wraps_after_last_segment() {
        let mut camera = demo_camera(1.0);
        let (wrapped, _) = camera.advance(4.0, Vec2::ZERO);
        let start = demo_path()[0];
        assert_relative_eq!(wrapped.x, start.x, epsilon = 1e-5);
        assert_relative_eq!(wrapped.y, start.y, epsilon = 1e-5);
        assert_relative_eq!(wrapped.z, start.z, epsilon = 1e-5);
    }

    #[test]
    fn released_camera_holds_its_pose() {
        let mut camera = demo_camera(0.1);
        camera.advance(1.0, Vec2::new(40.0, -25.0));
        let held_position = camera.position;
        let held_target = camera.target;
        let held_time = camera.path_time;

        camera.toggle_capture();
        for _ in 0..5 {
            let (position, target) = camera.advance(100.0, Vec2::new(999.0, 999.0));
            assert_eq!(position, held_position);
            assert_eq!(target, held_target);
        }
        assert_eq!(camera.path_time, held_time);
    }

    #[test]
    fn capture_toggle_is_symmetric() {
        let mut camera = demo_camera(0.1);
        assert!(camera.is_captured());
        camera.toggle_capture();
        assert!(!camera.is_captured());
        camera.toggle_capture();
        assert!(camera.is_captured());
    }

    #[test]
    fn one_long_frame_reaches_second_waypoint() {
        // speed 0.1 for 10 simulated seconds lands exactly on path_time 1.0.
        let mut camera = demo_camera(0.1);
        let (position, _) = camera.advance(10.0, Vec2::ZERO);
        assert_relative_eq!(camera.path_time, 1.0, epsilon = 1e-5);
        assert_relative_eq!(position.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(position.y, 3.0, epsilon = 1e-4);
        assert_relative_eq!(position.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn look_direction_follows_yaw() {
        let mut camera = demo_camera(0.1);
        let level = camera.look_direction();
        assert_relative_eq!(level.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(level.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(level.z, 0.0, epsilon = 1e-6);

        // 500 px at 0.002 rad/px turns exactly one radian.
        camera.advance(0.0, Vec2::new(500.0, 0.0));
        let turned = camera.look_direction();
        assert_relative_eq!(turned.x, 1.0_f32.cos(), epsilon = 1e-4);
        assert_relative_eq!(turned.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(turned.z, 1.0_f32.sin(), epsilon = 1e-4);
    }

    #[test]
    fn target_stays_one_look_direction_from_position() {
        let mut camera = demo_camera(0.1);
        camera.advance(0.25, Vec2::new(120.0, -80.0));
        let expected = camera.position + camera.look_direction();
        assert_relative_eq!(camera.target.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(camera.target.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(camera.target.z, expected.z, epsilon = 1e-6);
    }
}
