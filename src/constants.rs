/// Shared compile-time configuration for the demo
use bevy::math::Vec3;

/// Primary window size in logical pixels
pub const WINDOW_WIDTH: f32 = 1600.0;
pub const WINDOW_HEIGHT: f32 = 900.0;

/// Primary window title
pub const WINDOW_TITLE: &str = "ZBoard";

/// Vertical field of view of the demo camera (degrees)
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Waypoints the camera rides along, treated as a cyclic loop
pub const MAIN_PATH: [Vec3; 4] = [
    Vec3::new(0.0, 3.0, -10.0), // start behind
    Vec3::new(0.0, 3.0, 0.0),   // forward to centre
    Vec3::new(10.0, 3.0, 0.0),  // turn right
    Vec3::new(10.0, 3.0, 10.0), // end forward
];

/// Path parameter advance per second (waypoint segments per second)
pub const PATH_SPEED: f32 = 0.1;

/// Look rotation per pixel of mouse motion (radians)
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch is clamped to ±this angle so the camera cannot flip over (radians)
pub const PITCH_LIMIT: f32 = 1.5;

/// Ground grid half-width from the origin (metres) and cell size
pub const GRID_HALF_EXTENT: f32 = 20.0;
pub const GRID_CELL_SIZE: f32 = 1.0;

/// Length of the world axis indicator lines at the origin
pub const AXIS_LENGTH: f32 = 3.0;

/// Font sizes for the debug overlay readouts
pub const DEBUG_FONT_SIZE: f32 = 22.0;
pub const FPS_FONT_SIZE: f32 = 16.0;
