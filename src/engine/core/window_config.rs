use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PresentMode, WindowResolution};

use crate::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

/// Primary window: fixed size and title, vsync, cursor captured from the
/// first frame so the ride starts immediately.
pub fn create_window_config() -> Window {
    Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        present_mode: PresentMode::AutoVsync,
        cursor_options: CursorOptions {
            grab_mode: CursorGrabMode::Locked,
            visible: false,
            ..default()
        },
        ..default()
    }
}
