use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::{DEBUG_FONT_SIZE, FPS_FONT_SIZE};
use crate::engine::camera::rails_camera::RailsCamera;

#[derive(Component)]
pub struct CursorReadout;

#[derive(Component)]
pub struct PathTimeReadout;

#[derive(Component)]
pub struct FpsText;

pub fn format_cursor_readout(position: Vec2) -> String {
    format!("x: {:.0}, y: {:.0}", position.x, position.y)
}

pub fn format_path_time_readout(path_time: f32) -> String {
    format!("path_time: {path_time:.3}")
}

/// Spawn the overlay text nodes: readouts in the top-left corner, FPS in the
/// bottom-right.
pub fn spawn_debug_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("x: 0, y: 0"),
                TextFont {
                    font_size: DEBUG_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::BLACK),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(10.0),
                    left: Val::Px(10.0),
                    ..default()
                },
                CursorReadout,
            ));

            parent.spawn((
                Text::new("path_time: 0.000"),
                TextFont {
                    font_size: DEBUG_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::BLACK),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(30.0),
                    left: Val::Px(10.0),
                    ..default()
                },
                PathTimeReadout,
            ));

            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: FPS_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

/// Refresh the cursor readout. While the cursor is grabbed there may be no
/// cursor position, in which case the last shown value is kept.
pub fn cursor_readout_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut Text, With<CursorReadout>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(position) = window.cursor_position() {
        for mut text in &mut query {
            text.0 = format_cursor_readout(position);
        }
    }
}

pub fn path_time_readout_system(
    rails: Res<RailsCamera>,
    mut query: Query<&mut Text, With<PathTimeReadout>>,
) {
    for mut text in &mut query {
        text.0 = format_path_time_readout(rails.path_time);
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
