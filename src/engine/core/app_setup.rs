use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::constants::{CAMERA_FOV_DEGREES, MAIN_PATH, PATH_SPEED};
use crate::engine::camera::rails_camera::{
    RailsCamera, capture_toggle_system, rails_camera_controller,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::{cubes::spawn_demo_cubes, grid::spawn_world_grid};
use crate::engine::systems::debug_overlay::{
    cursor_readout_system, fps_text_update_system, path_time_readout_system, spawn_debug_overlay,
};

/// Build the demo application: window, diagnostics, rails camera resource,
/// scene setup and the per-frame update systems.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .insert_resource(ClearColor(Color::srgb_u8(245, 245, 245)))
        .insert_resource(build_rails_camera())
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                rails_camera_controller,
                capture_toggle_system,
                cursor_readout_system,
                path_time_readout_system,
                fps_text_update_system,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    DefaultPlugins.set(WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    })
}

/// The path is a compile-time constant, so an empty path is a build
/// configuration mistake worth failing fast on.
fn build_rails_camera() -> RailsCamera {
    RailsCamera::new(MAIN_PATH.to_vec(), PATH_SPEED)
        .expect("rails camera requires a non-empty waypoint path")
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("starting rails camera demo");

    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_demo_cubes(&mut commands, &mut meshes, &mut materials);
    spawn_world_grid(&mut commands, &mut meshes, &mut materials);
    spawn_debug_overlay(&mut commands);
}

/// Initial pose before the first ride update: just outside the maroon cube,
/// looking down the negative Z axis.
fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 8.0).looking_at(Vec3::new(0.0, 0.0, 1.0), Vec3::Y),
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}
