use bevy::prelude::*;

#[derive(Component)]
pub struct DemoCube;

/// Spawn the two static cubes: a maroon 2x2x2 at the origin and a blue
/// 2x1x1 shifted to the right.
pub fn spawn_demo_cubes(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.0, 2.0, 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(190, 33, 55),
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        DemoCube,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.0, 1.0, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0, 121, 241),
            ..default()
        })),
        Transform::from_xyz(5.0, 2.0, 0.0),
        DemoCube,
    ));
}
