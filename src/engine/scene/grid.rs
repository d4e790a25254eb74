/// Ground grid and axis overlay rendering
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use crate::constants::{AXIS_LENGTH, GRID_CELL_SIZE, GRID_HALF_EXTENT};

#[derive(Component)]
pub struct GroundGrid;

#[derive(Component)]
pub struct WorldAxes;

/// Spawn the flat ground grid plus the three coloured world axis lines.
pub fn spawn_world_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.5),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(build_grid_mesh(GRID_HALF_EXTENT, GRID_CELL_SIZE))),
        MeshMaterial3d(grid_material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        GroundGrid,
    ));

    spawn_axis_lines(commands, meshes, materials);
}

/// Build a flat line-list grid on the y=0 plane centred on the origin.
pub fn build_grid_mesh(half_extent: f32, cell_size: f32) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let line_count = (2.0 * half_extent / cell_size).round() as u32;

    for i in 0..=line_count {
        let offset = -half_extent + i as f32 * cell_size;

        // Line running along Z at fixed X
        push_line(
            &mut vertices,
            &mut indices,
            [offset, 0.0, -half_extent],
            [offset, 0.0, half_extent],
        );

        // Line running along X at fixed Z
        push_line(
            &mut vertices,
            &mut indices,
            [-half_extent, 0.0, offset],
            [half_extent, 0.0, offset],
        );
    }

    line_list_mesh(vertices, indices)
}

fn push_line(
    vertices: &mut Vec<[f32; 3]>,
    indices: &mut Vec<u32>,
    start: [f32; 3],
    end: [f32; 3],
) {
    let base = vertices.len() as u32;
    vertices.push(start);
    vertices.push(end);
    indices.extend_from_slice(&[base, base + 1]);
}

fn line_list_mesh(vertices: Vec<[f32; 3]>, indices: Vec<u32>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));
    mesh
}

/// One unlit line per world axis from the origin: X red, Y green, Z blue.
fn spawn_axis_lines(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let axes = [
        (Vec3::X, Color::srgb(0.9, 0.1, 0.1)),
        (Vec3::Y, Color::srgb(0.1, 0.8, 0.1)),
        (Vec3::Z, Color::srgb(0.1, 0.2, 0.9)),
    ];

    for (axis, color) in axes {
        let material = materials.add(StandardMaterial {
            base_color: color,
            unlit: true,
            ..default()
        });

        commands.spawn((
            Mesh3d(meshes.add(build_axis_mesh(axis, AXIS_LENGTH))),
            MeshMaterial3d(material),
            Visibility::Visible,
            NoFrustumCulling,
            Transform::IDENTITY,
            WorldAxes,
        ));
    }
}

/// Single line segment from the origin along the given axis.
pub fn build_axis_mesh(axis: Vec3, length: f32) -> Mesh {
    let tip = axis * length;
    line_list_mesh(
        vec![[0.0, 0.0, 0.0], [tip.x, tip.y, tip.z]],
        vec![0, 1],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_has_expected_line_count() {
        // 2*10/1 + 1 = 21 lines per direction, two vertices per line.
        let mesh = build_grid_mesh(10.0, 1.0);
        assert_eq!(mesh.count_vertices(), 21 * 2 * 2);
    }

    #[test]
    fn axis_mesh_is_a_single_segment() {
        let mesh = build_axis_mesh(Vec3::Y, 3.0);
        assert_eq!(mesh.count_vertices(), 2);
    }
}
