//! Locomotion domain: player rig and test course spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, Locomotion, Player, SurfaceContacts};

const PLAYER_RADIUS: f32 = 0.4;
const PLAYER_LENGTH: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Player,
        Locomotion::default(),
        SurfaceContacts::default(),
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_LENGTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.9, 0.9),
            ..default()
        })),
        Transform::from_xyz(0.0, 2.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // the controller integrates gravity itself
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Terrain]),
        ),
    ));

    info!("Player rig spawned");
}

/// A small course: a floor, a raised platform and a wall-run corridor.
pub(crate) fn spawn_test_course(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.35, 0.45, 0.35);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor
    spawn_block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(60.0, 1.0, 60.0),
        Vec3::new(0.0, -0.5, 0.0),
        ground_color,
    );

    // Raised platform for jump and slide practice
    spawn_block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(6.0, 1.0, 6.0),
        Vec3::new(8.0, 1.0, -6.0),
        platform_color,
    );

    // Wall-run corridor: two parallel walls flanking a lane
    spawn_block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(1.0, 6.0, 20.0),
        Vec3::new(-4.0, 3.0, -18.0),
        wall_color,
    );
    spawn_block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(1.0, 6.0, 20.0),
        Vec3::new(4.0, 3.0, -18.0),
        wall_color,
    );

    info!("Test course spawned");
}

fn spawn_block(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    size: Vec3,
    position: Vec3,
    color: Color,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color,
            ..default()
        })),
        Transform::from_translation(position),
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionLayers::new(GameLayer::Terrain, [GameLayer::Player]),
    ));
}
