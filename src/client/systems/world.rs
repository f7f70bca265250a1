use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::{
    client::{components::Controlled, systems::beam::Tracer},
    common::{
        beam::BeamMaterial,
        components::{
            energy::*,
            entity_type::{body::*, ship::*, *},
            flags::*,
            gadget::*,
            jump_drive::*,
            tachyon_disruptor::*,
            target::Target,
        },
        resources::GadgetConfig,
    },
};

/// NPC hulls scattered around the player, platforms carry no drive
const NPC_HULLS: [Hull; 6] = [
    Hull::Scout,
    Hull::Frigate,
    Hull::Destroyer,
    Hull::Cruiser,
    Hull::Dreadnought,
    Hull::Platform,
];
const SPAWN_MIN: f32 = 25.0;
const SPAWN_MAX: f32 = 90.0;

fn ship_color(hull: Hull) -> Color {
    match hull {
        Hull::Platform | Hull::Station => Color::srgb(0.5, 0.5, 0.5),
        _ => Color::srgb(0.2, 0.6, 0.9),
    }
}

fn body_color(kind: BodyKind) -> Color {
    match kind {
        BodyKind::Asteroid => Color::srgb(0.45, 0.35, 0.3),
        BodyKind::Cargo => Color::srgb(0.8, 0.7, 0.2),
        BodyKind::JumpGate => Color::srgb(0.3, 0.9, 0.5),
        BodyKind::Nebula => Color::srgba(0.6, 0.3, 0.8, 0.3),
        BodyKind::Planet => Color::srgb(0.3, 0.4, 0.8),
    }
}

/// Populate the sandbox: the player's ship with its disruptor, NPC ships and
/// some untargetable bodies
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GadgetConfig>,
) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 200.,
        ..default()
    });
    commands.spawn((
        DirectionalLight { shadows_enabled: false, ..default() },
        Transform::from_xyz(10., 30., 10.).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let player = commands.spawn((
        Controlled,
        Target::new(),
        EntityType::Ship(ShipImpl::new(Hull::Frigate)),
        Flags::default(),
        JumpDrive::new(600.),
        Energy::new(100),
        Mesh3d(meshes.add(Cone::new(Hull::Frigate.radius(), 2. * Hull::Frigate.radius()))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::default(),
    )).id();

    // front-mounted emitter just ahead of the bow, with a wider violet tracer
    let gadget = commands.spawn((
        Gadget::new(player, GadgetType::TachyonDisruptor, Facing::Front),
        TachyonDisruptor::new(&config),
        Flags::default(),
        BeamMaterial::new(0.08, 6.),
        Tracer(materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.2, 1.0),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::from_xyz(0., 0., -Hull::Frigate.radius()),
        Visibility::default(),
    )).id();
    commands.entity(player).add_child(gadget);

    let mut rng = rand::rng();
    for hull in NPC_HULLS {
        let angle = rng.random_range(0.0..TAU);
        let distance = rng.random_range(SPAWN_MIN..SPAWN_MAX);
        let position = Vec3::new(angle.sin() * distance, 0., -angle.cos() * distance);

        let mut npc = commands.spawn((
            EntityType::Ship(ShipImpl::new(hull)),
            Flags::default(),
            Mesh3d(meshes.add(Cuboid::from_length(2. * hull.radius()))),
            MeshMaterial3d(materials.add(ship_color(hull))),
            Transform::from_translation(position)
                .with_rotation(Quat::from_rotation_y(rng.random_range(0.0..TAU))),
        ));
        if hull != Hull::Platform {
            npc.insert(JumpDrive::new(rng.random_range(200.0..800.0)));
        }
    }

    for kind in [BodyKind::Asteroid, BodyKind::Cargo, BodyKind::JumpGate] {
        let angle = rng.random_range(0.0..TAU);
        let distance = rng.random_range(SPAWN_MIN..SPAWN_MAX);
        commands.spawn((
            EntityType::Body(BodyImpl::new(kind)),
            Mesh3d(meshes.add(Sphere::new(kind.radius()))),
            MeshMaterial3d(materials.add(body_color(kind))),
            Transform::from_xyz(angle.sin() * distance, 0., -angle.cos() * distance),
        ));
    }
}
