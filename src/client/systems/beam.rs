use std::f32::consts::TAU;

use bevy::{
    asset::RenderAssetUsages,
    pbr::NotShadowCaster,
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology},
        primitives::{Frustum, Sphere as BoundingSphere},
        view::NoFrustumCulling,
    },
};

use crate::common::{
    beam::{self, BeamGeometry, BeamMaterial, BeamSpan},
    components::{flags::*, tachyon_disruptor::*},
};

/// World-space beam mesh drawn for one gadget
#[derive(Component)]
pub struct Beam {
    pub gadget: Entity,
}

/// Pulse shown at the emitter while the gadget is locked on
#[derive(Component)]
pub struct UseEffect {
    pub gadget: Entity,
}

/// Tracer material bound to a gadget, used instead of the default beam material
#[derive(Clone, Component, Debug)]
pub struct Tracer(pub Handle<StandardMaterial>);

#[derive(Resource)]
pub struct BeamAssets {
    pub default_material: Handle<StandardMaterial>,
    pub use_effect_mesh: Handle<Mesh>,
    pub use_effect_material: Handle<StandardMaterial>,
}

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(BeamAssets {
        // Unlit additive red, visible from both sides
        default_material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.0, 0.0),
            unlit: true,
            alpha_mode: AlphaMode::Add,
            cull_mode: None,
            double_sided: true,
            ..default()
        }),
        use_effect_mesh: meshes.add(Sphere::new(0.3)),
        use_effect_material: materials.add(StandardMaterial {
            base_color: Color::BLACK,
            emissive: LinearRgba::rgb(6.0, 1.0, 8.0),
            alpha_mode: AlphaMode::Add,
            unlit: true,
            ..default()
        }),
    });
}

/// Give each new disruptor a beam mesh and a use effect
pub fn spawn_beams(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    assets: Res<BeamAssets>,
    gadgets: Query<(Entity, Option<&Tracer>), Added<TachyonDisruptor>>,
) {
    for (gadget, tracer) in &gadgets {
        let material = tracer.map_or_else(|| assets.default_material.clone(), |t| t.0.clone());

        // Vertices are written in world space, so the beam sits at the origin
        commands.spawn((
            Beam { gadget },
            Mesh3d(meshes.add(empty_mesh())),
            MeshMaterial3d(material),
            Transform::IDENTITY,
            Visibility::Hidden,
            NoFrustumCulling,
            NotShadowCaster,
        ));

        commands.entity(gadget).with_child((
            UseEffect { gadget },
            Mesh3d(assets.use_effect_mesh.clone()),
            MeshMaterial3d(assets.use_effect_material.clone()),
            Transform::default(),
            Visibility::Hidden,
            NotShadowCaster,
        ));
    }
}

/// Check the beam's bounding sphere against the view
///
/// The sphere is centred on the emitter with the beam length as radius, so it
/// contains the whole beam. Without a camera everything counts as visible.
pub fn beam_visible(frustum: Option<&Frustum>, span: &BeamSpan) -> bool {
    let Some(frustum) = frustum else { return true };
    let sphere = BoundingSphere { center: span.head.into(), radius: span.length() };
    frustum.intersects_sphere(&sphere, true)
}

/// Convert beam quads into a triangle list mesh
pub fn beam_mesh(geometry: &BeamGeometry) -> Mesh {
    let positions: Vec<[f32; 3]> = geometry.vertices().map(|v| v.position.to_array()).collect();
    let colors: Vec<[f32; 4]> = geometry.vertices().map(|v| v.color).collect();
    let uvs: Vec<[f32; 2]> = geometry.vertices().map(|v| v.uv.to_array()).collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(geometry.indices()))
}

fn empty_mesh() -> Mesh {
    beam_mesh(&beam::build(Vec3::ZERO, Vec3::ZERO, None))
}

/// Rebuild every active beam for this frame
///
/// The lock is read once per gadget. A target that no longer resolves, or
/// that has been destroyed, breaks the lock instead of being drawn.
pub fn update_beams(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut beams: Query<(Entity, &Beam, &Mesh3d, &mut Visibility)>,
    mut gadgets: Query<(&mut TachyonDisruptor, &GlobalTransform, Option<&BeamMaterial>)>,
    targets: Query<(&GlobalTransform, Option<&Flags>)>,
    camera: Query<&Frustum, With<Camera3d>>,
) {
    let frustum = camera.iter().next();

    for (ent, beam, mesh, mut visibility) in &mut beams {
        let Ok((mut disruptor, transform, material)) = gadgets.get_mut(beam.gadget) else {
            // gadget despawned
            commands.entity(ent).despawn();
            continue;
        };

        let Some(target) = disruptor.lock.target() else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        let tail = match targets.get(target) {
            Ok((target_transform, flags)) if !flags.is_some_and(Flags::destroyed) => {
                target_transform.translation()
            }
            _ => {
                debug!("beam target {target} is gone, breaking lock on {}", beam.gadget);
                disruptor.lock.release();
                visibility.set_if_neq(Visibility::Hidden);
                continue;
            }
        };

        let span = BeamSpan::new(transform.translation(), tail);
        if !beam_visible(frustum, &span) {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        }

        let geometry = beam::build(span.head, span.tail, material);
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            *mesh = beam_mesh(&geometry);
        }
        visibility.set_if_neq(Visibility::Visible);
    }
}

/// Show the use effect while locked, whether or not the beam is culled
pub fn update_use_effects(
    time: Res<Time>,
    gadgets: Query<&TachyonDisruptor>,
    mut effects: Query<(&UseEffect, &mut Transform, &mut Visibility)>,
) {
    let pulse = 1.0 + 0.25 * (time.elapsed_secs() * TAU * 2.0).sin();

    for (effect, mut transform, mut visibility) in &mut effects {
        let active = gadgets.get(effect.gadget).is_ok_and(|d| d.lock.is_active());
        if active {
            transform.scale = Vec3::splat(pulse);
            visibility.set_if_neq(Visibility::Inherited);
        } else {
            visibility.set_if_neq(Visibility::Hidden);
        }
    }
}
