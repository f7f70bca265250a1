use bevy::prelude::*;

use crate::client::components::Controlled;

/// Camera offset from the controlled ship, in the ship's frame
const CAMERA_DISTANCE: f32 = 40.0;
const CAMERA_HEIGHT: f32 = 18.0;

pub fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Chase the controlled ship from behind and above
pub fn update(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut camera: Query<(&mut Projection, &mut Transform), With<Camera3d>>,
    ship: Query<&Transform, (With<Controlled>, Without<Camera3d>)>,
) {
    let Ok(s_transform) = ship.single() else { return };
    let Ok((c_projection, mut c_transform)) = camera.single_mut() else { return };

    // zoom
    if let Projection::Perspective(c_perspective) = c_projection.into_inner() {
        const MIN: f32 = 6_f32.to_radians();
        const MAX: f32 = 60_f32.to_radians();
        if keyboard.any_pressed([KeyCode::Minus]) {
            c_perspective.fov = (c_perspective.fov * 1.01).clamp(MIN, MAX);
        }
        if keyboard.any_pressed([KeyCode::Equal]) {
            c_perspective.fov = (c_perspective.fov / 1.01).clamp(MIN, MAX);
        }
    }

    let offset = s_transform.rotation * Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE);
    c_transform.translation = s_transform.translation + offset;
    c_transform.look_at(s_transform.translation, Vec3::Y);
}
