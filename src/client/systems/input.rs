use bevy::prelude::*;

use crate::{
    client::{components::Controlled, resources::InputConfig},
    common::{
        components::{gadget::*, target::Target},
        message::{Try, Event},
    },
};

/// Request a use of every gadget on the controlled ship when the use key goes down
///
/// The request carries the current candidate; with a lock already held the
/// candidate is ignored and the use turns the gadget off.
pub fn use_gadgets(
    mut writer: EventWriter<Try>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<InputConfig>,
    controlled: Query<(Entity, &Target), With<Controlled>>,
    gadgets: Query<(Entity, &Gadget)>,
) {
    if !keyboard.just_pressed(config.use_gadget_key) { return; }
    let Ok((ship, target)) = controlled.single() else { return };

    for (ent, gadget) in &gadgets {
        if gadget.owner != ship { continue; }
        trace!("use {} ({}) on {ent}", gadget.name(), gadget.kind.hotkey());
        writer.write(Try { event: Event::UseGadget { gadget: ent, target: target.get() } });
    }
}

/// Turn the controlled ship about its vertical axis
pub fn steer(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<InputConfig>,
    time: Res<Time>,
    mut controlled: Query<&mut Transform, With<Controlled>>,
) {
    let Ok(mut transform) = controlled.single_mut() else { return };

    let mut yaw = 0.;
    if keyboard.pressed(config.yaw_left_key) { yaw += 1.; }
    if keyboard.pressed(config.yaw_right_key) { yaw -= 1.; }
    if yaw != 0. {
        transform.rotate_y(yaw * config.yaw_speed * time.delta_secs());
    }
}
