use std::collections::HashSet;

use bevy::prelude::*;

use crate::common::components::{
    flags::*,
    jump_drive::*,
    tachyon_disruptor::*,
};

/// Lift jump disruption from ships nothing is locked onto
///
/// Gadgets only ever set `FLAG_JUMP_DISABLED`; the drive owns the flag and
/// clears it once no active lock holds the ship.
pub fn clear_jump_disabled(
    disruptors: Query<&TachyonDisruptor>,
    mut ships: Query<(Entity, &mut Flags), With<JumpDrive>>,
) {
    let held: HashSet<Entity> = disruptors.iter().filter_map(|d| d.lock.target()).collect();

    for (ent, mut flags) in &mut ships {
        if flags.is_set(FLAG_JUMP_DISABLED) && !held.contains(&ent) {
            debug!("jump drive on {ent} restored");
            flags.clear(FLAG_JUMP_DISABLED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        components::gadget::*,
        resources::GadgetConfig,
    };

    fn setup_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::MinimalPlugins);
        app.add_systems(Update, clear_jump_disabled);
        app
    }

    #[test]
    fn test_flag_kept_while_locked_and_cleared_after() {
        let mut app = setup_test_app();
        let owner = app.world_mut().spawn(Flags::default()).id();
        let target = app.world_mut().spawn((JumpDrive::new(400.0), Flags::new(FLAG_JUMP_DISABLED))).id();

        let mut disruptor = TachyonDisruptor::new(&GadgetConfig::default());
        disruptor.lock.toggle(Some(target), |_| {});
        let gadget = app.world_mut().spawn((
            Gadget::new(owner, GadgetType::TachyonDisruptor, Facing::Front),
            disruptor,
        )).id();

        app.update();
        let flags = *app.world().get::<Flags>(target).unwrap();
        assert!(flags.is_set(FLAG_JUMP_DISABLED));
        assert!(!app.world().get::<JumpDrive>(target).unwrap().can_engage(&flags));

        app.world_mut().get_mut::<TachyonDisruptor>(gadget).unwrap().lock.release();
        app.update();
        let flags = *app.world().get::<Flags>(target).unwrap();
        assert!(!flags.is_set(FLAG_JUMP_DISABLED));
        assert!(app.world().get::<JumpDrive>(target).unwrap().can_engage(&flags));
    }

    #[test]
    fn test_other_flags_untouched() {
        let mut app = setup_test_app();
        let ship = app.world_mut().spawn((
            JumpDrive::new(400.0),
            Flags::new(FLAG_JUMP_DISABLED | FLAG_CLOAKED),
        )).id();

        app.update();

        let flags = app.world().get::<Flags>(ship).unwrap();
        assert!(!flags.is_set(FLAG_JUMP_DISABLED));
        assert!(flags.cloaked());
    }
}
