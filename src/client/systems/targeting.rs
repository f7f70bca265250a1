//! Client-side candidate selection
//!
//! Each frame the controlled ship's `Target` is pointed at the nearest body its
//! first gadget could lock onto, so the use key always acts on what the beam
//! would actually hit.

use bevy::prelude::*;

use crate::{
    client::components::Controlled,
    common::{
        components::{
            entity_type::*,
            flags::*,
            gadget::*,
            jump_drive::*,
            target::Target,
        },
        systems::targeting::*,
    },
};

pub fn update(
    mut controlled: Query<(Entity, &mut Target), With<Controlled>>,
    gadgets: Query<(&Gadget, &GlobalTransform)>,
    bodies: Query<(Entity, &EntityType, &GlobalTransform, Option<&Flags>, Option<&JumpDrive>), Without<Gadget>>,
) {
    let Ok((ent, mut target)) = controlled.single_mut() else { return };

    let Some((gadget, transform)) = gadgets.iter().find(|(gadget, _)| gadget.owner == ent) else {
        target.clear();
        return;
    };

    let candidates: Vec<TargetInfo> = bodies.iter()
        .map(|(ent, &typ, transform, flags, jump_drive)| TargetInfo {
            ent,
            typ,
            flags: flags.copied().unwrap_or_default(),
            position: transform.translation(),
            jump_drive: jump_drive.copied(),
        })
        .collect();

    match select_target(gadget, Mount::from(transform), &candidates) {
        Some(selected) if target.get() != Some(selected) => {
            trace!("{ent} targeting {selected}");
            target.set(selected);
        }
        Some(_) => {}
        None => {
            if target.get().is_some() {
                trace!("{ent} lost target, last was {:?}", target.last_target);
            }
            target.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::components::entity_type::{body::*, ship::*};

    fn setup_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::MinimalPlugins);
        app.add_systems(Update, update);
        app
    }

    fn spawn_ship(app: &mut App, hull: Hull, at: Vec3, drive: bool) -> Entity {
        let mut entity = app.world_mut().spawn((
            EntityType::Ship(ShipImpl::new(hull)),
            GlobalTransform::from_translation(at),
            Flags::default(),
        ));
        if drive { entity.insert(JumpDrive::new(400.0)); }
        entity.id()
    }

    fn spawn_controlled(app: &mut App) -> Entity {
        let ship = app.world_mut().spawn((
            Controlled,
            Target::new(),
            EntityType::Ship(ShipImpl::new(Hull::Frigate)),
            GlobalTransform::IDENTITY,
            Flags::default(),
            JumpDrive::new(400.0),
        )).id();
        app.world_mut().spawn((
            Gadget::new(ship, GadgetType::TachyonDisruptor, Facing::Front),
            GlobalTransform::IDENTITY,
        ));
        ship
    }

    #[test]
    fn test_selects_nearest_valid_candidate() {
        let mut app = setup_test_app();
        let ship = spawn_controlled(&mut app);
        let _far = spawn_ship(&mut app, Hull::Cruiser, Vec3::new(0.0, 0.0, -60.0), true);
        let near = spawn_ship(&mut app, Hull::Scout, Vec3::new(0.0, 0.0, -20.0), true);
        // closer, but no drive to disrupt
        let _platform = spawn_ship(&mut app, Hull::Platform, Vec3::new(0.0, 0.0, -5.0), false);
        // closer, but behind
        let _behind = spawn_ship(&mut app, Hull::Scout, Vec3::new(0.0, 0.0, 5.0), true);
        app.world_mut().spawn((
            EntityType::Body(BodyImpl::new(BodyKind::Asteroid)),
            GlobalTransform::from_translation(Vec3::new(0.0, 0.0, -3.0)),
        ));

        app.update();

        assert_eq!(app.world().get::<Target>(ship).unwrap().get(), Some(near));
    }

    #[test]
    fn test_clears_when_nothing_valid() {
        let mut app = setup_test_app();
        let ship = spawn_controlled(&mut app);
        let enemy = spawn_ship(&mut app, Hull::Scout, Vec3::new(0.0, 0.0, -20.0), true);

        app.update();
        assert_eq!(app.world().get::<Target>(ship).unwrap().get(), Some(enemy));

        app.world_mut().get_mut::<Flags>(enemy).unwrap().set(FLAG_CLOAKED);
        app.update();

        let target = app.world().get::<Target>(ship).unwrap();
        assert_eq!(target.get(), None);
        assert_eq!(target.last_target, Some(enemy));
    }
}
