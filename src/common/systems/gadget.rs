use bevy::{diagnostic::FrameCount, prelude::*};

use crate::common::{
    components::{
        energy::*,
        entity_type::*,
        flags::*,
        gadget::*,
        jump_drive::*,
        tachyon_disruptor::*,
        target_lock::Activity,
    },
    message::{Do, Try, Event as GameEvent},
    resources::MessageLog,
    systems::targeting::*,
};

/// Ships and other bodies a gadget may be used against
pub type Bodies<'w, 's> = Query<
    'w, 's,
    (&'static EntityType, &'static GlobalTransform, &'static mut Flags, Option<&'static JumpDrive>),
    Without<Gadget>,
>;

/// Snapshot a candidate for validation; `None` if it has left the world
pub fn target_info(ent: Entity, bodies: &Bodies) -> Option<TargetInfo> {
    let (&typ, transform, &flags, jump_drive) = bodies.get(ent).ok()?;
    Some(TargetInfo {
        ent,
        typ,
        flags,
        position: transform.translation(),
        jump_drive: jump_drive.copied(),
    })
}

/// Handle use requests for tachyon disruptors
///
/// Requests that fail the usability check are dropped. A successful toggle
/// records the use, flags the target jump-disabled on acquisition, and
/// reports the new activity so the owner can be notified.
pub fn try_use(
    mut reader: EventReader<Try>,
    mut writer: EventWriter<Do>,
    time: Res<Time>,
    mut gadgets: Query<(&mut Gadget, &mut TachyonDisruptor, &GlobalTransform, Option<&Flags>)>,
    mut bodies: Bodies,
) {
    for &Try { event } in reader.read() {
        let GameEvent::UseGadget { gadget: ent, target } = event else { continue };
        let Ok((mut gadget, mut disruptor, transform, flags)) = gadgets.get_mut(ent) else {
            warn!("use request for unknown gadget {ent}");
            continue;
        };

        let flags = flags.copied().unwrap_or_default();
        let owner_flags = bodies.get(gadget.owner).ok().map(|(_, _, &flags, _)| flags);
        let candidate = target.and_then(|t| target_info(t, &bodies));
        let mount = Mount::from(transform);

        if !disruptor.usable(&gadget, &flags, owner_flags.as_ref(), mount, candidate.as_ref()) {
            debug!("{} on {ent} not usable against {target:?}", gadget.name());
            continue;
        }

        let activity = disruptor.lock.toggle(target, |target| {
            if let Ok((_, _, mut target_flags, _)) = bodies.get_mut(target) {
                target_flags.set(FLAG_JUMP_DISABLED);
            }
        });
        if activity.is_active() {
            gadget.record_use(time.elapsed());
        }

        writer.write(Do { event: GameEvent::GadgetActivity { gadget: ent, owner: gadget.owner, activity } });
    }
}

/// Charge each owner's reserve for the disruptors it keeps locked on
pub fn sustain(
    frame: Res<FrameCount>,
    gadgets: Query<(&Gadget, &TachyonDisruptor)>,
    mut reserves: Query<&mut Energy, Without<Gadget>>,
) {
    for (gadget, disruptor) in &gadgets {
        if !disruptor.lock.is_active() { continue; }
        let Ok(mut energy) = reserves.get_mut(gadget.owner) else { continue };
        let next = Energy { current: disruptor.use_energy(frame.0, energy.current), ..*energy };
        energy.set_if_neq(next);
    }
}

/// Format the tactical status line shown to the owner
pub fn tactical_message(name: &str, activity: Activity) -> String {
    format!("Tactical: {name} {activity}.")
}

/// Forward gadget activity changes to the message log
pub fn do_activity(
    mut reader: EventReader<Do>,
    gadgets: Query<&Gadget>,
    mut log: ResMut<MessageLog>,
) {
    for &Do { event } in reader.read() {
        let GameEvent::GadgetActivity { gadget, owner, activity } = event else { continue };
        let name = gadgets.get(gadget).map(Gadget::name).unwrap_or("Gadget");
        let text = tactical_message(name, activity);
        info!("{owner}: {text}");
        log.push(text);
    }
}

/// Release locks held by gadgets that are being torn down
///
/// A gadget is torn down when it or its owner is destroyed, or when its owner
/// has left the world. The target is not touched.
pub fn release_on_teardown(
    mut gadgets: Query<(Entity, &Gadget, &mut TachyonDisruptor, Option<&Flags>)>,
    owners: Query<Option<&Flags>, Without<Gadget>>,
) {
    for (ent, gadget, mut disruptor, flags) in &mut gadgets {
        if !disruptor.lock.is_active() { continue; }

        let destroyed = flags.is_some_and(Flags::destroyed);
        let owner_gone = match owners.get(gadget.owner) {
            Ok(owner_flags) => owner_flags.is_some_and(Flags::destroyed),
            Err(_) => true,
        };

        if destroyed || owner_gone {
            debug!("releasing {} on {ent}: gadget or owner torn down", gadget.name());
            disruptor.lock.release();
        }
    }
}
