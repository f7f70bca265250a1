use bevy::prelude::*;

use crate::common::{
    message::{Do, Try},
    resources::{GadgetConfig, MessageLog},
    systems::{gadget, jump},
};

/// Systems that run gadget use handling for a frame
///
/// Render passes order themselves after this set so a use request and the
/// beam it produces land in the same frame.
#[derive(Clone, Debug, Eq, Hash, PartialEq, SystemSet)]
pub struct GadgetUse;

/// Plugin that manages gadget systems
///
/// This plugin provides:
/// - Try/Do event channels for gadget use
/// - Teardown release for gadgets whose ship is gone or destroyed
/// - Use handling, tactical messages and jump-disable bookkeeping
///
/// Insert a GadgetConfig before adding the plugin to override the defaults.
pub struct GadgetPlugin;

impl Plugin for GadgetPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Try>();
        app.add_event::<Do>();
        app.init_resource::<GadgetConfig>();

        let capacity = app.world().resource::<GadgetConfig>().message_log_capacity;
        app.insert_resource(MessageLog::with_capacity(capacity));

        app.add_systems(
            Update,
            (
                gadget::release_on_teardown,
                gadget::try_use,
                gadget::sustain,
                gadget::do_activity,
                jump::clear_jump_disabled,
            )
                .chain()
                .in_set(GadgetUse),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_respects_inserted_config() {
        let mut app = App::new();
        app.add_plugins(bevy::MinimalPlugins);
        app.insert_resource(GadgetConfig { message_log_capacity: 3, ..default() });
        app.add_plugins(GadgetPlugin);

        let mut log = app.world_mut().resource_mut::<MessageLog>();
        for i in 0..5 {
            log.push(format!("message {i}"));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().last(), Some("message 4"));
    }
}
