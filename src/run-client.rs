mod common;
mod client;

use bevy::{
    log::LogPlugin,
    prelude::*,
};

use common::plugins::gadget::{GadgetPlugin, GadgetUse};
use client::{
    resources::*,
    systems::{beam, camera, hud, input, targeting, world},
};

fn main() {
    let mut app = App::new();
    app.add_plugins((DefaultPlugins
        .set(LogPlugin {
            level: bevy::log::Level::DEBUG,
            filter:  "wgpu=error,naga=warn,polling=warn,winit=warn,offset_allocator=warn,gilrs=warn,".to_owned()
                    +"bevy=warn,cosmic_text=warn,client=debug,"
                    ,
            ..default()
        }),
        GadgetPlugin,
    ));

    app.add_systems(Startup, (
        beam::setup,
        camera::setup,
        hud::setup,
        world::setup,
    ));

    app.add_systems(Update, (
        input::steer,
        targeting::update.after(input::steer),
        input::use_gadgets.after(targeting::update),
    ).before(GadgetUse));

    app.add_systems(Update, (
        beam::spawn_beams,
        beam::update_beams.after(beam::spawn_beams),
        beam::update_use_effects,
        camera::update,
        hud::update,
    ).after(GadgetUse));

    app.init_resource::<InputConfig>();

    app.run();
}
