use bevy::prelude::*;

use crate::common::resources::MessageLog;

/// Text panel listing recent tactical messages
#[derive(Component)]
pub struct TacticalLog;

pub fn setup(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont { font_size: 14., ..default() },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.),
            left: Val::Px(12.),
            ..default()
        },
        TacticalLog,
    ));
}

fn render(log: &MessageLog) -> String {
    if log.is_empty() {
        return "Tactical: no contacts locked.".to_owned();
    }
    let mut text = format!("Tactical log ({})", log.len());
    for message in log.iter() {
        text.push('\n');
        text.push_str(message);
    }
    text
}

pub fn update(
    log: Res<MessageLog>,
    mut panel: Query<&mut Text, With<TacticalLog>>,
) {
    if !log.is_changed() { return; }
    let Ok(mut text) = panel.single_mut() else { return };
    text.0 = render(&log);
}
