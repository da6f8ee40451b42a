use bevy::prelude::*;

use crate::constants::overlay::{READOUT_FONT_SIZE, TOOLTIP_FONT_SIZE};
use crate::interaction::hover::HoverState;

#[derive(Component)]
pub struct FpsText;

#[derive(Component)]
pub struct CameraPositionText;

#[derive(Component)]
pub struct TooltipText;

/// Minimal native stand-in for the web overlay readouts.
pub fn create_native_overlays(mut commands: Commands) {
    let readout_font = TextFont {
        font_size: READOUT_FONT_SIZE,
        ..default()
    };

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                readout_font.clone(),
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
            parent.spawn((
                Text::new("X: 0 Y: 0 Z: 0"),
                readout_font,
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                CameraPositionText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: TOOLTIP_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                BackgroundColor(Color::srgba(0.05, 0.07, 0.12, 0.85)),
                Node {
                    position_type: PositionType::Absolute,
                    padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
                    ..default()
                },
                Visibility::Hidden,
                TooltipText,
            ));
        });
}

pub fn tooltip_update_system(
    hover: Res<HoverState>,
    mut tooltips: Query<(&mut Text, &mut Node, &mut Visibility), With<TooltipText>>,
) {
    if !hover.is_changed() {
        return;
    }
    for (mut text, mut node, mut visibility) in &mut tooltips {
        match (hover.label(), hover.label_position) {
            (Some(label), Some(position)) => {
                text.0 = label.to_string();
                node.left = Val::Px(position.x);
                node.top = Val::Px(position.y);
                visibility.set_if_neq(Visibility::Inherited);
            }
            _ => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}
