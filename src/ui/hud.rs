//! HUD components and systems (score display)

use bevy::prelude::*;

use crate::constants::*;
use crate::court::court_to_world;
use crate::modes::MatchEntity;
use crate::paddle::PaddleEnd;
use crate::scoring::Score;

/// Score text for one court end
#[derive(Component)]
pub struct ScoreText(pub PaddleEnd);

/// Spawn a score readout near each baseline. Drills keep the bottom slot
/// at zero; their counter lives in the top slot.
pub fn spawn_hud(commands: &mut Commands) {
    let slots = [
        (PaddleEnd::Top, court_to_world(55.0, 45.0, 10.0)),
        (PaddleEnd::Bottom, court_to_world(55.0, COURT_HEIGHT - 55.0, 10.0)),
    ];
    for (end, translation) in slots {
        commands.spawn((
            Text2d::new("0"),
            TextFont {
                font_size: 50.0,
                ..default()
            },
            TextColor(TEXT_PRIMARY),
            Transform::from_translation(translation),
            ScoreText(end),
            MatchEntity,
        ));
    }
}

/// Refresh the score readouts
pub fn update_hud(
    score: Option<Res<Score>>,
    mut text_query: Query<(&mut Text2d, &ScoreText)>,
) {
    let Some(score) = score else {
        return;
    };
    for (mut text, slot) in &mut text_query {
        text.0 = score.for_end(slot.0).to_string();
    }
}
