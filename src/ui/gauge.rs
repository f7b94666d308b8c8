//! Serve power gauge
//!
//! A horizontal bar in the bottom-right corner. The fill tracks the gauge
//! level and shifts from green to red as it approaches full power.

use bevy::prelude::*;

use crate::constants::*;
use crate::court::court_to_world;
use crate::modes::MatchEntity;
use crate::serve::{ServePhase, ServeState};

const GAUGE_WIDTH: f32 = 80.0;
const GAUGE_HEIGHT: f32 = 20.0;
const FILL_WIDTH: f32 = GAUGE_WIDTH - 2.0;
const FILL_HEIGHT: f32 = GAUGE_HEIGHT - 2.0;

/// Gauge background bar
#[derive(Component)]
pub struct PowerGaugeBackground;

/// Gauge fill bar; scaled horizontally to the current power level
#[derive(Component)]
pub struct PowerGaugeFill;

fn gauge_center() -> Vec3 {
    court_to_world(
        COURT_WIDTH - 60.0,
        COURT_HEIGHT - 40.0,
        8.0,
    )
}

/// World x of the fill's left edge; the fill grows rightward from here.
fn fill_left_edge() -> f32 {
    gauge_center().x - FILL_WIDTH / 2.0
}

pub fn spawn_power_gauge(commands: &mut Commands) {
    commands.spawn((
        Sprite::from_color(
            GAUGE_BACKGROUND_COLOR,
            Vec2::new(GAUGE_WIDTH, GAUGE_HEIGHT),
        ),
        Transform::from_translation(gauge_center()),
        Visibility::Hidden,
        PowerGaugeBackground,
        MatchEntity,
    ));

    let mut fill_translation = gauge_center();
    fill_translation.z += 1.0;
    commands.spawn((
        Sprite::from_color(
            Color::srgb(0.0, 0.8, 0.0),
            Vec2::new(FILL_WIDTH, FILL_HEIGHT),
        ),
        Transform::from_translation(fill_translation),
        Visibility::Hidden,
        PowerGaugeFill,
        MatchEntity,
    ));
}

/// Show the gauge only while charging, scale the fill to the gauge level,
/// and blend its color toward red
pub fn update_power_gauge(
    serve: Option<Res<ServeState>>,
    mut fill_query: Query<
        (&mut Transform, &mut Sprite, &mut Visibility),
        With<PowerGaugeFill>,
    >,
    mut background_query: Query<
        &mut Visibility,
        (With<PowerGaugeBackground>, Without<PowerGaugeFill>),
    >,
) {
    let Some(serve) = serve else {
        return;
    };
    let visibility = if serve.phase == ServePhase::Charging {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut background_visibility in &mut background_query {
        *background_visibility = visibility;
    }

    let pct = (serve.power.level / POWER_MAX).clamp(0.0, 1.0);
    for (mut transform, mut sprite, mut fill_visibility) in &mut fill_query {
        *fill_visibility = visibility;
        transform.scale.x = pct;
        // keep the left edge anchored while the bar grows
        transform.translation.x = fill_left_edge() + (FILL_WIDTH / 2.0) * pct;
        sprite.color = Color::srgb(0.1 + pct * 0.9, 0.8 * (1.0 - pct), 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_left_edge_stays_fixed() {
        // at any fill fraction the left edge of the scaled bar is constant
        for pct in [0.0_f32, 0.25, 0.5, 1.0] {
            let center = fill_left_edge() + (FILL_WIDTH / 2.0) * pct;
            let left = center - (FILL_WIDTH * pct) / 2.0;
            assert!((left - fill_left_edge()).abs() < 1e-4);
        }
    }
}
