//! Court geometry and the court-space to world-space mapping

use bevy::prelude::*;

use crate::constants::*;
use crate::modes::MatchEntity;

/// Convert a court-space point (y down, origin at the top-left corner) to a
/// Bevy world-space translation (y up, origin at the court center).
pub fn court_to_world(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x - COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0 - y, z)
}

/// Spawn the court background sprite, stretched to the full court
pub fn spawn_background(commands: &mut Commands, asset_server: &AssetServer) {
    commands.spawn((
        Sprite {
            image: asset_server.load(COURT_TEXTURE),
            custom_size: Some(Vec2::new(COURT_WIDTH, COURT_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        MatchEntity,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_corners_map_to_world_corners() {
        let top_left = court_to_world(0.0, 0.0, 0.0);
        assert_eq!(top_left.x, -COURT_WIDTH / 2.0);
        assert_eq!(top_left.y, COURT_HEIGHT / 2.0);

        let bottom_right = court_to_world(COURT_WIDTH, COURT_HEIGHT, 0.0);
        assert_eq!(bottom_right.x, COURT_WIDTH / 2.0);
        assert_eq!(bottom_right.y, -COURT_HEIGHT / 2.0);
    }

    #[test]
    fn test_court_center_is_world_origin() {
        let center = court_to_world(COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0, 1.0);
        assert_eq!(center, Vec3::new(0.0, 0.0, 1.0));
    }
}
