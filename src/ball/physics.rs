//! Ball motion and render-transform sync systems

use bevy::prelude::*;

use crate::ball::Ball;
use crate::court::court_to_world;
use crate::paddle::Paddle;
use crate::serve::{ServePhase, ServeState};

/// Integrate ball motion, one step per fixed tick. The ball only moves while
/// a point is live; during Idle/Charging it waits on the server's paddle.
pub fn integrate_ball(serve: Res<ServeState>, mut ball_query: Query<&mut Ball>) {
    if serve.phase != ServePhase::Live {
        return;
    }
    for mut ball in &mut ball_query {
        ball.step();
    }
}

/// Copy court-space state into world-space transforms for rendering
pub fn sync_court_transforms(
    mut paddle_query: Query<(&Paddle, &mut Transform), Without<Ball>>,
    mut ball_query: Query<(&Ball, &mut Transform), Without<Paddle>>,
) {
    for (paddle, mut transform) in &mut paddle_query {
        let z = transform.translation.z;
        transform.translation = court_to_world(paddle.center_x(), paddle.center_y(), z);
    }
    for (ball, mut transform) in &mut ball_query {
        let z = transform.translation.z;
        transform.translation = court_to_world(ball.x, ball.y, z);
    }
}
