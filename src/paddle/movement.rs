//! Paddle movement - keyboard axes with caller-enforced court bounds

use bevy::prelude::*;

use crate::constants::*;
use crate::input::{PadAxes, PlayerInput};
use crate::modes::{ModeRules, MovementRule};
use crate::paddle::{Paddle, PaddleEnd};

/// Step one paddle for one tick. Bounds are checked here, before each move,
/// matching the record's no-internal-bounds contract; `y_range` is the
/// allowed interval for the paddle's top edge.
pub fn step_paddle(paddle: &mut Paddle, axes: PadAxes, y_range: (f32, f32)) {
    if axes.move_x > 0.0 && paddle.right() + paddle.vel <= COURT_WIDTH {
        paddle.move_x(1.0);
    }
    if axes.move_x < 0.0 && paddle.x - paddle.vel >= 0.0 {
        paddle.move_x(-1.0);
    }

    let (y_min, y_max) = y_range;
    if axes.move_y < 0.0 && paddle.y - paddle.vel >= y_min {
        paddle.move_y(-1.0);
    }
    if axes.move_y > 0.0 && paddle.y + paddle.vel <= y_max {
        paddle.move_y(1.0);
    }
}

/// Apply captured axes to the human paddles each fixed tick
pub fn apply_paddle_input(
    input: Res<PlayerInput>,
    rules: Res<ModeRules>,
    mut paddle_query: Query<(&mut Paddle, &PaddleEnd)>,
) {
    if rules.movement == MovementRule::Fixed {
        return;
    }

    for (mut paddle, end) in &mut paddle_query {
        if rules.ai_bottom && *end == PaddleEnd::Bottom {
            continue;
        }
        // Drills have a single paddle; it always answers to WASD
        let axes = if rules.is_drill() {
            input.top
        } else {
            match end {
                PaddleEnd::Top => input.top,
                PaddleEnd::Bottom => input.bottom,
            }
        };
        step_paddle(&mut paddle, axes, rules.movement.y_range(*end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axes(x: f32, y: f32) -> PadAxes {
        PadAxes { move_x: x, move_y: y }
    }

    #[test]
    fn test_step_moves_within_bounds() {
        let mut paddle = Paddle::at_home(PaddleEnd::Top);
        let x0 = paddle.x;
        step_paddle(&mut paddle, axes(1.0, 1.0), (0.0, COURT_HEIGHT / 2.0 - PADDLE_SIZE.y));
        assert_eq!(paddle.x, x0 + PADDLE_VEL);
        assert_eq!(paddle.y, PADDLE_HOME_MARGIN + PADDLE_VEL);
    }

    #[test]
    fn test_step_refuses_to_cross_the_right_wall() {
        let mut paddle = Paddle::new(COURT_WIDTH - PADDLE_SIZE.x - 2.0, 10.0);
        step_paddle(&mut paddle, axes(1.0, 0.0), (0.0, COURT_HEIGHT));
        assert_eq!(paddle.x, COURT_WIDTH - PADDLE_SIZE.x - 2.0);
    }

    #[test]
    fn test_step_refuses_to_leave_the_half_court() {
        let y_max = COURT_HEIGHT / 2.0 - PADDLE_SIZE.y;
        let mut paddle = Paddle::new(481.0, y_max - 2.0);
        step_paddle(&mut paddle, axes(0.0, 1.0), (0.0, y_max));
        assert_eq!(paddle.y, y_max - 2.0);

        // The full-court range allows the same move
        let mut paddle = Paddle::new(481.0, y_max - 2.0);
        step_paddle(&mut paddle, axes(0.0, 1.0), (0.0, COURT_HEIGHT - PADDLE_SIZE.y));
        assert_eq!(paddle.y, y_max - 2.0 + PADDLE_VEL);
    }
}
