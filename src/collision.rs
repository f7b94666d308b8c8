//! Collision resolver - wall, paddle, and drill-zone contact rules
//!
//! Pure functions over the court-space records, shared by every mode. The
//! Bevy system at the bottom dispatches on the active mode's ruleset and
//! forwards outcomes to the score and the event bus. Wall and paddle checks
//! are independent; both may fire in the same tick since they act on
//! orthogonal axes.

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::modes::{CollisionRule, ModeRules};
use crate::paddle::{Paddle, PaddleEnd};
use crate::scoring::Score;
use crate::serve::{ServePhase, ServeState};

/// Target half of the drill paddle's horizontal span.
/// Forehand is the left half, backhand the right half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetZone {
    Forehand,
    Backhand,
}

impl TargetZone {
    /// Horizontal span of the scoring zone on the given paddle
    pub fn span(&self, paddle: &Paddle) -> (f32, f32) {
        match self {
            TargetZone::Forehand => (paddle.x, paddle.center_x()),
            TargetZone::Backhand => (paddle.center_x(), paddle.right()),
        }
    }
}

/// Outcome of a drill-zone resolution step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneOutcome {
    /// No contact, or contact suppressed by the cooldown
    Miss,
    /// Paddle contact; `scored` is true when the target zone was struck
    Contact { scored: bool },
}

/// Angled-return deflection: proportional to the contact offset from the
/// paddle center, clamped to the fixed maximum
fn deflection(ball_x: f32, paddle_center_x: f32) -> f32 {
    ((ball_x - paddle_center_x) / DEFLECT_DIVISOR)
        .clamp(-MAX_DEFLECT_SPEED, MAX_DEFLECT_SPEED)
}

/// Side-wall rule: clamp the ball's horizontal extent to the court and
/// invert the horizontal velocity. Returns true when a bounce happened.
pub fn resolve_side_walls(ball: &mut Ball) -> bool {
    if ball.x + ball.radius >= COURT_WIDTH {
        ball.x = COURT_WIDTH - ball.radius;
        ball.x_vel = -ball.x_vel;
        true
    } else if ball.x - ball.radius <= 0.0 {
        ball.x = ball.radius;
        ball.x_vel = -ball.x_vel;
        true
    } else {
        false
    }
}

/// Full-court drills treat the baselines as a ceiling and floor: the same
/// clamp-and-invert rule on the vertical axis instead of a scoring trigger
pub fn resolve_end_walls(ball: &mut Ball) -> bool {
    if ball.y + ball.radius >= COURT_HEIGHT {
        ball.y = COURT_HEIGHT - ball.radius;
        ball.y_vel = -ball.y_vel;
        true
    } else if ball.y - ball.radius <= 0.0 {
        ball.y = ball.radius;
        ball.y_vel = -ball.y_vel;
        true
    } else {
        false
    }
}

/// Contact test: ball x within the paddle's horizontal span, leading edge
/// within its vertical span
fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let edge = ball.leading_edge_y();
    paddle.x <= ball.x
        && ball.x <= paddle.right()
        && paddle.y <= edge
        && edge <= paddle.bottom()
}

/// Two-paddle rule: only the paddle the ball travels toward is active. On
/// contact the vertical velocity inverts and the horizontal velocity becomes
/// the clamped offset deflection. Returns the struck paddle's end.
pub fn resolve_paddles(
    ball: &mut Ball,
    top: &Paddle,
    bottom: &Paddle,
) -> Option<PaddleEnd> {
    let (active, end) = if ball.y_vel < 0.0 {
        (top, PaddleEnd::Top)
    } else if ball.y_vel > 0.0 {
        (bottom, PaddleEnd::Bottom)
    } else {
        return None;
    };

    if paddle_contact(ball, active) {
        ball.y_vel = -ball.y_vel;
        ball.x_vel = deflection(ball.x, active.center_x());
        Some(end)
    } else {
        None
    }
}

/// Zone rule for the swing drills: same contact test and deflection as the
/// paddle rule, plus a near-half/far-half classification that decides
/// whether the contact scores. Contacts within COLLISION_COOLDOWN of the
/// last recorded one are suppressed so a ball sitting inside the hit-box
/// across consecutive ticks cannot double-count.
pub fn resolve_zone_drill(
    ball: &mut Ball,
    paddle: &Paddle,
    zone: TargetZone,
    now: f64,
) -> ZoneOutcome {
    if now - ball.last_contact < COLLISION_COOLDOWN {
        return ZoneOutcome::Miss;
    }
    if !paddle_contact(ball, paddle) {
        return ZoneOutcome::Miss;
    }

    ball.y_vel = -ball.y_vel;
    ball.x_vel = deflection(ball.x, paddle.center_x());
    ball.last_contact = now;

    let (zone_start, zone_end) = zone.span(paddle);
    let scored = zone_start <= ball.x && ball.x <= zone_end;
    ZoneOutcome::Contact { scored }
}

/// Per-tick collision dispatch for the active mode
pub fn resolve_collisions(
    time: Res<Time>,
    rules: Res<ModeRules>,
    serve: Res<ServeState>,
    mut score: ResMut<Score>,
    mut event_bus: ResMut<EventBus>,
    mut ball_query: Query<&mut Ball>,
    paddle_query: Query<(&Paddle, &PaddleEnd)>,
) {
    if serve.phase != ServePhase::Live {
        return;
    }
    let Ok(mut ball) = ball_query.single_mut() else {
        return;
    };

    match rules.collision {
        CollisionRule::TwoPaddle => {
            if resolve_side_walls(&mut ball) {
                event_bus.emit(GameEvent::WallBounce {
                    x: ball.x,
                    y: ball.y,
                });
            }

            let mut top = None;
            let mut bottom = None;
            for (paddle, end) in &paddle_query {
                match end {
                    PaddleEnd::Top => top = Some(paddle),
                    PaddleEnd::Bottom => bottom = Some(paddle),
                }
            }
            if let (Some(top), Some(bottom)) = (top, bottom) {
                if let Some(end) = resolve_paddles(&mut ball, top, bottom) {
                    event_bus.emit(GameEvent::PaddleHit {
                        side: end,
                        deflection: ball.x_vel,
                    });
                }
            }
        }
        CollisionRule::ZoneDrill(zone) => {
            let now = time.elapsed_secs_f64();
            if let Ok((paddle, _)) = paddle_query.single() {
                if let ZoneOutcome::Contact { scored } =
                    resolve_zone_drill(&mut ball, paddle, zone, now)
                {
                    if scored {
                        score.top += 1;
                    }
                    event_bus.emit(GameEvent::DrillHit {
                        scored,
                        total: score.top,
                    });
                }
            }

            // The cooldown guards the paddle only; the walls always respond
            let side = resolve_side_walls(&mut ball);
            let end = resolve_end_walls(&mut ball);
            if side || end {
                event_bus.emit(GameEvent::WallBounce {
                    x: ball.x,
                    y: ball.y,
                });
            }
        }
        CollisionRule::ServeOnly => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32, x_vel: f32, y_vel: f32) -> Ball {
        let mut ball = Ball::new(x, y);
        ball.x_vel = x_vel;
        ball.y_vel = y_vel;
        ball
    }

    #[test]
    fn test_right_wall_clamps_and_inverts() {
        let mut ball = ball_at(COURT_WIDTH + 3.0, 500.0, 5.0, 2.0);
        assert!(resolve_side_walls(&mut ball));
        assert_eq!(ball.x, COURT_WIDTH - ball.radius);
        assert_eq!(ball.x_vel, -5.0);
        assert!(ball.x + ball.radius <= COURT_WIDTH);
        assert!(ball.x - ball.radius >= 0.0);
    }

    #[test]
    fn test_left_wall_clamps_and_inverts() {
        let mut ball = ball_at(2.0, 500.0, -5.0, 2.0);
        assert!(resolve_side_walls(&mut ball));
        assert_eq!(ball.x, ball.radius);
        assert_eq!(ball.x_vel, 5.0);
    }

    #[test]
    fn test_open_court_has_no_wall_response() {
        let mut ball = ball_at(500.0, 500.0, 5.0, 2.0);
        assert!(!resolve_side_walls(&mut ball));
        assert_eq!(ball.x_vel, 5.0);
    }

    #[test]
    fn test_end_walls_act_as_ceiling_and_floor() {
        let mut ball = ball_at(500.0, 2.0, 0.0, -6.0);
        assert!(resolve_end_walls(&mut ball));
        assert_eq!(ball.y, ball.radius);
        assert_eq!(ball.y_vel, 6.0);

        let mut ball = ball_at(500.0, COURT_HEIGHT, 0.0, 6.0);
        assert!(resolve_end_walls(&mut ball));
        assert_eq!(ball.y, COURT_HEIGHT - ball.radius);
        assert_eq!(ball.y_vel, -6.0);
    }

    #[test]
    fn test_center_court_contact_scenario() {
        // Ball at center court heading up; one tick later its leading edge
        // is inside the top paddle's span and the return is dead straight.
        let top = Paddle::new(481.0, 10.0);
        let bottom = Paddle::at_home(PaddleEnd::Bottom);

        let mut ball = ball_at(531.0, 500.0, 0.0, -6.0);
        ball.step();
        assert_eq!(ball.y, 494.0);

        ball.y = 30.0; // leading edge 23, inside [10, 30]
        let hit = resolve_paddles(&mut ball, &top, &bottom);
        assert_eq!(hit, Some(PaddleEnd::Top));
        assert_eq!(ball.y_vel, 6.0);
        assert_eq!(ball.x_vel, (531.0 - top.center_x()) / DEFLECT_DIVISOR);
        assert_eq!(ball.x_vel, 0.0);
    }

    #[test]
    fn test_offset_contact_deflects_proportionally() {
        let top = Paddle::new(481.0, 10.0); // center 531
        let bottom = Paddle::at_home(PaddleEnd::Bottom);

        let mut ball = ball_at(571.0, 25.0, 0.0, -6.0);
        assert_eq!(resolve_paddles(&mut ball, &top, &bottom), Some(PaddleEnd::Top));
        assert_eq!(ball.x_vel, 2.0); // (571 - 531) / 20
    }

    #[test]
    fn test_deflection_magnitude_is_clamped() {
        // Offsets far beyond the paddle span still cap at MAX_DEFLECT_SPEED
        for offset in [-400.0_f32, -200.0, 200.0, 400.0] {
            let clamped = deflection(531.0 + offset, 531.0);
            assert!(clamped.abs() <= MAX_DEFLECT_SPEED);
            assert_eq!(clamped.signum(), offset.signum());
        }
    }

    #[test]
    fn test_only_the_approached_paddle_is_active() {
        let top = Paddle::new(481.0, 10.0);
        let bottom = Paddle::new(481.0, 971.0);

        // Ball inside the top paddle's box but travelling down: no response
        let mut ball = ball_at(531.0, 25.0, 0.0, 6.0);
        assert_eq!(resolve_paddles(&mut ball, &top, &bottom), None);
        assert_eq!(ball.y_vel, 6.0);

        // Motionless ball never triggers either paddle
        let mut ball = ball_at(531.0, 25.0, 0.0, 0.0);
        assert_eq!(resolve_paddles(&mut ball, &top, &bottom), None);
    }

    #[test]
    fn test_wall_and_paddle_can_fire_in_the_same_tick() {
        // Ball pinched into the top-right corner against the paddle edge
        let top = Paddle::new(COURT_WIDTH - 100.0, 10.0);
        let bottom = Paddle::at_home(PaddleEnd::Bottom);

        let mut ball = ball_at(COURT_WIDTH - 1.0, 25.0, 4.0, -6.0);
        let bounced = resolve_side_walls(&mut ball);
        let hit = resolve_paddles(&mut ball, &top, &bottom);
        assert!(bounced);
        assert_eq!(hit, Some(PaddleEnd::Top));
        // Orthogonal axes: both responses applied
        assert_eq!(ball.y_vel, 6.0);
        assert!(ball.x + ball.radius <= COURT_WIDTH);
    }

    #[test]
    fn test_forehand_zone_is_the_left_half() {
        let paddle = Paddle::new(481.0, 10.0);
        let (start, end) = TargetZone::Forehand.span(&paddle);
        assert_eq!((start, end), (481.0, 531.0));
        let (start, end) = TargetZone::Backhand.span(&paddle);
        assert_eq!((start, end), (531.0, 581.0));
    }

    #[test]
    fn test_zone_contact_scores_only_in_target_half() {
        let paddle = Paddle::new(481.0, 10.0);

        let mut ball = ball_at(500.0, 25.0, 0.0, -6.0); // left half
        let outcome = resolve_zone_drill(&mut ball, &paddle, TargetZone::Forehand, 10.0);
        assert_eq!(outcome, ZoneOutcome::Contact { scored: true });
        assert_eq!(ball.y_vel, 6.0);

        let mut ball = ball_at(560.0, 25.0, 0.0, -6.0); // right half
        let outcome = resolve_zone_drill(&mut ball, &paddle, TargetZone::Forehand, 10.0);
        assert_eq!(outcome, ZoneOutcome::Contact { scored: false });
    }

    #[test]
    fn test_cooldown_suppresses_repeat_contacts() {
        let paddle = Paddle::new(481.0, 10.0);
        let mut ball = ball_at(500.0, 25.0, 0.0, -6.0);

        let first = resolve_zone_drill(&mut ball, &paddle, TargetZone::Forehand, 10.0);
        assert_eq!(first, ZoneOutcome::Contact { scored: true });

        // Same contact a tick later, still inside the hit-box
        ball.y_vel = -6.0;
        let repeat = resolve_zone_drill(&mut ball, &paddle, TargetZone::Forehand, 10.5);
        assert_eq!(repeat, ZoneOutcome::Miss);
        assert_eq!(ball.y_vel, -6.0); // response suppressed too

        // After the window expires the paddle responds again
        let later =
            resolve_zone_drill(&mut ball, &paddle, TargetZone::Forehand, 10.0 + COLLISION_COOLDOWN);
        assert_eq!(later, ZoneOutcome::Contact { scored: true });
    }
}
