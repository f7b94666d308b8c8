//! Serve/power mechanic - charge-on-hold, triangle-wave gauge, scaled release
//!
//! State machine: Idle (serve owed, ball waiting on the server's paddle)
//! -> Charging (gauge oscillates once per fixed tick while the serve key is
//! held) -> release applies the power-scaled velocity toward the receiving
//! side and the point goes Live; the machine re-enters Idle when the point
//! resolves.

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::input::PlayerInput;
use crate::modes::{ModeRules, ScoringRule};
use crate::paddle::{Paddle, PaddleEnd};
use crate::scoring::Score;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServePhase {
    /// A serve is owed; the ball is motionless
    Idle,
    /// Serve key held; the gauge is oscillating
    Charging,
    /// The point is in progress
    Live,
}

/// Triangle-wave power gauge, bounded to [POWER_MIN, POWER_MAX]
#[derive(Clone, Copy, Debug)]
pub struct PowerGauge {
    pub level: f32,
    direction: f32,
}

impl Default for PowerGauge {
    fn default() -> Self {
        Self {
            level: POWER_MIN,
            direction: 1.0,
        }
    }
}

impl PowerGauge {
    /// One charging tick: step the level and flip direction at the bounds
    pub fn tick(&mut self) {
        self.level += POWER_INCREMENT * self.direction;
        if self.level >= POWER_MAX {
            self.level = POWER_MAX;
            self.direction = -1.0;
        } else if self.level <= POWER_MIN {
            self.level = POWER_MIN;
            self.direction = 1.0;
        }
    }

    /// Consume the charge: back to minimum, rising
    pub fn reset(&mut self) {
        self.level = POWER_MIN;
        self.direction = 1.0;
    }
}

/// Serve state for the active mode session
#[derive(Resource, Clone, Copy, Debug)]
pub struct ServeState {
    pub phase: ServePhase,
    /// Which end owes the next serve
    pub server: PaddleEnd,
    pub power: PowerGauge,
}

impl ServeState {
    /// Waiting for the given end to serve
    pub fn awaiting(server: PaddleEnd) -> Self {
        Self {
            phase: ServePhase::Idle,
            server,
            power: PowerGauge::default(),
        }
    }

    /// Ball already in flight (swing drills feed it immediately)
    pub fn in_play() -> Self {
        Self {
            phase: ServePhase::Live,
            server: PaddleEnd::Top,
            power: PowerGauge::default(),
        }
    }

    /// Point over: the given end owes the next serve
    pub fn await_serve(&mut self, server: PaddleEnd) {
        self.phase = ServePhase::Idle;
        self.server = server;
        self.power.reset();
    }
}

/// Serve-drill success test: released at 80% of maximum power or above
pub fn is_ace_power(power: f32) -> bool {
    power >= SERVE_DRILL_THRESHOLD * POWER_MAX
}

/// Place the ball on the server's paddle and apply the power-scaled velocity
/// toward the receiving side
pub fn launch(ball: &mut Ball, paddle: &Paddle, server: PaddleEnd, power: f32) {
    ball.x = paddle.center_x();
    ball.y = match server {
        PaddleEnd::Top => paddle.bottom(),
        PaddleEnd::Bottom => paddle.y - ball.radius,
    };
    ball.x_vel = 0.0;
    ball.y_vel = server.serve_direction() * BALL_MAX_VEL * power;
}

/// Triangle-wave increment, applied once per fixed tick while charging.
/// The increment never runs in any other phase.
pub fn charge_tick(input: Res<PlayerInput>, mut serve: ResMut<ServeState>) {
    if serve.phase == ServePhase::Charging && input.serve_held {
        serve.power.tick();
    }
}

/// Key-edge transitions: press while a serve is owed begins charging,
/// release fires the serve
pub fn serve_transitions(
    mut input: ResMut<PlayerInput>,
    rules: Res<ModeRules>,
    mut serve: ResMut<ServeState>,
    mut score: ResMut<Score>,
    mut event_bus: ResMut<EventBus>,
    mut ball_query: Query<&mut Ball>,
    paddle_query: Query<(&Paddle, &PaddleEnd)>,
) {
    let pressed = std::mem::take(&mut input.serve_pressed);
    let released = std::mem::take(&mut input.serve_released);

    match serve.phase {
        ServePhase::Idle if pressed => {
            serve.phase = ServePhase::Charging;
        }
        ServePhase::Charging if released => {
            let Ok(mut ball) = ball_query.single_mut() else {
                return;
            };
            let Some(paddle) = paddle_query
                .iter()
                .find(|(_, end)| **end == serve.server)
                .map(|(paddle, _)| paddle)
            else {
                return;
            };

            let power = serve.power.level;
            if rules.scoring == ScoringRule::PowerServes {
                let scored = is_ace_power(power);
                if scored {
                    score.top += 1;
                }
                event_bus.emit(GameEvent::DrillHit {
                    scored,
                    total: score.top,
                });
            }

            launch(&mut ball, paddle, serve.server, power);
            event_bus.emit(GameEvent::Serve {
                side: serve.server,
                power,
            });
            serve.power.reset();
            serve.phase = ServePhase::Live;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_stays_bounded_for_any_hold_length() {
        let mut gauge = PowerGauge::default();
        for _ in 0..1000 {
            gauge.tick();
            assert!(
                (POWER_MIN..=POWER_MAX).contains(&gauge.level),
                "gauge escaped bounds: {}",
                gauge.level
            );
        }
    }

    #[test]
    fn test_gauge_oscillates_as_a_triangle_wave() {
        let mut gauge = PowerGauge::default();

        // 26 rising ticks saturate the gauge at the top bound
        for _ in 0..26 {
            gauge.tick();
        }
        assert_eq!(gauge.level, POWER_MAX);

        // Direction flipped at the bound: the next tick descends
        gauge.tick();
        assert_eq!(gauge.level, POWER_MAX - POWER_INCREMENT);

        // And the wave comes back down to the low bound and turns again
        for _ in 0..26 {
            gauge.tick();
        }
        assert_eq!(gauge.level, POWER_MIN);
        gauge.tick();
        assert!(gauge.level > POWER_MIN);
    }

    #[test]
    fn test_release_resets_gauge_to_minimum() {
        let mut gauge = PowerGauge::default();
        for _ in 0..7 {
            gauge.tick();
        }
        assert!(gauge.level > POWER_MIN);
        gauge.reset();
        assert_eq!(gauge.level, POWER_MIN);
    }

    #[test]
    fn test_launch_serves_toward_the_receiving_side() {
        let top = Paddle::at_home(PaddleEnd::Top);
        let mut ball = Ball::new(100.0, 100.0);
        launch(&mut ball, &top, PaddleEnd::Top, 2.0);
        assert_eq!(ball.x, top.center_x());
        assert_eq!(ball.y, top.bottom());
        assert_eq!(ball.y_vel, BALL_MAX_VEL * 2.0); // down-court
        assert_eq!(ball.x_vel, 0.0);

        let bottom = Paddle::at_home(PaddleEnd::Bottom);
        launch(&mut ball, &bottom, PaddleEnd::Bottom, 3.0);
        assert_eq!(ball.y, bottom.y - ball.radius);
        assert_eq!(ball.y_vel, -BALL_MAX_VEL * 3.0); // up-court
    }

    #[test]
    fn test_ace_threshold_is_80_percent_of_max() {
        assert!(is_ace_power(POWER_MAX));
        assert!(is_ace_power(0.8 * POWER_MAX));
        assert!(!is_ace_power(0.8 * POWER_MAX - 0.01));
        assert!(!is_ace_power(POWER_MIN));
    }

    #[test]
    fn test_await_serve_resets_phase_and_gauge() {
        let mut serve = ServeState::in_play();
        serve.power.tick();
        serve.await_serve(PaddleEnd::Bottom);
        assert_eq!(serve.phase, ServePhase::Idle);
        assert_eq!(serve.server, PaddleEnd::Bottom);
        assert_eq!(serve.power.level, POWER_MIN);
    }
}
