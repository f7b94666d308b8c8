//! Scoring - out-of-bounds points, possession, and termination checks

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::modes::{GameMode, ModeRules, ScoringRule, Termination};
use crate::paddle::{Paddle, PaddleEnd};
use crate::serve::{ServePhase, ServeState};
use crate::ui::{BannerThen, ModeBanner};

/// Score resource: one counter per court end. Drills use the top slot as
/// their single counter, mirroring the original layout.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct Score {
    pub top: u32,
    pub bottom: u32,
}

impl Score {
    pub fn for_end(&self, end: PaddleEnd) -> u32 {
        match end {
            PaddleEnd::Top => self.top,
            PaddleEnd::Bottom => self.bottom,
        }
    }

    pub fn award(&mut self, end: PaddleEnd) {
        match end {
            PaddleEnd::Top => self.top += 1,
            PaddleEnd::Bottom => self.bottom += 1,
        }
    }

    /// First end at or past the winning threshold. Triggers exactly at
    /// WINNING_SCORE, regardless of the other side's count.
    pub fn winner(&self) -> Option<PaddleEnd> {
        if self.top >= WINNING_SCORE {
            Some(PaddleEnd::Top)
        } else if self.bottom >= WINNING_SCORE {
            Some(PaddleEnd::Bottom)
        } else {
            None
        }
    }
}

/// Register out-of-bounds balls: award the point, reset entities, and hand
/// possession to the next server. The serve drill only resets its ball.
pub fn check_out_of_bounds(
    rules: Res<ModeRules>,
    mut serve: ResMut<ServeState>,
    mut score: ResMut<Score>,
    mut event_bus: ResMut<EventBus>,
    mut ball_query: Query<&mut Ball>,
    mut paddle_query: Query<&mut Paddle>,
) {
    if serve.phase != ServePhase::Live {
        return;
    }
    let Ok(mut ball) = ball_query.single_mut() else {
        return;
    };

    match rules.scoring {
        ScoringRule::Rally => {
            let scorer = if ball.y < 0.0 {
                // Past the top baseline: the bottom side takes the point
                Some(PaddleEnd::Bottom)
            } else if ball.y > COURT_HEIGHT {
                Some(PaddleEnd::Top)
            } else {
                None
            };

            if let Some(scorer) = scorer {
                score.award(scorer);
                event_bus.emit(GameEvent::PointScored {
                    side: scorer,
                    top: score.top,
                    bottom: score.bottom,
                });
                info!("POINT {scorer}: {} - {}", score.top, score.bottom);

                ball.reset();
                for mut paddle in &mut paddle_query {
                    paddle.reset();
                }
                // The scoring side serves next; against the AI the human
                // (top) paddle always serves
                let next_server = if rules.ai_bottom {
                    PaddleEnd::Top
                } else {
                    scorer
                };
                serve.await_serve(next_server);
            }
        }
        ScoringRule::PowerServes => {
            // A served ball leaving the top of the court resets for the
            // next attempt; points were already counted at release
            if ball.y < 0.0 {
                ball.reset();
                serve.await_serve(PaddleEnd::Bottom);
            }
        }
        ScoringRule::ZoneHits => {
            // Full-court walls keep the ball in play; nothing to do here
        }
    }
}

/// Terminate the mode when a counter reaches the winning threshold
pub fn check_win(
    rules: Res<ModeRules>,
    score: Res<Score>,
    mut banner: ResMut<ModeBanner>,
    mut event_bus: ResMut<EventBus>,
) {
    if banner.active {
        return;
    }
    let Some(winner) = score.winner() else {
        return;
    };

    match rules.termination {
        Termination::MatchPoint => {
            event_bus.emit(GameEvent::MatchEnd {
                top: score.top,
                bottom: score.bottom,
            });
            let text = match winner {
                PaddleEnd::Top => "Top player wins!",
                PaddleEnd::Bottom => "Bottom player wins!",
            };
            banner.show(text, BannerThen::ExitToMenu);
        }
        Termination::DrillLoop => {
            let text = match rules.mode {
                GameMode::BackhandDrill => "You managed to hit 10 backhand shots",
                _ => "You managed to hit 10 forehand shots",
            };
            banner.show(text, BannerThen::ResetScore);
        }
        Termination::DrillExit => {
            banner.show("Congratulations! You served 10 times!", BannerThen::ExitToMenu);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_triggers_exactly_at_threshold() {
        let mut score = Score::default();
        for _ in 0..WINNING_SCORE - 1 {
            score.award(PaddleEnd::Top);
            assert_eq!(score.winner(), None);
        }
        score.award(PaddleEnd::Top);
        assert_eq!(score.winner(), Some(PaddleEnd::Top));
    }

    #[test]
    fn test_win_ignores_the_other_side() {
        let score = Score {
            top: 3,
            bottom: WINNING_SCORE,
        };
        assert_eq!(score.winner(), Some(PaddleEnd::Bottom));
    }

    #[test]
    fn test_award_increments_the_right_counter() {
        let mut score = Score::default();
        score.award(PaddleEnd::Bottom);
        score.award(PaddleEnd::Bottom);
        score.award(PaddleEnd::Top);
        assert_eq!(score.for_end(PaddleEnd::Top), 1);
        assert_eq!(score.for_end(PaddleEnd::Bottom), 2);
    }
}
