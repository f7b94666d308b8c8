//! Mode configuration - one parameterized orchestrator instead of a loop per mode
//!
//! Every mode runs the same per-tick pipeline (input, movement, serve,
//! integration, collision, scoring, termination). `ModeRules` is the
//! configuration record that tells the shared systems which entity set,
//! movement bounds, collision ruleset, scoring rule and termination
//! behavior the active mode uses.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::ball::Ball;
use crate::collision::TargetZone;
use crate::constants::*;
use crate::court;
use crate::events::{EventBus, GameEvent};
use crate::input::PlayerInput;
use crate::paddle::{Paddle, PaddleEnd};
use crate::scoring::Score;
use crate::serve::ServeState;
use crate::ui;

/// The five playable modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    VsPlayer,
    VsAi,
    ForehandDrill,
    BackhandDrill,
    ServeDrill,
}

impl GameMode {
    /// Window caption while the mode is active
    pub fn caption(&self) -> &'static str {
        match self {
            GameMode::VsPlayer => "Ace Academy - VS Player Mode",
            GameMode::VsAi => "Ace Academy - VS AI Mode",
            GameMode::ForehandDrill => "Ace Academy - Forehand Learning Mode",
            GameMode::BackhandDrill => "Ace Academy - Backhand Learning Mode",
            GameMode::ServeDrill => "Ace Academy - Serve Learning Mode",
        }
    }
}

/// Which paddles a mode spawns
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleSet {
    Both,
    TopOnly,
    BottomOnly,
}

impl PaddleSet {
    pub fn ends(&self) -> &'static [PaddleEnd] {
        match self {
            PaddleSet::Both => &[PaddleEnd::Top, PaddleEnd::Bottom],
            PaddleSet::TopOnly => &[PaddleEnd::Top],
            PaddleSet::BottomOnly => &[PaddleEnd::Bottom],
        }
    }
}

/// Movement bounds for paddles in the active mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementRule {
    /// Each paddle confined to its own half of the court
    HalfCourt,
    /// Single drill paddle roams the whole court
    FullCourt,
    /// Paddle does not move (serve drill)
    Fixed,
}

impl MovementRule {
    /// Allowed interval for a paddle's top edge
    pub fn y_range(&self, end: PaddleEnd) -> (f32, f32) {
        match self {
            MovementRule::HalfCourt => match end {
                PaddleEnd::Top => (0.0, COURT_HEIGHT / 2.0 - PADDLE_SIZE.y),
                PaddleEnd::Bottom => (COURT_HEIGHT / 2.0, COURT_HEIGHT - PADDLE_SIZE.y),
            },
            MovementRule::FullCourt | MovementRule::Fixed => {
                (0.0, COURT_HEIGHT - PADDLE_SIZE.y)
            }
        }
    }
}

/// Collision ruleset applied each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionRule {
    /// Side walls plus the paddle the ball travels toward
    TwoPaddle,
    /// All four walls plus zone-scored paddle contacts
    ZoneDrill(TargetZone),
    /// No contacts; the ball only flies off the top (serve drill)
    ServeOnly,
}

/// How points are earned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoringRule {
    /// Out-of-bounds ball awards the opposite side a point
    Rally,
    /// Zone contacts increment the drill counter
    ZoneHits,
    /// Serves released at high power increment the drill counter
    PowerServes,
}

/// What happens when a score reaches WINNING_SCORE
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Competitive match: result banner, then back to the menu
    MatchPoint,
    /// Drill: goal banner, then the counter resets and play continues
    DrillLoop,
    /// Serve drill: goal banner, then back to the menu
    DrillExit,
}

/// Configuration record for the active mode session
#[derive(Resource, Clone, Copy, Debug)]
pub struct ModeRules {
    pub mode: GameMode,
    pub paddles: PaddleSet,
    pub movement: MovementRule,
    pub collision: CollisionRule,
    pub scoring: ScoringRule,
    pub termination: Termination,
    /// Bottom paddle is driven by the AI tracker instead of the keyboard
    pub ai_bottom: bool,
}

impl ModeRules {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::VsPlayer => Self {
                mode,
                paddles: PaddleSet::Both,
                movement: MovementRule::HalfCourt,
                collision: CollisionRule::TwoPaddle,
                scoring: ScoringRule::Rally,
                termination: Termination::MatchPoint,
                ai_bottom: false,
            },
            GameMode::VsAi => Self {
                mode,
                paddles: PaddleSet::Both,
                movement: MovementRule::HalfCourt,
                collision: CollisionRule::TwoPaddle,
                scoring: ScoringRule::Rally,
                termination: Termination::MatchPoint,
                ai_bottom: true,
            },
            GameMode::ForehandDrill => Self {
                mode,
                paddles: PaddleSet::TopOnly,
                movement: MovementRule::FullCourt,
                collision: CollisionRule::ZoneDrill(TargetZone::Forehand),
                scoring: ScoringRule::ZoneHits,
                termination: Termination::DrillLoop,
                ai_bottom: false,
            },
            GameMode::BackhandDrill => Self {
                mode,
                paddles: PaddleSet::TopOnly,
                movement: MovementRule::FullCourt,
                collision: CollisionRule::ZoneDrill(TargetZone::Backhand),
                scoring: ScoringRule::ZoneHits,
                termination: Termination::DrillLoop,
                ai_bottom: false,
            },
            GameMode::ServeDrill => Self {
                mode,
                paddles: PaddleSet::BottomOnly,
                movement: MovementRule::Fixed,
                collision: CollisionRule::ServeOnly,
                scoring: ScoringRule::PowerServes,
                termination: Termination::DrillExit,
                ai_bottom: false,
            },
        }
    }

    /// Drill modes route the WASD axes to their single paddle
    pub fn is_drill(&self) -> bool {
        self.paddles != PaddleSet::Both
    }
}

/// Mode chosen in the menu, read by `setup_match`
#[derive(Resource, Clone, Copy, Debug)]
pub struct SelectedMode(pub GameMode);

/// Marker for entities that live only as long as the active mode session
#[derive(Component)]
pub struct MatchEntity;

/// Spawn the entity set and session resources for the selected mode
pub fn setup_match(
    mut commands: Commands,
    selected: Res<SelectedMode>,
    asset_server: Res<AssetServer>,
    mut event_bus: ResMut<EventBus>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    let rules = ModeRules::for_mode(selected.0);

    if let Ok(mut window) = window_query.single_mut() {
        window.title = rules.mode.caption().into();
    }

    court::spawn_background(&mut commands, &asset_server);

    for &end in rules.paddles.ends() {
        let paddle = Paddle::at_home(end);
        let translation =
            court::court_to_world(paddle.center_x(), paddle.center_y(), 1.0);
        commands.spawn((
            Sprite::from_color(PADDLE_COLOR, PADDLE_SIZE),
            Transform::from_translation(translation),
            paddle,
            end,
            MatchEntity,
        ));
    }

    // Ball spawn point and initial motion differ per mode: competitive play
    // waits at center court for a serve, the swing drills feed the ball from
    // the top baseline immediately, the serve drill rests it on the paddle.
    let mut ball = match rules.mode {
        GameMode::VsPlayer | GameMode::VsAi => {
            Ball::new(COURT_WIDTH / 2.0, COURT_HEIGHT / 2.0)
        }
        GameMode::ForehandDrill | GameMode::BackhandDrill => {
            let mut ball =
                Ball::new(COURT_WIDTH / 2.0, PADDLE_HOME_MARGIN + PADDLE_SIZE.y);
            ball.y_vel = DRILL_FEED_VEL;
            ball
        }
        GameMode::ServeDrill => {
            // Resting on top of the bottom paddle, waiting for the serve
            let mut ball = Ball::new(
                COURT_WIDTH / 2.0,
                COURT_HEIGHT - PADDLE_HOME_MARGIN - PADDLE_SIZE.y - BALL_RADIUS,
            );
            ball.y_vel = 0.0;
            ball
        }
    };
    ball.x_vel = 0.0;

    let ball_translation = court::court_to_world(ball.x, ball.y, 2.0);
    commands.spawn((
        Sprite {
            image: asset_server.load(BALL_TEXTURE),
            custom_size: Some(Vec2::splat(BALL_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_translation(ball_translation),
        ball,
        MatchEntity,
    ));

    ui::spawn_hud(&mut commands);
    ui::spawn_power_gauge(&mut commands);
    ui::spawn_banner_text(&mut commands);

    let serve = match rules.mode {
        // Swing drills start with the ball already in flight
        GameMode::ForehandDrill | GameMode::BackhandDrill => {
            ServeState::in_play()
        }
        GameMode::ServeDrill => ServeState::awaiting(PaddleEnd::Bottom),
        GameMode::VsPlayer | GameMode::VsAi => ServeState::awaiting(PaddleEnd::Top),
    };

    commands.insert_resource(rules);
    commands.insert_resource(serve);
    commands.insert_resource(Score::default());
    commands.insert_resource(ui::ModeBanner::default());
    // drop any serve edges left over from the previous session
    commands.insert_resource(PlayerInput::default());

    event_bus.emit(GameEvent::MatchStart { mode: rules.mode });
    info!("Starting mode: {:?}", rules.mode);
}

/// Despawn the session's entities and drop its resources
pub fn teardown_match(
    mut commands: Commands,
    entities: Query<Entity, With<MatchEntity>>,
    mut window_query: Query<&mut Window, With<PrimaryWindow>>,
) {
    for entity in &entities {
        commands.entity(entity).despawn();
    }
    commands.remove_resource::<ModeRules>();
    commands.remove_resource::<ServeState>();
    commands.remove_resource::<Score>();
    commands.remove_resource::<ui::ModeBanner>();

    if let Ok(mut window) = window_query.single_mut() {
        window.title = "Ace Academy".into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competitive_modes_confine_paddles_to_their_half() {
        for mode in [GameMode::VsPlayer, GameMode::VsAi] {
            let rules = ModeRules::for_mode(mode);
            assert_eq!(rules.movement, MovementRule::HalfCourt);
            let (top_min, top_max) = rules.movement.y_range(PaddleEnd::Top);
            assert_eq!(top_min, 0.0);
            assert!(top_max + PADDLE_SIZE.y <= COURT_HEIGHT / 2.0);
            let (bottom_min, _) = rules.movement.y_range(PaddleEnd::Bottom);
            assert_eq!(bottom_min, COURT_HEIGHT / 2.0);
        }
    }

    #[test]
    fn test_only_vs_ai_enables_the_tracker() {
        for mode in [
            GameMode::VsPlayer,
            GameMode::VsAi,
            GameMode::ForehandDrill,
            GameMode::BackhandDrill,
            GameMode::ServeDrill,
        ] {
            let rules = ModeRules::for_mode(mode);
            assert_eq!(rules.ai_bottom, mode == GameMode::VsAi);
        }
    }

    #[test]
    fn test_drills_use_a_single_paddle() {
        assert_eq!(
            ModeRules::for_mode(GameMode::ForehandDrill).paddles.ends(),
            &[PaddleEnd::Top]
        );
        assert_eq!(
            ModeRules::for_mode(GameMode::ServeDrill).paddles.ends(),
            &[PaddleEnd::Bottom]
        );
    }

    #[test]
    fn test_swing_drills_target_opposite_zones() {
        let forehand = ModeRules::for_mode(GameMode::ForehandDrill);
        let backhand = ModeRules::for_mode(GameMode::BackhandDrill);
        assert_eq!(
            forehand.collision,
            CollisionRule::ZoneDrill(TargetZone::Forehand)
        );
        assert_eq!(
            backhand.collision,
            CollisionRule::ZoneDrill(TargetZone::Backhand)
        );
    }
}
