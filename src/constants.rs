//! Tunable constants for Ace Academy
//!
//! All gameplay values are defined here for easy tweaking.
//!
//! Gameplay runs in "court space": x in [0, COURT_WIDTH], y in
//! [0, COURT_HEIGHT] with y increasing downward (top paddle near y = 0).
//! Rendering maps court space to Bevy world space in `court`.

use bevy::prelude::*;

// =============================================================================
// COURT DIMENSIONS
// =============================================================================

pub const COURT_WIDTH: f32 = 1063.0;
pub const COURT_HEIGHT: f32 = 1001.0;

// =============================================================================
// COLORS
// =============================================================================

pub const PADDLE_COLOR: Color = Color::srgb(0.05, 0.05, 0.05);
/// Clear color behind the court sprite
pub const COURT_BACKGROUND_COLOR: Color = Color::srgb(0.13, 0.33, 0.18);
pub const TEXT_PRIMARY: Color = Color::srgb(1.0, 1.0, 1.0);
pub const GAUGE_BACKGROUND_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);

// =============================================================================
// PADDLE
// =============================================================================

pub const PADDLE_SIZE: Vec2 = Vec2::new(100.0, 20.0);
/// Paddle movement per fixed tick
pub const PADDLE_VEL: f32 = 6.0;
/// Gap between a paddle's home position and its baseline
pub const PADDLE_HOME_MARGIN: f32 = 10.0;

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 7.0;
/// Base ball speed; serve power scales this
pub const BALL_MAX_VEL: f32 = 6.0;
/// Deflection speed cap after a paddle response
pub const MAX_DEFLECT_SPEED: f32 = 8.0;
/// Divisor turning contact offset into horizontal deflection
pub const DEFLECT_DIVISOR: f32 = 20.0;
/// Downward feed velocity for the forehand/backhand drills
pub const DRILL_FEED_VEL: f32 = 15.0;

// =============================================================================
// SERVE POWER GAUGE
// =============================================================================

pub const POWER_MIN: f32 = 0.025;
pub const POWER_MAX: f32 = 4.5;
/// Triangle-wave step applied once per fixed tick while charging
pub const POWER_INCREMENT: f32 = 0.175;
/// Serve-drill serves at or above this fraction of POWER_MAX score a point
pub const SERVE_DRILL_THRESHOLD: f32 = 0.8;

// =============================================================================
// AI
// =============================================================================

/// AI paddle movement per fixed tick
pub const AI_VEL: f32 = 2.0;
/// Random aim offset applied to the AI's target point (+/- units)
pub const AI_JITTER: f32 = 25.0;

// =============================================================================
// SCORING
// =============================================================================

pub const WINNING_SCORE: u32 = 10;
/// Seconds a drill paddle ignores repeat contacts with the ball
pub const COLLISION_COOLDOWN: f64 = 3.0;

// =============================================================================
// TIMING
// =============================================================================

/// Fixed gameplay tick rate; per-tick velocities assume this
pub const TICK_HZ: f64 = 60.0;
/// Seconds a result/goal banner stays up before play resumes
pub const BANNER_SECONDS: f32 = 2.0;

// =============================================================================
// ASSETS
// =============================================================================

pub const ASSETS_DIR: &str = "assets";
pub const BALL_TEXTURE: &str = "tennis_ball.png";
pub const COURT_TEXTURE: &str = "court.png";
