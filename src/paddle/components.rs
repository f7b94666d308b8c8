//! Paddle components

use bevy::prelude::*;

use crate::constants::*;

/// Which baseline a paddle defends
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddleEnd {
    Top,
    Bottom,
}

impl PaddleEnd {
    /// Vertical direction a serve from this end travels: +1 is down-court
    pub fn serve_direction(&self) -> f32 {
        match self {
            PaddleEnd::Top => 1.0,
            PaddleEnd::Bottom => -1.0,
        }
    }

    pub fn opponent(&self) -> PaddleEnd {
        match self {
            PaddleEnd::Top => PaddleEnd::Bottom,
            PaddleEnd::Bottom => PaddleEnd::Top,
        }
    }
}

impl std::fmt::Display for PaddleEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaddleEnd::Top => write!(f, "Top"),
            PaddleEnd::Bottom => write!(f, "Bottom"),
        }
    }
}

/// Paddle state record in court space; `x`/`y` is the top-left corner.
/// Owned by the active mode session and mutated only through `&mut` access.
#[derive(Component, Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Movement per fixed tick
    pub vel: f32,
    home_x: f32,
    home_y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PADDLE_SIZE.x,
            height: PADDLE_SIZE.y,
            vel: PADDLE_VEL,
            home_x: x,
            home_y: y,
        }
    }

    /// Paddle at the home position for the given court end
    pub fn at_home(end: PaddleEnd) -> Self {
        let x = (COURT_WIDTH - PADDLE_SIZE.x) / 2.0;
        let y = match end {
            PaddleEnd::Top => PADDLE_HOME_MARGIN,
            PaddleEnd::Bottom => COURT_HEIGHT - PADDLE_HOME_MARGIN - PADDLE_SIZE.y,
        };
        Self::new(x, y)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Right edge of the paddle's horizontal span
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Lower edge of the paddle's vertical span (court space, y down)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Advance one tick horizontally. No bounds check here; callers clamp
    /// against the court (or their half of it) before invoking.
    pub fn move_x(&mut self, direction: f32) {
        self.x += self.vel * direction.signum();
    }

    /// Advance one tick vertically. Bounds are the caller's job, as above.
    pub fn move_y(&mut self, direction: f32) {
        self.y += self.vel * direction.signum();
    }

    /// Restore the original spawn coordinates
    pub fn reset(&mut self) {
        self.x = self.home_x;
        self.y = self.home_y;
    }
}
