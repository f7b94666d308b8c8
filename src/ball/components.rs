//! Ball state record

use bevy::prelude::*;

use crate::constants::*;

/// Ball state record in court space; `x`/`y` is the ball center.
/// Owned by the active mode session and mutated only through `&mut` access.
#[derive(Component, Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Velocity per fixed tick
    pub x_vel: f32,
    pub y_vel: f32,
    /// Monotonic timestamp of the last recorded paddle contact, used by the
    /// drill collision cooldown
    pub last_contact: f64,
    home_x: f32,
    home_y: f32,
}

impl Ball {
    /// Ball at rest-direction defaults: no horizontal motion, vertical
    /// velocity pointing up-court so the first reset flips it down
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            radius: BALL_RADIUS,
            x_vel: 0.0,
            y_vel: -BALL_MAX_VEL,
            // Backdated so the first contact is never inside the cooldown
            last_contact: -COLLISION_COOLDOWN,
            home_x: x,
            home_y: y,
        }
    }

    /// Integrate one fixed tick of motion
    pub fn step(&mut self) {
        self.x += self.x_vel;
        self.y += self.y_vel;
    }

    /// Restore the spawn position, invert the stored vertical direction so
    /// the next serve travels the opposite way, and kill horizontal motion
    pub fn reset(&mut self) {
        self.x = self.home_x;
        self.y = self.home_y;
        self.y_vel = -self.y_vel;
        self.x_vel = 0.0;
    }

    /// Leading edge on the vertical axis, by travel direction
    pub fn leading_edge_y(&self) -> f32 {
        if self.y_vel < 0.0 {
            self.y - self.radius
        } else {
            self.y + self.radius
        }
    }
}
