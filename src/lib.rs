//! Ace Academy - a top-down tennis arcade game built with Bevy
//!
//! This crate provides all game components, resources, and systems organized into modules.

// Core modules
pub mod constants;
pub mod court;
pub mod events;
pub mod modes;

// Game logic modules
pub mod ai;
pub mod ball;
pub mod collision;
pub mod input;
pub mod paddle;
pub mod scoring;
pub mod serve;
pub mod ui;

// Re-export commonly used types for convenience
pub use ball::Ball;
pub use collision::{TargetZone, ZoneOutcome};
pub use constants::*;
pub use events::{BusEvent, EventBus, GameEvent, drain_event_bus, update_event_bus_time};
pub use input::{PadAxes, PlayerInput};
pub use modes::{
    CollisionRule, GameMode, MatchEntity, ModeRules, MovementRule, PaddleSet, ScoringRule,
    SelectedMode, Termination,
};
pub use paddle::{Paddle, PaddleEnd};
pub use scoring::Score;
pub use serve::{PowerGauge, ServePhase, ServeState};
pub use ui::{BannerThen, MenuAction, ModeBanner, Screen, banner_inactive};
