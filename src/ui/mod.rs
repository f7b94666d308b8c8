//! UI module - HUD, power gauge, banners, and menu screens

mod banner;
mod gauge;
mod hud;
mod menu;

pub use banner::*;
pub use gauge::*;
pub use hud::*;
pub use menu::*;
