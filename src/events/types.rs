//! Event type definitions

use crate::modes::GameMode;
use crate::paddle::PaddleEnd;

/// All gameplay events the bus carries
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A mode session began
    MatchStart { mode: GameMode },
    /// A serve was released at the given gauge power
    Serve { side: PaddleEnd, power: f32 },
    /// The ball bounced off a court wall
    WallBounce { x: f32, y: f32 },
    /// A paddle returned the ball; `deflection` is the resulting x velocity
    PaddleHit { side: PaddleEnd, deflection: f32 },
    /// A drill contact or serve attempt; `scored` marks a counted hit
    DrillHit { scored: bool, total: u32 },
    /// A rally point was awarded
    PointScored { side: PaddleEnd, top: u32, bottom: u32 },
    /// A competitive match reached the winning threshold
    MatchEnd { top: u32, bottom: u32 },
}
