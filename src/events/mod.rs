//! Game event bus - decoupled reporting of gameplay milestones
//!
//! Gameplay systems emit timestamped events to the bus; a drain system
//! forwards them to the structured log each frame.

mod bus;
mod types;

pub use bus::{BusEvent, EventBus, drain_event_bus, update_event_bus_time};
pub use types::GameEvent;
