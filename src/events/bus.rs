//! Event bus - central hub for gameplay milestone reporting
//!
//! Systems emit events to the bus; `drain_event_bus` consumes them each
//! frame and writes them to the structured log.

use bevy::prelude::*;

use super::types::GameEvent;

/// Timestamped event on the bus
#[derive(Debug, Clone)]
pub struct BusEvent {
    /// Time in milliseconds since app start
    pub time_ms: u32,
    pub event: GameEvent,
}

/// Central event bus
#[derive(Resource, Default)]
pub struct EventBus {
    /// Events emitted this frame, waiting to be consumed
    pending: Vec<BusEvent>,
    /// Current elapsed time in milliseconds, for timestamping
    elapsed_ms: u32,
    /// Whether the bus accepts events (disabled in unit tests)
    enabled: bool,
}

impl EventBus {
    /// Create a new enabled event bus
    pub fn new() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Create a disabled bus; emitted events are dropped
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Update the elapsed time (called each frame)
    pub fn update_time(&mut self, elapsed_secs: f32) {
        self.elapsed_ms = (elapsed_secs * 1000.0) as u32;
    }

    /// Emit an event to the bus
    pub fn emit(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(BusEvent {
            time_ms: self.elapsed_ms,
            event,
        });
    }

    /// Drain pending events
    pub fn drain(&mut self) -> Vec<BusEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Get pending events without draining
    pub fn peek(&self) -> &[BusEvent] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// System to keep the bus timestamp current
pub fn update_event_bus_time(mut bus: ResMut<EventBus>, time: Res<Time>) {
    bus.update_time(time.elapsed_secs());
}

/// System draining the bus into the structured log each frame
pub fn drain_event_bus(mut bus: ResMut<EventBus>) {
    for BusEvent { time_ms, event } in bus.drain() {
        info!("[{time_ms}ms] {event:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paddle::PaddleEnd;

    #[test]
    fn test_emit_and_drain() {
        let mut bus = EventBus::new();
        bus.update_time(1.5);

        bus.emit(GameEvent::Serve {
            side: PaddleEnd::Top,
            power: 2.0,
        });

        assert_eq!(bus.pending_count(), 1);
        let events = bus.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_ms, 1500);
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_disabled_bus_drops_events() {
        let mut bus = EventBus::disabled();
        bus.emit(GameEvent::WallBounce { x: 0.0, y: 0.0 });
        assert_eq!(bus.pending_count(), 0);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut bus = EventBus::new();
        bus.emit(GameEvent::MatchEnd { top: 10, bottom: 4 });
        assert_eq!(bus.peek().len(), 1);
        assert_eq!(bus.pending_count(), 1);
    }
}
