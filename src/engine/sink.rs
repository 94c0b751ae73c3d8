// src/engine/sink.rs

//! Event sinks.
//!
//! The engine reports what it does through an [`EventSink`] and never waits
//! on it. Rendering, logging and test assertions all live on the sink side.

use tokio::sync::mpsc;
use tracing::debug;

use super::ScheduleEvent;

/// Receiver of engine events.
pub trait EventSink {
    fn on_event(&mut self, event: ScheduleEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: ScheduleEvent) {}
}

/// Keeps every event in memory. Mostly useful in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<ScheduleEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn on_event(&mut self, event: ScheduleEvent) {
        self.events.push(event);
    }
}

/// Forwards events over an unbounded tokio channel so a renderer can consume
/// them on another task without ever blocking the engine.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ScheduleEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<ScheduleEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn on_event(&mut self, event: ScheduleEvent) {
        if self.tx.send(event).is_err() {
            debug!("event receiver dropped; discarding event");
        }
    }
}
