//! Frontier events emitted while a search runs.
//!
//! The search never calls into presentation code directly. It pushes a
//! [`FrontierEvent`] into a [`FrontierSink`] each time a node enters the
//! frontier or is re-queued with a lower cost; a consumer drains the sink
//! afterwards (or reacts synchronously via a closure).

use std::collections::VecDeque;

use jumpgrid_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierEventKind {
    /// First time the node entered the frontier in this search.
    Opened,
    /// The node was re-queued with a strictly lower `g`.
    Improved,
}

/// A node entering the frontier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierEvent {
    pub pos: Point,
    pub g: f64,
    pub f: f64,
    pub kind: FrontierEventKind,
}

/// Receiver for [`FrontierEvent`]s.
///
/// Implemented by [`EventLog`] and by any `FnMut(FrontierEvent)` closure.
pub trait FrontierSink {
    fn push(&mut self, event: FrontierEvent);
}

impl<F: FnMut(FrontierEvent)> FrontierSink for F {
    #[inline]
    fn push(&mut self, event: FrontierEvent) {
        self(event)
    }
}

/// Sink that drops every event.
pub(crate) struct Discard;

impl FrontierSink for Discard {
    #[inline]
    fn push(&mut self, _event: FrontierEvent) {}
}

/// An ordered buffer of frontier events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: VecDeque<FrontierEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over buffered events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEvent> {
        self.events.iter()
    }

    /// Remove and return all buffered events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = FrontierEvent> + '_ {
        self.events.drain(..)
    }

    /// Remove and return the oldest event.
    pub fn pop(&mut self) -> Option<FrontierEvent> {
        self.events.pop_front()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl FrontierSink for EventLog {
    fn push(&mut self, event: FrontierEvent) {
        self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(x: i32) -> FrontierEvent {
        FrontierEvent {
            pos: Point::new(x, 0),
            g: x as f64,
            f: x as f64,
            kind: FrontierEventKind::Opened,
        }
    }

    #[test]
    fn log_drains_in_order() {
        let mut log = EventLog::new();
        log.push(event(1));
        log.push(event(2));
        log.push(event(3));
        assert_eq!(log.len(), 3);
        assert_eq!(log.pop().map(|e| e.pos.x), Some(1));
        let rest: Vec<i32> = log.drain().map(|e| e.pos.x).collect();
        assert_eq!(rest, vec![2, 3]);
        assert!(log.is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |e: FrontierEvent| seen.push(e.pos);
            sink.push(event(4));
            sink.push(event(5));
        }
        assert_eq!(seen, vec![Point::new(4, 0), Point::new(5, 0)]);
    }
}
