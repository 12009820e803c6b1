//! Structured trace diagnostics
//!
//! Every validation failure, ignored object channel, truncation and
//! termination produces one [`TraceEvent`] handed to an injected
//! [`TraceObserver`]. Logging is one observer among others.

use std::cell::RefCell;

use crate::physics::collision_layers::CollisionChannel;
use crate::physics::query::ObjectId;
use crate::trace::error::TraceError;
use crate::trace::stepper::DegenerateReason;

/// A diagnostic emitted while tracing
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A requested channel cannot filter objects and was dropped
    InvalidObjectType {
        /// The dropped channel
        channel: CollisionChannel,
    },
    /// The trace was rejected before any sweep
    Rejected {
        /// Why
        error: TraceError,
    },
    /// "Ignore self" found no ignorable object on the owner chain
    SelfNotFound,
    /// A blocking hit replaced the collected hits
    HitsTruncated {
        /// Index of the sweep that blocked
        sweep: usize,
        /// The blocking object
        object: ObjectId,
    },
    /// Sweeping stopped on a blocking hit
    HaltedOnHit {
        /// Index of the sweep that blocked
        sweep: usize,
    },
    /// Stepping broke down before reaching the end of the cone
    SteppingDegenerate {
        /// Why
        reason: DegenerateReason,
        /// Spheres emitted before the breakdown, the end sphere excluded
        spheres: usize,
    },
    /// The trace ran to the end
    Completed {
        /// Spheres swept
        spheres: usize,
        /// Sweeps issued
        sweeps: usize,
        /// Hits returned
        hits: usize,
    },
}

/// Receiver of trace diagnostics
pub trait TraceObserver {
    /// Called once per event, in emission order
    fn on_event(&self, event: &TraceEvent);
}

impl<F: Fn(&TraceEvent)> TraceObserver for F {
    fn on_event(&self, event: &TraceEvent) {
        self(event);
    }
}

/// Forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TraceObserver for LogObserver {
    fn on_event(&self, event: &TraceEvent) {
        match event {
            TraceEvent::InvalidObjectType { channel } => {
                log::warn!("Cone trace: invalid object type {channel:?} ignored");
            }
            TraceEvent::Rejected { error } => {
                log::error!("Cone trace rejected: {error}");
            }
            TraceEvent::SelfNotFound => {
                log::debug!("Cone trace: no ignorable owner found for self");
            }
            TraceEvent::HitsTruncated { sweep, object } => {
                log::debug!("Cone trace: sweep {sweep} blocked on {object:?}, hits truncated");
            }
            TraceEvent::HaltedOnHit { sweep } => {
                log::debug!("Cone trace: halted after sweep {sweep}");
            }
            TraceEvent::SteppingDegenerate { reason, spheres } => {
                log::warn!("Cone trace: stepping stopped after {spheres} spheres ({reason:?})");
            }
            TraceEvent::Completed { spheres, sweeps, hits } => {
                log::debug!("Cone trace: {spheres} spheres, {sweeps} sweeps, {hits} hits");
            }
        }
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TraceObserver for NullObserver {
    fn on_event(&self, _event: &TraceEvent) {}
}

/// Keeps every event it sees
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RefCell<Vec<TraceEvent>>,
}

impl EventRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    /// Take the recorded events, leaving the recorder empty
    pub fn take(&self) -> Vec<TraceEvent> {
        self.events.take()
    }
}

impl TraceObserver for EventRecorder {
    fn on_event(&self, event: &TraceEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
