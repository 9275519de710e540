//! Simulation observer trait for tracing and data collection.

use office_core::{ClientClass, SimTime};

use crate::{EventKind, RunSummary};

/// Callbacks invoked by [`Office::run`][crate::Office::run] at key points in
/// the event loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: trace printer
///
/// ```rust,ignore
/// struct Tracer;
///
/// impl SimObserver for Tracer {
///     fn on_event(&mut self, time: SimTime, kind: &EventKind) {
///         println!("{time} {kind}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every processed event, before its handler runs.
    fn on_event(&mut self, _time: SimTime, _kind: &EventKind) {}

    /// Called when an arrival past closing is dropped.
    fn on_arrival_discarded(&mut self, _time: SimTime, _class: ClientClass) {}

    /// Called once after the event queue drains.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
