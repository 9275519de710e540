//! The event catalog and the time-ordered event queue.
//!
//! # Ordering
//!
//! Events pop in ascending time.  Events with exactly equal times pop in the
//! order they were pushed (each push takes the next sequence number), so a
//! run's trace depends only on its seed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use office_core::{ClientClass, ClientId, SimTime, WorkerId};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// Every event the office knows about.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EventKind {
    /// A client of `class` walks in.  Handling it schedules the next one.
    Arrival { class: ClientClass },

    /// The kiosk has printed `client`'s ticket.
    TicketingComplete { client: ClientId },

    /// `worker` has finished serving `client`.
    ServiceComplete { client: ClientId, worker: WorkerId },

    /// `worker` is back from break.
    WorkerReturn { worker: WorkerId },

    /// A waiting-room seat was vacated.
    SpaceFreed,
}

/// Payload-free discriminant of [`EventKind`], used for per-kind counts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventTag {
    Arrival,
    TicketingComplete,
    ServiceComplete,
    WorkerReturn,
    SpaceFreed,
}

impl EventTag {
    pub const COUNT: usize = 5;
}

impl EventKind {
    #[inline]
    pub fn tag(&self) -> EventTag {
        match self {
            EventKind::Arrival { .. }           => EventTag::Arrival,
            EventKind::TicketingComplete { .. } => EventTag::TicketingComplete,
            EventKind::ServiceComplete { .. }   => EventTag::ServiceComplete,
            EventKind::WorkerReturn { .. }      => EventTag::WorkerReturn,
            EventKind::SpaceFreed               => EventTag::SpaceFreed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Arrival { .. }           => "arrival",
            EventKind::TicketingComplete { .. } => "ticketing_complete",
            EventKind::ServiceComplete { .. }   => "service_complete",
            EventKind::WorkerReturn { .. }      => "worker_return",
            EventKind::SpaceFreed               => "space_freed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Arrival { class }                 => write!(f, "arrival[{class}]"),
            EventKind::TicketingComplete { client }      => write!(f, "ticketing_complete[{client}]"),
            EventKind::ServiceComplete { client, worker } => {
                write!(f, "service_complete[{client} by {worker}]")
            }
            EventKind::WorkerReturn { worker }           => write!(f, "worker_return[{worker}]"),
            EventKind::SpaceFreed                        => f.write_str("space_freed"),
        }
    }
}

// ── ScheduledEvent ────────────────────────────────────────────────────────────

/// An event stamped with its firing time and insertion sequence.
#[derive(Copy, Clone, Debug)]
pub struct ScheduledEvent {
    pub time: SimTime,
    pub seq:  u64,
    pub kind: EventKind,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    /// Reversed so that `BinaryHeap` (a max-heap) yields the earliest event.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

/// Min-time priority queue of pending events with per-kind counts.
#[derive(Default)]
pub struct EventQueue {
    heap:     BinaryHeap<ScheduledEvent>,
    next_seq: u64,
    pending:  [usize; EventTag::COUNT],
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` at `time`.
    pub fn push(&mut self, time: SimTime, kind: EventKind) {
        debug_assert!(time.hours().is_finite(), "non-finite event time for {kind}");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending[kind.tag() as usize] += 1;
        self.heap.push(ScheduledEvent { time, seq, kind });
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<ScheduledEvent> {
        let event = self.heap.pop()?;
        self.pending[event.kind.tag() as usize] -= 1;
        Some(event)
    }

    /// The earliest pending event, without removing it.
    pub fn peek(&self) -> Option<&ScheduledEvent> {
        self.heap.peek()
    }

    /// Number of pending events of one kind.
    #[inline]
    pub fn pending(&self, tag: EventTag) -> usize {
        self.pending[tag as usize]
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pending events in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledEvent> {
        self.heap.iter()
    }
}
