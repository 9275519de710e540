//! Workers and their bounded call queues.

use office_core::{Capability, ClientId, Requirement, SimTime, WorkerId, WorkerSpec};

// ── CallQueue ─────────────────────────────────────────────────────────────────

/// Fixed-size ordered slots.  Slot 0 is the client being served; slots
/// `1..=depth` hold clients already called to this desk.
///
/// Occupied slots are always a prefix: a non-head slot is never occupied
/// while an earlier slot is empty.
#[derive(Clone, Debug)]
pub struct CallQueue {
    slots: Vec<Option<ClientId>>,
}

impl CallQueue {
    /// `depth` held slots plus the active slot.
    pub fn new(depth: usize) -> Self {
        Self { slots: vec![None; depth + 1] }
    }

    /// Put `client` in the first empty slot and return its index, or `None`
    /// if every slot is taken.
    pub fn push(&mut self, client: ClientId) -> Option<usize> {
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(client);
        Some(slot)
    }

    /// Clear slot 0, shift the remaining clients left preserving order, and
    /// return the new head.
    pub fn advance(&mut self) -> Option<ClientId> {
        self.slots[0] = None;
        let mut write = 0;
        for read in 0..self.slots.len() {
            if let Some(client) = self.slots[read].take() {
                self.slots[write] = Some(client);
                write += 1;
            }
        }
        self.head()
    }

    #[inline]
    pub fn head(&self) -> Option<ClientId> {
        self.slots[0]
    }

    #[inline]
    pub fn slots(&self) -> &[Option<ClientId>] {
        &self.slots
    }

    /// Occupied slots, head first.
    pub fn occupants(&self) -> impl Iterator<Item = ClientId> + '_ {
        self.slots.iter().map_while(|s| *s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.occupants().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `true` when occupied slots form a prefix.
    pub fn is_compact(&self) -> bool {
        self.slots
            .iter()
            .skip_while(|s| s.is_some())
            .all(Option::is_none)
    }
}

// ── Worker ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WorkerStatus {
    Idle,
    Serving,
    OnBreak,
}

/// A service desk.
#[derive(Clone, Debug)]
pub struct Worker {
    pub id:          WorkerId,
    pub capability:  Capability,
    pub break_start: SimTime,
    status:          WorkerStatus,
    took_break:      bool,
    queue:           CallQueue,
}

impl Worker {
    pub fn new(id: WorkerId, spec: &WorkerSpec, depth: usize) -> Self {
        Self {
            id,
            capability:  spec.capability,
            break_start: SimTime(spec.break_start),
            status:      WorkerStatus::Idle,
            took_break:  false,
            queue:       CallQueue::new(depth),
        }
    }

    #[inline]
    pub fn status(&self) -> WorkerStatus {
        self.status
    }

    #[inline]
    pub fn queue(&self) -> &CallQueue {
        &self.queue
    }

    #[inline]
    pub fn took_break(&self) -> bool {
        self.took_break
    }

    #[inline]
    pub fn can_serve(&self, requirement: Requirement) -> bool {
        self.capability.can_serve(requirement)
    }

    /// Worth reconciling this tick: not on break and a slot is free.
    #[inline]
    pub fn accepts_calls(&self) -> bool {
        self.status != WorkerStatus::OnBreak && !self.queue.is_full()
    }

    /// Call `client` to this desk.  Returns `true` iff the client landed in
    /// slot 0 of an idle worker, i.e. service should begin immediately.
    ///
    /// # Panics
    /// Panics in debug builds if the queue is full.
    pub fn call(&mut self, client: ClientId) -> bool {
        let was_idle = self.status == WorkerStatus::Idle;
        let slot = self.queue.push(client);
        debug_assert!(slot.is_some(), "{} called {client} with a full queue", self.id);
        slot == Some(0) && was_idle
    }

    /// Mark the head as being served.
    pub fn begin_service(&mut self) {
        debug_assert!(self.queue.head().is_some());
        debug_assert_ne!(self.status, WorkerStatus::OnBreak);
        self.status = WorkerStatus::Serving;
    }

    /// The head's service has ended.
    pub fn finish_service(&mut self) {
        debug_assert_eq!(self.status, WorkerStatus::Serving);
        self.status = WorkerStatus::Idle;
    }

    /// Drop the finished head and return the next client to serve.
    /// Requires the worker to be idle.
    pub fn next(&mut self) -> Option<ClientId> {
        debug_assert_eq!(self.status, WorkerStatus::Idle, "{} advanced while busy", self.id);
        self.queue.advance()
    }

    /// Start the one break of the day if `now` is at or past the break hour
    /// and no break was taken yet.  Returns whether the break started.
    pub fn start_break_if_due(&mut self, now: SimTime) -> bool {
        if self.took_break || now < self.break_start {
            return false;
        }
        debug_assert_eq!(self.status, WorkerStatus::Idle);
        self.took_break = true;
        self.status = WorkerStatus::OnBreak;
        true
    }

    /// Back from break.  Returns the client waiting at the head, if any.
    pub fn end_break(&mut self) -> Option<ClientId> {
        debug_assert_eq!(self.status, WorkerStatus::OnBreak);
        self.status = WorkerStatus::Idle;
        self.queue.head()
    }
}
