//! The `Office` struct and its event loop.

use std::collections::VecDeque;

use log::{debug, info, trace};
use office_core::{ClientClass, ClientId, OfficeConfig, RunRng, SimTime, WorkerId};
use office_entity::{Client, Stage, Totem, WaitingRoom, Worker, priority_cmp};
use office_random::{ClientProfile, ProfileTable, RandomError};

use crate::{
    ClientRecord, EventKind, EventQueue, RunSummary, ScheduledEvent, SimError, SimObserver,
    SimResult,
};

/// Split-borrow friendly profile lookup: borrows only the table, so callers
/// can keep drawing from `self.rng` while holding the profile.
fn profile_of(profiles: &ProfileTable, class: ClientClass) -> SimResult<&ClientProfile> {
    profiles.get(class).ok_or(SimError::MissingProfile(class))
}

// ── Office ────────────────────────────────────────────────────────────────────

/// One simulated office day.
///
/// `Office` owns everything a run touches: the clock, the event queue, every
/// client ever created, the kiosk line, the waiting room, the kiosk, the
/// workers, and the run's RNG.  Nothing is shared between runs.
///
/// Each processed event is one *tick*:
///
/// 1. **Handle**: advance the clock and run the event's handler.
/// 2. **Kiosk**: if the kiosk is free, drop abandoning clients from the head
///    of the kiosk line and start ticketing the next one.
/// 3. **Workers**: in configured order, each worker that is not on break and
///    has a free call-queue slot calls waiting-room clients by priority.
///
/// Create via [`OfficeBuilder`][crate::OfficeBuilder].
pub struct Office {
    pub config:    OfficeConfig,
    pub profiles:  ProfileTable,
    pub run_index: u64,

    pub(crate) rng:        RunRng,
    pub(crate) clock:      SimTime,
    pub(crate) events:     EventQueue,
    pub(crate) clients:    Vec<Client>,
    pub(crate) kiosk_line: VecDeque<ClientId>,
    pub(crate) room:       WaitingRoom,
    pub(crate) totem:      Totem,
    pub(crate) workers:    Vec<Worker>,

    handled:   u64,
    discarded: usize,
}

impl Office {
    pub(crate) fn new(
        config:    OfficeConfig,
        profiles:  ProfileTable,
        run_index: u64,
        rng:       RunRng,
    ) -> Self {
        let workers = config
            .worker_specs()
            .map(|(id, spec)| Worker::new(id, spec, config.call_queue_depth))
            .collect();
        Self {
            clock:      config.opening(),
            room:       WaitingRoom::new(config.waiting_room_capacity),
            config,
            profiles,
            run_index,
            rng,
            events:     EventQueue::new(),
            clients:    Vec::new(),
            kiosk_line: VecDeque::new(),
            totem:      Totem::new(),
            workers,
            handled:    0,
            discarded:  0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> SimTime {
        self.clock
    }

    /// Every client created so far, indexed by `ClientId`.
    #[inline]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    #[inline]
    pub fn client(&self, id: ClientId) -> &Client {
        &self.clients[id.index()]
    }

    #[inline]
    pub fn kiosk_line(&self) -> &VecDeque<ClientId> {
        &self.kiosk_line
    }

    #[inline]
    pub fn room(&self) -> &WaitingRoom {
        &self.room
    }

    #[inline]
    pub fn totem(&self) -> &Totem {
        &self.totem
    }

    #[inline]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    #[inline]
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// One flat record per client, in arrival order.
    pub fn records(&self) -> Vec<ClientRecord> {
        self.clients
            .iter()
            .map(|c| ClientRecord::from_client(self.run_index, c))
            .collect()
    }

    /// Totals as of now.  After [`run`][Self::run] every client has exited.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            discarded: self.discarded,
            events:    self.handled,
            end_time:  self.clock,
            ..RunSummary::tally(self.run_index, &self.clients)
        }
    }

    // ── Run loop ──────────────────────────────────────────────────────────

    /// Process events until the queue is empty.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while self.step(observer)? {}

        let summary = self.summary();
        debug_assert_eq!(
            summary.served + summary.abandoned,
            summary.clients,
            "clients still inside after the queue drained"
        );
        info!(
            "run {} finished at {}: {} clients, {} served, {} abandoned, {} late arrivals dropped",
            self.run_index,
            summary.end_time,
            summary.clients,
            summary.served,
            summary.abandoned,
            summary.discarded,
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Pop and process one event.  Returns `false` once the queue is empty.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(ScheduledEvent { time, kind, .. }) = self.events.pop() else {
            return Ok(false);
        };

        if let EventKind::Arrival { class } = kind {
            if time > self.config.closing() {
                trace!("{time} dropping class {class} arrival after closing");
                self.discarded += 1;
                observer.on_arrival_discarded(time, class);
                return Ok(true);
            }
        }

        debug_assert!(time >= self.clock, "{kind} at {time} precedes clock {}", self.clock);
        self.clock = time;
        self.handled += 1;
        debug!("{time} {kind}");
        observer.on_event(time, &kind);

        match kind {
            EventKind::Arrival { class }                  => self.on_arrival(class)?,
            EventKind::TicketingComplete { client }       => self.on_ticketing_complete(client)?,
            EventKind::ServiceComplete { client, worker } => self.on_service_complete(client, worker)?,
            EventKind::WorkerReturn { worker }            => self.on_worker_return(worker)?,
            EventKind::SpaceFreed                         => self.on_space_freed(),
        }

        self.reconcile_kiosk()?;
        for index in 0..self.workers.len() {
            self.reconcile_worker(index)?;
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        Ok(true)
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    /// Draw the gap to the next `class` arrival from the current clock and
    /// schedule it.
    pub(crate) fn schedule_arrival(&mut self, class: ClientClass) -> SimResult<()> {
        let gap = profile_of(&self.profiles, class)?.next_arrival_gap(self.clock, &mut self.rng);
        self.events.push(self.clock.after(gap), EventKind::Arrival { class });
        Ok(())
    }

    fn on_arrival(&mut self, class: ClientClass) -> SimResult<()> {
        let id = ClientId::try_from(self.clients.len()).map_err(|_| SimError::TooManyClients)?;
        self.clients.push(Client::new(id, class, self.clock));
        self.kiosk_line.push_back(id);
        self.schedule_arrival(class)
    }

    fn on_ticketing_complete(&mut self, id: ClientId) -> SimResult<()> {
        let class = self.clients[id.index()].class;
        let requirement = profile_of(&self.profiles, class)?.classify(&mut self.rng);
        let ticket = self.totem.issue_ticket(class);

        let client = &mut self.clients[id.index()];
        client.enter_room(self.clock, ticket, requirement);
        debug!("{} {client} needs requirement {requirement}", self.clock);

        self.room.insert(id);
        if self.room.is_full() {
            debug!("{} waiting room full, kiosk halted", self.clock);
            self.totem.halt();
        }
        Ok(())
    }

    fn on_service_complete(&mut self, client: ClientId, worker: WorkerId) -> SimResult<()> {
        self.clients[client.index()].finish_service(self.clock, worker);

        let desk = &mut self.workers[worker.index()];
        desk.finish_service();
        let next = desk.next();
        if desk.start_break_if_due(self.clock) {
            let back = self.clock.after(self.config.break_duration_hours);
            debug!("{} {worker} on break until {back}", self.clock);
            self.events.push(back, EventKind::WorkerReturn { worker });
            return Ok(());
        }
        match next {
            Some(next) => self.start_service(worker, next),
            None       => Ok(()),
        }
    }

    fn on_worker_return(&mut self, worker: WorkerId) -> SimResult<()> {
        match self.workers[worker.index()].end_break() {
            Some(head) => self.start_service(worker, head),
            None       => Ok(()),
        }
    }

    fn on_space_freed(&mut self) {
        if !self.room.is_full() && self.totem.resume() {
            debug!("{} kiosk resumed", self.clock);
        }
    }

    /// `worker` begins serving `id` now: stamp the start time, draw duration
    /// and price, schedule the completion.
    fn start_service(&mut self, worker: WorkerId, id: ClientId) -> SimResult<()> {
        let client = &self.clients[id.index()];
        let class = client.class;
        let requirement = client.requirement.ok_or(SimError::Unclassified(id))?;
        let service = profile_of(&self.profiles, class)?
            .service(requirement)
            .ok_or(RandomError::MissingService { class, requirement })?;

        let duration = service.duration.sample(&mut self.rng);
        let price = service.price.sample(&mut self.rng);

        self.clients[id.index()].start_service(self.clock, price);
        self.workers[worker.index()].begin_service();
        self.events
            .push(self.clock.after(duration), EventKind::ServiceComplete { client: id, worker });
        Ok(())
    }

    // ── Reconciliation ────────────────────────────────────────────────────

    fn reconcile_kiosk(&mut self) -> SimResult<()> {
        if !self.totem.is_free() {
            return Ok(());
        }
        let now = self.clock;

        while let Some(&head) = self.kiosk_line.front() {
            let client = &self.clients[head.index()];
            let waited = now.minutes_since(client.arrival);
            let profile = profile_of(&self.profiles, client.class)?;
            self.kiosk_line.pop_front();

            if profile.kiosk_patience.stays(waited, &mut self.rng) {
                let delay = profile.ticketing_delay(&mut self.rng);
                self.clients[head.index()].stage = Stage::Ticketing;
                self.totem.accept();
                self.events.push(now.after(delay), EventKind::TicketingComplete { client: head });
                return Ok(());
            }

            let penalty = profile.abandonment_price(&mut self.rng);
            let client = &mut self.clients[head.index()];
            client.abandon(now, penalty);
            debug!("{now} {client} left the kiosk line after {waited} min");
        }
        Ok(())
    }

    fn reconcile_worker(&mut self, index: usize) -> SimResult<()> {
        let desk = &self.workers[index];
        if !desk.accepts_calls() || self.room.is_empty() {
            return Ok(());
        }
        let now = self.clock;
        let worker = desk.id;

        let clients = &self.clients;
        let mut candidates: Vec<ClientId> = self
            .room
            .members()
            .iter()
            .copied()
            .filter(|id| clients[id.index()].requirement.is_some_and(|r| desk.can_serve(r)))
            .collect();
        candidates.sort_by(|a, b| priority_cmp(&clients[a.index()], &clients[b.index()]));

        let mut freed = false;
        for id in candidates {
            if self.workers[index].queue().is_full() {
                break;
            }
            let client = &self.clients[id.index()];
            let waited = now.minutes_since(client.room_entry.unwrap_or(client.arrival));
            let profile = profile_of(&self.profiles, client.class)?;
            self.room.remove(id);
            freed = true;

            if profile.room_patience.stays(waited, &mut self.rng) {
                self.clients[id.index()].stage = Stage::Called(worker);
                if self.workers[index].call(id) {
                    self.start_service(worker, id)?;
                }
            } else {
                let penalty = profile.abandonment_price(&mut self.rng);
                let client = &mut self.clients[id.index()];
                client.abandon(now, penalty);
                debug!("{now} {client} left the waiting room after {waited} min");
            }
        }

        if freed {
            self.events.push(now, EventKind::SpaceFreed);
        }
        Ok(())
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Structural checks after every tick in debug builds: each live client
    /// sits in exactly one place, the room is within capacity, call queues
    /// are compact, and pending event counts match entity states.
    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use office_entity::{TotemStatus, WorkerStatus};

        use crate::EventTag;

        let mut seen = vec![0u8; self.clients.len()];

        for &id in &self.kiosk_line {
            seen[id.index()] += 1;
            debug_assert_eq!(self.clients[id.index()].stage, Stage::KioskLine);
        }

        debug_assert!(self.room.len() <= self.room.capacity(), "waiting room over capacity");
        for &id in self.room.members() {
            seen[id.index()] += 1;
            debug_assert_eq!(self.clients[id.index()].stage, Stage::WaitingRoom);
        }

        let mut serving = 0;
        let mut on_break = 0;
        for desk in &self.workers {
            debug_assert!(desk.queue().is_compact(), "{} call queue has a gap", desk.id);
            for id in desk.queue().occupants() {
                seen[id.index()] += 1;
                debug_assert_eq!(self.clients[id.index()].stage, Stage::Called(desk.id));
            }
            match desk.status() {
                WorkerStatus::Serving => {
                    debug_assert!(desk.queue().head().is_some());
                    serving += 1;
                }
                WorkerStatus::OnBreak => on_break += 1,
                WorkerStatus::Idle    => debug_assert!(desk.queue().is_empty()),
            }
        }

        let mut ticketing = 0;
        for client in &self.clients {
            match client.stage {
                Stage::Ticketing => {
                    seen[client.id.index()] += 1;
                    ticketing += 1;
                }
                Stage::Exited => debug_assert_eq!(seen[client.id.index()], 0),
                _ => {}
            }
            if !client.has_exited() {
                debug_assert_eq!(seen[client.id.index()], 1, "{client} is in {} places", seen[client.id.index()]);
            }
        }

        let issuing = usize::from(self.totem.status() == TotemStatus::Issuing);
        debug_assert_eq!(ticketing, issuing);
        debug_assert_eq!(self.events.pending(EventTag::TicketingComplete), issuing);
        debug_assert_eq!(self.events.pending(EventTag::ServiceComplete), serving);
        debug_assert_eq!(self.events.pending(EventTag::WorkerReturn), on_break);
        debug_assert!(self.events.pending(EventTag::Arrival) <= ClientClass::ALL.len());
    }
}
