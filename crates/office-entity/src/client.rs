//! A client's journey through the office.

use std::fmt;

use office_core::{ClientClass, ClientId, Requirement, SimTime, WorkerId};

/// Where a client currently is.  Exactly one value at any instant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Stage {
    /// Queueing for the kiosk.
    KioskLine,
    /// At the kiosk while the ticket is issued.
    Ticketing,
    WaitingRoom,
    /// In a worker's call queue (slot 0 means being served).
    Called(WorkerId),
    Exited,
}

/// How a client left.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExitKind {
    Served,
    Abandoned,
}

impl ExitKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExitKind::Served    => "served",
            ExitKind::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for ExitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One visitor.  Created when its arrival event is processed and kept until
/// the run ends; fields fill in as the client moves through the office.
#[derive(Clone, Debug, PartialEq)]
pub struct Client {
    pub id:              ClientId,
    pub class:           ClientClass,
    pub arrival:         SimTime,
    pub requirement:     Option<Requirement>,
    pub room_entry:      Option<SimTime>,
    pub ticket:          Option<u32>,
    pub service_start:   Option<SimTime>,
    /// Revenue (positive) or cost / penalty (negative).
    pub price:           Option<f64>,
    /// The single canonical exit timestamp, whatever the exit kind.
    pub exit_time:       Option<SimTime>,
    pub exit_kind:       Option<ExitKind>,
    pub served_by:       Option<WorkerId>,
    pub stage:           Stage,
}

impl Client {
    /// A client that has just joined the kiosk line.
    pub fn new(id: ClientId, class: ClientClass, arrival: SimTime) -> Self {
        Self {
            id,
            class,
            arrival,
            requirement:   None,
            room_entry:    None,
            ticket:        None,
            service_start: None,
            price:         None,
            exit_time:     None,
            exit_kind:     None,
            served_by:     None,
            stage:         Stage::KioskLine,
        }
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.stage == Stage::Exited
    }

    /// Record the ticket and move into the waiting room.
    pub fn enter_room(&mut self, at: SimTime, ticket: u32, requirement: Requirement) {
        debug_assert_eq!(self.stage, Stage::Ticketing, "{self} entered the room from {:?}", self.stage);
        self.room_entry = Some(at);
        self.ticket = Some(ticket);
        self.requirement = Some(requirement);
        self.stage = Stage::WaitingRoom;
    }

    /// Service begins now with the given outcome price.
    pub fn start_service(&mut self, at: SimTime, price: f64) {
        debug_assert!(matches!(self.stage, Stage::Called(_)));
        self.service_start = Some(at);
        self.price = Some(price);
    }

    pub fn finish_service(&mut self, at: SimTime, worker: WorkerId) {
        debug_assert_eq!(self.stage, Stage::Called(worker));
        self.exit_time = Some(at);
        self.exit_kind = Some(ExitKind::Served);
        self.served_by = Some(worker);
        self.stage = Stage::Exited;
    }

    /// Leave without being served, recording the penalty price.
    pub fn abandon(&mut self, at: SimTime, penalty: f64) {
        debug_assert!(!self.has_exited(), "{self} abandoned twice");
        self.exit_time = Some(at);
        self.exit_kind = Some(ExitKind::Abandoned);
        self.price = Some(penalty);
        self.stage = Stage::Exited;
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ticket {
            Some(t) => write!(f, "{}-{}", self.class, t),
            None    => write!(f, "{}-#{}", self.class, self.id.0),
        }
    }
}
