//! Flat per-client rows and run totals.

use office_core::{ClientClass, SimTime};
use office_entity::{Client, ExitKind};

/// One client's journey as plain values, ready for a tabular writer.
///
/// Times are in fractional hours.  `None` marks a stage the client never
/// reached.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientRecord {
    pub run:           u64,
    pub class:         ClientClass,
    pub arrival:       f64,
    /// Requirement number, 1 to 3.
    pub requirement:   Option<u8>,
    pub room_entry:    Option<f64>,
    pub ticket:        Option<u32>,
    pub service_start: Option<f64>,
    pub price:         Option<f64>,
    pub exit_time:     Option<f64>,
    pub exit_kind:     Option<ExitKind>,
    pub worker:        Option<u16>,
}

impl ClientRecord {
    pub fn from_client(run: u64, client: &Client) -> Self {
        Self {
            run,
            class:         client.class,
            arrival:       client.arrival.hours(),
            requirement:   client.requirement.map(|r| r.number()),
            room_entry:    client.room_entry.map(SimTime::hours),
            ticket:        client.ticket,
            service_start: client.service_start.map(SimTime::hours),
            price:         client.price,
            exit_time:     client.exit_time.map(SimTime::hours),
            exit_kind:     client.exit_kind,
            worker:        client.served_by.map(|w| w.0),
        }
    }
}

/// Totals for one finished run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub run:        u64,
    pub clients:    usize,
    pub served:     usize,
    pub abandoned:  usize,
    /// Arrivals dropped because they fell after closing.
    pub discarded:  usize,
    /// Events handled (discarded arrivals excluded).
    pub events:     u64,
    /// Clock value when the queue drained.
    pub end_time:   SimTime,
    /// Sum of recorded prices, penalties included.
    pub net_price:  f64,
}

impl RunSummary {
    /// Tally exits over `clients`; the event counters are filled by the caller.
    pub fn tally(run: u64, clients: &[Client]) -> Self {
        let mut summary = RunSummary { run, clients: clients.len(), ..Default::default() };
        for client in clients {
            match client.exit_kind {
                Some(ExitKind::Served)    => summary.served += 1,
                Some(ExitKind::Abandoned) => summary.abandoned += 1,
                None                      => {}
            }
            summary.net_price += client.price.unwrap_or(0.0);
        }
        summary
    }
}
