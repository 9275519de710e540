//! Office construction configuration.
//!
//! Typically built in code via [`OfficeConfig::reference`] or loaded from a
//! JSON file by the application crate (with the `serde` feature) and passed
//! to the simulation builder, which calls [`OfficeConfig::validate`].

use crate::{Capability, CoreError, CoreResult, SimTime, WorkerId};

/// One entry of the ordered worker list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerSpec {
    pub capability: Capability,

    /// The worker takes its single break after the first service that
    /// finishes at or after this hour.
    pub break_start: f64,
}

impl WorkerSpec {
    pub fn new(capability: Capability, break_start: f64) -> Self {
        Self { capability, break_start }
    }
}

/// Top-level office configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OfficeConfig {
    /// Maximum number of ticketed clients waiting for a worker.  The kiosk
    /// halts while the room is full.
    pub waiting_room_capacity: usize,

    /// Simulation start; the first arrival of each class is drawn from here.
    pub opening_hour: f64,

    /// Arrivals scheduled after this hour are discarded.  Clients already
    /// inside are still served.
    pub closing_hour: f64,

    /// Ordered, non-empty.  Reconciliation visits workers in this order and
    /// `WorkerId(i)` is the `i`-th entry.
    pub workers: Vec<WorkerSpec>,

    /// Held callbacks per worker.  Call-queue capacity is `depth + 1`.
    pub call_queue_depth: usize,

    /// How long a break lasts, in hours.
    #[cfg_attr(feature = "serde", serde(default = "default_break_duration"))]
    pub break_duration_hours: f64,

    /// Master RNG seed.  The same seed always produces identical records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

#[cfg(feature = "serde")]
fn default_break_duration() -> f64 {
    OfficeConfig::DEFAULT_BREAK_HOURS
}

impl OfficeConfig {
    pub const DEFAULT_BREAK_HOURS: f64 = 1.0;

    /// The reference office: 20 seats, open 9–18, two sales desks and two
    /// support desks with staggered breaks, one held callback per desk.
    pub fn reference() -> Self {
        Self {
            waiting_room_capacity: 20,
            opening_hour:          9.0,
            closing_hour:          18.0,
            workers: vec![
                WorkerSpec::new(Capability::Sales, 12.0),
                WorkerSpec::new(Capability::Support, 12.5),
                WorkerSpec::new(Capability::Sales, 13.0),
                WorkerSpec::new(Capability::Support, 13.5),
            ],
            call_queue_depth:      1,
            break_duration_hours:  Self::DEFAULT_BREAK_HOURS,
            seed:                  123_456,
        }
    }

    /// Fail fast on anything the simulation cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        finite("opening_hour", self.opening_hour)?;
        finite("closing_hour", self.closing_hour)?;
        if self.closing_hour < self.opening_hour {
            return Err(CoreError::ClosingBeforeOpening {
                opening: self.opening_hour,
                closing: self.closing_hour,
            });
        }
        if self.workers.is_empty() {
            return Err(CoreError::NoWorkers);
        }
        if self.workers.len() > u16::MAX as usize {
            return Err(CoreError::Config(format!(
                "{} workers exceeds the supported maximum of {}",
                self.workers.len(),
                u16::MAX
            )));
        }
        if self.waiting_room_capacity == 0 {
            return Err(CoreError::Config(
                "waiting_room_capacity must be at least 1".to_owned(),
            ));
        }
        finite("break_duration_hours", self.break_duration_hours)?;
        if self.break_duration_hours < 0.0 {
            return Err(CoreError::Config(format!(
                "break_duration_hours must not be negative, got {}",
                self.break_duration_hours
            )));
        }
        for spec in &self.workers {
            finite("break_start", spec.break_start)?;
        }
        Ok(())
    }

    /// Number of call-queue slots per worker (active slot included).
    #[inline]
    pub fn call_queue_capacity(&self) -> usize {
        self.call_queue_depth + 1
    }

    #[inline]
    pub fn opening(&self) -> SimTime {
        SimTime(self.opening_hour)
    }

    #[inline]
    pub fn closing(&self) -> SimTime {
        SimTime(self.closing_hour)
    }

    /// `(WorkerId, &WorkerSpec)` pairs in configured order.
    pub fn worker_specs(&self) -> impl Iterator<Item = (WorkerId, &WorkerSpec)> {
        self.workers
            .iter()
            .enumerate()
            .map(|(i, spec)| (WorkerId(i as u16), spec))
    }
}

fn finite(what: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NotFinite { what, value })
    }
}
