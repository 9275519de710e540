//! Simulated time model.
//!
//! # Design
//!
//! The office clock is a fractional hour of the day: `9.5` is 09:30.  Event
//! delays produced by the stochastic library are also in hours, so advancing
//! the clock is a plain addition.
//!
//! `SimTime` wraps the `f64` and gives it a total order (`f64::total_cmp`) so
//! it can key the event queue.  Non-finite times never enter the queue: every
//! delay comes from a validated sampler.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulated time, in hours since midnight.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    #[inline]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// The time `delay_hours` after `self`.
    #[inline]
    pub fn after(self, delay_hours: f64) -> SimTime {
        SimTime(self.0 + delay_hours)
    }

    /// Whole minutes elapsed from `earlier` to `self`, rounded to the nearest
    /// minute and clamped at zero.  Abandonment curves are evaluated at this
    /// count.
    #[inline]
    pub fn minutes_since(self, earlier: SimTime) -> u32 {
        let minutes = ((self.0 - earlier.0) * 60.0).round();
        if minutes <= 0.0 { 0 } else { minutes as u32 }
    }

    /// Which part of the working day this time falls in.
    #[inline]
    pub fn segment(self) -> DaySegment {
        DaySegment::of(self)
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = (self.0.max(0.0) * 3_600.0).round() as u64;
        let h = total_secs / 3_600;
        let m = (total_secs % 3_600) / 60;
        let s = total_secs % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

// ── DaySegment ────────────────────────────────────────────────────────────────

/// Arrival intensity changes over the day; each class has one rate per
/// segment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DaySegment {
    /// `[8, 12)`
    Morning,
    /// `[12, 14)`
    Noon,
    /// Everything else.
    Evening,
}

impl DaySegment {
    pub fn of(time: SimTime) -> DaySegment {
        let h = time.0;
        if (8.0..12.0).contains(&h) {
            DaySegment::Morning
        } else if (12.0..14.0).contains(&h) {
            DaySegment::Noon
        } else {
            DaySegment::Evening
        }
    }
}
