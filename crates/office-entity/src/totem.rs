//! The ticketing kiosk.
//!
//! ```text
//!   Free ──accept──▶ Issuing ──issue_ticket──▶ Free
//!   Free ──halt────▶ Halted  ──resume────────▶ Free
//! ```

use office_core::ClientClass;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TotemStatus {
    Free,
    Issuing,
    /// The waiting room is full; waits for a space-freed signal.
    Halted,
}

/// Per-class ticket counters plus the kiosk state machine.
#[derive(Clone, Debug)]
pub struct Totem {
    counters: [u32; 3],
    status:   TotemStatus,
}

impl Default for Totem {
    fn default() -> Self {
        Self::new()
    }
}

impl Totem {
    pub fn new() -> Self {
        Self { counters: [0; 3], status: TotemStatus::Free }
    }

    #[inline]
    pub fn status(&self) -> TotemStatus {
        self.status
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.status == TotemStatus::Free
    }

    /// A client steps up to the kiosk.
    pub fn accept(&mut self) {
        debug_assert_eq!(self.status, TotemStatus::Free);
        self.status = TotemStatus::Issuing;
    }

    /// Produce the next ticket number for `class` (1, 2, 3, … per class) and
    /// free the kiosk.
    pub fn issue_ticket(&mut self, class: ClientClass) -> u32 {
        debug_assert_eq!(self.status, TotemStatus::Issuing);
        let counter = &mut self.counters[class.index()];
        *counter += 1;
        self.status = TotemStatus::Free;
        *counter
    }

    pub fn halt(&mut self) {
        self.status = TotemStatus::Halted;
    }

    /// Return to `Free` if halted.  Returns whether anything changed.
    pub fn resume(&mut self) -> bool {
        if self.status == TotemStatus::Halted {
            self.status = TotemStatus::Free;
            true
        } else {
            false
        }
    }

    /// Tickets issued so far for `class`.
    #[inline]
    pub fn issued(&self, class: ClientClass) -> u32 {
        self.counters[class.index()]
    }
}
