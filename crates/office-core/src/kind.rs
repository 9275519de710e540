//! Client categories, requirement classes, and worker capabilities.

use std::fmt;

// ── ClientClass ───────────────────────────────────────────────────────────────

/// The fixed customer category a client belongs to.  Each class has its own
/// arrival stream, ticket counter, and stochastic profile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientClass {
    A,
    B,
    C,
}

impl ClientClass {
    pub const ALL: [ClientClass; 3] = [ClientClass::A, ClientClass::B, ClientClass::C];

    /// Dense index for per-class arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ClientClass::A => 0,
            ClientClass::B => 1,
            ClientClass::C => 2,
        }
    }

    /// Label written to output records.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientClass::A => "A",
            ClientClass::B => "B",
            ClientClass::C => "C",
        }
    }
}

impl fmt::Display for ClientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Requirement ───────────────────────────────────────────────────────────────

/// What the client came for.  Assigned by the kiosk at ticketing time and
/// decides which workers may serve the client.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Requirement {
    /// Class 1: a purchase.  Produces revenue.
    Sale,
    /// Class 2: a claim or refund.  Produces a cost.
    Claim,
    /// Class 3: an inquiry.  Produces nothing.
    Inquiry,
}

impl Requirement {
    pub const ALL: [Requirement; 3] = [Requirement::Sale, Requirement::Claim, Requirement::Inquiry];

    /// The 1-based requirement number used in output records.
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Requirement::Sale    => 1,
            Requirement::Claim   => 2,
            Requirement::Inquiry => 3,
        }
    }

    /// Inverse of [`number`][Self::number].
    pub fn from_number(n: u8) -> Option<Requirement> {
        match n {
            1 => Some(Requirement::Sale),
            2 => Some(Requirement::Claim),
            3 => Some(Requirement::Inquiry),
            _ => None,
        }
    }

    /// Dense 0-based index for per-requirement arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ── Capability ────────────────────────────────────────────────────────────────

/// Which requirement classes a worker can handle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capability {
    /// Handles class 1 only.
    Sales,
    /// Handles classes 2 and 3.
    Support,
    /// Handles every class.
    Combined,
}

impl Capability {
    #[inline]
    pub fn can_serve(self, requirement: Requirement) -> bool {
        match self {
            Capability::Sales    => requirement == Requirement::Sale,
            Capability::Support  => requirement != Requirement::Sale,
            Capability::Combined => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Sales    => "sales",
            Capability::Support  => "support",
            Capability::Combined => "combined",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
