//! Client selection order for worker reconciliation.

use std::cmp::Ordering;

use office_core::Requirement;

use crate::Client;

/// Rank of a requirement class: sales first, then inquiries, then claims.
/// Unclassified clients sort last.
#[inline]
fn rank(requirement: Option<Requirement>) -> u8 {
    match requirement {
        Some(Requirement::Sale)    => 0,
        Some(Requirement::Inquiry) => 1,
        Some(Requirement::Claim)   => 2,
        None                       => 3,
    }
}

/// Total order over waiting clients: requirement 1 before {2, 3}, 3 before
/// 2, then earlier arrival, then lower `ClientId`.
pub fn priority_cmp(a: &Client, b: &Client) -> Ordering {
    rank(a.requirement)
        .cmp(&rank(b.requirement))
        .then_with(|| a.arrival.cmp(&b.arrival))
        .then_with(|| a.id.cmp(&b.id))
}
