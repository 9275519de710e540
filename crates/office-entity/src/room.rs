//! The waiting room.

use office_core::ClientId;

/// Bounded collection of ticketed clients waiting for a worker.  Members are
/// kept in entry order; selection order is decided by the caller.
#[derive(Clone, Debug)]
pub struct WaitingRoom {
    capacity: usize,
    members:  Vec<ClientId>,
}

impl WaitingRoom {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, members: Vec::with_capacity(capacity) }
    }

    /// # Panics
    /// Panics in debug builds if the room is already full or `client` is
    /// already inside.
    pub fn insert(&mut self, client: ClientId) {
        debug_assert!(!self.is_full(), "waiting room overflow inserting {client}");
        debug_assert!(!self.contains(client), "{client} already in the waiting room");
        self.members.push(client);
    }

    /// Remove `client`; returns `false` if it was not inside.
    pub fn remove(&mut self, client: ClientId) -> bool {
        match self.members.iter().position(|&c| c == client) {
            Some(i) => {
                self.members.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, client: ClientId) -> bool {
        self.members.contains(&client)
    }

    #[inline]
    pub fn members(&self) -> &[ClientId] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
