//! The current user set: the last successfully fetched records.
//!
//! The loader completion path is the only writer. Every fetch takes a
//! [`LoadTicket`] first and a commit is accepted only for the newest ticket,
//! so a slow earlier response cannot replace the result of a later one.
use crate::api::UserRecord;

/// Generation number of one `load()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(pub u64);

#[derive(Clone, Debug, Default)]
pub struct UserStore {
    records: Vec<UserRecord>,
    latest: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a new fetch. Older tickets become stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Replace the whole set. Returns `false` and leaves the set untouched for a stale ticket.
    pub fn commit(&mut self, ticket: LoadTicket, records: Vec<UserRecord>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.records = records;
        true
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
