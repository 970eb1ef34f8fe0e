// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use park_alloc_core::id::TicketId;
use park_alloc_model::ticket::Ticket;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerError {
    /// No ticket with this id was ever recorded.
    TicketNotFound(TicketId),
    /// The ticket was recorded and has already been redeemed.
    AlreadyRedeemed(TicketId),
    /// A ticket with this id is already known.
    DuplicateTicket(TicketId),
}

impl LedgerError {
    #[inline]
    pub fn ticket_id(&self) -> TicketId {
        match *self {
            LedgerError::TicketNotFound(id)
            | LedgerError::AlreadyRedeemed(id)
            | LedgerError::DuplicateTicket(id) => id,
        }
    }
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::TicketNotFound(id) => write!(f, "Ticket {id} not found"),
            LedgerError::AlreadyRedeemed(id) => write!(f, "Ticket {id} was already redeemed"),
            LedgerError::DuplicateTicket(id) => write!(f, "Ticket {id} is already recorded"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// Store of issued tickets, keyed by id.
///
/// Starts empty and lives as long as its owner; nothing is persisted. Redeemed ids
/// are kept so that a second redemption is told apart from an unknown id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketLedger {
    /// Tickets that were issued and not yet redeemed.
    active: HashMap<TicketId, Ticket>,
    /// Every id ever redeemed; grows by one per unpark for the life of the ledger.
    redeemed: HashSet<TicketId>,
}

impl TicketLedger {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[inline]
    pub fn redeemed_count(&self) -> usize {
        self.redeemed.len()
    }

    #[inline]
    pub fn contains(&self, id: &TicketId) -> bool {
        self.active.contains_key(id)
    }

    #[inline]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.active.get(id)
    }

    /// Active ticket for `id`, or why there is none.
    pub fn lookup(&self, id: &TicketId) -> Result<&Ticket, LedgerError> {
        match self.active.get(id) {
            Some(t) => Ok(t),
            None if self.redeemed.contains(id) => Err(LedgerError::AlreadyRedeemed(*id)),
            None => Err(LedgerError::TicketNotFound(*id)),
        }
    }

    pub fn insert(&mut self, ticket: Ticket) -> Result<&Ticket, LedgerError> {
        let id = ticket.id();
        if self.active.contains_key(&id) || self.redeemed.contains(&id) {
            return Err(LedgerError::DuplicateTicket(id));
        }
        debug!(ticket = %id, "Ticket recorded");
        Ok(&*self.active.entry(id).or_insert(ticket))
    }

    /// Removes the ticket so it cannot be used again.
    #[instrument(level = "debug", skip_all, fields(ticket = %id))]
    pub fn redeem(&mut self, id: TicketId) -> Result<Ticket, LedgerError> {
        self.lookup(&id)?;
        let ticket = self
            .active
            .remove(&id)
            .ok_or(LedgerError::TicketNotFound(id))?;
        self.redeemed.insert(id);
        debug!("Ticket redeemed");
        Ok(ticket)
    }

    /// Active tickets, oldest entry first; ties are broken by id.
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> + '_ {
        let mut tickets: Vec<&Ticket> = self.active.values().collect();
        tickets.sort_by_key(|t| (t.entry_time(), t.id()));
        tickets.into_iter()
    }
}
