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

use crate::{
    attendant::{Attendant, AttendantError},
    clock::{Clock, SystemClock},
};
use park_alloc_core::id::TicketId;
use park_alloc_model::{availability::LotAvailability, ticket::Ticket, vehicle::Vehicle};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one [`Attendant`] shared between threads.
///
/// Every call holds the lock for its whole duration, so spot search and assignment
/// in `park`, and lookup, release and removal in `unpark`, happen as one step.
#[derive(Debug)]
pub struct SharedAttendant<C = SystemClock> {
    inner: Arc<Mutex<Attendant<C>>>,
}

impl<C> Clone for SharedAttendant<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedAttendant<C> {
    pub fn new(attendant: Attendant<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(attendant)),
        }
    }

    pub fn park(&self, plate: &str, category: &str) -> Result<Ticket, AttendantError> {
        self.inner.lock().park(plate, category)
    }

    pub fn park_vehicle(&self, vehicle: Vehicle) -> Result<Ticket, AttendantError> {
        self.inner.lock().park_vehicle(vehicle)
    }

    pub fn unpark(&self, ticket_id: &str) -> Result<Ticket, AttendantError> {
        self.inner.lock().unpark(ticket_id)
    }

    pub fn unpark_ticket(&self, id: TicketId) -> Result<Ticket, AttendantError> {
        self.inner.lock().unpark_ticket(id)
    }

    pub fn availability(&self) -> LotAvailability {
        self.inner.lock().availability()
    }

    /// Runs `f` with exclusive access to the attendant.
    pub fn with<R>(&self, f: impl FnOnce(&mut Attendant<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<C: Clock> From<Attendant<C>> for SharedAttendant<C> {
    fn from(value: Attendant<C>) -> Self {
        Self::new(value)
    }
}
