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
    clock::{Clock, SystemClock},
    config::EngineConfig,
    engine::{ParkError, ParkingEngine, UnparkError},
    ledger::{LedgerError, TicketLedger},
};
use park_alloc_core::{category::VehicleCategory, err::UnknownVehicleCategoryError, id::TicketId};
use park_alloc_model::{availability::LotAvailability, lot::Lot, ticket::Ticket, vehicle::Vehicle};
use std::fmt::Display;
use tracing::warn;

/// A ticket id string that is not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MalformedTicketIdError {
    input: String,
}

impl MalformedTicketIdError {
    #[inline]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for MalformedTicketIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} is not a ticket id", self.input)
    }
}

impl std::error::Error for MalformedTicketIdError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendantError {
    UnknownVehicleCategory(UnknownVehicleCategoryError),
    MalformedTicketId(MalformedTicketIdError),
    Park(ParkError),
    Unpark(UnparkError),
    Ledger(LedgerError),
}

impl AttendantError {
    #[inline]
    pub fn is_lot_full(&self) -> bool {
        matches!(self, AttendantError::Park(ParkError::LotFull(_)))
    }

    /// Unknown and malformed ids look the same to whoever holds the ticket.
    #[inline]
    pub fn is_ticket_not_found(&self) -> bool {
        matches!(
            self,
            AttendantError::MalformedTicketId(_)
                | AttendantError::Ledger(LedgerError::TicketNotFound(_))
        )
    }
}

impl Display for AttendantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendantError::UnknownVehicleCategory(e) => write!(f, "{e}"),
            AttendantError::MalformedTicketId(e) => write!(f, "{e}"),
            AttendantError::Park(e) => write!(f, "{e}"),
            AttendantError::Unpark(e) => write!(f, "{e}"),
            AttendantError::Ledger(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AttendantError {}

impl From<UnknownVehicleCategoryError> for AttendantError {
    fn from(value: UnknownVehicleCategoryError) -> Self {
        AttendantError::UnknownVehicleCategory(value)
    }
}

impl From<MalformedTicketIdError> for AttendantError {
    fn from(value: MalformedTicketIdError) -> Self {
        AttendantError::MalformedTicketId(value)
    }
}

impl From<ParkError> for AttendantError {
    fn from(value: ParkError) -> Self {
        AttendantError::Park(value)
    }
}

impl From<UnparkError> for AttendantError {
    fn from(value: UnparkError) -> Self {
        AttendantError::Unpark(value)
    }
}

impl From<LedgerError> for AttendantError {
    fn from(value: LedgerError) -> Self {
        AttendantError::Ledger(value)
    }
}

/// Front desk of the lot: takes raw input, parks and unparks, and keeps the
/// ticket ledger in step with the engine.
#[derive(Debug, Clone)]
pub struct Attendant<C = SystemClock> {
    engine: ParkingEngine<C>,
    ledger: TicketLedger,
}

impl Attendant<SystemClock> {
    pub fn new(lot: Lot, config: &EngineConfig) -> Self {
        Self::from_engine(ParkingEngine::new(lot, config))
    }
}

impl<C: Clock> Attendant<C> {
    pub fn from_engine(engine: ParkingEngine<C>) -> Self {
        Self {
            engine,
            ledger: TicketLedger::new(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &ParkingEngine<C> {
        &self.engine
    }

    #[inline]
    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    #[inline]
    pub fn lot(&self) -> &Lot {
        self.engine.lot()
    }

    /// Parses `category`, parks the vehicle and records the ticket.
    pub fn park(&mut self, plate: &str, category: &str) -> Result<Ticket, AttendantError> {
        let category: VehicleCategory = category.parse()?;
        self.park_vehicle(Vehicle::new(plate, category))
    }

    pub fn park_vehicle(&mut self, vehicle: Vehicle) -> Result<Ticket, AttendantError> {
        let ticket = self.engine.park(vehicle)?;
        if let Err(e) = self.ledger.insert(ticket.clone()) {
            // Keep the lot consistent with the ledger: nobody could redeem this spot.
            warn!(error = %e, "Ticket id collision; releasing spot");
            self.engine.unpark(&ticket)?;
            return Err(e.into());
        }
        Ok(ticket)
    }

    /// Redeems the ticket with the given id and frees its spot.
    pub fn unpark(&mut self, ticket_id: &str) -> Result<Ticket, AttendantError> {
        let id: TicketId = ticket_id
            .parse()
            .map_err(|_| MalformedTicketIdError::new(ticket_id))?;
        self.unpark_ticket(id)
    }

    pub fn unpark_ticket(&mut self, id: TicketId) -> Result<Ticket, AttendantError> {
        let ticket = self.ledger.lookup(&id)?.clone();
        self.engine.unpark(&ticket)?;
        Ok(self.ledger.redeem(id)?)
    }

    #[inline]
    pub fn availability(&self) -> LotAvailability {
        self.engine.availability()
    }

    /// Tickets not yet redeemed, oldest first.
    #[inline]
    pub fn active_tickets(&self) -> impl Iterator<Item = &Ticket> + '_ {
        self.ledger.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use park_alloc_model::layout::LotLayout;

    fn attendant() -> Attendant<FixedClock> {
        let lot = LotLayout::default().build_lot().unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
        Attendant::from_engine(ParkingEngine::with_clock(
            lot,
            clock,
            &EngineConfig::seeded(11),
        ))
    }

    #[test]
    fn test_park_records_ticket() {
        let mut a = attendant();
        let t = a.park("AB-123", "car").unwrap();
        assert_eq!(t.spot_id().as_str(), "C1");
        assert_eq!(a.ledger().get(&t.id()), Some(&t));
        assert_eq!(a.active_tickets().count(), 1);
    }

    #[test]
    fn test_unknown_category_changes_nothing() {
        let mut a = attendant();
        let before = a.availability();
        let err = a.park("AB-123", "bus").unwrap_err();
        assert!(matches!(err, AttendantError::UnknownVehicleCategory(_)));
        assert_eq!(a.availability(), before);
        assert!(a.ledger().is_empty());
    }

    #[test]
    fn test_unpark_by_id_string() {
        let mut a = attendant();
        let t = a.park("AB-123", "TRUCK").unwrap();
        let redeemed = a.unpark(&t.id().to_string()).unwrap();
        assert_eq!(redeemed, t);
        assert!(!a.lot().spot(t.location()).unwrap().is_occupied());
        assert!(a.ledger().is_empty());
    }

    #[test]
    fn test_double_redemption_is_rejected() {
        let mut a = attendant();
        let t = a.park("AB-123", "BIKE").unwrap();
        a.unpark_ticket(t.id()).unwrap();

        // Someone else now takes the same spot.
        let other = a.park("ZZ-9", "BIKE").unwrap();
        assert_eq!(other.location(), t.location());

        let err = a.unpark_ticket(t.id()).unwrap_err();
        assert_eq!(err, AttendantError::Ledger(LedgerError::AlreadyRedeemed(t.id())));
        assert!(a.lot().spot(other.location()).unwrap().is_occupied());
    }

    #[test]
    fn test_unknown_and_malformed_ids_read_as_not_found() {
        let mut a = attendant();
        let missing = a
            .unpark("00000000-0000-4000-8000-000000000000")
            .unwrap_err();
        assert!(missing.is_ticket_not_found());
        let garbage = a.unpark("ticket-1").unwrap_err();
        assert!(garbage.is_ticket_not_found());
        assert!(matches!(garbage, AttendantError::MalformedTicketId(_)));
    }

    #[test]
    fn test_lot_full_is_recoverable() {
        let mut a = attendant();
        a.park("T1", "truck").unwrap();
        a.park("T2", "truck").unwrap();
        let err = a.park("T3", "truck").unwrap_err();
        assert!(err.is_lot_full());
        assert_eq!(a.ledger().len(), 2);

        let first = a.active_tickets().next().unwrap().id();
        a.unpark_ticket(first).unwrap();
        assert!(a.park("T3", "truck").is_ok());
    }
}
