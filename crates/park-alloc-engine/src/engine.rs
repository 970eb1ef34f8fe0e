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
    ticket_id::TicketIdGenerator,
};
use park_alloc_model::{
    availability::LotAvailability,
    err::{AssignError, LotFullError, UnknownSpotError},
    lot::{ClaimError, Lot},
    ticket::Ticket,
    vehicle::Vehicle,
};
use std::fmt::Display;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParkError {
    /// No floor holds a free spot admitting the vehicle.
    LotFull(LotFullError),
    /// The chosen spot refused the vehicle.
    Assign(AssignError),
}

impl Display for ParkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParkError::LotFull(e) => write!(f, "{e}"),
            ParkError::Assign(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParkError {}

impl From<ClaimError> for ParkError {
    fn from(value: ClaimError) -> Self {
        match value {
            ClaimError::LotFull(e) => ParkError::LotFull(e),
            ClaimError::Assign(e) => ParkError::Assign(e),
        }
    }
}

impl From<UnknownSpotError> for ParkError {
    fn from(value: UnknownSpotError) -> Self {
        ParkError::Assign(AssignError::UnknownSpot(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnparkError {
    /// The ticket points at a spot this lot does not have.
    UnknownSpot(UnknownSpotError),
}

impl Display for UnparkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnparkError::UnknownSpot(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UnparkError {}

impl From<UnknownSpotError> for UnparkError {
    fn from(value: UnknownSpotError) -> Self {
        UnparkError::UnknownSpot(value)
    }
}

/// Allocation engine: owns the lot and issues tickets.
///
/// The engine keeps no record of the tickets it hands out. Detecting a ticket that
/// was already redeemed is up to the ticket store, see
/// [`TicketLedger`](crate::ledger::TicketLedger).
#[derive(Debug, Clone)]
pub struct ParkingEngine<C = SystemClock> {
    lot: Lot,
    clock: C,
    ids: TicketIdGenerator,
}

impl ParkingEngine<SystemClock> {
    pub fn new(lot: Lot, config: &EngineConfig) -> Self {
        Self::with_clock(lot, SystemClock, config)
    }
}

impl<C: Clock> ParkingEngine<C> {
    pub fn with_clock(lot: Lot, clock: C, config: &EngineConfig) -> Self {
        Self {
            lot,
            clock,
            ids: TicketIdGenerator::with_seed(config.seed),
        }
    }

    #[inline]
    pub fn lot(&self) -> &Lot {
        &self.lot
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Parks `vehicle` in the first free compatible spot and issues a ticket.
    ///
    /// Floors are tried in order and the first one with a match wins. On
    /// [`ParkError::LotFull`] no spot has changed.
    #[instrument(
        level = "debug",
        skip_all,
        fields(plate = vehicle.plate(), category = %vehicle.category())
    )]
    pub fn park(&mut self, vehicle: Vehicle) -> Result<Ticket, ParkError> {
        let category = vehicle.category();
        let location = match self.lot.claim(vehicle.clone()) {
            Ok(location) => location,
            Err(ClaimError::LotFull(e)) => {
                warn!(%category, "No compatible spot available");
                return Err(ParkError::LotFull(e));
            }
            Err(e) => return Err(e.into()),
        };
        let spot = self
            .lot
            .spot(location)
            .ok_or(UnknownSpotError::new(location))?;

        let ticket = Ticket::issue(
            self.ids.next_id(),
            vehicle,
            self.clock.now(),
            location,
            spot.id().clone(),
            spot.category(),
        );
        info!(
            ticket = %ticket.id(),
            spot = %ticket.spot_id(),
            %location,
            "Vehicle parked"
        );
        Ok(ticket)
    }

    /// Frees the spot recorded on `ticket` and returns whoever was in it.
    ///
    /// The release is unconditional: the engine does not know whether the ticket
    /// was already used.
    #[instrument(level = "debug", skip_all, fields(ticket = %ticket.id()))]
    pub fn unpark(&mut self, ticket: &Ticket) -> Result<Option<Vehicle>, UnparkError> {
        let released = self.lot.release(ticket.location())?;
        match &released {
            Some(v) if v.plate() == ticket.vehicle().plate() => {
                info!(plate = v.plate(), spot = %ticket.spot_id(), "Vehicle unparked");
            }
            Some(v) => {
                warn!(
                    expected = ticket.vehicle().plate(),
                    found = v.plate(),
                    spot = %ticket.spot_id(),
                    "Released spot held a different vehicle than the ticket"
                );
            }
            None => debug!(spot = %ticket.spot_id(), "Spot was already free"),
        }
        Ok(released)
    }

    /// Free spots per category for each floor, in floor order.
    #[inline]
    pub fn availability(&self) -> LotAvailability {
        self.lot.availability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, TimeZone, Utc};
    use park_alloc_core::{
        category::{SpotCategory, VehicleCategory},
        id::{FloorIndex, SpotLocation},
    };
    use park_alloc_model::spot::Spot;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap())
    }

    fn engine_with(lot: Lot) -> ParkingEngine<FixedClock> {
        ParkingEngine::with_clock(lot, clock(), &EngineConfig::seeded(1))
    }

    fn scenario_engine() -> ParkingEngine<FixedClock> {
        let mut b = Lot::builder();
        b.floor([Spot::compact("C1"), Spot::large("L1")])
            .floor([Spot::handicapped("H1")]);
        engine_with(b.build().unwrap())
    }

    #[test]
    fn test_scenario_truck_bike_car_then_full() {
        let mut e = scenario_engine();

        let t = e.park(Vehicle::truck("TRK")).unwrap();
        assert_eq!(t.spot_id().as_str(), "L1");
        assert_eq!(t.location(), SpotLocation::new(FloorIndex::new(0), 1));

        let b = e.park(Vehicle::bike("BIK")).unwrap();
        assert_eq!(b.spot_id().as_str(), "C1");

        let c = e.park(Vehicle::car("CAR")).unwrap();
        assert_eq!(c.spot_id().as_str(), "H1");
        assert_eq!(c.location().floor(), FloorIndex::new(1));

        let before = e.lot().clone();
        assert_eq!(
            e.park(Vehicle::car("CAR2")),
            Err(ParkError::LotFull(LotFullError::new(VehicleCategory::Car)))
        );
        assert_eq!(e.lot(), &before);
    }

    #[test]
    fn test_ticket_carries_vehicle_time_and_spot() {
        let mut e = scenario_engine();
        let t = e.park(Vehicle::bike("B-9")).unwrap();
        assert_eq!(t.vehicle(), &Vehicle::bike("B-9"));
        assert_eq!(t.entry_time(), clock().now());
        assert_eq!(t.spot_category(), SpotCategory::Compact);
    }

    #[test]
    fn test_advancing_the_clock_changes_entry_time() {
        let mut e = scenario_engine();
        let first = e.park(Vehicle::car("EARLY")).unwrap();
        let later = clock().now() + Duration::minutes(15);
        e.clock_mut().set(later);
        let second = e.park(Vehicle::car("LATE")).unwrap();
        assert_eq!(first.entry_time(), clock().now());
        assert_eq!(second.entry_time(), later);
        assert!(first.entry_time() < second.entry_time());
    }

    #[test]
    fn test_ticket_ids_are_unique() {
        let mut b = Lot::builder();
        b.floor((0..50).map(|i| Spot::large(format!("L{i}"))));
        let mut e = engine_with(b.build().unwrap());
        let mut ids = std::collections::HashSet::new();
        for i in 0..50 {
            let t = e.park(Vehicle::car(format!("P{i}"))).unwrap();
            assert!(ids.insert(t.id()));
        }
    }

    #[test]
    fn test_park_decrements_compatible_free_count_on_chosen_floor() {
        let mut e = scenario_engine();
        let before = e.lot().floors()[0].free_count_for(VehicleCategory::Car);
        let t = e.park(Vehicle::car("A")).unwrap();
        assert_eq!(t.location().floor(), FloorIndex::new(0));
        let after = e.lot().floors()[0].free_count_for(VehicleCategory::Car);
        assert_eq!(after, before - 1);
    }

    #[test]
    fn test_unpark_restores_availability_snapshot() {
        let mut e = scenario_engine();
        let before = e.availability();
        let t = e.park(Vehicle::truck("T")).unwrap();
        assert_ne!(e.availability(), before);
        let released = e.unpark(&t).unwrap();
        assert_eq!(released, Some(Vehicle::truck("T")));
        assert_eq!(e.availability(), before);
    }

    #[test]
    fn test_unparked_spot_serves_another_category() {
        let mut e = scenario_engine();
        let truck = e.park(Vehicle::truck("T")).unwrap();
        e.park(Vehicle::car("C1")).unwrap(); // takes C1
        e.park(Vehicle::car("C2")).unwrap(); // takes H1
        e.unpark(&truck).unwrap();
        let bike = e.park(Vehicle::bike("B")).unwrap();
        assert_eq!(bike.spot_id().as_str(), "L1");
    }

    #[test]
    fn test_unpark_twice_is_a_no_op_for_the_engine() {
        let mut e = scenario_engine();
        let t = e.park(Vehicle::car("A")).unwrap();
        assert!(e.unpark(&t).unwrap().is_some());
        assert_eq!(e.unpark(&t), Ok(None));
    }

    #[test]
    fn test_unpark_foreign_ticket_reports_unknown_spot() {
        let mut big = scenario_engine();
        let t = big.park(Vehicle::car("A")).unwrap(); // C1
        big.park(Vehicle::car("B")).unwrap(); // L1
        let c = big.park(Vehicle::car("C")).unwrap(); // H1
        assert_eq!(c.location().floor(), FloorIndex::new(1));

        let mut tiny = engine_with({
            let mut b = Lot::builder();
            b.floor([Spot::large("X")]);
            b.build().unwrap()
        });
        assert!(tiny.unpark(&t).is_ok());
        assert!(matches!(tiny.unpark(&c), Err(UnparkError::UnknownSpot(_))));
    }
}
