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

use crate::vehicle::Vehicle;
use chrono::{DateTime, Utc};
use park_alloc_core::{
    category::SpotCategory,
    id::{SpotId, SpotLocation, TicketId},
};
use serde::Serialize;
use std::fmt::Display;

/// Receipt binding a parked vehicle to the spot it was given.
///
/// Tickets are issued when a spot has been claimed and are never mutated
/// afterwards. Redeeming one is the job of whoever stores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ticket {
    id: TicketId,
    vehicle: Vehicle,
    entry_time: DateTime<Utc>,
    location: SpotLocation,
    spot_id: SpotId,
    spot_category: SpotCategory,
}

impl Ticket {
    #[inline]
    pub fn issue(
        id: TicketId,
        vehicle: Vehicle,
        entry_time: DateTime<Utc>,
        location: SpotLocation,
        spot_id: SpotId,
        spot_category: SpotCategory,
    ) -> Self {
        Self {
            id,
            vehicle,
            entry_time,
            location,
            spot_id,
            spot_category,
        }
    }

    #[inline]
    pub fn id(&self) -> TicketId {
        self.id
    }

    #[inline]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[inline]
    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    #[inline]
    pub fn location(&self) -> SpotLocation {
        self.location
    }

    #[inline]
    pub fn spot_id(&self) -> &SpotId {
        &self.spot_id
    }

    #[inline]
    pub fn spot_category(&self) -> SpotCategory {
        self.spot_category
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ticket {}: {} at {} ({}, {}) since {}",
            self.id,
            self.vehicle,
            self.spot_id,
            self.spot_category,
            self.location,
            self.entry_time.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use park_alloc_core::id::FloorIndex;

    const ID: &str = "0b9e4c1a-7f3d-4e2a-9c55-2d6a1f0e8b73";

    fn ticket() -> Ticket {
        Ticket::issue(
            ID.parse().unwrap(),
            Vehicle::truck("TRK-7"),
            Utc.with_ymd_and_hms(2025, 2, 14, 7, 45, 9).unwrap(),
            SpotLocation::new(FloorIndex::new(1), 0),
            SpotId::new("L2"),
            SpotCategory::Large,
        )
    }

    #[test]
    fn test_accessors_return_issued_values() {
        let t = ticket();
        assert_eq!(t.id().to_string(), ID);
        assert_eq!(t.vehicle(), &Vehicle::truck("TRK-7"));
        assert_eq!(
            t.entry_time(),
            Utc.with_ymd_and_hms(2025, 2, 14, 7, 45, 9).unwrap()
        );
        assert_eq!(t.location().floor(), FloorIndex::new(1));
        assert_eq!(t.location().slot(), 0);
        assert_eq!(t.spot_id().as_str(), "L2");
        assert_eq!(t.spot_category(), SpotCategory::Large);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ticket().to_string(),
            format!(
                "Ticket {ID}: TRK-7 (TRUCK) at L2 (LARGE, Floor 2, slot 1) since 2025-02-14 07:45:09"
            )
        );
    }
}
