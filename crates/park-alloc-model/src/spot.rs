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
    err::{AssignError, IncompatibleSpotError, SpotOccupiedError},
    vehicle::Vehicle,
};
use park_alloc_core::{
    category::{SpotCategory, VehicleCategory},
    id::SpotId,
};
use std::fmt::Display;

/// A single parking slot.
///
/// A spot is occupied exactly when it holds a vehicle; there is no separate flag
/// that could drift out of sync with the occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    id: SpotId,
    category: SpotCategory,
    vehicle: Option<Vehicle>,
}

impl Spot {
    #[inline]
    pub fn new(id: impl Into<SpotId>, category: SpotCategory) -> Self {
        Self {
            id: id.into(),
            category,
            vehicle: None,
        }
    }

    #[inline]
    pub fn compact(id: impl Into<SpotId>) -> Self {
        Self::new(id, SpotCategory::Compact)
    }

    #[inline]
    pub fn large(id: impl Into<SpotId>) -> Self {
        Self::new(id, SpotCategory::Large)
    }

    #[inline]
    pub fn handicapped(id: impl Into<SpotId>) -> Self {
        Self::new(id, SpotCategory::Handicapped)
    }

    #[inline]
    pub fn id(&self) -> &SpotId {
        &self.id
    }

    #[inline]
    pub fn category(&self) -> SpotCategory {
        self.category
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    #[inline]
    pub fn current_vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// Pure category check; occupancy is ignored.
    #[inline]
    pub fn can_fit(&self, category: VehicleCategory) -> bool {
        self.category.admits(category)
    }

    #[inline]
    pub fn is_available_for(&self, category: VehicleCategory) -> bool {
        !self.is_occupied() && self.can_fit(category)
    }

    /// Places `vehicle` into this spot.
    ///
    /// Occupancy is checked before compatibility, so an occupied spot reports
    /// [`AssignError::AlreadyOccupied`] even for an incompatible vehicle.
    /// On error the spot is left untouched.
    pub fn assign(&mut self, vehicle: Vehicle) -> Result<(), AssignError> {
        if let Some(occupant) = &self.vehicle {
            return Err(SpotOccupiedError::new(self.id.clone(), occupant.plate()).into());
        }
        if !self.can_fit(vehicle.category()) {
            return Err(
                IncompatibleSpotError::new(self.id.clone(), self.category, vehicle.category())
                    .into(),
            );
        }
        self.vehicle = Some(vehicle);
        Ok(())
    }

    /// Frees the spot and hands back the previous occupant, if any.
    #[inline]
    pub fn release(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }
}

impl Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.vehicle {
            Some(v) => write!(f, "{} [{}] occupied by {}", self.id, self.category, v),
            None => write!(f, "{} [{}] free", self.id, self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spot_is_free() {
        let s = Spot::compact("C1");
        assert!(!s.is_occupied());
        assert!(s.current_vehicle().is_none());
        assert_eq!(s.id().as_str(), "C1");
        assert_eq!(s.category(), SpotCategory::Compact);
    }

    #[test]
    fn test_assign_sets_occupant() {
        let mut s = Spot::large("L1");
        s.assign(Vehicle::truck("TR-1")).unwrap();
        assert!(s.is_occupied());
        assert_eq!(s.current_vehicle().map(|v| v.plate()), Some("TR-1"));
        assert!(!s.is_available_for(VehicleCategory::Car));
    }

    #[test]
    fn test_assign_rejects_occupied_spot_and_keeps_occupant() {
        let mut s = Spot::large("L1");
        s.assign(Vehicle::car("A")).unwrap();
        let err = s.assign(Vehicle::car("B")).unwrap_err();
        match err {
            AssignError::AlreadyOccupied(e) => {
                assert_eq!(e.spot().as_str(), "L1");
                assert_eq!(e.occupant(), "A");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(s.current_vehicle().map(|v| v.plate()), Some("A"));
    }

    #[test]
    fn test_assign_rejects_incompatible_vehicle() {
        let mut s = Spot::handicapped("H1");
        assert!(matches!(
            s.assign(Vehicle::bike("B-1")),
            Err(AssignError::Incompatible(_))
        ));
        assert!(!s.is_occupied());

        let mut c = Spot::compact("C1");
        assert!(matches!(
            c.assign(Vehicle::truck("T-1")),
            Err(AssignError::Incompatible(_))
        ));
    }

    #[test]
    fn test_occupied_check_wins_over_compatibility() {
        let mut s = Spot::compact("C1");
        s.assign(Vehicle::bike("B-1")).unwrap();
        assert!(matches!(
            s.assign(Vehicle::truck("T-1")),
            Err(AssignError::AlreadyOccupied(_))
        ));
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut s = Spot::compact("C1");
        s.assign(Vehicle::car("A")).unwrap();
        assert_eq!(s.release().map(|v| v.plate().to_owned()), Some("A".into()));
        assert!(!s.is_occupied());
        assert!(s.release().is_none());
        assert!(!s.is_occupied());
    }
}
