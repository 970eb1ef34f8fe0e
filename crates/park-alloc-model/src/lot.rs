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
    availability::{FloorAvailability, LotAvailability},
    err::{AssignError, LotBuildError, LotFullError, UnknownSpotError},
    floor::Floor,
    spot::Spot,
    vehicle::Vehicle,
};
use park_alloc_core::{
    category::VehicleCategory,
    id::{FloorIndex, SpotId, SpotLocation},
};
use std::collections::HashSet;
use tracing::trace;

/// The whole facility: floors in search order.
///
/// A `Lot` can only be obtained through [`LotBuilder`], which guarantees spot ids
/// are unique across all floors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    floors: Vec<Floor>,
}

impl Lot {
    #[inline]
    pub fn builder() -> LotBuilder {
        LotBuilder::new()
    }

    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn floor(&self, index: FloorIndex) -> Option<&Floor> {
        self.floors.get(index.value())
    }

    #[inline]
    pub fn spot(&self, location: SpotLocation) -> Option<&Spot> {
        self.floor(location.floor())?.spot(location.slot())
    }

    #[inline]
    fn spot_mut(&mut self, location: SpotLocation) -> Result<&mut Spot, UnknownSpotError> {
        self.floors
            .get_mut(location.floor().value())
            .and_then(|f| f.spot_mut(location.slot()))
            .ok_or(UnknownSpotError::new(location))
    }

    #[inline]
    pub fn total_spots(&self) -> usize {
        self.floors.iter().map(Floor::len).sum()
    }

    #[inline]
    pub fn free_spots(&self) -> usize {
        self.floors.iter().map(Floor::free_count).sum()
    }

    /// Location of the spot holding a vehicle with this plate, if any.
    pub fn locate_plate(&self, plate: &str) -> Option<SpotLocation> {
        self.iter_locations()
            .find(|(_, s)| s.current_vehicle().is_some_and(|v| v.plate() == plate))
            .map(|(loc, _)| loc)
    }

    /// All spots with their locations, floor by floor.
    pub fn iter_locations(&self) -> impl Iterator<Item = (SpotLocation, &Spot)> + '_ {
        self.floors.iter().enumerate().flat_map(|(fi, floor)| {
            floor
                .spots()
                .iter()
                .enumerate()
                .map(move |(slot, s)| (SpotLocation::new(FloorIndex::new(fi), slot), s))
        })
    }

    /// First free compatible spot: earliest floor wins, then earliest slot on it.
    pub fn find_available_spot(&self, category: VehicleCategory) -> Option<SpotLocation> {
        self.floors.iter().enumerate().find_map(|(fi, floor)| {
            let slot = floor.find_available_spot(category);
            trace!(floor = fi, ?slot, %category, "Searched floor");
            slot.map(|slot| SpotLocation::new(FloorIndex::new(fi), slot))
        })
    }

    /// Places `vehicle` into the spot at `location`, re-validating fit and occupancy.
    pub fn assign(
        &mut self,
        location: SpotLocation,
        vehicle: Vehicle,
    ) -> Result<&Spot, AssignError> {
        let spot = self.spot_mut(location)?;
        spot.assign(vehicle)?;
        Ok(spot)
    }

    /// Searches and claims a spot in one step. Nothing changes on failure.
    pub fn claim(&mut self, vehicle: Vehicle) -> Result<SpotLocation, ClaimError> {
        let category = vehicle.category();
        let location = self
            .find_available_spot(category)
            .ok_or(LotFullError::new(category))?;
        self.assign(location, vehicle)?;
        Ok(location)
    }

    /// Empties the spot at `location` unconditionally and returns its former occupant.
    pub fn release(
        &mut self,
        location: SpotLocation,
    ) -> Result<Option<Vehicle>, UnknownSpotError> {
        Ok(self.spot_mut(location)?.release())
    }

    /// Free spots per category for every floor, in floor order.
    pub fn availability(&self) -> LotAvailability {
        self.floors
            .iter()
            .enumerate()
            .map(|(fi, floor)| {
                FloorAvailability::new(FloorIndex::new(fi), floor.availability_by_category())
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClaimError {
    LotFull(LotFullError),
    Assign(AssignError),
}

impl std::fmt::Display for ClaimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimError::LotFull(e) => write!(f, "{e}"),
            ClaimError::Assign(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ClaimError {}

impl From<LotFullError> for ClaimError {
    fn from(value: LotFullError) -> Self {
        ClaimError::LotFull(value)
    }
}

impl From<AssignError> for ClaimError {
    fn from(value: AssignError) -> Self {
        ClaimError::Assign(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LotBuilder {
    floors: Vec<Floor>,
}

impl LotBuilder {
    #[inline]
    pub fn new() -> Self {
        Self { floors: Vec::new() }
    }

    /// Appends a floor; floors are searched in the order they are added.
    #[inline]
    pub fn floor(&mut self, spots: impl IntoIterator<Item = Spot>) -> &mut Self {
        self.floors.push(spots.into_iter().collect());
        self
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn build(&self) -> Result<Lot, LotBuildError> {
        let mut seen: HashSet<&SpotId> = HashSet::new();
        for spot in self.floors.iter().flat_map(|f| f.spots()) {
            if !seen.insert(spot.id()) {
                return Err(LotBuildError::DuplicateSpotId(spot.id().clone()));
            }
        }
        Ok(Lot {
            floors: self.floors.clone(),
        })
    }
}
