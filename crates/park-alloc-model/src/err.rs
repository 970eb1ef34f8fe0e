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

use park_alloc_core::{
    category::{SpotCategory, VehicleCategory},
    id::{SpotId, SpotLocation},
};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpotOccupiedError {
    spot: SpotId,
    occupant: String,
}

impl SpotOccupiedError {
    #[inline]
    pub fn new(spot: SpotId, occupant: impl Into<String>) -> Self {
        Self {
            spot,
            occupant: occupant.into(),
        }
    }

    #[inline]
    pub fn spot(&self) -> &SpotId {
        &self.spot
    }

    #[inline]
    pub fn occupant(&self) -> &str {
        &self.occupant
    }
}

impl Display for SpotOccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spot {} is already occupied by {}",
            self.spot, self.occupant
        )
    }
}

impl std::error::Error for SpotOccupiedError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IncompatibleSpotError {
    spot: SpotId,
    spot_category: SpotCategory,
    vehicle_category: VehicleCategory,
}

impl IncompatibleSpotError {
    #[inline]
    pub fn new(
        spot: SpotId,
        spot_category: SpotCategory,
        vehicle_category: VehicleCategory,
    ) -> Self {
        Self {
            spot,
            spot_category,
            vehicle_category,
        }
    }

    #[inline]
    pub fn spot(&self) -> &SpotId {
        &self.spot
    }

    #[inline]
    pub fn spot_category(&self) -> SpotCategory {
        self.spot_category
    }

    #[inline]
    pub fn vehicle_category(&self) -> VehicleCategory {
        self.vehicle_category
    }
}

impl Display for IncompatibleSpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Spot {} ({}) cannot hold a {}",
            self.spot, self.spot_category, self.vehicle_category
        )
    }
}

impl std::error::Error for IncompatibleSpotError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownSpotError {
    location: SpotLocation,
}

impl UnknownSpotError {
    #[inline]
    pub fn new(location: SpotLocation) -> Self {
        Self { location }
    }

    #[inline]
    pub fn location(&self) -> SpotLocation {
        self.location
    }
}

impl Display for UnknownSpotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No spot at {}", self.location)
    }
}

impl std::error::Error for UnknownSpotError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssignError {
    /// The spot already holds a vehicle.
    AlreadyOccupied(SpotOccupiedError),
    /// The spot's category does not admit the vehicle's category.
    Incompatible(IncompatibleSpotError),
    /// The addressed spot does not exist in the lot.
    UnknownSpot(UnknownSpotError),
}

impl Display for AssignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignError::AlreadyOccupied(e) => write!(f, "{e}"),
            AssignError::Incompatible(e) => write!(f, "{e}"),
            AssignError::UnknownSpot(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AssignError {}

impl From<SpotOccupiedError> for AssignError {
    fn from(value: SpotOccupiedError) -> Self {
        AssignError::AlreadyOccupied(value)
    }
}

impl From<IncompatibleSpotError> for AssignError {
    fn from(value: IncompatibleSpotError) -> Self {
        AssignError::Incompatible(value)
    }
}

impl From<UnknownSpotError> for AssignError {
    fn from(value: UnknownSpotError) -> Self {
        AssignError::UnknownSpot(value)
    }
}

/// No floor holds a free spot admitting the requested vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LotFullError {
    category: VehicleCategory,
}

impl LotFullError {
    #[inline]
    pub fn new(category: VehicleCategory) -> Self {
        Self { category }
    }

    #[inline]
    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}

impl Display for LotFullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parking is full for {}", self.category)
    }
}

impl std::error::Error for LotFullError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LotBuildError {
    DuplicateSpotId(SpotId),
}

impl Display for LotBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotBuildError::DuplicateSpotId(id) => write!(f, "Duplicate spot ID: {}", id),
        }
    }
}

impl std::error::Error for LotBuildError {}

#[derive(Debug)]
pub enum LayoutError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Build(LotBuildError),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Io(e) => write!(f, "Cannot read lot layout: {e}"),
            LayoutError::Parse(e) => write!(f, "Invalid lot layout: {e}"),
            LayoutError::Build(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io(e) => Some(e),
            LayoutError::Parse(e) => Some(e),
            LayoutError::Build(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(value: std::io::Error) -> Self {
        LayoutError::Io(value)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        LayoutError::Parse(value)
    }
}

impl From<LotBuildError> for LayoutError {
    fn from(value: LotBuildError) -> Self {
        LayoutError::Build(value)
    }
}
