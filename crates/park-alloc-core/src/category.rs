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

//! Vehicle and spot categories together with the compatibility table.
//!
//! Both enumerations are closed: adding a variant forces every `match` over them,
//! including [`can_fit`], to be revisited.

use crate::err::{UnknownSpotCategoryError, UnknownVehicleCategoryError};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VehicleCategory {
    Car,
    Bike,
    Truck,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::Truck,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            VehicleCategory::Car => "CAR",
            VehicleCategory::Bike => "BIKE",
            VehicleCategory::Truck => "TRUCK",
        }
    }
}

impl Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = UnknownVehicleCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownVehicleCategoryError::new(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpotCategory {
    Compact,
    Large,
    Handicapped,
}

impl SpotCategory {
    pub const ALL: [SpotCategory; 3] = [
        SpotCategory::Compact,
        SpotCategory::Large,
        SpotCategory::Handicapped,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            SpotCategory::Compact => "COMPACT",
            SpotCategory::Large => "LARGE",
            SpotCategory::Handicapped => "HANDICAPPED",
        }
    }

    /// Whether a spot of this category may hold a vehicle of `vehicle`'s category.
    #[inline]
    pub const fn admits(self, vehicle: VehicleCategory) -> bool {
        can_fit(self, vehicle)
    }
}

impl Display for SpotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpotCategory {
    type Err = UnknownSpotCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SpotCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSpotCategoryError::new(s))
    }
}

/// The compatibility table.
///
/// | spot          | car | bike | truck |
/// |---------------|-----|------|-------|
/// | `COMPACT`     | yes | yes  | no    |
/// | `LARGE`       | yes | yes  | yes   |
/// | `HANDICAPPED` | yes | no   | no    |
///
/// Occupancy is not consulted here.
#[inline]
pub const fn can_fit(spot: SpotCategory, vehicle: VehicleCategory) -> bool {
    use SpotCategory::*;
    use VehicleCategory::*;
    match (spot, vehicle) {
        (Compact, Car | Bike) => true,
        (Compact, Truck) => false,
        (Large, _) => true,
        (Handicapped, Car) => true,
        (Handicapped, Bike | Truck) => false,
    }
}
