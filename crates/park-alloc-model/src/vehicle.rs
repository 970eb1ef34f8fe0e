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

use park_alloc_core::category::VehicleCategory;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A vehicle as presented at the gate.
///
/// The plate is taken verbatim; neither its format nor its uniqueness is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    plate: String,
    category: VehicleCategory,
}

impl Vehicle {
    #[inline]
    pub fn new(plate: impl Into<String>, category: VehicleCategory) -> Self {
        Self {
            plate: plate.into(),
            category,
        }
    }

    #[inline]
    pub fn car(plate: impl Into<String>) -> Self {
        Self::new(plate, VehicleCategory::Car)
    }

    #[inline]
    pub fn bike(plate: impl Into<String>) -> Self {
        Self::new(plate, VehicleCategory::Bike)
    }

    #[inline]
    pub fn truck(plate: impl Into<String>) -> Self {
        Self::new(plate, VehicleCategory::Truck)
    }

    #[inline]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    #[inline]
    pub fn category(&self) -> VehicleCategory {
        self.category
    }
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.plate, self.category)
    }
}
