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

use crate::spot::Spot;
use park_alloc_core::category::{SpotCategory, VehicleCategory};
use std::collections::BTreeMap;

/// An ordered group of spots. Search order is storage order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Floor {
    spots: Vec<Spot>,
}

impl Floor {
    #[inline]
    pub fn new(spots: Vec<Spot>) -> Self {
        Self { spots }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    #[inline]
    pub fn spot(&self, slot: usize) -> Option<&Spot> {
        self.spots.get(slot)
    }

    #[inline]
    pub(crate) fn spot_mut(&mut self, slot: usize) -> Option<&mut Spot> {
        self.spots.get_mut(slot)
    }

    /// Slot of the first free spot admitting `category`, in storage order.
    ///
    /// `None` is an ordinary outcome, not an error.
    #[inline]
    pub fn find_available_spot(&self, category: VehicleCategory) -> Option<usize> {
        self.spots
            .iter()
            .position(|s| s.is_available_for(category))
    }

    /// Free spots per category. Categories without a free spot are absent.
    pub fn availability_by_category(&self) -> BTreeMap<SpotCategory, usize> {
        let mut counts = BTreeMap::new();
        for s in self.spots.iter().filter(|s| !s.is_occupied()) {
            *counts.entry(s.category()).or_insert(0) += 1;
        }
        counts
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.spots.iter().filter(|s| !s.is_occupied()).count()
    }

    /// Free spots that would admit `category`.
    #[inline]
    pub fn free_count_for(&self, category: VehicleCategory) -> usize {
        self.spots
            .iter()
            .filter(|s| s.is_available_for(category))
            .count()
    }
}

impl FromIterator<Spot> for Floor {
    fn from_iter<I: IntoIterator<Item = Spot>>(iter: I) -> Self {
        Floor::new(iter.into_iter().collect())
    }
}
