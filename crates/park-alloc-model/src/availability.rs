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

//! Read-only snapshots of free capacity, as shown to attendants.

use park_alloc_core::{category::SpotCategory, id::FloorIndex};
use serde::Serialize;
use std::{collections::BTreeMap, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorAvailability {
    floor: FloorIndex,
    free: BTreeMap<SpotCategory, usize>,
}

impl FloorAvailability {
    #[inline]
    pub fn new(floor: FloorIndex, free: BTreeMap<SpotCategory, usize>) -> Self {
        Self { floor, free }
    }

    #[inline]
    pub fn floor(&self) -> FloorIndex {
        self.floor
    }

    /// Free spots of `category` on this floor, zero when none.
    #[inline]
    pub fn free(&self, category: SpotCategory) -> usize {
        self.free.get(&category).copied().unwrap_or(0)
    }

    /// Only categories with at least one free spot appear.
    #[inline]
    pub fn by_category(&self) -> &BTreeMap<SpotCategory, usize> {
        &self.free
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.free.values().sum()
    }
}

impl Display for FloorAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} - Available Spots:", self.floor)?;
        if self.free.is_empty() {
            writeln!(f, "  none")?;
        }
        for (category, count) in &self.free {
            writeln!(f, "  {}: {}", category, count)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LotAvailability {
    floors: Vec<FloorAvailability>,
}

impl LotAvailability {
    #[inline]
    pub fn floors(&self) -> &[FloorAvailability] {
        &self.floors
    }

    #[inline]
    pub fn floor(&self, index: FloorIndex) -> Option<&FloorAvailability> {
        self.floors.get(index.value())
    }

    /// Free spots of `category` summed over all floors.
    #[inline]
    pub fn free(&self, category: SpotCategory) -> usize {
        self.floors.iter().map(|f| f.free(category)).sum()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.floors.iter().map(FloorAvailability::total).sum()
    }
}

impl FromIterator<FloorAvailability> for LotAvailability {
    fn from_iter<I: IntoIterator<Item = FloorAvailability>>(iter: I) -> Self {
        Self {
            floors: iter.into_iter().collect(),
        }
    }
}

impl Display for LotAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.floors.is_empty() {
            return writeln!(f, "No floors configured");
        }
        for floor in &self.floors {
            write!(f, "{floor}")?;
        }
        Ok(())
    }
}
