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

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;

/// Identifier of a spot as printed on the ground, e.g. `C1`.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(String);

impl SpotId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        SpotId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SpotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpotId {
    fn from(value: &str) -> Self {
        SpotId(value.to_owned())
    }
}

impl From<String> for SpotId {
    fn from(value: String) -> Self {
        SpotId(value)
    }
}

/// Zero-based position of a floor inside its lot.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorIndex(usize);

impl FloorIndex {
    #[inline]
    pub const fn new(index: usize) -> Self {
        FloorIndex(index)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Display for FloorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Floor {}", self.0 + 1)
    }
}

impl From<usize> for FloorIndex {
    fn from(value: usize) -> Self {
        FloorIndex(value)
    }
}

/// Address of one spot: the floor, then the slot inside that floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpotLocation {
    floor: FloorIndex,
    slot: usize,
}

impl SpotLocation {
    #[inline]
    pub const fn new(floor: FloorIndex, slot: usize) -> Self {
        Self { floor, slot }
    }

    #[inline]
    pub const fn floor(&self) -> FloorIndex {
        self.floor
    }

    #[inline]
    pub const fn slot(&self) -> usize {
        self.slot
    }
}

impl Display for SpotLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, slot {}", self.floor, self.slot + 1)
    }
}

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    #[inline]
    pub const fn new(id: Uuid) -> Self {
        TicketId(id)
    }

    #[inline]
    pub const fn value(self) -> Uuid {
        self.0
    }
}

impl Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for TicketId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(TicketId)
    }
}

impl From<Uuid> for TicketId {
    fn from(value: Uuid) -> Self {
        TicketId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_index_displays_one_based() {
        assert_eq!(FloorIndex::new(0).to_string(), "Floor 1");
        assert_eq!(
            SpotLocation::new(FloorIndex::new(1), 2).to_string(),
            "Floor 2, slot 3"
        );
    }

    #[test]
    fn test_spot_locations_order_by_floor_then_slot() {
        let a = SpotLocation::new(FloorIndex::new(0), 5);
        let b = SpotLocation::new(FloorIndex::new(1), 0);
        let c = SpotLocation::new(FloorIndex::new(1), 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_ticket_id_parses_its_own_display() {
        let id = TicketId::new(Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0));
        let shown = id.to_string();
        assert_eq!(shown.parse::<TicketId>().unwrap(), id);
        assert_eq!(format!("  {shown}\n").parse::<TicketId>().unwrap(), id);
        assert!("not-a-ticket".parse::<TicketId>().is_err());
    }
}
