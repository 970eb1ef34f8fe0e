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

//! # Parking Allocation Model (`park-alloc-model`)
//!
//! The owned data structures of a parking facility and the allocation rule that
//! operates on them.
//!
//! ## Key Data Structures
//!
//! - **`Vehicle`**: plate plus [`VehicleCategory`](park_alloc_core::category::VehicleCategory).
//! - **`Spot`**: one slot with a fixed category. It validates fit and occupancy on
//!   assignment, so a spot can never silently hold two vehicles.
//! - **`Floor`**: spots in search order.
//! - **`Lot`**: floors in search order. Allocation is first-fit: the earliest floor
//!   with any free compatible spot wins, and within it the earliest such spot.
//!   Built through `LotBuilder`, which rejects duplicate spot ids.
//! - **`Ticket`**: the receipt handed out on a successful park.
//! - **`LotAvailability`**: per-floor free counts grouped by spot category.
//! - **`LotLayout`**: serde-friendly description of a lot, loadable from JSON.

pub mod availability;
pub mod err;
pub mod floor;
pub mod layout;
pub mod lot;
pub mod spot;
pub mod ticket;
pub mod vehicle;
