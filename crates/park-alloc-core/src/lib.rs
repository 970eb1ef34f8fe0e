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

//! # Parking Allocation Core (`park-alloc-core`)
//!
//! Closed vocabularies shared by every other crate of the workspace:
//!
//! - [`category::VehicleCategory`] and [`category::SpotCategory`], the two closed
//!   enumerations the allocator works with.
//! - [`category::can_fit`], the static compatibility table deciding which vehicle
//!   categories a spot category admits.
//! - Identifiers ([`id::SpotId`], [`id::FloorIndex`], [`id::SpotLocation`],
//!   [`id::TicketId`]) so that floors, slots and tickets cannot be mixed up.
//!
//! Nothing in here carries mutable state.

pub mod category;
pub mod err;
pub mod id;
