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

//! # Parking Allocation Engine (`park-alloc-engine`)
//!
//! Runs the allocation rule of [`park_alloc_model`] against a live lot:
//!
//! - [`engine::ParkingEngine`] parks vehicles, mints tickets (random UUID ids and
//!   an entry timestamp from a [`clock::Clock`]) and frees spots on unpark.
//! - [`ledger::TicketLedger`] stores issued tickets and refuses to redeem one twice.
//! - [`attendant::Attendant`] ties both together behind string input, which is
//!   what an interactive front end deals in.
//! - [`shared::SharedAttendant`] puts an attendant behind a mutex for use from
//!   several threads.

pub mod attendant;
pub mod clock;
pub mod config;
pub mod engine;
pub mod ledger;
pub mod shared;
pub mod ticket_id;
