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

//! Interactive menu over an [`Attendant`].

use park_alloc_engine::{
    attendant::{Attendant, AttendantError},
    clock::Clock,
    ledger::LedgerError,
};
use std::io::{self, BufRead, Write};

const MENU: &str = "--Parking Lot System--
1. Park Vehicle
2. Unpark Vehicle
3. Show Available Spots
4. Exit";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `prompt` and reads one line. `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Serves menu requests until the user exits or input ends.
    pub fn run<C: Clock>(&mut self, attendant: &mut Attendant<C>) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter Choice: ")? else {
                break;
            };
            match choice.trim().parse::<u32>() {
                Ok(1) => {
                    if !self.park(attendant)? {
                        break;
                    }
                }
                Ok(2) => {
                    if !self.unpark(attendant)? {
                        break;
                    }
                }
                Ok(3) => write!(self.output, "{}", attendant.availability())?,
                Ok(4) => break,
                _ => writeln!(self.output, "Invalid Choice! Try Again.")?,
            }
        }
        writeln!(self.output, "Exiting the program...")?;
        self.output.flush()
    }

    fn park<C: Clock>(&mut self, attendant: &mut Attendant<C>) -> io::Result<bool> {
        let Some(plate) = self.prompt("Enter License Plate: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Enter Vehicle Type (CAR/BIKE/TRUCK): ")? else {
            return Ok(false);
        };
        match attendant.park(&plate, &category) {
            Ok(ticket) => {
                writeln!(self.output, "Vehicle Parked. Ticket ID: {}", ticket.id())?;
                writeln!(
                    self.output,
                    "Spot: {} ({}, {})",
                    ticket.spot_id(),
                    ticket.spot_category(),
                    ticket.location()
                )?;
            }
            Err(AttendantError::UnknownVehicleCategory(_)) => writeln!(
                self.output,
                "Invalid Vehicle Type! Please use only CAR, TRUCK, or BIKE."
            )?,
            Err(e) if e.is_lot_full() => {
                writeln!(self.output, "Parking is Full! Try again later.")?
            }
            Err(e) => writeln!(self.output, "Could not park: {e}")?,
        }
        Ok(true)
    }

    fn unpark<C: Clock>(&mut self, attendant: &mut Attendant<C>) -> io::Result<bool> {
        let Some(ticket_id) = self.prompt("Enter Ticket ID: ")? else {
            return Ok(false);
        };
        match attendant.unpark(&ticket_id) {
            Ok(ticket) => writeln!(self.output, "Unparked: {}", ticket.vehicle().plate())?,
            Err(e) if e.is_ticket_not_found() => writeln!(self.output, "Ticket Not Found")?,
            Err(AttendantError::Ledger(LedgerError::AlreadyRedeemed(_))) => {
                writeln!(self.output, "Ticket Already Used")?
            }
            Err(e) => writeln!(self.output, "Could not unpark: {e}")?,
        }
        Ok(true)
    }
}
