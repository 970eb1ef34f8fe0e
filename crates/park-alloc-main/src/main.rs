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

mod console;

use console::Console;
use park_alloc_engine::{attendant::Attendant, config::EngineConfig};
use park_alloc_model::{err::LayoutError, layout::LotLayout};
use std::{error::Error, io, path::Path};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_layout(path: Option<&Path>) -> Result<LotLayout, LayoutError> {
    match path {
        Some(path) => LotLayout::from_path(path),
        None => Ok(LotLayout::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    let path = std::env::args_os().nth(1);
    let layout = load_layout(path.as_deref().map(Path::new))?;
    let lot = layout.build_lot()?;
    info!(
        floors = lot.floors().len(),
        spots = lot.total_spots(),
        "Lot ready"
    );

    let mut attendant = Attendant::new(lot, &EngineConfig::default());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    console.run(&mut attendant)?;
    Ok(())
}
