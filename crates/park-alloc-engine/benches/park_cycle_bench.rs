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

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use park_alloc_core::category::VehicleCategory;
use park_alloc_engine::{attendant::Attendant, config::EngineConfig, engine::ParkingEngine};
use park_alloc_model::{lot::Lot, spot::Spot, vehicle::Vehicle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn build_lot(floors: usize, spots_per_floor: usize) -> Lot {
    let mut b = Lot::builder();
    for f in 0..floors {
        b.floor((0..spots_per_floor).map(|s| {
            let id = format!("F{f}-S{s}");
            match s % 3 {
                0 => Spot::compact(id),
                1 => Spot::large(id),
                _ => Spot::handicapped(id),
            }
        }));
    }
    b.build().expect("unique spot ids")
}

fn gen_vehicles(n: usize, rng: &mut impl Rng) -> Vec<Vehicle> {
    (0..n)
        .map(|i| {
            let category = VehicleCategory::ALL[rng.random_range(0..VehicleCategory::ALL.len())];
            Vehicle::new(format!("V{i}"), category)
        })
        .collect()
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("park_fill");
    for &(floors, per_floor) in &[(2usize, 30usize), (5, 200), (10, 1_000)] {
        let capacity = floors * per_floor;
        let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
        let vehicles = gen_vehicles(capacity, &mut rng);
        group.throughput(Throughput::Elements(capacity as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &vehicles,
            |b, vehicles| {
                b.iter_batched(
                    || ParkingEngine::new(build_lot(floors, per_floor), &EngineConfig::seeded(1)),
                    |mut engine| {
                        for v in vehicles {
                            let _ = black_box(engine.park(v.clone()));
                        }
                        engine
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("park_unpark_churn");
    let (floors, per_floor) = (5usize, 200usize);
    let mut attendant = Attendant::new(build_lot(floors, per_floor), &EngineConfig::seeded(2));
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for v in gen_vehicles(floors * per_floor / 2, &mut rng) {
        let _ = attendant.park_vehicle(v);
    }
    let vehicles = gen_vehicles(1_024, &mut rng);
    group.throughput(Throughput::Elements(vehicles.len() as u64));
    group.bench_function("cycle", |b| {
        b.iter(|| {
            for v in &vehicles {
                if let Ok(t) = attendant.park_vehicle(v.clone()) {
                    let _ = black_box(attendant.unpark_ticket(t.id()));
                }
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fill, bench_churn);
criterion_main!(benches);
