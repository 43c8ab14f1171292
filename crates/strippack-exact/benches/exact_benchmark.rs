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


use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use strippack_exact::ExactSolver;
use strippack_model::instance::Instance;

const CAPACITY: i64 = 100;

fn random_instance(n: usize, seed: u64) -> Instance<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let sizes: Vec<i64> = (0..n).map(|_| rng.random_range(1..=CAPACITY)).collect();
    Instance::new(sizes, CAPACITY).expect("generated sizes are within capacity")
}

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_benchmark");

    for &n in &[8usize, 12, 16] {
        let instance = random_instance(n, 0xC0FFEE + n as u64);
        let mut solver = ExactSolver::preallocated(n);

        group.bench_with_input(BenchmarkId::new("uniform", n), &instance, |b, instance| {
            b.iter(|| black_box(solver.solve(black_box(instance))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact);
criterion_main!(benches);
