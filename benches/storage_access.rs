use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::hint::black_box;
use stridemat::blas::hemv;
use stridemat::{CIndex, ColMajor, FullStorage, Layout, UpLo};

fn make_random(n: usize, seed: u64) -> FullStorage<f64, ColMajor, CIndex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a: FullStorage<f64, ColMajor, CIndex> = FullStorage::with_value(n, n, 0.0);
    for x in a.data_mut().iter_mut() {
        *x = rng.sample(StandardNormal);
    }
    a
}

fn bench_element_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_access");
    for &n in &[64usize, 256] {
        let a = make_random(n, 42);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::new("checked_at", n), &a, |b, a| {
            b.iter(|| {
                let mut acc = 0.0;
                for r in 0..n as isize {
                    for col in 0..n as isize {
                        acc += *a.at(r, col);
                    }
                }
                black_box(acc)
            })
        });
        group.bench_with_input(BenchmarkId::new("flat_buffer", n), &a, |b, a| {
            b.iter(|| black_box(a.data().iter().sum::<f64>()))
        });
    }
    group.finish();
}

fn bench_hemv_generic(c: &mut Criterion) {
    let mut group = c.benchmark_group("hemv_generic");
    for &n in &[64usize, 256] {
        let a = make_random(n, 7);
        let x = vec![1.0f64; n];
        let mut y = vec![0.0f64; n];
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                hemv(
                    Layout::ColMajor,
                    UpLo::Upper,
                    n,
                    1.0,
                    a.data(),
                    a.leading_dimension(),
                    &x,
                    1,
                    0.0,
                    &mut y,
                    1,
                );
                black_box(y[0])
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_element_access, bench_hemv_generic);
criterion_main!(benches);
